// SPDX-License-Identifier: MIT

//!
//! The event collection and the queries run against it
//!
//! A dataset is loaded once and never changes.  Every query borrows from it
//! and allocates a fresh result, so queries can be run from any number of
//! call sites at once.
//!

use crate::{Event, EventCategory, Regions, Significance, Viewport, zoom_config};
use bool_tag_expr::BoolTagExpr;
use log::{debug, trace, warn};
use serde::Serialize;
use std::{
    cmp::Reverse,
    collections::{BTreeSet, HashSet},
    fs,
    path::Path,
};
use strsim::osa_distance;
use thiserror::Error;

/// The default number of related events to suggest
pub const DEFAULT_RELATED_COUNT: usize = 5;

/// The default number of search results
pub const DEFAULT_SEARCH_LIMIT: usize = 12;

/// The worst search score (edits per query character) still counted as a
/// match
pub const SEARCH_THRESHOLD: f64 = 0.3;

/// Errors that can arise when loading a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Unable to read `{path}`: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Event ID `{0}` is used more than once")]
    DuplicateId(String),
}

/// Read a file, noting the path in any error
fn read_to_string(path: &Path) -> Result<String, DatasetError> {
    fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Load regions from a JSON array
pub fn regions_from_json(json: &str) -> Result<Regions, DatasetError> {
    let regions: Regions = serde_json::from_str(json)?;
    debug!("loaded {} regions", regions.len());
    Ok(regions)
}

/// Load regions from a JSON file
pub fn regions_from_path<P: AsRef<Path>>(path: P) -> Result<Regions, DatasetError> {
    regions_from_json(&read_to_string(path.as_ref())?)
}

/// How related two events are.  The score is the sum of:
///
/// - `3` if they share a category
/// - `2` if they share a region
/// - `3`, `2`, or `1` if they're under 100, 1,000, or 10,000 years apart
/// - `2` per shared tag
pub fn relatedness(a: &Event, b: &Event) -> u32 {
    let mut score = 0;

    if a.category() == b.category() {
        score += 3;
    }

    if a.region_id() == b.region_id() {
        score += 2;
    }

    let distance = (a.time_ybp() - b.time_ybp()).abs();
    score += if distance < 100.0 {
        3
    } else if distance < 1_000.0 {
        2
    } else if distance < 10_000.0 {
        1
    } else {
        0
    };

    score + 2 * a.shared_tag_count(b) as u32
}

/// The significance an event needs to be visible: the zoom tier's minimum,
/// raised (never lowered) by the override
pub fn effective_min_significance(
    viewport: &Viewport,
    min_significance_override: Option<Significance>,
) -> u8 {
    let tier_min = zoom_config(viewport.span()).min_significance;
    match min_significance_override {
        Some(min) => min.value().max(tier_min),
        None => tier_min,
    }
}

/// An immutable collection of events, kept in input order
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct EventDataset {
    events: Vec<Event>,
}

impl EventDataset {
    /// Create a dataset.  IDs must be unique.
    pub fn from(events: Vec<Event>) -> Result<Self, DatasetError> {
        let mut ids = HashSet::new();
        if let Some(duplicate) = events.iter().find(|event| !ids.insert(event.id())) {
            return Err(DatasetError::DuplicateId(duplicate.id().to_string()));
        }
        debug!("loaded {} events", events.len());
        Ok(EventDataset { events })
    }

    /// Load a dataset from a JSON array of events
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let events: Vec<Event> = serde_json::from_str(json)?;
        Self::from(events)
    }

    /// Load a dataset from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        Self::from_json(&read_to_string(path.as_ref())?)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn event_by_id(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id() == id)
    }

    /// The events that are inside the viewport (bounds inclusive), in an
    /// active category, and at least as significant as
    /// [`effective_min_significance`] requires.  Input order is kept.
    pub fn visible_events(
        &self,
        viewport: &Viewport,
        active_categories: &BTreeSet<EventCategory>,
        min_significance_override: Option<Significance>,
    ) -> Vec<&Event> {
        let min_significance = effective_min_significance(viewport, min_significance_override);

        let visible: Vec<&Event> = self
            .events
            .iter()
            .filter(|event| viewport.contains(event.time_ybp()))
            .filter(|event| active_categories.contains(&event.category()))
            .filter(|event| event.significance().value() >= min_significance)
            .collect();

        trace!(
            "{} of {} events visible (min significance {min_significance})",
            visible.len(),
            self.events.len()
        );
        visible
    }

    /// Up to `max_count` other events, most related first (see
    /// [`relatedness`]).  Equal scores keep their input order.
    pub fn related_events(&self, event: &Event, max_count: usize) -> Vec<&Event> {
        let mut scored: Vec<(u32, &Event)> = self
            .events
            .iter()
            .filter(|other| other.id() != event.id())
            .map(|other| (relatedness(event, other), other))
            .collect();

        // Stable, so ties stay in input order
        scored.sort_by_key(|(score, _)| Reverse(*score));

        scored
            .into_iter()
            .take(max_count)
            .map(|(_, other)| other)
            .collect()
    }

    /// Case-insensitive fuzzy search over names, descriptions, tags, and
    /// region IDs.  Events are ranked by their best score (see
    /// [`SEARCH_THRESHOLD`]); on a tie, the better name match comes first,
    /// then input order is kept.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Event> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, f64, &Event)> = self
            .events
            .iter()
            .filter_map(|event| {
                let name_score = fuzzy_score(&query, event.name());
                let score = [event.description(), event.region_id()]
                    .into_iter()
                    .chain(event.tags().iter().map(String::as_str))
                    .map(|text| fuzzy_score(&query, text))
                    .fold(name_score, f64::min);
                (score <= SEARCH_THRESHOLD).then_some((score, name_score, event))
            })
            .collect();
        scored.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
        debug!("{} events match `{query}`", scored.len());

        scored
            .into_iter()
            .take(limit)
            .map(|(_, _, event)| event)
            .collect()
    }

    /// The events whose tags match a boolean tag expression (e.g.
    /// `trade & !war`)
    pub fn matching_tag_expr(&self, bool_tag_expr: &BoolTagExpr) -> Vec<&Event> {
        let matching: Vec<&Event> = self
            .events
            .iter()
            .filter(|event| event.matches_bool_tag_expr(bool_tag_expr))
            .collect();
        if matching.is_empty() {
            warn!("no events match the tag expression");
        }
        matching
    }
}

/// How far `text` is from containing the (lowercase, non-empty) query: the
/// fewest edits (insertions, deletions, substitutions, or adjacent swaps)
/// turning the query into a stretch of the text, per query character.  An
/// exact substring scores 0.
fn fuzzy_score(query: &str, text: &str) -> f64 {
    let text = text.to_lowercase();
    if text.contains(query) {
        return 0.0;
    }

    let query_len = query.chars().count();
    let chars: Vec<char> = text.chars().collect();
    let shortest = query_len.saturating_sub(1).max(1);
    let distance = if chars.len() < shortest {
        osa_distance(query, &text)
    } else {
        (shortest..=(query_len + 1).min(chars.len()))
            .flat_map(|len| chars.windows(len))
            .map(|window| osa_distance(query, &window.iter().collect::<String>()))
            .min()
            .unwrap_or(query_len)
    };
    distance as f64 / query_len as f64
}

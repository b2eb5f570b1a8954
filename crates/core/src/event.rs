// SPDX-License-Identifier: MIT

//!
//! The Spacetime event type
//!

use crate::{Confidence, EventCategory, Significance, Ybp};
use bool_tag_expr::{BoolTagExpr, Node, Tag, TagValue, Tags};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors that can arise in relation to an [`Event`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EventError {
    #[error("The event ID cannot be empty")]
    EmptyId,

    #[error("The event name cannot be empty")]
    EmptyName,

    #[error("The event time `{0}` must be finite")]
    NotFinite(Ybp),

    #[error("The event ends (`{end}`) before it starts (`{start}`)")]
    EndsBeforeStart { start: Ybp, end: Ybp },

    #[error("Only future events have a simulation confidence")]
    ConfidenceOnPastEvent,

    #[error("Future events must have a simulation confidence")]
    FutureWithoutConfidence,
}

/// A historical, geological, or simulated future event
///
/// Events are read-only once created: a dataset is loaded once and only ever
/// queried.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique within a dataset
    id: String,

    name: String,

    description: String,

    /// When the event happened (or started)
    #[serde(rename = "yearYBP")]
    time_ybp: Ybp,

    /// When the event finished (if it spans time)
    #[serde(rename = "yearEndYBP", skip_serializing_if = "Option::is_none")]
    time_end_ybp: Option<Ybp>,

    /// The ID of the [`crate::Region`] the event belongs to
    region_id: String,

    category: EventCategory,

    significance: Significance,

    tags: BTreeSet<String>,

    /// Whether the event is simulated (i.e. after the present)
    is_future: bool,

    /// How likely a simulated event is (present only for future events)
    #[serde(skip_serializing_if = "Option::is_none")]
    simulation_confidence: Option<Confidence>,
}

/// The fields needed to create an [`Event`].  Use `Event::try_from` to get a
/// validated [`Event`].
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "yearYBP", alias = "timeYBP")]
    pub time_ybp: Ybp,
    #[serde(rename = "yearEndYBP", alias = "timeEndYBP", default)]
    pub time_end_ybp: Option<Ybp>,
    pub region_id: String,
    pub category: EventCategory,
    pub significance: Significance,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub is_future: bool,
    #[serde(default)]
    pub simulation_confidence: Option<Confidence>,
}

impl TryFrom<NewEvent> for Event {
    type Error = EventError;

    fn try_from(new: NewEvent) -> Result<Self, Self::Error> {
        if new.id.trim().is_empty() {
            return Err(EventError::EmptyId);
        }
        if new.name.trim().is_empty() {
            return Err(EventError::EmptyName);
        }
        if !new.time_ybp.is_finite() {
            return Err(EventError::NotFinite(new.time_ybp));
        }
        if let Some(end) = new.time_end_ybp {
            if !end.is_finite() {
                return Err(EventError::NotFinite(end));
            }
            if end < new.time_ybp {
                return Err(EventError::EndsBeforeStart {
                    start: new.time_ybp,
                    end,
                });
            }
        }
        match (new.is_future, new.simulation_confidence) {
            (true, None) => return Err(EventError::FutureWithoutConfidence),
            (false, Some(_)) => return Err(EventError::ConfidenceOnPastEvent),
            _ => (),
        }

        Ok(Event {
            id: new.id.trim().to_string(),
            name: new.name.trim().to_string(),
            description: new.description,
            time_ybp: new.time_ybp,
            time_end_ybp: new.time_end_ybp,
            region_id: new.region_id,
            category: new.category,
            significance: new.significance,
            tags: new.tags,
            is_future: new.is_future,
            simulation_confidence: new.simulation_confidence,
        })
    }
}

impl Event {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// When the event happened (or started)
    pub fn time_ybp(&self) -> Ybp {
        self.time_ybp
    }

    /// When the event finished, if it spans time
    pub fn time_end_ybp(&self) -> Option<Ybp> {
        self.time_end_ybp
    }

    pub fn region_id(&self) -> &str {
        &self.region_id
    }

    pub fn category(&self) -> EventCategory {
        self.category
    }

    pub fn significance(&self) -> Significance {
        self.significance
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn is_future(&self) -> bool {
        self.is_future
    }

    pub fn simulation_confidence(&self) -> Option<Confidence> {
        self.simulation_confidence
    }

    /// The number of tags this event shares with another
    pub fn shared_tag_count(&self, other: &Event) -> usize {
        self.tags.intersection(&other.tags).count()
    }

    /// Whether the event's tags match the boolean tag expression.  Tags that
    /// aren't valid tag values can never match.
    pub fn matches_bool_tag_expr(&self, bool_tag_expr: &BoolTagExpr) -> bool {
        let tags: Tags = self
            .tags
            .iter()
            .filter_map(|tag| TagValue::from(&tag.as_str()).ok())
            .map(|value| Tag::from(None, value))
            .collect();

        /// Evaluate a `BooleanTagExpr` tree against a list of `Tags`
        fn evaluate_in_one(expr: Node, tags: &Tags) -> bool {
            match expr {
                Node::And(l, r) => evaluate_in_one(*l, tags) && evaluate_in_one(*r, tags),
                Node::Or(l, r) => evaluate_in_one(*l, tags) || evaluate_in_one(*r, tags),
                Node::Not(e) => !evaluate_in_one(*e, tags),
                Node::Tag(tag) => tags.contains(&tag),
                // Constant nodes aren't produced when parsing tag expressions
                Node::Bool(_) => false,
            }
        }

        evaluate_in_one(bool_tag_expr.clone().into_node(), &tags)
    }
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let new = NewEvent::deserialize(deserializer)?;
        Event::try_from(new).map_err(serde::de::Error::custom)
    }
}

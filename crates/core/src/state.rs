// SPDX-License-Identifier: MIT

//!
//! The explicit application state
//!
//! The application owns a single [`AppState`] and passes it (or parts of it)
//! into the queries.  There is no global store.
//!

use crate::{
    EraJump, Event, EventCategory, EventDataset, Significance, Viewport, ViewportError, Ybp,
    clamp_viewport, zoom_config,
};
use log::{debug, warn};
use serde::Serialize;
use std::collections::BTreeSet;

/// The viewport, filters, and selection for one timeline
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Always clamped
    viewport: Viewport,

    active_categories: BTreeSet<EventCategory>,

    /// The user's significance floor (only applied when above the zoom
    /// tier's)
    min_significance: Significance,

    selected_event_id: Option<String>,

    hovered_event_id: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            viewport: Viewport::default(),
            active_categories: EventCategory::all(),
            min_significance: Significance::min(),
            selected_event_id: None,
            hovered_event_id: None,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Replace the viewport (it's clamped first)
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = clamp_viewport(viewport);
        debug!(
            "viewport set to [{}, {}] ({})",
            self.viewport.start_ybp(),
            self.viewport.end_ybp(),
            zoom_config(self.viewport.span()).label
        );
    }

    /// Replace the viewport with a navigated one, or keep the current one if
    /// the navigation is invalid
    fn navigate(
        &mut self,
        navigated: Result<Viewport, ViewportError>,
    ) -> Result<(), ViewportError> {
        match navigated {
            Ok(viewport) => {
                self.set_viewport(viewport);
                Ok(())
            }
            Err(e) => {
                warn!("ignoring invalid navigation: {e}");
                Err(e)
            }
        }
    }

    /// Change the pixel width the viewport is drawn across
    pub fn resize(&mut self, width: f64) -> Result<(), ViewportError> {
        self.navigate(self.viewport.with_width(width))
    }

    /// Zoom around the middle of the viewport (`factor > 1` zooms out)
    pub fn zoom_by(&mut self, factor: f64) -> Result<(), ViewportError> {
        self.navigate(self.viewport.zoom_by(factor))
    }

    pub fn pan_by(&mut self, years: Ybp) -> Result<(), ViewportError> {
        self.navigate(self.viewport.pan_by(years))
    }

    pub fn jump_to_era(&mut self, jump: EraJump) -> Result<(), ViewportError> {
        self.navigate(jump.apply(&self.viewport))
    }

    /// Centre the viewport on a time, keeping the span
    pub fn jump_to_time(&mut self, ybp: Ybp) -> Result<(), ViewportError> {
        self.navigate(self.viewport.centre_on(ybp))
    }

    /// Centre the viewport on the time under a click on the overview strip
    pub fn click_overview(&mut self, px: f64, overview_width: f64) -> Result<(), ViewportError> {
        self.navigate(self.viewport.centre_on_overview_click(px, overview_width))
    }

    pub fn active_categories(&self) -> &BTreeSet<EventCategory> {
        &self.active_categories
    }

    /// Turn a category on if it's off, or off if it's on
    pub fn toggle_category(&mut self, category: EventCategory) {
        if !self.active_categories.remove(&category) {
            self.active_categories.insert(category);
        }
    }

    /// Turn every category on or off
    pub fn set_all_categories(&mut self, active: bool) {
        self.active_categories = if active {
            EventCategory::all()
        } else {
            BTreeSet::new()
        };
    }

    pub fn min_significance(&self) -> Significance {
        self.min_significance
    }

    pub fn set_min_significance(&mut self, min_significance: Significance) {
        self.min_significance = min_significance;
    }

    pub fn selected_event_id(&self) -> Option<&str> {
        self.selected_event_id.as_deref()
    }

    /// Select an event, or clear the selection if it's already selected
    pub fn toggle_selected_event(&mut self, id: &str) {
        if self.selected_event_id.as_deref() == Some(id) {
            self.selected_event_id = None;
        } else {
            self.selected_event_id = Some(id.to_string());
        }
    }

    pub fn clear_selected_event(&mut self) {
        self.selected_event_id = None;
    }

    pub fn hovered_event_id(&self) -> Option<&str> {
        self.hovered_event_id.as_deref()
    }

    pub fn set_hovered_event_id(&mut self, id: Option<&str>) {
        self.hovered_event_id = id.map(str::to_string);
    }

    /// The significance override to pass to the queries: the user's floor if
    /// it's above the zoom tier's, otherwise none
    pub fn significance_override(&self) -> Option<Significance> {
        let tier_min = zoom_config(self.viewport.span()).min_significance;
        (self.min_significance.value() > tier_min).then_some(self.min_significance)
    }

    /// The events to draw for this state
    pub fn visible_events<'a>(&self, dataset: &'a EventDataset) -> Vec<&'a Event> {
        dataset.visible_events(
            &self.viewport,
            &self.active_categories,
            self.significance_override(),
        )
    }

    /// The selected event, if it's in the dataset
    pub fn selected_event<'a>(&self, dataset: &'a EventDataset) -> Option<&'a Event> {
        self.selected_event_id
            .as_deref()
            .and_then(|id| dataset.event_by_id(id))
    }
}

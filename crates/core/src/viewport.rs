// SPDX-License-Identifier: MIT

//!
//! The Spacetime viewport type
//!

use crate::{MAX_FUTURE_TIME, MIN_TIME, Ybp, overview_to_ybp};
use log::trace;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Zooming in stops at this span (the most granular tier ticks every year)
pub const MIN_SPAN_YEARS: Ybp = 1.0;

/// Errors that can arise in relation to a [`Viewport`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewportError {
    /// One of the values is NaN or infinite
    #[error("Viewport values must be finite")]
    NotFinite,

    /// The start isn't before the end
    #[error("Viewport start `{0}` must be before end `{1}`")]
    Inverted(Ybp, Ybp),

    /// The pixel width isn't positive
    #[error("Viewport width `{0}` must be greater than 0")]
    InvalidWidth(f64),

    /// The zoom factor isn't positive
    #[error("Zoom factor `{0}` must be finite and greater than 0")]
    InvalidZoomFactor(f64),
}

/// The visible interval of time and the pixel width it's drawn across
///
/// A viewport is always valid (`start_ybp < end_ybp`, `width > 0`) and always
/// inside `[MIN_TIME, MAX_FUTURE_TIME]`.  Viewports are never mutated in
/// place: every navigation method returns a new, clamped, viewport.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// The earliest visible time
    #[serde(rename = "startYBP")]
    start_ybp: Ybp,

    /// The latest visible time
    #[serde(rename = "endYBP")]
    end_ybp: Ybp,

    /// The width (in pixels) the viewport is drawn across
    width: f64,
}

impl Default for Viewport {
    /// Recent human history
    fn default() -> Self {
        Viewport {
            start_ybp: -6_000.0,
            end_ybp: 100.0,
            width: 1_200.0,
        }
    }
}

impl Viewport {
    /// Create a new, clamped, viewport if the values are valid
    pub fn from(start_ybp: Ybp, end_ybp: Ybp, width: f64) -> Result<Self, ViewportError> {
        if !(start_ybp.is_finite() && end_ybp.is_finite() && width.is_finite()) {
            return Err(ViewportError::NotFinite);
        }
        if start_ybp >= end_ybp {
            return Err(ViewportError::Inverted(start_ybp, end_ybp));
        }
        if width <= 0.0 {
            return Err(ViewportError::InvalidWidth(width));
        }
        let clamped = clamp_viewport(Viewport {
            start_ybp,
            end_ybp,
            width,
        });

        // A span below the float resolution at the floor collapses
        if clamped.start_ybp >= clamped.end_ybp {
            return Err(ViewportError::Inverted(clamped.start_ybp, clamped.end_ybp));
        }
        Ok(clamped)
    }

    /// The earliest visible time
    pub fn start_ybp(&self) -> Ybp {
        self.start_ybp
    }

    /// The latest visible time
    pub fn end_ybp(&self) -> Ybp {
        self.end_ybp
    }

    /// The width (in pixels) the viewport is drawn across
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The number of years visible
    pub fn span(&self) -> Ybp {
        viewport_span(self)
    }

    /// The time in the middle of the viewport
    pub fn midpoint(&self) -> Ybp {
        (self.start_ybp + self.end_ybp) / 2.0
    }

    /// Whether the time is visible (bounds inclusive)
    pub fn contains(&self, ybp: Ybp) -> bool {
        self.start_ybp <= ybp && ybp <= self.end_ybp
    }

    /// Whether any part of `[start_ybp, end_ybp]` is visible
    pub fn overlaps(&self, start_ybp: Ybp, end_ybp: Ybp) -> bool {
        end_ybp >= self.start_ybp && start_ybp <= self.end_ybp
    }

    /// The same time interval drawn across a different width
    pub fn with_width(&self, width: f64) -> Result<Self, ViewportError> {
        Viewport::from(self.start_ybp, self.end_ybp, width)
    }

    /// The same width showing a different time interval (clamped)
    pub fn with_range(&self, start_ybp: Ybp, end_ybp: Ybp) -> Result<Self, ViewportError> {
        Viewport::from(start_ybp, end_ybp, self.width)
    }

    /// Scale the span by `factor` around the midpoint (`factor > 1` zooms
    /// out).  The span never drops below [`MIN_SPAN_YEARS`].
    pub fn zoom_by(&self, factor: f64) -> Result<Self, ViewportError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(ViewportError::InvalidZoomFactor(factor));
        }
        let mid = self.midpoint();
        let half_span = (self.span() * factor).max(MIN_SPAN_YEARS) / 2.0;
        self.with_range(mid - half_span, mid + half_span)
    }

    /// Move the viewport by `years` (positive moves towards the future)
    pub fn pan_by(&self, years: Ybp) -> Result<Self, ViewportError> {
        self.with_range(self.start_ybp + years, self.end_ybp + years)
    }

    /// Centre the viewport on a time, keeping the span
    pub fn centre_on(&self, ybp: Ybp) -> Result<Self, ViewportError> {
        let half_span = self.span() / 2.0;
        self.with_range(ybp - half_span, ybp + half_span)
    }

    /// Centre the viewport on the time under a click on the overview strip
    pub fn centre_on_overview_click(
        &self,
        px: f64,
        overview_width: f64,
    ) -> Result<Self, ViewportError> {
        if !(overview_width.is_finite() && overview_width > 0.0) {
            return Err(ViewportError::InvalidWidth(overview_width));
        }
        self.centre_on(overview_to_ybp(px, overview_width))
    }
}

/// The number of years a viewport spans
pub fn viewport_span(viewport: &Viewport) -> Ybp {
    viewport.end_ybp - viewport.start_ybp
}

/// Force a viewport inside `[MIN_TIME, MAX_FUTURE_TIME]`, keeping its span
/// unless the span is larger than the whole legal range.
///
/// The clamp is two-pass rather than iterative:
///
/// 1. If the start is before [`MIN_TIME`], shift both bounds later so that
///    the start sits on the floor
/// 2. If the end is after [`MAX_FUTURE_TIME`], shift both bounds earlier so
///    that the end sits on the ceiling, then (only if that pushed the start
///    below the floor) pin the start to the floor
///
/// The second pin only triggers when the span exceeds the legal range, in
/// which case the result is exactly the legal range.  Clamping each bound
/// independently in a single pass would shrink spans that fit.
pub fn clamp_viewport(viewport: Viewport) -> Viewport {
    let span = viewport_span(&viewport);
    let mut start = viewport.start_ybp;
    let mut end = viewport.end_ybp;

    if start < MIN_TIME {
        start = MIN_TIME;
        end = start + span;
    }

    if end > MAX_FUTURE_TIME {
        end = MAX_FUTURE_TIME;
        start = end - span;
        if start < MIN_TIME {
            start = MIN_TIME;
        }
    }

    if start != viewport.start_ybp || end != viewport.end_ybp {
        trace!(
            "clamped viewport [{}, {}] to [{start}, {end}]",
            viewport.start_ybp, viewport.end_ybp
        );
    }

    Viewport {
        start_ybp: start,
        end_ybp: end,
        width: viewport.width,
    }
}

/// Used only by the custom deserialiser (to make it simpler)
#[derive(Deserialize)]
struct RawViewport {
    #[serde(rename = "startYBP")]
    start_ybp: Ybp,
    #[serde(rename = "endYBP")]
    end_ybp: Ybp,
    width: f64,
}

impl<'de> Deserialize<'de> for Viewport {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawViewport::deserialize(deserializer)?;
        Viewport::from(raw.start_ybp, raw.end_ybp, raw.width).map_err(serde::de::Error::custom)
    }
}

// SPDX-License-Identifier: MIT

//!
//! Mappings between time (YBP) and pixels
//!
//! Both scales are plain values holding the domain and range fixed when they
//! were created.  They are `Copy`, hold no mutable state, and expose a
//! `forward`/`inverse` pair of pure functions.
//!

use crate::{FULL_SPAN, MAX_FUTURE_TIME, Viewport, Ybp};
use serde::Serialize;

/// The exponent used by the overview strip.  Values below 1 give recent time
/// more room than deep time.
pub const OVERVIEW_EXPONENT: f64 = 0.15;

/// A linear mapping from a viewport's `[start_ybp, end_ybp]` onto `[0, width]`
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    start_ybp: Ybp,
    end_ybp: Ybp,
    width: f64,
}

impl LinearScale {
    /// Create the scale for a viewport.  The viewport must not be degenerate
    /// (i.e. `start_ybp < end_ybp`).
    pub fn from(viewport: &Viewport) -> Self {
        LinearScale {
            start_ybp: viewport.start_ybp(),
            end_ybp: viewport.end_ybp(),
            width: viewport.width(),
        }
    }

    /// YBP to pixel
    pub fn forward(&self, ybp: Ybp) -> f64 {
        (ybp - self.start_ybp) / (self.end_ybp - self.start_ybp) * self.width
    }

    /// Pixel to YBP
    pub fn inverse(&self, px: f64) -> Ybp {
        self.start_ybp + px / self.width * (self.end_ybp - self.start_ybp)
    }

    /// The pixel width of one year
    pub fn px_per_year(&self) -> f64 {
        self.width / (self.end_ybp - self.start_ybp)
    }
}

/// A power-law mapping from the whole legal range of time onto `[0, width]`,
/// used by the overview strip (minimap)
///
/// The curve is anchored at [`MAX_FUTURE_TIME`]: a time's distance back from
/// the ceiling is raised to [`OVERVIEW_EXPONENT`] and scaled so that the Big
/// Bang lands on `0` and the ceiling on `width`.  Each step back in time
/// therefore costs fewer pixels than the one before it.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct OverviewScale {
    width: f64,
}

impl OverviewScale {
    pub fn from(width: f64) -> Self {
        OverviewScale { width }
    }

    /// Sign-preserving power transform (so values a touch past the ceiling
    /// don't produce NaN)
    fn transform(value: f64) -> f64 {
        value.signum() * value.abs().powf(OVERVIEW_EXPONENT)
    }

    fn untransform(value: f64) -> f64 {
        value.signum() * value.abs().powf(1.0 / OVERVIEW_EXPONENT)
    }

    /// The transformed length of the whole legal range
    fn domain_max() -> f64 {
        Self::transform(FULL_SPAN)
    }

    /// YBP to pixel
    pub fn forward(&self, ybp: Ybp) -> f64 {
        let years_back = MAX_FUTURE_TIME - ybp;
        (1.0 - Self::transform(years_back) / Self::domain_max()) * self.width
    }

    /// Pixel to YBP
    pub fn inverse(&self, px: f64) -> Ybp {
        let years_back = Self::untransform((1.0 - px / self.width) * Self::domain_max());
        MAX_FUTURE_TIME - years_back
    }
}

/// Position a time on an overview strip of the given width
pub fn ybp_to_overview(ybp: Ybp, width: f64) -> f64 {
    OverviewScale::from(width).forward(ybp)
}

/// Find the time under a pixel of an overview strip of the given width
pub fn overview_to_ybp(px: f64, width: f64) -> Ybp {
    OverviewScale::from(width).inverse(px)
}

// SPDX-License-Identifier: MIT

//!
//! Axis ticks
//!

use crate::{Viewport, Ybp, zoom_config};
use log::debug;

/// More ticks than this and the interval is widened (by factors of 10)
pub const MAX_TICKS: usize = 1_000;

/// Round down to a multiple of `interval`
pub(crate) fn floor_to_interval(value: Ybp, interval: f64) -> Ybp {
    (value / interval).floor() * interval
}

/// Round up to a multiple of `interval`
pub(crate) fn ceiling_to_interval(value: Ybp, interval: f64) -> Ybp {
    (value / interval).ceil() * interval
}

/// The multiples of `interval` inside the viewport (bounds inclusive), in
/// ascending order.  A non-positive interval yields no ticks.
pub fn ticks(viewport: &Viewport, interval: f64) -> Vec<Ybp> {
    if !(interval > 0.0) || !interval.is_finite() {
        return Vec::new();
    }

    let mut interval = interval;
    while (viewport.span() / interval) as usize >= MAX_TICKS {
        interval *= 10.0;
        debug!("too many ticks, widening interval to {interval}");
    }

    let first_index = (ceiling_to_interval(viewport.start_ybp(), interval) / interval) as i64;
    let last_index = (floor_to_interval(viewport.end_ybp(), interval) / interval) as i64;

    (first_index..=last_index)
        .map(|index| index as f64 * interval)
        .collect()
}

/// The ticks for a viewport at the interval its zoom tier asks for
pub fn zoom_ticks(viewport: &Viewport) -> Vec<Ybp> {
    ticks(viewport, zoom_config(viewport.span()).tick_interval)
}

#[cfg(test)]
mod test {
    use super::*;

    fn viewport(start_ybp: Ybp, end_ybp: Ybp) -> Viewport {
        Viewport::from(start_ybp, end_ybp, 1_000.0).unwrap()
    }

    #[test]
    fn test_floor_to_interval() {
        assert_eq!(floor_to_interval(-150.0, 10.0), -150.0);
        assert_eq!(floor_to_interval(-151.0, 10.0), -160.0);
        assert_eq!(floor_to_interval(151.0, 10.0), 150.0);
        assert_eq!(floor_to_interval(159.0, 100.0), 100.0);
    }

    #[test]
    fn test_ceiling_to_interval() {
        assert_eq!(ceiling_to_interval(-150.0, 10.0), -150.0);
        assert_eq!(ceiling_to_interval(-159.0, 10.0), -150.0);
        assert_eq!(ceiling_to_interval(151.0, 10.0), 160.0);
        assert_eq!(ceiling_to_interval(-1_001.0, 1_000.0), -1_000.0);
    }

    #[test]
    fn inside_viewport() {
        assert_eq!(
            ticks(&viewport(-2_050.0, 1_000.0), 1_000.0),
            vec![-2_000.0, -1_000.0, 0.0, 1_000.0]
        );
        assert_eq!(ticks(&viewport(-5.5, -4.5), 1.0), vec![-5.0]);
        assert!(ticks(&viewport(-0.9, -0.1), 1.0).is_empty());
        assert!(ticks(&viewport(0.0, 10.0), 0.0).is_empty());
    }

    #[test]
    fn from_zoom_tier() {
        // Ancient tier ticks every 1,000 years
        let ticks = zoom_ticks(&viewport(-12_000.0, -500.0));
        assert_eq!(ticks.len(), 12);
        assert_eq!(ticks[0], -12_000.0);
        assert_eq!(ticks[11], -1_000.0);
    }

    #[test]
    fn widened_when_dense() {
        let ticks = ticks(&viewport(0.0, 100_000.0), 1.0);
        assert!(ticks.len() <= MAX_TICKS);
        assert_eq!(ticks[1] - ticks[0], 1_000.0);
    }
}

// SPDX-License-Identifier: MIT

//!
//! The Spacetime time coordinate (YBP, years before present)
//!
//! Times are stored as signed years relative to [`PRESENT_YEAR`].  Negative
//! values are in the past (the Big Bang is `-13_800_000_000`), positive values
//! are simulated future years.  The space is linear: there are no calendar
//! irregularities.
//!

/// A point in time, measured in years relative to [`PRESENT_YEAR`]
pub type Ybp = f64;

/// The calendar year (CE) that YBP `0` refers to
pub const PRESENT_YEAR: i64 = 2026;

pub const BIG_BANG_YBP: Ybp = -13_800_000_000.0;
pub const EARTH_FORMATION_YBP: Ybp = -4_540_000_000.0;
pub const FIRST_LIFE_YBP: Ybp = -3_800_000_000.0;
pub const CAMBRIAN_EXPLOSION_YBP: Ybp = -538_000_000.0;
pub const DINOSAUR_EXTINCTION_YBP: Ybp = -66_000_000.0;
pub const FIRST_HUMANS_YBP: Ybp = -300_000.0;
pub const AGRICULTURE_YBP: Ybp = -12_000.0;
pub const BRONZE_AGE_YBP: Ybp = -5_300.0;
pub const CLASSICAL_ERA_YBP: Ybp = -2_500.0;
pub const MEDIEVAL_ERA_YBP: Ybp = -1_500.0;
pub const EARLY_MODERN_YBP: Ybp = -500.0;

/// Roughly 1800 CE
pub const MODERN_ERA_YBP: Ybp = -226.0;

/// Everything after this point is simulated
pub const SIMULATION_BOUNDARY_YBP: Ybp = 0.0;

/// The earliest time any viewport may show
pub const MIN_TIME: Ybp = BIG_BANG_YBP;

/// The latest (simulated) time any viewport may show
pub const MAX_FUTURE_TIME: Ybp = 1_000.0;

/// The full legal span of time, `MAX_FUTURE_TIME - MIN_TIME`
pub const FULL_SPAN: Ybp = MAX_FUTURE_TIME - MIN_TIME;

/// Convert a YBP value into a calendar year (negative values are BCE)
pub fn ybp_to_ce(ybp: Ybp) -> f64 {
    PRESENT_YEAR as f64 + ybp
}

/// Convert a calendar year (negative values are BCE) into a YBP value
pub fn ce_to_ybp(ce: f64) -> Ybp {
    ce - PRESENT_YEAR as f64
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ce_conversions() {
        assert_eq!(ybp_to_ce(0.0), 2026.0);
        assert_eq!(ybp_to_ce(-2026.0), 0.0);
        assert_eq!(ce_to_ybp(1066.0), -960.0);
        assert_eq!(ce_to_ybp(ybp_to_ce(-12_345.0)), -12_345.0);
    }

    #[test]
    fn bounds() {
        assert!(MIN_TIME < SIMULATION_BOUNDARY_YBP);
        assert!(SIMULATION_BOUNDARY_YBP < MAX_FUTURE_TIME);
        assert_eq!(FULL_SPAN, 13_800_001_000.0);
    }
}

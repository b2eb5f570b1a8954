// SPDX-License-Identifier: MIT

//!
//! Bounded values attached to events: significance and simulation confidence
//!

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// The lowest significance an event can have
pub const MIN_SIGNIFICANCE: u8 = 1;

/// The highest significance an event can have
pub const MAX_SIGNIFICANCE: u8 = 5;

/// Errors that can arise in relation to a [`Significance`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignificanceError {
    #[error("Significance `{0}` is not allowed (must be 1 <= significance <= 5)")]
    OutOfRange(i64),
}

/// Errors that can arise in relation to a [`Confidence`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfidenceError {
    #[error("Confidence `{0}` is not allowed (must be 0 <= confidence <= 1)")]
    OutOfRange(f64),
}

/// How important an event is, from 1 (minor) to 5 (pivotal)
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Significance(u8);

/// How likely a simulated (future) event is, from 0 to 1
#[derive(derive_more::Display, Serialize, PartialEq, PartialOrd, Clone, Copy, Debug)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Significance {
    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn min() -> Self {
        Significance(MIN_SIGNIFICANCE)
    }

    pub fn max() -> Self {
        Significance(MAX_SIGNIFICANCE)
    }
}

impl Confidence {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<i64> for Significance {
    type Error = SignificanceError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_SIGNIFICANCE as i64..=MAX_SIGNIFICANCE as i64).contains(&value) {
            Ok(Significance(value as u8))
        } else {
            Err(SignificanceError::OutOfRange(value))
        }
    }
}

impl TryFrom<f64> for Confidence {
    type Error = ConfidenceError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if (0.0..=1.0).contains(&value) {
            Ok(Confidence(value))
        } else {
            Err(ConfidenceError::OutOfRange(value))
        }
    }
}

impl<'de> Deserialize<'de> for Significance {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Significance::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Confidence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Confidence::try_from(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use spacetime_macros::significance;

    #[test]
    fn significance_from() {
        assert!(Significance::try_from(0_i64).is_err());
        assert!(Significance::try_from(6_i64).is_err());
        assert!(Significance::try_from(-3_i64).is_err());
        assert_eq!(Significance::try_from(1_i64).unwrap(), Significance::min());
        assert_eq!(Significance::try_from(5_i64).unwrap(), Significance::max());
        assert_eq!(significance!(3).value(), 3);
        assert!(significance!(2) < significance!(4));
    }

    #[test]
    fn confidence_from() {
        assert!(Confidence::try_from(-0.1_f64).is_err());
        assert!(Confidence::try_from(1.01_f64).is_err());
        assert!(Confidence::try_from(f64::NAN).is_err());
        assert_eq!(Confidence::try_from(0.25_f64).unwrap().value(), 0.25);
    }

    #[test]
    fn deserialisation() {
        let significance: Significance = serde_json::from_str("4").unwrap();
        assert_eq!(significance, significance!(4));
        assert!(serde_json::from_str::<Significance>("9").is_err());
        assert!(serde_json::from_str::<Confidence>("1.5").is_err());
        assert_eq!(serde_json::to_string(&significance!(2)).unwrap(), "2");
    }
}

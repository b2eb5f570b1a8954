// SPDX-License-Identifier: MIT

//!
//! Zoom tiers
//!
//! A viewport's span (in years) selects exactly one [`ZoomConfig`].  The tier
//! decides how dates are labelled, how far apart axis ticks are, and the
//! minimum [`crate::Significance`] an event needs to be shown so that zoomed
//! out views aren't swamped by minor events.
//!

use crate::Ybp;
use serde::{Deserialize, Serialize};

/// The discrete zoom tiers, widest first
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ZoomLevel {
    /// The full 13.8 billion years
    Cosmic,
    /// Billions of years
    Galactic,
    /// Hundreds of millions of years
    Geological,
    /// Tens of millions of years
    Paleozoic,
    /// Millions of years
    Cenozoic,
    /// Hundreds of thousands of years
    Prehistoric,
    /// Thousands of years
    Ancient,
    /// Hundreds of years
    Historical,
    /// Decades
    Modern,
    /// Individual years
    Detailed,
}

/// How dates are labelled at a given zoom tier
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LabelFormat {
    /// Billions of years ago
    Bya,
    /// Millions of years ago
    Mya,
    /// Thousands of years ago
    Kya,
    /// Calendar years, with BCE or CE
    BceCe,
    /// Calendar years
    Ce,
    /// Individual years
    Year,
}

/// The configuration for a single zoom tier
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    pub level: ZoomLevel,
    pub label: &'static str,

    /// The smallest span (inclusive) that selects this tier
    pub min_span_years: f64,

    /// The largest span (exclusive) that selects this tier
    pub max_span_years: f64,

    /// The distance between axis ticks
    pub tick_interval: f64,

    /// Events less significant than this are hidden at this tier
    pub min_significance: u8,

    pub label_format: LabelFormat,
}

/// All zoom tiers, ordered widest first.  The tiers partition `[0, ∞)`.
#[rustfmt::skip]
pub static ZOOM_CONFIGS: [ZoomConfig; 10] = [
    ZoomConfig { level: ZoomLevel::Cosmic, label: "Cosmic", min_span_years: 5_000_000_000.0, max_span_years: f64::INFINITY, tick_interval: 1_000_000_000.0, min_significance: 5, label_format: LabelFormat::Bya },
    ZoomConfig { level: ZoomLevel::Galactic, label: "Galactic", min_span_years: 1_000_000_000.0, max_span_years: 5_000_000_000.0, tick_interval: 500_000_000.0, min_significance: 5, label_format: LabelFormat::Bya },
    ZoomConfig { level: ZoomLevel::Geological, label: "Geological", min_span_years: 100_000_000.0, max_span_years: 1_000_000_000.0, tick_interval: 50_000_000.0, min_significance: 4, label_format: LabelFormat::Mya },
    ZoomConfig { level: ZoomLevel::Paleozoic, label: "Paleozoic", min_span_years: 10_000_000.0, max_span_years: 100_000_000.0, tick_interval: 10_000_000.0, min_significance: 4, label_format: LabelFormat::Mya },
    ZoomConfig { level: ZoomLevel::Cenozoic, label: "Cenozoic", min_span_years: 1_000_000.0, max_span_years: 10_000_000.0, tick_interval: 1_000_000.0, min_significance: 3, label_format: LabelFormat::Mya },
    ZoomConfig { level: ZoomLevel::Prehistoric, label: "Prehistoric", min_span_years: 50_000.0, max_span_years: 1_000_000.0, tick_interval: 100_000.0, min_significance: 3, label_format: LabelFormat::Kya },
    ZoomConfig { level: ZoomLevel::Ancient, label: "Ancient", min_span_years: 2_000.0, max_span_years: 50_000.0, tick_interval: 1_000.0, min_significance: 2, label_format: LabelFormat::BceCe },
    ZoomConfig { level: ZoomLevel::Historical, label: "Historical", min_span_years: 200.0, max_span_years: 2_000.0, tick_interval: 100.0, min_significance: 2, label_format: LabelFormat::BceCe },
    ZoomConfig { level: ZoomLevel::Modern, label: "Modern", min_span_years: 20.0, max_span_years: 200.0, tick_interval: 10.0, min_significance: 1, label_format: LabelFormat::Ce },
    ZoomConfig { level: ZoomLevel::Detailed, label: "Detailed", min_span_years: 0.0, max_span_years: 20.0, tick_interval: 1.0, min_significance: 1, label_format: LabelFormat::Year },
];

/// Find the zoom tier for a span (in years).  The tiers are scanned widest
/// first and the first whose floor is at or below the span wins.  Spans below
/// every floor (e.g. negative or NaN) get the most granular tier.
pub fn zoom_config(span_years: Ybp) -> &'static ZoomConfig {
    ZOOM_CONFIGS
        .iter()
        .find(|config| span_years >= config.min_span_years)
        .unwrap_or(&ZOOM_CONFIGS[ZOOM_CONFIGS.len() - 1])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tiers_are_contiguous() {
        for pair in ZOOM_CONFIGS.windows(2) {
            assert_eq!(pair[0].min_span_years, pair[1].max_span_years);
            assert!(pair[0].level < pair[1].level);
        }
        assert_eq!(ZOOM_CONFIGS[ZOOM_CONFIGS.len() - 1].min_span_years, 0.0);
        assert!(ZOOM_CONFIGS[0].max_span_years.is_infinite());
    }

    #[test]
    fn ancient_tier() {
        let config = zoom_config(11_500.0);
        assert_eq!(config.level, ZoomLevel::Ancient);
        assert_eq!(config.label, "Ancient");
        assert_eq!(config.min_significance, 2);
        assert_eq!(config.label_format, LabelFormat::BceCe);
    }

    #[test]
    fn tier_boundaries() {
        // Floors are inclusive
        assert_eq!(zoom_config(2_000.0).level, ZoomLevel::Ancient);
        assert_eq!(zoom_config(1_999.9).level, ZoomLevel::Historical);
        assert_eq!(zoom_config(5_000_000_000.0).level, ZoomLevel::Cosmic);
        assert_eq!(zoom_config(13_800_001_000.0).level, ZoomLevel::Cosmic);
        assert_eq!(zoom_config(19.0).level, ZoomLevel::Detailed);
    }

    #[test]
    fn degenerate_spans() {
        assert_eq!(zoom_config(0.0).level, ZoomLevel::Detailed);
        assert_eq!(zoom_config(-10.0).level, ZoomLevel::Detailed);
        assert_eq!(zoom_config(f64::NAN).level, ZoomLevel::Detailed);
    }

    #[test]
    fn monotonic_in_span() {
        let spans = [
            0.5, 10.0, 50.0, 500.0, 5_000.0, 80_000.0, 2e6, 2e7, 2e8, 2e9, 1e10,
        ];
        for pair in spans.windows(2) {
            let narrow = zoom_config(pair[0]);
            let wide = zoom_config(pair[1]);
            assert!(narrow.min_span_years <= wide.min_span_years);
            assert!(narrow.min_significance <= wide.min_significance);
        }
    }
}

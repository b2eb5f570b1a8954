// SPDX-License-Identifier: MIT

//!
//! Named eras: the background bands drawn behind the timeline, and the fixed
//! jump targets used for quick navigation
//!

use crate::{
    AGRICULTURE_YBP, BIG_BANG_YBP, DINOSAUR_EXTINCTION_YBP, EARTH_FORMATION_YBP, FIRST_HUMANS_YBP,
    FIRST_LIFE_YBP, LinearScale, MODERN_ERA_YBP, SIMULATION_BOUNDARY_YBP, Viewport, ViewportError,
    Ybp,
};
use serde::{Deserialize, Serialize};

/// Bands narrower than this (in pixels) aren't drawn
const MIN_BAND_WIDTH_PX: f64 = 1.0;

/// Bands wider than this (in pixels) have room for their name
const MIN_LABELLED_BAND_WIDTH_PX: f64 = 80.0;

/// A named band of time
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Era {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "startYBP")]
    pub start_ybp: Ybp,
    #[serde(rename = "endYBP")]
    pub end_ybp: Ybp,
    #[serde(rename = "color")]
    pub colour: &'static str,
}

/// The era bands, oldest first
#[rustfmt::skip]
pub static ERAS: [Era; 11] = [
    Era { id: "cosmic", name: "Cosmic Era", start_ybp: -13_800_000_000.0, end_ybp: -4_540_000_000.0, colour: "rgba(88, 28, 135, 0.15)" },
    Era { id: "hadean", name: "Hadean / Archean", start_ybp: -4_540_000_000.0, end_ybp: -2_500_000_000.0, colour: "rgba(153, 27, 27, 0.15)" },
    Era { id: "proterozoic", name: "Proterozoic", start_ybp: -2_500_000_000.0, end_ybp: -538_000_000.0, colour: "rgba(120, 53, 15, 0.15)" },
    Era { id: "paleozoic", name: "Paleozoic", start_ybp: -538_000_000.0, end_ybp: -252_000_000.0, colour: "rgba(21, 94, 117, 0.15)" },
    Era { id: "mesozoic", name: "Mesozoic", start_ybp: -252_000_000.0, end_ybp: -66_000_000.0, colour: "rgba(22, 101, 52, 0.15)" },
    Era { id: "cenozoic", name: "Cenozoic", start_ybp: -66_000_000.0, end_ybp: -12_000.0, colour: "rgba(161, 98, 7, 0.15)" },
    Era { id: "ancient", name: "Ancient Civilizations", start_ybp: -12_000.0, end_ybp: -1_500.0, colour: "rgba(180, 83, 9, 0.15)" },
    Era { id: "medieval", name: "Medieval Period", start_ybp: -1_500.0, end_ybp: -500.0, colour: "rgba(55, 65, 81, 0.15)" },
    Era { id: "earlymodern", name: "Early Modern", start_ybp: -500.0, end_ybp: -226.0, colour: "rgba(30, 64, 175, 0.15)" },
    Era { id: "modern", name: "Modern Era", start_ybp: -226.0, end_ybp: 0.0, colour: "rgba(79, 70, 229, 0.15)" },
    Era { id: "future", name: "Cybernetics Simulation", start_ybp: 0.0, end_ybp: 1_000.0, colour: "rgba(236, 72, 153, 0.1)" },
];

/// The eras that touch the viewport (bounds inclusive), oldest first
pub fn eras_in_viewport(viewport: &Viewport) -> Vec<&'static Era> {
    ERAS.iter()
        .filter(|era| viewport.overlaps(era.start_ybp, era.end_ybp))
        .collect()
}

/// Where an era band sits on screen
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct EraBand {
    pub era: &'static Era,

    /// Left edge, clipped to the viewport
    pub x1: f64,

    /// Right edge, clipped to the viewport
    pub x2: f64,

    /// Whether the band is wide enough to carry its name
    pub labelled: bool,
}

/// The on-screen bands for the eras in the viewport.  Bands under a pixel
/// wide are left out.
pub fn era_bands(viewport: &Viewport) -> Vec<EraBand> {
    let scale = LinearScale::from(viewport);
    eras_in_viewport(viewport)
        .into_iter()
        .filter_map(|era| {
            let x1 = scale.forward(era.start_ybp).max(0.0);
            let x2 = scale.forward(era.end_ybp).min(viewport.width());
            (x2 - x1 >= MIN_BAND_WIDTH_PX).then_some(EraBand {
                era,
                x1,
                x2,
                labelled: x2 - x1 > MIN_LABELLED_BAND_WIDTH_PX,
            })
        })
        .collect()
}

/// The pixel position of the simulation boundary, if it's on screen
pub fn simulation_boundary_x(viewport: &Viewport) -> Option<f64> {
    let x = LinearScale::from(viewport).forward(SIMULATION_BOUNDARY_YBP);
    (0.0..=viewport.width()).contains(&x).then_some(x)
}

/// The quick navigation targets
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum EraJump {
    BigBang,
    Earth,
    Life,
    Dinosaurs,
    Humans,
    Civilization,
    Modern,
    Future,
}

impl EraJump {
    pub const ALL: [EraJump; 8] = [
        EraJump::BigBang,
        EraJump::Earth,
        EraJump::Life,
        EraJump::Dinosaurs,
        EraJump::Humans,
        EraJump::Civilization,
        EraJump::Modern,
        EraJump::Future,
    ];

    /// The `(start_ybp, end_ybp)` the jump shows
    pub fn range(&self) -> (Ybp, Ybp) {
        match self {
            EraJump::BigBang => (BIG_BANG_YBP, -10_000_000_000.0),
            EraJump::Earth => (EARTH_FORMATION_YBP - 200_000_000.0, FIRST_LIFE_YBP),
            EraJump::Life => (FIRST_LIFE_YBP - 200_000_000.0, -500_000_000.0),
            EraJump::Dinosaurs => (-252_000_000.0, DINOSAUR_EXTINCTION_YBP + 5_000_000.0),
            EraJump::Humans => (FIRST_HUMANS_YBP - 50_000.0, AGRICULTURE_YBP),
            EraJump::Civilization => (AGRICULTURE_YBP, -500.0),
            EraJump::Modern => (MODERN_ERA_YBP, 10.0),
            EraJump::Future => (-10.0, 200.0),
        }
    }

    /// The viewport the jump shows, keeping the current width
    pub fn apply(&self, viewport: &Viewport) -> Result<Viewport, ViewportError> {
        let (start_ybp, end_ybp) = self.range();
        viewport.with_range(start_ybp, end_ybp)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn eras_are_contiguous() {
        for pair in ERAS.windows(2) {
            assert_eq!(pair[0].end_ybp, pair[1].start_ybp);
        }
        assert_eq!(ERAS[0].start_ybp, crate::MIN_TIME);
        assert_eq!(ERAS[ERAS.len() - 1].end_ybp, crate::MAX_FUTURE_TIME);
    }

    #[test]
    fn in_viewport() {
        let viewport = Viewport::from(-12_000.0, -500.0, 1_000.0).unwrap();
        let ids: Vec<&str> = eras_in_viewport(&viewport).iter().map(|era| era.id).collect();
        assert_eq!(ids, vec!["cenozoic", "ancient", "medieval", "earlymodern"]);
    }

    #[test]
    fn bands() {
        let viewport = Viewport::from(-12_000.0, -500.0, 1_150.0).unwrap();
        let bands = era_bands(&viewport);

        // Cenozoic and Early Modern only touch the edges (0px wide)
        let ids: Vec<&str> = bands.iter().map(|band| band.era.id).collect();
        assert_eq!(ids, vec!["ancient", "medieval"]);

        // 10 years per pixel
        assert_eq!(bands[0].x1, 0.0);
        assert!((bands[0].x2 - 1_050.0).abs() < 1e-9);
        assert!(bands[0].labelled);
        assert!((bands[1].x1 - 1_050.0).abs() < 1e-9);
        assert_eq!(bands[1].x2, 1_150.0);
        assert!(bands[1].labelled);
    }

    #[test]
    fn simulation_boundary() {
        let viewport = Viewport::from(-100.0, 100.0, 200.0).unwrap();
        assert_eq!(simulation_boundary_x(&viewport), Some(100.0));

        let viewport = Viewport::from(-1_000.0, -100.0, 200.0).unwrap();
        assert_eq!(simulation_boundary_x(&viewport), None);
    }

    #[test]
    fn jumps_stay_in_range() {
        let viewport = Viewport::default();
        for jump in EraJump::ALL {
            let (start_ybp, end_ybp) = jump.range();
            let jumped = jump.apply(&viewport).unwrap();
            assert!(start_ybp < end_ybp);
            assert!(jumped.start_ybp() >= crate::MIN_TIME);
            assert!(jumped.end_ybp() <= crate::MAX_FUTURE_TIME);
            assert_eq!(jumped.width(), viewport.width());
        }

        let jumped = EraJump::Humans.apply(&viewport).unwrap();
        assert_eq!(jumped.start_ybp(), -350_000.0);
        assert_eq!(jumped.end_ybp(), -12_000.0);
    }
}

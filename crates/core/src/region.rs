// SPDX-License-Identifier: MIT

//!
//! Regions and their era-appropriate names
//!

use crate::{Viewport, Ybp};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to a [`Region`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegionError {
    #[error("Region `{0}` has no names")]
    NoNames(String),

    #[error("Region name `{name}` must start (`{start}`) before it ends (`{end}`)")]
    InvertedName { name: String, start: Ybp, end: Ybp },
}

/// What a region is called during `[start_ybp, end_ybp)`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RegionEraName {
    pub name: String,

    #[serde(rename = "startYBP")]
    pub start_ybp: Ybp,

    #[serde(rename = "endYBP")]
    pub end_ybp: Ybp,
}

impl RegionEraName {
    /// Whether the year falls in `[start_ybp, end_ybp)`
    pub fn contains(&self, year_ybp: Ybp) -> bool {
        self.start_ybp <= year_ybp && year_ybp < self.end_ybp
    }
}

/// A geographic row on the timeline
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    id: String,

    /// Rows are drawn in ascending display order
    display_order: u32,

    /// Ordered, non-overlapping names (never empty)
    names: Vec<RegionEraName>,

    #[serde(rename = "color")]
    colour: String,
}

impl Region {
    /// Create a region if the names are valid
    pub fn from<S: ToString>(
        id: S,
        display_order: u32,
        names: Vec<RegionEraName>,
        colour: S,
    ) -> Result<Self, RegionError> {
        let id = id.to_string();
        if names.is_empty() {
            return Err(RegionError::NoNames(id));
        }
        if let Some(inverted) = names.iter().find(|name| name.start_ybp >= name.end_ybp) {
            return Err(RegionError::InvertedName {
                name: inverted.name.clone(),
                start: inverted.start_ybp,
                end: inverted.end_ybp,
            });
        }
        Ok(Region {
            id,
            display_order,
            names,
            colour: colour.to_string(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_order(&self) -> u32 {
        self.display_order
    }

    pub fn names(&self) -> &[RegionEraName] {
        &self.names
    }

    pub fn colour(&self) -> &str {
        &self.colour
    }

    /// The name in use during the year, if any
    pub fn era_name(&self, year_ybp: Ybp) -> Option<&RegionEraName> {
        self.names.iter().find(|name| name.contains(year_ybp))
    }

    /// The name to show for the year.  Years not covered by any name get the
    /// *last* name, including years before the first name begins.
    pub fn display_name(&self, year_ybp: Ybp) -> &str {
        match self.era_name(year_ybp).or(self.names.last()) {
            Some(name) => &name.name,
            None => &self.id,
        }
    }

    /// Whether any of the region's names overlap the viewport
    pub fn is_visible_in(&self, viewport: &Viewport) -> bool {
        self.names
            .iter()
            .any(|name| name.end_ybp > viewport.start_ybp() && name.start_ybp < viewport.end_ybp())
    }
}

/// Used only by the custom deserialiser (to make it simpler)
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRegion {
    id: String,
    display_order: u32,
    names: Vec<RegionEraName>,
    #[serde(alias = "colour")]
    color: String,
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawRegion::deserialize(deserializer)?;
        Region::from(raw.id, raw.display_order, raw.names, raw.color)
            .map_err(serde::de::Error::custom)
    }
}

/// Every region, in input order
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct Regions(Vec<Region>);

impl Regions {
    pub fn from(regions: Vec<Region>) -> Self {
        Regions(regions)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn region_by_id(&self, region_id: &str) -> Option<&Region> {
        self.0.iter().find(|region| region.id == region_id)
    }

    /// The name to show for a region at a year.  Unknown regions are shown
    /// by their ID.
    pub fn display_name<'a>(&'a self, region_id: &'a str, year_ybp: Ybp) -> &'a str {
        match self.region_by_id(region_id) {
            Some(region) => region.display_name(year_ybp),
            None => region_id,
        }
    }

    /// The regions with a name overlapping the viewport, in display order
    pub fn regions_for_viewport(&self, viewport: &Viewport) -> Vec<&Region> {
        let mut regions: Vec<&Region> = self
            .0
            .iter()
            .filter(|region| region.is_visible_in(viewport))
            .collect();
        regions.sort_by_key(|region| region.display_order);
        regions
    }
}

impl<'de> Deserialize<'de> for Regions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Regions(Vec::<Region>::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::test::load_jsonc_strip_leading_comment_lines;
    use std::{fs, path::PathBuf};

    fn era_name(name: &str, start_ybp: Ybp, end_ybp: Ybp) -> RegionEraName {
        RegionEraName {
            name: name.to_string(),
            start_ybp,
            end_ybp,
        }
    }

    fn oceania() -> Region {
        Region::from(
            "oceania",
            9,
            vec![
                era_name("Sahul", -65_000.0, -256.0),
                era_name("Oceania", -256.0, 1_000.0),
            ],
            "#14b8a6",
        )
        .unwrap()
    }

    fn eurasia_west() -> Region {
        Region::from(
            "eurasia-west",
            4,
            vec![
                era_name("Laurasia (West)", -538_000_000.0, -66_000_000.0),
                era_name("Fertile Crescent", -12_000.0, -3_500.0),
                era_name("Rome / Greece", -3_500.0, -1_550.0),
            ],
            "#3b82f6",
        )
        .unwrap()
    }

    #[test]
    fn from() {
        assert_eq!(
            Region::from("empty", 0, vec![], "#000000"),
            Err(RegionError::NoNames(String::from("empty")))
        );
        assert!(
            Region::from("bad", 0, vec![era_name("Bad", 0.0, 0.0)], "#000000").is_err()
        );
    }

    #[test]
    fn display_name() {
        let region = oceania();
        assert_eq!(region.display_name(-10_000.0), "Sahul");
        assert_eq!(region.display_name(-256.0), "Oceania");
        assert_eq!(region.display_name(0.0), "Oceania");

        // Before the first name falls back to the last name
        assert_eq!(region.display_name(-100_000.0), "Oceania");
        assert!(region.era_name(-100_000.0).is_none());

        // So does a gap between names, and the (exclusive) end of the last
        let region = eurasia_west();
        assert_eq!(region.display_name(-1_000_000.0), "Rome / Greece");
        assert_eq!(region.display_name(-1_550.0), "Rome / Greece");
        assert_eq!(region.display_name(-5_000.0), "Fertile Crescent");
    }

    #[test]
    fn lookups() {
        let regions = Regions::from(vec![oceania(), eurasia_west()]);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions.display_name("oceania", -300.0), "Sahul");
        assert_eq!(regions.display_name("atlantis", -300.0), "atlantis");
        assert!(regions.region_by_id("eurasia-west").is_some());
        assert!(regions.region_by_id("atlantis").is_none());
    }

    #[test]
    fn regions_for_viewport() {
        let regions = Regions::from(vec![oceania(), eurasia_west()]);

        // Both visible, sorted by display order
        let viewport = Viewport::from(-6_000.0, 100.0, 1_000.0).unwrap();
        let visible: Vec<&str> = regions
            .regions_for_viewport(&viewport)
            .iter()
            .map(|region| region.id())
            .collect();
        assert_eq!(visible, vec!["eurasia-west", "oceania"]);

        // Only eurasia-west has a name this far back
        let viewport = Viewport::from(-200_000_000.0, -100_000_000.0, 1_000.0).unwrap();
        let visible = regions.regions_for_viewport(&viewport);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id(), "eurasia-west");

        // Touching an (exclusive) end isn't overlapping
        let viewport = Viewport::from(-1_550.0, -1_000.0, 1_000.0).unwrap();
        let visible = regions.regions_for_viewport(&viewport);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id(), "oceania");
    }

    #[test]
    fn deserialisation() {
        let path_to_test_data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test-data");

        for entry in fs::read_dir(path_to_test_data.join("regions/valid")).unwrap() {
            let path = entry.unwrap().path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "jsonc") {
                let json_content = load_jsonc_strip_leading_comment_lines(&path);
                let regions: Result<Regions, serde_json::Error> =
                    serde_json::from_str(&json_content);
                assert!(regions.is_ok(), "{:?}", regions.err());
            }
        }

        for entry in fs::read_dir(path_to_test_data.join("regions/invalid")).unwrap() {
            let path = entry.unwrap().path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "jsonc") {
                let json_content = load_jsonc_strip_leading_comment_lines(&path);
                let regions: Result<Regions, serde_json::Error> =
                    serde_json::from_str(&json_content);
                assert!(regions.is_err());
            }
        }
    }
}

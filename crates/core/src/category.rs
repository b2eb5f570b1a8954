// SPDX-License-Identifier: MIT

//!
//! Event categories
//!

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The closed set of event categories
#[derive(derive_more::Display, Serialize, Deserialize)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventCategory {
    Cosmic,
    Geological,
    Biological,
    Political,
    Military,
    Technological,
    Cultural,
    Economic,
    Demographic,
    Environmental,
}

impl EventCategory {
    /// Every category
    pub const ALL: [EventCategory; 10] = [
        EventCategory::Cosmic,
        EventCategory::Geological,
        EventCategory::Biological,
        EventCategory::Political,
        EventCategory::Military,
        EventCategory::Technological,
        EventCategory::Cultural,
        EventCategory::Economic,
        EventCategory::Demographic,
        EventCategory::Environmental,
    ];

    /// The set of every category (i.e. nothing filtered out)
    pub fn all() -> BTreeSet<EventCategory> {
        BTreeSet::from(Self::ALL)
    }

    /// The display label
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Cosmic => "Cosmic",
            EventCategory::Geological => "Geological",
            EventCategory::Biological => "Biological",
            EventCategory::Political => "Political",
            EventCategory::Military => "Military",
            EventCategory::Technological => "Technological",
            EventCategory::Cultural => "Cultural",
            EventCategory::Economic => "Economic",
            EventCategory::Demographic => "Demographic",
            EventCategory::Environmental => "Environmental",
        }
    }

    /// The hex colour events of this category are drawn in
    pub fn colour(&self) -> &'static str {
        match self {
            EventCategory::Cosmic => "#a78bfa",
            EventCategory::Geological => "#f97316",
            EventCategory::Biological => "#22c55e",
            EventCategory::Political => "#3b82f6",
            EventCategory::Military => "#ef4444",
            EventCategory::Technological => "#06b6d4",
            EventCategory::Cultural => "#eab308",
            EventCategory::Economic => "#10b981",
            EventCategory::Demographic => "#f472b6",
            EventCategory::Environmental => "#84cc16",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_category_is_listed_once() {
        assert_eq!(EventCategory::all().len(), EventCategory::ALL.len());
    }

    #[test]
    fn labels_and_colours() {
        for category in EventCategory::ALL {
            assert_eq!(category.label(), category.to_string());
            assert!(category.colour().starts_with('#'));
            assert_eq!(category.colour().len(), 7);
        }
    }

    #[test]
    fn serde_names() {
        let json = serde_json::to_string(&EventCategory::Technological).unwrap();
        assert_eq!(json, r#""TECHNOLOGICAL""#);
        let category: EventCategory = serde_json::from_str(r#""ENVIRONMENTAL""#).unwrap();
        assert_eq!(category, EventCategory::Environmental);
        assert!(serde_json::from_str::<EventCategory>(r#""Cosmic""#).is_err());
    }
}

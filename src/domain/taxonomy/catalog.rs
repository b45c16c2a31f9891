// src/domain/taxonomy/catalog.rs
//
// Category Taxonomy - static two-level tree (layer -> category)
//
// RULES:
// - Defined at compile time, never created or destroyed at runtime
// - Category ids are unique across all layers
// - Layer order is display order

use serde::Serialize;

/// Category assigned to galleries whose record carries none.
/// Deliberately absent from every layer.
pub const UNCATEGORIZED: &str = "UNCATEGORIZED";

/// Leaf taxonomy node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    /// Icon reference resolved by the view layer
    pub icon: &'static str,
    /// Color token resolved by the view layer
    pub color: &'static str,
}

/// Named grouping of categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layer {
    pub title: &'static str,
    pub categories: &'static [Category],
}

impl Layer {
    pub fn contains(&self, category_id: &str) -> bool {
        self.categories.iter().any(|c| c.id == category_id)
    }
}

const fn cat(
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    color: &'static str,
) -> Category {
    Category { id, name, icon, color }
}

static LAYERS: [Layer; 4] = [
    Layer {
        title: "Events & Ceremonies",
        categories: &[
            cat("ANNUAL_DAY", "Annual Day", "star", "amber"),
            cat("GRADUATION", "Graduation", "graduation-cap", "indigo"),
            cat("SPORTS_DAY", "Sports Day", "trophy", "emerald"),
            cat("CULTURAL_FEST", "Cultural Fest", "masks", "rose"),
            cat("INDEPENDENCE_DAY", "Independence Day", "flag", "orange"),
        ],
    },
    Layer {
        title: "Academics",
        categories: &[
            cat("SCIENCE_FAIR", "Science Fair", "flask", "cyan"),
            cat("EXHIBITIONS", "Exhibitions", "easel", "violet"),
            cat("WORKSHOPS", "Workshops", "tools", "slate"),
            cat("FIELD_TRIPS", "Field Trips", "bus", "lime"),
        ],
    },
    Layer {
        title: "Campus Life",
        categories: &[
            cat("CAMPUS", "Campus", "building", "sky"),
            cat("CLUBS", "Clubs & Societies", "users", "teal"),
            cat("ARTS", "Arts & Crafts", "palette", "pink"),
            cat("MUSIC", "Music", "music", "purple"),
        ],
    },
    Layer {
        title: "Achievements",
        categories: &[
            cat("COMPETITIONS", "Competitions", "medal", "yellow"),
            cat("AWARDS", "Awards", "award", "red"),
        ],
    },
];

/// All layers in display order
pub fn layers() -> &'static [Layer] {
    &LAYERS
}

/// Look up a category by id
pub fn category(id: &str) -> Option<&'static Category> {
    LAYERS
        .iter()
        .flat_map(|layer| layer.categories.iter())
        .find(|c| c.id == id)
}

/// The layer a category belongs to
pub fn layer_of(category_id: &str) -> Option<&'static Layer> {
    LAYERS.iter().find(|layer| layer.contains(category_id))
}

/// Flattened category id set, in display order
pub fn all_category_ids() -> Vec<&'static str> {
    LAYERS
        .iter()
        .flat_map(|layer| layer.categories.iter().map(|c| c.id))
        .collect()
}

pub fn is_known_category(id: &str) -> bool {
    category(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_category_ids_are_unique() {
        let ids = all_category_ids();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn test_lookup_by_id() {
        let sports = category("SPORTS_DAY").unwrap();
        assert_eq!(sports.name, "Sports Day");
        assert_eq!(layer_of("SPORTS_DAY").unwrap().title, "Events & Ceremonies");
        assert_eq!(layer_of("SCIENCE_FAIR").unwrap().title, "Academics");
    }

    #[test]
    fn test_uncategorized_is_outside_taxonomy() {
        assert!(!is_known_category(UNCATEGORIZED));
        assert!(layer_of(UNCATEGORIZED).is_none());
    }

    #[test]
    fn test_every_layer_has_categories() {
        assert!(layers().iter().all(|l| !l.categories.is_empty()));
    }
}

// src/domain/filter/pipeline.rs
//
// Filter/Sort Pipeline
//
// PROPERTIES:
// - Pure: (galleries, criteria) -> ordered galleries, no side effects
// - Predicates are AND-combined
// - Sorting is stable for every key
// - Idempotent: apply(apply(G, C), C) == apply(G, C)
// - Never reorders a gallery's files

use serde::Serialize;
use std::cmp::Ordering;

use super::criteria::{CategoryFilter, FilterCriteria, SortKey, YearFilter};
use crate::domain::gallery::Gallery;
use crate::domain::taxonomy::{layers, Layer};

/// One section of the "grouped by theme" view
#[derive(Debug, Clone, Serialize)]
pub struct LayerGroup {
    pub layer: &'static Layer,
    pub galleries: Vec<Gallery>,
}

/// Filter then sort
pub fn apply(galleries: &[Gallery], criteria: &FilterCriteria) -> Vec<Gallery> {
    let needle = criteria.search_term().map(str::to_lowercase);

    let mut result: Vec<Gallery> = galleries
        .iter()
        .filter(|g| passes(g, criteria, needle.as_deref()))
        .cloned()
        .collect();

    // sort_by is stable
    result.sort_by(|a, b| compare(a, b, criteria.sort));
    result
}

fn passes(gallery: &Gallery, criteria: &FilterCriteria, needle: Option<&str>) -> bool {
    let category_ok = match &criteria.category {
        CategoryFilter::All => true,
        CategoryFilter::Only(id) => gallery.category == *id,
    };

    let year_ok = match criteria.year {
        YearFilter::All => true,
        YearFilter::Only(year) => gallery.year == year,
    };

    let search_ok = match needle {
        None => true,
        Some(needle) => {
            gallery.title.to_lowercase().contains(needle)
                || gallery.description.to_lowercase().contains(needle)
        }
    };

    category_ok && year_ok && search_ok
}

fn compare(a: &Gallery, b: &Gallery, key: SortKey) -> Ordering {
    match key {
        SortKey::Newest => b.date.cmp(&a.date),
        SortKey::Oldest => a.date.cmp(&b.date),
        SortKey::Name => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::MostFiles => b.files.len().cmp(&a.files.len()),
    }
}

/// Partition an already filtered and sorted list by taxonomy layer
///
/// Returns `None` when the grouped view does not apply (active search or a
/// specific category). Order inside each group follows the input; empty layers
/// are omitted; galleries with categories outside the taxonomy appear nowhere.
pub fn group_by_layer(sorted: &[Gallery], criteria: &FilterCriteria) -> Option<Vec<LayerGroup>> {
    if !criteria.is_groupable() {
        return None;
    }

    let groups = layers()
        .iter()
        .filter_map(|layer| {
            let galleries: Vec<Gallery> = sorted
                .iter()
                .filter(|g| layer.contains(&g.category))
                .cloned()
                .collect();
            (!galleries.is_empty()).then_some(LayerGroup { layer, galleries })
        })
        .collect();

    Some(groups)
}

/// Distinct gallery years, newest first
pub fn available_years(galleries: &[Gallery]) -> Vec<i32> {
    let mut years: Vec<i32> = galleries.iter().map(|g| g.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

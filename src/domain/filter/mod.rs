pub mod criteria;
pub mod pipeline;

pub use criteria::{CategoryFilter, FilterCriteria, SortKey, YearFilter, ALL_CATEGORIES, ALL_YEARS};
pub use pipeline::{apply, available_years, group_by_layer, LayerGroup};

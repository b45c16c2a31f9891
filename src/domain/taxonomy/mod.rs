pub mod catalog;

pub use catalog::{
    all_category_ids, category, is_known_category, layer_of, layers, Category, Layer,
    UNCATEGORIZED,
};

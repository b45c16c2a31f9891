use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// Root sentinel of the category selector
pub const ALL_CATEGORIES: &str = "ALL";

/// Sentinel of the year selector
pub const ALL_YEARS: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearFilter {
    #[default]
    All,
    Only(i32),
}

/// Exactly one sort key is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Name,
    MostFiles,
}

/// UI-selected view criteria
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub year: YearFilter,
    pub search_text: String,
    pub sort: SortKey,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl AsRef<str>) -> Self {
        self.category = category.as_ref().parse().unwrap_or_default();
        self
    }

    pub fn with_year(mut self, year: YearFilter) -> Self {
        self.year = year;
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Search text with surrounding whitespace removed; `None` when inactive
    pub fn search_term(&self) -> Option<&str> {
        Some(self.search_text.trim()).filter(|t| !t.is_empty())
    }

    /// Whether the "grouped by theme" view applies
    pub fn is_groupable(&self) -> bool {
        self.category == CategoryFilter::All && self.search_term().is_none()
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == ALL_CATEGORIES {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(s.to_string()))
        }
    }
}

impl FromStr for YearFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(ALL_YEARS) {
            return Ok(YearFilter::All);
        }
        s.parse::<i32>()
            .map(YearFilter::Only)
            .map_err(|_| DomainError::InvariantViolation(format!("Invalid year filter: {}", s)))
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "name" => Ok(SortKey::Name),
            "mostFiles" | "most_files" => Ok(SortKey::MostFiles),
            other => Err(DomainError::InvariantViolation(format!(
                "Unknown sort key: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Newest => write!(f, "newest"),
            SortKey::Oldest => write!(f, "oldest"),
            SortKey::Name => write!(f, "name"),
            SortKey::MostFiles => write!(f, "mostFiles"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_parse_to_all() {
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("all".parse::<YearFilter>().unwrap(), YearFilter::All);
        assert_eq!("2024".parse::<YearFilter>().unwrap(), YearFilter::Only(2024));
        assert!("twenty".parse::<YearFilter>().is_err());
    }

    #[test]
    fn test_sort_key_round_trips_through_display() {
        for key in [SortKey::Newest, SortKey::Oldest, SortKey::Name, SortKey::MostFiles] {
            assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_whitespace_search_is_inactive() {
        let criteria = FilterCriteria::new().with_search("   ");
        assert!(criteria.search_term().is_none());
        assert!(criteria.is_groupable());
        assert!(!criteria.with_category("ARTS").is_groupable());
    }
}

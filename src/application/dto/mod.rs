// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are view-friendly representations
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::filter::{CategoryFilter, FilterCriteria, SortKey, YearFilter};
use crate::domain::gallery::Gallery;
use crate::domain::taxonomy::{self, Category, Layer};
use crate::domain::LayerGroup;
use crate::services::{SlideshowSnapshot, TransferReport};

// ============================================================================
// TAXONOMY DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl From<&Category> for CategoryDto {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.to_string(),
            icon: category.icon.to_string(),
            color: category.color.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerDto {
    pub title: String,
    pub categories: Vec<CategoryDto>,
}

impl From<&Layer> for LayerDto {
    fn from(layer: &Layer) -> Self {
        Self {
            title: layer.title.to_string(),
            categories: layer.categories.iter().map(CategoryDto::from).collect(),
        }
    }
}

// ============================================================================
// GALLERY DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryCardDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub category_name: String,
    pub year: i32,
    pub date: String,
    pub thumbnail: Option<String>,
    pub file_count: usize,
    pub is_favorite: bool,
}

impl GalleryCardDto {
    pub fn from_gallery(gallery: &Gallery, is_favorite: bool) -> Self {
        let category_name = taxonomy::category(&gallery.category)
            .map(|c| c.name.to_string())
            .unwrap_or_else(|| gallery.category.clone());

        Self {
            id: gallery.id.clone(),
            title: gallery.title.clone(),
            description: gallery.description.clone(),
            category: gallery.category.clone(),
            category_name,
            year: gallery.year,
            date: gallery.date.to_rfc3339(),
            thumbnail: gallery.thumbnail().map(str::to_string),
            file_count: gallery.file_count(),
            is_favorite,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerGroupDto {
    pub title: String,
    pub galleries: Vec<GalleryCardDto>,
}

/// A rendered view: grouped by theme when the criteria allow it, flat otherwise
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GalleryViewDto {
    Grouped { groups: Vec<LayerGroupDto>, total: usize },
    Flat { galleries: Vec<GalleryCardDto> },
}

impl GalleryViewDto {
    pub fn grouped<F>(groups: &[LayerGroup], is_favorite: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        let groups: Vec<LayerGroupDto> = groups
            .iter()
            .map(|group| LayerGroupDto {
                title: group.layer.title.to_string(),
                galleries: group
                    .galleries
                    .iter()
                    .map(|g| GalleryCardDto::from_gallery(g, is_favorite(&g.id)))
                    .collect(),
            })
            .collect();
        let total = groups.iter().map(|g| g.galleries.len()).sum();
        GalleryViewDto::Grouped { groups, total }
    }

    pub fn flat<F>(galleries: &[Gallery], is_favorite: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        GalleryViewDto::Flat {
            galleries: galleries
                .iter()
                .map(|g| GalleryCardDto::from_gallery(g, is_favorite(&g.id)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            GalleryViewDto::Grouped { total, .. } => *total,
            GalleryViewDto::Flat { galleries } => galleries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Raw selector values as the view holds them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterRequestDto {
    pub category: Option<String>,
    pub year: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

impl FilterRequestDto {
    /// Unknown selector values fall back to the defaults
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            category: self
                .category
                .as_deref()
                .and_then(|c| c.parse().ok())
                .unwrap_or(CategoryFilter::All),
            year: self
                .year
                .as_deref()
                .and_then(|y| y.parse().ok())
                .unwrap_or(YearFilter::All),
            search_text: self.search.clone().unwrap_or_default(),
            sort: self
                .sort
                .as_deref()
                .and_then(|s| s.parse().ok())
                .unwrap_or(SortKey::Newest),
        }
    }
}

// ============================================================================
// SLIDESHOW DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideshowDto {
    pub gallery_id: String,
    pub current_index: usize,
    pub file_count: usize,
    pub state: String,
    pub url: String,
    pub kind: String,
    pub is_playing: bool,
    pub is_muted: bool,
}

impl From<SlideshowSnapshot> for SlideshowDto {
    fn from(snapshot: SlideshowSnapshot) -> Self {
        Self {
            gallery_id: snapshot.gallery_id,
            current_index: snapshot.current_index,
            file_count: snapshot.file_count,
            state: serde_json::to_value(snapshot.state)
                .ok()
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default(),
            url: snapshot.item.url,
            kind: snapshot.item.kind.to_string(),
            is_playing: snapshot.is_playing,
            is_muted: snapshot.is_muted,
        }
    }
}

// ============================================================================
// TRANSFER DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferReportDto {
    pub gallery_id: String,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub failed_items: Vec<String>,
    pub saved: Vec<String>,
    pub skipped: usize,
    pub cancelled: bool,
}

impl From<TransferReport> for TransferReportDto {
    fn from(report: TransferReport) -> Self {
        Self {
            gallery_id: report.gallery_id,
            total: report.total,
            succeeded: report.succeeded,
            failed: report.failed,
            failed_items: report.failed_items,
            saved: report
                .saved
                .iter()
                .map(|p| p.to_string_lossy().to_string())
                .collect(),
            skipped: report.skipped,
            cancelled: report.cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_filter_request_falls_back_to_defaults() {
        let request = FilterRequestDto {
            category: Some("SPORTS_DAY".to_string()),
            year: Some("not-a-year".to_string()),
            search: Some("  relay ".to_string()),
            sort: Some("mostFiles".to_string()),
        };
        let criteria = request.to_criteria();

        assert_eq!(criteria.category, CategoryFilter::Only("SPORTS_DAY".to_string()));
        assert_eq!(criteria.year, YearFilter::All);
        assert_eq!(criteria.search_term(), Some("relay"));
        assert_eq!(criteria.sort, SortKey::MostFiles);
    }

    #[test]
    fn test_card_resolves_category_name() {
        let gallery = Gallery::new(
            "1".to_string(),
            "SPORTS_DAY".to_string(),
            "Sports".to_string(),
            "Track".to_string(),
            vec!["a.jpg".to_string()],
            Utc.with_ymd_and_hms(2023, 11, 4, 8, 0, 0).unwrap(),
        );
        let card = GalleryCardDto::from_gallery(&gallery, true);

        assert_eq!(card.category_name, "Sports Day");
        assert_eq!(card.thumbnail.as_deref(), Some("a.jpg"));
        assert_eq!(card.year, 2023);
        assert!(card.is_favorite);
    }
}

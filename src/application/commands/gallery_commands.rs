// src/application/commands/gallery_commands.rs

use crate::application::dto::{FilterRequestDto, GalleryCardDto, GalleryViewDto, LayerDto};
use crate::application::error_handling::{Notice, ToNotice};
use crate::application::state::AppState;
use crate::domain::taxonomy;
use crate::error::AppError;
use crate::services::LoadOutcome;

/// Reload the gallery list; an unavailable source yields an empty catalog and a notice
pub async fn refresh_galleries(state: &AppState) -> Result<usize, Notice> {
    match state.catalog.refresh().await {
        LoadOutcome::Loaded(count) => Ok(count),
        LoadOutcome::Unavailable(reason) => {
            Err(Notice::from_app_error(&AppError::SourceUnavailable(reason)))
        }
    }
}

pub fn list_layers() -> Vec<LayerDto> {
    taxonomy::layers().iter().map(LayerDto::from).collect()
}

pub fn list_years(state: &AppState) -> Vec<i32> {
    state.catalog.years()
}

/// The rendered list for the current selector values
pub fn list_galleries(state: &AppState, request: &FilterRequestDto) -> GalleryViewDto {
    let criteria = request.to_criteria();
    let is_favorite = |id: &str| state.favorites.has(id);

    match state.catalog.grouped(&criteria) {
        Some(groups) => GalleryViewDto::grouped(&groups, is_favorite),
        None => GalleryViewDto::flat(&state.catalog.view(&criteria), is_favorite),
    }
}

pub fn get_gallery(state: &AppState, gallery_id: &str) -> Result<GalleryCardDto, String> {
    state
        .catalog
        .find(gallery_id)
        .map(|g| GalleryCardDto::from_gallery(&g, state.favorites.has(&g.id)))
        .ok_or(AppError::NotFound)
        .to_notice()
}

pub fn toggle_favorite(state: &AppState, gallery_id: &str) -> Result<bool, String> {
    state.favorites.toggle(gallery_id).to_notice()
}

pub fn list_favorites(state: &AppState, request: &FilterRequestDto) -> Vec<GalleryCardDto> {
    state
        .catalog
        .favorites(&state.favorites, &request.to_criteria())
        .iter()
        .map(|g| GalleryCardDto::from_gallery(g, true))
        .collect()
}

// src/application/commands/slideshow_commands.rs

use crate::application::dto::SlideshowDto;
use crate::application::error_handling::ToNotice;
use crate::application::state::AppState;
use crate::domain::SlideshowState;
use crate::error::AppError;

/// Open a gallery in the slideshow; `Ok(false)` when it has no files
pub fn open_slideshow(state: &AppState, gallery_id: &str, start_index: usize) -> Result<bool, String> {
    let gallery = state.catalog.find(gallery_id).ok_or(AppError::NotFound).to_notice()?;
    Ok(state.slideshow.open(&gallery, start_index))
}

pub fn close_slideshow(state: &AppState) -> bool {
    state.slideshow.close()
}

pub fn next_slide(state: &AppState) -> Option<SlideshowDto> {
    state.slideshow.next()?;
    current_slide(state)
}

pub fn prev_slide(state: &AppState) -> Option<SlideshowDto> {
    state.slideshow.prev()?;
    current_slide(state)
}

pub fn go_to_slide(state: &AppState, index: usize) -> Option<SlideshowDto> {
    state.slideshow.go_to(index)?;
    current_slide(state)
}

pub fn toggle_video_playback(state: &AppState) -> bool {
    state.slideshow.toggle_play_pause()
}

pub fn toggle_slideshow_mute(state: &AppState) -> Option<bool> {
    state.slideshow.toggle_mute()
}

pub fn toggle_slideshow_autoplay(state: &AppState) -> Option<SlideshowState> {
    state.slideshow.toggle_autoplay()
}

pub fn current_slide(state: &AppState) -> Option<SlideshowDto> {
    state.slideshow.snapshot().map(SlideshowDto::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::refresh_galleries;
    use crate::application::state::test_support::state;

    #[tokio::test]
    async fn test_open_rejects_empty_gallery() {
        let state = state();
        refresh_galleries(&state).await.unwrap();

        assert_eq!(open_slideshow(&state, "2", 0), Ok(false));
        assert!(current_slide(&state).is_none());
        assert!(open_slideshow(&state, "missing", 0).is_err());
    }

    #[tokio::test]
    async fn test_navigation_wraps() {
        let state = state();
        refresh_galleries(&state).await.unwrap();

        assert_eq!(open_slideshow(&state, "1", 0), Ok(true));
        let slide = prev_slide(&state).unwrap();
        assert_eq!(slide.current_index, 1);
        assert_eq!(slide.state, "OPEN_AUTOPLAY");
        assert_eq!(next_slide(&state).unwrap().current_index, 0);

        assert!(close_slideshow(&state));
        assert!(next_slide(&state).is_none());
    }
}

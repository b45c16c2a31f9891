// src/integrations/media.rs
//
// Media surface of the slideshow
//
// The controller calls unmount for the outgoing item strictly before mount of
// the incoming one, so two videos never play at once.

use log::debug;

use crate::domain::MediaItem;

pub trait MediaSink: Send + Sync {
    fn mount(&self, item: &MediaItem, muted: bool);

    /// Stop playback and release whatever `mount` acquired
    fn unmount(&self, item: &MediaItem);

    fn set_playing(&self, item: &MediaItem, playing: bool);

    fn set_muted(&self, item: &MediaItem, muted: bool);
}

/// Headless sink: records transitions in the log only
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingMediaSink;

impl MediaSink for LoggingMediaSink {
    fn mount(&self, item: &MediaItem, muted: bool) {
        debug!("mount #{} {} ({}, muted: {})", item.index, item.url, item.kind, muted);
    }

    fn unmount(&self, item: &MediaItem) {
        debug!("unmount #{} {}", item.index, item.url);
    }

    fn set_playing(&self, item: &MediaItem, playing: bool) {
        debug!("#{} playing: {}", item.index, playing);
    }

    fn set_muted(&self, item: &MediaItem, muted: bool) {
        debug!("#{} muted: {}", item.index, muted);
    }
}

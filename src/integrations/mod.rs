// src/integrations/mod.rs
//
// External collaborators behind narrow traits:
// - content API (gallery records)
// - file host (byte fetch + local save)
// - share sheet and clipboard
// - media surface of the slideshow

pub mod content_api;
pub mod media;
pub mod share;
pub mod transfer;

pub use content_api::{ContentApiClient, GallerySource};
pub use media::{LoggingMediaSink, MediaSink};
pub use share::{ArboardClipboard, Clipboard, SharePayload, ShareSurface, UnavailableShareSurface};
pub use transfer::{FileTransport, HttpFileTransport};

pub mod session;

pub use session::{AdvanceCause, MediaItem, SlideChange, SlideshowSession, SlideshowState};

// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits above domain and services; the view layer only talks to this
// - Translates between DTOs and domain entities
// - Maps every error into a non-blocking Notice

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod notices;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{Notice, NoticeKind, ToNotice};
pub use notices::NoticeBoard;
pub use state::{AppState, Collaborators};

// src/application/commands/mod.rs

pub mod gallery_commands;
pub mod slideshow_commands;
pub mod transfer_commands;

pub use gallery_commands::*;
pub use slideshow_commands::*;
pub use transfer_commands::*;

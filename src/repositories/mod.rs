// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO event emission
// - Explicit SQL only

pub mod favorites_repository;

pub use favorites_repository::{FavoritesRepository, SqliteFavoritesRepository, FAVORITES_KEY};

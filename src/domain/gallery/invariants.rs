use super::entity::Gallery;
use crate::domain::{DomainError, DomainResult};
use chrono::Datelike;

/// Validates all Gallery invariants
pub fn validate_gallery(gallery: &Gallery) -> DomainResult<()> {
    validate_identity(gallery)?;
    validate_year(gallery)?;
    Ok(())
}

fn validate_identity(gallery: &Gallery) -> DomainResult<()> {
    if gallery.id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Gallery id cannot be empty".to_string(),
        ));
    }
    if gallery.title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Gallery {} has an empty title",
            gallery.id
        )));
    }
    Ok(())
}

/// year must match the normalized date
fn validate_year(gallery: &Gallery) -> DomainResult<()> {
    if gallery.year != gallery.date.year() {
        return Err(DomainError::InvariantViolation(format!(
            "Gallery {} year {} does not match date {}",
            gallery.id,
            gallery.year,
            gallery.date.to_rfc3339()
        )));
    }
    Ok(())
}

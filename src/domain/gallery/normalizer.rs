// src/domain/gallery/normalizer.rs
//
// Gallery Normalizer - raw content API records -> canonical Gallery
//
// RULES:
// - Never fails: every missing field has a default
// - Never mutates the input record
// - Applied once per fetch, independent of filter state
// - Ids are unique on output (duplicates are rewritten, see normalize_all)

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use uuid::Uuid;

use super::entity::{Gallery, DEFAULT_DESCRIPTION, DEFAULT_TITLE};
use crate::domain::taxonomy::UNCATEGORIZED;

/// Gallery record as served by the content API
/// Every field is optional; unknown fields are ignored
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawGalleryRecord {
    /// String or number
    #[serde(default, alias = "_id")]
    pub id: Option<Value>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, alias = "images", alias = "media")]
    pub files: Option<Vec<String>>,

    #[serde(default, alias = "createdAt", alias = "created_at")]
    pub date: Option<String>,
}

/// Normalize a single record, using the current instant as the date fallback
pub fn normalize(raw: &RawGalleryRecord) -> Gallery {
    normalize_at(raw, Utc::now())
}

/// Normalize a single record against an explicit normalization instant
pub fn normalize_at(raw: &RawGalleryRecord, now: DateTime<Utc>) -> Gallery {
    let date = raw
        .date
        .as_deref()
        .and_then(parse_date)
        .unwrap_or(now);

    let files: Vec<String> = raw
        .files
        .iter()
        .flatten()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect();

    let title = non_blank(raw.title.as_deref()).unwrap_or(DEFAULT_TITLE).to_string();
    let description = non_blank(raw.description.as_deref())
        .unwrap_or(DEFAULT_DESCRIPTION)
        .to_string();
    let category = non_blank(raw.category.as_deref())
        .unwrap_or(UNCATEGORIZED)
        .to_string();

    let id = source_id(raw.id.as_ref()).unwrap_or_else(|| derived_id(raw, &files));

    Gallery::new(id, category, title, description, files, date)
}

/// Normalize a full fetch
///
/// The first record carrying an id keeps it; later duplicates become
/// `<id>-2`, `<id>-3`, ... skipping any id the source itself uses, so favorites
/// and viewer state never conflate two galleries.
pub fn normalize_all(raws: &[RawGalleryRecord], now: DateTime<Utc>) -> Vec<Gallery> {
    let mut galleries: Vec<Gallery> = raws.iter().map(|raw| normalize_at(raw, now)).collect();

    let reserved: HashSet<String> = galleries.iter().map(|g| g.id.clone()).collect();
    let mut assigned: HashSet<String> = HashSet::with_capacity(galleries.len());

    for gallery in &mut galleries {
        if assigned.insert(gallery.id.clone()) {
            continue;
        }

        let mut n = 2;
        let candidate = loop {
            let candidate = format!("{}-{}", gallery.id, n);
            if !reserved.contains(&candidate) && !assigned.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        warn!(
            "Duplicate gallery id {} ('{}'), reassigned to {}",
            gallery.id, gallery.title, candidate
        );
        assigned.insert(candidate.clone());
        gallery.id = candidate;
    }

    galleries
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn source_id(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => non_blank(Some(s)).map(str::to_string),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Deterministic so an id-less record keeps its id across refetches
fn derived_id(raw: &RawGalleryRecord, files: &[String]) -> String {
    let key = format!(
        "{}|{}|{}",
        raw.title.as_deref().unwrap_or_default(),
        raw.date.as_deref().unwrap_or_default(),
        files.join("|")
    );
    Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes()).to_string()
}

/// RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.f]` (taken as UTC), or `YYYY-MM-DD`
fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn record(value: Value) -> RawGalleryRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_full_record() {
        let raw = record(json!({
            "_id": "abc",
            "category": "SPORTS_DAY",
            "title": "Relay Finals",
            "description": "Track events",
            "images": ["a.jpg", "b.jpg"],
            "createdAt": "2023-02-14T09:30:00Z"
        }));

        let g = normalize_at(&raw, now());
        assert_eq!(g.id, "abc");
        assert_eq!(g.category, "SPORTS_DAY");
        assert_eq!(g.title, "Relay Finals");
        assert_eq!(g.files, vec!["a.jpg", "b.jpg"]);
        assert_eq!(g.year, 2023);
        assert_eq!(g.date.month(), 2);
    }

    #[test]
    fn test_empty_record_gets_defaults() {
        let g = normalize_at(&RawGalleryRecord::default(), now());
        assert_eq!(g.title, DEFAULT_TITLE);
        assert_eq!(g.description, DEFAULT_DESCRIPTION);
        assert_eq!(g.category, UNCATEGORIZED);
        assert!(g.files.is_empty());
        assert_eq!(g.date, now());
        assert_eq!(g.year, 2025);
        assert!(!g.id.is_empty());
    }

    #[test]
    fn test_numeric_id_and_unknown_category_preserved() {
        let raw = record(json!({ "id": 7, "category": "ROBOTICS_NIGHT" }));
        let g = normalize_at(&raw, now());
        assert_eq!(g.id, "7");
        assert_eq!(g.category, "ROBOTICS_NIGHT");
    }

    #[test]
    fn test_unparsable_date_falls_back_to_now() {
        let raw = record(json!({ "date": "last tuesday" }));
        assert_eq!(normalize_at(&raw, now()).date, now());

        let raw = record(json!({ "date": "2021-09-03" }));
        assert_eq!(normalize_at(&raw, now()).year, 2021);
    }

    #[test]
    fn test_naive_datetime_is_taken_as_utc() {
        let raw = record(json!({ "date": "2022-03-15T10:20:30.500" }));
        let g = normalize_at(&raw, now());
        assert_eq!(g.year, 2022);
        let expected = Utc.with_ymd_and_hms(2022, 3, 15, 10, 20, 30).unwrap()
            + chrono::Duration::milliseconds(500);
        assert_eq!(g.date, expected);
    }

    #[test]
    fn test_blank_title_uses_placeholder_and_blank_files_dropped() {
        let raw = record(json!({ "title": "   ", "files": ["a.jpg", " ", "c.jpg"] }));
        let g = normalize_at(&raw, now());
        assert_eq!(g.title, DEFAULT_TITLE);
        assert_eq!(g.files, vec!["a.jpg", "c.jpg"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let raw = record(json!({ "title": "  Padded  " }));
        let before = serde_json::to_value(&raw).unwrap();
        let _ = normalize_at(&raw, now());
        assert_eq!(serde_json::to_value(&raw).unwrap(), before);
    }

    #[test]
    fn test_derived_id_is_deterministic() {
        let raw = record(json!({ "title": "Choir", "files": ["x.jpg"] }));
        assert_eq!(normalize_at(&raw, now()).id, normalize_at(&raw, now()).id);
    }

    #[test]
    fn test_duplicate_ids_are_rewritten() {
        let raws = vec![
            record(json!({ "id": "g", "title": "First" })),
            record(json!({ "id": "g", "title": "Second" })),
            record(json!({ "id": "g-2", "title": "Third" })),
            record(json!({ "id": "g", "title": "Fourth" })),
        ];

        let ids: Vec<String> = normalize_all(&raws, now()).into_iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["g", "g-3", "g-2", "g-4"]);
    }

    #[test]
    fn test_source_id_wins_over_rewritten_duplicate() {
        let raws = vec![
            record(json!({ "id": "g", "title": "First" })),
            record(json!({ "id": "g", "title": "Second" })),
            record(json!({ "id": "g-2", "title": "Real g-2" })),
        ];

        let galleries = normalize_all(&raws, now());
        let real = galleries.iter().find(|g| g.title == "Real g-2").unwrap();
        assert_eq!(real.id, "g-2");
        let unique: std::collections::HashSet<_> = galleries.iter().map(|g| &g.id).collect();
        assert_eq!(unique.len(), galleries.len());
    }
}

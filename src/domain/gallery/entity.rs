use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Untitled Gallery";
pub const DEFAULT_DESCRIPTION: &str = "No description available";

/// A named collection of ordered media file URLs
/// Every field is already defaulted: consumers never see partial data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    /// Stable identifier, from the source or derived at normalization
    pub id: String,

    /// Taxonomy category id (unknown ids are kept verbatim)
    pub category: String,

    pub title: String,

    pub description: String,

    /// Ordered media URLs; position 0 is the thumbnail
    pub files: Vec<String>,

    pub date: DateTime<Utc>,

    /// Derived once from `date` at normalization time
    pub year: i32,
}

/// Kind of media behind a file URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

impl Gallery {
    pub fn new(
        id: String,
        category: String,
        title: String,
        description: String,
        files: Vec<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            category,
            title,
            description,
            files,
            year: date.year(),
            date,
        }
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.files.first().map(String::as_str)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// A gallery with no files can never be opened in the viewer
    pub fn is_viewable(&self) -> bool {
        !self.files.is_empty()
    }
}

impl MediaKind {
    /// Infer media kind from the URL's extension (query and fragment ignored)
    pub fn from_url(url: &str) -> Self {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        let ext = path
            .rsplit('/')
            .next()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match ext.as_deref() {
            Some("mp4") | Some("webm") | Some("mov") | Some("mkv") | Some("m4v") | Some("ogg") => {
                MediaKind::Video
            }
            _ => MediaKind::Image,
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// Data structures for the Laterfeed entries API
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of content being saved, as understood by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Article,
    Video,
}

impl SourceType {
    pub const ALL: [SourceType; 2] = [SourceType::Article, SourceType::Video];

    /// Wire value, also used as the `<option>` value
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Article => "article",
            SourceType::Video => "video",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceType::Article => "Article",
            SourceType::Video => "Video",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceType::ALL
            .into_iter()
            .find(|source_type| source_type.as_str() == s)
            .ok_or_else(|| format!("unknown source type: {}", s))
    }
}

/// Body of `POST /entries`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkRequest {
    pub url: String,
    pub title: Option<String>,
    pub source_type: SourceType,
}

impl BookmarkRequest {
    /// Build a request from raw form values.
    ///
    /// Both text fields are trimmed. Returns `None` when the URL is empty;
    /// an empty title is sent as `null`.
    pub fn from_form(url: &str, title: &str, source_type: SourceType) -> Option<BookmarkRequest> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }

        let title = title.trim();

        Some(BookmarkRequest {
            url: url.to_string(),
            title: (!title.is_empty()).then(|| title.to_string()),
            source_type,
        })
    }
}

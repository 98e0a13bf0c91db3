use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{CommentType, DocCategory, DocStatus};

/// A markdown research document, the unit of the content library.
///
/// `sections` is derived from `content` on every write; `topic_slug` groups
/// documents belonging to one subject across its lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResearchDocument {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub category: DocCategory,
    pub content: String,
    pub sections: Vec<Section>,
    pub status: DocStatus,
    pub topic_slug: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A heading-delimited span of a document, used for navigation and as a
/// comment anchor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    /// Slugified heading text.
    pub id: String,
    pub title: String,
    /// Heading level, 1-6.
    pub level: usize,
    pub start_line: usize,
    pub end_line: usize,
}

/// A coaching comment anchored to a document section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub document_id: String,
    pub section_id: String,
    pub content: String,
    pub comment_type: CommentType,
    pub resolved: bool,
    pub created_at: DateTime<Utc>,
}

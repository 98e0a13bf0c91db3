//! Research document update builder.

use serde::Serialize;

use mgd_core::enums::{DocCategory, DocStatus};

#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacing content also re-derives the stored sections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<DocCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DocStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_slug: Option<Option<String>>,
}

pub struct DocumentUpdateBuilder(DocumentUpdate);

impl DocumentUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(DocumentUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.0.content = Some(content.into());
        self
    }

    #[must_use]
    pub const fn category(mut self, category: DocCategory) -> Self {
        self.0.category = Some(category);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: DocStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn topic_slug(mut self, topic_slug: Option<String>) -> Self {
        self.0.topic_slug = Some(topic_slug);
        self
    }

    #[must_use]
    pub fn build(self) -> DocumentUpdate {
        self.0
    }
}

//! Pipeline item update builder.

use chrono::NaiveDate;
use serde::Serialize;

use mgd_core::enums::PipelineStage;

#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<PipelineStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<Option<NaiveDate>>,
}

pub struct PipelineUpdateBuilder(PipelineUpdate);

impl PipelineUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(PipelineUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub const fn stage(mut self, stage: PipelineStage) -> Self {
        self.0.stage = Some(stage);
        self
    }

    #[must_use]
    pub fn content_type(mut self, content_type: Option<String>) -> Self {
        self.0.content_type = Some(content_type);
        self
    }

    #[must_use]
    pub fn document_id(mut self, document_id: Option<String>) -> Self {
        self.0.document_id = Some(document_id);
        self
    }

    #[must_use]
    pub fn audience(mut self, audience: Option<String>) -> Self {
        self.0.audience = Some(audience);
        self
    }

    #[must_use]
    pub const fn target_date(mut self, target_date: Option<NaiveDate>) -> Self {
        self.0.target_date = Some(target_date);
        self
    }

    #[must_use]
    pub fn build(self) -> PipelineUpdate {
        self.0
    }
}

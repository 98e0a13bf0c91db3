use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::PipelineStage;

/// A unit of content (speech/shiur) tracked through stages idea → delivered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PipelineItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub stage: PipelineStage,
    pub content_type: Option<String>,
    pub document_id: Option<String>,
    pub audience: Option<String>,
    pub target_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

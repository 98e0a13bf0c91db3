use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A rehearsal session. Ratings follow the 3V model (vocal, vitality,
/// visual), 1-5 each.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PracticeLog {
    pub id: String,
    pub pipeline_id: Option<String>,
    pub date: NaiveDate,
    pub duration_minutes: Option<i64>,
    pub practice_type: Option<String>,
    pub vocal_rating: Option<i64>,
    pub vitality_rating: Option<i64>,
    pub visual_rating: Option<i64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Post-delivery reflection: what landed, what didn't, lessons learned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryEntry {
    pub id: String,
    pub pipeline_id: Option<String>,
    pub date: NaiveDate,
    pub audience_description: Option<String>,
    pub what_landed: Option<String>,
    pub what_didnt: Option<String>,
    pub audience_reactions: Option<String>,
    pub overall_rating: Option<i64>,
    pub lessons_learned: Option<String>,
    pub created_at: DateTime<Utc>,
}

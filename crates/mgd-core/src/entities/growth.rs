use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::GoalStatus;

/// A longer-horizon personal goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: GoalStatus,
    pub target_date: Option<NaiveDate>,
    pub sort_order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One note against a goal inside a daily reflection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalNote {
    pub goal_id: String,
    pub note: String,
}

/// The evening reflection for one date. At most one row per date;
/// `streak_count` is yesterday's count + 1, or 1 after a gap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyReflection {
    pub id: String,
    pub date: NaiveDate,
    pub wins: Option<String>,
    pub struggles: Option<String>,
    pub goal_notes: Vec<GoalNote>,
    pub gratitude: Option<String>,
    pub tomorrow_focus: Option<String>,
    pub growth_prompt: Option<String>,
    pub themes: Vec<String>,
    pub streak_count: i64,
    pub created_at: DateTime<Utc>,
}

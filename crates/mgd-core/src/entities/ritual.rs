use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::RitualFrequency;

/// A recurring personal habit tracked with daily completion checkmarks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ritual {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub frequency: RitualFrequency,
    /// Optional text practiced as part of the ritual (a tefillah, a kabbalah).
    pub content: Option<String>,
    pub sort_order: i64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Join row marking a ritual done on a given date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RitualCompletion {
    pub id: String,
    pub ritual_id: String,
    pub completed_date: NaiveDate,
    pub notes: Option<String>,
}

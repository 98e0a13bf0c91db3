use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar event, optionally tied to a pipeline item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub event_type: Option<String>,
    /// Free-form recurrence note ("weekly", "every shabbos"); not expanded.
    pub recurring: Option<String>,
    pub pipeline_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A recurring weekly time block. `day_of_week` is 0 = Sunday .. 6 = Shabbos;
/// `None` means every day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleBlock {
    pub id: String,
    pub day_of_week: Option<u8>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub activity: String,
    pub category: Option<String>,
    pub notes: Option<String>,
}

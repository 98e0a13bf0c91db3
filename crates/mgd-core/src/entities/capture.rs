use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A quick daily story capture, written against a prompt.
///
/// `prompt_day` is 0 for today-mode prompts and 1-30 for the rotating
/// past-prompt series. A capture can later be promoted into a full story.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoryCapture {
    pub id: String,
    pub prompt_day: i64,
    pub prompt_text: String,
    pub response: String,
    pub emotion: Option<String>,
    pub captured_date: NaiveDate,
    pub promoted_to_story_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Aggregate capture statistics shown on the capture screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaptureStats {
    pub total_captures: usize,
    pub current_streak: u32,
    pub this_week: usize,
}

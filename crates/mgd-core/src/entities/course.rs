use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A multi-segment learning course (an audio series, a sefer broken into
/// daily pieces).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub source_type: Option<String>,
    pub total_segments: i64,
    pub created_at: DateTime<Utc>,
}

/// One ordered piece of a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseSegment {
    pub id: String,
    pub course_id: String,
    pub segment_number: i64,
    pub title: Option<String>,
    pub content: String,
    pub completed: bool,
    pub completed_date: Option<NaiveDate>,
}

/// Today's lesson for a course: its first uncompleted segment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyLesson {
    pub course: Course,
    pub segment: CourseSegment,
}

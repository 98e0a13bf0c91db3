//! Status enums, categories, and fixed orderings for Maggid.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str` for the TEXT form stored in SQL. Pipeline stages carry no
//! transition rules: any stage is reachable from any other.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// DocCategory
// ---------------------------------------------------------------------------

/// Category of a research document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocCategory {
    Mitzvah,
    Course,
    Draft,
    Speech,
}

impl DocCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mitzvah => "mitzvah",
            Self::Course => "course",
            Self::Draft => "draft",
            Self::Speech => "speech",
        }
    }
}

impl fmt::Display for DocCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DocStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a research document within a topic.
///
/// Documents sharing a `topic_slug` are displayed in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocStatus {
    Research,
    Prep,
    Session,
    Practice,
    Complete,
}

impl DocStatus {
    pub const ALL: [Self; 5] = [
        Self::Research,
        Self::Prep,
        Self::Session,
        Self::Practice,
        Self::Complete,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Research => "research",
            Self::Prep => "prep",
            Self::Session => "session",
            Self::Practice => "practice",
            Self::Complete => "complete",
        }
    }

    /// Position in the topic-group display order.
    #[must_use]
    pub const fn rank(self) -> usize {
        match self {
            Self::Research => 0,
            Self::Prep => 1,
            Self::Session => 2,
            Self::Practice => 3,
            Self::Complete => 4,
        }
    }
}

impl fmt::Display for DocStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CommentType
// ---------------------------------------------------------------------------

/// Kind of coaching comment attached to a document section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommentType {
    Note,
    NeedsResearch,
    Simplify,
    AddStory,
    Great,
    Question,
}

impl CommentType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::NeedsResearch => "needs-research",
            Self::Simplify => "simplify",
            Self::AddStory => "add-story",
            Self::Great => "great",
            Self::Question => "question",
        }
    }
}

impl fmt::Display for CommentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PipelineStage
// ---------------------------------------------------------------------------

/// Stage of a content item in the delivery pipeline.
///
/// Stage changes are unvalidated by design: a kanban drag can move an item
/// from any column to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Idea,
    Research,
    Draft,
    Practice,
    Ready,
    Delivered,
}

impl PipelineStage {
    /// Board column order.
    pub const ALL: [Self; 6] = [
        Self::Idea,
        Self::Research,
        Self::Draft,
        Self::Practice,
        Self::Ready,
        Self::Delivered,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idea => "idea",
            Self::Research => "research",
            Self::Draft => "draft",
            Self::Practice => "practice",
            Self::Ready => "ready",
            Self::Delivered => "delivered",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TaskPriority / TaskStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Done,
}

impl TaskStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RitualFrequency
// ---------------------------------------------------------------------------

/// How often a ritual recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RitualFrequency {
    Daily,
    Weekday,
    Shabbos,
    Weekly,
}

impl RitualFrequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekday => "weekday",
            Self::Shabbos => "shabbos",
            Self::Weekly => "weekly",
        }
    }
}

impl fmt::Display for RitualFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Seder / CompletionType
// ---------------------------------------------------------------------------

/// One of the six orders of the Mishnah/Talmud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seder {
    Zeraim,
    Moed,
    Nashim,
    Nezikin,
    Kodshim,
    Taharos,
}

impl Seder {
    /// Canonical display order.
    pub const ALL: [Self; 6] = [
        Self::Zeraim,
        Self::Moed,
        Self::Nashim,
        Self::Nezikin,
        Self::Kodshim,
        Self::Taharos,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zeraim => "zeraim",
            Self::Moed => "moed",
            Self::Nashim => "nashim",
            Self::Nezikin => "nezikin",
            Self::Kodshim => "kodshim",
            Self::Taharos => "taharos",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Zeraim => "Zeraim",
            Self::Moed => "Moed",
            Self::Nashim => "Nashim",
            Self::Nezikin => "Nezikin",
            Self::Kodshim => "Kodshim",
            Self::Taharos => "Taharos",
        }
    }
}

impl fmt::Display for Seder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which track a Shas completion belongs to.
///
/// Gemara progress is measured in daf over masechtos with Bavli; Mishnayos
/// progress is measured in perakim over the full Shas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionType {
    Gemara,
    Mishnayos,
}

impl CompletionType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gemara => "gemara",
            Self::Mishnayos => "mishnayos",
        }
    }

    /// Label for the unit this track counts in.
    #[must_use]
    pub const fn unit_label(self) -> &'static str {
        match self {
            Self::Gemara => "daf",
            Self::Mishnayos => "perakim",
        }
    }
}

impl fmt::Display for CompletionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// GoalStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Active,
    Achieved,
    Archived,
}

impl GoalStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Achieved => "achieved",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_roundtrip() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let back: TaskStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TaskStatus::InProgress);
    }

    #[test]
    fn comment_type_is_kebab_case() {
        let json = serde_json::to_string(&CommentType::NeedsResearch).unwrap();
        assert_eq!(json, "\"needs-research\"");
        assert_eq!(CommentType::AddStory.as_str(), "add-story");
    }

    #[test]
    fn doc_status_rank_matches_display_order() {
        let ranks: Vec<usize> = DocStatus::ALL.iter().map(|s| s.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn as_str_matches_serde_form() {
        for stage in PipelineStage::ALL {
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(json, format!("\"{}\"", stage.as_str()));
        }
        for seder in Seder::ALL {
            let json = serde_json::to_string(&seder).unwrap();
            assert_eq!(json, format!("\"{}\"", seder.as_str()));
        }
    }
}

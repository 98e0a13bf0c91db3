use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A story in the bank, ready to be woven into a speech.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Story {
    pub id: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub source: Option<String>,
    pub topics: Vec<String>,
    /// Pipeline item IDs this story has been used in.
    pub used_in: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// An audience-style question worth addressing in a future talk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub context: Option<String>,
    pub tags: Vec<String>,
    pub topics: Vec<String>,
    pub used_in: Vec<String>,
    pub created_at: DateTime<Utc>,
}

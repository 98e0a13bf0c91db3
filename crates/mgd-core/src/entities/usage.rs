use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded use of a command/page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsageEvent {
    pub id: String,
    pub page: String,
    pub action: String,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Aggregated usage for one command/page over a window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandUsage {
    pub page: String,
    pub count: u64,
    pub last_used: DateTime<Utc>,
}

/// One key/value row of the user profile store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileEntry {
    pub key: String,
    pub value: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

//! Reminder schedule configuration.

use serde::{Deserialize, Serialize};

const fn default_morning_hour() -> u32 {
    7
}

const fn default_evening_hour() -> u32 {
    21
}

const fn default_task_hour() -> u32 {
    8
}

const fn default_event_lead_minutes() -> i64 {
    15
}

/// When the reminder loop fires each class of reminder.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemindConfig {
    /// Hour (0-23) of the morning ritual reminder.
    #[serde(default = "default_morning_hour")]
    pub morning_hour: u32,

    /// Hour of the evening incomplete-rituals check-in.
    #[serde(default = "default_evening_hour")]
    pub evening_hour: u32,

    /// Hour of the tasks-due-today reminder.
    #[serde(default = "default_task_hour")]
    pub task_hour: u32,

    /// Minutes before an event's start time to announce it.
    #[serde(default = "default_event_lead_minutes")]
    pub event_lead_minutes: i64,
}

impl Default for RemindConfig {
    fn default() -> Self {
        Self {
            morning_hour: default_morning_hour(),
            evening_hour: default_evening_hour(),
            task_hour: default_task_hour(),
            event_lead_minutes: default_event_lead_minutes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_schedule() {
        let config = RemindConfig::default();
        assert_eq!(config.morning_hour, 7);
        assert_eq!(config.evening_hour, 21);
        assert_eq!(config.task_hour, 8);
        assert_eq!(config.event_lead_minutes, 15);
    }
}

//! Reminder evaluation for `remind check` / `remind watch`.
//!
//! Each call answers "what is due at this instant". Hour-based reminders
//! fire during their whole hour; the caller's polling cadence decides how
//! often the user actually sees them.

use chrono::{DateTime, Duration, Local, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DatabaseError;
use crate::service::MaggidService;

/// When each class of reminder fires. Mirrors the `[remind]` config section.
#[derive(Debug, Clone, Copy)]
pub struct ReminderSchedule {
    pub morning_hour: u32,
    pub evening_hour: u32,
    pub task_hour: u32,
    pub event_lead_minutes: i64,
}

impl Default for ReminderSchedule {
    fn default() -> Self {
        Self {
            morning_hour: 7,
            evening_hour: 21,
            task_hour: 8,
            event_lead_minutes: 15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    MorningRituals,
    EveningRituals,
    Event,
    TasksDue,
}

/// One due reminder, ready to print.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reminder {
    pub kind: ReminderKind,
    pub message: String,
}

impl MaggidService {
    /// Evaluate every reminder rule at `now`.
    pub async fn due_reminders(
        &self,
        now: DateTime<Utc>,
        schedule: &ReminderSchedule,
    ) -> Result<Vec<Reminder>, DatabaseError> {
        let local = now.with_timezone(&Local);
        let today = local.date_naive();
        let hour = local.hour();
        let mut due = Vec::new();

        if hour == schedule.morning_hour || hour == schedule.evening_hour {
            let open = self.open_ritual_count(today).await?;
            if open > 0 {
                if hour == schedule.morning_hour {
                    due.push(Reminder {
                        kind: ReminderKind::MorningRituals,
                        message: format!("{open} ritual(s) on today's list"),
                    });
                } else {
                    due.push(Reminder {
                        kind: ReminderKind::EveningRituals,
                        message: format!("{open} ritual(s) still incomplete today"),
                    });
                }
            }
        }

        let lead = Duration::minutes(schedule.event_lead_minutes);
        for event in self.events_between(now, now + lead).await? {
            let minutes = (event.start_time - now).num_minutes();
            due.push(Reminder {
                kind: ReminderKind::Event,
                message: format!("{} starts in {minutes} min", event.title),
            });
        }

        if hour == schedule.task_hour {
            let tasks = self.tasks_due_by(today).await?;
            if !tasks.is_empty() {
                due.push(Reminder {
                    kind: ReminderKind::TasksDue,
                    message: format!("{} task(s) due today or overdue", tasks.len()),
                });
            }
        }

        Ok(due)
    }

    /// Active rituals without a completion for `date`.
    async fn open_ritual_count(&self, date: chrono::NaiveDate) -> Result<usize, DatabaseError> {
        let rituals = self.list_rituals(false).await?;
        let done: std::collections::HashSet<String> = self
            .ritual_completions_on(date)
            .await?
            .into_iter()
            .map(|c| c.ritual_id)
            .collect();
        Ok(rituals.iter().filter(|r| !done.contains(&r.id)).count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use chrono::TimeZone;
    use mgd_core::enums::{RitualFrequency, TaskPriority};
    use pretty_assertions::assert_eq;

    // Pin hours by building the schedule around whatever local hour `now`
    // lands on, so tests hold in any timezone.
    fn now_at_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    fn local_hour(now: DateTime<Utc>) -> u32 {
        now.with_timezone(&Local).hour()
    }

    #[tokio::test]
    async fn morning_reminder_counts_open_rituals() {
        let svc = test_service().await;
        svc.create_ritual("Daf", None, None, RitualFrequency::Daily, None, 0)
            .await
            .unwrap();

        let now = now_at_noon();
        let schedule = ReminderSchedule {
            morning_hour: local_hour(now),
            ..ReminderSchedule::default()
        };

        let due = svc.due_reminders(now, &schedule).await.unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].kind, ReminderKind::MorningRituals);
    }

    #[tokio::test]
    async fn off_hour_is_quiet() {
        let svc = test_service().await;
        svc.create_ritual("Daf", None, None, RitualFrequency::Daily, None, 0)
            .await
            .unwrap();

        let now = now_at_noon();
        let schedule = ReminderSchedule {
            morning_hour: (local_hour(now) + 1) % 24,
            evening_hour: (local_hour(now) + 2) % 24,
            task_hour: (local_hour(now) + 3) % 24,
            ..ReminderSchedule::default()
        };

        assert!(svc.due_reminders(now, &schedule).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn event_fires_inside_lead_window() {
        let svc = test_service().await;
        let now = now_at_noon();
        svc.create_event(
            "Chasunah",
            None,
            now + Duration::minutes(10),
            None,
            None,
            None,
            None,
        )
        .await
        .unwrap();
        svc.create_event(
            "Later event",
            None,
            now + Duration::minutes(40),
            None,
            None,
            None,
            None,
        )
        .await
        .unwrap();

        let schedule = ReminderSchedule {
            morning_hour: (local_hour(now) + 1) % 24,
            evening_hour: (local_hour(now) + 2) % 24,
            task_hour: (local_hour(now) + 3) % 24,
            ..ReminderSchedule::default()
        };
        let due = svc.due_reminders(now, &schedule).await.unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].kind, ReminderKind::Event);
        assert!(due[0].message.contains("10 min"));
    }

    #[tokio::test]
    async fn task_hour_reports_due_tasks() {
        let svc = test_service().await;
        let now = now_at_noon();
        let today = now.with_timezone(&Local).date_naive();
        svc.create_task("Call the gabbai", None, Some(today), TaskPriority::High, None, None)
            .await
            .unwrap();

        let schedule = ReminderSchedule {
            morning_hour: (local_hour(now) + 1) % 24,
            evening_hour: (local_hour(now) + 2) % 24,
            task_hour: local_hour(now),
            ..ReminderSchedule::default()
        };
        let due = svc.due_reminders(now, &schedule).await.unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].kind, ReminderKind::TasksDue);
    }
}

//! Dashboard nudge evaluation.
//!
//! Nothing here is persisted; every call recomputes the candidates from
//! current state and keeps the top few by priority. `now` is an explicit
//! parameter so the rule set is testable.

use chrono::{DateTime, Days, Local, Timelike, Utc};

use mgd_core::nudge::{Nudge, NudgeKind, rank};

use crate::error::DatabaseError;
use crate::service::MaggidService;

impl MaggidService {
    /// Evaluate all nudge rules at `now` and return the ranked top picks.
    pub async fn dashboard_nudges(&self, now: DateTime<Utc>) -> Result<Vec<Nudge>, DatabaseError> {
        let today = now.with_timezone(&Local).date_naive();
        let mut candidates = Vec::new();

        // Next event within 3 days.
        let horizon = now + Days::new(3);
        if let Some(event) = self.events_between(now, horizon).await?.into_iter().next() {
            let when = event.start_time.with_timezone(&Local);
            candidates.push(Nudge {
                kind: NudgeKind::Event,
                message: format!(
                    "{} is coming up ({})",
                    event.title,
                    when.format("%a %H:%M")
                ),
                action: "calendar".into(),
                priority: 1,
            });
        }

        // A piece sitting in the practice stage with no recent rehearsal.
        let practicing = self
            .list_pipeline_items(Some(mgd_core::enums::PipelineStage::Practice), 1)
            .await?;
        if let Some(item) = practicing.first() {
            let stale = match self.last_practice_date().await? {
                Some(last) => last + Days::new(7) < today,
                None => true,
            };
            if stale {
                candidates.push(Nudge {
                    kind: NudgeKind::Practice,
                    message: format!("\"{}\" hasn't been practiced in a week", item.title),
                    action: "practice".into(),
                    priority: 2,
                });
            }
        }

        // Evening: no reflection yet today.
        let is_evening = now.with_timezone(&Local).hour() >= 17;
        if is_evening && self.get_reflection(today).await?.is_none() {
            candidates.push(Nudge {
                kind: NudgeKind::Reflection,
                message: "No reflection yet today".into(),
                action: "growth reflect".into(),
                priority: 2,
            });
        }

        // Rituals still open today.
        let rituals = self.list_rituals(false).await?;
        if !rituals.is_empty() {
            let done: std::collections::HashSet<String> = self
                .ritual_completions_on(today)
                .await?
                .into_iter()
                .map(|c| c.ritual_id)
                .collect();
            let open = rituals.iter().filter(|r| !done.contains(&r.id)).count();
            if open > 0 {
                candidates.push(Nudge {
                    kind: NudgeKind::Ritual,
                    message: format!("{open} ritual(s) still open today"),
                    action: "ritual".into(),
                    priority: 3,
                });
            }
        }

        // Story capture has gone quiet (nothing in the last 3 days).
        let recent_capture = self
            .list_captures(1)
            .await?
            .first()
            .is_some_and(|c| c.captured_date + Days::new(3) >= today);
        if !recent_capture {
            candidates.push(Nudge {
                kind: NudgeKind::Story,
                message: "No story captured in the last few days".into(),
                action: "capture".into(),
                priority: 4,
            });
        }

        Ok(rank(candidates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use chrono::{NaiveDate, TimeZone};
    use mgd_core::enums::{PipelineStage, RitualFrequency};
    use mgd_core::nudge::MAX_NUDGES;
    use pretty_assertions::assert_eq;

    // Noon UTC keeps the local calendar date stable in any test timezone.
    fn noon(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, d, 12, 0, 0).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[tokio::test]
    async fn empty_db_still_nudges_capture() {
        let svc = test_service().await;
        let nudges = svc.dashboard_nudges(noon(10)).await.unwrap();
        assert_eq!(nudges.len(), 1);
        assert_eq!(nudges[0].kind, NudgeKind::Story);
    }

    #[tokio::test]
    async fn event_nudge_outranks_everything() {
        let svc = test_service().await;
        svc.create_event("Sheva Berachos", None, noon(11), None, None, None, None)
            .await
            .unwrap();

        let nudges = svc.dashboard_nudges(noon(10)).await.unwrap();
        assert_eq!(nudges[0].kind, NudgeKind::Event);
        assert_eq!(nudges[0].priority, 1);
    }

    #[tokio::test]
    async fn far_event_is_not_a_candidate() {
        let svc = test_service().await;
        svc.create_event("Far off", None, noon(25), None, None, None, None)
            .await
            .unwrap();

        let nudges = svc.dashboard_nudges(noon(10)).await.unwrap();
        assert!(nudges.iter().all(|n| n.kind != NudgeKind::Event));
    }

    #[tokio::test]
    async fn practice_nudge_when_stage_stale() {
        let svc = test_service().await;
        let item = svc
            .create_pipeline_item("Pesach derasha", None, None, None)
            .await
            .unwrap();
        svc.set_pipeline_stage(&item.id, PipelineStage::Practice)
            .await
            .unwrap();

        let nudges = svc.dashboard_nudges(noon(10)).await.unwrap();
        assert!(nudges.iter().any(|n| n.kind == NudgeKind::Practice));

        // A fresh practice log clears it.
        svc.log_practice(None, day(9), None, None, None, None, None, None)
            .await
            .unwrap();
        let nudges = svc.dashboard_nudges(noon(10)).await.unwrap();
        assert!(nudges.iter().all(|n| n.kind != NudgeKind::Practice));
    }

    #[tokio::test]
    async fn practice_log_exactly_a_week_old_is_still_recent() {
        let svc = test_service().await;
        let item = svc
            .create_pipeline_item("Piece", None, None, None)
            .await
            .unwrap();
        svc.set_pipeline_stage(&item.id, PipelineStage::Practice)
            .await
            .unwrap();
        svc.log_practice(None, day(3), None, None, None, None, None, None)
            .await
            .unwrap();

        // Seven days on the dot still counts as practiced.
        let nudges = svc.dashboard_nudges(noon(10)).await.unwrap();
        assert!(nudges.iter().all(|n| n.kind != NudgeKind::Practice));

        // One more day and the stage is stale.
        let nudges = svc.dashboard_nudges(noon(11)).await.unwrap();
        assert!(nudges.iter().any(|n| n.kind == NudgeKind::Practice));
    }

    #[tokio::test]
    async fn capture_exactly_three_days_old_is_still_recent() {
        let svc = test_service().await;
        svc.add_capture(1, "A moment of chesed you saw.", "On the bus.", None, day(7))
            .await
            .unwrap();

        let nudges = svc.dashboard_nudges(noon(10)).await.unwrap();
        assert!(nudges.iter().all(|n| n.kind != NudgeKind::Story));

        let nudges = svc.dashboard_nudges(noon(11)).await.unwrap();
        assert!(nudges.iter().any(|n| n.kind == NudgeKind::Story));
    }

    #[tokio::test]
    async fn ritual_nudge_clears_when_all_done() {
        let svc = test_service().await;
        let ritual = svc
            .create_ritual("Daf", None, None, RitualFrequency::Daily, None, 0)
            .await
            .unwrap();

        let nudges = svc.dashboard_nudges(noon(10)).await.unwrap();
        assert!(nudges.iter().any(|n| n.kind == NudgeKind::Ritual));

        svc.complete_ritual(&ritual.id, day(10), None).await.unwrap();
        let nudges = svc.dashboard_nudges(noon(10)).await.unwrap();
        assert!(nudges.iter().all(|n| n.kind != NudgeKind::Ritual));
    }

    #[tokio::test]
    async fn at_most_three_nudges() {
        let svc = test_service().await;
        svc.create_event("Soon", None, noon(11), None, None, None, None)
            .await
            .unwrap();
        let item = svc
            .create_pipeline_item("Piece", None, None, None)
            .await
            .unwrap();
        svc.set_pipeline_stage(&item.id, PipelineStage::Practice)
            .await
            .unwrap();
        svc.create_ritual("Daf", None, None, RitualFrequency::Daily, None, 0)
            .await
            .unwrap();

        let nudges = svc.dashboard_nudges(noon(10)).await.unwrap();
        assert!(nudges.len() <= MAX_NUDGES);
        assert_eq!(nudges[0].priority, 1);
    }
}

//! Daily story-capture repository.

use chrono::{Datelike, Days, NaiveDate, Utc};

use mgd_core::entities::{CaptureStats, Story, StoryCapture};
use mgd_core::ids::PREFIX_CAPTURE;
use mgd_core::streak::current_streak;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_date, parse_datetime};
use crate::seed::CAPTURE_PROMPTS;
use crate::service::MaggidService;

const SELECT_COLS: &str = "id, prompt_day, prompt_text, response, emotion, captured_date, \
                           promoted_to_story_id, created_at";

fn row_to_capture(row: &libsql::Row) -> Result<StoryCapture, DatabaseError> {
    Ok(StoryCapture {
        id: row.get(0)?,
        prompt_day: row.get(1)?,
        prompt_text: row.get(2)?,
        response: row.get(3)?,
        emotion: get_opt_string(row, 4)?,
        captured_date: parse_date(&row.get::<String>(5)?)?,
        promoted_to_story_id: get_opt_string(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

/// The rotating prompt for a calendar date (day of month, mod 30).
#[must_use]
pub fn prompt_for_date(date: NaiveDate) -> (i64, &'static str) {
    let idx = (date.day0() as usize) % CAPTURE_PROMPTS.len();
    (idx as i64 + 1, CAPTURE_PROMPTS[idx])
}

impl MaggidService {
    /// Record a capture against a prompt. `prompt_day` 0 means a free-form
    /// (today-mode) capture with caller-supplied prompt text.
    pub async fn add_capture(
        &self,
        prompt_day: i64,
        prompt_text: &str,
        response: &str,
        emotion: Option<&str>,
        captured_date: NaiveDate,
    ) -> Result<StoryCapture, DatabaseError> {
        if response.trim().is_empty() {
            return Err(DatabaseError::InvalidState("capture response is empty".into()));
        }

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_CAPTURE).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO story_captures ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL, ?7)"
                ),
                libsql::params![
                    id.as_str(),
                    prompt_day,
                    prompt_text,
                    response,
                    emotion,
                    captured_date.to_string(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(StoryCapture {
            id,
            prompt_day,
            prompt_text: prompt_text.to_string(),
            response: response.to_string(),
            emotion: emotion.map(String::from),
            captured_date,
            promoted_to_story_id: None,
            created_at: now,
        })
    }

    pub async fn get_capture(&self, id: &str) -> Result<StoryCapture, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM story_captures WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_capture(&row)
    }

    pub async fn list_captures(&self, limit: u32) -> Result<Vec<StoryCapture>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM story_captures
                     ORDER BY captured_date DESC, created_at DESC LIMIT {limit}"
                ),
                (),
            )
            .await?;

        let mut captures = Vec::new();
        while let Some(row) = rows.next().await? {
            captures.push(row_to_capture(&row)?);
        }
        Ok(captures)
    }

    /// Promote a capture into a full bank story. The capture keeps pointing
    /// at the story it became; promoting twice is rejected.
    pub async fn promote_capture(
        &self,
        capture_id: &str,
        title: &str,
        tags: Vec<String>,
    ) -> Result<Story, DatabaseError> {
        let capture = self.get_capture(capture_id).await?;
        if let Some(existing) = capture.promoted_to_story_id {
            return Err(DatabaseError::InvalidState(format!(
                "capture {capture_id} already promoted to {existing}"
            )));
        }

        let story = self
            .add_story(title, &capture.response, tags, None, Vec::new())
            .await?;

        self.db()
            .conn()
            .execute(
                "UPDATE story_captures SET promoted_to_story_id = ?1 WHERE id = ?2",
                libsql::params![story.id.as_str(), capture_id],
            )
            .await?;

        Ok(story)
    }

    /// Aggregate stats for the capture screen: lifetime total, current
    /// daily streak, and captures in the 7 days ending `today`.
    pub async fn capture_stats(&self, today: NaiveDate) -> Result<CaptureStats, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT captured_date FROM story_captures ORDER BY captured_date DESC",
                (),
            )
            .await?;

        let mut dates = Vec::new();
        while let Some(row) = rows.next().await? {
            dates.push(parse_date(&row.get::<String>(0)?)?);
        }

        let week_start = today - Days::new(6);
        let this_week = dates
            .iter()
            .filter(|d| **d >= week_start && **d <= today)
            .count();

        Ok(CaptureStats {
            total_captures: dates.len(),
            current_streak: current_streak(&dates, today),
            this_week,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use pretty_assertions::assert_eq;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[tokio::test]
    async fn prompt_rotates_by_day_of_month() {
        let (day, text) = prompt_for_date(date(1));
        assert_eq!(day, 1);
        assert_eq!(text, CAPTURE_PROMPTS[0]);

        let (day, _) = prompt_for_date(NaiveDate::from_ymd_opt(2026, 3, 31).unwrap());
        assert_eq!(day, 1, "day 31 wraps to the first prompt");
    }

    #[tokio::test]
    async fn empty_response_rejected() {
        let svc = test_service().await;
        let err = svc
            .add_capture(1, "prompt", "   ", None, date(1))
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidState(_)));
    }

    #[tokio::test]
    async fn promote_creates_story_once() {
        let svc = test_service().await;
        let capture = svc
            .add_capture(3, "prompt", "The time the car broke down...", None, date(5))
            .await
            .unwrap();

        let story = svc
            .promote_capture(&capture.id, "The Breakdown", vec!["hashgacha".into()])
            .await
            .unwrap();
        assert_eq!(story.content, "The time the car broke down...");

        let reloaded = svc.get_capture(&capture.id).await.unwrap();
        assert_eq!(reloaded.promoted_to_story_id.as_deref(), Some(story.id.as_str()));

        let err = svc
            .promote_capture(&capture.id, "Again", vec![])
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidState(_)));
    }

    #[tokio::test]
    async fn stats_count_streak_and_week() {
        let svc = test_service().await;
        for d in [8, 9, 10] {
            svc.add_capture(0, "p", "r", None, date(d)).await.unwrap();
        }
        // Old capture outside the window.
        svc.add_capture(0, "p", "r", None, date(1)).await.unwrap();

        let stats = svc.capture_stats(date(10)).await.unwrap();
        assert_eq!(stats.total_captures, 4);
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.this_week, 3);
    }
}

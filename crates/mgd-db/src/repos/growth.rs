//! Goals and daily reflection repository, plus the growth starter seed.

use chrono::{Datelike, Days, NaiveDate, Utc};

use mgd_core::entities::{DailyReflection, Goal, GoalNote};
use mgd_core::enums::GoalStatus;
use mgd_core::ids::{PREFIX_GOAL, PREFIX_REFLECTION};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_date, parse_datetime, parse_enum, parse_json};
use crate::seed::{REFLECTION_PROMPTS, STARTER_RITUALS};
use crate::service::MaggidService;
use crate::updates::goal::GoalUpdate;

const GOAL_COLS: &str =
    "id, title, description, category, status, target_date, sort_order, created_at, updated_at";
const REFLECTION_COLS: &str = "id, date, wins, struggles, goal_notes, gratitude, \
                               tomorrow_focus, growth_prompt, themes, streak_count, created_at";

fn row_to_goal(row: &libsql::Row) -> Result<Goal, DatabaseError> {
    Ok(Goal {
        id: row.get(0)?,
        title: row.get(1)?,
        description: get_opt_string(row, 2)?,
        category: get_opt_string(row, 3)?,
        status: parse_enum(&row.get::<String>(4)?)?,
        target_date: crate::helpers::parse_optional_date(get_opt_string(row, 5)?.as_deref())?,
        sort_order: row.get(6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

fn row_to_reflection(row: &libsql::Row) -> Result<DailyReflection, DatabaseError> {
    Ok(DailyReflection {
        id: row.get(0)?,
        date: parse_date(&row.get::<String>(1)?)?,
        wins: get_opt_string(row, 2)?,
        struggles: get_opt_string(row, 3)?,
        goal_notes: parse_json(&row.get::<String>(4)?)?,
        gratitude: get_opt_string(row, 5)?,
        tomorrow_focus: get_opt_string(row, 6)?,
        growth_prompt: get_opt_string(row, 7)?,
        themes: parse_json(&row.get::<String>(8)?)?,
        streak_count: row.get(9)?,
        created_at: parse_datetime(&row.get::<String>(10)?)?,
    })
}

/// The rotating evening prompt for a calendar date.
#[must_use]
pub fn reflection_prompt_for_date(date: NaiveDate) -> &'static str {
    REFLECTION_PROMPTS[(date.day0() as usize) % REFLECTION_PROMPTS.len()]
}

impl MaggidService {
    pub async fn create_goal(
        &self,
        title: &str,
        description: Option<&str>,
        category: Option<&str>,
        target_date: Option<NaiveDate>,
        sort_order: i64,
    ) -> Result<Goal, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_GOAL).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO goals ({GOAL_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
                ),
                libsql::params![
                    id.as_str(),
                    title,
                    description,
                    category,
                    GoalStatus::Active.as_str(),
                    target_date.map(|d| d.to_string()),
                    sort_order,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Goal {
            id,
            title: title.to_string(),
            description: description.map(String::from),
            category: category.map(String::from),
            status: GoalStatus::Active,
            target_date,
            sort_order,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_goal(&self, id: &str) -> Result<Goal, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {GOAL_COLS} FROM goals WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_goal(&row)
    }

    pub async fn update_goal(
        &self,
        goal_id: &str,
        update: GoalUpdate,
    ) -> Result<Goal, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref title) = update.title {
            sets.push(format!("title = ?{idx}"));
            params.push(title.clone().into());
            idx += 1;
        }
        if let Some(ref description) = update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(description.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(ref category) = update.category {
            sets.push(format!("category = ?{idx}"));
            params.push(category.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(status) = update.status {
            sets.push(format!("status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
        }
        if let Some(target_date) = update.target_date {
            sets.push(format!("target_date = ?{idx}"));
            params.push(target_date.map_or(libsql::Value::Null, |d| d.to_string().into()));
            idx += 1;
        }
        if let Some(sort_order) = update.sort_order {
            sets.push(format!("sort_order = ?{idx}"));
            params.push(sort_order.into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_goal(goal_id).await;
        }

        let now = Utc::now();
        sets.push(format!("updated_at = ?{idx}"));
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(goal_id.into());
        let sql = format!("UPDATE goals SET {} WHERE id = ?{idx}", sets.join(", "));
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        self.get_goal(goal_id).await
    }

    /// Active goals in sort order; pass a status to see achieved/archived.
    pub async fn list_goals(&self, status: Option<GoalStatus>) -> Result<Vec<Goal>, DatabaseError> {
        let status = status.unwrap_or(GoalStatus::Active);
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {GOAL_COLS} FROM goals
                     WHERE status = ?1 ORDER BY sort_order, created_at"
                ),
                [status.as_str()],
            )
            .await?;

        let mut goals = Vec::new();
        while let Some(row) = rows.next().await? {
            goals.push(row_to_goal(&row)?);
        }
        Ok(goals)
    }

    pub async fn delete_goal(&self, goal_id: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute("DELETE FROM goals WHERE id = ?1", [goal_id])
            .await?;
        Ok(())
    }

    /// Save (or revise) the reflection for `date`.
    ///
    /// The first save computes `streak_count` as yesterday's count + 1, or 1
    /// after a gap, and stamps the rotating growth prompt. Revising the same
    /// date keeps both.
    #[allow(clippy::too_many_arguments)]
    pub async fn save_reflection(
        &self,
        date: NaiveDate,
        wins: Option<&str>,
        struggles: Option<&str>,
        goal_notes: Vec<GoalNote>,
        gratitude: Option<&str>,
        tomorrow_focus: Option<&str>,
        themes: Vec<String>,
    ) -> Result<DailyReflection, DatabaseError> {
        let goal_notes_json =
            serde_json::to_string(&goal_notes).map_err(|e| DatabaseError::Other(e.into()))?;
        let themes_json =
            serde_json::to_string(&themes).map_err(|e| DatabaseError::Other(e.into()))?;

        if let Some(existing) = self.get_reflection(date).await? {
            self.db()
                .conn()
                .execute(
                    "UPDATE daily_reflections
                     SET wins = ?1, struggles = ?2, goal_notes = ?3, gratitude = ?4,
                         tomorrow_focus = ?5, themes = ?6
                     WHERE id = ?7",
                    libsql::params![
                        wins,
                        struggles,
                        goal_notes_json.as_str(),
                        gratitude,
                        tomorrow_focus,
                        themes_json.as_str(),
                        existing.id.as_str()
                    ],
                )
                .await?;
            return self
                .get_reflection(date)
                .await?
                .ok_or(DatabaseError::NoResult);
        }

        let yesterday = date - Days::new(1);
        let streak_count = match self.get_reflection(yesterday).await? {
            Some(prev) => prev.streak_count + 1,
            None => 1,
        };

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_REFLECTION).await?;
        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO daily_reflections ({REFLECTION_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)"
                ),
                libsql::params![
                    id.as_str(),
                    date.to_string(),
                    wins,
                    struggles,
                    goal_notes_json.as_str(),
                    gratitude,
                    tomorrow_focus,
                    reflection_prompt_for_date(date),
                    themes_json.as_str(),
                    streak_count,
                    now.to_rfc3339()
                ],
            )
            .await?;

        self.get_reflection(date)
            .await?
            .ok_or(DatabaseError::NoResult)
    }

    pub async fn get_reflection(
        &self,
        date: NaiveDate,
    ) -> Result<Option<DailyReflection>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {REFLECTION_COLS} FROM daily_reflections WHERE date = ?1"),
                [date.to_string()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_reflection(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn list_reflections(
        &self,
        limit: u32,
    ) -> Result<Vec<DailyReflection>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {REFLECTION_COLS} FROM daily_reflections
                     ORDER BY date DESC LIMIT {limit}"
                ),
                (),
            )
            .await?;

        let mut reflections = Vec::new();
        while let Some(row) = rows.next().await? {
            reflections.push(row_to_reflection(&row)?);
        }
        Ok(reflections)
    }

    /// Install the starter rituals. Skips the whole step when any ritual
    /// already exists, so re-running setup never duplicates.
    pub async fn seed_growth(&self) -> Result<u32, DatabaseError> {
        if !self.list_rituals(true).await?.is_empty() {
            return Ok(0);
        }

        let mut inserted = 0u32;
        for (sort_order, r) in (0i64..).zip(STARTER_RITUALS.iter()) {
            self.create_ritual(
                r.name,
                Some(r.description),
                Some(r.category),
                r.frequency,
                None,
                sort_order,
            )
            .await?;
            inserted += 1;
        }
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use crate::updates::goal::GoalUpdateBuilder;
    use pretty_assertions::assert_eq;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[tokio::test]
    async fn goal_lifecycle() {
        let svc = test_service().await;
        let goal = svc
            .create_goal("Finish Moed", None, Some("learning"), None, 0)
            .await
            .unwrap();
        assert_eq!(goal.status, GoalStatus::Active);

        let achieved = svc
            .update_goal(
                &goal.id,
                GoalUpdateBuilder::new().status(GoalStatus::Achieved).build(),
            )
            .await
            .unwrap();
        assert_eq!(achieved.status, GoalStatus::Achieved);

        assert!(svc.list_goals(None).await.unwrap().is_empty());
        assert_eq!(
            svc.list_goals(Some(GoalStatus::Achieved)).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn reflection_streak_continues_from_yesterday() {
        let svc = test_service().await;
        let r1 = svc
            .save_reflection(date(10), Some("w"), None, vec![], None, None, vec![])
            .await
            .unwrap();
        assert_eq!(r1.streak_count, 1);

        let r2 = svc
            .save_reflection(date(11), None, None, vec![], None, None, vec![])
            .await
            .unwrap();
        assert_eq!(r2.streak_count, 2);

        // Gap: day 13 restarts at 1.
        let r3 = svc
            .save_reflection(date(13), None, None, vec![], None, None, vec![])
            .await
            .unwrap();
        assert_eq!(r3.streak_count, 1);
    }

    #[tokio::test]
    async fn revising_keeps_streak_and_prompt() {
        let svc = test_service().await;
        let first = svc
            .save_reflection(date(10), Some("draft"), None, vec![], None, None, vec![])
            .await
            .unwrap();

        let revised = svc
            .save_reflection(
                date(10),
                Some("final"),
                Some("ran out of time"),
                vec![GoalNote {
                    goal_id: "gol-11112222".into(),
                    note: "pushed forward".into(),
                }],
                None,
                None,
                vec!["consistency".into()],
            )
            .await
            .unwrap();

        assert_eq!(revised.id, first.id);
        assert_eq!(revised.streak_count, first.streak_count);
        assert_eq!(revised.growth_prompt, first.growth_prompt);
        assert_eq!(revised.wins.as_deref(), Some("final"));
        assert_eq!(revised.goal_notes.len(), 1);
    }

    #[tokio::test]
    async fn growth_seed_runs_once() {
        let svc = test_service().await;
        let n = svc.seed_growth().await.unwrap();
        assert!(n > 0);
        assert_eq!(svc.seed_growth().await.unwrap(), 0);
        assert_eq!(svc.list_rituals(true).await.unwrap().len(), n as usize);
    }
}

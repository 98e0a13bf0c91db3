//! Ritual tracker repository.

use chrono::{NaiveDate, Utc};

use mgd_core::entities::{Ritual, RitualCompletion};
use mgd_core::enums::RitualFrequency;
use mgd_core::ids::{PREFIX_RITUAL, PREFIX_RITUAL_COMPLETION};
use mgd_core::streak::current_streak;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_date, parse_datetime, parse_enum};
use crate::service::MaggidService;

const RITUAL_COLS: &str =
    "id, name, description, category, frequency, content, sort_order, active, created_at";
const COMPLETION_COLS: &str = "id, ritual_id, completed_date, notes";

fn row_to_ritual(row: &libsql::Row) -> Result<Ritual, DatabaseError> {
    Ok(Ritual {
        id: row.get(0)?,
        name: row.get(1)?,
        description: get_opt_string(row, 2)?,
        category: get_opt_string(row, 3)?,
        frequency: parse_enum(&row.get::<String>(4)?)?,
        content: get_opt_string(row, 5)?,
        sort_order: row.get(6)?,
        active: row.get::<i64>(7)? != 0,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

fn row_to_completion(row: &libsql::Row) -> Result<RitualCompletion, DatabaseError> {
    Ok(RitualCompletion {
        id: row.get(0)?,
        ritual_id: row.get(1)?,
        completed_date: parse_date(&row.get::<String>(2)?)?,
        notes: get_opt_string(row, 3)?,
    })
}

impl MaggidService {
    pub async fn create_ritual(
        &self,
        name: &str,
        description: Option<&str>,
        category: Option<&str>,
        frequency: RitualFrequency,
        content: Option<&str>,
        sort_order: i64,
    ) -> Result<Ritual, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_RITUAL).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO rituals ({RITUAL_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 1, ?8)"
                ),
                libsql::params![
                    id.as_str(),
                    name,
                    description,
                    category,
                    frequency.as_str(),
                    content,
                    sort_order,
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Ritual {
            id,
            name: name.to_string(),
            description: description.map(String::from),
            category: category.map(String::from),
            frequency,
            content: content.map(String::from),
            sort_order,
            active: true,
            created_at: now,
        })
    }

    pub async fn get_ritual(&self, id: &str) -> Result<Ritual, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {RITUAL_COLS} FROM rituals WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_ritual(&row)
    }

    /// Active rituals in sort order; pass `include_inactive` for settings views.
    pub async fn list_rituals(&self, include_inactive: bool) -> Result<Vec<Ritual>, DatabaseError> {
        let sql = if include_inactive {
            format!("SELECT {RITUAL_COLS} FROM rituals ORDER BY sort_order, created_at")
        } else {
            format!(
                "SELECT {RITUAL_COLS} FROM rituals WHERE active = 1
                 ORDER BY sort_order, created_at"
            )
        };
        let mut rows = self.db().conn().query(&sql, ()).await?;

        let mut rituals = Vec::new();
        while let Some(row) = rows.next().await? {
            rituals.push(row_to_ritual(&row)?);
        }
        Ok(rituals)
    }

    /// Retire a ritual without losing its completion history.
    pub async fn deactivate_ritual(&self, ritual_id: &str) -> Result<Ritual, DatabaseError> {
        self.db()
            .conn()
            .execute("UPDATE rituals SET active = 0 WHERE id = ?1", [ritual_id])
            .await?;
        self.get_ritual(ritual_id).await
    }

    /// Mark a ritual done for a date. Checking twice is a no-op.
    pub async fn complete_ritual(
        &self,
        ritual_id: &str,
        date: NaiveDate,
        notes: Option<&str>,
    ) -> Result<RitualCompletion, DatabaseError> {
        // FK check up front for a clearer error than the constraint's.
        self.get_ritual(ritual_id).await?;

        let id = self.db().generate_id(PREFIX_RITUAL_COMPLETION).await?;
        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT OR IGNORE INTO ritual_completions ({COMPLETION_COLS})
                     VALUES (?1, ?2, ?3, ?4)"
                ),
                libsql::params![id.as_str(), ritual_id, date.to_string(), notes],
            )
            .await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {COMPLETION_COLS} FROM ritual_completions
                     WHERE ritual_id = ?1 AND completed_date = ?2"
                ),
                libsql::params![ritual_id, date.to_string()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_completion(&row)
    }

    /// Remove a day's checkmark (an unchecked checkbox).
    pub async fn uncomplete_ritual(
        &self,
        ritual_id: &str,
        date: NaiveDate,
    ) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "DELETE FROM ritual_completions WHERE ritual_id = ?1 AND completed_date = ?2",
                libsql::params![ritual_id, date.to_string()],
            )
            .await?;
        Ok(())
    }

    /// All completions recorded for a date, across rituals.
    pub async fn ritual_completions_on(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<RitualCompletion>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {COMPLETION_COLS} FROM ritual_completions
                     WHERE completed_date = ?1"
                ),
                [date.to_string()],
            )
            .await?;

        let mut completions = Vec::new();
        while let Some(row) = rows.next().await? {
            completions.push(row_to_completion(&row)?);
        }
        Ok(completions)
    }

    /// Consecutive-day streak for one ritual, counted back from `today`.
    pub async fn ritual_streak(
        &self,
        ritual_id: &str,
        today: NaiveDate,
    ) -> Result<u32, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT completed_date FROM ritual_completions
                 WHERE ritual_id = ?1 ORDER BY completed_date DESC",
                [ritual_id],
            )
            .await?;

        let mut dates = Vec::new();
        while let Some(row) = rows.next().await? {
            dates.push(parse_date(&row.get::<String>(0)?)?);
        }
        Ok(current_streak(&dates, today))
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

    async fn ritual(svc: &MaggidService) -> String {
        svc.create_ritual("Modeh Ani", None, None, RitualFrequency::Daily, None, 0)
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn complete_is_idempotent() {
        let svc = test_service().await;
        let id = ritual(&svc).await;

        let first = svc.complete_ritual(&id, date(10), None).await.unwrap();
        let second = svc.complete_ritual(&id, date(10), None).await.unwrap();
        assert_eq!(first.id, second.id);

        assert_eq!(svc.ritual_completions_on(date(10)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn uncomplete_removes_checkmark() {
        let svc = test_service().await;
        let id = ritual(&svc).await;
        svc.complete_ritual(&id, date(10), None).await.unwrap();
        svc.uncomplete_ritual(&id, date(10)).await.unwrap();
        assert!(svc.ritual_completions_on(date(10)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn streak_counts_consecutive_days() {
        let svc = test_service().await;
        let id = ritual(&svc).await;
        for d in [8, 9, 10] {
            svc.complete_ritual(&id, date(d), None).await.unwrap();
        }

        assert_eq!(svc.ritual_streak(&id, date(10)).await.unwrap(), 3);
        // A gap before day 8 doesn't matter; a stale streak reads 0.
        assert_eq!(svc.ritual_streak(&id, date(15)).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn deactivated_hidden_from_default_list() {
        let svc = test_service().await;
        let id = ritual(&svc).await;
        svc.deactivate_ritual(&id).await.unwrap();

        assert!(svc.list_rituals(false).await.unwrap().is_empty());
        assert_eq!(svc.list_rituals(true).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn completing_unknown_ritual_fails() {
        let svc = test_service().await;
        let err = svc
            .complete_ritual("rit-missing", date(1), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::NoResult));
    }
}

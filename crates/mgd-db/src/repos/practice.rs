//! Practice log and delivery journal repository.

use chrono::{NaiveDate, Utc};

use mgd_core::entities::{DeliveryEntry, PracticeLog};
use mgd_core::ids::{PREFIX_DELIVERY, PREFIX_PRACTICE_LOG};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_date, parse_datetime};
use crate::service::MaggidService;

const PRACTICE_COLS: &str = "id, pipeline_id, date, duration_minutes, practice_type, \
                             vocal_rating, vitality_rating, visual_rating, notes, created_at";
const DELIVERY_COLS: &str = "id, pipeline_id, date, audience_description, what_landed, \
                             what_didnt, audience_reactions, overall_rating, lessons_learned, \
                             created_at";

fn row_to_practice(row: &libsql::Row) -> Result<PracticeLog, DatabaseError> {
    Ok(PracticeLog {
        id: row.get(0)?,
        pipeline_id: get_opt_string(row, 1)?,
        date: parse_date(&row.get::<String>(2)?)?,
        duration_minutes: row.get(3)?,
        practice_type: get_opt_string(row, 4)?,
        vocal_rating: row.get(5)?,
        vitality_rating: row.get(6)?,
        visual_rating: row.get(7)?,
        notes: get_opt_string(row, 8)?,
        created_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

fn row_to_delivery(row: &libsql::Row) -> Result<DeliveryEntry, DatabaseError> {
    Ok(DeliveryEntry {
        id: row.get(0)?,
        pipeline_id: get_opt_string(row, 1)?,
        date: parse_date(&row.get::<String>(2)?)?,
        audience_description: get_opt_string(row, 3)?,
        what_landed: get_opt_string(row, 4)?,
        what_didnt: get_opt_string(row, 5)?,
        audience_reactions: get_opt_string(row, 6)?,
        overall_rating: row.get(7)?,
        lessons_learned: get_opt_string(row, 8)?,
        created_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

fn check_rating(name: &str, rating: Option<i64>) -> Result<(), DatabaseError> {
    match rating {
        Some(r) if !(1..=5).contains(&r) => Err(DatabaseError::InvalidState(format!(
            "{name} rating {r} out of range 1-5"
        ))),
        _ => Ok(()),
    }
}

impl MaggidService {
    #[allow(clippy::too_many_arguments)]
    pub async fn log_practice(
        &self,
        pipeline_id: Option<&str>,
        date: NaiveDate,
        duration_minutes: Option<i64>,
        practice_type: Option<&str>,
        vocal_rating: Option<i64>,
        vitality_rating: Option<i64>,
        visual_rating: Option<i64>,
        notes: Option<&str>,
    ) -> Result<PracticeLog, DatabaseError> {
        check_rating("vocal", vocal_rating)?;
        check_rating("vitality", vitality_rating)?;
        check_rating("visual", visual_rating)?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_PRACTICE_LOG).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO practice_logs ({PRACTICE_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"
                ),
                libsql::params![
                    id.as_str(),
                    pipeline_id,
                    date.to_string(),
                    duration_minutes,
                    practice_type,
                    vocal_rating,
                    vitality_rating,
                    visual_rating,
                    notes,
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(PracticeLog {
            id,
            pipeline_id: pipeline_id.map(String::from),
            date,
            duration_minutes,
            practice_type: practice_type.map(String::from),
            vocal_rating,
            vitality_rating,
            visual_rating,
            notes: notes.map(String::from),
            created_at: now,
        })
    }

    /// Newest first; `pipeline_id` narrows to one piece.
    pub async fn list_practice(
        &self,
        pipeline_id: Option<&str>,
        limit: u32,
    ) -> Result<Vec<PracticeLog>, DatabaseError> {
        let mut rows = match pipeline_id {
            Some(pid) => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {PRACTICE_COLS} FROM practice_logs
                             WHERE pipeline_id = ?1 ORDER BY date DESC LIMIT {limit}"
                        ),
                        [pid],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {PRACTICE_COLS} FROM practice_logs
                             ORDER BY date DESC LIMIT {limit}"
                        ),
                        (),
                    )
                    .await?
            }
        };

        let mut logs = Vec::new();
        while let Some(row) = rows.next().await? {
            logs.push(row_to_practice(&row)?);
        }
        Ok(logs)
    }

    /// The most recent practice date, for the dashboard nudge.
    pub async fn last_practice_date(&self) -> Result<Option<NaiveDate>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT MAX(date) FROM practice_logs", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        match row.get::<Option<String>>(0)? {
            Some(s) if !s.is_empty() => Ok(Some(parse_date(&s)?)),
            _ => Ok(None),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn add_delivery(
        &self,
        pipeline_id: Option<&str>,
        date: NaiveDate,
        audience_description: Option<&str>,
        what_landed: Option<&str>,
        what_didnt: Option<&str>,
        audience_reactions: Option<&str>,
        overall_rating: Option<i64>,
        lessons_learned: Option<&str>,
    ) -> Result<DeliveryEntry, DatabaseError> {
        check_rating("overall", overall_rating)?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_DELIVERY).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO delivery_journal ({DELIVERY_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"
                ),
                libsql::params![
                    id.as_str(),
                    pipeline_id,
                    date.to_string(),
                    audience_description,
                    what_landed,
                    what_didnt,
                    audience_reactions,
                    overall_rating,
                    lessons_learned,
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(DeliveryEntry {
            id,
            pipeline_id: pipeline_id.map(String::from),
            date,
            audience_description: audience_description.map(String::from),
            what_landed: what_landed.map(String::from),
            what_didnt: what_didnt.map(String::from),
            audience_reactions: audience_reactions.map(String::from),
            overall_rating,
            lessons_learned: lessons_learned.map(String::from),
            created_at: now,
        })
    }

    pub async fn list_deliveries(&self, limit: u32) -> Result<Vec<DeliveryEntry>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {DELIVERY_COLS} FROM delivery_journal
                     ORDER BY date DESC LIMIT {limit}"
                ),
                (),
            )
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_delivery(&row)?);
        }
        Ok(entries)
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
    async fn log_and_list_practice() {
        let svc = test_service().await;
        svc.log_practice(None, date(3), Some(20), Some("mirror"), Some(3), Some(4), Some(2), None)
            .await
            .unwrap();
        svc.log_practice(Some("pip-11112222"), date(5), None, None, None, None, None, None)
            .await
            .unwrap();

        let all = svc.list_practice(None, 50).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].date, date(5));

        let for_item = svc.list_practice(Some("pip-11112222"), 50).await.unwrap();
        assert_eq!(for_item.len(), 1);
    }

    #[tokio::test]
    async fn rating_out_of_range_rejected() {
        let svc = test_service().await;
        let err = svc
            .log_practice(None, date(1), None, None, Some(6), None, None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidState(_)));
    }

    #[tokio::test]
    async fn last_practice_date_tracks_max() {
        let svc = test_service().await;
        assert_eq!(svc.last_practice_date().await.unwrap(), None);

        svc.log_practice(None, date(3), None, None, None, None, None, None)
            .await
            .unwrap();
        svc.log_practice(None, date(9), None, None, None, None, None, None)
            .await
            .unwrap();
        assert_eq!(svc.last_practice_date().await.unwrap(), Some(date(9)));
    }

    #[tokio::test]
    async fn delivery_round_trip() {
        let svc = test_service().await;
        svc.add_delivery(
            None,
            date(7),
            Some("shul seudah shlishis"),
            Some("the mashal"),
            Some("ran long"),
            None,
            Some(4),
            Some("cut the second half"),
        )
        .await
        .unwrap();

        let entries = svc.list_deliveries(10).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].overall_rating, Some(4));
    }
}

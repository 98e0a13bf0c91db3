//! Calendar event and weekly schedule block repository.

use chrono::{DateTime, NaiveTime, Utc};

use mgd_core::entities::{CalendarEvent, ScheduleBlock};
use mgd_core::ids::{PREFIX_BLOCK, PREFIX_EVENT};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_optional_datetime, parse_time};
use crate::service::MaggidService;

const EVENT_COLS: &str = "id, title, description, start_time, end_time, event_type, recurring, \
                          pipeline_id, created_at";
const BLOCK_COLS: &str = "id, day_of_week, start_time, end_time, activity, category, notes";

fn row_to_event(row: &libsql::Row) -> Result<CalendarEvent, DatabaseError> {
    Ok(CalendarEvent {
        id: row.get(0)?,
        title: row.get(1)?,
        description: get_opt_string(row, 2)?,
        start_time: parse_datetime(&row.get::<String>(3)?)?,
        end_time: parse_optional_datetime(get_opt_string(row, 4)?.as_deref())?,
        event_type: get_opt_string(row, 5)?,
        recurring: get_opt_string(row, 6)?,
        pipeline_id: get_opt_string(row, 7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

fn row_to_block(row: &libsql::Row) -> Result<ScheduleBlock, DatabaseError> {
    let day_of_week = row.get::<Option<i64>>(1)?;
    let day_of_week = match day_of_week {
        Some(d @ 0..=6) => Some(u8::try_from(d).map_err(|e| DatabaseError::Other(e.into()))?),
        Some(d) => {
            return Err(DatabaseError::InvalidState(format!(
                "day_of_week {d} out of range"
            )));
        }
        None => None,
    };
    Ok(ScheduleBlock {
        id: row.get(0)?,
        day_of_week,
        start_time: parse_time(&row.get::<String>(2)?)?,
        end_time: parse_time(&row.get::<String>(3)?)?,
        activity: row.get(4)?,
        category: get_opt_string(row, 5)?,
        notes: get_opt_string(row, 6)?,
    })
}

impl MaggidService {
    pub async fn create_event(
        &self,
        title: &str,
        description: Option<&str>,
        start_time: DateTime<Utc>,
        end_time: Option<DateTime<Utc>>,
        event_type: Option<&str>,
        recurring: Option<&str>,
        pipeline_id: Option<&str>,
    ) -> Result<CalendarEvent, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_EVENT).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO events ({EVENT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
                ),
                libsql::params![
                    id.as_str(),
                    title,
                    description,
                    start_time.to_rfc3339(),
                    end_time.map(|t| t.to_rfc3339()),
                    event_type,
                    recurring,
                    pipeline_id,
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(CalendarEvent {
            id,
            title: title.to_string(),
            description: description.map(String::from),
            start_time,
            end_time,
            event_type: event_type.map(String::from),
            recurring: recurring.map(String::from),
            pipeline_id: pipeline_id.map(String::from),
            created_at: now,
        })
    }

    pub async fn get_event(&self, id: &str) -> Result<CalendarEvent, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {EVENT_COLS} FROM events WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_event(&row)
    }

    pub async fn delete_event(&self, event_id: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute("DELETE FROM events WHERE id = ?1", [event_id])
            .await?;
        Ok(())
    }

    /// Events starting at or after `from`, soonest first.
    pub async fn upcoming_events(
        &self,
        from: DateTime<Utc>,
        limit: u32,
    ) -> Result<Vec<CalendarEvent>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {EVENT_COLS} FROM events
                     WHERE start_time >= ?1 ORDER BY start_time LIMIT {limit}"
                ),
                [from.to_rfc3339()],
            )
            .await?;

        let mut events = Vec::new();
        while let Some(row) = rows.next().await? {
            events.push(row_to_event(&row)?);
        }
        Ok(events)
    }

    /// Events with `start` <= start_time < `end` (for day/week views and
    /// the reminder window).
    pub async fn events_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {EVENT_COLS} FROM events
                     WHERE start_time >= ?1 AND start_time < ?2 ORDER BY start_time"
                ),
                libsql::params![start.to_rfc3339(), end.to_rfc3339()],
            )
            .await?;

        let mut events = Vec::new();
        while let Some(row) = rows.next().await? {
            events.push(row_to_event(&row)?);
        }
        Ok(events)
    }

    /// Add a recurring weekly block. `day_of_week` is 0 = Sunday .. 6 =
    /// Shabbos; `None` means every day.
    pub async fn add_schedule_block(
        &self,
        day_of_week: Option<u8>,
        start_time: NaiveTime,
        end_time: NaiveTime,
        activity: &str,
        category: Option<&str>,
        notes: Option<&str>,
    ) -> Result<ScheduleBlock, DatabaseError> {
        if let Some(d) = day_of_week {
            if d > 6 {
                return Err(DatabaseError::InvalidState(format!(
                    "day_of_week {d} out of range"
                )));
            }
        }
        if end_time <= start_time {
            return Err(DatabaseError::InvalidState(
                "schedule block must end after it starts".into(),
            ));
        }

        let id = self.db().generate_id(PREFIX_BLOCK).await?;
        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO schedule_blocks ({BLOCK_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"
                ),
                libsql::params![
                    id.as_str(),
                    day_of_week.map(i64::from),
                    start_time.format("%H:%M").to_string(),
                    end_time.format("%H:%M").to_string(),
                    activity,
                    category,
                    notes
                ],
            )
            .await?;

        Ok(ScheduleBlock {
            id,
            day_of_week,
            start_time,
            end_time,
            activity: activity.to_string(),
            category: category.map(String::from),
            notes: notes.map(String::from),
        })
    }

    /// Blocks applying to `day_of_week` (including every-day blocks), in
    /// time order. Pass `None` to list everything.
    pub async fn list_schedule_blocks(
        &self,
        day_of_week: Option<u8>,
    ) -> Result<Vec<ScheduleBlock>, DatabaseError> {
        let sql = day_of_week.map_or_else(
            || {
                format!(
                    "SELECT {BLOCK_COLS} FROM schedule_blocks
                     ORDER BY day_of_week IS NULL, day_of_week, start_time"
                )
            },
            |d| {
                format!(
                    "SELECT {BLOCK_COLS} FROM schedule_blocks
                     WHERE day_of_week IS NULL OR day_of_week = {d} ORDER BY start_time"
                )
            },
        );
        let mut rows = self.db().conn().query(&sql, ()).await?;

        let mut blocks = Vec::new();
        while let Some(row) = rows.next().await? {
            blocks.push(row_to_block(&row)?);
        }
        Ok(blocks)
    }

    pub async fn delete_schedule_block(&self, block_id: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute("DELETE FROM schedule_blocks WHERE id = ?1", [block_id])
            .await?;
        Ok(())
    }
}

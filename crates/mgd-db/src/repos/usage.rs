//! Usage tracking and user profile repository.

use chrono::{DateTime, Utc};

use mgd_core::entities::{CommandUsage, ProfileEntry, UsageEvent};
use mgd_core::ids::PREFIX_USAGE;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_json};
use crate::service::MaggidService;

const USAGE_COLS: &str = "id, page, action, metadata, created_at";

fn row_to_event(row: &libsql::Row) -> Result<UsageEvent, DatabaseError> {
    Ok(UsageEvent {
        id: row.get(0)?,
        page: row.get(1)?,
        action: row.get(2)?,
        metadata: parse_json(&row.get::<String>(3)?)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl MaggidService {
    /// Record one use of a command/page. Failures here should never break
    /// the command itself; callers log and move on.
    pub async fn record_usage(
        &self,
        page: &str,
        action: &str,
        metadata: serde_json::Value,
    ) -> Result<UsageEvent, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_USAGE).await?;
        let metadata_json =
            serde_json::to_string(&metadata).map_err(|e| DatabaseError::Other(e.into()))?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO usage_events ({USAGE_COLS}) VALUES (?1, ?2, ?3, ?4, ?5)"),
                libsql::params![
                    id.as_str(),
                    page,
                    action,
                    metadata_json.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(UsageEvent {
            id,
            page: page.to_string(),
            action: action.to_string(),
            metadata,
            created_at: now,
        })
    }

    /// Per-page usage counts since `since`, most used first.
    pub async fn usage_summary(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<CommandUsage>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT page, COUNT(*), MAX(created_at) FROM usage_events
                 WHERE created_at >= ?1
                 GROUP BY page ORDER BY COUNT(*) DESC, page",
                [since.to_rfc3339()],
            )
            .await?;

        let mut summary = Vec::new();
        while let Some(row) = rows.next().await? {
            summary.push(CommandUsage {
                page: row.get(0)?,
                count: row.get(1)?,
                last_used: parse_datetime(&row.get::<String>(2)?)?,
            });
        }
        Ok(summary)
    }

    pub async fn recent_usage(&self, limit: u32) -> Result<Vec<UsageEvent>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {USAGE_COLS} FROM usage_events
                     ORDER BY created_at DESC LIMIT {limit}"
                ),
                (),
            )
            .await?;

        let mut events = Vec::new();
        while let Some(row) = rows.next().await? {
            events.push(row_to_event(&row)?);
        }
        Ok(events)
    }

    /// Upsert one key of the profile store.
    pub async fn set_profile(
        &self,
        key: &str,
        value: serde_json::Value,
    ) -> Result<ProfileEntry, DatabaseError> {
        let now = Utc::now();
        let value_json =
            serde_json::to_string(&value).map_err(|e| DatabaseError::Other(e.into()))?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO user_profile (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                                updated_at = excluded.updated_at",
                libsql::params![key, value_json.as_str(), now.to_rfc3339()],
            )
            .await?;

        Ok(ProfileEntry {
            key: key.to_string(),
            value,
            updated_at: now,
        })
    }

    pub async fn get_profile(&self, key: &str) -> Result<Option<ProfileEntry>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT key, value, updated_at FROM user_profile WHERE key = ?1",
                [key],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(ProfileEntry {
                key: row.get(0)?,
                value: parse_json(&row.get::<String>(1)?)?,
                updated_at: parse_datetime(&row.get::<String>(2)?)?,
            })),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use chrono::Days;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn summary_groups_and_orders() {
        let svc = test_service().await;
        for _ in 0..3 {
            svc.record_usage("pipeline", "invoke", serde_json::json!({}))
                .await
                .unwrap();
        }
        svc.record_usage("shas", "invoke", serde_json::json!({"track": "gemara"}))
            .await
            .unwrap();

        let since = Utc::now() - Days::new(7);
        let summary = svc.usage_summary(since).await.unwrap();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].page, "pipeline");
        assert_eq!(summary[0].count, 3);
    }

    #[tokio::test]
    async fn summary_window_excludes_old_events() {
        let svc = test_service().await;
        svc.record_usage("tasks", "invoke", serde_json::json!({}))
            .await
            .unwrap();

        let future = Utc::now() + Days::new(1);
        assert!(svc.usage_summary(future).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn profile_upserts() {
        let svc = test_service().await;
        svc.set_profile("name", serde_json::json!("Reb Maggid"))
            .await
            .unwrap();
        svc.set_profile("name", serde_json::json!("The Maggid"))
            .await
            .unwrap();

        let entry = svc.get_profile("name").await.unwrap().unwrap();
        assert_eq!(entry.value, serde_json::json!("The Maggid"));
        assert!(svc.get_profile("missing").await.unwrap().is_none());
    }
}

//! # mgd-db
//!
//! libSQL database operations for Maggid state.
//!
//! Handles all relational state: research documents, comments, the content
//! pipeline, tasks, events, rituals, courses, the story/question bank, the
//! Shas tracker, goals, reflections, practice and delivery journals, and
//! usage events. Supports a plain local database or a libSQL embedded
//! replica synced against a hosted instance.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod seed;
pub mod service;
pub mod updates;

#[cfg(test)]
pub(crate) mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all Maggid state operations.
///
/// Wraps a libSQL database and connection. Provides ID generation;
/// repository methods live on [`service::MaggidService`].
pub struct MaggidDb {
    db: libsql::Database,
    conn: libsql::Connection,
    synced: bool,
}

impl MaggidDb {
    /// Open a local-only database at the given path (no cloud sync).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let mgd = Self {
            db,
            conn,
            synced: false,
        };
        mgd.run_migrations().await?;
        Ok(mgd)
    }

    /// Open an embedded replica synced against a hosted libSQL instance.
    ///
    /// Pulls remote state before running migrations so an existing hosted
    /// schema is not clobbered.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the replica cannot be built, the initial
    /// sync fails, or migrations fail.
    pub async fn open_synced(
        local_replica_path: &str,
        remote_url: &str,
        auth_token: &str,
    ) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote_replica(
            local_replica_path.to_string(),
            remote_url.to_string(),
            auth_token.to_string(),
        )
        .build()
        .await?;
        db.sync().await?;
        let conn = db.connect()?;

        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let mgd = Self {
            db,
            conn,
            synced: true,
        };
        mgd.run_migrations().await?;
        Ok(mgd)
    }

    /// Push local changes to (and pull remote changes from) the hosted
    /// instance.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` when the database was opened
    /// local-only.
    pub async fn sync(&self) -> Result<(), DatabaseError> {
        if !self.synced {
            return Err(DatabaseError::InvalidState(
                "cannot sync: database opened local-only".into(),
            ));
        }
        self.db.sync().await?;
        tracing::debug!("replica synced with remote");
        Ok(())
    }

    /// Returns whether this handle is backed by a synced replica.
    #[must_use]
    pub const fn is_synced_replica(&self) -> bool {
        self.synced
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"doc-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Helper to create an in-memory database for testing.
    async fn test_db() -> MaggidDb {
        MaggidDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = [
            "research_documents",
            "comments",
            "quizzes",
            "pipeline_items",
            "tasks",
            "events",
            "schedule_blocks",
            "rituals",
            "ritual_completions",
            "courses",
            "course_segments",
            "goals",
            "daily_reflections",
            "shas_masechtos",
            "shas_completions",
            "stories",
            "questions",
            "story_captures",
            "practice_logs",
            "delivery_journal",
            "usage_events",
            "user_profile",
        ];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("doc").await.unwrap();
        assert!(id.starts_with("doc-"), "ID should start with 'doc-': {id}");
        assert_eq!(
            id.len(),
            12,
            "ID should be 12 chars (3 prefix + 1 dash + 8 hex): {id}"
        );

        let hex_part = &id[4..];
        assert!(
            hex_part.chars().all(|c| c.is_ascii_hexdigit()),
            "Random part should be hex: {hex_part}"
        );
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in mgd_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("tst").await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        // Run migrations again — should not fail
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn sync_rejected_on_local_db() {
        let db = test_db().await;
        assert!(!db.is_synced_replica());
        let result = db.sync().await;
        assert!(matches!(result, Err(DatabaseError::InvalidState(_))));
    }

    #[tokio::test]
    async fn foreign_keys_enforced() {
        let db = test_db().await;

        // Comment pointing at a missing document must be rejected.
        let result = db
            .conn()
            .execute(
                "INSERT INTO comments (id, document_id, section_id, content, created_at)
                 VALUES ('cmt-t1', 'doc-missing', 'intro', 'orphan', '2026-01-01T00:00:00+00:00')",
                (),
            )
            .await;
        assert!(result.is_err(), "FK violation should be rejected");
    }

    #[tokio::test]
    async fn ritual_completion_unique_per_date() {
        let db = test_db().await;

        db.conn()
            .execute(
                "INSERT INTO rituals (id, name, created_at) VALUES ('rit-t1', 'Modeh Ani', '2026-01-01T00:00:00+00:00')",
                (),
            )
            .await
            .unwrap();
        db.conn()
            .execute(
                "INSERT INTO ritual_completions (id, ritual_id, completed_date) VALUES ('rcp-t1', 'rit-t1', '2026-01-02')",
                (),
            )
            .await
            .unwrap();

        // Second completion for the same date should fail.
        let result = db
            .conn()
            .execute(
                "INSERT INTO ritual_completions (id, ritual_id, completed_date) VALUES ('rcp-t2', 'rit-t1', '2026-01-02')",
                (),
            )
            .await;
        assert!(result.is_err(), "Duplicate completion should be rejected");
    }

    #[tokio::test]
    async fn reflection_unique_per_date() {
        let db = test_db().await;

        db.conn()
            .execute(
                "INSERT INTO daily_reflections (id, date, created_at) VALUES ('rfl-t1', '2026-01-02', '2026-01-02T21:00:00+00:00')",
                (),
            )
            .await
            .unwrap();

        let result = db
            .conn()
            .execute(
                "INSERT INTO daily_reflections (id, date, created_at) VALUES ('rfl-t2', '2026-01-02', '2026-01-02T22:00:00+00:00')",
                (),
            )
            .await;
        assert!(result.is_err(), "Second reflection for a date should be rejected");
    }
}

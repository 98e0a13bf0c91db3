//! Service layer over the raw database handle.
//!
//! `MaggidService` wraps [`MaggidDb`]; all repo methods are implemented as
//! `impl MaggidService` blocks in `repos/`.

use crate::MaggidDb;
use crate::error::DatabaseError;

/// Orchestrates all Maggid database reads and writes.
pub struct MaggidService {
    db: MaggidDb,
}

impl MaggidService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` — Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = MaggidDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create a service backed by a synced embedded replica.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the replica cannot be opened.
    pub async fn new_synced(
        local_replica_path: &str,
        remote_url: &str,
        auth_token: &str,
    ) -> Result<Self, DatabaseError> {
        let db = MaggidDb::open_synced(local_replica_path, remote_url, auth_token).await?;
        Ok(Self { db })
    }

    /// Create from an existing `MaggidDb` (for testing).
    #[must_use]
    pub const fn from_db(db: MaggidDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &MaggidDb {
        &self.db
    }

    /// Sync the underlying database with remote state.
    pub async fn sync(&self) -> Result<(), DatabaseError> {
        self.db.sync().await
    }

    /// Returns whether this service is backed by a synced replica.
    #[must_use]
    pub const fn is_synced_replica(&self) -> bool {
        self.db.is_synced_replica()
    }
}

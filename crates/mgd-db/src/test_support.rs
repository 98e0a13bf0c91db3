//! Shared test utilities for mgd-db integration tests.

pub(crate) mod helpers {
    use crate::MaggidDb;
    use crate::service::MaggidService;

    /// Create an in-memory `MaggidService` for tests.
    pub async fn test_service() -> MaggidService {
        let db = MaggidDb::open_local(":memory:").await.unwrap();
        MaggidService::from_db(db)
    }
}

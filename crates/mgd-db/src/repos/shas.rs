//! Shas tracker repository.

use chrono::Utc;

use mgd_core::entities::{ShasCompletion, ShasMasechta};
use mgd_core::enums::CompletionType;
use mgd_core::ids::{PREFIX_MASECHTA, PREFIX_SHAS_COMPLETION};
use mgd_core::progress::{ShasProgress, shas_progress};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum};
use crate::seed::SHAS_MASECHTOS;
use crate::service::MaggidService;

const MASECHTA_COLS: &str =
    "id, seder, name, perakim, daf_count, has_bavli, sort_order, created_at";
const COMPLETION_COLS: &str = "id, masechta_id, completion_type, completed_at, notes";

fn row_to_masechta(row: &libsql::Row) -> Result<ShasMasechta, DatabaseError> {
    Ok(ShasMasechta {
        id: row.get(0)?,
        seder: parse_enum(&row.get::<String>(1)?)?,
        name: row.get(2)?,
        perakim: row.get(3)?,
        daf_count: row.get(4)?,
        has_bavli: row.get::<i64>(5)? != 0,
        sort_order: row.get(6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

fn row_to_completion(row: &libsql::Row) -> Result<ShasCompletion, DatabaseError> {
    Ok(ShasCompletion {
        id: row.get(0)?,
        masechta_id: row.get(1)?,
        completion_type: parse_enum(&row.get::<String>(2)?)?,
        completed_at: parse_datetime(&row.get::<String>(3)?)?,
        notes: get_opt_string(row, 4)?,
    })
}

impl MaggidService {
    /// Install the built-in 63-masechta reference list. Already-present
    /// masechtos (by name) are left alone; returns how many were inserted.
    pub async fn seed_shas(&self) -> Result<u32, DatabaseError> {
        let now = Utc::now();
        let mut inserted = 0u32;
        for (sort_order, m) in (0i64..).zip(SHAS_MASECHTOS.iter()) {
            let id = self.db().generate_id(PREFIX_MASECHTA).await?;
            let n = self
                .db()
                .conn()
                .execute(
                    &format!(
                        "INSERT OR IGNORE INTO shas_masechtos ({MASECHTA_COLS})
                         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
                    ),
                    libsql::params![
                        id.as_str(),
                        m.seder.as_str(),
                        m.name,
                        m.perakim,
                        m.daf_count,
                        i64::from(m.has_bavli),
                        sort_order,
                        now.to_rfc3339()
                    ],
                )
                .await?;
            inserted += u32::try_from(n).map_err(|e| DatabaseError::Other(e.into()))?;
        }
        Ok(inserted)
    }

    pub async fn list_masechtos(&self) -> Result<Vec<ShasMasechta>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {MASECHTA_COLS} FROM shas_masechtos ORDER BY sort_order"),
                (),
            )
            .await?;

        let mut masechtos = Vec::new();
        while let Some(row) = rows.next().await? {
            masechtos.push(row_to_masechta(&row)?);
        }
        Ok(masechtos)
    }

    /// Look up a masechta by id, or by name (case-insensitive).
    pub async fn resolve_masechta(&self, id_or_name: &str) -> Result<ShasMasechta, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {MASECHTA_COLS} FROM shas_masechtos
                     WHERE id = ?1 OR lower(name) = lower(?1)"
                ),
                [id_or_name],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_masechta(&row)
    }

    /// Mark a masechta finished on `track`. Marking twice is a no-op.
    pub async fn mark_masechta_complete(
        &self,
        id_or_name: &str,
        track: CompletionType,
        notes: Option<&str>,
    ) -> Result<ShasCompletion, DatabaseError> {
        let masechta = self.resolve_masechta(id_or_name).await?;
        if track == CompletionType::Gemara && !masechta.has_bavli {
            return Err(DatabaseError::InvalidState(format!(
                "{} has no Bavli; track it as mishnayos",
                masechta.name
            )));
        }

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_SHAS_COMPLETION).await?;
        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT OR IGNORE INTO shas_completions ({COMPLETION_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5)"
                ),
                libsql::params![
                    id.as_str(),
                    masechta.id.as_str(),
                    track.as_str(),
                    now.to_rfc3339(),
                    notes
                ],
            )
            .await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {COMPLETION_COLS} FROM shas_completions
                     WHERE masechta_id = ?1 AND completion_type = ?2"
                ),
                libsql::params![masechta.id.as_str(), track.as_str()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_completion(&row)
    }

    /// Clear a completion mark (checked by mistake).
    pub async fn unmark_masechta(
        &self,
        id_or_name: &str,
        track: CompletionType,
    ) -> Result<(), DatabaseError> {
        let masechta = self.resolve_masechta(id_or_name).await?;
        self.db()
            .conn()
            .execute(
                "DELETE FROM shas_completions WHERE masechta_id = ?1 AND completion_type = ?2",
                libsql::params![masechta.id.as_str(), track.as_str()],
            )
            .await?;
        Ok(())
    }

    pub async fn list_shas_completions(&self) -> Result<Vec<ShasCompletion>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {COMPLETION_COLS} FROM shas_completions ORDER BY completed_at"
                ),
                (),
            )
            .await?;

        let mut completions = Vec::new();
        while let Some(row) = rows.next().await? {
            completions.push(row_to_completion(&row)?);
        }
        Ok(completions)
    }

    /// Full progress report for one track, grouped by seder.
    pub async fn shas_progress_report(
        &self,
        track: CompletionType,
    ) -> Result<ShasProgress, DatabaseError> {
        let masechtos = self.list_masechtos().await?;
        let completions = self.list_shas_completions().await?;
        Ok(shas_progress(&masechtos, &completions, track))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use mgd_core::enums::Seder;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn seed_installs_once() {
        let svc = test_service().await;
        assert_eq!(svc.seed_shas().await.unwrap(), 63);
        assert_eq!(svc.seed_shas().await.unwrap(), 0, "second seed is a no-op");
        assert_eq!(svc.list_masechtos().await.unwrap().len(), 63);
    }

    #[tokio::test]
    async fn resolve_by_name_ignores_case() {
        let svc = test_service().await;
        svc.seed_shas().await.unwrap();
        let m = svc.resolve_masechta("berachos").await.unwrap();
        assert_eq!(m.name, "Berachos");
        assert_eq!(m.seder, Seder::Zeraim);
    }

    #[tokio::test]
    async fn gemara_track_rejects_mishnah_only() {
        let svc = test_service().await;
        svc.seed_shas().await.unwrap();

        let err = svc
            .mark_masechta_complete("Peah", CompletionType::Gemara, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidState(_)));

        // Mishnayos track is fine for the same masechta.
        svc.mark_masechta_complete("Peah", CompletionType::Mishnayos, None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn mark_is_idempotent_and_unmark_clears() {
        let svc = test_service().await;
        svc.seed_shas().await.unwrap();

        let first = svc
            .mark_masechta_complete("Makkos", CompletionType::Gemara, None)
            .await
            .unwrap();
        let second = svc
            .mark_masechta_complete("Makkos", CompletionType::Gemara, None)
            .await
            .unwrap();
        assert_eq!(first.id, second.id);

        svc.unmark_masechta("Makkos", CompletionType::Gemara).await.unwrap();
        assert!(svc.list_shas_completions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn progress_counts_daf_for_gemara() {
        let svc = test_service().await;
        svc.seed_shas().await.unwrap();
        svc.mark_masechta_complete("Makkos", CompletionType::Gemara, None)
            .await
            .unwrap();

        let report = svc.shas_progress_report(CompletionType::Gemara).await.unwrap();
        assert_eq!(report.overall.completed, 1);
        assert_eq!(report.overall.completed_units, 24);
        // Gemara track scope excludes the mishnah-only masechtos.
        assert_eq!(report.overall.total, 37);

        // The mishnayos track is untouched.
        let mishnayos = svc
            .shas_progress_report(CompletionType::Mishnayos)
            .await
            .unwrap();
        assert_eq!(mishnayos.overall.completed, 0);
        assert_eq!(mishnayos.overall.total, 63);
    }
}

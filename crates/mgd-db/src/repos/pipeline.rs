//! Content pipeline repository.

use chrono::Utc;

use mgd_core::entities::PipelineItem;
use mgd_core::enums::PipelineStage;
use mgd_core::ids::PREFIX_PIPELINE;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, parse_optional_date};
use crate::service::MaggidService;
use crate::updates::pipeline::PipelineUpdate;

const SELECT_COLS: &str = "id, title, description, stage, content_type, document_id, audience, \
                           target_date, created_at, updated_at";

fn row_to_item(row: &libsql::Row) -> Result<PipelineItem, DatabaseError> {
    Ok(PipelineItem {
        id: row.get(0)?,
        title: row.get(1)?,
        description: get_opt_string(row, 2)?,
        stage: parse_enum(&row.get::<String>(3)?)?,
        content_type: get_opt_string(row, 4)?,
        document_id: get_opt_string(row, 5)?,
        audience: get_opt_string(row, 6)?,
        target_date: parse_optional_date(get_opt_string(row, 7)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

impl MaggidService {
    /// Create a pipeline item. New items start at the `idea` stage.
    pub async fn create_pipeline_item(
        &self,
        title: &str,
        description: Option<&str>,
        content_type: Option<&str>,
        audience: Option<&str>,
    ) -> Result<PipelineItem, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_PIPELINE).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO pipeline_items ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, NULL, ?6, NULL, ?7, ?8)"
                ),
                libsql::params![
                    id.as_str(),
                    title,
                    description,
                    PipelineStage::Idea.as_str(),
                    content_type,
                    audience,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(PipelineItem {
            id,
            title: title.to_string(),
            description: description.map(String::from),
            stage: PipelineStage::Idea,
            content_type: content_type.map(String::from),
            document_id: None,
            audience: audience.map(String::from),
            target_date: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_pipeline_item(&self, id: &str) -> Result<PipelineItem, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM pipeline_items WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_item(&row)
    }

    /// Move an item to a stage. Any stage is reachable from any other;
    /// stepping backward is a normal part of reworking a piece.
    pub async fn set_pipeline_stage(
        &self,
        item_id: &str,
        stage: PipelineStage,
    ) -> Result<PipelineItem, DatabaseError> {
        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "UPDATE pipeline_items SET stage = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![stage.as_str(), now.to_rfc3339(), item_id],
            )
            .await?;
        self.get_pipeline_item(item_id).await
    }

    pub async fn update_pipeline_item(
        &self,
        item_id: &str,
        update: PipelineUpdate,
    ) -> Result<PipelineItem, DatabaseError> {
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
        if let Some(stage) = update.stage {
            sets.push(format!("stage = ?{idx}"));
            params.push(stage.as_str().into());
            idx += 1;
        }
        if let Some(ref content_type) = update.content_type {
            sets.push(format!("content_type = ?{idx}"));
            params.push(content_type.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(ref document_id) = update.document_id {
            sets.push(format!("document_id = ?{idx}"));
            params.push(document_id.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(ref audience) = update.audience {
            sets.push(format!("audience = ?{idx}"));
            params.push(audience.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(target_date) = update.target_date {
            sets.push(format!("target_date = ?{idx}"));
            params.push(target_date.map_or(libsql::Value::Null, |d| d.to_string().into()));
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_pipeline_item(item_id).await;
        }

        let now = Utc::now();
        sets.push(format!("updated_at = ?{idx}"));
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(item_id.into());
        let sql = format!("UPDATE pipeline_items SET {} WHERE id = ?{idx}", sets.join(", "));
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        self.get_pipeline_item(item_id).await
    }

    pub async fn delete_pipeline_item(&self, item_id: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute("DELETE FROM pipeline_items WHERE id = ?1", [item_id])
            .await?;
        Ok(())
    }

    /// List items, optionally only one stage, ordered by recency of work.
    pub async fn list_pipeline_items(
        &self,
        stage: Option<PipelineStage>,
        limit: u32,
    ) -> Result<Vec<PipelineItem>, DatabaseError> {
        let sql = stage.map_or_else(
            || {
                format!(
                    "SELECT {SELECT_COLS} FROM pipeline_items
                     ORDER BY updated_at DESC LIMIT {limit}"
                )
            },
            |s| {
                format!(
                    "SELECT {SELECT_COLS} FROM pipeline_items
                     WHERE stage = '{}' ORDER BY updated_at DESC LIMIT {limit}",
                    s.as_str()
                )
            },
        );
        let mut rows = self.db().conn().query(&sql, ()).await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_item(&row)?);
        }
        Ok(items)
    }

    /// Per-stage counts for the board header, in stage order.
    pub async fn pipeline_stage_counts(&self) -> Result<Vec<(PipelineStage, u64)>, DatabaseError> {
        let mut counts = Vec::new();
        for stage in PipelineStage::ALL {
            let mut rows = self
                .db()
                .conn()
                .query(
                    "SELECT COUNT(*) FROM pipeline_items WHERE stage = ?1",
                    [stage.as_str()],
                )
                .await?;
            let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
            counts.push((stage, row.get::<u64>(0)?));
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use crate::updates::pipeline::PipelineUpdateBuilder;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn create_starts_at_idea() {
        let svc = test_service().await;
        let item = svc
            .create_pipeline_item("Chanukah derasha", None, Some("derasha"), Some("shul"))
            .await
            .unwrap();
        assert_eq!(item.stage, PipelineStage::Idea);
    }

    #[tokio::test]
    async fn any_stage_transition_allowed() {
        let svc = test_service().await;
        let item = svc
            .create_pipeline_item("Purim shiur", None, None, None)
            .await
            .unwrap();

        let delivered = svc
            .set_pipeline_stage(&item.id, PipelineStage::Delivered)
            .await
            .unwrap();
        assert_eq!(delivered.stage, PipelineStage::Delivered);

        // Backward is fine too.
        let back = svc
            .set_pipeline_stage(&item.id, PipelineStage::Draft)
            .await
            .unwrap();
        assert_eq!(back.stage, PipelineStage::Draft);
    }

    #[tokio::test]
    async fn update_sets_target_date_and_document() {
        let svc = test_service().await;
        let item = svc
            .create_pipeline_item("Shavuos talk", None, None, None)
            .await
            .unwrap();

        let updated = svc
            .update_pipeline_item(
                &item.id,
                PipelineUpdateBuilder::new()
                    .target_date(NaiveDate::from_ymd_opt(2026, 5, 22))
                    .document_id(Some("doc-11112222".into()))
                    .build(),
            )
            .await
            .unwrap();

        assert_eq!(updated.target_date, NaiveDate::from_ymd_opt(2026, 5, 22));
        assert_eq!(updated.document_id.as_deref(), Some("doc-11112222"));
    }

    #[tokio::test]
    async fn list_filters_by_stage() {
        let svc = test_service().await;
        let a = svc.create_pipeline_item("A", None, None, None).await.unwrap();
        svc.create_pipeline_item("B", None, None, None).await.unwrap();
        svc.set_pipeline_stage(&a.id, PipelineStage::Ready).await.unwrap();

        let ready = svc
            .list_pipeline_items(Some(PipelineStage::Ready), 50)
            .await
            .unwrap();
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].title, "A");
    }

    #[tokio::test]
    async fn stage_counts_cover_all_stages() {
        let svc = test_service().await;
        svc.create_pipeline_item("A", None, None, None).await.unwrap();

        let counts = svc.pipeline_stage_counts().await.unwrap();
        assert_eq!(counts.len(), PipelineStage::ALL.len());
        assert_eq!(counts[0], (PipelineStage::Idea, 1));
    }
}

//! Research document repository — CRUD, slug lookup, topic grouping.

use chrono::Utc;

use mgd_core::entities::ResearchDocument;
use mgd_core::enums::{DocCategory, DocStatus};
use mgd_core::ids::PREFIX_DOCUMENT;
use mgd_core::markdown::{parse_sections, slugify};
use mgd_core::topics::{TopicGroup, group_topics};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, parse_json};
use crate::service::MaggidService;
use crate::updates::document::DocumentUpdate;

const SELECT_COLS: &str =
    "id, title, slug, category, content, sections, status, topic_slug, created_at, updated_at";

fn row_to_document(row: &libsql::Row) -> Result<ResearchDocument, DatabaseError> {
    Ok(ResearchDocument {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        category: parse_enum(&row.get::<String>(3)?)?,
        content: row.get(4)?,
        sections: parse_json(&row.get::<String>(5)?)?,
        status: parse_enum(&row.get::<String>(6)?)?,
        topic_slug: get_opt_string(row, 7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

impl MaggidService {
    /// Create a document. The slug is derived from the title; a numeric
    /// suffix is appended if that slug is already taken. Sections are parsed
    /// from the content at write time.
    pub async fn create_document(
        &self,
        title: &str,
        category: DocCategory,
        content: &str,
        topic_slug: Option<&str>,
    ) -> Result<ResearchDocument, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_DOCUMENT).await?;
        let slug = self.available_slug(&slugify(title)).await?;
        let sections = parse_sections(content);
        let sections_json =
            serde_json::to_string(&sections).map_err(|e| DatabaseError::Other(e.into()))?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO research_documents ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"
                ),
                libsql::params![
                    id.as_str(),
                    title,
                    slug.as_str(),
                    category.as_str(),
                    content,
                    sections_json.as_str(),
                    DocStatus::Research.as_str(),
                    topic_slug,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(ResearchDocument {
            id,
            title: title.to_string(),
            slug,
            category,
            content: content.to_string(),
            sections,
            status: DocStatus::Research,
            topic_slug: topic_slug.map(String::from),
            created_at: now,
            updated_at: now,
        })
    }

    /// Insert-or-replace a document by slug, used by the importers.
    ///
    /// An existing document keeps its id, status, and topic; only the title
    /// and content (with re-derived sections) are replaced.
    pub async fn upsert_document_by_slug(
        &self,
        slug: &str,
        title: &str,
        category: DocCategory,
        content: &str,
        topic_slug: Option<&str>,
    ) -> Result<(ResearchDocument, bool), DatabaseError> {
        match self.get_document_by_slug(slug).await {
            Ok(existing) => {
                let now = Utc::now();
                let sections = parse_sections(content);
                let sections_json = serde_json::to_string(&sections)
                    .map_err(|e| DatabaseError::Other(e.into()))?;
                self.db()
                    .conn()
                    .execute(
                        "UPDATE research_documents
                         SET title = ?1, content = ?2, sections = ?3, updated_at = ?4
                         WHERE id = ?5",
                        libsql::params![
                            title,
                            content,
                            sections_json.as_str(),
                            now.to_rfc3339(),
                            existing.id.as_str()
                        ],
                    )
                    .await?;
                Ok((self.get_document(&existing.id).await?, false))
            }
            Err(DatabaseError::NoResult) => {
                let now = Utc::now();
                let id = self.db().generate_id(PREFIX_DOCUMENT).await?;
                let sections = parse_sections(content);
                let sections_json = serde_json::to_string(&sections)
                    .map_err(|e| DatabaseError::Other(e.into()))?;
                self.db()
                    .conn()
                    .execute(
                        &format!(
                            "INSERT INTO research_documents ({SELECT_COLS})
                             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"
                        ),
                        libsql::params![
                            id.as_str(),
                            title,
                            slug,
                            category.as_str(),
                            content,
                            sections_json.as_str(),
                            DocStatus::Research.as_str(),
                            topic_slug,
                            now.to_rfc3339(),
                            now.to_rfc3339()
                        ],
                    )
                    .await?;
                Ok((self.get_document(&id).await?, true))
            }
            Err(e) => Err(e),
        }
    }

    pub async fn get_document(&self, id: &str) -> Result<ResearchDocument, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM research_documents WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_document(&row)
    }

    pub async fn get_document_by_slug(&self, slug: &str) -> Result<ResearchDocument, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM research_documents WHERE slug = ?1"),
                [slug],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_document(&row)
    }

    /// Resolve a document by id first, slug second (CLI convenience).
    pub async fn resolve_document(&self, id_or_slug: &str) -> Result<ResearchDocument, DatabaseError> {
        match self.get_document(id_or_slug).await {
            Err(DatabaseError::NoResult) => self.get_document_by_slug(id_or_slug).await,
            other => other,
        }
    }

    pub async fn update_document(
        &self,
        document_id: &str,
        update: DocumentUpdate,
    ) -> Result<ResearchDocument, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref title) = update.title {
            sets.push(format!("title = ?{idx}"));
            params.push(title.clone().into());
            idx += 1;
        }
        if let Some(ref content) = update.content {
            let sections_json = serde_json::to_string(&parse_sections(content))
                .map_err(|e| DatabaseError::Other(e.into()))?;
            sets.push(format!("content = ?{idx}"));
            params.push(content.clone().into());
            idx += 1;
            sets.push(format!("sections = ?{idx}"));
            params.push(sections_json.into());
            idx += 1;
        }
        if let Some(category) = update.category {
            sets.push(format!("category = ?{idx}"));
            params.push(category.as_str().into());
            idx += 1;
        }
        if let Some(status) = update.status {
            sets.push(format!("status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
        }
        if let Some(ref topic_slug) = update.topic_slug {
            sets.push(format!("topic_slug = ?{idx}"));
            params.push(topic_slug.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_document(document_id).await;
        }

        let now = Utc::now();
        sets.push(format!("updated_at = ?{idx}"));
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(document_id.into());
        let sql = format!(
            "UPDATE research_documents SET {} WHERE id = ?{idx}",
            sets.join(", ")
        );
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        self.get_document(document_id).await
    }

    /// Delete a document. Comments and quizzes cascade.
    pub async fn delete_document(&self, document_id: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "DELETE FROM research_documents WHERE id = ?1",
                [document_id],
            )
            .await?;
        Ok(())
    }

    pub async fn list_documents(
        &self,
        category: Option<DocCategory>,
        limit: u32,
    ) -> Result<Vec<ResearchDocument>, DatabaseError> {
        let sql = category.map_or_else(
            || {
                format!(
                    "SELECT {SELECT_COLS} FROM research_documents
                     ORDER BY updated_at DESC LIMIT {limit}"
                )
            },
            |c| {
                format!(
                    "SELECT {SELECT_COLS} FROM research_documents
                     WHERE category = '{}' ORDER BY updated_at DESC LIMIT {limit}",
                    c.as_str()
                )
            },
        );
        let mut rows = self.db().conn().query(&sql, ()).await?;

        let mut documents = Vec::new();
        while let Some(row) = rows.next().await? {
            documents.push(row_to_document(&row)?);
        }
        Ok(documents)
    }

    /// Group all documents into topics for the library view.
    pub async fn topic_groups(&self) -> Result<Vec<TopicGroup>, DatabaseError> {
        let documents = self.list_documents(None, u32::MAX).await?;
        Ok(group_topics(documents))
    }

    /// Find an unused slug, appending `-2`, `-3`, ... on collision.
    async fn available_slug(&self, base: &str) -> Result<String, DatabaseError> {
        let mut candidate = base.to_string();
        let mut n = 1u32;
        loop {
            match self.get_document_by_slug(&candidate).await {
                Err(DatabaseError::NoResult) => return Ok(candidate),
                Ok(_) => {
                    n += 1;
                    candidate = format!("{base}-{n}");
                }
                Err(e) => return Err(e),
            }
        }
    }
}

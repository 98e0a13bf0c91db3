//! Coaching comment repository.

use chrono::Utc;

use mgd_core::entities::Comment;
use mgd_core::enums::CommentType;
use mgd_core::ids::PREFIX_COMMENT;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::service::MaggidService;

const SELECT_COLS: &str = "id, document_id, section_id, content, comment_type, resolved, created_at";

fn row_to_comment(row: &libsql::Row) -> Result<Comment, DatabaseError> {
    Ok(Comment {
        id: row.get(0)?,
        document_id: row.get(1)?,
        section_id: row.get(2)?,
        content: row.get(3)?,
        comment_type: parse_enum(&row.get::<String>(4)?)?,
        resolved: row.get::<i64>(5)? != 0,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl MaggidService {
    /// Anchor a comment to a section of a document. The section must exist
    /// in the document's current section list.
    pub async fn add_comment(
        &self,
        document_id: &str,
        section_id: &str,
        content: &str,
        comment_type: CommentType,
    ) -> Result<Comment, DatabaseError> {
        let document = self.get_document(document_id).await?;
        if !document.sections.iter().any(|s| s.id == section_id) {
            return Err(DatabaseError::InvalidState(format!(
                "document {document_id} has no section '{section_id}'"
            )));
        }

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_COMMENT).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO comments ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6)"
                ),
                libsql::params![
                    id.as_str(),
                    document_id,
                    section_id,
                    content,
                    comment_type.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Comment {
            id,
            document_id: document_id.to_string(),
            section_id: section_id.to_string(),
            content: content.to_string(),
            comment_type,
            resolved: false,
            created_at: now,
        })
    }

    pub async fn get_comment(&self, id: &str) -> Result<Comment, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM comments WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_comment(&row)
    }

    /// List a document's comments, oldest first. Resolved comments are
    /// skipped unless `include_resolved`.
    pub async fn list_comments(
        &self,
        document_id: &str,
        include_resolved: bool,
    ) -> Result<Vec<Comment>, DatabaseError> {
        let sql = if include_resolved {
            format!(
                "SELECT {SELECT_COLS} FROM comments
                 WHERE document_id = ?1 ORDER BY created_at"
            )
        } else {
            format!(
                "SELECT {SELECT_COLS} FROM comments
                 WHERE document_id = ?1 AND resolved = 0 ORDER BY created_at"
            )
        };
        let mut rows = self.db().conn().query(&sql, [document_id]).await?;

        let mut comments = Vec::new();
        while let Some(row) = rows.next().await? {
            comments.push(row_to_comment(&row)?);
        }
        Ok(comments)
    }

    pub async fn resolve_comment(&self, comment_id: &str) -> Result<Comment, DatabaseError> {
        self.db()
            .conn()
            .execute(
                "UPDATE comments SET resolved = 1 WHERE id = ?1",
                [comment_id],
            )
            .await?;
        self.get_comment(comment_id).await
    }

    pub async fn delete_comment(&self, comment_id: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute("DELETE FROM comments WHERE id = ?1", [comment_id])
            .await?;
        Ok(())
    }

    /// Count of unresolved comments per document, for the library view.
    pub async fn unresolved_comment_count(&self, document_id: &str) -> Result<u64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT COUNT(*) FROM comments WHERE document_id = ?1 AND resolved = 0",
                [document_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<u64>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use mgd_core::enums::DocCategory;
    use pretty_assertions::assert_eq;

    async fn doc_with_sections(svc: &MaggidService) -> String {
        svc.create_document(
            "Test Doc",
            DocCategory::Speech,
            "# Test Doc\n\n## Opening\n\ntext\n",
            None,
        )
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn add_and_list_comment() {
        let svc = test_service().await;
        let doc_id = doc_with_sections(&svc).await;

        let comment = svc
            .add_comment(&doc_id, "opening", "Shorten this", CommentType::Simplify)
            .await
            .unwrap();
        assert!(!comment.resolved);

        let comments = svc.list_comments(&doc_id, false).await.unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].comment_type, CommentType::Simplify);
    }

    #[tokio::test]
    async fn unknown_section_rejected() {
        let svc = test_service().await;
        let doc_id = doc_with_sections(&svc).await;

        let err = svc
            .add_comment(&doc_id, "nonexistent", "x", CommentType::Note)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidState(_)));
    }

    #[tokio::test]
    async fn resolved_comments_hidden_by_default() {
        let svc = test_service().await;
        let doc_id = doc_with_sections(&svc).await;

        let comment = svc
            .add_comment(&doc_id, "opening", "Add a story here", CommentType::AddStory)
            .await
            .unwrap();
        svc.resolve_comment(&comment.id).await.unwrap();

        assert!(svc.list_comments(&doc_id, false).await.unwrap().is_empty());
        assert_eq!(svc.list_comments(&doc_id, true).await.unwrap().len(), 1);
        assert_eq!(svc.unresolved_comment_count(&doc_id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn comments_cascade_on_document_delete() {
        let svc = test_service().await;
        let doc_id = doc_with_sections(&svc).await;
        let comment = svc
            .add_comment(&doc_id, "opening", "x", CommentType::Note)
            .await
            .unwrap();

        svc.delete_document(&doc_id).await.unwrap();
        let err = svc.get_comment(&comment.id).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NoResult));
    }
}

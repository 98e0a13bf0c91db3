//! Self-test quiz repository.

use chrono::Utc;

use mgd_core::entities::{Quiz, QuizQuestion};
use mgd_core::ids::PREFIX_QUIZ;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_json};
use crate::service::MaggidService;

const SELECT_COLS: &str = "id, document_id, questions, created_at";

fn row_to_quiz(row: &libsql::Row) -> Result<Quiz, DatabaseError> {
    Ok(Quiz {
        id: row.get(0)?,
        document_id: row.get(1)?,
        questions: parse_json(&row.get::<String>(2)?)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl MaggidService {
    /// Store a quiz for a document. Every question must have its correct
    /// answer inside its options list.
    pub async fn save_quiz(
        &self,
        document_id: &str,
        questions: Vec<QuizQuestion>,
    ) -> Result<Quiz, DatabaseError> {
        if questions.is_empty() {
            return Err(DatabaseError::InvalidState("quiz has no questions".into()));
        }
        for q in &questions {
            if q.correct_index >= q.options.len() {
                return Err(DatabaseError::InvalidState(format!(
                    "correct_index {} out of range for question '{}'",
                    q.correct_index, q.question
                )));
            }
        }

        // FK check up front for a clearer error than the constraint's.
        self.get_document(document_id).await?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_QUIZ).await?;
        let questions_json =
            serde_json::to_string(&questions).map_err(|e| DatabaseError::Other(e.into()))?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO quizzes ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4)"),
                libsql::params![
                    id.as_str(),
                    document_id,
                    questions_json.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Quiz {
            id,
            document_id: document_id.to_string(),
            questions,
            created_at: now,
        })
    }

    /// The most recent quiz for a document, if any.
    pub async fn latest_quiz(&self, document_id: &str) -> Result<Option<Quiz>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM quizzes
                     WHERE document_id = ?1 ORDER BY created_at DESC LIMIT 1"
                ),
                [document_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_quiz(&row)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use mgd_core::enums::DocCategory;
    use pretty_assertions::assert_eq;

    fn question(text: &str) -> QuizQuestion {
        QuizQuestion {
            question: text.to_string(),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_index: 1,
            explanation: "because".to_string(),
        }
    }

    #[tokio::test]
    async fn save_and_fetch_latest() {
        let svc = test_service().await;
        let doc = svc
            .create_document("Quizzed", DocCategory::Course, "# Quizzed\n", None)
            .await
            .unwrap();

        svc.save_quiz(&doc.id, vec![question("first")]).await.unwrap();
        svc.save_quiz(&doc.id, vec![question("second"), question("third")])
            .await
            .unwrap();

        let latest = svc.latest_quiz(&doc.id).await.unwrap().unwrap();
        assert_eq!(latest.questions.len(), 2);
        assert_eq!(latest.questions[0].question, "second");
    }

    #[tokio::test]
    async fn bad_correct_index_rejected() {
        let svc = test_service().await;
        let doc = svc
            .create_document("Q", DocCategory::Course, "# Q\n", None)
            .await
            .unwrap();

        let mut q = question("bad");
        q.correct_index = 9;
        let err = svc.save_quiz(&doc.id, vec![q]).await.unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidState(_)));
    }

    #[tokio::test]
    async fn no_quiz_is_none() {
        let svc = test_service().await;
        let doc = svc
            .create_document("Q", DocCategory::Course, "# Q\n", None)
            .await
            .unwrap();
        assert!(svc.latest_quiz(&doc.id).await.unwrap().is_none());
    }
}

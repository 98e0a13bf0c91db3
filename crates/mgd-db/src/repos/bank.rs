//! Story and question bank repository.

use chrono::Utc;

use mgd_core::entities::{Question, Story};
use mgd_core::ids::{PREFIX_QUESTION, PREFIX_STORY};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_json};
use crate::service::MaggidService;

const STORY_COLS: &str = "id, title, content, tags, source, topics, used_in, created_at";
const QUESTION_COLS: &str = "id, question, context, tags, topics, used_in, created_at";

fn row_to_story(row: &libsql::Row) -> Result<Story, DatabaseError> {
    Ok(Story {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        tags: parse_json(&row.get::<String>(3)?)?,
        source: get_opt_string(row, 4)?,
        topics: parse_json(&row.get::<String>(5)?)?,
        used_in: parse_json(&row.get::<String>(6)?)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

fn row_to_question(row: &libsql::Row) -> Result<Question, DatabaseError> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        context: get_opt_string(row, 2)?,
        tags: parse_json(&row.get::<String>(3)?)?,
        topics: parse_json(&row.get::<String>(4)?)?,
        used_in: parse_json(&row.get::<String>(5)?)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

fn to_json(v: &[String]) -> Result<String, DatabaseError> {
    serde_json::to_string(v).map_err(|e| DatabaseError::Other(e.into()))
}

impl MaggidService {
    pub async fn add_story(
        &self,
        title: &str,
        content: &str,
        tags: Vec<String>,
        source: Option<&str>,
        topics: Vec<String>,
    ) -> Result<Story, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_STORY).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO stories ({STORY_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, '[]', ?7)"
                ),
                libsql::params![
                    id.as_str(),
                    title,
                    content,
                    to_json(&tags)?.as_str(),
                    source,
                    to_json(&topics)?.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Story {
            id,
            title: title.to_string(),
            content: content.to_string(),
            tags,
            source: source.map(String::from),
            topics,
            used_in: Vec::new(),
            created_at: now,
        })
    }

    pub async fn get_story(&self, id: &str) -> Result<Story, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {STORY_COLS} FROM stories WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_story(&row)
    }

    /// Newest first; `tag` narrows to stories carrying that tag.
    pub async fn list_stories(
        &self,
        tag: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Story>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {STORY_COLS} FROM stories ORDER BY created_at DESC LIMIT {limit}"
                ),
                (),
            )
            .await?;

        let mut stories = Vec::new();
        while let Some(row) = rows.next().await? {
            let story = row_to_story(&row)?;
            if tag.is_none_or(|t| story.tags.iter().any(|s| s == t)) {
                stories.push(story);
            }
        }
        Ok(stories)
    }

    /// Record that a story was used in a pipeline item. Repeats are ignored.
    pub async fn mark_story_used(
        &self,
        story_id: &str,
        pipeline_id: &str,
    ) -> Result<Story, DatabaseError> {
        let mut story = self.get_story(story_id).await?;
        if !story.used_in.iter().any(|p| p == pipeline_id) {
            story.used_in.push(pipeline_id.to_string());
            self.db()
                .conn()
                .execute(
                    "UPDATE stories SET used_in = ?1 WHERE id = ?2",
                    libsql::params![to_json(&story.used_in)?.as_str(), story_id],
                )
                .await?;
        }
        Ok(story)
    }

    pub async fn delete_story(&self, story_id: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute("DELETE FROM stories WHERE id = ?1", [story_id])
            .await?;
        Ok(())
    }

    pub async fn add_question(
        &self,
        question: &str,
        context: Option<&str>,
        tags: Vec<String>,
        topics: Vec<String>,
    ) -> Result<Question, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_QUESTION).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO questions ({QUESTION_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, '[]', ?6)"
                ),
                libsql::params![
                    id.as_str(),
                    question,
                    context,
                    to_json(&tags)?.as_str(),
                    to_json(&topics)?.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Question {
            id,
            question: question.to_string(),
            context: context.map(String::from),
            tags,
            topics,
            used_in: Vec::new(),
            created_at: now,
        })
    }

    pub async fn get_question(&self, id: &str) -> Result<Question, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {QUESTION_COLS} FROM questions WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_question(&row)
    }

    pub async fn list_questions(
        &self,
        tag: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Question>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {QUESTION_COLS} FROM questions ORDER BY created_at DESC LIMIT {limit}"
                ),
                (),
            )
            .await?;

        let mut questions = Vec::new();
        while let Some(row) = rows.next().await? {
            let question = row_to_question(&row)?;
            if tag.is_none_or(|t| question.tags.iter().any(|s| s == t)) {
                questions.push(question);
            }
        }
        Ok(questions)
    }

    pub async fn mark_question_used(
        &self,
        question_id: &str,
        pipeline_id: &str,
    ) -> Result<Question, DatabaseError> {
        let mut question = self.get_question(question_id).await?;
        if !question.used_in.iter().any(|p| p == pipeline_id) {
            question.used_in.push(pipeline_id.to_string());
            self.db()
                .conn()
                .execute(
                    "UPDATE questions SET used_in = ?1 WHERE id = ?2",
                    libsql::params![to_json(&question.used_in)?.as_str(), question_id],
                )
                .await?;
        }
        Ok(question)
    }

    pub async fn delete_question(&self, question_id: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute("DELETE FROM questions WHERE id = ?1", [question_id])
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn story_round_trip_with_tags() {
        let svc = test_service().await;
        let story = svc
            .add_story(
                "The Baker of Tzfas",
                "Every erev Shabbos...",
                vec!["chesed".into(), "shabbos".into()],
                Some("heard from R' Levi"),
                vec!["bitachon".into()],
            )
            .await
            .unwrap();

        let fetched = svc.get_story(&story.id).await.unwrap();
        assert_eq!(fetched.tags, vec!["chesed".to_string(), "shabbos".to_string()]);
        assert!(fetched.used_in.is_empty());
    }

    #[tokio::test]
    async fn tag_filter_narrows_stories() {
        let svc = test_service().await;
        svc.add_story("A", "x", vec!["chesed".into()], None, vec![])
            .await
            .unwrap();
        svc.add_story("B", "y", vec!["emunah".into()], None, vec![])
            .await
            .unwrap();

        let chesed = svc.list_stories(Some("chesed"), 50).await.unwrap();
        assert_eq!(chesed.len(), 1);
        assert_eq!(chesed[0].title, "A");
    }

    #[tokio::test]
    async fn mark_used_dedups() {
        let svc = test_service().await;
        let story = svc
            .add_story("S", "x", vec![], None, vec![])
            .await
            .unwrap();

        svc.mark_story_used(&story.id, "pip-11112222").await.unwrap();
        let twice = svc.mark_story_used(&story.id, "pip-11112222").await.unwrap();
        assert_eq!(twice.used_in, vec!["pip-11112222".to_string()]);
    }

    #[tokio::test]
    async fn question_round_trip() {
        let svc = test_service().await;
        let q = svc
            .add_question(
                "Why does tefillah change anything?",
                Some("asked at a Q&A"),
                vec!["tefillah".into()],
                vec![],
            )
            .await
            .unwrap();

        let used = svc.mark_question_used(&q.id, "pip-aabbccdd").await.unwrap();
        assert_eq!(used.used_in.len(), 1);

        svc.delete_question(&q.id).await.unwrap();
        assert!(matches!(
            svc.get_question(&q.id).await.unwrap_err(),
            DatabaseError::NoResult
        ));
    }
}

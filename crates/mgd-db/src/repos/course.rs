//! Course and daily-lesson repository.

use chrono::{NaiveDate, Utc};

use mgd_core::entities::{Course, CourseSegment, DailyLesson};
use mgd_core::ids::{PREFIX_COURSE, PREFIX_SEGMENT};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_optional_date};
use crate::service::MaggidService;

const COURSE_COLS: &str = "id, title, description, source_type, total_segments, created_at";
const SEGMENT_COLS: &str =
    "id, course_id, segment_number, title, content, completed, completed_date";

fn row_to_course(row: &libsql::Row) -> Result<Course, DatabaseError> {
    Ok(Course {
        id: row.get(0)?,
        title: row.get(1)?,
        description: get_opt_string(row, 2)?,
        source_type: get_opt_string(row, 3)?,
        total_segments: row.get(4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

fn row_to_segment(row: &libsql::Row) -> Result<CourseSegment, DatabaseError> {
    Ok(CourseSegment {
        id: row.get(0)?,
        course_id: row.get(1)?,
        segment_number: row.get(2)?,
        title: get_opt_string(row, 3)?,
        content: row.get(4)?,
        completed: row.get::<i64>(5)? != 0,
        completed_date: parse_optional_date(get_opt_string(row, 6)?.as_deref())?,
    })
}

impl MaggidService {
    /// Create a course with its segments in one shot. Segment numbers are
    /// assigned 1..=n in the given order.
    pub async fn create_course(
        &self,
        title: &str,
        description: Option<&str>,
        source_type: Option<&str>,
        segments: Vec<(Option<String>, String)>,
    ) -> Result<Course, DatabaseError> {
        if segments.is_empty() {
            return Err(DatabaseError::InvalidState("course has no segments".into()));
        }

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_COURSE).await?;
        let total = i64::try_from(segments.len()).map_err(|e| DatabaseError::Other(e.into()))?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO courses ({COURSE_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
                ),
                libsql::params![
                    id.as_str(),
                    title,
                    description,
                    source_type,
                    total,
                    now.to_rfc3339()
                ],
            )
            .await?;

        for (n, (seg_title, content)) in (1i64..).zip(segments) {
            let seg_id = self.db().generate_id(PREFIX_SEGMENT).await?;
            self.db()
                .conn()
                .execute(
                    &format!(
                        "INSERT INTO course_segments ({SEGMENT_COLS})
                         VALUES (?1, ?2, ?3, ?4, ?5, 0, NULL)"
                    ),
                    libsql::params![
                        seg_id.as_str(),
                        id.as_str(),
                        n,
                        seg_title.as_deref(),
                        content.as_str()
                    ],
                )
                .await?;
        }

        self.get_course(&id).await
    }

    pub async fn get_course(&self, id: &str) -> Result<Course, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {COURSE_COLS} FROM courses WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_course(&row)
    }

    pub async fn list_courses(&self) -> Result<Vec<Course>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {COURSE_COLS} FROM courses ORDER BY created_at"),
                (),
            )
            .await?;

        let mut courses = Vec::new();
        while let Some(row) = rows.next().await? {
            courses.push(row_to_course(&row)?);
        }
        Ok(courses)
    }

    pub async fn list_segments(&self, course_id: &str) -> Result<Vec<CourseSegment>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SEGMENT_COLS} FROM course_segments
                     WHERE course_id = ?1 ORDER BY segment_number"
                ),
                [course_id],
            )
            .await?;

        let mut segments = Vec::new();
        while let Some(row) = rows.next().await? {
            segments.push(row_to_segment(&row)?);
        }
        Ok(segments)
    }

    /// Mark a segment learned on `date`.
    pub async fn complete_segment(
        &self,
        segment_id: &str,
        date: NaiveDate,
    ) -> Result<CourseSegment, DatabaseError> {
        self.db()
            .conn()
            .execute(
                "UPDATE course_segments SET completed = 1, completed_date = ?1 WHERE id = ?2",
                libsql::params![date.to_string(), segment_id],
            )
            .await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SEGMENT_COLS} FROM course_segments WHERE id = ?1"),
                [segment_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_segment(&row)
    }

    /// Today's lesson per course: the first uncompleted segment. Finished
    /// courses contribute nothing.
    pub async fn daily_lessons(&self) -> Result<Vec<DailyLesson>, DatabaseError> {
        let mut lessons = Vec::new();
        for course in self.list_courses().await? {
            let mut rows = self
                .db()
                .conn()
                .query(
                    &format!(
                        "SELECT {SEGMENT_COLS} FROM course_segments
                         WHERE course_id = ?1 AND completed = 0
                         ORDER BY segment_number LIMIT 1"
                    ),
                    [course.id.as_str()],
                )
                .await?;
            if let Some(row) = rows.next().await? {
                lessons.push(DailyLesson {
                    course,
                    segment: row_to_segment(&row)?,
                });
            }
        }
        Ok(lessons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use pretty_assertions::assert_eq;

    fn seg(title: &str, content: &str) -> (Option<String>, String) {
        (Some(title.to_string()), content.to_string())
    }

    async fn course(svc: &MaggidService) -> Course {
        svc.create_course(
            "Shaar Habitachon",
            None,
            Some("sefer"),
            vec![seg("Intro", "..."), seg("Perek 1", "..."), seg("Perek 2", "...")],
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn segments_numbered_in_order() {
        let svc = test_service().await;
        let c = course(&svc).await;
        assert_eq!(c.total_segments, 3);

        let segments = svc.list_segments(&c.id).await.unwrap();
        let numbers: Vec<_> = segments.iter().map(|s| s.segment_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn daily_lesson_is_first_uncompleted() {
        let svc = test_service().await;
        let c = course(&svc).await;
        let segments = svc.list_segments(&c.id).await.unwrap();
        svc.complete_segment(&segments[0].id, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
            .await
            .unwrap();

        let lessons = svc.daily_lessons().await.unwrap();
        assert_eq!(lessons.len(), 1);
        assert_eq!(lessons[0].segment.segment_number, 2);
    }

    #[tokio::test]
    async fn finished_course_has_no_lesson() {
        let svc = test_service().await;
        let c = course(&svc).await;
        for s in svc.list_segments(&c.id).await.unwrap() {
            svc.complete_segment(&s.id, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
                .await
                .unwrap();
        }
        assert!(svc.daily_lessons().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_course_rejected() {
        let svc = test_service().await;
        let err = svc
            .create_course("Empty", None, None, vec![])
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidState(_)));
    }
}

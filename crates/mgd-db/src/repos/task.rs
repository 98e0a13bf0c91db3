//! Task repository.

use chrono::{NaiveDate, Utc};

use mgd_core::entities::Task;
use mgd_core::enums::{TaskPriority, TaskStatus};
use mgd_core::ids::PREFIX_TASK;

use crate::error::DatabaseError;
use crate::helpers::{
    get_opt_string, parse_datetime, parse_enum, parse_optional_date, parse_optional_datetime,
};
use crate::service::MaggidService;
use crate::updates::task::TaskUpdate;

const SELECT_COLS: &str = "id, title, description, due_date, priority, status, category, \
                           pipeline_id, created_at, completed_at";

fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: get_opt_string(row, 2)?,
        due_date: parse_optional_date(get_opt_string(row, 3)?.as_deref())?,
        priority: parse_enum(&row.get::<String>(4)?)?,
        status: parse_enum(&row.get::<String>(5)?)?,
        category: get_opt_string(row, 6)?,
        pipeline_id: get_opt_string(row, 7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        completed_at: parse_optional_datetime(get_opt_string(row, 9)?.as_deref())?,
    })
}

impl MaggidService {
    pub async fn create_task(
        &self,
        title: &str,
        description: Option<&str>,
        due_date: Option<NaiveDate>,
        priority: TaskPriority,
        category: Option<&str>,
        pipeline_id: Option<&str>,
    ) -> Result<Task, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_TASK).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO tasks ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, NULL)"
                ),
                libsql::params![
                    id.as_str(),
                    title,
                    description,
                    due_date.map(|d| d.to_string()),
                    priority.as_str(),
                    TaskStatus::Pending.as_str(),
                    category,
                    pipeline_id,
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Task {
            id,
            title: title.to_string(),
            description: description.map(String::from),
            due_date,
            priority,
            status: TaskStatus::Pending,
            category: category.map(String::from),
            pipeline_id: pipeline_id.map(String::from),
            created_at: now,
            completed_at: None,
        })
    }

    pub async fn get_task(&self, id: &str) -> Result<Task, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM tasks WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_task(&row)
    }

    pub async fn update_task(
        &self,
        task_id: &str,
        update: TaskUpdate,
    ) -> Result<Task, DatabaseError> {
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
        if let Some(due_date) = update.due_date {
            sets.push(format!("due_date = ?{idx}"));
            params.push(due_date.map_or(libsql::Value::Null, |d| d.to_string().into()));
            idx += 1;
        }
        if let Some(priority) = update.priority {
            sets.push(format!("priority = ?{idx}"));
            params.push(priority.as_str().into());
            idx += 1;
        }
        if let Some(status) = update.status {
            sets.push(format!("status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
            // Moving out of done clears the completion stamp.
            if status == TaskStatus::Done {
                sets.push(format!("completed_at = ?{idx}"));
                params.push(Utc::now().to_rfc3339().into());
            } else {
                sets.push(format!("completed_at = ?{idx}"));
                params.push(libsql::Value::Null);
            }
            idx += 1;
        }
        if let Some(ref category) = update.category {
            sets.push(format!("category = ?{idx}"));
            params.push(category.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(ref pipeline_id) = update.pipeline_id {
            sets.push(format!("pipeline_id = ?{idx}"));
            params.push(pipeline_id.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_task(task_id).await;
        }

        params.push(task_id.into());
        let sql = format!("UPDATE tasks SET {} WHERE id = ?{idx}", sets.join(", "));
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        self.get_task(task_id).await
    }

    /// Mark a task done, stamping `completed_at`.
    pub async fn complete_task(&self, task_id: &str) -> Result<Task, DatabaseError> {
        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "UPDATE tasks SET status = ?1, completed_at = ?2 WHERE id = ?3",
                libsql::params![TaskStatus::Done.as_str(), now.to_rfc3339(), task_id],
            )
            .await?;
        self.get_task(task_id).await
    }

    pub async fn delete_task(&self, task_id: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute("DELETE FROM tasks WHERE id = ?1", [task_id])
            .await?;
        Ok(())
    }

    /// Open tasks first (by due date, then priority), done tasks last.
    pub async fn list_tasks(
        &self,
        status: Option<TaskStatus>,
        limit: u32,
    ) -> Result<Vec<Task>, DatabaseError> {
        let sql = status.map_or_else(
            || {
                format!(
                    "SELECT {SELECT_COLS} FROM tasks
                     ORDER BY status = 'done', due_date IS NULL, due_date, created_at DESC
                     LIMIT {limit}"
                )
            },
            |s| {
                format!(
                    "SELECT {SELECT_COLS} FROM tasks
                     WHERE status = '{}'
                     ORDER BY due_date IS NULL, due_date, created_at DESC LIMIT {limit}",
                    s.as_str()
                )
            },
        );
        let mut rows = self.db().conn().query(&sql, ()).await?;

        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }

    /// Unfinished tasks due on `date` or earlier.
    pub async fn tasks_due_by(&self, date: NaiveDate) -> Result<Vec<Task>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM tasks
                     WHERE status != 'done' AND due_date IS NOT NULL AND due_date <= ?1
                     ORDER BY due_date, priority = 'low', priority = 'medium'"
                ),
                [date.to_string()],
            )
            .await?;

        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use crate::updates::task::TaskUpdateBuilder;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn create_and_complete() {
        let svc = test_service().await;
        let task = svc
            .create_task("Outline derasha", None, None, TaskPriority::High, None, None)
            .await
            .unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.completed_at.is_none());

        let done = svc.complete_task(&task.id).await.unwrap();
        assert_eq!(done.status, TaskStatus::Done);
        assert!(done.completed_at.is_some());
    }

    #[tokio::test]
    async fn reopening_clears_completed_at() {
        let svc = test_service().await;
        let task = svc
            .create_task("T", None, None, TaskPriority::Medium, None, None)
            .await
            .unwrap();
        svc.complete_task(&task.id).await.unwrap();

        let reopened = svc
            .update_task(
                &task.id,
                TaskUpdateBuilder::new().status(TaskStatus::Pending).build(),
            )
            .await
            .unwrap();
        assert_eq!(reopened.status, TaskStatus::Pending);
        assert!(reopened.completed_at.is_none());
    }

    #[tokio::test]
    async fn due_by_excludes_done_and_future() {
        let svc = test_service().await;
        let today = date(2026, 3, 10);

        svc.create_task("overdue", None, Some(date(2026, 3, 8)), TaskPriority::Low, None, None)
            .await
            .unwrap();
        svc.create_task("today", None, Some(today), TaskPriority::High, None, None)
            .await
            .unwrap();
        svc.create_task("future", None, Some(date(2026, 3, 20)), TaskPriority::High, None, None)
            .await
            .unwrap();
        let done = svc
            .create_task("done", None, Some(today), TaskPriority::High, None, None)
            .await
            .unwrap();
        svc.complete_task(&done.id).await.unwrap();

        let due = svc.tasks_due_by(today).await.unwrap();
        let titles: Vec<_> = due.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["overdue", "today"]);
    }

    #[tokio::test]
    async fn list_orders_done_last() {
        let svc = test_service().await;
        let a = svc
            .create_task("a", None, None, TaskPriority::Medium, None, None)
            .await
            .unwrap();
        svc.create_task("b", None, None, TaskPriority::Medium, None, None)
            .await
            .unwrap();
        svc.complete_task(&a.id).await.unwrap();

        let tasks = svc.list_tasks(None, 50).await.unwrap();
        assert_eq!(tasks.last().unwrap().title, "a");
    }
}

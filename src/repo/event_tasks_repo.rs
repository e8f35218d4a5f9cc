use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::event::{EventTask, NewEventTask, UpdateEventTask};

#[derive(Clone)]
pub struct EventTasksRepo {
    pub pool: PgPool,
}

impl EventTasksRepo {
    pub async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<EventTask>> {
        let tasks = sqlx::query_as::<_, EventTask>(
            "SELECT * FROM event_tasks WHERE event_id = $1 ORDER BY due_date",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(tasks)
    }

    pub async fn list_by_event_owner(&self, user_id: Uuid) -> Result<Vec<EventTask>> {
        let tasks = sqlx::query_as::<_, EventTask>(
            r#"
            SELECT t.* FROM event_tasks t
            JOIN events e ON e.id = t.event_id
            WHERE e.user_id = $1
            ORDER BY t.due_date
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(tasks)
    }

    pub async fn create(&self, event_id: Uuid, data: &NewEventTask) -> Result<EventTask> {
        let task = sqlx::query_as::<_, EventTask>(
            r#"
            INSERT INTO event_tasks (event_id, title, description, category, due_date, priority, assigned_vendor_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(event_id)
        .bind(data.title.clone())
        .bind(data.description.clone())
        .bind(data.category.clone())
        .bind(data.due_date)
        .bind(data.priority)
        .bind(data.assigned_vendor_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(task)
    }

    pub async fn update(
        &self,
        id: Uuid,
        data: &UpdateEventTask,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<Option<EventTask>> {
        let task = sqlx::query_as::<_, EventTask>(
            r#"
            UPDATE event_tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                due_date = COALESCE($5, due_date),
                status = COALESCE($6, status),
                priority = COALESCE($7, priority),
                assigned_vendor_id = COALESCE($8, assigned_vendor_id),
                completed_at = $9,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.title.clone())
        .bind(data.description.clone())
        .bind(data.category.clone())
        .bind(data.due_date)
        .bind(data.status)
        .bind(data.priority)
        .bind(data.assigned_vendor_id)
        .bind(completed_at)
        .fetch_optional(&self.pool)
        .await?;
        Ok(task)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM event_tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

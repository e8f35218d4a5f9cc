use anyhow::Result;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::event::{Event, EventStatus, NewEvent, UpdateEvent};

#[derive(Clone)]
pub struct EventsRepo {
    pub pool: PgPool,
}

impl EventsRepo {
    pub async fn get(&self, id: Uuid) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(event)
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE user_id = $1 ORDER BY date DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(events)
    }

    pub async fn create(&self, user_id: Uuid, data: &NewEvent) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (
                user_id, title, type, description, date, end_date, location,
                guest_count, budget, theme, status, notes, cover_image
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(data.title.clone())
        .bind(data.event_type.clone())
        .bind(data.description.clone())
        .bind(data.date)
        .bind(data.end_date)
        .bind(data.location.clone())
        .bind(data.guest_count)
        .bind(data.budget)
        .bind(data.theme.clone())
        .bind(data.status.unwrap_or(EventStatus::Draft))
        .bind(data.notes.clone())
        .bind(data.cover_image.clone())
        .fetch_one(&self.pool)
        .await?;
        Ok(event)
    }

    pub async fn update(&self, id: Uuid, data: &UpdateEvent) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events SET
                title = COALESCE($2, title),
                type = COALESCE($3, type),
                description = COALESCE($4, description),
                date = COALESCE($5, date),
                end_date = COALESCE($6, end_date),
                location = COALESCE($7, location),
                guest_count = COALESCE($8, guest_count),
                budget = COALESCE($9, budget),
                theme = COALESCE($10, theme),
                status = COALESCE($11, status),
                ai_recommendations = COALESCE($12, ai_recommendations),
                schedule = COALESCE($13, schedule),
                notes = COALESCE($14, notes),
                cover_image = COALESCE($15, cover_image),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.title.clone())
        .bind(data.event_type.clone())
        .bind(data.description.clone())
        .bind(data.date)
        .bind(data.end_date)
        .bind(data.location.clone())
        .bind(data.guest_count)
        .bind(data.budget)
        .bind(data.theme.clone())
        .bind(data.status)
        .bind(data.ai_recommendations.clone())
        .bind(data.schedule.clone())
        .bind(data.notes.clone())
        .bind(data.cover_image.clone())
        .fetch_optional(&self.pool)
        .await?;
        Ok(event)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn list_all(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY date DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(events)
    }

    /// Settlement-side spend update; a missing event is a no-op, matching
    /// the verify flow which skips the spend write when the event is gone.
    pub async fn add_spent_amount_tx(
        tx: &mut Transaction<'_, Postgres>,
        event_id: Uuid,
        delta: Decimal,
    ) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE events SET spent_amount = spent_amount + $2, updated_at = now() WHERE id = $1",
        )
        .bind(event_id)
        .bind(delta)
        .execute(tx.as_mut())
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

use anyhow::Result;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::booking::{Booking, BookingStatus, NewBooking, UpdateBooking};

#[derive(Clone)]
pub struct BookingsRepo {
    pub pool: PgPool,
}

impl BookingsRepo {
    pub async fn get(&self, id: Uuid) -> Result<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(booking)
    }

    pub async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE event_id = $1 ORDER BY created_at DESC",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(bookings)
    }

    pub async fn list_by_vendor(&self, vendor_id: Uuid) -> Result<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE vendor_id = $1 ORDER BY created_at DESC",
        )
        .bind(vendor_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(bookings)
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(bookings)
    }

    pub async fn create(&self, user_id: Uuid, data: &NewBooking) -> Result<Booking> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (event_id, vendor_id, user_id, service_name, amount, notes, scheduled_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(data.event_id)
        .bind(data.vendor_id)
        .bind(user_id)
        .bind(data.service_name.clone())
        .bind(data.amount)
        .bind(data.notes.clone())
        .bind(data.scheduled_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(booking)
    }

    pub async fn update(&self, id: Uuid, data: &UpdateBooking) -> Result<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings SET
                service_name = COALESCE($2, service_name),
                amount = COALESCE($3, amount),
                status = COALESCE($4, status),
                notes = COALESCE($5, notes),
                scheduled_date = COALESCE($6, scheduled_date),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.service_name.clone())
        .bind(data.amount)
        .bind(data.status)
        .bind(data.notes.clone())
        .bind(data.scheduled_date)
        .fetch_optional(&self.pool)
        .await?;
        Ok(booking)
    }

    pub async fn list_all(&self) -> Result<Vec<Booking>> {
        let bookings =
            sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(bookings)
    }

    /// Guarded status advance used by settlement: only fires when the row
    /// still holds `from`, so vendor-driven states are never overwritten.
    pub async fn advance_status_tx(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE bookings SET status = $3, updated_at = now() WHERE id = $1 AND status = $2",
        )
        .bind(id)
        .bind(from)
        .bind(to)
        .execute(tx.as_mut())
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::payment::{NewPayment, Payment, PaymentStatus};

#[derive(Clone)]
pub struct PaymentsRepo {
    pub pool: PgPool,
}

pub struct CompletedPaymentInput {
    pub booking_id: Uuid,
    pub user_id: Uuid,
    pub vendor_id: Uuid,
    pub amount: Decimal,
    pub stripe_payment_id: Option<String>,
    pub stripe_session_id: String,
    pub paid_at: DateTime<Utc>,
}

impl PaymentsRepo {
    pub async fn get(&self, id: Uuid) -> Result<Option<Payment>> {
        let payment = sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(payment)
    }

    pub async fn list_by_booking(&self, booking_id: Uuid) -> Result<Vec<Payment>> {
        let payments =
            sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE booking_id = $1")
                .bind(booking_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(payments)
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Payment>> {
        let payments = sqlx::query_as::<_, Payment>(
            "SELECT * FROM payments WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(payments)
    }

    pub async fn create(&self, user_id: Uuid, data: &NewPayment) -> Result<Payment> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (booking_id, user_id, vendor_id, amount, status, stripe_payment_id, stripe_session_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(data.booking_id)
        .bind(user_id)
        .bind(data.vendor_id)
        .bind(data.amount)
        .bind(data.status.unwrap_or(PaymentStatus::Pending))
        .bind(data.stripe_payment_id.clone())
        .bind(data.stripe_session_id.clone())
        .fetch_one(&self.pool)
        .await?;
        Ok(payment)
    }

    pub async fn list_all(&self) -> Result<Vec<Payment>> {
        let payments =
            sqlx::query_as::<_, Payment>("SELECT * FROM payments ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(payments)
    }

    /// Payments that started a checkout but were never confirmed; input to
    /// the startup reconciliation task.
    pub async fn list_unsettled(&self, limit: i64) -> Result<Vec<Payment>> {
        let payments = sqlx::query_as::<_, Payment>(
            r#"
            SELECT * FROM payments
            WHERE status IN ('pending', 'processing') AND stripe_session_id IS NOT NULL
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(payments)
    }

    pub async fn insert_completed_tx(
        tx: &mut Transaction<'_, Postgres>,
        data: &CompletedPaymentInput,
    ) -> Result<Payment> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (booking_id, user_id, vendor_id, amount, status, stripe_payment_id, stripe_session_id, paid_at)
            VALUES ($1, $2, $3, $4, 'completed', $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(data.booking_id)
        .bind(data.user_id)
        .bind(data.vendor_id)
        .bind(data.amount)
        .bind(data.stripe_payment_id.clone())
        .bind(data.stripe_session_id.clone())
        .bind(data.paid_at)
        .fetch_one(tx.as_mut())
        .await?;
        Ok(payment)
    }
}

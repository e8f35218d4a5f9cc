use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{PgPool, Row};

#[derive(Clone)]
pub struct StatsRepo {
    pub pool: PgPool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: i64,
    pub total_vendors: i64,
    pub total_events: i64,
    pub total_bookings: i64,
    pub total_revenue: Decimal,
}

impl StatsRepo {
    pub async fn admin_stats(&self) -> Result<AdminStats> {
        let row = sqlx::query(
            r#"
            SELECT
                (SELECT count(*) FROM users) AS total_users,
                (SELECT count(*) FROM vendors) AS total_vendors,
                (SELECT count(*) FROM events) AS total_events,
                (SELECT count(*) FROM bookings) AS total_bookings,
                (SELECT COALESCE(SUM(amount), 0) FROM payments WHERE status = 'completed') AS total_revenue
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(AdminStats {
            total_users: row.get("total_users"),
            total_vendors: row.get("total_vendors"),
            total_events: row.get("total_events"),
            total_bookings: row.get("total_bookings"),
            total_revenue: row.get("total_revenue"),
        })
    }
}

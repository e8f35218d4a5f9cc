use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct SessionsRepo {
    pub pool: PgPool,
}

impl SessionsRepo {
    pub async fn create(&self, sid: &str, user_id: Uuid, expire: DateTime<Utc>) -> Result<()> {
        sqlx::query("INSERT INTO sessions (sid, user_id, expire) VALUES ($1, $2, $3)")
            .bind(sid)
            .bind(user_id)
            .bind(expire)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Expired rows are invisible; reaping is opportunistic.
    pub async fn get_user_id(&self, sid: &str) -> Result<Option<Uuid>> {
        let row: Option<(Uuid,)> =
            sqlx::query_as("SELECT user_id FROM sessions WHERE sid = $1 AND expire > now()")
                .bind(sid)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(id,)| id))
    }

    pub async fn delete(&self, sid: &str) -> Result<()> {
        sqlx::query("DELETE FROM sessions WHERE sid = $1")
            .bind(sid)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn reap_expired(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expire <= now()")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

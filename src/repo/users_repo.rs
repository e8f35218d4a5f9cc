use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::user::{NewUser, User, UserRole};

#[derive(Clone)]
pub struct UsersRepo {
    pub pool: PgPool,
}

impl UsersRepo {
    pub async fn get(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email.to_lowercase())
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn create(&self, data: &NewUser) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, first_name, last_name, phone, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(data.email.to_lowercase())
        .bind(data.password_hash.clone())
        .bind(data.first_name.clone())
        .bind(data.last_name.clone())
        .bind(data.phone.clone())
        .bind(data.role)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn update_role(&self, id: Uuid, role: UserRole) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET role = $2, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(role)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn list_all(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }
}

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::vendor::{NewVendor, UpdateVendor, Vendor, VendorCategory};

#[derive(Clone)]
pub struct VendorsRepo {
    pub pool: PgPool,
}

impl VendorsRepo {
    pub async fn get(&self, id: Uuid) -> Result<Option<Vendor>> {
        let vendor = sqlx::query_as::<_, Vendor>("SELECT * FROM vendors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(vendor)
    }

    pub async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<Vendor>> {
        let vendor = sqlx::query_as::<_, Vendor>("SELECT * FROM vendors WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(vendor)
    }

    pub async fn create(&self, user_id: Uuid, data: &NewVendor) -> Result<Vendor> {
        let vendor = sqlx::query_as::<_, Vendor>(
            r#"
            INSERT INTO vendors (
                user_id, business_name, category, description, services,
                price_range, location, images, availability
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(data.business_name.clone())
        .bind(data.category)
        .bind(data.description.clone())
        .bind(data.services.clone())
        .bind(data.price_range.clone())
        .bind(data.location.clone())
        .bind(data.images.clone())
        .bind(data.availability.clone())
        .fetch_one(&self.pool)
        .await?;
        Ok(vendor)
    }

    pub async fn update(&self, id: Uuid, data: &UpdateVendor) -> Result<Option<Vendor>> {
        let vendor = sqlx::query_as::<_, Vendor>(
            r#"
            UPDATE vendors SET
                business_name = COALESCE($2, business_name),
                category = COALESCE($3, category),
                description = COALESCE($4, description),
                services = COALESCE($5, services),
                price_range = COALESCE($6, price_range),
                location = COALESCE($7, location),
                images = COALESCE($8, images),
                availability = COALESCE($9, availability),
                is_verified = COALESCE($10, is_verified),
                is_active = COALESCE($11, is_active),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.business_name.clone())
        .bind(data.category)
        .bind(data.description.clone())
        .bind(data.services.clone())
        .bind(data.price_range.clone())
        .bind(data.location.clone())
        .bind(data.images.clone())
        .bind(data.availability.clone())
        .bind(data.is_verified)
        .bind(data.is_active)
        .fetch_optional(&self.pool)
        .await?;
        Ok(vendor)
    }

    pub async fn list_active(&self) -> Result<Vec<Vendor>> {
        let vendors = sqlx::query_as::<_, Vendor>(
            "SELECT * FROM vendors WHERE is_active = true ORDER BY rating DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(vendors)
    }

    pub async fn list_by_category(&self, category: VendorCategory) -> Result<Vec<Vendor>> {
        let vendors = sqlx::query_as::<_, Vendor>(
            "SELECT * FROM vendors WHERE category = $1 AND is_active = true ORDER BY rating DESC",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        Ok(vendors)
    }
}

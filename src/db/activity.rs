use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::activity::{Activity, NewActivity};

/// Persistence operations for activities.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Activity>, sqlx::Error>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Activity>, sqlx::Error>;
    async fn insert(&self, activity: &NewActivity) -> Result<Activity, sqlx::Error>;
    /// Overwrites every mutable column. `None` when no row has `id`.
    async fn update(&self, id: i64, activity: &NewActivity) -> Result<Option<Activity>, sqlx::Error>;
    async fn delete_by_id(&self, id: i64) -> Result<(), sqlx::Error>;
}

#[derive(Clone)]
pub struct PgActivityStore {
    pool: PgPool,
}

impl PgActivityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityStore for PgActivityStore {
    async fn find_all(&self) -> Result<Vec<Activity>, sqlx::Error> {
        sqlx::query_as::<_, Activity>(
            "SELECT id, name, description, category, date, duration_minutes FROM activities ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Activity>, sqlx::Error> {
        sqlx::query_as::<_, Activity>(
            "SELECT id, name, description, category, date, duration_minutes FROM activities WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn insert(&self, activity: &NewActivity) -> Result<Activity, sqlx::Error> {
        sqlx::query_as::<_, Activity>(
            "INSERT INTO activities (name, description, category, date, duration_minutes) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, name, description, category, date, duration_minutes",
        )
        .bind(&activity.name)
        .bind(&activity.description)
        .bind(&activity.category)
        .bind(activity.date)
        .bind(activity.duration_minutes)
        .fetch_one(&self.pool)
        .await
    }

    async fn update(&self, id: i64, activity: &NewActivity) -> Result<Option<Activity>, sqlx::Error> {
        sqlx::query_as::<_, Activity>(
            "UPDATE activities \
             SET name = $1, description = $2, category = $3, date = $4, duration_minutes = $5 \
             WHERE id = $6 \
             RETURNING id, name, description, category, date, duration_minutes",
        )
        .bind(&activity.name)
        .bind(&activity.description)
        .bind(&activity.category)
        .bind(activity.date)
        .bind(activity.duration_minutes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM activities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

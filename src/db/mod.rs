pub mod activity;
#[cfg(test)]
pub mod memory;

use log::info;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::AppConfig;

pub use activity::{ActivityStore, PgActivityStore};

pub async fn connect(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    info!(
        "Connecting to the database (max {} connections)",
        config.database_max_connections
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    ensure_schema(&pool).await?;
    Ok(pool)
}

/// Creates the `activities` table when it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS activities (
            id               BIGSERIAL PRIMARY KEY,
            name             TEXT NOT NULL,
            description      VARCHAR(2000),
            category         TEXT NOT NULL,
            date             DATE NOT NULL,
            duration_minutes INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

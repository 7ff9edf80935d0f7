//! Favorites persistence keyed by `(user_id, camp_id)`.
//!
//! Backed by a small Postgres table. Inserts are idempotent: favoriting a
//! camp twice is a success, not a conflict error.

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use tracing::info;

/// Connection pool size. Favorites traffic is light; 5 connections is
/// plenty.
const MAX_CONNECTIONS: u32 = 5;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS favorites (
    user_id    TEXT        NOT NULL,
    camp_id    TEXT        NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    PRIMARY KEY (user_id, camp_id)
)";

pub struct FavoritesStore {
    pool: PgPool,
}

impl FavoritesStore {
    /// Connect and make sure the favorites table exists.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await
            .context("Failed to connect to the favorites database")?;

        sqlx::query(SCHEMA)
            .execute(&pool)
            .await
            .context("Failed to ensure the favorites schema")?;

        info!("Favorites store ready");
        Ok(Self { pool })
    }

    /// Camp ids the user has favorited, oldest first.
    pub async fn list(&self, user_id: &str) -> Result<Vec<String>> {
        let rows = sqlx::query(
            "SELECT camp_id FROM favorites WHERE user_id = $1 ORDER BY created_at",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list favorites")?;

        rows.iter()
            .map(|row| row.try_get("camp_id").context("Missing camp_id column"))
            .collect()
    }

    /// Add a favorite. A duplicate pair is treated as success.
    pub async fn add(&self, user_id: &str, camp_id: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO favorites (user_id, camp_id) VALUES ($1, $2)
             ON CONFLICT (user_id, camp_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(camp_id)
        .execute(&self.pool)
        .await
        .context("Failed to add favorite")?;

        Ok(())
    }

    /// Remove a favorite. Removing a pair that was never saved is not an
    /// error.
    pub async fn remove(&self, user_id: &str, camp_id: &str) -> Result<()> {
        sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND camp_id = $2")
            .bind(user_id)
            .bind(camp_id)
            .execute(&self.pool)
            .await
            .context("Failed to remove favorite")?;

        Ok(())
    }
}

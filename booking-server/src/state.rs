//! Application state shared by every handler

use sqlx::SqlitePool;

use crate::config::Config;
use crate::db::DbService;
use crate::reservations::{BusinessHours, ValidationContext};
use shared::error::AppError;

#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Opening hours applied to reservation payloads
    pub business_hours: BusinessHours,
}

impl AppState {
    /// Open the configured database and apply migrations.
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_url).await?;
        Ok(Self::with_pool(db.pool, config.business_hours))
    }

    pub fn with_pool(pool: SqlitePool, business_hours: BusinessHours) -> Self {
        Self {
            pool,
            business_hours,
        }
    }

    /// Context for validating a payload received now.
    pub fn validation_context(&self) -> ValidationContext<'_> {
        ValidationContext::new(&self.business_hours, self.business_hours.now())
    }
}

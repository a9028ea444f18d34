use sea_orm::{ConnectionTrait, Database, DatabaseConnection};

use crate::config::Config;
use crate::error::{AppError, AppResult};

pub async fn connect(config: &Config) -> AppResult<DatabaseConnection> {
    let db = Database::connect(&config.database_url)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to connect to database: {}", e)))?;
    tracing::debug!(backend = ?db.get_database_backend(), "Database pool ready");
    Ok(db)
}

//! Schema initializer
//!
//! Startup convenience step: make sure the album table exists. Running it
//! against an already-initialized store is a no-op.

use crate::Result;
use sqlx::SqlitePool;
use tracing::{info, warn};

/// Create the album table if it does not exist
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    // price_cents: fixed-point decimal with two fractional digits
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS album (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            artist TEXT NOT NULL,
            price_cents INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Best-effort schema bootstrap
///
/// Failures are logged and swallowed; the service keeps starting with the
/// store in an unknown state. Returns whether the schema is known to exist.
pub async fn seed(pool: &SqlitePool) -> bool {
    match ensure_schema(pool).await {
        Ok(()) => {
            info!("Album table ready");
            true
        }
        Err(e) => {
            warn!("Schema initialization failed, continuing startup: {}", e);
            false
        }
    }
}

//! Store access for the album catalog
//!
//! One long-lived pool is built at startup and shared by every handler;
//! connections are acquired per query and returned to the pool on drop.

use crate::Result;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::info;

pub mod albums;
pub mod init;

pub use albums::{count_albums, get_album, insert_album, list_albums};
pub use init::{ensure_schema, seed};

/// Round-trip a trivial statement through the pool
pub async fn ping(pool: &SqlitePool) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Upper bound on concurrently open store connections
pub const MAX_CONNECTIONS: u32 = 10;

/// Build the shared pool without touching the store
///
/// Connections are opened on first use, so an unreachable store does not
/// prevent startup. Only a malformed connection string fails here.
pub fn connect_lazy(database_url: &str) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_lazy(database_url)?;

    info!("Store pool configured (max {} connections)", MAX_CONNECTIONS);
    Ok(pool)
}

/// Private in-memory store holding a single pinned connection
///
/// Every connection to `sqlite::memory:` is a separate database, so the pool
/// is capped at one connection that never expires.
pub async fn connect_in_memory() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    Ok(pool)
}

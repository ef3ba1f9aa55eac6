//! Album data access layer
//!
//! The only code that reads or writes the album table. Each function issues
//! exactly one parameterized statement.

use crate::models::{Album, NewAlbum, Price};
use crate::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Decode one stored row into the response shape
fn album_from_row(row: &SqliteRow) -> Result<Album> {
    let id: i64 = row.try_get("id")?;
    Ok(Album {
        id: id.to_string(),
        title: row.try_get("title")?,
        artist: row.try_get("artist")?,
        price: Price::from_cents(row.try_get("price_cents")?),
    })
}

/// All albums in storage-natural order
///
/// Any row that fails to decode discards the whole result.
pub async fn list_albums(pool: &SqlitePool) -> Result<Vec<Album>> {
    let rows = sqlx::query("SELECT id, title, artist, price_cents FROM album")
        .fetch_all(pool)
        .await?;

    rows.iter().map(album_from_row).collect()
}

/// One album by identifier
///
/// The identifier is bound as text; a value that matches no row (including
/// a non-numeric one) yields `Ok(None)`.
pub async fn get_album(pool: &SqlitePool, id: &str) -> Result<Option<Album>> {
    let row = sqlx::query("SELECT id, title, artist, price_cents FROM album WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(album_from_row).transpose()
}

/// Insert a new album, returning the number of rows affected
pub async fn insert_album(pool: &SqlitePool, album: &NewAlbum) -> Result<u64> {
    let result = sqlx::query("INSERT INTO album (title, artist, price_cents) VALUES (?, ?, ?)")
        .bind(&album.title)
        .bind(&album.artist)
        .bind(album.price.cents())
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Number of stored albums
pub async fn count_albums(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM album")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

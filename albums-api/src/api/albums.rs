//! Album catalog handlers
//!
//! - GET  /album      list every album (also `/album/`)
//! - GET  /album/:id  fetch one album
//! - POST /album      create an album (also `/album/`)
//!
//! Each handler performs exactly one store operation through
//! `albums_common::db`.

use albums_common::db;
use albums_common::{Album, NewAlbum};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, error, warn};

use super::response::PrettyJson;
use crate::AppState;

/// Body of a successful create
#[derive(Debug, Serialize)]
pub struct CreateAlbumResponse {
    pub success: bool,
}

/// GET /api/v1/album
///
/// Returns every stored album (empty array when the table is empty).
pub async fn list_albums(
    State(state): State<AppState>,
) -> Result<PrettyJson<Vec<Album>>, AlbumError> {
    let albums = db::list_albums(&state.db).await.map_err(|e| {
        error!("Failed to list albums: {}", e);
        AlbumError::ListFailed
    })?;

    debug!("Listed {} albums", albums.len());
    Ok(PrettyJson(albums))
}

/// GET /api/v1/album/:id
///
/// The id is passed to the store as-is; anything that matches no row is 404.
pub async fn get_album_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<PrettyJson<Album>, AlbumError> {
    match db::get_album(&state.db, &id).await {
        Ok(Some(album)) => Ok(PrettyJson(album)),
        Ok(None) => {
            debug!("No album with id {:?}", id);
            Err(AlbumError::NotFound)
        }
        Err(e) => {
            error!("Failed to fetch album {:?}: {}", id, e);
            Err(AlbumError::NotFound)
        }
    }
}

/// POST /api/v1/album
///
/// The body is decoded as JSON whatever the Content-Type header says.
/// Malformed bodies are rejected before the store is touched.
pub async fn create_album(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, PrettyJson<CreateAlbumResponse>), AlbumError> {
    let body = body.map_err(|e| {
        warn!("Could not read album body: {}", e.body_text());
        AlbumError::CouldNotAdd
    })?;
    let album = decode_new_album(&body)?;

    let rows_affected = db::insert_album(&state.db, &album).await.map_err(|e| {
        error!("Could not insert album: {}", e);
        AlbumError::CouldNotAdd
    })?;

    debug!(
        "Inserted album {:?} by {:?} at {} ({} rows)",
        album.title, album.artist, album.price, rows_affected
    );
    Ok((
        StatusCode::CREATED,
        PrettyJson(CreateAlbumResponse {
            success: rows_affected > 0,
        }),
    ))
}

/// Decode a create-request body
fn decode_new_album(body: &[u8]) -> Result<NewAlbum, AlbumError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!("Could not decode album body: {}", e);
        AlbumError::CouldNotAdd
    })
}

/// Album routes, mounted under the versioned base path
pub fn album_routes() -> Router<AppState> {
    Router::new()
        .route("/album", get(list_albums).post(create_album))
        .route("/album/", get(list_albums).post(create_album))
        .route("/album/:id", get(get_album_by_id))
}

/// Album API errors
///
/// Every variant carries a fixed client message; the underlying cause is
/// logged where it occurs and never sent to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumError {
    /// Listing failed (connection, query or row decode)
    ListFailed,
    /// No matching album, or the lookup failed
    NotFound,
    /// Body decode or insert failed
    CouldNotAdd,
}

impl IntoResponse for AlbumError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AlbumError::ListFailed => (StatusCode::NOT_FOUND, "not found"),
            AlbumError::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            AlbumError::CouldNotAdd => (StatusCode::INTERNAL_SERVER_ERROR, "could not add"),
        };

        (status, PrettyJson(json!({ "message": message }))).into_response()
    }
}

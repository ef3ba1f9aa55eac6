//! HTTP API handlers for albums-api

pub mod albums;
pub mod docs;
pub mod health;
pub mod response;

pub use albums::{album_routes, create_album, get_album_by_id, list_albums, AlbumError};
pub use docs::{docs_routes, openapi_document};
pub use health::health_routes;
pub use response::PrettyJson;

//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to produce the service's `{ "mensaje": … }`
//! JSON bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// The display string of each variant is the exact wire message returned to
/// the client. Store errors carry their cause for logging but are surfaced
/// uniformly as a 500 with the operation-specific message.
#[derive(Error, Debug)]
pub enum AppError {
    /// No song matched the requested id on update/delete
    #[error("Canción no encontrada")]
    SongNotFound,

    /// The store could not be read or parsed while listing songs
    #[error("Error al leer el archivo JSON")]
    ListFailed(#[source] crate::state::StoreError),

    /// The store could not be read or rewritten while creating a song
    #[error("Error al guardar la canción")]
    CreateFailed(#[source] crate::state::StoreError),

    /// The store could not be read or rewritten while updating a song
    #[error("Error al actualizar la canción")]
    UpdateFailed(#[source] crate::state::StoreError),

    /// The store could not be read or rewritten while deleting a song
    #[error("Error al eliminar la canción")]
    DeleteFailed(#[source] crate::state::StoreError),
}

impl AppError {
    /// The HTTP status code this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::SongNotFound => StatusCode::NOT_FOUND,
            AppError::ListFailed(_)
            | AppError::CreateFailed(_)
            | AppError::UpdateFailed(_)
            | AppError::DeleteFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = ?self, "request failed");
        }

        let body = Json(json!({
            "mensaje": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StoreError;

    fn io_error() -> StoreError {
        StoreError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(AppError::SongNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::SongNotFound.to_string(), "Canción no encontrada");
    }

    #[test]
    fn test_store_errors_map_to_500_with_operation_message() {
        let cases = [
            (AppError::ListFailed(io_error()), "Error al leer el archivo JSON"),
            (AppError::CreateFailed(io_error()), "Error al guardar la canción"),
            (AppError::UpdateFailed(io_error()), "Error al actualizar la canción"),
            (AppError::DeleteFailed(io_error()), "Error al eliminar la canción"),
        ];
        for (error, message) in cases {
            assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(error.to_string(), message);
        }
    }
}

//! Song API handlers
//!
//! Contains the HTTP request handlers for the four CRUD operations on the
//! repertoire. Each handler performs a full read of the backing store, an
//! in-memory transformation, and (for mutations) a full rewrite. Mutating
//! handlers hold the state write lock across the whole cycle so two
//! concurrent writers cannot lose each other's updates.

use crate::error::AppError;
use crate::state::{AppState, Song};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable message, as shown to the client
    pub mensaje: String,
}

impl MessageResponse {
    fn new(mensaje: &str) -> Self {
        Self {
            mensaje: mensaje.to_string(),
        }
    }
}

/// GET /canciones - List all songs in stored order
pub async fn list_songs(
    State(state): State<Arc<RwLock<AppState>>>,
) -> Result<Json<Vec<Song>>, AppError> {
    let state = state.read().await;
    let songs = state.store.load().map_err(AppError::ListFailed)?;

    Ok(Json(songs))
}

/// POST /canciones - Append a new song to the repertoire
///
/// The payload is not validated or inspected; duplicates are the client's
/// problem. The response confirms the write without echoing the record.
pub async fn create_song(
    State(state): State<Arc<RwLock<AppState>>>,
    Json(song): Json<Song>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let state = state.write().await;
    let mut songs = state.store.load().map_err(AppError::CreateFailed)?;
    songs.push(song);
    state.store.save(&songs).map_err(AppError::CreateFailed)?;

    tracing::info!(total = songs.len(), "song added");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Canción agregada correctamente")),
    ))
}

/// PUT /canciones/:id - Replace the first song matching `id`
///
/// Full replace, not a merge: fields absent from the new body are lost.
pub async fn update_song(
    State(state): State<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
    Json(song): Json<Song>,
) -> Result<Json<MessageResponse>, AppError> {
    let state = state.write().await;
    let mut songs = state.store.load().map_err(AppError::UpdateFailed)?;

    let index = songs
        .iter()
        .position(|s| s.matches_id(&id))
        .ok_or(AppError::SongNotFound)?;

    songs[index] = song;
    state.store.save(&songs).map_err(AppError::UpdateFailed)?;

    tracing::info!(%id, index, "song updated");
    Ok(Json(MessageResponse::new("Canción actualizada correctamente")))
}

/// DELETE /canciones/:id - Remove the first song matching `id`
pub async fn delete_song(
    State(state): State<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let state = state.write().await;
    let mut songs = state.store.load().map_err(AppError::DeleteFailed)?;

    let index = songs
        .iter()
        .position(|s| s.matches_id(&id))
        .ok_or(AppError::SongNotFound)?;

    songs.remove(index);
    state.store.save(&songs).map_err(AppError::DeleteFailed)?;

    tracing::info!(%id, index, "song deleted");
    Ok(Json(MessageResponse::new("Canción eliminada correctamente")))
}

// State management module
// Handles the song record type, shared state, and file persistence

pub mod app_state;
pub mod persistence;

pub use app_state::{AppState, Song};
pub use persistence::{RepertoireStore, StoreError};

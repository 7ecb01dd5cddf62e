// Application state management
// Contains the song record type and the shared state wrapping the store

use crate::state::persistence::RepertoireStore;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// A song record.
///
/// Songs are schema-less: clients may send any set of fields and all of them
/// are stored and returned verbatim. The only field the service ever inspects
/// is `id`, and only to locate a record for update or delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Song(pub Map<String, Value>);

impl Song {
    /// The record's `id` field, if present.
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    /// Whether this record's `id` matches a path parameter.
    ///
    /// String ids compare by plain string equality. Numeric ids match any
    /// rendering of the same value, so a record with `id: 5` matches the
    /// path segments `"5"`, `"05"` and `"5.0"`. Ids of any other JSON type
    /// (or absent ids) never match.
    pub fn matches_id(&self, wanted: &str) -> bool {
        match self.id() {
            Some(Value::String(s)) => s == wanted,
            Some(Value::Number(n)) => {
                n.to_string() == wanted
                    || matches!(wanted.parse::<f64>(), Ok(w) if n.as_f64() == Some(w))
            }
            _ => false,
        }
    }
}

/// Shared application state.
///
/// Holds the file-backed repertoire store. Handlers access it through
/// `Arc<RwLock<AppState>>`: the list handler takes the read lock, and every
/// mutating handler holds the write lock across its whole read-modify-write
/// cycle so concurrent writes cannot lose updates.
pub struct AppState {
    /// The file-backed repertoire store
    pub store: RepertoireStore,
}

impl AppState {
    /// Create application state backed by the repertoire file at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            store: RepertoireStore::new(path),
        }
    }
}

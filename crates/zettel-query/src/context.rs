//! Request context passed into every query.

use std::sync::Arc;
use zettel_core::{NoteRef, Vault};

/// Everything a query needs, passed explicitly. There is no ambient
/// "current workspace" or "active note"; tests construct a context over a
/// temp-dir vault and get fully deterministic behavior.
#[derive(Clone)]
pub struct QueryContext {
    pub vault: Arc<dyn Vault>,
    /// The note the host currently has focused, if any. Queries that need
    /// one return an absent result (not an error) when it is `None`.
    pub active_note: Option<NoteRef>,
}

impl QueryContext {
    pub fn new(vault: Arc<dyn Vault>) -> Self {
        Self {
            vault,
            active_note: None,
        }
    }

    pub fn with_active_note(mut self, note: NoteRef) -> Self {
        self.active_note = Some(note);
        self
    }
}

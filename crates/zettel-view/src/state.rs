//! View state: the one authoritative item list per view.

use serde::Serialize;
use std::path::PathBuf;
use zettel_core::NoteRef;

/// One leaf row in a list view. The label is the note's canonical
/// identifier; activating the row opens that identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub name: String,
    pub path: PathBuf,
}

impl ListItem {
    pub fn from_note(note: &NoteRef) -> Self {
        Self {
            name: note.name(),
            path: note.path().to_path_buf(),
        }
    }
}

/// The state a live view publishes. Replaced as a whole on every refresh;
/// never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum ViewState {
    /// Nothing to show: no result yet, or the bound query's context is
    /// absent (e.g. backlinks with no active note).
    #[default]
    Empty,
    /// A complete result list.
    Populated(Vec<ListItem>),
}

impl ViewState {
    pub fn count(&self) -> usize {
        match self {
            ViewState::Empty => 0,
            ViewState::Populated(items) => items.len(),
        }
    }

    pub fn items(&self) -> &[ListItem] {
        match self {
            ViewState::Empty => &[],
            ViewState::Populated(items) => items,
        }
    }
}

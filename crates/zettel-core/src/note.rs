//! Note handles and canonical naming.

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Handle to a note file on disk.
///
/// Handles are produced fresh by every corpus scan and never mutated. The
/// canonical name is derived from the path on demand rather than stored, and
/// the modification time is fetched from the filesystem only when a sort
/// order asks for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NoteRef {
    path: PathBuf,
}

impl NoteRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Canonical identifier of the note: the file's base name with its final
    /// extension stripped. `notes/Alpha.md` and `notes/Alpha.markdown` both
    /// yield `Alpha` and collide by design.
    pub fn name(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Last modification time, fetched on demand. `None` when the file has
    /// disappeared between the scan and the stat.
    pub async fn modified(&self) -> Option<SystemTime> {
        let meta = tokio::fs::metadata(&self.path).await.ok()?;
        meta.modified().ok()
    }
}

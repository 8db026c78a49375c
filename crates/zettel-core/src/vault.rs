//! Vault abstraction and the on-disk implementation.
//!
//! The vault is the seam between the query engine and whatever hosts the
//! note corpus. Queries only ever see the trait, which keeps them
//! deterministic and host-free under test.

use crate::error::{Error, Result};
use crate::links::is_valid_link_name;
use crate::note::NoteRef;
use async_trait::async_trait;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// File pattern for note files in a vault.
pub const NOTE_GLOB: &str = "*.{md,markdown}";

/// Extension given to newly materialized notes.
pub const NOTE_EXTENSION: &str = "md";

/// A corpus of note files.
#[async_trait]
pub trait Vault: Send + Sync {
    /// Root directory of the vault.
    fn root(&self) -> &Path;

    /// Enumerate every note file currently in the vault. An empty vault
    /// yields an empty sequence, never an error.
    async fn list_notes(&self) -> Result<Vec<NoteRef>>;

    /// Read the full UTF-8 content of one note.
    async fn read_note(&self, note: &NoteRef) -> Result<String>;

    /// Materialize a new note for `name`. The file is created atomically;
    /// if something already exists at the target path this fails with
    /// [`Error::NoteExists`] and never overwrites.
    async fn create_note(&self, name: &str) -> Result<NoteRef>;
}

/// Filesystem-backed vault rooted at a workspace directory.
#[derive(Debug, Clone)]
pub struct FsVault {
    root: PathBuf,
    matcher: GlobSet,
}

impl FsVault {
    /// Open a vault over `root` with the default note pattern.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        Self::with_glob(root, NOTE_GLOB)
    }

    /// Open a vault over `root` matching note files against `glob`.
    pub fn with_glob(root: impl Into<PathBuf>, glob: &str) -> Result<Self> {
        let matcher = GlobSetBuilder::new().add(Glob::new(glob)?).build()?;
        Ok(Self {
            root: root.into(),
            matcher,
        })
    }

    fn is_hidden(entry: &DirEntry) -> bool {
        entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
    }
}

#[async_trait]
impl Vault for FsVault {
    fn root(&self) -> &Path {
        &self.root
    }

    async fn list_notes(&self) -> Result<Vec<NoteRef>> {
        let root = self.root.clone();
        let matcher = self.matcher.clone();

        // Directory walking is blocking work; keep it off the runtime.
        let notes = tokio::task::spawn_blocking(move || {
            let mut notes = Vec::new();
            let walker = WalkDir::new(&root)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|e| e.depth() == 0 || !Self::is_hidden(e));
            for entry in walker {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        warn!(error = %err, "skipping unreadable directory entry");
                        continue;
                    }
                };
                if entry.file_type().is_file() && matcher.is_match(entry.file_name()) {
                    notes.push(NoteRef::new(entry.into_path()));
                }
            }
            notes
        })
        .await?;

        debug!(count = notes.len(), root = %self.root.display(), "scanned vault");
        Ok(notes)
    }

    async fn read_note(&self, note: &NoteRef) -> Result<String> {
        Ok(tokio::fs::read_to_string(note.path()).await?)
    }

    async fn create_note(&self, name: &str) -> Result<NoteRef> {
        if !is_valid_link_name(name) {
            return Err(Error::InvalidName(name.to_string()));
        }
        let path = self.root.join(format!("{name}.{NOTE_EXTENSION}"));

        let open = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await;
        let mut file = match open {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(Error::NoteExists(path));
            }
            Err(err) => return Err(err.into()),
        };

        file.write_all(format!("# {name}").as_bytes()).await?;
        debug!(path = %path.display(), "materialized note");
        Ok(NoteRef::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn vault(tmp: &TempDir) -> FsVault {
        FsVault::new(tmp.path()).unwrap()
    }

    fn note_names(notes: &[NoteRef]) -> Vec<String> {
        notes.iter().map(|n| n.name()).collect()
    }

    #[tokio::test]
    async fn empty_vault_lists_nothing() {
        let tmp = TempDir::new().unwrap();
        let notes = vault(&tmp).list_notes().await.unwrap();
        assert!(notes.is_empty());
    }

    #[tokio::test]
    async fn lists_only_note_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.md"), "").unwrap();
        fs::write(tmp.path().join("b.markdown"), "").unwrap();
        fs::write(tmp.path().join("c.txt"), "").unwrap();
        fs::write(tmp.path().join("d"), "").unwrap();

        let notes = vault(&tmp).list_notes().await.unwrap();
        assert_eq!(note_names(&notes), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn recurses_into_subdirectories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("top.md"), "").unwrap();
        fs::write(tmp.path().join("sub/nested.md"), "").unwrap();

        let notes = vault(&tmp).list_notes().await.unwrap();
        let mut names = note_names(&notes);
        names.sort();
        assert_eq!(names, vec!["nested", "top"]);
    }

    #[tokio::test]
    async fn skips_hidden_directories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        fs::write(tmp.path().join(".git/config.md"), "").unwrap();
        fs::write(tmp.path().join(".hidden.md"), "").unwrap();
        fs::write(tmp.path().join("visible.md"), "").unwrap();

        let notes = vault(&tmp).list_notes().await.unwrap();
        assert_eq!(note_names(&notes), vec!["visible"]);
    }

    #[tokio::test]
    async fn read_note_returns_contents() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.md"), "hello [[B]]").unwrap();
        let v = vault(&tmp);
        let notes = v.list_notes().await.unwrap();
        let text = v.read_note(&notes[0]).await.unwrap();
        assert_eq!(text, "hello [[B]]");
    }

    #[tokio::test]
    async fn create_note_writes_a_single_heading_line() {
        let tmp = TempDir::new().unwrap();
        let created = vault(&tmp).create_note("Foo").await.unwrap();
        assert_eq!(created.name(), "Foo");
        let contents = fs::read_to_string(created.path()).unwrap();
        assert_eq!(contents, "# Foo");
    }

    #[tokio::test]
    async fn create_note_refuses_to_overwrite() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Foo.md"), "precious").unwrap();

        let err = vault(&tmp).create_note("Foo").await.unwrap_err();
        assert!(matches!(err, Error::NoteExists(_)));
        // existing contents untouched
        assert_eq!(
            fs::read_to_string(tmp.path().join("Foo.md")).unwrap(),
            "precious"
        );
    }

    #[tokio::test]
    async fn create_note_rejects_names_outside_the_link_grammar() {
        let tmp = TempDir::new().unwrap();
        let err = vault(&tmp).create_note("../escape").await.unwrap_err();
        assert!(matches!(err, Error::InvalidName(_)));
    }
}

//! Core data model for the zettel link engine.
//!
//! A vault is a directory of plain-text notes that reference each other
//! through `[[Name]]` wiki-links. This crate provides the pieces everything
//! else composes:
//!
//! - [`NoteRef`]: handle to a note file, with its canonical identifier
//!   (file name minus extension) derived on demand
//! - [`links`]: wiki-link token extraction over note text
//! - [`SortOrder`]: the interchangeable result orderings
//! - [`Vault`]: the host seam for corpus enumeration, reads, and note
//!   materialization, with [`FsVault`] as the on-disk implementation
//!
//! Nothing here caches: every scan produces fresh handles, and query
//! results never outlive their request.

pub mod error;
pub mod links;
pub mod note;
pub mod sort;
pub mod vault;

pub use error::{Error, Result};
pub use note::NoteRef;
pub use sort::{natural_cmp, SortEntry, SortOrder};
pub use vault::{FsVault, Vault, NOTE_EXTENSION, NOTE_GLOB};

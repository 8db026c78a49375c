//! Resolve-or-materialize navigation.

use crate::context::QueryContext;
use crate::resolver::resolve_links;
use zettel_core::{NoteRef, Result};

/// Whether [`open_or_create`] found an existing note or had to make one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opened {
    Existing(NoteRef),
    Created(NoteRef),
}

impl Opened {
    pub fn note(&self) -> &NoteRef {
        match self {
            Opened::Existing(note) | Opened::Created(note) => note,
        }
    }
}

/// Resolve `name` against the current corpus, materializing a fresh note
/// when nothing matches. This is the one place an unresolved identifier
/// turns into a file; the pure resolver never creates anything.
pub async fn open_or_create(ctx: &QueryContext, name: &str) -> Result<Opened> {
    let corpus = ctx.vault.list_notes().await?;
    match resolve_links([name], &corpus).into_iter().next() {
        Some(note) => Ok(Opened::Existing(note)),
        None => {
            let note = ctx.vault.create_note(name).await?;
            Ok(Opened::Created(note))
        }
    }
}

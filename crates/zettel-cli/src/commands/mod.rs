//! Command implementations. Each command formats its own user-facing
//! output; library errors bubble up and are printed once by `main`.

pub mod complete;
pub mod definition;
pub mod list;
pub mod new;
pub mod open;
pub mod watch;

use anyhow::{bail, Result};
use zettel_core::{NoteRef, Vault};
use zettel_query::resolver::resolve_links;

/// Look up the note the user named, for commands that need an active-note
/// context. Unknown names are a user-facing failure, not a crash.
pub(crate) async fn find_note(vault: &dyn Vault, name: &str) -> Result<NoteRef> {
    let corpus = vault.list_notes().await?;
    match resolve_links([name], &corpus).into_iter().next() {
        Some(note) => Ok(note),
        None => bail!(
            "no note named '{}' in {}",
            name,
            vault.root().display()
        ),
    }
}

//! The three named link queries.

use crate::backlinks::find_backlinks;
use crate::context::QueryContext;
use crate::resolver::resolve_links;
use futures::stream::{self, StreamExt};
use zettel_core::links::extract_links;
use zettel_core::{NoteRef, Result, SortEntry, SortOrder};

/// Which list a view or command is asking for. An explicit tagged choice;
/// callers select a query by variant, never by comparing function values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkQuery {
    /// Every note in the vault.
    AllNotes,
    /// Notes the active note references.
    OutgoingLinks,
    /// Notes that reference the active note.
    Backlinks,
}

/// Run `query` against a fresh corpus scan and return the result in `order`.
///
/// `None` means the query needed an active note and the context has none:
/// an absent result, not an error. `AllNotes` never returns `None`; an empty
/// vault yields `Some` of an empty list. Every call re-executes the full
/// pipeline from scratch; nothing is cached between calls.
pub async fn run(
    ctx: &QueryContext,
    query: LinkQuery,
    order: SortOrder,
) -> Result<Option<Vec<NoteRef>>> {
    let entries = run_entries(ctx, query, order).await?;
    Ok(entries.map(|entries| entries.into_iter().map(|e| e.note).collect()))
}

/// Like [`run`], but keeps the prefetched modification times alongside each
/// handle so a live view can re-sort without going back to the filesystem.
pub async fn run_entries(
    ctx: &QueryContext,
    query: LinkQuery,
    order: SortOrder,
) -> Result<Option<Vec<SortEntry>>> {
    let corpus = ctx.vault.list_notes().await?;

    let notes = match query {
        LinkQuery::AllNotes => corpus,
        LinkQuery::OutgoingLinks => {
            let Some(active) = &ctx.active_note else {
                return Ok(None);
            };
            let text = ctx.vault.read_note(active).await?;
            let names: Vec<&str> = extract_links(&text).collect();
            resolve_links(names, &corpus)
        }
        LinkQuery::Backlinks => {
            let Some(active) = &ctx.active_note else {
                return Ok(None);
            };
            find_backlinks(ctx.vault.as_ref(), &corpus, active).await
        }
    };

    let mut entries = fetch_entries(notes).await;
    order.apply(&mut entries);
    Ok(Some(entries))
}

/// Pair each handle with its modification time, preserving scan order.
async fn fetch_entries(notes: Vec<NoteRef>) -> Vec<SortEntry> {
    stream::iter(notes)
        .map(|note| async move {
            let modified = note.modified().await;
            SortEntry::new(note, modified)
        })
        .buffered(16)
        .collect()
        .await
}

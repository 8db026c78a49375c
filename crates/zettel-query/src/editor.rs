//! Editor-facing queries: completion candidates and go-to-definition.

use crate::context::QueryContext;
use crate::open::{open_or_create, Opened};
use crate::provider::{self, LinkQuery};
use std::cmp::Ordering;
use zettel_core::links::{link_at, wants_completion};
use zettel_core::{natural_cmp, NoteRef, Result, SortOrder};

/// A navigable position inside a note file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub note: NoteRef,
    /// Byte offset into the note's content.
    pub offset: usize,
}

/// Candidates for completing a link the user has just opened with `[[`.
///
/// Returns `None` unless the cursor sits immediately after a double open
/// bracket; otherwise every canonical identifier in the vault, in natural
/// name order.
pub async fn completion_candidates(
    ctx: &QueryContext,
    line_prefix: &str,
) -> Result<Option<Vec<String>>> {
    if !wants_completion(line_prefix) {
        return Ok(None);
    }
    let notes = provider::run(ctx, LinkQuery::AllNotes, SortOrder::NameAscending)
        .await?
        .unwrap_or_default();
    let mut names: Vec<String> = notes.iter().map(|note| note.name()).collect();
    // files differing only by extension collide on one identifier
    names.dedup_by(|a, b| natural_cmp(a, b) == Ordering::Equal);
    Ok(Some(names))
}

/// Definition of the link token under the cursor, if the cursor is inside
/// one. An unresolved token materializes a new note first, so navigation
/// always has somewhere to land.
pub async fn definition(
    ctx: &QueryContext,
    line: &str,
    column: usize,
) -> Result<Option<(Location, Opened)>> {
    let Some(name) = link_at(line, column) else {
        return Ok(None);
    };
    let opened = open_or_create(ctx, name).await?;
    let location = Location {
        note: opened.note().clone(),
        offset: 0,
    };
    Ok(Some((location, opened)))
}

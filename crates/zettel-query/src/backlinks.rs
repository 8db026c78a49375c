//! Corpus-wide backlink scanning.

use futures::stream::{self, StreamExt};
use tracing::warn;
use zettel_core::links::extract_links;
use zettel_core::{NoteRef, Vault};

/// How many note reads may be in flight at once during a scan.
const MAX_CONCURRENT_READS: usize = 16;

/// Find every note in `corpus` whose content references `target` by name.
///
/// This is a full-text scan, O(corpus) per call; there is no persistent
/// index. Reads run concurrently but results keep corpus-scan order. A note
/// that references itself is a valid backlink of itself. A file that cannot
/// be read is excluded and logged; it never fails the scan.
pub async fn find_backlinks(
    vault: &dyn Vault,
    corpus: &[NoteRef],
    target: &NoteRef,
) -> Vec<NoteRef> {
    let target_name = target.name().to_lowercase();

    let mut reads = stream::iter(corpus.iter().cloned())
        .map(|note| async move {
            let contents = vault.read_note(&note).await;
            (note, contents)
        })
        .buffered(MAX_CONCURRENT_READS);

    let mut backlinks = Vec::new();
    while let Some((note, contents)) = reads.next().await {
        match contents {
            Ok(text) => {
                if extract_links(&text).any(|name| name.to_lowercase() == target_name) {
                    backlinks.push(note);
                }
            }
            Err(err) => {
                warn!(
                    path = %note.path().display(),
                    error = %err,
                    "skipping unreadable note during backlink scan"
                );
            }
        }
    }
    backlinks
}

//! Link name resolution against a scanned corpus.

use std::collections::{HashMap, HashSet};
use tracing::warn;
use zettel_core::NoteRef;

/// Resolve referenced identifiers to note handles.
///
/// Names are matched case-insensitively and deduplicated here, preserving
/// first-appearance order even when extraction produced repeats. A name with
/// no match is silently dropped; creating the missing note is the caller's
/// decision, never the resolver's. A name with several matches (files whose
/// canonical identifiers collide) resolves to the lexically smallest path
/// and logs the ambiguity; it is never an error.
pub fn resolve_links<'a, I>(names: I, corpus: &[NoteRef]) -> Vec<NoteRef>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut by_name: HashMap<String, Vec<&NoteRef>> = HashMap::new();
    for note in corpus {
        by_name.entry(note.name().to_lowercase()).or_default().push(note);
    }

    let mut resolved = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for name in names {
        let key = name.to_lowercase();
        if !seen.insert(key.clone()) {
            continue;
        }

        let Some(candidates) = by_name.get(&key) else {
            continue;
        };
        if candidates.len() > 1 {
            warn!(
                name,
                matches = candidates.len(),
                "ambiguous link name, resolving to the lexically smallest path"
            );
        }
        if let Some(chosen) = candidates.iter().min_by_key(|note| note.path()) {
            resolved.push((*chosen).clone());
        }
    }
    resolved
}

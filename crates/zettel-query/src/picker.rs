//! Fuzzy filtering for the create-note picker.

use nucleo_matcher::{
    pattern::{CaseMatching, Normalization, Pattern},
    Config, Matcher, Utf32Str,
};
use zettel_core::natural_cmp;

/// Filter `names` down to those fuzzily matching `query`, best match first.
///
/// An empty query keeps everything in natural name order. An empty result
/// is the picker's cue to offer "create new" for the typed text.
pub fn filter_identifiers(names: &[String], query: &str) -> Vec<String> {
    if query.is_empty() {
        let mut all = names.to_vec();
        all.sort_by(|a, b| natural_cmp(a, b));
        return all;
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);

    let mut scored: Vec<(u32, &String)> = names
        .iter()
        .filter_map(|name| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(name, &mut buf);
            pattern.score(haystack, &mut matcher).map(|score| (score, name))
        })
        .collect();

    // Best score first; equal scores fall back to natural name order.
    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| natural_cmp(a.1, b.1)));
    scored.into_iter().map(|(_, name)| name.clone()).collect()
}

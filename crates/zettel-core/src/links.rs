//! Wiki-link token extraction.
//!
//! A link token is a `[[Name]]` reference embedded in note text. The payload
//! grammar is one-or-more characters from {letters, digits, underscore,
//! hyphen, period, space}. Malformed or unterminated spans never fail
//! extraction; they are simply skipped.

use regex::Regex;
use std::sync::LazyLock;

static LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[\[([\w\-. ]+)\]\]").expect("link regex"));

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\-. ]+$").expect("link name regex"));

/// Iterate over the identifiers referenced by `content`, in order of first
/// appearance. Duplicates are preserved; deduplication happens at
/// resolution. The iterator is lazy and can be restarted by calling again.
pub fn extract_links(content: &str) -> impl Iterator<Item = &str> {
    LINK_REGEX
        .captures_iter(content)
        .map(|cap| cap.get(1).expect("payload group").as_str())
}

/// Payload of the link token whose span contains the byte offset `column`
/// on `line`, if any.
pub fn link_at(line: &str, column: usize) -> Option<&str> {
    LINK_REGEX
        .find_iter(line)
        .find(|m| m.start() <= column && column < m.end())
        .map(|m| &line[m.start() + 2..m.end() - 2])
}

/// True when `line_prefix` ends at a just-opened link token, i.e. the cursor
/// sits immediately after `[[`.
pub fn wants_completion(line_prefix: &str) -> bool {
    line_prefix.ends_with("[[")
}

/// True when `name` is expressible as a link payload.
pub fn is_valid_link_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

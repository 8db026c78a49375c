//! Request-scoped query pipelines over a note vault.
//!
//! Every query here recomputes from a fresh corpus scan; there is no
//! cross-call cache or persistent index, so results are always correct as
//! of the call. The pieces:
//!
//! - [`QueryContext`]: explicit vault + active-note context, no ambient state
//! - [`resolver::resolve_links`]: link names to note handles, with a
//!   deterministic ambiguity tie-break
//! - [`backlinks::find_backlinks`]: corpus-wide inbound reference scan
//! - [`provider`]: the three named queries ([`LinkQuery`]) feeding the views
//! - [`editor`]: completion and go-to-definition for the host editor
//! - [`open::open_or_create`]: resolve-or-materialize navigation
//! - [`picker::filter_identifiers`]: fuzzy filtering for the create picker

pub mod backlinks;
pub mod context;
pub mod editor;
pub mod open;
pub mod picker;
pub mod provider;
pub mod resolver;

pub use context::QueryContext;
pub use editor::Location;
pub use open::Opened;
pub use provider::LinkQuery;

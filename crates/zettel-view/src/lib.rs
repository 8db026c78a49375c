//! Live, event-driven list views over the link queries.
//!
//! A [`LiveView`] binds one [`LinkQuery`] and one [`SortOrder`] to a view
//! state that the host renders. Editor-lifecycle events trigger a refresh;
//! each refresh runs the bound query from scratch and replaces the
//! published state wholesale. There is no incremental diffing and no
//! reader ever observes a half-updated list: the state travels through a
//! `tokio::sync::watch` channel as one value.
//!
//! Overlapping refreshes follow a latest-wins policy. A new trigger aborts
//! the in-flight refresh task, so under rapid edits only the most recent
//! trigger's result ever reaches the view.

use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::warn;
use zettel_core::{NoteRef, SortEntry, SortOrder, Vault};
use zettel_query::{provider, LinkQuery, QueryContext};

mod state;

pub use state::{ListItem, ViewState};

/// Editor-lifecycle events that drive a view refresh.
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// The host focused a different note (or none).
    ActiveNoteChanged(Option<NoteRef>),
    /// The content of some note changed on disk or in the editor.
    NoteContentChanged,
    /// Explicit refresh request.
    Refresh,
}

/// One live list view: a bound query, its sort order, and the exclusively
/// owned state it publishes.
pub struct LiveView {
    title: String,
    query: LinkQuery,
    order: SortOrder,
    vault: Arc<dyn Vault>,
    active_note: Option<NoteRef>,
    state_tx: watch::Sender<ViewState>,
    /// Entries from the most recent completed refresh, kept so an order
    /// switch can reorder without re-scanning the corpus.
    fetched: Arc<Mutex<Vec<SortEntry>>>,
    inflight: Option<JoinHandle<()>>,
}

impl LiveView {
    pub fn new(
        title: impl Into<String>,
        vault: Arc<dyn Vault>,
        query: LinkQuery,
        order: SortOrder,
    ) -> Self {
        let (state_tx, _) = watch::channel(ViewState::Empty);
        Self {
            title: title.into(),
            query,
            order,
            vault,
            active_note: None,
            state_tx,
            fetched: Arc::new(Mutex::new(Vec::new())),
            inflight: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn query(&self) -> LinkQuery {
        self.query
    }

    /// Subscribe to state replacements. The receiver always sees complete
    /// states, never partial updates.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state_tx.subscribe()
    }

    /// Heading the host renders for this view, e.g. `Backlinks [3]`.
    pub fn heading(&self) -> String {
        format!("{} [{}]", self.title, self.state_tx.borrow().count())
    }

    /// Feed one editor-lifecycle event into the view. Every event kind
    /// triggers a full refresh; `ActiveNoteChanged` also rebinds the
    /// query's context first.
    pub fn handle_event(&mut self, event: ViewEvent) {
        if let ViewEvent::ActiveNoteChanged(note) = &event {
            self.active_note = note.clone();
        }
        self.refresh();
    }

    /// Switch the sort order. This only reorders the already-fetched
    /// collection; it never goes back to the corpus.
    pub fn set_order(&mut self, order: SortOrder) {
        self.order = order;
        let mut entries = self.fetched.lock().clone();
        order.apply(&mut entries);
        self.state_tx.send_replace(populated(&entries));
    }

    /// Cancel any in-flight refresh and start a fresh one (latest-wins).
    /// The spawned task runs the bound query and atomically replaces the
    /// published state with the outcome.
    pub fn refresh(&mut self) {
        if let Some(handle) = self.inflight.take() {
            handle.abort();
        }

        let ctx = QueryContext {
            vault: self.vault.clone(),
            active_note: self.active_note.clone(),
        };
        let (query, order) = (self.query, self.order);
        let state_tx = self.state_tx.clone();
        let fetched = self.fetched.clone();
        let title = self.title.clone();

        self.inflight = Some(tokio::spawn(async move {
            match provider::run_entries(&ctx, query, order).await {
                Ok(Some(entries)) => {
                    let state = populated(&entries);
                    *fetched.lock() = entries;
                    state_tx.send_replace(state);
                }
                Ok(None) => {
                    fetched.lock().clear();
                    state_tx.send_replace(ViewState::Empty);
                }
                Err(err) => {
                    warn!(view = %title, error = %err, "view refresh failed");
                }
            }
        }));
    }

    /// Wait for the current in-flight refresh, if any, to finish.
    pub async fn settled(&mut self) {
        if let Some(handle) = self.inflight.take() {
            // Aborted refreshes resolve to a JoinError; that is fine here.
            let _ = handle.await;
        }
    }
}

fn populated(entries: &[SortEntry]) -> ViewState {
    ViewState::Populated(entries.iter().map(|e| ListItem::from_note(&e.note)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use zettel_core::FsVault;

    fn vault(tmp: &TempDir) -> Arc<dyn Vault> {
        Arc::new(FsVault::new(tmp.path()).unwrap())
    }

    fn item_names(state: &ViewState) -> Vec<String> {
        state.items().iter().map(|i| i.name.clone()).collect()
    }

    #[tokio::test]
    async fn starts_empty_and_populates_on_refresh() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.md"), "").unwrap();
        fs::write(tmp.path().join("a.md"), "").unwrap();

        let mut view = LiveView::new(
            "Notes",
            vault(&tmp),
            LinkQuery::AllNotes,
            SortOrder::NameAscending,
        );
        let rx = view.subscribe();
        assert_eq!(*rx.borrow(), ViewState::Empty);

        view.handle_event(ViewEvent::Refresh);
        view.settled().await;

        let state = rx.borrow().clone();
        assert_eq!(state.count(), 2);
        assert_eq!(item_names(&state), vec!["a", "b"]);
        assert_eq!(view.heading(), "Notes [2]");
    }

    #[tokio::test]
    async fn query_needing_an_active_note_stays_empty_without_one() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.md"), "[[b]]").unwrap();
        fs::write(tmp.path().join("b.md"), "").unwrap();

        let mut view = LiveView::new(
            "Backlinks",
            vault(&tmp),
            LinkQuery::Backlinks,
            SortOrder::NameAscending,
        );
        let rx = view.subscribe();

        view.handle_event(ViewEvent::Refresh);
        view.settled().await;
        assert_eq!(*rx.borrow(), ViewState::Empty);
    }

    #[tokio::test]
    async fn active_note_change_rebinds_the_context() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.md"), "[[b]]").unwrap();
        fs::write(tmp.path().join("b.md"), "# b").unwrap();

        let v = vault(&tmp);
        let corpus = v.list_notes().await.unwrap();
        let b = corpus.iter().find(|n| n.name() == "b").unwrap().clone();

        let mut view = LiveView::new(
            "Backlinks",
            v,
            LinkQuery::Backlinks,
            SortOrder::NameAscending,
        );
        let rx = view.subscribe();

        view.handle_event(ViewEvent::ActiveNoteChanged(Some(b)));
        view.settled().await;
        assert_eq!(item_names(&rx.borrow()), vec!["a"]);

        view.handle_event(ViewEvent::ActiveNoteChanged(None));
        view.settled().await;
        assert_eq!(*rx.borrow(), ViewState::Empty);
    }

    #[tokio::test]
    async fn state_is_replaced_wholesale_on_content_change() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.md"), "").unwrap();

        let mut view = LiveView::new(
            "Notes",
            vault(&tmp),
            LinkQuery::AllNotes,
            SortOrder::NameAscending,
        );
        let rx = view.subscribe();

        view.handle_event(ViewEvent::Refresh);
        view.settled().await;
        assert_eq!(rx.borrow().count(), 1);

        fs::write(tmp.path().join("b.md"), "").unwrap();
        view.handle_event(ViewEvent::NoteContentChanged);
        view.settled().await;
        assert_eq!(item_names(&rx.borrow()), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn rapid_events_end_populated_with_the_latest_result() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.md"), "").unwrap();

        let mut view = LiveView::new(
            "Notes",
            vault(&tmp),
            LinkQuery::AllNotes,
            SortOrder::NameAscending,
        );
        let rx = view.subscribe();

        // burst of triggers; earlier refreshes are aborted, the last wins
        for _ in 0..5 {
            view.handle_event(ViewEvent::Refresh);
        }
        view.settled().await;

        assert_eq!(item_names(&rx.borrow()), vec!["a"]);
    }

    #[tokio::test]
    async fn order_switch_reorders_without_rescanning() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("note2.md"), "").unwrap();
        fs::write(tmp.path().join("note10.md"), "").unwrap();

        let mut view = LiveView::new(
            "Notes",
            vault(&tmp),
            LinkQuery::AllNotes,
            SortOrder::NameAscending,
        );
        let rx = view.subscribe();
        view.handle_event(ViewEvent::Refresh);
        view.settled().await;
        assert_eq!(item_names(&rx.borrow()), vec!["note2", "note10"]);

        // a file added after the fetch is not picked up by an order switch
        fs::write(tmp.path().join("zzz.md"), "").unwrap();
        view.set_order(SortOrder::NameDescending);
        assert_eq!(item_names(&rx.borrow()), vec!["note10", "note2"]);
    }
}

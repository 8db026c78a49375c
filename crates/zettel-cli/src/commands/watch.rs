//! Live list views driven by filesystem change notifications.

use crate::cli::ViewArg;
use crate::config::CliConfig;
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use notify::RecursiveMode;
use notify_debouncer_full::{new_debouncer, DebounceEventResult, DebouncedEvent};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error};
use zettel_core::SortOrder;
use zettel_query::LinkQuery;
use zettel_view::{LiveView, ViewEvent, ViewState};

pub async fn execute(
    config: CliConfig,
    view: ViewArg,
    note: Option<String>,
    sort: SortOrder,
) -> Result<()> {
    let vault = Arc::new(config.vault()?);
    let active = match &note {
        Some(name) => Some(super::find_note(vault.as_ref(), name).await?),
        None => None,
    };

    let matcher = note_matcher(&config.note_glob)?;

    let mut views: Vec<LiveView> = view
        .queries()
        .into_iter()
        .map(|query| LiveView::new(view_title(query), vault.clone(), query, sort))
        .collect();

    // one renderer per view; each re-prints its whole list on replacement
    for view in &views {
        spawn_renderer(view);
    }

    for view in &mut views {
        view.handle_event(ViewEvent::ActiveNoteChanged(active.clone()));
    }

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut debouncer = new_debouncer(
        Duration::from_millis(config.watch_debounce_ms),
        None,
        move |result: DebounceEventResult| match result {
            Ok(events) => {
                for event in events {
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            }
            Err(errors) => {
                for err in errors {
                    error!(error = %err, "file watch error");
                }
            }
        },
    )
    .context("failed to start the file watcher")?;
    debouncer
        .watch(&config.root, RecursiveMode::Recursive)
        .with_context(|| format!("failed to watch {}", config.root.display()))?;

    println!("👀 Watching {} - Ctrl-C to stop", config.root.display());

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            Some(event) = event_rx.recv() => {
                if !touches_note(&event, &matcher) {
                    continue;
                }
                debug!(paths = ?event.event.paths, "note change, refreshing all views");
                for view in &mut views {
                    view.handle_event(ViewEvent::NoteContentChanged);
                }
            }
        }
    }

    Ok(())
}

fn view_title(query: LinkQuery) -> &'static str {
    match query {
        LinkQuery::AllNotes => "Notes",
        LinkQuery::OutgoingLinks => "Links",
        LinkQuery::Backlinks => "Backlinks",
    }
}

fn note_matcher(glob: &str) -> Result<GlobSet> {
    Ok(GlobSetBuilder::new()
        .add(Glob::new(glob).context("invalid note glob")?)
        .build()?)
}

fn touches_note(event: &DebouncedEvent, matcher: &GlobSet) -> bool {
    event
        .event
        .paths
        .iter()
        .any(|path| path.file_name().is_some_and(|name| matcher.is_match(name)))
}

fn spawn_renderer(view: &LiveView) {
    let mut rx = view.subscribe();
    let title = view.title().to_string();
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            render(&title, &state);
        }
    });
}

fn render(title: &str, state: &ViewState) {
    println!("{} [{}]", title, state.count());
    for item in state.items() {
        println!("  {}", item.name);
    }
}

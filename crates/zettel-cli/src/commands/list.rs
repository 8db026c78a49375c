//! The three named list queries as one-shot commands.

use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::output;
use anyhow::Result;
use std::sync::Arc;
use zettel_core::SortOrder;
use zettel_query::{provider, LinkQuery, QueryContext};

pub async fn execute(
    config: CliConfig,
    query: LinkQuery,
    note: Option<String>,
    sort: SortOrder,
    format: OutputFormat,
) -> Result<()> {
    let vault = Arc::new(config.vault()?);
    let mut ctx = QueryContext::new(vault.clone());
    if let Some(name) = note {
        ctx.active_note = Some(super::find_note(vault.as_ref(), &name).await?);
    }

    match provider::run_entries(&ctx, query, sort).await? {
        Some(entries) => output::render(title(query), &entries, format)?,
        None => println!("No note selected - pass a note name to this command."),
    }
    Ok(())
}

fn title(query: LinkQuery) -> &'static str {
    match query {
        LinkQuery::AllNotes => "Notes",
        LinkQuery::OutgoingLinks => "Links",
        LinkQuery::Backlinks => "Backlinks",
    }
}

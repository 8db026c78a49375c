//! Create-note picker: incrementally filter existing identifiers, create
//! when the typed text matches none.

use crate::config::CliConfig;
use anyhow::{bail, Result};
use std::sync::Arc;
use zettel_core::Vault;
use zettel_query::picker::filter_identifiers;

pub async fn execute(config: CliConfig, query: Option<String>, create: bool) -> Result<()> {
    let vault = Arc::new(config.vault()?);
    let query = query.unwrap_or_default();

    let corpus = vault.list_notes().await?;
    let mut names: Vec<String> = corpus.iter().map(|n| n.name()).collect();
    names.sort();
    names.dedup();

    let matches = filter_identifiers(&names, &query);

    if create || matches.is_empty() {
        if query.is_empty() {
            bail!("nothing to create - pass a note name");
        }
        let note = vault.create_note(&query).await?;
        println!("✨ Created {}", note.path().display());
        return Ok(());
    }

    for name in &matches {
        println!("{name}");
    }
    let exact = matches.iter().any(|name| name.eq_ignore_ascii_case(&query));
    if !query.is_empty() && !exact {
        println!("(no exact match - rerun with --create to make '{query}')");
    }
    Ok(())
}

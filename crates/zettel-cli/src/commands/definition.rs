//! Go-to-definition for the link under a cursor position.

use crate::config::CliConfig;
use anyhow::{bail, Result};
use std::sync::Arc;
use zettel_core::Vault;
use zettel_query::{editor, Opened, QueryContext};

pub async fn execute(config: CliConfig, note: String, line: usize, column: usize) -> Result<()> {
    let vault = Arc::new(config.vault()?);
    let active = super::find_note(vault.as_ref(), &note).await?;
    let text = vault.read_note(&active).await?;

    let Some(line_text) = text.lines().nth(line.saturating_sub(1)) else {
        bail!("note '{}' has no line {}", note, line);
    };

    let ctx = QueryContext::new(vault).with_active_note(active);
    match editor::definition(&ctx, line_text, column).await? {
        Some((location, opened)) => {
            if let Opened::Created(note) = &opened {
                println!("✨ Created {}", note.path().display());
            }
            println!("{}:{}", location.note.path().display(), location.offset);
        }
        None => println!("No link under the cursor."),
    }
    Ok(())
}

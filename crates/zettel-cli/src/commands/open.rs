//! Open a note by link name, materializing it when missing.

use crate::config::CliConfig;
use anyhow::Result;
use std::sync::Arc;
use zettel_query::{open::open_or_create, Opened, QueryContext};

pub async fn execute(config: CliConfig, name: String) -> Result<()> {
    let ctx = QueryContext::new(Arc::new(config.vault()?));
    match open_or_create(&ctx, &name).await? {
        Opened::Existing(note) => println!("{}", note.path().display()),
        Opened::Created(note) => println!("✨ Created {}", note.path().display()),
    }
    Ok(())
}

//! Link completion candidates for a line prefix.

use crate::config::CliConfig;
use anyhow::Result;
use std::sync::Arc;
use zettel_query::{editor, QueryContext};

pub async fn execute(config: CliConfig, line_prefix: String) -> Result<()> {
    let ctx = QueryContext::new(Arc::new(config.vault()?));
    match editor::completion_candidates(&ctx, &line_prefix).await? {
        Some(candidates) => {
            for name in candidates {
                println!("{name}");
            }
        }
        None => println!("No completions here - the cursor must sit right after '[['."),
    }
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use zettel_cli::{
    cli::{Cli, Commands, LogLevel},
    commands,
    config::CliConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_level, cli.verbose);

    let config = CliConfig::load(cli.config, cli.root)?;

    match cli.command {
        Commands::Notes { sort } => {
            commands::list::execute(
                config,
                zettel_query::LinkQuery::AllNotes,
                None,
                sort.into(),
                cli.format,
            )
            .await?
        }

        Commands::Links { note, sort } => {
            commands::list::execute(
                config,
                zettel_query::LinkQuery::OutgoingLinks,
                note,
                sort.into(),
                cli.format,
            )
            .await?
        }

        Commands::Backlinks { note, sort } => {
            commands::list::execute(
                config,
                zettel_query::LinkQuery::Backlinks,
                note,
                sort.into(),
                cli.format,
            )
            .await?
        }

        Commands::Open { name } => commands::open::execute(config, name).await?,

        Commands::New { query, create } => commands::new::execute(config, query, create).await?,

        Commands::Complete { line_prefix } => {
            commands::complete::execute(config, line_prefix).await?
        }

        Commands::Definition { note, line, column } => {
            commands::definition::execute(config, note, line, column).await?
        }

        Commands::Watch { view, note, sort } => {
            commands::watch::execute(config, view, note, sort.into()).await?
        }
    }

    Ok(())
}

fn init_logging(level: Option<LogLevel>, verbose: bool) {
    let level: LevelFilter = match (level, verbose) {
        (Some(level), _) => level.into(),
        (None, true) => LevelFilter::DEBUG,
        (None, false) => LevelFilter::OFF,
    };
    let directives = format!(
        "zettel_core={level},zettel_query={level},zettel_view={level},zettel_cli={level}"
    );
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(directives))
        .with_writer(std::io::stderr)
        .init();
}

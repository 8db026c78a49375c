use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use zettel_core::SortOrder;
use zettel_query::LinkQuery;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Sort order for list output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortArg {
    /// Natural name order, a-z
    #[default]
    NameAsc,
    /// Natural name order, z-a
    NameDesc,
    /// Last modified, oldest first
    ModifiedAsc,
    /// Last modified, newest first
    ModifiedDesc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::NameAsc => SortOrder::NameAscending,
            SortArg::NameDesc => SortOrder::NameDescending,
            SortArg::ModifiedAsc => SortOrder::ModifiedAscending,
            SortArg::ModifiedDesc => SortOrder::ModifiedDescending,
        }
    }
}

/// Output format for list commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text columns
    #[default]
    Table,
    /// JSON array
    Json,
}

/// Which list views a `watch` session keeps live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ViewArg {
    /// Every note in the vault
    #[default]
    Notes,
    /// Outgoing links of the active note
    Links,
    /// Backlinks of the active note
    Backlinks,
    /// All three views at once
    All,
}

impl ViewArg {
    pub fn queries(self) -> Vec<LinkQuery> {
        match self {
            ViewArg::Notes => vec![LinkQuery::AllNotes],
            ViewArg::Links => vec![LinkQuery::OutgoingLinks],
            ViewArg::Backlinks => vec![LinkQuery::Backlinks],
            ViewArg::All => vec![
                LinkQuery::AllNotes,
                LinkQuery::OutgoingLinks,
                LinkQuery::Backlinks,
            ],
        }
    }
}

#[derive(Parser)]
#[command(name = "zet")]
#[command(about = "zet - navigate a vault of [[wiki-linked]] notes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Vault root directory (overrides config file)
    #[arg(short = 'r', long, global = true)]
    pub root: Option<PathBuf>,

    /// Config file path (defaults to ./zettel.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for list commands
    #[arg(short = 'f', long, global = true, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every note in the vault
    Notes {
        /// Sort order
        #[arg(short, long, value_enum, default_value_t)]
        sort: SortArg,
    },

    /// List the notes a note links to
    Links {
        /// Note to read links from (by canonical name)
        note: Option<String>,

        /// Sort order
        #[arg(short, long, value_enum, default_value_t)]
        sort: SortArg,
    },

    /// List the notes that link to a note
    Backlinks {
        /// Note to find references to (by canonical name)
        note: Option<String>,

        /// Sort order
        #[arg(short, long, value_enum, default_value_t)]
        sort: SortArg,
    },

    /// Open a note by link name, creating it first when missing
    Open {
        /// Canonical name of the note
        name: String,
    },

    /// Pick an existing note by fuzzy query, or create a new one
    New {
        /// Query to filter existing identifiers with
        query: Option<String>,

        /// Create a note named exactly QUERY instead of picking
        #[arg(long)]
        create: bool,
    },

    /// Show link completion candidates for a line prefix
    Complete {
        /// Text of the line up to the cursor
        line_prefix: String,
    },

    /// Resolve the link under a cursor position to a file location
    Definition {
        /// Note the cursor is in (by canonical name)
        note: String,

        /// One-based line number of the cursor
        line: usize,

        /// Zero-based byte column of the cursor
        column: usize,
    },

    /// Keep list views live while the vault changes
    Watch {
        /// Which view(s) to keep live
        #[arg(value_enum, default_value_t)]
        view: ViewArg,

        /// Active note for the links/backlinks views
        note: Option<String>,

        /// Sort order
        #[arg(short, long, value_enum, default_value_t)]
        sort: SortArg,
    },
}

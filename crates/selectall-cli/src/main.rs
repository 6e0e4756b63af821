//! selectall CLI — play and score the select-all-html quiz in a terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use selectall_core::model::Locale;
use selectall_core::scoring::ScoringPolicy;

mod commands;
mod settings;
mod view;

use settings::Overrides;

#[derive(Parser)]
#[command(name = "selectall", version, about = "Pick every real HTML element")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by every command that builds a session.
#[derive(clap::Args, Debug, Clone, Default)]
struct CommonArgs {
    /// Scoring policy: strict (decoys cost a point) or lenient
    #[arg(long)]
    policy: Option<ScoringPolicy>,

    /// Display locale: ja or en
    #[arg(long)]
    locale: Option<Locale>,

    /// Catalog file (.toml or .json) instead of the built-in one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

impl CommonArgs {
    fn into_overrides(self, seed: Option<u64>) -> Overrides {
        Overrides {
            policy: self.policy,
            locale: self.locale,
            catalog: self.catalog,
            config: self.config,
            seed,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play the quiz interactively on stdin/stdout
    Play {
        #[command(flatten)]
        common: CommonArgs,

        /// Shuffle seed for a reproducible order
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Score a selection without playing
    Score {
        #[command(flatten)]
        common: CommonArgs,

        /// Selected names (comma-separated)
        #[arg(long, value_delimiter = ',')]
        select: Vec<String>,

        /// File with one selected name per line
        #[arg(long)]
        selection_file: Option<PathBuf>,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,

        /// Also write the score card as JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Check a catalog file for data problems
    Validate {
        /// Catalog file; the built-in catalog when omitted
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// List the catalog
    Catalog {
        #[command(flatten)]
        common: CommonArgs,

        /// Which entries: real, decoys, all
        #[arg(long, default_value = "all")]
        kind: String,
    },

    /// Create a starter config and an editable catalog
    Init {
        /// Catalog (.toml or .json) to copy instead of the built-in one
        #[arg(long)]
        from: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("selectall=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { common, seed } => commands::play::execute(common.into_overrides(seed)),
        Commands::Score {
            common,
            select,
            selection_file,
            format,
            output,
        } => commands::score::execute(
            common.into_overrides(None),
            select,
            selection_file,
            format,
            output,
        ),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Catalog { common, kind } => {
            commands::catalog::execute(common.into_overrides(None), kind)
        }
        Commands::Init { from } => commands::init::execute(from),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

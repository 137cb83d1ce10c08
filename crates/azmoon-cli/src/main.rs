use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;

mod commands;

/// Maintenance tooling for the questionnaire data files of the azmoon web
/// app. Operates directly on the checked-in `<slug>.json` documents.
#[derive(Parser)]
#[command(name = "azmoon", version, about)]
struct Cli {
    /// Directory holding the questionnaire JSON files.
    #[arg(long, global = true, default_value = "apps/web/src/data/tests")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply the corrective patches (scale-key renames, missing total scales).
    Fix,
    /// Replace cutoffs and analysis templates from the built-in catalog.
    UpdateTemplates {
        /// Update a single questionnaire instead of the whole catalog.
        slug: Option<String>,
    },
    /// Report cross-reference and coverage problems; writes nothing.
    Check,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // Progress goes to stdout; tracing is opt-in via RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let store = azmoon_storage::TestStore::new(cli.data_dir);
    tracing::debug!(data_dir = %store.dir().display(), "using data directory");

    match cli.command {
        Command::Fix => commands::fix(&store),
        Command::UpdateTemplates { slug } => commands::update_templates(&store, slug.as_deref()),
        Command::Check => commands::check(&store),
    }
}

//! Minisearch CLI — index a handful of text files and query them.
//!
//! Two modes:
//! - **REPL mode**: `minisearch [flags] [DOCUMENTS...]` on a TTY
//! - **Pipe mode**: `echo "cat dog" | minisearch` — one query per stdin line

mod commands;
mod repl;

use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::Context;
use clap::ArgMatches;
use tracing::Level;

use minisearch_core::{SearchConfig, CONFIG_FILE_NAME};
use minisearch_search::{FsSource, SearchEngine};

use commands::build_cli;

fn main() -> anyhow::Result<()> {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = load_config(&matches)?;

    let source = match matches.get_one::<String>("root") {
        Some(root) => FsSource::with_root(root),
        None => FsSource::new(),
    };

    let engine = SearchEngine::new();
    let stats = engine.build_from_source(&source, config.documents.as_slice());
    tracing::info!(
        documents = stats.documents,
        unavailable = stats.unavailable,
        terms = stats.terms,
        "Ready"
    );

    println!("Type query (AND). '{}' to quit.", config.exit_command);

    if io::stdin().is_terminal() {
        repl::run_repl(&engine, &config.prompt, &config.exit_command)
    } else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        repl::run_pipe(
            &engine,
            stdin.lock(),
            &config.exit_command,
            &mut stdout.lock(),
        )?;
        Ok(())
    }
}

/// Resolve the effective configuration.
///
/// An explicit `--config` must exist; the default file is optional.
/// Documents on the command line replace the configured list.
fn load_config(matches: &ArgMatches) -> anyhow::Result<SearchConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => SearchConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => SearchConfig::load_or_default(Path::new(CONFIG_FILE_NAME))
            .with_context(|| format!("failed to load {}", CONFIG_FILE_NAME))?,
    };

    if let Some(docs) = matches.get_many::<String>("documents") {
        config.documents = docs.cloned().collect();
    }
    Ok(config)
}

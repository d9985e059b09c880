//! Clap command definition.

use clap::{Arg, ArgAction, Command};

/// Build the CLI command.
pub fn build_cli() -> Command {
    Command::new("minisearch")
        .about("Index text files and answer AND queries interactively")
        .arg(
            Arg::new("documents")
                .value_name("DOCUMENTS")
                .help("Documents to index (overrides the config file list)")
                .num_args(0..),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Config file (default: ./minisearch.toml if present)"),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .value_name("DIR")
                .help("Resolve relative document paths against this directory"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log index and query events to stderr")
                .action(ArgAction::SetTrue),
        )
}

//! Query loop.
//!
//! Interactive mode: rustyline prompt with history.
//! Pipe mode: read lines from stdin, answer each.

use std::io::{self, BufRead, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use minisearch_search::SearchEngine;

/// Outcome of handling one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Keep reading.
    Continue,
    /// Exit sentinel seen.
    Quit,
}

/// Answer one query line, writing results to `out`.
///
/// The line is compared to `exit_command` exactly, before any trimming.
pub fn handle_line(
    engine: &SearchEngine,
    line: &str,
    exit_command: &str,
    out: &mut impl Write,
) -> io::Result<LineOutcome> {
    if line == exit_command {
        return Ok(LineOutcome::Quit);
    }

    let snapshot = engine.snapshot();
    let hits = snapshot.query_and(line);
    if hits.is_empty() {
        writeln!(out, "No results")?;
        return Ok(LineOutcome::Continue);
    }

    for reference in snapshot.resolve(&hits) {
        writeln!(out, "{}", reference)?;
    }
    Ok(LineOutcome::Continue)
}

/// Run the interactive REPL.
pub fn run_repl(engine: &SearchEngine, prompt: &str, exit_command: &str) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let stdout = io::stdout();

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                let mut out = stdout.lock();
                if handle_line(engine, &line, exit_command, &mut out)? == LineOutcome::Quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Run in pipe mode (stdin is not a TTY).
///
/// Lines are read as raw bytes and decoded lossily, so a line that is not
/// valid UTF-8 is answered like any other query. No prompt is printed.
pub fn run_pipe(
    engine: &SearchEngine,
    input: impl BufRead,
    exit_command: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    for raw in input.split(b'\n') {
        let mut raw = raw?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        let line = String::from_utf8_lossy(&raw);
        if handle_line(engine, &line, exit_command, out)? == LineOutcome::Quit {
            break;
        }
    }
    Ok(())
}

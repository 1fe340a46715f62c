//! Lindroid shell - interactive front end for the in-memory shell
//!
//! Usage:
//!   lindroid-shell                          # Interactive REPL
//!   lindroid-shell -c 'mkdir a' -c 'ls'     # Execute commands and exit
//!   lindroid-shell --transcript session.json
//!                                           # Restore and extend a session

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use lindroid_shell::{CommandResult, Session, ShellEmulator};
use tracing_subscriber::EnvFilter;

/// ANSI sequence that clears the screen and homes the cursor.
const ANSI_CLEAR: &str = "\x1b[2J\x1b[H";

/// Lindroid - in-memory Linux-like shell
#[derive(Parser, Debug)]
#[command(name = "lindroid-shell")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Execute the given command line (repeatable), then exit
    #[arg(short = 'c', long = "command")]
    commands: Vec<String>,

    /// JSON session file to replay on start and append to on exit
    #[arg(long)]
    transcript: Option<PathBuf>,

    /// Do not print the prompt
    #[arg(long)]
    no_prompt: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut session = match &args.transcript {
        Some(path) => load_session(path)?,
        None => Session::new(),
    };
    let mut shell = session.replay();
    tracing::info!(entries = session.len(), "session restored");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.commands.is_empty() {
        for line in &args.commands {
            run_line(&mut shell, &mut session, line, &mut out)?;
        }
    } else {
        repl(&mut shell, &mut session, args.no_prompt, &mut out)?;
    }

    if let Some(path) = &args.transcript {
        save_session(path, &session)?;
    }
    Ok(())
}

/// Read lines from stdin until EOF or `exit`.
fn repl(
    shell: &mut ShellEmulator,
    session: &mut Session,
    no_prompt: bool,
    out: &mut impl Write,
) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if !no_prompt {
            write!(out, "{}", shell.prompt())?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            if !no_prompt {
                writeln!(out)?;
            }
            break;
        };
        let line = line.context("Failed to read from stdin")?;

        if line.trim() == "exit" {
            break;
        }
        run_line(shell, session, &line, out)?;
    }
    Ok(())
}

/// Execute one line, print its result and record it.
fn run_line(
    shell: &mut ShellEmulator,
    session: &mut Session,
    line: &str,
    out: &mut impl Write,
) -> Result<()> {
    let result = shell.execute(line);
    match &result {
        CommandResult::Clear => write!(out, "{}", ANSI_CLEAR)?,
        CommandResult::Output(text) if !text.is_empty() => writeln!(out, "{}", text)?,
        CommandResult::Output(_) => {}
    }
    out.flush()?;

    if !line.trim().is_empty() {
        session.record(line, result.into_text());
    }
    Ok(())
}

fn load_session(path: &Path) -> Result<Session> {
    if !path.exists() {
        return Ok(Session::new());
    }
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse transcript: {}", path.display()))
}

fn save_session(path: &Path, session: &Session) -> Result<()> {
    let json = serde_json::to_string_pretty(session).context("Failed to serialize transcript")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write transcript: {}", path.display()))
}

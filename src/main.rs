use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use debugger_ui::logging::init_tracing;
use debugger_ui::prefs::{FilePrefs, MemoryPrefs, PanePrefs};
use debugger_ui::ui::{UiIntent, UiSlice, UiStore};

#[derive(Parser, Debug)]
#[command(name = "debugger-ui", about = "Inspect and replay the debugger UI state slice")]
struct Cli {
    /// Preference file (defaults to $DEBUGGER_UI_PREFS or the user config dir).
    #[arg(long, global = true)]
    prefs: Option<PathBuf>,
    /// Read preferences but never write them back.
    #[arg(long, global = true)]
    ephemeral: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the initial UI state as JSON.
    State,
    /// Apply JSON actions (one per line) and print the resulting state.
    Replay {
        /// Actions file; `-` or omitted reads stdin.
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let state = run(cli, &mut stdin.lock())?;

    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

/// Execute `cli` and return the resulting slice. `stdin` backs `replay`
/// when no actions file is given.
fn run(cli: Cli, stdin: &mut dyn BufRead) -> Result<UiSlice> {
    let prefs = match &cli.prefs {
        Some(path) => FilePrefs::load_from(path)?,
        None => FilePrefs::load()?,
    };
    tracing::debug!(path = %prefs.path().display(), "using prefs file");

    match cli.command {
        Command::State => Ok(UiSlice::new(&prefs)),
        Command::Replay { input } => {
            let reader = open_input(input, stdin)?;
            if cli.ephemeral {
                replay(UiStore::new(MemoryPrefs::new(prefs.values())), reader)
            } else {
                replay(UiStore::new(prefs), reader)
            }
        }
    }
}

fn open_input<'a>(
    input: Option<PathBuf>,
    stdin: &'a mut dyn BufRead,
) -> Result<Box<dyn BufRead + 'a>> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open actions file '{}'", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(stdin)),
    }
}

fn replay<P: PanePrefs>(mut store: UiStore<P>, reader: impl BufRead) -> Result<UiSlice> {
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("failed to read line {}", line_no))?;
        if line.trim().is_empty() {
            continue;
        }
        let intent: UiIntent = serde_json::from_str(&line)
            .with_context(|| format!("invalid action on line {}", line_no))?;
        store.dispatch(intent);
    }
    Ok(store.into_state())
}

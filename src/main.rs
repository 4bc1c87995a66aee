use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use localcomplete::{
    Config, Cursor, Host, Source, Workspace, complete, locate_start, logging::init_logger,
};
use std::{path::PathBuf, process::ExitCode};

/// Plays the editor: opens files as buffers, places the cursor and asks
/// for completions.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// File to open as a buffer; repeat for more buffers
    #[arg(short = 'f', long = "file", required = true)]
    files: Vec<PathBuf>,

    /// Index of the current buffer among the opened files
    #[arg(short, long, default_value_t = 0)]
    buffer: usize,

    /// Cursor line, counted from 1
    #[arg(short, long, default_value_t = 1)]
    line: usize,

    /// Cursor byte offset in its line, in the configured encoding; end of
    /// line when left out
    #[arg(short, long)]
    col: Option<usize>,

    /// Configuration file, instead of ~/.config/localcomplete/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug"; falls back to RUST_LOG
    #[arg(long)]
    log_level: Option<String>,

    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Words near the cursor in the current buffer
    Local { prefix: Option<String> },
    /// Words in all buffers
    Buffers { prefix: Option<String> },
    /// Words from the dictionary file
    Dict { prefix: Option<String> },
    /// Column where the word before the cursor starts
    Findstart,
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    if let Some(path) = path {
        return Config::load(path).with_context(|| format!("Failed to load {}", path.display()));
    }
    match Config::default_path() {
        Some(path) if path.exists() => {
            Config::load(&path).with_context(|| format!("Failed to load {}", path.display()))
        }
        _ => Ok(Config::default()),
    }
}

fn open_workspace(cli: &Cli) -> Result<Workspace> {
    let mut ws = Workspace::open(cli.files.as_slice(), cli.buffer, Cursor::default())
        .context("Failed to open buffers")?;
    anyhow::ensure!(
        cli.buffer < ws.buffers.len(),
        "buffer index {} out of range",
        cli.buffer
    );
    let line = cli.line.saturating_sub(1);
    let line_len = ws.buffers[cli.buffer].line(line).len();
    ws.cursor_pos = Cursor {
        line,
        idx: cli.col.unwrap_or(line_len),
    };
    Ok(ws)
}

/// The word being typed, when no prefix was given.
fn typed_prefix(ws: &Workspace, config: &Config) -> Result<String> {
    let start = locate_start(ws, config)?;
    let encoding = config.resolve()?.encoding;
    Ok(ws
        .line_up_to_cursor(encoding)
        .chars()
        .skip(start.char_index)
        .collect())
}

fn show_errors(ws: &Workspace, no_color: bool) {
    for message in ws.take_errors() {
        if no_color {
            eprintln!("{message}");
        } else {
            eprintln!("{}", message.red());
        }
    }
}

fn run(cli: &Cli, ws: &Workspace, config: &Config) -> Result<String> {
    let (source, prefix) = match &cli.command {
        Commands::Local { prefix } => (Source::Local, prefix),
        Commands::Buffers { prefix } => (Source::AllBuffers, prefix),
        Commands::Dict { prefix } => (Source::Dictionary, prefix),
        Commands::Findstart => {
            let start = locate_start(ws, config)?;
            return Ok(serde_json::json!({
                "byte_offset": start.byte_offset,
                "char_index": start.char_index,
                "display_column": start.display_column,
            })
            .to_string());
        }
    };
    let prefix = match prefix {
        Some(p) => p.clone(),
        None => typed_prefix(ws, config)?,
    };
    tracing::debug!(?source, %prefix, buffer = ws.current_buffer().filepath.as_str(), "request");
    let matches = complete(source, ws, config, &prefix)?;
    Ok(serde_json::to_string(&matches)?)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.no_color, cli.log_level.as_deref());

    let result = load_config(cli.config.as_ref()).and_then(|config| {
        let ws = open_workspace(&cli)?;
        let out = run(&cli, &ws, &config);
        show_errors(&ws, cli.no_color);
        out
    });

    match result {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let message = format!("{err:#}");
            if cli.no_color {
                eprintln!("{message}");
            } else {
                eprintln!("{}", message.red());
            }
            ExitCode::FAILURE
        }
    }
}

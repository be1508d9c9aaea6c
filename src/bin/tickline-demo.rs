// src/bin/tickline-demo.rs
use std::io;
use std::path::PathBuf;
use std::process;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use tickline::{Config, Spinner, TerminalMode, CHAR_SETS};

#[derive(Parser)]
#[command(name = "tickline-demo", version, about = "Run a spinner through a few status messages")]
struct Cli {
    /// Load settings from a TOML file; flags override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Time between animation frames
    #[arg(long, value_name = "MS")]
    frequency_ms: Option<u64>,
    /// Built-in character set to animate
    #[arg(long, value_name = "INDEX")]
    char_set: Option<usize>,
    /// Status message; repeat to show several in turn
    #[arg(long = "message", value_name = "TEXT")]
    messages: Vec<String>,
    /// How long each message stays up
    #[arg(long, value_name = "MS", default_value = "900")]
    step_ms: u64,
    /// Spinner colors, comma separated (e.g. fgHiCyan,bold)
    #[arg(long, value_delimiter = ',')]
    colors: Vec<String>,
    /// Finish with the failure line
    #[arg(long)]
    fail: bool,
    /// Pause this long between messages
    #[arg(long, value_name = "MS")]
    pause_ms: Option<u64>,
    #[arg(long)]
    tty: bool,
    #[arg(long)]
    no_tty: bool,
    #[arg(long)]
    dumb: bool,
    #[arg(long)]
    smart: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = build_config(&cli)?;
    let spinner = Spinner::new(config).context("failed to create spinner")?;

    let messages = if cli.messages.is_empty() {
        vec![
            "resolving dependencies".to_string(),
            "downloading".to_string(),
            "compiling".to_string(),
        ]
    } else {
        cli.messages.clone()
    };

    let step = Duration::from_millis(cli.step_ms);
    spinner.start()?;
    for (i, message) in messages.iter().enumerate() {
        spinner.set_message(message.as_str());
        thread::sleep(step);

        let last = i + 1 == messages.len();
        if let (Some(ms), false) = (cli.pause_ms, last) {
            spinner.pause()?;
            thread::sleep(Duration::from_millis(ms));
            spinner.unpause()?;
        }
    }

    if cli.fail {
        spinner.stop_fail()?;
    } else {
        spinner.stop()?;
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => Config::new(Duration::from_millis(100)),
    };

    if let Some(ms) = cli.frequency_ms {
        config.frequency = Duration::from_millis(ms);
    }
    if let Some(index) = cli.char_set {
        let set = CHAR_SETS.get(index).ok_or_else(|| {
            anyhow!("no character set {index}; {} are built in", CHAR_SETS.len())
        })?;
        config.char_set = set.iter().map(ToString::to_string).collect();
    }
    if !cli.colors.is_empty() {
        config.colors.clone_from(&cli.colors);
    }

    fill_blank(&mut config.suffix, " ");
    fill_blank(&mut config.stop_character, "✓");
    fill_blank(&mut config.stop_message, "done");
    fill_blank(&mut config.stop_fail_character, "✗");
    fill_blank(&mut config.stop_fail_message, "failed");
    if config.stop_colors.is_empty() {
        config.stop_colors = vec!["fgGreen".into()];
    }
    if config.stop_fail_colors.is_empty() {
        config.stop_fail_colors = vec!["fgRed".into()];
    }
    config.suffix_auto_colon = true;

    let forced = [
        (cli.tty, TerminalMode::FORCE_TTY),
        (cli.no_tty, TerminalMode::FORCE_NO_TTY),
        (cli.dumb, TerminalMode::FORCE_DUMB),
        (cli.smart, TerminalMode::FORCE_SMART),
    ]
    .into_iter()
    .filter(|(on, _)| *on)
    .fold(TerminalMode::empty(), |acc, (_, flag)| acc | flag);
    if !forced.is_empty() {
        config.terminal_mode = forced;
    }

    Ok(config)
}

fn fill_blank(field: &mut String, value: &str) {
    if field.is_empty() {
        value.clone_into(field);
    }
}

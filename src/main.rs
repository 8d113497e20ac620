use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::LevelFilter;
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_n::config::AppConfig;
use connect_n::ui::{plain, App};

/// Play Connect Four with a configurable win length.
#[derive(Parser)]
#[command(name = "connect_n", about = "Connect Four with a configurable win length")]
struct Cli {
    /// Pieces in a row needed to win (at least 4); skips the setup prompt
    #[arg(long)]
    connect: Option<usize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_n.toml")]
    config: PathBuf,

    /// Read moves line by line from stdin instead of the full-screen UI
    #[arg(long)]
    plain: bool,

    /// Write log output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    init_logging(cli.log_file.as_deref(), cli.plain)?;

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(connect) = cli.connect {
        config.game.connect_length = connect;
        config.validate().context("invalid --connect value")?;
    }

    if cli.plain {
        let stdin = io::stdin();
        plain::run_plain(stdin.lock(), &mut io::stdout(), &config)?;
        return Ok(());
    }

    let mut app = App::new(&config);
    if cli.connect.is_some() {
        app.submit_setup();
    }
    run_tui(&mut app).context("running terminal UI")
}

/// Logs go to `log_file` when given. Without one, the full-screen UI runs
/// silent and plain mode logs warnings to stderr (`RUST_LOG` overrides).
fn init_logging(log_file: Option<&Path>, plain: bool) -> Result<()> {
    let default_filter = if log_file.is_some() { "info" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None if plain => {}
        None => {
            builder.filter_level(LevelFilter::Off);
        }
    }

    builder.try_init().context("initializing logger")
}

fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    Ok(res?)
}

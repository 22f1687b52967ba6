use std::io::stdout;
use std::path::{Path, PathBuf};

use atelier_config::Config;
use clap::Parser;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
};
use tracing::info;

mod app;
mod chrome;
mod contact;
mod content;
mod guard;
mod host;
mod logging;
mod page;
mod sections;

use app::App;

/// A portfolio page for the terminal, over a drifting particle backdrop.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Skip the particle backdrop, cursor trail and eased scrolling.
    #[arg(long)]
    reduced_motion: bool,

    /// Read configuration from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed the particle generator for a repeatable field.
    #[arg(long)]
    seed: Option<u64>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let (config, source) = load_config(&args)?;
    logging::init(&config, args.verbose)?;
    match &source {
        Some(path) => info!(path = %path.display(), "loaded config"),
        None => info!("no config file found, using defaults"),
    }
    info!(
        reduced_motion = config.reduced_motion,
        input_guards = config.input_guards,
        seed = ?config.particles.seed,
        "settings in effect"
    );

    let app = App::new(config)?;
    let terminal = ratatui::init();
    if let Err(err) = execute!(stdout(), EnableFocusChange, EnableMouseCapture) {
        ratatui::restore();
        return Err(err.into());
    }
    let result = app.run(terminal);
    let cleanup = execute!(stdout(), DisableMouseCapture, DisableFocusChange);
    ratatui::restore();
    result?;
    Ok(cleanup?)
}

/// The config file to read: the `--config` path, or the default location
/// when a file exists there.
fn config_source(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| Config::default_path().filter(|path| path.exists()))
}

/// Load the config file, then apply environment and command-line
/// overrides. Also returns the file that was read, if any.
fn load_config(args: &Args) -> color_eyre::Result<(Config, Option<PathBuf>)> {
    let source = config_source(args.config.as_deref());
    let mut config = match &source {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };
    config.apply_env();
    if args.reduced_motion {
        config.reduced_motion = true;
    }
    if args.seed.is_some() {
        config.particles.seed = args.seed;
    }
    Ok((config, source))
}

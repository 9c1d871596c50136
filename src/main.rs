use clap::Parser;
use savemate::{
    app::{App, Tui},
    config::{AppConfig, ThemeContext, TomlThemeStore},
    error, logging,
    simple::{self, SimpleOptions},
    Result,
};
use std::{io, path::PathBuf};
use tracing::{info, warn};

/// Plan a savings goal and track deposits against it
#[derive(Parser, Debug)]
#[command(name = "savemate", version, about)]
struct Cli {
    /// Use line-based prompts instead of the full-screen UI
    #[arg(long)]
    simple: bool,

    /// Configuration file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log file to append to
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

async fn run(cli: Cli) -> Result<()> {
    let log_path = cli.log_file.or_else(logging::default_log_path);
    for warning in logging::init(log_path.as_deref()) {
        eprintln!("Warning: {}", warning);
    }

    let (config, store) = match cli.config {
        Some(path) => (AppConfig::load_from(&path)?, TomlThemeStore::with_path(path)),
        None => (AppConfig::load()?, TomlThemeStore::new()?),
    };
    info!(config = %store.path().display(), simple = cli.simple, "starting");

    if cli.simple {
        let mut input = io::stdin().lock();
        let mut output = io::stdout();
        simple::run(&mut input, &mut output, SimpleOptions::default())?;
        return Ok(());
    }

    let theme = ThemeContext::init(store);
    let mut app = App::new(&config, theme);

    let mut tui = Tui::new()?;
    if !tui.is_size_adequate()? {
        warn!("terminal is smaller than 60x20, layout may be clipped");
    }
    tui.init()?;
    let result = app.run(&mut tui).await;
    tui.restore()?;
    info!("exiting");
    result
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("{}", error::user_friendly_message(&e));
        std::process::exit(1);
    }
}

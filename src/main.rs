use chess_menu::app::App;
use chess_menu::config::MenuConfig;
use chess_menu::error::user_friendly_message;
use chess_menu::runner::{self, Handoff};
use chess_menu::{logging, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Terminal menu for choosing and starting a chess game
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File holding the Lichess token
    #[arg(short, long)]
    token_file: Option<PathBuf>,

    /// Master program to launch when the game begins
    #[arg(short, long)]
    master_program: Option<PathBuf>,

    /// Print the selection as JSON instead of plain lines
    #[arg(long)]
    json: bool,

    /// Log filter directive, e.g. "debug" or "chess_menu=trace"
    #[arg(long)]
    log_filter: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<(MenuConfig, bool)> {
        let config = match &self.config {
            Some(path) => MenuConfig::load_from(path)?,
            None => MenuConfig::load()?,
        };
        let config = config.with_overrides(self.token_file, self.master_program, self.log_filter)?;
        Ok((config, self.json))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let (config, json) = match Cli::parse().into_config() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{}", user_friendly_message(&e));
            return ExitCode::FAILURE;
        }
    };

    // Held until main returns so failures below still reach the log file
    let _log_guard = match logging::init_logging(&config.log) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", user_friendly_message(&e));
            return ExitCode::FAILURE;
        }
    };

    match run(&config, json).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logging::report_failure(&e);
            eprintln!("{}", user_friendly_message(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &MenuConfig, json: bool) -> Result<()> {
    info!(token_file = %config.token_file.display(), "configuration loaded");

    let selection = {
        let mut app = App::new(config, Box::new(config.credential_store()))?;
        app.init()?;
        let selection = app.run();
        app.restore()?;
        selection?
    };

    let Some(selection) = selection else {
        return Ok(());
    };

    runner::write_summary(&mut std::io::stderr(), &selection)?;
    Handoff::from_config(config, json)
        .deliver(&selection)
        .await
}

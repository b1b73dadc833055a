use clap::Parser;
use log::{error, info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process;

use todolist::Cli;
use todolist::core::config::{ResolvedConfig, load_config, resolve};
use todolist::core::error::ChecklistError;
use todolist::tui;
use todolist::tui::surface::{CrosstermSurface, TerminalSession};

fn main() {
    let cli = Cli::parse();

    let file_config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("todolist: {e}");
            process::exit(2);
        }
    };
    let config = resolve(&file_config, &cli.overrides());

    init_logging(&config);
    info!("Todolist starting up: {:?}", config);

    if let Err(e) = TerminalSession::install_signal_hook() {
        warn!("Failed to install signal handler: {}", e);
    }

    // The surface is dropped (and the terminal restored) before anything is
    // printed below.
    let result = CrosstermSurface::new()
        .map_err(ChecklistError::from)
        .and_then(|mut surface| tui::run(&mut surface, &config));
    TerminalSession::teardown();

    if let Err(e) = result {
        error!("Exiting on error: {}", e);
        eprintln!("{e}");
        process::exit(e.exit_code());
    }
    info!("Exiting normally");
}

/// File logging is opt-in: nothing is written unless a log file is configured.
fn init_logging(config: &ResolvedConfig) {
    let Some(path) = &config.log_file else {
        return;
    };

    let level = match config.level_filter() {
        Some(level) => level,
        None => {
            eprintln!(
                "todolist: unknown log level {:?}, using info",
                config.log_level
            );
            LevelFilter::Info
        }
    };
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match File::create(path) {
        Ok(log_file) => {
            let _ = WriteLogger::init(level, log_config, log_file);
        }
        Err(e) => eprintln!("todolist: cannot open log file {}: {e}", path.display()),
    }
}

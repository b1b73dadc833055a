//! Todolist library exports for testing

use std::path::PathBuf;

use clap::Parser;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

use crate::core::config::Overrides;

#[derive(Parser, Debug, Default)]
#[command(name = "todolist", about = "Terminal checklist editor")]
pub struct Cli {
    /// Config file to read (none is read by default)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Maximum characters per entry
    #[arg(long)]
    pub max_line_length: Option<usize>,

    /// Pause before redrawing after a terminal resize
    #[arg(long)]
    pub resize_delay_ms: Option<u64>,

    /// Write a debug log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            max_line_length: self.max_line_length,
            resize_delay_ms: self.resize_delay_ms,
            log_file: self.log_file.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

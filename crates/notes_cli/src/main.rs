//! `notes` command-line entry point.
//!
//! # Responsibility
//! - Parse flags, resolve runtime settings, start logging when asked.
//! - Map command failures to a non-zero exit status.

mod cli;
mod commands;
mod config;

use clap::Parser;
use cli::Cli;
use config::CliConfig;
use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = CliConfig::from_cli(&cli);

    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = notes_core::init_logging(&config.log_level, &log_dir.to_string_lossy())
        {
            eprintln!("warning: file logging disabled: {err}");
        }
    }

    match commands::run(&config, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_command module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

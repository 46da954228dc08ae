//! `roomscout` — find and book an available meeting room from the terminal.
//!
//! ## Usage
//!
//! ```sh
//! # Interactive session using ~/.config/roomscout/config.toml
//! roomscout
//!
//! # Point at a different config file
//! roomscout --config ./roomscout.toml
//! ```
//!
//! The session is prompt-driven: informal-room inclusion, meeting date,
//! preferred time range, duration, room, slot and subject are all asked
//! interactively. Ctrl-C at any prompt exits cleanly with status 0 and never
//! leaves a half-made booking behind.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use crossterm::style::Stylize;
use tracing_subscriber::EnvFilter;

mod backend;
mod config;
mod error;
mod flow;
mod prompt;

use backend::HttpCalendarClient;
use config::Config;
use error::RoomscoutError;

#[derive(Parser)]
#[command(
    name = "roomscout",
    version,
    about = "Find and book an available meeting room"
)]
struct Cli {
    /// Path to the config file (defaults to ~/.config/roomscout/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_interrupt(&err) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config =
        Config::load(cli.config.as_deref()).context("failed to load configuration")?;

    println!("Logging in to calendar server at {}.", config.server_url);
    let password = prompt::ask_password(&config.primary_email)?;
    let client = HttpCalendarClient::new(&config.server_url, &config.primary_email, password);

    flow::run(&client, &config).map_err(Into::into)
}

fn is_interrupt(err: &anyhow::Error) -> bool {
    match err.downcast_ref::<RoomscoutError>() {
        Some(err) => err.is_interrupt(),
        None => matches!(
            err.downcast_ref::<inquire::InquireError>(),
            Some(
                inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted
            )
        ),
    }
}

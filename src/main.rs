#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
mod application;
mod commands;
mod config;
mod demo;
mod editor;
mod history;

use std::env;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

pub use application::Application;
pub use commands::{Command, CommandType};
pub use config::{Config, ConfigError};
pub use editor::{Editor, Selection};
pub use history::CommandHistory;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let config = match env::args().nth(1) {
        Some(path) => match Config::load(Path::new(&path)) {
            Ok(config) => config,
            Err(error) => {
                tracing::error!(target: "quill::config", %error, "failed to load config");
                eprintln!("ERR: {error}");
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    println!("{}", demo::run(&config));
    ExitCode::SUCCESS
}

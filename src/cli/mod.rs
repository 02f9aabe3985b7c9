//! CLI module - argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod logging;
pub mod output;
pub mod settings;

pub use args::{Cli, Commands, GlobalOpts, OutputFormat};
pub use settings::Settings;

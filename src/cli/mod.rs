//! Command-line driver: one-shot subcommands and the interactive menu.

pub mod commands;
pub mod interactive;

pub use interactive::Session;

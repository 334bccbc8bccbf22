//! CLI module
//!
//! Command-line interface for listing collections.
//!
//! # Commands
//!
//! - `line-items` - List every line item
//! - `ad-units` - List every ad unit
//! - `fetch` - List raw records of any resource

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;

//! Command-line front end for the nestplan planner
//!
//! Plans and settings live as YAML in a data directory (`~/.nestplan/` by
//! default); each subcommand loads them, runs the core planner and prints
//! a text or JSON report.

pub mod cli;
pub mod commands;
pub mod data;
pub mod logging;
pub mod report;
pub mod util;

#[cfg(test)]
mod tests;

pub use cli::{Args, Command};
pub use commands::{Session, run};
pub use logging::init_logging;

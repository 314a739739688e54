//! End-to-end tests for the command handlers
//!
//! Tests are organized by topic:
//! - `commands` - Subcommands run against a temporary data directory
//! - `plan_files` - Hand-written plan YAML through to planner results

mod plan_files;

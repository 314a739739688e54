use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nestplan_core::model::MAX_HORIZON_YEARS;

#[derive(Parser, Debug)]
#[command(name = "nestplan")]
#[command(about = "Project savings forward and plan withdrawals and dream purchases")]
pub struct Args {
    /// Path to the data directory (default: ~/.nestplan/)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,

    /// Plan to use (default: the active plan)
    #[arg(short, long, global = true)]
    pub plan: Option<String>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Create the data directory with a starter plan and default settings
    Init {
        /// Overwrite existing plans and settings
        #[arg(long)]
        force: bool,
    },
    /// Project every holding and total net worth
    Summary {
        #[arg(short, long, default_value_t = 10, value_parser = horizon_years())]
        years: u32,
        /// Also show net worth year by year
        #[arg(long)]
        series: bool,
    },
    /// Plan a one-off withdrawal of a net amount
    Withdraw {
        /// Net (after-tax) amount needed
        #[arg(short, long)]
        amount: f64,
        /// Years from now
        #[arg(short, long, value_parser = horizon_years())]
        years: u32,
    },
    /// Plan every withdrawal goal stored in the plan
    Goals,
    /// Check whether dream purchases are funded
    Dream {
        /// Only analyze the dream with this name
        #[arg(short, long)]
        name: Option<String>,
    },
}

fn horizon_years() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(0..=i64::from(MAX_HORIZON_YEARS))
}

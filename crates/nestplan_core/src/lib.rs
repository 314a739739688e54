//! Personal financial planning library
//!
//! This crate projects savings and investment holdings forward and plans how
//! to fund future needs from them. It supports:
//! - Compound growth with monthly contributions, deposit and annual fees
//! - Holdings split into sub-allocations with their own return rates
//! - Inflation-adjusted (real) values and tax on profit
//! - Tax-ordered withdrawal plans across account categories, with
//!   retirement-restricted pension holdings blocked
//! - Funding-gap analysis for future "dream" purchases
//!
//! Every operation is a pure function of a holdings snapshot, a target and
//! a [`config::PlannerConfig`].
//!
//! # Example
//!
//! ```ignore
//! use nestplan_core::config::{HoldingBuilder, PlannerConfig};
//! use nestplan_core::model::{HoldingId, WithdrawalTarget};
//! use nestplan_core::withdrawal::plan_for_holdings;
//!
//! let holdings = vec![
//!     HoldingBuilder::independent_portfolio("Brokerage")
//!         .principal(80_000.0)
//!         .return_rate(6.0)
//!         .build(HoldingId(1)),
//!     HoldingBuilder::checking("Checking").principal(5_000.0).build(HoldingId(2)),
//! ];
//! let plan = plan_for_holdings(
//!     &WithdrawalTarget::new(50_000.0, 5),
//!     &holdings,
//!     &PlannerConfig::default(),
//! );
//! assert!(plan.feasible);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod dream;
pub mod error;
pub mod pool;
pub mod projection;
pub mod summary;
pub mod withdrawal;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{HoldingBuilder, PlannerConfig};
pub use dream::{analyze_dream, analyze_dreams};
pub use pool::build_pool;
pub use summary::{portfolio_series, portfolio_summary};
pub use withdrawal::{plan_for_holdings, plan_many, plan_withdrawal};

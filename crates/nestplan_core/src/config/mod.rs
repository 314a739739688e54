//! Planner configuration
//!
//! `PlannerConfig` holds every assumption the planning code depends on: the
//! inflation rate, the withdrawal order with its per-category tax rates and
//! holding-period gates, and the numeric tolerances. Nothing in the engine
//! hardcodes these, so callers can inject alternatives for testing or for a
//! different tax regime.
//!
//! # Builder DSL
//!
//! Holdings can be created with a fluent builder:
//!
//! ```ignore
//! use nestplan_core::config::HoldingBuilder;
//!
//! let brokerage = HoldingBuilder::independent_portfolio("Brokerage")
//!     .principal(100_000.0)
//!     .monthly(1_000.0)
//!     .return_rate(6.0)
//!     .fees(0.0, 0.3)
//!     .build(HoldingId(1));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::AccountCategory;

pub mod holding_builder;

pub use holding_builder::HoldingBuilder;

fn default_inflation_rate_pct() -> f64 {
    2.0
}

fn default_feasibility_tolerance() -> f64 {
    0.001
}

fn default_percent_sum_tolerance() -> f64 {
    0.01
}

fn default_remaining_epsilon() -> f64 {
    0.01
}

/// Holding-period condition attached to a withdrawal tier.
///
/// Evaluated against the withdrawal horizon in years. Struct variants keep
/// the YAML settings file readable (`{type: Under, years: 6}`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum HoldingPeriodGate {
    /// Tier applies only when the horizon is shorter than this many years
    Under { years: u32 },
    /// Tier applies only once the horizon reaches this many years
    AtLeast { years: u32 },
}

impl HoldingPeriodGate {
    pub fn admits(self, years_from_now: u32) -> bool {
        match self {
            HoldingPeriodGate::Under { years } => years_from_now < years,
            HoldingPeriodGate::AtLeast { years } => years_from_now >= years,
        }
    }
}

/// One entry in the withdrawal priority order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WithdrawalTier {
    pub category: AccountCategory,
    /// Tax on the profit portion of a withdrawal, in percent
    pub tax_rate_pct: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holding_period: Option<HoldingPeriodGate>,
}

impl WithdrawalTier {
    pub const fn new(category: AccountCategory, tax_rate_pct: f64) -> Self {
        Self {
            category,
            tax_rate_pct,
            holding_period: None,
        }
    }

    pub const fn gated(mut self, gate: HoldingPeriodGate) -> Self {
        self.holding_period = Some(gate);
        self
    }

    pub fn applies_at(&self, years_from_now: u32) -> bool {
        self.holding_period
            .is_none_or(|gate| gate.admits(years_from_now))
    }
}

/// Minimum holding period after which study funds are withdrawn tax-free
pub const STUDY_FUND_HOLDING_YEARS: u32 = 6;

/// Assumptions shared by every planning operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannerConfig {
    /// Fixed annual inflation assumption, in percent
    #[serde(default = "default_inflation_rate_pct")]
    pub inflation_rate_pct: f64,

    /// Categories in withdrawal priority order, highest priority first
    #[serde(default = "PlannerConfig::default_withdrawal_tiers")]
    pub withdrawal_tiers: Vec<WithdrawalTier>,

    /// A plan is feasible when it nets at least `desired * (1 - tolerance)`
    #[serde(default = "default_feasibility_tolerance")]
    pub feasibility_tolerance: f64,

    /// Allowed deviation from 100 when summing sub-allocation percentages
    #[serde(default = "default_percent_sum_tolerance")]
    pub percent_sum_tolerance: f64,

    /// Remaining net need below which the planner stops drawing
    #[serde(default = "default_remaining_epsilon")]
    pub remaining_epsilon: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            inflation_rate_pct: default_inflation_rate_pct(),
            withdrawal_tiers: Self::default_withdrawal_tiers(),
            feasibility_tolerance: default_feasibility_tolerance(),
            percent_sum_tolerance: default_percent_sum_tolerance(),
            remaining_epsilon: default_remaining_epsilon(),
        }
    }
}

impl PlannerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Taxed wrappers first, then short-horizon study funds and deposits,
    /// then everything that can be withdrawn tax-free.
    pub fn default_withdrawal_tiers() -> Vec<WithdrawalTier> {
        use AccountCategory::*;
        vec![
            WithdrawalTier::new(IndependentPortfolio, 25.0),
            WithdrawalTier::new(InvestmentLinkedSavings, 25.0),
            WithdrawalTier::new(SavingsPolicy, 25.0),
            WithdrawalTier::new(StudyFund, 15.0)
                .gated(HoldingPeriodGate::Under {
                    years: STUDY_FUND_HOLDING_YEARS,
                }),
            WithdrawalTier::new(Deposit, 15.0),
            WithdrawalTier::new(StudyFund, 0.0)
                .gated(HoldingPeriodGate::AtLeast {
                    years: STUDY_FUND_HOLDING_YEARS,
                }),
            WithdrawalTier::new(MoneyMarket, 0.0),
            WithdrawalTier::new(Checking, 0.0),
        ]
    }

    #[must_use]
    pub fn with_inflation_rate(mut self, inflation_rate_pct: f64) -> Self {
        self.inflation_rate_pct = inflation_rate_pct;
        self
    }

    #[must_use]
    pub fn with_withdrawal_tiers(mut self, tiers: Vec<WithdrawalTier>) -> Self {
        self.withdrawal_tiers = tiers;
        self
    }

    /// Default tax rate for a category: the rate of its first tier
    pub fn tax_rate_for(&self, category: AccountCategory) -> Option<f64> {
        self.withdrawal_tiers
            .iter()
            .find(|t| t.category == category)
            .map(|t| t.tax_rate_pct)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inflation_rate_pct.is_nan() || self.inflation_rate_pct <= -100.0 {
            return Err(ConfigError::InflationOutOfRange(self.inflation_rate_pct));
        }
        for tier in &self.withdrawal_tiers {
            if tier.category.is_pension_blocked() {
                return Err(ConfigError::PensionTier);
            }
            if !(0.0..=100.0).contains(&tier.tax_rate_pct) {
                return Err(ConfigError::TaxRateOutOfRange {
                    category: tier.category,
                    rate: tier.tax_rate_pct,
                });
            }
        }
        let tolerances = [
            ("feasibility_tolerance", self.feasibility_tolerance),
            ("percent_sum_tolerance", self.percent_sum_tolerance),
            ("remaining_epsilon", self.remaining_epsilon),
        ];
        for (name, value) in tolerances {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositiveTolerance(name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let tiers = PlannerConfig::default_withdrawal_tiers();
        let order: Vec<AccountCategory> = tiers.iter().map(|t| t.category).collect();
        assert_eq!(
            order,
            vec![
                AccountCategory::IndependentPortfolio,
                AccountCategory::InvestmentLinkedSavings,
                AccountCategory::SavingsPolicy,
                AccountCategory::StudyFund,
                AccountCategory::Deposit,
                AccountCategory::StudyFund,
                AccountCategory::MoneyMarket,
                AccountCategory::Checking,
            ]
        );
        assert!(tiers.iter().all(|t| t.category != AccountCategory::Pension));
    }

    #[test]
    fn test_study_fund_gates_are_exclusive() {
        let tiers = PlannerConfig::default_withdrawal_tiers();
        for years in 0..12 {
            let active = tiers
                .iter()
                .filter(|t| t.category == AccountCategory::StudyFund && t.applies_at(years))
                .count();
            assert_eq!(active, 1, "year {years}");
        }
        assert!(tiers[3].applies_at(5));
        assert!(!tiers[3].applies_at(6));
        assert!(tiers[5].applies_at(6));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(PlannerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_pension_tier_rejected() {
        let config = PlannerConfig::default()
            .with_withdrawal_tiers(vec![WithdrawalTier::new(AccountCategory::Pension, 0.0)]);
        assert_eq!(config.validate(), Err(ConfigError::PensionTier));
    }

    #[test]
    fn test_zero_tolerance_rejected() {
        let config = PlannerConfig {
            feasibility_tolerance: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveTolerance("feasibility_tolerance"))
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PlannerConfig = serde_json::from_str(r#"{"inflation_rate_pct": 3.5}"#).unwrap();
        assert_eq!(config.inflation_rate_pct, 3.5);
        assert_eq!(config.withdrawal_tiers, PlannerConfig::default_withdrawal_tiers());
        assert_eq!(config.feasibility_tolerance, 0.001);
    }

    #[test]
    fn test_tax_rate_lookup_uses_first_tier() {
        let config = PlannerConfig::default();
        assert_eq!(config.tax_rate_for(AccountCategory::StudyFund), Some(15.0));
        assert_eq!(config.tax_rate_for(AccountCategory::Pension), None);
    }
}

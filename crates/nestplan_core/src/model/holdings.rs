//! Holding definitions
//!
//! A holding is one savings or investment account the user owns. Its
//! category decides the withdrawal priority and tax treatment, and whether
//! it can be drawn on at all before retirement.

use serde::{Deserialize, Serialize};

use super::ids::HoldingId;
use crate::error::ValidationError;

/// Withdrawal-hierarchy bucket a holding belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AccountCategory {
    /// Self-managed brokerage portfolio
    IndependentPortfolio,
    /// Investment-linked savings plan (managed fund wrapper)
    InvestmentLinkedSavings,
    /// Insurance savings policy
    SavingsPolicy,
    /// Tax-advantaged study fund; tax-free once the holding period is met
    StudyFund,
    /// Fixed-term bank deposit
    Deposit,
    MoneyMarket,
    Checking,
    /// Retirement-restricted; never offered for withdrawal
    Pension,
}

impl AccountCategory {
    pub const ALL: [AccountCategory; 8] = [
        AccountCategory::IndependentPortfolio,
        AccountCategory::InvestmentLinkedSavings,
        AccountCategory::SavingsPolicy,
        AccountCategory::StudyFund,
        AccountCategory::Deposit,
        AccountCategory::MoneyMarket,
        AccountCategory::Checking,
        AccountCategory::Pension,
    ];

    /// Whether holdings of this category are blocked from withdrawal planning
    pub fn is_pension_blocked(self) -> bool {
        matches!(self, AccountCategory::Pension)
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            AccountCategory::IndependentPortfolio => "Independent portfolio",
            AccountCategory::InvestmentLinkedSavings => "Investment-linked savings",
            AccountCategory::SavingsPolicy => "Savings policy",
            AccountCategory::StudyFund => "Study fund",
            AccountCategory::Deposit => "Deposit",
            AccountCategory::MoneyMarket => "Money market",
            AccountCategory::Checking => "Checking",
            AccountCategory::Pension => "Pension",
        }
    }
}

impl std::fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A named percentage slice of a holding with its own return rate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubAllocation {
    pub label: String,
    /// Share of the holding, 0-100
    pub percent_of_holding: f64,
    /// Nominal annual return of this slice, in percent
    pub return_rate: f64,
}

/// One investment or savings account instance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Holding {
    pub holding_id: HoldingId,
    pub name: String,
    pub category: AccountCategory,
    /// Current balance
    pub principal: f64,
    pub monthly_contribution: f64,
    /// Nominal annual growth rate in percent; may be zero or negative
    pub annual_return_rate: f64,
    /// Percent taken from every contribution
    #[serde(default)]
    pub deposit_fee_percent: f64,
    /// Percent per year subtracted from the growth rate
    #[serde(default)]
    pub annual_fee_percent: f64,
    /// Percent of profit owed as tax on withdrawal
    #[serde(default)]
    pub tax_rate_percent: f64,
    #[serde(default)]
    pub sub_allocations: Vec<SubAllocation>,
    #[serde(default = "default_true")]
    pub include_in_net_worth: bool,
}

fn default_true() -> bool {
    true
}

impl Holding {
    /// Return rate used for display and single-rate comparisons.
    ///
    /// With sub-allocations this is their percentage-weighted average. Note
    /// that projections never compound on this blended rate; see
    /// [`crate::projection::project_future_value`].
    pub fn effective_return_rate(&self) -> f64 {
        if self.sub_allocations.is_empty() {
            return self.annual_return_rate;
        }
        self.sub_allocations
            .iter()
            .map(|s| s.return_rate * s.percent_of_holding / 100.0)
            .sum()
    }

    pub fn is_pension_blocked(&self) -> bool {
        self.category.is_pension_blocked()
    }

    /// Check the holding against the documented input domain.
    ///
    /// The projection and planning code assumes validated input and never
    /// calls this; it exists for the layer that creates and edits holdings.
    pub fn validate(&self, percent_sum_tolerance: f64) -> Result<(), ValidationError> {
        let amounts = [
            ("principal", self.principal),
            ("monthly_contribution", self.monthly_contribution),
        ];
        for (field, value) in amounts {
            if value < 0.0 || !value.is_finite() {
                return Err(ValidationError::NegativeAmount {
                    holding: self.holding_id,
                    field,
                    value,
                });
            }
        }

        let percents = [
            ("deposit_fee_percent", self.deposit_fee_percent),
            ("annual_fee_percent", self.annual_fee_percent),
            ("tax_rate_percent", self.tax_rate_percent),
        ];
        for (field, value) in percents {
            if !(0.0..=100.0).contains(&value) {
                return Err(ValidationError::PercentOutOfRange {
                    holding: self.holding_id,
                    field,
                    value,
                });
            }
        }

        if self.sub_allocations.is_empty() {
            return Ok(());
        }

        for slice in &self.sub_allocations {
            if !(0.0..=100.0).contains(&slice.percent_of_holding) {
                return Err(ValidationError::PercentOutOfRange {
                    holding: self.holding_id,
                    field: "percent_of_holding",
                    value: slice.percent_of_holding,
                });
            }
        }

        let total: f64 = self
            .sub_allocations
            .iter()
            .map(|s| s.percent_of_holding)
            .sum();
        if (total - 100.0).abs() > percent_sum_tolerance {
            return Err(ValidationError::SubAllocationSum {
                holding: self.holding_id,
                total,
            });
        }

        Ok(())
    }
}

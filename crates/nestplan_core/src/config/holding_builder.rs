//! Holding Builder DSL
//!
//! Provides a fluent API for creating holdings with category presets and
//! sensible defaults.
//!
//! # Examples
//!
//! ```ignore
//! use nestplan_core::config::HoldingBuilder;
//!
//! // A brokerage account, 60/40 split across two funds
//! let brokerage = HoldingBuilder::independent_portfolio("Brokerage")
//!     .principal(50_000.0)
//!     .monthly(500.0)
//!     .sub_allocation("Equities", 60.0, 8.0)
//!     .sub_allocation("Bonds", 40.0, 3.0)
//!     .build(HoldingId(1));
//!
//! // A pension that grows but is never withdrawn from
//! let pension = HoldingBuilder::pension("Pension")
//!     .principal(200_000.0)
//!     .return_rate(5.0)
//!     .build(HoldingId(2));
//! ```

use crate::model::{AccountCategory, Holding, HoldingId, SubAllocation};

/// Builder for creating holdings with a fluent API
#[derive(Debug, Clone)]
pub struct HoldingBuilder {
    name: String,
    category: AccountCategory,
    principal: f64,
    monthly_contribution: f64,
    annual_return_rate: f64,
    deposit_fee_percent: f64,
    annual_fee_percent: f64,
    tax_rate_percent: f64,
    sub_allocations: Vec<SubAllocation>,
    include_in_net_worth: bool,
}

impl HoldingBuilder {
    /// Create a builder for any category with a zero tax rate
    #[must_use]
    pub fn new(name: impl Into<String>, category: AccountCategory) -> Self {
        Self {
            name: name.into(),
            category,
            principal: 0.0,
            monthly_contribution: 0.0,
            annual_return_rate: 0.0,
            deposit_fee_percent: 0.0,
            annual_fee_percent: 0.0,
            tax_rate_percent: 0.0,
            sub_allocations: Vec::new(),
            include_in_net_worth: true,
        }
    }

    // =========================================================================
    // Preset Category Constructors
    // =========================================================================

    /// Self-managed brokerage portfolio; 25% tax on profit
    #[must_use]
    pub fn independent_portfolio(name: impl Into<String>) -> Self {
        Self::new(name, AccountCategory::IndependentPortfolio).tax_rate(25.0)
    }

    /// Investment-linked savings plan; 25% tax on profit
    #[must_use]
    pub fn investment_linked_savings(name: impl Into<String>) -> Self {
        Self::new(name, AccountCategory::InvestmentLinkedSavings).tax_rate(25.0)
    }

    /// Insurance savings policy; 25% tax on profit
    #[must_use]
    pub fn savings_policy(name: impl Into<String>) -> Self {
        Self::new(name, AccountCategory::SavingsPolicy).tax_rate(25.0)
    }

    /// Study fund; 15% tax on profit before the holding period is met
    #[must_use]
    pub fn study_fund(name: impl Into<String>) -> Self {
        Self::new(name, AccountCategory::StudyFund).tax_rate(15.0)
    }

    /// Bank deposit; 15% tax on interest
    #[must_use]
    pub fn deposit(name: impl Into<String>) -> Self {
        Self::new(name, AccountCategory::Deposit).tax_rate(15.0)
    }

    #[must_use]
    pub fn money_market(name: impl Into<String>) -> Self {
        Self::new(name, AccountCategory::MoneyMarket)
    }

    #[must_use]
    pub fn checking(name: impl Into<String>) -> Self {
        Self::new(name, AccountCategory::Checking)
    }

    /// Retirement-restricted pension; counted in net worth, never withdrawn
    #[must_use]
    pub fn pension(name: impl Into<String>) -> Self {
        Self::new(name, AccountCategory::Pension)
    }

    // =========================================================================
    // Fluent setters
    // =========================================================================

    #[must_use]
    pub fn principal(mut self, amount: f64) -> Self {
        self.principal = amount;
        self
    }

    #[must_use]
    pub fn monthly(mut self, amount: f64) -> Self {
        self.monthly_contribution = amount;
        self
    }

    /// Nominal annual return in percent
    #[must_use]
    pub fn return_rate(mut self, rate_pct: f64) -> Self {
        self.annual_return_rate = rate_pct;
        self
    }

    /// Deposit fee and annual management fee, both in percent
    #[must_use]
    pub fn fees(mut self, deposit_fee_pct: f64, annual_fee_pct: f64) -> Self {
        self.deposit_fee_percent = deposit_fee_pct;
        self.annual_fee_percent = annual_fee_pct;
        self
    }

    #[must_use]
    pub fn tax_rate(mut self, rate_pct: f64) -> Self {
        self.tax_rate_percent = rate_pct;
        self
    }

    /// Add a sub-allocation slice. Once any slice is present, the holding's
    /// effective return becomes the weighted average of the slices.
    #[must_use]
    pub fn sub_allocation(mut self, label: impl Into<String>, percent: f64, rate_pct: f64) -> Self {
        self.sub_allocations.push(SubAllocation {
            label: label.into(),
            percent_of_holding: percent,
            return_rate: rate_pct,
        });
        self
    }

    #[must_use]
    pub fn excluded_from_net_worth(mut self) -> Self {
        self.include_in_net_worth = false;
        self
    }

    pub fn build(self, holding_id: HoldingId) -> Holding {
        let annual_return_rate = if self.sub_allocations.is_empty() {
            self.annual_return_rate
        } else {
            self.sub_allocations
                .iter()
                .map(|s| s.return_rate * s.percent_of_holding / 100.0)
                .sum()
        };

        Holding {
            holding_id,
            name: self.name,
            category: self.category,
            principal: self.principal,
            monthly_contribution: self.monthly_contribution,
            annual_return_rate,
            deposit_fee_percent: self.deposit_fee_percent,
            annual_fee_percent: self.annual_fee_percent,
            tax_rate_percent: self.tax_rate_percent,
            sub_allocations: self.sub_allocations,
            include_in_net_worth: self.include_in_net_worth,
        }
    }
}

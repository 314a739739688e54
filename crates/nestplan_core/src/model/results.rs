//! Output types produced by the projector, pool, planner and dream analyzer

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::holdings::AccountCategory;
use super::ids::{DreamId, HoldingId};

// ============================================================================
// Account pool
// ============================================================================

/// Projected totals for every eligible holding of one category
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PoolBucket {
    pub future_value_total: f64,
    pub principal_total: f64,
}

impl PoolBucket {
    /// Fraction of the bucket attributable to gains, pooled across holdings.
    ///
    /// Clamped to [0, 1]: a bucket worth less than what was paid in has no
    /// taxable profit.
    pub fn profit_ratio(&self) -> f64 {
        if self.future_value_total <= 0.0 {
            return 0.0;
        }
        ((self.future_value_total - self.principal_total) / self.future_value_total).clamp(0.0, 1.0)
    }
}

/// Withdrawable funds at a horizon, bucketed by category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountPool {
    pub years_from_now: u32,
    pub by_category: FxHashMap<AccountCategory, PoolBucket>,
    pub grand_total: f64,
}

impl AccountPool {
    pub fn bucket(&self, category: AccountCategory) -> Option<&PoolBucket> {
        self.by_category.get(&category)
    }

    pub fn available_total(&self) -> f64 {
        self.grand_total
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }
}

// ============================================================================
// Withdrawal plan
// ============================================================================

/// One category drawn on by a withdrawal plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WithdrawalStep {
    pub category: AccountCategory,
    pub gross_amount: f64,
    pub principal_portion: f64,
    pub profit_portion: f64,
    pub profit_ratio: f64,
    /// Category tax rate in percent
    pub tax_rate: f64,
    pub tax_amount: f64,
    pub net_amount: f64,
}

/// Outcome of planning a withdrawal.
///
/// Infeasible plans carry no steps and zero totals; `achieved_net` still
/// reports how far the greedy pass got.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WithdrawalPlan {
    pub feasible: bool,
    pub steps: Vec<WithdrawalStep>,
    pub total_gross: f64,
    pub total_tax: f64,
    pub total_net: f64,
    pub available_total: f64,
    pub desired_net: f64,
    pub achieved_net: f64,
}

impl WithdrawalPlan {
    pub fn infeasible(available_total: f64, desired_net: f64, achieved_net: f64) -> Self {
        Self {
            feasible: false,
            steps: Vec::new(),
            total_gross: 0.0,
            total_tax: 0.0,
            total_net: 0.0,
            available_total,
            desired_net,
            achieved_net,
        }
    }

    /// Net amount still missing; zero for feasible plans
    pub fn shortfall(&self) -> f64 {
        if self.feasible {
            0.0
        } else {
            (self.desired_net - self.achieved_net).max(0.0)
        }
    }

    /// Overall tax as a share of the gross withdrawal
    pub fn effective_tax_rate(&self) -> f64 {
        if self.total_gross > 0.0 {
            self.total_tax / self.total_gross
        } else {
            0.0
        }
    }
}

// ============================================================================
// Dream gap
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DreamStatus {
    /// Target year is this year or earlier
    Past,
    /// Funding sources cover the inflated cost
    Success,
    Shortfall,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DreamGapResult {
    pub dream_id: DreamId,
    pub status: DreamStatus,
    pub years_until: i32,
    /// Present cost escalated by inflation to the target year
    pub future_cost: f64,
    /// Sum of the funding sources' future values at the target year
    pub projected_total: f64,
    /// Missing amount; never negative
    pub gap: f64,
    pub surplus: f64,
    pub required_monthly_total: f64,
    /// `required_monthly_total` split evenly across the funding sources
    pub required_monthly_per_source: f64,
}

// ============================================================================
// Projections
// ============================================================================

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct FeeBreakdown {
    /// Total taken off contributions by the deposit fee
    pub deposit_fees: f64,
    /// Growth lost to the annual management fee
    pub annual_fee_drag: f64,
}

impl FeeBreakdown {
    pub fn total(&self) -> f64 {
        self.deposit_fees + self.annual_fee_drag
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubAllocationProjection {
    pub label: String,
    pub percent_of_holding: f64,
    pub return_rate: f64,
    pub future_value: f64,
    pub contributed: f64,
}

/// Full breakdown of a single holding at a horizon
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HoldingProjection {
    pub holding_id: HoldingId,
    pub category: AccountCategory,
    pub years: u32,
    pub future_value: f64,
    pub contributed: f64,
    pub profit: f64,
    pub tax_on_profit: f64,
    pub net_after_tax: f64,
    pub real_value: f64,
    pub fees: FeeBreakdown,
    pub sub_allocations: Vec<SubAllocationProjection>,
}

/// One year on a projection curve
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProjectionPoint {
    pub year: u32,
    pub nominal: f64,
    pub real: f64,
    pub contributed: f64,
}

/// Net-worth view over every holding included in net worth
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub years: u32,
    pub holdings: Vec<HoldingProjection>,
    pub current_net_worth: f64,
    pub future_net_worth: f64,
    pub total_contributed: f64,
    pub total_profit: f64,
    pub total_tax: f64,
    pub net_after_tax: f64,
    pub real_net_worth: f64,
    /// Portion of `future_net_worth` held in pension-blocked holdings
    pub pension_blocked: f64,
}

//! Withdrawable funds at a horizon, bucketed by account category
//!
//! Pension-blocked holdings and holdings excluded from net worth never enter
//! the pool.

use rustc_hash::FxHashMap;

use crate::model::{AccountPool, Holding, PoolBucket};
use crate::projection::{contributed_principal, project_future_value};

/// Sum projected value and contributed principal per category at `years_from_now`
pub fn build_pool(holdings: &[Holding], years_from_now: u32) -> AccountPool {
    let mut by_category: FxHashMap<_, PoolBucket> = FxHashMap::default();
    let mut grand_total = 0.0;

    for holding in holdings
        .iter()
        .filter(|h| h.include_in_net_worth && !h.is_pension_blocked())
    {
        let future_value = project_future_value(holding, years_from_now);
        let principal = contributed_principal(
            holding.principal,
            holding.monthly_contribution,
            years_from_now,
        );

        let bucket = by_category.entry(holding.category).or_default();
        bucket.future_value_total += future_value;
        bucket.principal_total += principal;
        grand_total += future_value;
    }

    AccountPool {
        years_from_now,
        by_category,
        grand_total,
    }
}

//! Tax-ordered withdrawal planning
//!
//! Given a net cash need at a horizon, walk the configured withdrawal tiers
//! in priority order and draw from each category's pooled balance until the
//! need is met. Each draw is grossed up so that, after tax on the profit
//! portion, it nets exactly what is still missing.
//!
//! Tax is computed on the category's pooled profit ratio rather than per
//! holding, so holdings with very different cost bases inside one category
//! are averaged together.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::{PlannerConfig, WithdrawalTier};
use crate::model::{
    AccountCategory, AccountPool, Holding, PoolBucket, WithdrawalPlan, WithdrawalStep,
    WithdrawalTarget,
};
use crate::pool::build_pool;

/// Plan a withdrawal of `target.desired_net_amount` against a prebuilt pool.
///
/// Infeasibility is a normal outcome: the returned plan has `feasible ==
/// false` and no steps when the pool cannot cover the need.
pub fn plan_withdrawal(
    target: &WithdrawalTarget,
    pool: &AccountPool,
    config: &PlannerConfig,
) -> WithdrawalPlan {
    let desired = target.desired_net_amount;
    let available_total = pool.available_total();

    let mut remaining = desired;
    let mut steps: Vec<WithdrawalStep> = Vec::new();
    let mut visited: Vec<AccountCategory> = Vec::with_capacity(config.withdrawal_tiers.len());
    let mut total_gross = 0.0;
    let mut total_tax = 0.0;

    for tier in &config.withdrawal_tiers {
        if remaining <= config.remaining_epsilon {
            break;
        }
        if tier.category.is_pension_blocked()
            || !tier.applies_at(target.years_from_now)
            || visited.contains(&tier.category)
        {
            continue;
        }
        let Some(bucket) = pool.bucket(tier.category) else {
            continue;
        };
        let Some(step) = draw_from_bucket(tier, bucket, remaining) else {
            continue;
        };
        visited.push(tier.category);

        tracing::debug!(
            category = %step.category,
            gross = step.gross_amount,
            tax = step.tax_amount,
            net = step.net_amount,
            "withdrawal step"
        );

        remaining -= step.net_amount;
        total_gross += step.gross_amount;
        total_tax += step.tax_amount;
        steps.push(step);
    }

    let achieved_net = total_gross - total_tax;
    let feasible = achieved_net >= desired * (1.0 - config.feasibility_tolerance)
        && total_gross <= available_total + config.remaining_epsilon;

    if !feasible {
        tracing::debug!(
            desired,
            achieved_net,
            available_total,
            "withdrawal target not feasible"
        );
        return WithdrawalPlan::infeasible(available_total, desired, achieved_net);
    }

    WithdrawalPlan {
        feasible,
        steps,
        total_gross,
        total_tax,
        total_net: achieved_net,
        available_total,
        desired_net: desired,
        achieved_net,
    }
}

/// Build the pool for `holdings` at the target horizon and plan against it
pub fn plan_for_holdings(
    target: &WithdrawalTarget,
    holdings: &[Holding],
    config: &PlannerConfig,
) -> WithdrawalPlan {
    let pool = build_pool(holdings, target.years_from_now);
    plan_withdrawal(target, &pool, config)
}

/// Plan several independent targets against the same holdings.
///
/// Targets share nothing mutable, so with the `parallel` feature they are
/// evaluated concurrently. Output order matches `targets`.
pub fn plan_many(
    targets: &[WithdrawalTarget],
    holdings: &[Holding],
    config: &PlannerConfig,
) -> Vec<WithdrawalPlan> {
    #[cfg(feature = "parallel")]
    let plans = targets
        .par_iter()
        .map(|target| plan_for_holdings(target, holdings, config))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let plans = targets
        .iter()
        .map(|target| plan_for_holdings(target, holdings, config))
        .collect();

    plans
}

/// Gross up `remaining_net` for tax at the bucket's profit ratio, capped by
/// what the bucket holds. `None` when nothing can be drawn.
fn draw_from_bucket(
    tier: &WithdrawalTier,
    bucket: &PoolBucket,
    remaining_net: f64,
) -> Option<WithdrawalStep> {
    let available = bucket.future_value_total;
    if available <= 0.0 {
        return None;
    }

    let profit_ratio = bucket.profit_ratio();
    let effective_tax_rate = profit_ratio * tier.tax_rate_pct / 100.0;
    if effective_tax_rate >= 1.0 {
        return None;
    }

    let gross_needed = remaining_net / (1.0 - effective_tax_rate);
    let gross_amount = gross_needed.min(available);
    let profit_portion = gross_amount * profit_ratio;
    let tax_amount = profit_portion * tier.tax_rate_pct / 100.0;

    Some(WithdrawalStep {
        category: tier.category,
        gross_amount,
        principal_portion: gross_amount - profit_portion,
        profit_portion,
        profit_ratio,
        tax_rate: tier.tax_rate_pct,
        tax_amount,
        net_amount: gross_amount - tax_amount,
    })
}

//! Future-value projection for holdings
//!
//! Balances compound monthly at the holding's return rate net of the annual
//! fee, with a fixed monthly contribution net of the deposit fee. Holdings
//! split into sub-allocations are projected slice by slice and summed.

use crate::config::PlannerConfig;
use crate::model::{
    FeeBreakdown, Holding, HoldingProjection, ProjectionPoint, SubAllocation,
    SubAllocationProjection,
};

const MONTHS_PER_YEAR: u32 = 12;

/// Project a balance plus a monthly contribution stream `years` ahead.
///
/// The monthly rate is `(annual_rate_pct - annual_fee_pct) / 1200`. When it
/// is zero or negative the balance accumulates linearly with no
/// compounding, so a negative net rate never erodes the principal.
///
/// With non-empty `sub_allocations` each slice is projected on its own
/// return rate with the principal and contribution pro-rated by its share,
/// and the results are summed. Fees stay holding-level. Because compounding
/// is not linear in the rate, this is not the same as projecting on the
/// weighted-average rate; the slice-by-slice result is authoritative.
pub fn future_value(
    principal: f64,
    monthly: f64,
    annual_rate_pct: f64,
    years: u32,
    deposit_fee_pct: f64,
    annual_fee_pct: f64,
    sub_allocations: &[SubAllocation],
) -> f64 {
    if !sub_allocations.is_empty() {
        return sub_allocations
            .iter()
            .map(|slice| {
                let share = slice.percent_of_holding / 100.0;
                future_value(
                    principal * share,
                    monthly * share,
                    slice.return_rate,
                    years,
                    deposit_fee_pct,
                    annual_fee_pct,
                    &[],
                )
            })
            .sum();
    }

    let r = (annual_rate_pct - annual_fee_pct) / 100.0 / f64::from(MONTHS_PER_YEAR);
    let m = monthly * (1.0 - deposit_fee_pct / 100.0);
    let n = years.saturating_mul(MONTHS_PER_YEAR);

    if r <= 0.0 {
        return principal + m * f64::from(n);
    }

    let growth = (1.0 + r).powi(i32::try_from(n).unwrap_or(i32::MAX));
    principal * growth + m * (growth - 1.0) / r
}

/// [`future_value`] applied to a holding
pub fn project_future_value(holding: &Holding, years: u32) -> f64 {
    future_value(
        holding.principal,
        holding.monthly_contribution,
        holding.annual_return_rate,
        years,
        holding.deposit_fee_percent,
        holding.annual_fee_percent,
        &holding.sub_allocations,
    )
}

/// Deflate a nominal amount to today's money
pub fn real_value(nominal: f64, years: u32, inflation_rate_pct: f64) -> f64 {
    nominal / (1.0 + inflation_rate_pct / 100.0).powi(i32::try_from(years).unwrap_or(i32::MAX))
}

/// Tax owed on the gain over `principal`; losses are untaxed
pub fn tax_on_profit(principal: f64, future_value: f64, tax_rate_pct: f64) -> f64 {
    (future_value - principal).max(0.0) * tax_rate_pct / 100.0
}

/// Starting balance plus every monthly contribution over `years`
pub fn contributed_principal(amount: f64, monthly: f64, years: u32) -> f64 {
    amount + monthly * f64::from(MONTHS_PER_YEAR) * f64::from(years)
}

/// Full breakdown of a holding at a horizon: value, tax, real value, fees
/// and per-slice results.
pub fn project_holding(holding: &Holding, years: u32, config: &PlannerConfig) -> HoldingProjection {
    let future_value = project_future_value(holding, years);
    let contributed = contributed_principal(holding.principal, holding.monthly_contribution, years);
    let tax = tax_on_profit(contributed, future_value, holding.tax_rate_percent);

    let without_annual_fee = future_value_ignoring_annual_fee(holding, years);
    let fees = FeeBreakdown {
        deposit_fees: holding.monthly_contribution * holding.deposit_fee_percent / 100.0
            * f64::from(MONTHS_PER_YEAR)
            * f64::from(years),
        annual_fee_drag: (without_annual_fee - future_value).max(0.0),
    };

    let sub_allocations = holding
        .sub_allocations
        .iter()
        .map(|slice| {
            let share = slice.percent_of_holding / 100.0;
            SubAllocationProjection {
                label: slice.label.clone(),
                percent_of_holding: slice.percent_of_holding,
                return_rate: slice.return_rate,
                future_value: future_value_of_slice(holding, slice, years),
                contributed: contributed * share,
            }
        })
        .collect();

    HoldingProjection {
        holding_id: holding.holding_id,
        category: holding.category,
        years,
        future_value,
        contributed,
        profit: future_value - contributed,
        tax_on_profit: tax,
        net_after_tax: future_value - tax,
        real_value: real_value(future_value, years, config.inflation_rate_pct),
        fees,
        sub_allocations,
    }
}

/// Year-by-year curve from today (year 0) through `years`
pub fn projection_series(
    holding: &Holding,
    years: u32,
    config: &PlannerConfig,
) -> Vec<ProjectionPoint> {
    (0..=years)
        .map(|year| {
            let nominal = project_future_value(holding, year);
            ProjectionPoint {
                year,
                nominal,
                real: real_value(nominal, year, config.inflation_rate_pct),
                contributed: contributed_principal(
                    holding.principal,
                    holding.monthly_contribution,
                    year,
                ),
            }
        })
        .collect()
}

fn future_value_of_slice(holding: &Holding, slice: &SubAllocation, years: u32) -> f64 {
    let share = slice.percent_of_holding / 100.0;
    future_value(
        holding.principal * share,
        holding.monthly_contribution * share,
        slice.return_rate,
        years,
        holding.deposit_fee_percent,
        holding.annual_fee_percent,
        &[],
    )
}

fn future_value_ignoring_annual_fee(holding: &Holding, years: u32) -> f64 {
    future_value(
        holding.principal,
        holding.monthly_contribution,
        holding.annual_return_rate,
        years,
        holding.deposit_fee_percent,
        0.0,
        &holding.sub_allocations,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    #[test]
    fn test_lump_sum_compounds_monthly() {
        let fv = future_value(100_000.0, 0.0, 6.0, 10, 0.0, 0.0, &[]);
        assert_close(fv, 100_000.0 * 1.005_f64.powi(120), 1e-6);
        assert_close(fv, 181_939.67, 0.01);
    }

    #[test]
    fn test_annuity_term() {
        // 12% / 12 = 1% per month, 12 deposits of 100
        let fv = future_value(0.0, 100.0, 12.0, 1, 0.0, 0.0, &[]);
        let expected = 100.0 * (1.01_f64.powi(12) - 1.0) / 0.01;
        assert_close(fv, expected, 1e-9);
    }

    #[test]
    fn test_fee_equal_to_rate_is_linear() {
        let fv = future_value(10_000.0, 250.0, 1.5, 7, 0.0, 1.5, &[]);
        assert_eq!(fv, 10_000.0 + 250.0 * 12.0 * 7.0);
    }

    #[test]
    fn test_negative_rate_does_not_compound() {
        let fv = future_value(10_000.0, 100.0, -4.0, 5, 0.0, 0.0, &[]);
        assert_eq!(fv, 10_000.0 + 100.0 * 60.0);
    }

    #[test]
    fn test_huge_horizon_saturates_instead_of_wrapping() {
        for years in [200_000_000, 400_000_000, u32::MAX] {
            let fv = future_value(1_000.0, 100.0, 6.0, years, 0.0, 0.0, &[]);
            assert!(fv > 1_000.0, "years {years} gave {fv}");

            let linear = future_value(1_000.0, 100.0, 0.0, years, 0.0, 0.0, &[]);
            assert!(linear > 1_000.0);
        }
        assert!(real_value(1_000.0, u32::MAX, 2.0) >= 0.0);
    }

    #[test]
    fn test_deposit_fee_reduces_contribution() {
        let fv = future_value(0.0, 100.0, 0.0, 2, 2.0, 0.0, &[]);
        assert_close(fv, 98.0 * 24.0, 1e-9);
    }

    #[test]
    fn test_zero_years_returns_principal() {
        assert_eq!(future_value(5_000.0, 300.0, 7.0, 0, 1.0, 0.5, &[]), 5_000.0);
    }

    #[test]
    fn test_single_full_slice_matches_plain_projection() {
        let slices = vec![SubAllocation {
            label: "All".into(),
            percent_of_holding: 100.0,
            return_rate: 5.0,
        }];
        let split = future_value(20_000.0, 400.0, 99.0, 15, 0.5, 0.7, &slices);
        let plain = future_value(20_000.0, 400.0, 5.0, 15, 0.5, 0.7, &[]);
        assert_close(split, plain, 1e-6);
    }

    #[test]
    fn test_slices_exceed_blended_rate() {
        let slices = vec![
            SubAllocation {
                label: "Equities".into(),
                percent_of_holding: 50.0,
                return_rate: 10.0,
            },
            SubAllocation {
                label: "Cash".into(),
                percent_of_holding: 50.0,
                return_rate: 2.0,
            },
        ];
        let split = future_value(10_000.0, 0.0, 6.0, 20, 0.0, 0.0, &slices);
        let blended = future_value(10_000.0, 0.0, 6.0, 20, 0.0, 0.0, &[]);
        // Convexity of compounding: the split always ends ahead
        assert!(split > blended, "split {split} <= blended {blended}");
    }

    #[test]
    fn test_real_value_deflates() {
        assert_close(real_value(121.0, 2, 10.0), 100.0, 1e-9);
        assert_eq!(real_value(500.0, 0, 2.0), 500.0);
    }

    #[test]
    fn test_tax_on_profit_ignores_losses() {
        assert_eq!(tax_on_profit(1_000.0, 800.0, 25.0), 0.0);
        assert_close(tax_on_profit(1_000.0, 1_400.0, 25.0), 100.0, 1e-9);
    }

    #[test]
    fn test_contributed_principal() {
        assert_eq!(contributed_principal(1_000.0, 50.0, 3), 1_000.0 + 50.0 * 36.0);
    }
}

//! Tests for holding projections
//!
//! These tests verify:
//! - Zero net rate accumulates linearly
//! - A single 100% sub-allocation matches the plain projection
//! - Monthly compounding of a lump sum
//! - Fee and sub-allocation breakdowns

use crate::config::{HoldingBuilder, PlannerConfig};
use crate::model::HoldingId;
use crate::projection::{project_future_value, project_holding, projection_series};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual}, tolerance {tol}"
    );
}

/// Net rate of zero gives exactly principal + contributions
#[test]
fn test_zero_net_rate_is_linear() {
    for (rate, years) in [(0.0, 1), (0.8, 10), (3.25, 25)] {
        let holding = HoldingBuilder::investment_linked_savings("Plan")
            .principal(12_345.0)
            .monthly(321.0)
            .return_rate(rate)
            .fees(0.0, rate)
            .build(HoldingId(1));
        assert_eq!(
            project_future_value(&holding, years),
            12_345.0 + 321.0 * 12.0 * f64::from(years)
        );
    }
}

/// One slice holding 100% behaves like a single-rate holding
#[test]
fn test_single_slice_equivalence() {
    let split = HoldingBuilder::independent_portfolio("Split")
        .principal(40_000.0)
        .monthly(750.0)
        .fees(0.2, 0.6)
        .sub_allocation("Global equity", 100.0, 7.5)
        .build(HoldingId(1));
    let plain = HoldingBuilder::independent_portfolio("Plain")
        .principal(40_000.0)
        .monthly(750.0)
        .fees(0.2, 0.6)
        .return_rate(7.5)
        .build(HoldingId(2));

    for years in [0, 1, 5, 30] {
        assert_close(
            project_future_value(&split, years),
            project_future_value(&plain, years),
            1e-6,
        );
    }
}

/// 100,000 at 6% for 10 years with no contributions, compounded monthly
#[test]
fn test_lump_sum_ten_years() {
    let holding = HoldingBuilder::independent_portfolio("Brokerage")
        .principal(100_000.0)
        .return_rate(6.0)
        .build(HoldingId(1));
    let fv = project_future_value(&holding, 10);
    assert_close(fv, 100_000.0 * 1.005_f64.powi(120), 1e-6);
}

#[test]
fn test_projection_breakdown() {
    let holding = HoldingBuilder::savings_policy("Policy")
        .principal(10_000.0)
        .monthly(100.0)
        .return_rate(5.0)
        .fees(1.0, 0.5)
        .build(HoldingId(7));
    let config = PlannerConfig::default();
    let projection = project_holding(&holding, 10, &config);

    assert_eq!(projection.holding_id, HoldingId(7));
    assert_eq!(projection.contributed, 10_000.0 + 100.0 * 120.0);
    assert_close(projection.profit, projection.future_value - projection.contributed, 1e-9);
    assert_close(projection.tax_on_profit, projection.profit * 0.25, 1e-9);
    assert_close(
        projection.net_after_tax,
        projection.future_value - projection.tax_on_profit,
        1e-9,
    );
    assert_close(
        projection.real_value,
        projection.future_value / 1.02_f64.powi(10),
        1e-6,
    );
    assert_close(projection.fees.deposit_fees, 120.0, 1e-9);
    assert!(projection.fees.annual_fee_drag > 0.0);
    assert!(projection.sub_allocations.is_empty());
}

#[test]
fn test_sub_allocation_rows_sum_to_total() {
    let holding = HoldingBuilder::study_fund("Study fund")
        .principal(30_000.0)
        .monthly(600.0)
        .sub_allocation("Equities", 70.0, 8.0)
        .sub_allocation("Bonds", 30.0, 3.0)
        .build(HoldingId(3));
    let projection = project_holding(&holding, 8, &PlannerConfig::default());

    assert_eq!(projection.sub_allocations.len(), 2);
    let rows: f64 = projection.sub_allocations.iter().map(|s| s.future_value).sum();
    assert_close(rows, projection.future_value, 1e-6);
    let contributed: f64 = projection.sub_allocations.iter().map(|s| s.contributed).sum();
    assert_close(contributed, projection.contributed, 1e-6);
}

#[test]
fn test_series_has_one_point_per_year() {
    let holding = HoldingBuilder::money_market("MMF")
        .principal(1_000.0)
        .return_rate(4.0)
        .build(HoldingId(1));
    let series = projection_series(&holding, 5, &PlannerConfig::default());

    assert_eq!(series.len(), 6);
    assert_eq!(series[0].nominal, 1_000.0);
    assert_eq!(series[0].real, 1_000.0);
    assert!(series.windows(2).all(|w| w[1].nominal > w[0].nominal));
    assert_close(series[5].nominal, project_future_value(&holding, 5), 1e-9);
}

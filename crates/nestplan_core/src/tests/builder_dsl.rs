//! Tests for the holding builder DSL
//!
//! These tests verify that category presets carry the expected defaults and
//! that builder-made holdings flow through the planner end to end.

use crate::config::{HoldingBuilder, PlannerConfig};
use crate::model::{AccountCategory, HoldingId, WithdrawalTarget};
use crate::summary::portfolio_summary;
use crate::withdrawal::plan_for_holdings;

#[test]
fn test_presets_match_withdrawal_tax_rates() {
    let config = PlannerConfig::default();
    let presets = [
        HoldingBuilder::independent_portfolio("a"),
        HoldingBuilder::investment_linked_savings("b"),
        HoldingBuilder::savings_policy("c"),
        HoldingBuilder::study_fund("d"),
        HoldingBuilder::deposit("e"),
        HoldingBuilder::money_market("f"),
        HoldingBuilder::checking("g"),
    ];
    for (i, builder) in presets.into_iter().enumerate() {
        let holding = builder.build(HoldingId(i as u16));
        assert_eq!(
            Some(holding.tax_rate_percent),
            config.tax_rate_for(holding.category),
            "{:?}",
            holding.category
        );
        assert!(holding.include_in_net_worth);
        assert!(holding.validate(config.percent_sum_tolerance).is_ok());
    }

    let pension = HoldingBuilder::pension("p").build(HoldingId(99));
    assert_eq!(pension.category, AccountCategory::Pension);
    assert!(pension.is_pension_blocked());
}

#[test]
fn test_sub_allocations_set_blended_rate() {
    let holding = HoldingBuilder::investment_linked_savings("Managed")
        .principal(10_000.0)
        .sub_allocation("Equities", 75.0, 8.0)
        .sub_allocation("Bonds", 25.0, 4.0)
        .build(HoldingId(1));
    assert!((holding.annual_return_rate - 7.0).abs() < 1e-9);
    assert!((holding.effective_return_rate() - 7.0).abs() < 1e-9);
    assert_eq!(holding.sub_allocations.len(), 2);
}

#[test]
fn test_household_end_to_end() {
    let holdings = vec![
        HoldingBuilder::independent_portfolio("Brokerage")
            .principal(120_000.0)
            .monthly(1_500.0)
            .return_rate(6.0)
            .fees(0.0, 0.25)
            .build(HoldingId(1)),
        HoldingBuilder::study_fund("Study fund")
            .principal(60_000.0)
            .monthly(800.0)
            .sub_allocation("Equities", 60.0, 7.0)
            .sub_allocation("Bonds", 40.0, 3.5)
            .fees(0.0, 0.7)
            .build(HoldingId(2)),
        HoldingBuilder::deposit("Deposit")
            .principal(40_000.0)
            .return_rate(3.0)
            .build(HoldingId(3)),
        HoldingBuilder::pension("Pension")
            .principal(400_000.0)
            .monthly(2_500.0)
            .return_rate(5.0)
            .fees(1.5, 0.2)
            .build(HoldingId(4)),
    ];
    let config = PlannerConfig::default();

    let summary = portfolio_summary(&holdings, 10, &config);
    assert_eq!(summary.holdings.len(), 4);
    assert!(summary.pension_blocked > 0.0);
    assert!(summary.future_net_worth > summary.total_contributed);

    let plan = plan_for_holdings(&WithdrawalTarget::new(400_000.0, 10), &holdings, &config);
    assert!(plan.feasible);
    assert!(plan.available_total < summary.future_net_worth - summary.pension_blocked + 1e-6);
    assert_eq!(plan.steps[0].category, AccountCategory::IndependentPortfolio);
    assert!(plan.steps.iter().all(|s| s.category != AccountCategory::Pension));
    // Study fund is past its holding period at ten years
    if let Some(step) = plan
        .steps
        .iter()
        .find(|s| s.category == AccountCategory::StudyFund)
    {
        assert_eq!(step.tax_rate, 0.0);
    }
}

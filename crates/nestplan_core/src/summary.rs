//! Net-worth projection across all holdings

use crate::config::PlannerConfig;
use crate::model::{Holding, PortfolioSummary, ProjectionPoint};
use crate::projection::{project_holding, projection_series};

/// Project every holding included in net worth and total the results.
///
/// Pension holdings count toward net worth; they are only kept out of
/// withdrawal planning. Their share is reported in `pension_blocked`.
pub fn portfolio_summary(
    holdings: &[Holding],
    years: u32,
    config: &PlannerConfig,
) -> PortfolioSummary {
    let mut summary = PortfolioSummary {
        years,
        ..Default::default()
    };

    for holding in holdings.iter().filter(|h| h.include_in_net_worth) {
        let projection = project_holding(holding, years, config);

        summary.current_net_worth += holding.principal;
        summary.future_net_worth += projection.future_value;
        summary.total_contributed += projection.contributed;
        summary.total_profit += projection.profit;
        summary.total_tax += projection.tax_on_profit;
        summary.net_after_tax += projection.net_after_tax;
        summary.real_net_worth += projection.real_value;
        if holding.is_pension_blocked() {
            summary.pension_blocked += projection.future_value;
        }

        summary.holdings.push(projection);
    }

    summary
}

/// Year-by-year net worth from today through `years`, summed over every
/// holding included in net worth
pub fn portfolio_series(
    holdings: &[Holding],
    years: u32,
    config: &PlannerConfig,
) -> Vec<ProjectionPoint> {
    let mut series: Vec<ProjectionPoint> = (0..=years)
        .map(|year| ProjectionPoint {
            year,
            nominal: 0.0,
            real: 0.0,
            contributed: 0.0,
        })
        .collect();

    for holding in holdings.iter().filter(|h| h.include_in_net_worth) {
        for (total, point) in series
            .iter_mut()
            .zip(projection_series(holding, years, config))
        {
            total.nominal += point.nominal;
            total.real += point.real;
            total.contributed += point.contributed;
        }
    }

    series
}

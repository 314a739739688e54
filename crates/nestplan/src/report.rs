//! Plain-text and JSON reports for the CLI

use std::fmt::{self, Write};

use nestplan_core::model::{
    DreamGapResult, DreamStatus, PortfolioSummary, ProjectionPoint, WithdrawalPlan,
    WithdrawalTarget,
};
use serde::Serialize;

use crate::data::convert::PlanSnapshot;
use crate::util::format::{format_amount, format_amount_short, format_percent, format_ratio};

/// Portfolio summary with the optional yearly curve, for JSON output
#[derive(Debug, Serialize)]
pub struct SummaryReport<'a> {
    #[serde(flatten)]
    pub summary: &'a PortfolioSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<&'a [ProjectionPoint]>,
}

/// A withdrawal goal with its plan, for JSON output
#[derive(Debug, Serialize)]
pub struct GoalReport<'a> {
    pub name: &'a str,
    pub target: WithdrawalTarget,
    pub plan: &'a WithdrawalPlan,
}

/// A dream with its gap analysis, for JSON output
#[derive(Debug, Serialize)]
pub struct DreamReport<'a> {
    pub name: &'a str,
    pub target_year: i16,
    pub result: &'a DreamGapResult,
}

pub fn render_summary(
    out: &mut impl Write,
    snapshot: &PlanSnapshot,
    summary: &PortfolioSummary,
) -> fmt::Result {
    writeln!(out, "Plan: {} ({} years)", snapshot.name, summary.years)?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<24} {:<26} {:>12} {:>12} {:>12} {:>10} {:>12}",
        "Holding", "Category", "Today", "Future", "Contributed", "Tax", "Real"
    )?;

    for projection in &summary.holdings {
        let name = snapshot.holding_name(projection.holding_id).unwrap_or("?");
        let principal = snapshot
            .holdings
            .iter()
            .find(|h| h.holding_id == projection.holding_id)
            .map_or(0.0, |h| h.principal);
        writeln!(
            out,
            "{:<24} {:<26} {:>12} {:>12} {:>12} {:>10} {:>12}",
            name,
            projection.category.label(),
            format_amount_short(principal),
            format_amount_short(projection.future_value),
            format_amount_short(projection.contributed),
            format_amount_short(projection.tax_on_profit),
            format_amount_short(projection.real_value),
        )?;
        for slice in &projection.sub_allocations {
            let split = format!(
                "{} @ {}",
                format_percent(slice.percent_of_holding),
                format_percent(slice.return_rate)
            );
            writeln!(
                out,
                "  {:<22} {:<26} {:>12} {:>12}",
                slice.label,
                split,
                "",
                format_amount_short(slice.future_value),
            )?;
        }
    }

    let fees: f64 = summary.holdings.iter().map(|p| p.fees.total()).sum();

    writeln!(out)?;
    writeln!(out, "Net worth today:        {}", format_amount(summary.current_net_worth))?;
    writeln!(out, "Net worth at horizon:   {}", format_amount(summary.future_net_worth))?;
    writeln!(out, "  in today's money:     {}", format_amount(summary.real_net_worth))?;
    writeln!(out, "  after tax on profit:  {}", format_amount(summary.net_after_tax))?;
    writeln!(out, "Total contributed:      {}", format_amount(summary.total_contributed))?;
    writeln!(out, "Total profit:           {}", format_amount(summary.total_profit))?;
    writeln!(out, "Fees paid:              {}", format_amount(fees))?;
    if summary.pension_blocked > 0.0 {
        writeln!(
            out,
            "Pension (not withdrawable): {}",
            format_amount(summary.pension_blocked)
        )?;
    }
    Ok(())
}

/// Year-by-year net worth table
pub fn render_series(out: &mut impl Write, series: &[ProjectionPoint]) -> fmt::Result {
    writeln!(
        out,
        "{:>6} {:>14} {:>14} {:>14}",
        "Year", "Net worth", "Real", "Contributed"
    )?;
    for point in series {
        writeln!(
            out,
            "{:>6} {:>14} {:>14} {:>14}",
            point.year,
            format_amount_short(point.nominal),
            format_amount_short(point.real),
            format_amount_short(point.contributed),
        )?;
    }
    Ok(())
}

pub fn render_withdrawal(
    out: &mut impl Write,
    label: &str,
    target: &WithdrawalTarget,
    plan: &WithdrawalPlan,
) -> fmt::Result {
    writeln!(
        out,
        "{}: {} net in {} years",
        label,
        format_amount(target.desired_net_amount),
        target.years_from_now
    )?;
    writeln!(out, "  Withdrawable at horizon: {}", format_amount(plan.available_total))?;

    if !plan.feasible {
        writeln!(
            out,
            "  Not feasible: can net {} at most, short by {}",
            format_amount(plan.achieved_net),
            format_amount(plan.shortfall())
        )?;
        return Ok(());
    }

    writeln!(
        out,
        "  {:<26} {:>12} {:>8} {:>8} {:>10} {:>12}",
        "Category", "Gross", "Profit", "Tax", "Tax paid", "Net"
    )?;
    for step in &plan.steps {
        writeln!(
            out,
            "  {:<26} {:>12} {:>8} {:>8} {:>10} {:>12}",
            step.category.label(),
            format_amount_short(step.gross_amount),
            format_ratio(step.profit_ratio),
            format_percent(step.tax_rate),
            format_amount_short(step.tax_amount),
            format_amount_short(step.net_amount),
        )?;
    }
    writeln!(
        out,
        "  Total gross {}, tax {}, net {} (effective tax {})",
        format_amount(plan.total_gross),
        format_amount(plan.total_tax),
        format_amount(plan.total_net),
        format_ratio(plan.effective_tax_rate()),
    )
}

pub fn render_dream(
    out: &mut impl Write,
    name: &str,
    target_year: i16,
    source_count: usize,
    result: &DreamGapResult,
) -> fmt::Result {
    let status = match result.status {
        DreamStatus::Past => "past",
        DreamStatus::Success => "on track",
        DreamStatus::Shortfall => "shortfall",
    };
    writeln!(out, "{} ({}): {}", name, target_year, status)?;

    match result.status {
        DreamStatus::Past => {
            writeln!(out, "  Target year has passed; cost {}", format_amount(result.future_cost))
        }
        DreamStatus::Success => {
            writeln!(
                out,
                "  Cost in {} years: {}, projected funds: {}, surplus: {}",
                result.years_until,
                format_amount(result.future_cost),
                format_amount(result.projected_total),
                format_amount(result.surplus)
            )
        }
        DreamStatus::Shortfall => {
            writeln!(
                out,
                "  Cost in {} years: {}, projected funds: {}, gap: {}",
                result.years_until,
                format_amount(result.future_cost),
                format_amount(result.projected_total),
                format_amount(result.gap)
            )?;
            writeln!(
                out,
                "  Save an extra {} per month ({} from each of {} sources)",
                format_amount(result.required_monthly_total),
                format_amount(result.required_monthly_per_source),
                source_count
            )
        }
    }
}

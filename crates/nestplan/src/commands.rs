//! Subcommand handlers
//!
//! Each handler loads what it needs from the data directory, runs the
//! planner and returns the rendered report.

use color_eyre::eyre::{Result, WrapErr, eyre};
use nestplan_core::{
    analyze_dreams, config::PlannerConfig, model::WithdrawalTarget, plan_for_holdings, plan_many,
    portfolio_series, portfolio_summary,
};

use crate::cli::Command;
use crate::data::{
    convert::{PlanSnapshot, to_snapshot},
    plan_data::PlanBook,
    storage::DataDirectory,
};
use crate::report::{self, DreamReport, GoalReport, SummaryReport};

/// Everything a command needs besides its own arguments
#[derive(Debug, Clone)]
pub struct Session {
    pub dir: DataDirectory,
    /// Plan name override; `None` uses the active plan
    pub plan: Option<String>,
    pub json: bool,
    pub current_year: i16,
}

pub fn run(command: &Command, session: &Session) -> Result<String> {
    match command {
        Command::Init { force } => init(session, *force),
        Command::Summary { years, series } => summary(session, *years, *series),
        Command::Withdraw { amount, years } => withdraw(session, *amount, *years),
        Command::Goals => goals(session),
        Command::Dream { name } => dream(session, name.as_deref()),
    }
}

fn init(session: &Session, force: bool) -> Result<String> {
    session
        .dir
        .init(&PlanBook::sample(session.current_year), force)?;
    Ok(format!(
        "Initialized {}\nEdit {} to describe your holdings.\n",
        session.dir.root().display(),
        session.dir.plans_path().display()
    ))
}

/// Load settings and the selected plan, resolved to planner input
fn load(session: &Session) -> Result<(PlanSnapshot, PlannerConfig)> {
    let config = session.dir.load_settings()?;
    let book = session.dir.load_book()?;

    let plan = book.select(session.plan.as_deref()).ok_or_else(|| {
        match session.plan.as_deref().or(book.active_plan.as_deref()) {
            Some(wanted) => eyre!(
                "Plan '{}' not found (available: {})",
                wanted,
                book.plan_names().join(", ")
            ),
            None => eyre!("No plans in {}", session.dir.plans_path().display()),
        }
    })?;

    let snapshot = to_snapshot(plan, &config)
        .wrap_err_with(|| format!("Plan '{}' is invalid", plan.name))?;
    tracing::info!(
        plan = %snapshot.name,
        holdings = snapshot.holdings.len(),
        "plan loaded"
    );
    Ok((snapshot, config))
}

fn summary(session: &Session, years: u32, with_series: bool) -> Result<String> {
    let (snapshot, config) = load(session)?;
    let summary = portfolio_summary(&snapshot.holdings, years, &config);
    let series = with_series.then(|| portfolio_series(&snapshot.holdings, years, &config));

    if session.json {
        let report = SummaryReport {
            summary: &summary,
            series: series.as_deref(),
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    let mut out = String::new();
    report::render_summary(&mut out, &snapshot, &summary)?;
    if let Some(series) = &series {
        out.push('\n');
        report::render_series(&mut out, series)?;
    }
    Ok(out)
}

fn withdraw(session: &Session, amount: f64, years: u32) -> Result<String> {
    let target = WithdrawalTarget::new(amount, years);
    target.validate()?;

    let (snapshot, config) = load(session)?;
    let plan = plan_for_holdings(&target, &snapshot.holdings, &config);
    tracing::info!(
        amount,
        years,
        feasible = plan.feasible,
        "withdrawal planned"
    );

    if session.json {
        return Ok(serde_json::to_string_pretty(&plan)?);
    }
    let mut out = String::new();
    report::render_withdrawal(&mut out, &snapshot.name, &target, &plan)?;
    Ok(out)
}

fn goals(session: &Session) -> Result<String> {
    let (snapshot, config) = load(session)?;
    let plans = plan_many(&snapshot.targets(), &snapshot.holdings, &config);

    let reports: Vec<GoalReport<'_>> = snapshot
        .withdrawals
        .iter()
        .zip(&plans)
        .map(|(goal, plan)| GoalReport {
            name: &goal.name,
            target: goal.target,
            plan,
        })
        .collect();

    if session.json {
        return Ok(serde_json::to_string_pretty(&reports)?);
    }
    if reports.is_empty() {
        return Ok(format!("Plan '{}' has no withdrawal goals.\n", snapshot.name));
    }
    let mut out = String::new();
    for goal in &reports {
        report::render_withdrawal(&mut out, goal.name, &goal.target, goal.plan)?;
        out.push('\n');
    }
    Ok(out)
}

fn dream(session: &Session, name: Option<&str>) -> Result<String> {
    let (snapshot, config) = load(session)?;

    let dreams: Vec<_> = match name {
        Some(wanted) => {
            let found: Vec<_> = snapshot
                .dreams
                .iter()
                .filter(|d| d.name == wanted)
                .cloned()
                .collect();
            if found.is_empty() {
                return Err(eyre!("Dream '{}' not found in plan '{}'", wanted, snapshot.name));
            }
            found
        }
        None => snapshot.dreams.clone(),
    };

    let results = analyze_dreams(&dreams, &snapshot.holdings, session.current_year, &config)?;

    if session.json {
        let reports: Vec<DreamReport<'_>> = dreams
            .iter()
            .zip(&results)
            .map(|(dream, result)| DreamReport {
                name: &dream.name,
                target_year: dream.target_year,
                result,
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&reports)?);
    }
    if results.is_empty() {
        return Ok(format!("Plan '{}' has no dreams.\n", snapshot.name));
    }
    let mut out = String::new();
    for (dream, result) in dreams.iter().zip(&results) {
        report::render_dream(
            &mut out,
            &dream.name,
            dream.target_year,
            dream.funding_sources.len(),
            result,
        )?;
    }
    Ok(out)
}

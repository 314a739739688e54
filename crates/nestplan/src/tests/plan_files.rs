//! Hand-written plan files through to planner results

use std::fs;

use nestplan_core::config::PlannerConfig;
use tempfile::tempdir;

use crate::cli::Command;
use crate::commands::{Session, run};
use crate::data::storage::DataDirectory;

const PLANS: &str = r#"
active_plan: Couple
plans:
  - name: Solo
    holdings:
      - name: Cash
        category: Checking
        principal: 1000.0
  - name: Couple
    holdings:
      - name: Savings A
        category: Checking
        principal: 10000.0
      - name: Savings B
        category: MoneyMarket
        principal: 90000.0
      - name: Pension
        category: Pension
        principal: 500000.0
    dreams:
      - name: House
        present_cost: 160000.0
        target_year: 2031
        funding_sources: [Savings A, Savings B]
    withdrawals:
      - name: Renovation
        amount: 95000.0
        years_from_now: 2
      - name: Too much
        amount: 150000.0
        years_from_now: 2
"#;

fn session(plan: Option<&str>) -> (tempfile::TempDir, Session) {
    let dir = tempdir().unwrap();
    let storage = DataDirectory::new(dir.path().to_path_buf());
    fs::write(storage.plans_path(), PLANS).unwrap();
    storage
        .save_settings(&PlannerConfig::default().with_inflation_rate(0.0))
        .unwrap();

    let session = Session {
        dir: storage,
        plan: plan.map(String::from),
        json: false,
        current_year: 2026,
    };
    (dir, session)
}

#[test]
fn test_active_plan_is_used_by_default() {
    let (_dir, session) = session(None);
    let out = run(
        &Command::Summary {
            years: 0,
            series: false,
        },
        &session,
    )
    .unwrap();
    assert!(out.starts_with("Plan: Couple"));
    assert!(out.contains("600,000.00"));
}

#[test]
fn test_plan_override() {
    let (_dir, session) = session(Some("Solo"));
    let out = run(
        &Command::Summary {
            years: 3,
            series: false,
        },
        &session,
    )
    .unwrap();
    assert!(out.starts_with("Plan: Solo"));
}

#[test]
fn test_dream_shortfall_split_across_sources() {
    let (_dir, session) = session(None);
    let out = run(&Command::Dream { name: None }, &session).unwrap();

    assert!(out.starts_with("House (2031): shortfall"));
    assert!(out.contains("gap: 60,000.00"));
    assert!(out.contains("Save an extra 1,000.00 per month (500.00 from each of 2 sources)"));
}

#[test]
fn test_negative_dream_cost_is_reported() {
    let (_dir, session) = session(None);
    let plans = PLANS.replace("present_cost: 160000.0", "present_cost: -50000.0");
    fs::write(session.dir.plans_path(), plans).unwrap();

    let err = run(&Command::Dream { name: None }, &session).unwrap_err();
    assert!(format!("{err:#}").contains("Invalid dream 'House'"));
}

#[test]
fn test_goals_ignore_pension() {
    let (_dir, session) = session(None);
    let out = run(&Command::Goals, &session).unwrap();

    let (renovation, too_much) = out.split_at(out.find("Too much").unwrap());
    assert!(renovation.contains("Money market"));
    assert!(renovation.contains("Checking"));
    assert!(!renovation.contains("Not feasible"));
    assert!(too_much.contains("Not feasible"));
    assert!(too_much.contains("short by 50,000.00"));
}

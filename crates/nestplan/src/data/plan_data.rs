//! Human-editable plan files
//!
//! Holdings are referenced by name in the YAML; ids are assigned when a plan
//! is converted to planner input (see [`super::convert`]).

use nestplan_core::model::AccountCategory;
use serde::{Deserialize, Serialize};

/// Every plan the user keeps, as stored in `plans.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanBook {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_plan: Option<String>,
    #[serde(default)]
    pub plans: Vec<PlanData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub holdings: Vec<HoldingData>,
    #[serde(default)]
    pub dreams: Vec<DreamData>,
    #[serde(default)]
    pub withdrawals: Vec<WithdrawalGoalData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldingData {
    pub name: String,
    pub category: AccountCategory,
    #[serde(default)]
    pub principal: f64,
    #[serde(default)]
    pub monthly_contribution: f64,
    #[serde(default)]
    pub annual_return_rate: f64,
    #[serde(default)]
    pub deposit_fee_percent: f64,
    #[serde(default)]
    pub annual_fee_percent: f64,
    /// Falls back to the category's tier rate in settings when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_allocations: Vec<SubAllocationData>,
    #[serde(default = "default_true")]
    pub include_in_net_worth: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubAllocationData {
    pub label: String,
    pub percent: f64,
    pub return_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DreamData {
    pub name: String,
    pub present_cost: f64,
    pub target_year: i16,
    /// Holding names
    #[serde(default)]
    pub funding_sources: Vec<String>,
}

/// A named "net cash at horizon" goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalGoalData {
    pub name: String,
    pub amount: f64,
    pub years_from_now: u32,
}

fn default_true() -> bool {
    true
}

impl PlanBook {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    /// Pick a plan: the requested name, else the active plan, else the first
    pub fn select(&self, name: Option<&str>) -> Option<&PlanData> {
        match name.or(self.active_plan.as_deref()) {
            Some(wanted) => self.plans.iter().find(|p| p.name == wanted),
            None => self.plans.first(),
        }
    }

    pub fn plan_names(&self) -> Vec<&str> {
        self.plans.iter().map(|p| p.name.as_str()).collect()
    }

    /// A small household plan written by `nestplan init`
    pub fn sample(current_year: i16) -> Self {
        let holding = |name: &str, category, principal, monthly, rate| HoldingData {
            name: name.to_string(),
            category,
            principal,
            monthly_contribution: monthly,
            annual_return_rate: rate,
            deposit_fee_percent: 0.0,
            annual_fee_percent: 0.0,
            tax_rate_percent: None,
            sub_allocations: Vec::new(),
            include_in_net_worth: true,
        };

        let mut brokerage = holding(
            "Brokerage",
            AccountCategory::IndependentPortfolio,
            60_000.0,
            1_000.0,
            0.0,
        );
        brokerage.annual_fee_percent = 0.2;
        brokerage.sub_allocations = vec![
            SubAllocationData {
                label: "Equities".into(),
                percent: 70.0,
                return_rate: 8.0,
            },
            SubAllocationData {
                label: "Bonds".into(),
                percent: 30.0,
                return_rate: 3.5,
            },
        ];

        let mut study = holding(
            "Study fund",
            AccountCategory::StudyFund,
            40_000.0,
            600.0,
            5.0,
        );
        study.deposit_fee_percent = 0.5;
        study.annual_fee_percent = 0.7;

        let plan = PlanData {
            name: "Household".into(),
            description: Some("Starter plan; edit plans.yaml to describe your own".into()),
            holdings: vec![
                brokerage,
                study,
                holding("Deposit", AccountCategory::Deposit, 20_000.0, 0.0, 3.0),
                holding("Checking", AccountCategory::Checking, 8_000.0, 0.0, 0.0),
                holding("Pension", AccountCategory::Pension, 150_000.0, 1_500.0, 5.0),
            ],
            dreams: vec![DreamData {
                name: "Apartment down payment".into(),
                present_cost: 150_000.0,
                target_year: current_year.saturating_add(8),
                funding_sources: vec!["Brokerage".into(), "Study fund".into()],
            }],
            withdrawals: vec![
                WithdrawalGoalData {
                    name: "Car".into(),
                    amount: 30_000.0,
                    years_from_now: 3,
                },
                WithdrawalGoalData {
                    name: "Sabbatical".into(),
                    amount: 80_000.0,
                    years_from_now: 10,
                },
            ],
        };

        Self {
            active_plan: Some(plan.name.clone()),
            plans: vec![plan],
        }
    }
}

use std::collections::HashMap;

use nestplan_core::{
    config::PlannerConfig,
    error::ValidationError,
    model::{DreamId, DreamTarget, Holding, HoldingId, SubAllocation, WithdrawalTarget},
};

use super::plan_data::{HoldingData, PlanData};

#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// A dream names a funding source that is not a holding of the plan
    HoldingNotFound { dream: String, holding: String },
    DuplicateHolding(String),
    TooManyItems(usize),
    Invalid(ValidationError),
    InvalidGoal { goal: String, source: ValidationError },
    InvalidDream { dream: String, source: ValidationError },
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::HoldingNotFound { dream, holding } => {
                write!(f, "Dream '{}' is funded by unknown holding '{}'", dream, holding)
            }
            ConvertError::DuplicateHolding(name) => {
                write!(f, "Holding name '{}' is used more than once", name)
            }
            ConvertError::TooManyItems(count) => {
                write!(f, "Plan has {} entries; at most {} are supported", count, u16::MAX)
            }
            ConvertError::Invalid(err) => write!(f, "Invalid holding: {}", err),
            ConvertError::InvalidGoal { goal, source } => {
                write!(f, "Invalid withdrawal goal '{}': {}", goal, source)
            }
            ConvertError::InvalidDream { dream, source } => {
                write!(f, "Invalid dream '{}': {}", dream, source)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<ValidationError> for ConvertError {
    fn from(err: ValidationError) -> Self {
        ConvertError::Invalid(err)
    }
}

/// A named withdrawal goal ready for the planner
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTarget {
    pub name: String,
    pub target: WithdrawalTarget,
}

/// Planner input for one plan, with names resolved to ids
#[derive(Debug, Clone)]
pub struct PlanSnapshot {
    pub name: String,
    pub holdings: Vec<Holding>,
    pub dreams: Vec<DreamTarget>,
    pub withdrawals: Vec<NamedTarget>,
}

impl PlanSnapshot {
    pub fn holding_name(&self, id: HoldingId) -> Option<&str> {
        self.holdings
            .iter()
            .find(|h| h.holding_id == id)
            .map(|h| h.name.as_str())
    }

    pub fn targets(&self) -> Vec<WithdrawalTarget> {
        self.withdrawals.iter().map(|w| w.target).collect()
    }
}

/// Convert a stored plan into validated planner input.
///
/// Ids are assigned in file order starting at 1. Holdings without an explicit
/// tax rate take the rate of their category's first withdrawal tier.
pub fn to_snapshot(data: &PlanData, config: &PlannerConfig) -> Result<PlanSnapshot, ConvertError> {
    let mut ids: HashMap<&str, HoldingId> = HashMap::with_capacity(data.holdings.len());
    let mut holdings = Vec::with_capacity(data.holdings.len());

    for (index, holding_data) in data.holdings.iter().enumerate() {
        let holding_id = HoldingId(next_id(index)?);
        if ids.insert(holding_data.name.as_str(), holding_id).is_some() {
            return Err(ConvertError::DuplicateHolding(holding_data.name.clone()));
        }
        let holding = convert_holding(holding_data, holding_id, config);
        holding.validate(config.percent_sum_tolerance)?;
        holdings.push(holding);
    }

    let dreams = data
        .dreams
        .iter()
        .enumerate()
        .map(|(index, dream)| {
            let funding_sources = dream
                .funding_sources
                .iter()
                .map(|name| {
                    ids.get(name.as_str())
                        .copied()
                        .ok_or_else(|| ConvertError::HoldingNotFound {
                            dream: dream.name.clone(),
                            holding: name.clone(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;

            let target = DreamTarget {
                dream_id: DreamId(next_id(index)?),
                name: dream.name.clone(),
                present_cost: dream.present_cost,
                target_year: dream.target_year,
                funding_sources,
            };
            target.validate().map_err(|source| ConvertError::InvalidDream {
                dream: dream.name.clone(),
                source,
            })?;
            Ok(target)
        })
        .collect::<Result<Vec<_>, ConvertError>>()?;

    let withdrawals = data
        .withdrawals
        .iter()
        .map(|goal| {
            let target = WithdrawalTarget::new(goal.amount, goal.years_from_now);
            target.validate().map_err(|source| ConvertError::InvalidGoal {
                goal: goal.name.clone(),
                source,
            })?;
            Ok(NamedTarget {
                name: goal.name.clone(),
                target,
            })
        })
        .collect::<Result<Vec<_>, ConvertError>>()?;

    Ok(PlanSnapshot {
        name: data.name.clone(),
        holdings,
        dreams,
        withdrawals,
    })
}

fn next_id(index: usize) -> Result<u16, ConvertError> {
    u16::try_from(index + 1).map_err(|_| ConvertError::TooManyItems(index + 1))
}

fn convert_holding(data: &HoldingData, holding_id: HoldingId, config: &PlannerConfig) -> Holding {
    let tax_rate_percent = data
        .tax_rate_percent
        .or_else(|| config.tax_rate_for(data.category))
        .unwrap_or(0.0);

    Holding {
        holding_id,
        name: data.name.clone(),
        category: data.category,
        principal: data.principal,
        monthly_contribution: data.monthly_contribution,
        annual_return_rate: data.annual_return_rate,
        deposit_fee_percent: data.deposit_fee_percent,
        annual_fee_percent: data.annual_fee_percent,
        tax_rate_percent,
        sub_allocations: data
            .sub_allocations
            .iter()
            .map(|s| SubAllocation {
                label: s.label.clone(),
                percent_of_holding: s.percent,
                return_rate: s.return_rate,
            })
            .collect(),
        include_in_net_worth: data.include_in_net_worth,
    }
}

use std::fmt;

use crate::model::{AccountCategory, HoldingId};

/// Input that falls outside the documented domain of a holding or target
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    NegativeAmount {
        holding: HoldingId,
        field: &'static str,
        value: f64,
    },
    PercentOutOfRange {
        holding: HoldingId,
        field: &'static str,
        value: f64,
    },
    SubAllocationSum {
        holding: HoldingId,
        total: f64,
    },
    NonPositiveTarget(f64),
    /// Horizon beyond [`crate::model::MAX_HORIZON_YEARS`]
    HorizonTooLong(u32),
    /// Dream cost that is negative or not a number
    InvalidCost(f64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NegativeAmount {
                holding,
                field,
                value,
            } => write!(f, "holding {holding:?}: {field} must be >= 0 (got {value})"),
            ValidationError::PercentOutOfRange {
                holding,
                field,
                value,
            } => write!(
                f,
                "holding {holding:?}: {field} must be between 0 and 100 (got {value})"
            ),
            ValidationError::SubAllocationSum { holding, total } => write!(
                f,
                "holding {holding:?}: sub-allocations sum to {total:.2}%, expected 100%"
            ),
            ValidationError::NonPositiveTarget(amount) => {
                write!(f, "desired net amount must be > 0 (got {amount})")
            }
            ValidationError::HorizonTooLong(years) => write!(
                f,
                "horizon of {years} years exceeds the maximum of {}",
                crate::model::MAX_HORIZON_YEARS
            ),
            ValidationError::InvalidCost(cost) => {
                write!(f, "present cost must be >= 0 (got {cost})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors related to resource lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    HoldingNotFound(HoldingId),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::HoldingNotFound(id) => write!(f, "holding {id:?} not found"),
        }
    }
}

impl std::error::Error for LookupError {}

/// Invalid planner configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    PensionTier,
    TaxRateOutOfRange {
        category: AccountCategory,
        rate: f64,
    },
    InflationOutOfRange(f64),
    NonPositiveTolerance(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::PensionTier => {
                write!(f, "pension holdings cannot appear in the withdrawal order")
            }
            ConfigError::TaxRateOutOfRange { category, rate } => {
                write!(
                    f,
                    "tax rate for {category} must be between 0 and 100 (got {rate})"
                )
            }
            ConfigError::InflationOutOfRange(rate) => {
                write!(f, "inflation rate must be greater than -100% (got {rate})")
            }
            ConfigError::NonPositiveTolerance(name) => write!(f, "{name} must be > 0"),
        }
    }
}

impl std::error::Error for ConfigError {}

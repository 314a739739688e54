//! Planning targets: cash needed at a future point, and dream purchases

use serde::{Deserialize, Serialize};

use super::ids::{DreamId, HoldingId};
use crate::error::ValidationError;

/// Longest planning horizon accepted from user input
pub const MAX_HORIZON_YEARS: u32 = 100;

/// "I need this much spendable cash this many years from now"
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WithdrawalTarget {
    pub desired_net_amount: f64,
    pub years_from_now: u32,
}

impl WithdrawalTarget {
    pub fn new(desired_net_amount: f64, years_from_now: u32) -> Self {
        Self {
            desired_net_amount,
            years_from_now,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.desired_net_amount.is_finite() || self.desired_net_amount <= 0.0 {
            return Err(ValidationError::NonPositiveTarget(self.desired_net_amount));
        }
        if self.years_from_now > MAX_HORIZON_YEARS {
            return Err(ValidationError::HorizonTooLong(self.years_from_now));
        }
        Ok(())
    }
}

/// A projected lump-sum purchase funded by one or more holdings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DreamTarget {
    pub dream_id: DreamId,
    pub name: String,
    /// Cost in today's money
    pub present_cost: f64,
    pub target_year: i16,
    #[serde(default)]
    pub funding_sources: Vec<HoldingId>,
}

impl DreamTarget {
    /// Whole years between `current_year` and the target year (may be negative)
    pub fn years_until(&self, current_year: i16) -> i32 {
        i32::from(self.target_year) - i32::from(current_year)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.present_cost.is_finite() || self.present_cost < 0.0 {
            return Err(ValidationError::InvalidCost(self.present_cost));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_horizon_is_bounded() {
        assert!(WithdrawalTarget::new(1_000.0, MAX_HORIZON_YEARS).validate().is_ok());
        assert_eq!(
            WithdrawalTarget::new(1_000.0, 200_000_000).validate(),
            Err(ValidationError::HorizonTooLong(200_000_000))
        );
    }

    #[test]
    fn test_dream_cost_must_be_non_negative() {
        let mut dream = DreamTarget {
            dream_id: DreamId(1),
            name: "Car".into(),
            present_cost: 0.0,
            target_year: 2030,
            funding_sources: vec![],
        };
        assert!(dream.validate().is_ok());

        dream.present_cost = -50_000.0;
        assert_eq!(dream.validate(), Err(ValidationError::InvalidCost(-50_000.0)));

        dream.present_cost = f64::NAN;
        assert!(dream.validate().is_err());
    }
}

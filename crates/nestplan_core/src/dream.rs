//! Dream funding gap analysis
//!
//! A dream is a future lump-sum purchase priced in today's money. Its cost
//! is escalated by inflation to the target year and compared with the
//! projected value of the holdings earmarked to pay for it.

use crate::config::PlannerConfig;
use crate::error::LookupError;
use crate::model::{DreamGapResult, DreamStatus, DreamTarget, Holding};
use crate::projection::project_future_value;

/// Compare a dream's inflated cost with its funding sources' projected value.
///
/// `current_year` is supplied by the caller. A shortfall is turned into the
/// extra monthly saving needed to close it (without growth on the extra
/// contributions), split evenly across the funding sources.
pub fn analyze_dream(
    dream: &DreamTarget,
    holdings: &[Holding],
    current_year: i16,
    config: &PlannerConfig,
) -> Result<DreamGapResult, LookupError> {
    let sources = dream
        .funding_sources
        .iter()
        .map(|id| {
            holdings
                .iter()
                .find(|h| h.holding_id == *id)
                .ok_or(LookupError::HoldingNotFound(*id))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let years_until = dream.years_until(current_year);
    if years_until <= 0 {
        return Ok(DreamGapResult {
            dream_id: dream.dream_id,
            status: DreamStatus::Past,
            years_until,
            future_cost: dream.present_cost,
            projected_total: 0.0,
            gap: dream.present_cost,
            surplus: 0.0,
            required_monthly_total: 0.0,
            required_monthly_per_source: 0.0,
        });
    }

    let years = years_until.unsigned_abs();
    let future_cost =
        dream.present_cost * (1.0 + config.inflation_rate_pct / 100.0).powi(years_until);
    let projected_total: f64 = sources
        .iter()
        .map(|h| project_future_value(h, years))
        .sum();
    let gap = future_cost - projected_total;

    if gap <= 0.0 {
        return Ok(DreamGapResult {
            dream_id: dream.dream_id,
            status: DreamStatus::Success,
            years_until,
            future_cost,
            projected_total,
            gap: 0.0,
            surplus: gap.abs(),
            required_monthly_total: 0.0,
            required_monthly_per_source: 0.0,
        });
    }

    let required_monthly_total = gap / (f64::from(years) * 12.0);
    let required_monthly_per_source = required_monthly_total / sources.len().max(1) as f64;

    Ok(DreamGapResult {
        dream_id: dream.dream_id,
        status: DreamStatus::Shortfall,
        years_until,
        future_cost,
        projected_total,
        gap,
        surplus: 0.0,
        required_monthly_total,
        required_monthly_per_source,
    })
}

/// Analyze every dream; stops at the first dangling funding source
pub fn analyze_dreams(
    dreams: &[DreamTarget],
    holdings: &[Holding],
    current_year: i16,
    config: &PlannerConfig,
) -> Result<Vec<DreamGapResult>, LookupError> {
    dreams
        .iter()
        .map(|dream| analyze_dream(dream, holdings, current_year, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HoldingBuilder;
    use crate::model::{DreamId, HoldingId};

    fn dream(present_cost: f64, target_year: i16, sources: Vec<HoldingId>) -> DreamTarget {
        DreamTarget {
            dream_id: DreamId(1),
            name: "Apartment".into(),
            present_cost,
            target_year,
            funding_sources: sources,
        }
    }

    #[test]
    fn test_past_dream_reports_full_cost() {
        let holdings = vec![HoldingBuilder::checking("C").principal(1.0).build(HoldingId(1))];
        let d = dream(50_000.0, 2020, vec![HoldingId(1)]);
        let result = analyze_dream(&d, &holdings, 2026, &PlannerConfig::default()).unwrap();
        assert_eq!(result.status, DreamStatus::Past);
        assert_eq!(result.gap, 50_000.0);
        assert_eq!(result.years_until, -6);
    }

    #[test]
    fn test_current_year_counts_as_past() {
        let d = dream(10_000.0, 2026, vec![]);
        let result = analyze_dream(&d, &[], 2026, &PlannerConfig::default()).unwrap();
        assert_eq!(result.status, DreamStatus::Past);
    }

    #[test]
    fn test_missing_source_is_lookup_error() {
        let d = dream(10_000.0, 2030, vec![HoldingId(9)]);
        let err = analyze_dream(&d, &[], 2026, &PlannerConfig::default()).unwrap_err();
        assert_eq!(err, LookupError::HoldingNotFound(HoldingId(9)));
    }

    #[test]
    fn test_surplus_is_reported() {
        let holdings = vec![
            HoldingBuilder::checking("Savings")
                .principal(200_000.0)
                .build(HoldingId(1)),
        ];
        let d = dream(100_000.0, 2031, vec![HoldingId(1)]);
        let config = PlannerConfig::default().with_inflation_rate(0.0);
        let result = analyze_dream(&d, &holdings, 2026, &config).unwrap();
        assert_eq!(result.status, DreamStatus::Success);
        assert_eq!(result.gap, 0.0);
        assert_eq!(result.surplus, 100_000.0);
    }

    #[test]
    fn test_shortfall_split_evenly() {
        let holdings = vec![
            HoldingBuilder::checking("A").principal(10_000.0).build(HoldingId(1)),
            HoldingBuilder::checking("B").principal(90_000.0).build(HoldingId(2)),
        ];
        let d = dream(160_000.0, 2031, vec![HoldingId(1), HoldingId(2)]);
        let config = PlannerConfig::default().with_inflation_rate(0.0);
        let result = analyze_dream(&d, &holdings, 2026, &config).unwrap();
        assert_eq!(result.status, DreamStatus::Shortfall);
        assert_eq!(result.gap, 60_000.0);
        assert_eq!(result.required_monthly_total, 1_000.0);
        assert_eq!(result.required_monthly_per_source, 500.0);
    }
}

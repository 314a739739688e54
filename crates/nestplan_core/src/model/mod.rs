mod holdings;
mod ids;
mod results;
mod targets;

pub use holdings::{AccountCategory, Holding, SubAllocation};
pub use ids::{DreamId, HoldingId};
pub use results::{
    AccountPool, DreamGapResult, DreamStatus, FeeBreakdown, HoldingProjection, PoolBucket,
    PortfolioSummary, ProjectionPoint, SubAllocationProjection, WithdrawalPlan, WithdrawalStep,
};
pub use targets::{DreamTarget, MAX_HORIZON_YEARS, WithdrawalTarget};

pub mod convert;
pub mod plan_data;
pub mod storage;

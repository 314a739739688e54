//! Integration tests for the nestplan planning engine
//!
//! Tests are organized by topic:
//! - `projection` - Future-value growth, fees and sub-allocations
//! - `withdrawal` - Pool building and tax-ordered withdrawal plans
//! - `dream` - Dream funding gap analysis
//! - `builder_dsl` - Holding builder presets and end-to-end flows

mod builder_dsl;
mod projection;

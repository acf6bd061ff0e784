//! Subnet planning logic.
//!
//! - [`planner`] - VLSM allocation of child subnets inside a parent network

mod planner;

// Re-export public types
pub use planner::{Planner, SubnetPlan, SubnetRequest, UnreservedRange};

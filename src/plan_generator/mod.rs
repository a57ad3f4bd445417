//! Plan generation module
//!
//! Writes dispatch-ready markdown plans for parallel group execution.

mod group_plans;

pub use group_plans::*;

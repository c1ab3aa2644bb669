//! CLI command implementations for weavekit.
//!
//! Available commands:
//! - **plan**: Resolve an insertion described in a manifest and print it
//! - **init**: Initialize a new weavekit configuration file

pub mod init;
pub mod plan;

pub use plan::{plan_insertion, run_plan, InsertionRequest, PlanConfig, PlanManifest};

//! Build orchestration.
//!
//! Decides which archives to compile, with which flags, and issues the
//! compiler invocations in order:
//! 1. ensure the output directory exists
//! 2. build the dependency archive if it is not already present
//! 3. always rebuild the project archive

pub mod execute;
pub mod types;

pub use execute::Orchestrator;
pub use types::{BuildError, BuildReport, BuildStep, StepKind, StepOutcome};

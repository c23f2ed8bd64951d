//! Implementation of the build run.
//!
//! Compiles the bundled SQLite amalgamation when its archive is missing, then
//! always rebuilds `libap2p`.

use anyhow::{Context, Result};
use tracing::debug;

use ap2p_build_lib::{BuildConfig, BuildPaths, Orchestrator, ProcessInvoker};

use crate::output::print_building;

/// Execute the build.
///
/// The library root comes from `AP2P_LIB_DIR` (default `./lib`). Compiler
/// failures only produce an error when `--strict` is among `flags`.
pub fn cmd_build(flags: &[String]) -> Result<()> {
  let config = BuildConfig::from_args(flags);
  let paths = BuildPaths::current();

  debug!(lib_dir = %paths.lib_dir().display(), "resolved library root");

  let invoker = ProcessInvoker::new().with_passthrough(true);
  let orchestrator = Orchestrator::new(paths, invoker);

  let report = orchestrator
    .run(&config, |step| print_building(&step.to_string()))
    .context("Build failed")?;

  debug!(
    steps = report.steps.len(),
    dependency_cached = report.dependency_cached,
    success = report.is_success(),
    "build finished"
  );

  Ok(())
}

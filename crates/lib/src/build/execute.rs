//! Sequential execution of build steps.

use std::fs;

use tracing::{debug, info, warn};

use crate::build::types::{BuildError, BuildReport, BuildStep, StepOutcome};
use crate::config::BuildConfig;
use crate::invoke::Invoker;
use crate::platform::BuildPaths;

/// Issues compiler invocations for one library root.
///
/// Outside strict mode no failure is fatal: directory, spawn and compiler
/// failures are logged and the run carries on, so `run` only returns `Err`
/// when `config.strict` is set.
pub struct Orchestrator<I> {
  paths: BuildPaths,
  invoker: I,
}

impl<I: Invoker> Orchestrator<I> {
  pub fn new(paths: BuildPaths, invoker: I) -> Self {
    Self { paths, invoker }
  }

  /// Run the build.
  ///
  /// `on_step` is called with each step right before its compiler is invoked.
  pub fn run(&self, config: &BuildConfig, mut on_step: impl FnMut(&BuildStep)) -> Result<BuildReport, BuildError> {
    info!(
      compiler = %config.compiler,
      profile = %config.optimization_flag,
      ext = %config.output_extension,
      strict = config.strict,
      "starting build"
    );

    self.ensure_build_dir(config)?;

    let mut report = BuildReport::default();

    let dependency = BuildStep::dependency(config, &self.paths);
    if dependency.output.is_file() {
      debug!(path = %dependency.output.display(), "dependency archive present, skipping");
      report.dependency_cached = true;
    } else {
      on_step(&dependency);
      report.steps.push(self.execute(&dependency, config)?);
    }

    let project = BuildStep::project(config, &self.paths);
    on_step(&project);
    report.steps.push(self.execute(&project, config)?);

    Ok(report)
  }

  fn ensure_build_dir(&self, config: &BuildConfig) -> Result<(), BuildError> {
    let path = self.paths.build_dir();

    match fs::create_dir_all(&path) {
      Ok(()) => Ok(()),
      Err(source) if config.strict => Err(BuildError::CreateDir { path, source }),
      Err(e) => {
        warn!(path = %path.display(), error = %e, "failed to create build directory, continuing");
        Ok(())
      }
    }
  }

  fn execute(&self, step: &BuildStep, config: &BuildConfig) -> Result<StepOutcome, BuildError> {
    debug!(kind = %step.kind, command = ?step.command, "invoking compiler");

    let outcome = |exit_code: Option<i32>| StepOutcome {
      kind: step.kind,
      output: step.output.clone(),
      exit_code,
    };

    let exit_code = match self.invoker.invoke(&step.command) {
      Ok(invocation) => invocation.exit_code,
      Err(source) if config.strict => {
        return Err(BuildError::Invoke { kind: step.kind, source });
      }
      Err(e) => {
        warn!(kind = %step.kind, error = %e, "could not run compiler, continuing");
        return Ok(outcome(None));
      }
    };

    if exit_code != Some(0) {
      if config.strict {
        return Err(BuildError::CompilerFailed {
          kind: step.kind,
          output: step.output.clone(),
          code: exit_code,
        });
      }
      warn!(kind = %step.kind, code = ?exit_code, "compiler exited with failure, continuing");
    } else {
      info!(kind = %step.kind, path = %step.output.display(), "built");
    }

    Ok(outcome(exit_code))
  }
}

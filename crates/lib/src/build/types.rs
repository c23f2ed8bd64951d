//! Types for build steps and their outcomes.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::{BuildConfig, CrossTarget};
use crate::consts::{DEPENDENCY_PROFILE, WARNING_FLAGS};
use crate::invoke::InvokeError;
use crate::platform::BuildPaths;

/// Which archive a step produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
  /// The bundled SQLite amalgamation, built once per output directory.
  Dependency,
  /// The project's own library, rebuilt on every run.
  Project,
}

impl fmt::Display for StepKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      StepKind::Dependency => write!(f, "dependency archive"),
      StepKind::Project => write!(f, "project archive"),
    }
  }
}

/// A single compiler invocation the orchestrator has decided to issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStep {
  pub kind: StepKind,
  pub source: PathBuf,
  pub output: PathBuf,
  /// Full command line, compiler first.
  pub command: Vec<String>,
  pub release: bool,
  pub cross_target: Option<CrossTarget>,
}

impl BuildStep {
  /// `<cc> -c -Os sqlite3.c -o libsqlite3.<ext>`
  pub fn dependency(config: &BuildConfig, paths: &BuildPaths) -> Self {
    let source = paths.dependency_source();
    let output = paths.dependency_archive(&config.output_extension);

    let command = vec![
      config.compiler.clone(),
      "-c".to_string(),
      DEPENDENCY_PROFILE.to_string(),
      source.display().to_string(),
      "-o".to_string(),
      output.display().to_string(),
    ];

    Self {
      kind: StepKind::Dependency,
      source,
      output,
      command,
      // The dependency profile never follows --release.
      release: false,
      cross_target: config.cross_target,
    }
  }

  /// `<cc> <profile> -Wall -Wextra -c libap2p.c -o libap2p.<ext>`
  pub fn project(config: &BuildConfig, paths: &BuildPaths) -> Self {
    let source = paths.project_source();
    let output = paths.project_archive(&config.output_extension);

    let mut command = vec![config.compiler.clone(), config.optimization_flag.clone()];
    command.extend(WARNING_FLAGS.iter().map(|flag| flag.to_string()));
    command.extend([
      "-c".to_string(),
      source.display().to_string(),
      "-o".to_string(),
      output.display().to_string(),
    ]);

    Self {
      kind: StepKind::Project,
      source,
      output,
      command,
      release: config.release,
      cross_target: config.cross_target,
    }
  }
}

/// Progress text following the word "Building".
impl fmt::Display for BuildStep {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.source.display())?;
    if self.release {
      write!(f, " in release mode")?;
    }
    if let Some(target) = self.cross_target {
      write!(f, " for {}", target)?;
    }
    Ok(())
  }
}

/// What happened to an issued step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
  pub kind: StepKind,
  pub output: PathBuf,
  /// `None` if the compiler could not be spawned or was killed by a signal.
  pub exit_code: Option<i32>,
}

impl StepOutcome {
  pub fn success(&self) -> bool {
    self.exit_code == Some(0)
  }
}

/// Summary of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
  /// Issued steps, in order.
  pub steps: Vec<StepOutcome>,
  /// The dependency archive already existed, so its step was not issued.
  pub dependency_cached: bool,
}

impl BuildReport {
  pub fn invoked(&self, kind: StepKind) -> bool {
    self.steps.iter().any(|s| s.kind == kind)
  }

  pub fn is_success(&self) -> bool {
    self.steps.iter().all(StepOutcome::success)
  }
}

/// Errors that end a run. Only raised in strict mode.
#[derive(Debug, Error)]
pub enum BuildError {
  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: std::io::Error },

  #[error("could not run compiler for {kind}: {source}")]
  Invoke { kind: StepKind, source: InvokeError },

  #[error("compiler exited with code {code:?} while building {}", output.display())]
  CompilerFailed {
    kind: StepKind,
    output: PathBuf,
    code: Option<i32>,
  },
}

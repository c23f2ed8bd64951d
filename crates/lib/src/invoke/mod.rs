//! Compiler invocation seam.
//!
//! The orchestrator only ever talks to an [`Invoker`], so the decision logic
//! can run against a recording fake instead of spawning real processes.

mod process;

use std::io;

use thiserror::Error;

pub use process::ProcessInvoker;

/// Errors raised before a command produced an exit status.
#[derive(Debug, Error)]
pub enum InvokeError {
  #[error("empty command line")]
  EmptyCommand,

  #[error("failed to spawn {program}: {source}")]
  Spawn { program: String, source: io::Error },
}

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
  pub stdout: String,
  pub stderr: String,
  /// `None` when the process was terminated by a signal.
  pub exit_code: Option<i32>,
}

impl Invocation {
  pub fn success(&self) -> bool {
    self.exit_code == Some(0)
  }
}

/// Runs a command line (program followed by its arguments) to completion.
pub trait Invoker {
  fn invoke(&self, command: &[String]) -> Result<Invocation, InvokeError>;
}

impl<T: Invoker + ?Sized> Invoker for &T {
  fn invoke(&self, command: &[String]) -> Result<Invocation, InvokeError> {
    (**self).invoke(command)
  }
}

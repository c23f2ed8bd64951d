//! Real process execution through `std::process`.

use std::io::{self, Write};
use std::process::Command;

use tracing::debug;

use super::{Invocation, InvokeError, Invoker};

/// Spawns the command and blocks until it exits.
///
/// Output is captured for logging. With `passthrough` enabled the raw bytes
/// are then written to this process's stdout and stderr, so compiler
/// diagnostics reach the user byte for byte whatever their encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessInvoker {
  passthrough: bool,
}

impl ProcessInvoker {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_passthrough(mut self, passthrough: bool) -> Self {
    self.passthrough = passthrough;
    self
  }
}

impl Invoker for ProcessInvoker {
  fn invoke(&self, command: &[String]) -> Result<Invocation, InvokeError> {
    let (program, args) = command.split_first().ok_or(InvokeError::EmptyCommand)?;

    debug!(program = %program, args = ?args, "spawning process");

    let output = Command::new(program)
      .args(args)
      .output()
      .map_err(|source| InvokeError::Spawn {
        program: program.clone(),
        source,
      })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !stderr.is_empty() {
      debug!(stderr = %stderr, "command stderr");
    }
    if !stdout.is_empty() {
      debug!(stdout = %stdout, "command stdout");
    }

    if self.passthrough {
      forward(io::stdout().lock(), &output.stdout);
      forward(io::stderr().lock(), &output.stderr);
    }

    Ok(Invocation {
      stdout,
      stderr,
      exit_code: output.status.code(),
    })
  }
}

/// Copy captured output to `dst`. A closed pipe is not worth aborting a build for.
fn forward(mut dst: impl Write, bytes: &[u8]) {
  if bytes.is_empty() {
    return;
  }
  if let Err(e) = dst.write_all(bytes).and_then(|()| dst.flush()) {
    debug!(error = %e, "could not forward command output");
  }
}

//! Test utilities for ap2p-build-lib.
//!
//! Cross-platform shell helpers plus a recording [`Invoker`] that stands in
//! for the compiler.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use crate::invoke::{Invocation, InvokeError, Invoker};

/// Returns a command line that runs `script` through the platform shell.
#[cfg(unix)]
pub fn shell_cmd(script: &str) -> Vec<String> {
  vec!["/bin/sh".to_string(), "-c".to_string(), script.to_string()]
}

#[cfg(windows)]
pub fn shell_cmd(script: &str) -> Vec<String> {
  vec!["cmd.exe".to_string(), "/C".to_string(), script.to_string()]
}

#[derive(Debug, Clone, Copy)]
enum Behavior {
  /// Exit with the code, writing the `-o` target when it is zero.
  Exit(i32),
  /// Fail as if the compiler binary were missing.
  Unspawnable,
}

/// Fake compiler that records every command line it receives.
#[derive(Debug)]
pub struct RecordingInvoker {
  calls: RefCell<Vec<Vec<String>>>,
  behavior: Behavior,
}

impl RecordingInvoker {
  /// Succeeds and creates the file named after `-o`, like a real compiler.
  pub fn new() -> Self {
    Self::exiting_with(0)
  }

  pub fn exiting_with(code: i32) -> Self {
    Self {
      calls: RefCell::new(Vec::new()),
      behavior: Behavior::Exit(code),
    }
  }

  pub fn unspawnable() -> Self {
    Self {
      calls: RefCell::new(Vec::new()),
      behavior: Behavior::Unspawnable,
    }
  }

  pub fn calls(&self) -> Vec<Vec<String>> {
    self.calls.borrow().clone()
  }

  /// Number of recorded commands whose `-o` target ends with `suffix`.
  pub fn calls_producing(&self, suffix: &str) -> usize {
    self
      .calls
      .borrow()
      .iter()
      .filter(|cmd| output_of(cmd).is_some_and(|out| out.to_string_lossy().ends_with(suffix)))
      .count()
  }
}

fn output_of(command: &[String]) -> Option<PathBuf> {
  command
    .iter()
    .position(|arg| arg == "-o")
    .and_then(|i| command.get(i + 1))
    .map(PathBuf::from)
}

impl Invoker for RecordingInvoker {
  fn invoke(&self, command: &[String]) -> Result<Invocation, InvokeError> {
    self.calls.borrow_mut().push(command.to_vec());

    match self.behavior {
      Behavior::Unspawnable => Err(InvokeError::Spawn {
        program: command.first().cloned().unwrap_or_default(),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
      }),
      Behavior::Exit(code) => {
        if code == 0 {
          if let Some(out) = output_of(command) {
            fs::write(out, b"!<arch>\n").unwrap();
          }
        }
        Ok(Invocation {
          stdout: String::new(),
          stderr: if code == 0 { String::new() } else { "error: compilation failed".to_string() },
          exit_code: Some(code),
        })
      }
    }
  }
}

//! Build configuration derived from command-line tokens.
//!
//! Tokens are matched whole and exactly against the recognized flags. Order
//! does not matter and anything unrecognized is ignored.

use std::fmt;

use crate::consts::{
  DEBUG_PROFILE, NATIVE_COMPILER, RELEASE_FLAG, RELEASE_PROFILE, STRICT_FLAG, WINDOWS_ARCHIVE_EXT, WINDOWS_COMPILER,
  WINDOWS_TARGET_FLAG,
};
use crate::platform::native_archive_extension;

/// Platforms reachable through a cross-compiling toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossTarget {
  /// `x86_64-pc-windows-gnu` through MinGW-w64
  Windows,
}

impl CrossTarget {
  pub fn compiler(&self) -> &'static str {
    match self {
      Self::Windows => WINDOWS_COMPILER,
    }
  }

  pub fn archive_extension(&self) -> &'static str {
    match self {
      Self::Windows => WINDOWS_ARCHIVE_EXT,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Windows => "windows",
    }
  }
}

impl fmt::Display for CrossTarget {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Immutable settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
  pub release: bool,
  pub cross_target: Option<CrossTarget>,
  pub compiler: String,
  /// Profile flag for the project archive (`-g` or `-Os`)
  pub optimization_flag: String,
  pub output_extension: String,
  /// Fail the run when a compiler cannot be spawned or exits non-zero.
  pub strict: bool,
}

impl BuildConfig {
  /// Derive the configuration from the full argument list.
  pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
    let has = |flag: &str| args.iter().any(|arg| arg.as_ref() == flag);

    let release = has(RELEASE_FLAG);
    let cross_target = has(WINDOWS_TARGET_FLAG).then_some(CrossTarget::Windows);

    let compiler = cross_target.map_or(NATIVE_COMPILER, |t| t.compiler());
    let optimization_flag = if release { RELEASE_PROFILE } else { DEBUG_PROFILE };
    let output_extension = cross_target.map_or_else(native_archive_extension, |t| t.archive_extension());

    Self {
      release,
      cross_target,
      compiler: compiler.to_string(),
      optimization_flag: optimization_flag.to_string(),
      output_extension: output_extension.to_string(),
      strict: has(STRICT_FLAG),
    }
  }
}

impl Default for BuildConfig {
  fn default() -> Self {
    Self::from_args::<&str>(&[])
  }
}

//! Filesystem layout of the library being built.

use std::path::{Path, PathBuf};

use crate::consts::{
  BUILD_DIR, DEFAULT_LIB_DIR, LIB_DIR_ENV, PROJECT_LIB_NAME, SQLITE_DIR, SQLITE_LIB_NAME, SQLITE_SOURCE,
};

/// Source and output locations, all derived from a single library root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPaths {
  lib_dir: PathBuf,
}

impl BuildPaths {
  pub fn new(lib_dir: impl Into<PathBuf>) -> Self {
    Self { lib_dir: lib_dir.into() }
  }

  /// Resolve the library root from `AP2P_LIB_DIR`, falling back to `./lib`.
  pub fn current() -> Self {
    if let Ok(path) = std::env::var(LIB_DIR_ENV) {
      return Self::new(path);
    }

    Self::new(DEFAULT_LIB_DIR)
  }

  pub fn lib_dir(&self) -> &Path {
    &self.lib_dir
  }

  pub fn sqlite_dir(&self) -> PathBuf {
    self.lib_dir.join(SQLITE_DIR)
  }

  /// Output directory holding both archives
  pub fn build_dir(&self) -> PathBuf {
    self.lib_dir.join(BUILD_DIR)
  }

  pub fn dependency_source(&self) -> PathBuf {
    self.sqlite_dir().join(SQLITE_SOURCE)
  }

  pub fn project_source(&self) -> PathBuf {
    self.lib_dir.join(format!("{PROJECT_LIB_NAME}.c"))
  }

  pub fn dependency_archive(&self, ext: &str) -> PathBuf {
    self.build_dir().join(format!("{SQLITE_LIB_NAME}.{ext}"))
  }

  pub fn project_archive(&self, ext: &str) -> PathBuf {
    self.build_dir().join(format!("{PROJECT_LIB_NAME}.{ext}"))
  }
}

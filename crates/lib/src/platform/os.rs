use crate::consts::{UNIX_ARCHIVE_EXT, WINDOWS_ARCHIVE_EXT};

/// Host operating systems the native toolchain can run on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
  Linux,
  MacOs,
  Windows,
}

impl Os {
  /// Detect the current operating system at runtime
  pub fn current() -> Option<Self> {
    match std::env::consts::OS {
      "linux" => Some(Self::Linux),
      "macos" => Some(Self::MacOs),
      "windows" => Some(Self::Windows),
      _ => None,
    }
  }

  /// Static archive extension produced by a native compiler on this OS
  pub fn archive_extension(&self) -> &'static str {
    match self {
      Self::Windows => WINDOWS_ARCHIVE_EXT,
      Self::Linux | Self::MacOs => UNIX_ARCHIVE_EXT,
    }
  }
}

/// Archive extension for native builds on the current host.
///
/// Unknown hosts are assumed to be Unix-like.
pub fn native_archive_extension() -> &'static str {
  Os::current().map_or(UNIX_ARCHIVE_EXT, |os| os.archive_extension())
}

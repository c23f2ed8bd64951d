//! Fixed names and compiler settings shared across the crate.

/// Environment variable overriding the library root directory.
pub const LIB_DIR_ENV: &str = "AP2P_LIB_DIR";

/// Library root used when `AP2P_LIB_DIR` is unset, relative to the working directory.
pub const DEFAULT_LIB_DIR: &str = "lib";

pub const RELEASE_FLAG: &str = "--release";
pub const WINDOWS_TARGET_FLAG: &str = "--target=x86_64-pc-windows-gnu";
pub const STRICT_FLAG: &str = "--strict";

pub const NATIVE_COMPILER: &str = "gcc";
pub const WINDOWS_COMPILER: &str = "x86_64-w64-mingw32-gcc";

pub const DEBUG_PROFILE: &str = "-g";
pub const RELEASE_PROFILE: &str = "-Os";

/// The bundled dependency is always size-optimized, whatever the project profile.
pub const DEPENDENCY_PROFILE: &str = "-Os";

pub const WARNING_FLAGS: [&str; 2] = ["-Wall", "-Wextra"];

pub const UNIX_ARCHIVE_EXT: &str = "a";
pub const WINDOWS_ARCHIVE_EXT: &str = "lib";

pub const SQLITE_DIR: &str = "sqlite3";
pub const SQLITE_SOURCE: &str = "sqlite3.c";
pub const SQLITE_LIB_NAME: &str = "libsqlite3";

pub const PROJECT_LIB_NAME: &str = "libap2p";

pub const BUILD_DIR: &str = "build";

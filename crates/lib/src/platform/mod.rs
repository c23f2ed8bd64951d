pub mod os;
pub mod paths;

pub use os::{Os, native_archive_extension};
pub use paths::BuildPaths;

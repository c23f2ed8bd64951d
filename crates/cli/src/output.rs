//! CLI output formatting.

use std::io::{self, Write};

use owo_colors::{OwoColorize, Stream};

pub const BUILDING: &str = "Building";

pub fn format_building(message: &str) -> String {
  format!(
    "{} {}",
    BUILDING.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  )
}

pub fn write_building(mut out: impl Write, message: &str) -> io::Result<()> {
  writeln!(out, "{}", format_building(message))?;
  out.flush()
}

/// Progress line for a compiler invocation about to start.
///
/// A closed stdout (e.g. piped into `head`) must not abort the build.
pub fn print_building(message: &str) {
  let _ = write_building(io::stdout().lock(), message);
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    "error:".if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

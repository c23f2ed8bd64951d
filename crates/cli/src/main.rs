use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

/// ap2p-build - compile libap2p and its bundled SQLite into static archives
#[derive(Parser)]
#[command(name = "ap2p-build")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Build flags: --release, --target=x86_64-pc-windows-gnu, --strict.
  /// Unrecognized flags are ignored.
  #[arg(num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true, value_name = "FLAGS")]
  flags: Vec<String>,
}

fn main() {
  // Diagnostics go to stderr; stdout carries only progress lines and compiler output.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .with_ansi(std::io::stderr().is_terminal())
    .without_time()
    .init();

  let cli = Cli::parse();

  if let Err(e) = cmd::cmd_build(&cli.flags) {
    output::print_error(&format!("{e:#}"));
    std::process::exit(1);
  }
}

//! ap2p-build-lib: build orchestration for the ap2p C library
//!
//! Compiles the bundled SQLite amalgamation and `libap2p.c` into static
//! archives by invoking a C compiler:
//! - `config`: flags to compiler, profile and archive extension
//! - `platform`: host detection and the source/output layout
//! - `invoke`: the compiler invocation seam and its process implementation
//! - `build`: the orchestrator deciding what to compile

pub mod build;
pub mod config;
pub mod consts;
pub mod invoke;
pub mod platform;
pub mod util;

pub use build::{BuildError, BuildReport, BuildStep, Orchestrator, StepKind};
pub use config::{BuildConfig, CrossTarget};
pub use invoke::{Invocation, InvokeError, Invoker, ProcessInvoker};
pub use platform::BuildPaths;

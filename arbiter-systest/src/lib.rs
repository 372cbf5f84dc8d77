//! System-test harness for the arbiter workspace.
//!
//! Rebuilds the workspace, launches the produced binaries as independent
//! OS processes, and hands the caller a kill-on-drop handle for each one.
//! Pass/fail judgement is the caller's, made from exit codes; the harness
//! only starts, feeds arguments to, and reaps processes.

mod config;
mod errors;
mod harness;
mod process;

pub use config::{BuildMode, HarnessOptions};
pub use errors::{Result, SystestError};
pub use harness::SystestHarness;
pub use process::ProcessHandle;

use std::path::Path;

use tokio::process::Command;
use tracing::{debug, error, info};

use crate::config::{BuildMode, HarnessConfig, HarnessOptions};
use crate::errors::{Result, SystestError};
use crate::process::ProcessHandle;

/// System-test harness: one instance per test scenario, constructed over a
/// freshly compiled workspace.
pub struct SystestHarness {
    config: HarnessConfig,
}

impl SystestHarness {
    /// Rebuild the workspace and resolve the harness configuration.
    ///
    /// The build runs to completion before this returns, so no launch can
    /// ever race a stale or failed build: a nonzero build status fails
    /// construction and the harness never exists.
    pub async fn new(options: HarnessOptions) -> Result<Self> {
        let config = HarnessConfig::resolve(options);
        info!("project root is {}", config.project_root.display());

        rebuild(&config).await?;

        Ok(SystestHarness { config })
    }

    /// Launch `binary_name` from the build output directory.
    ///
    /// Arguments are handed to the child as a literal list. Nothing is
    /// shell-interpreted, so an argument containing spaces arrives as one
    /// argument. The returned handle owns the child and kills it when
    /// dropped; a test that bails early cannot leak the process.
    pub fn run_binary(&self, binary_name: &str, arguments: &[&str]) -> Result<ProcessHandle> {
        let file_name = format!("{}{}", binary_name, self.config.exe_suffix);
        let binary = self.config.binaries_dir.join(&file_name);
        if !binary.is_file() {
            error!(
                "cannot find file {} in directory {}",
                file_name,
                self.config.binaries_dir.display()
            );
            return Err(SystestError::BinaryNotFound {
                name: file_name,
                dir: self.config.binaries_dir.clone(),
            });
        }

        debug!("starting binary `{}` with arguments: {:?}", binary.display(), arguments);
        let mut command = Command::new(&binary);
        command.args(arguments).kill_on_drop(true);
        if self.config.verbose {
            // Additive only: the child keeps the full inherited environment.
            command.env("RUST_BACKTRACE", "1");
        }

        let child = command.spawn()?;
        Ok(ProcessHandle::new(binary_name.to_string(), child))
    }

    /// Directory binaries are resolved from (`target/<profile>`).
    pub fn binaries_dir(&self) -> &Path {
        &self.config.binaries_dir
    }
}

/// Run a workspace build for the configured profile with the project root
/// as working directory, capturing both output streams.
///
/// The captured streams are logged for post-mortem reading only, never
/// parsed: the exit status alone decides success.
async fn rebuild(config: &HarnessConfig) -> Result<()> {
    let mut command = Command::new("cargo");
    command.arg("build");
    if config.build_mode == BuildMode::Release {
        command.arg("--release");
    }

    let output = command.current_dir(&config.project_root).output().await?;

    if !output.status.success() {
        debug!("build stdout:\n{}", String::from_utf8_lossy(&output.stdout));
        error!("build stderr:\n{}", String::from_utf8_lossy(&output.stderr));
        return Err(SystestError::BuildFailed {
            status: output.status,
        });
    }

    debug!("rebuild finished successfully");
    Ok(())
}

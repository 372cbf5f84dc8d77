use std::path::{Path, PathBuf};

/// Build profile targeted by the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    #[default]
    Debug,
    Release,
}

impl BuildMode {
    /// Name of the profile directory under `target/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            BuildMode::Debug => "debug",
            BuildMode::Release => "release",
        }
    }
}

/// Caller-supplied harness settings.
///
/// Everything the harness needs is passed in here explicitly; nothing is
/// read from logger state or the caller's working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct HarnessOptions {
    pub build_mode: BuildMode,

    /// When set, launched binaries get `RUST_BACKTRACE=1` so a crashing
    /// child leaves usable diagnostics behind.
    pub verbose: bool,
}

/// Resolved, immutable harness configuration.
#[derive(Debug, Clone)]
pub(crate) struct HarnessConfig {
    pub project_root: PathBuf,
    pub build_mode: BuildMode,
    pub exe_suffix: &'static str,
    pub binaries_dir: PathBuf,
    pub verbose: bool,
}

impl HarnessConfig {
    /// Resolve the configuration for the workspace containing this crate.
    ///
    /// The project root is anchored to this crate's own manifest
    /// directory, so tests behave identically no matter where they are
    /// invoked from.
    pub fn resolve(options: HarnessOptions) -> Self {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let project_root = manifest_dir.parent().unwrap_or(manifest_dir).to_path_buf();
        let binaries_dir = project_root
            .join("target")
            .join(options.build_mode.dir_name());

        HarnessConfig {
            project_root,
            build_mode: options.build_mode,
            exe_suffix: std::env::consts::EXE_SUFFIX,
            binaries_dir,
            verbose: options.verbose,
        }
    }
}

#[cfg(test)]
mod tests;

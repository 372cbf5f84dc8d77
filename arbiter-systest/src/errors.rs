use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, SystestError>;

/// Errors raised by the harness itself.
///
/// Exit codes and wait timeouts of launched processes are test data for
/// the caller to assert on; they never appear here.
#[derive(Debug, Error)]
pub enum SystestError {
    /// The workspace build exited with a nonzero status. No binary can be
    /// trusted to be current, so the harness refuses to construct.
    #[error("workspace build failed with {status}")]
    BuildFailed { status: ExitStatus },

    /// The requested binary does not exist under the build output
    /// directory: a name typo, or the build did not produce it.
    #[error("cannot find binary `{name}` in directory {}", .dir.display())]
    BinaryNotFound { name: String, dir: PathBuf },

    /// Spawn or process I/O failure, surfaced as reported by the OS.
    #[error(transparent)]
    Spawn(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_not_found_names_the_search_dir() {
        let err = SystestError::BinaryNotFound {
            name: "missing-peer".to_string(),
            dir: PathBuf::from("/tmp/target/debug"),
        };
        let message = err.to_string();
        assert!(message.contains("missing-peer"));
        assert!(message.contains("/tmp/target/debug"));
    }
}

use std::process::ExitStatus;
use std::time::Duration;

use tokio::process::Child;
use tokio::time::timeout;
use tracing::debug;

use crate::errors::Result;

/// A live, caller-owned process.
///
/// A handle is either running or gone: [`wait_timeout`](Self::wait_timeout)
/// observes the child exiting on its own, [`terminate`](Self::terminate)
/// consumes the handle and kills the child. The child is spawned
/// kill-on-drop, so a handle abandoned on a failure path still takes its
/// process down with it.
#[derive(Debug)]
pub struct ProcessHandle {
    name: String,
    child: Child,
}

impl ProcessHandle {
    pub(crate) fn new(name: String, child: Child) -> Self {
        ProcessHandle { name, child }
    }

    /// Base name of the binary this handle was launched from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// OS process id, if the process has not been reaped yet.
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Wait for the process to exit on its own, bounded by `limit`.
    ///
    /// Expiry returns `Ok(None)` and leaves the process running: a
    /// condition for the caller to assert on, not a harness failure.
    pub async fn wait_timeout(&mut self, limit: Duration) -> Result<Option<ExitStatus>> {
        match timeout(limit, self.child.wait()).await {
            Ok(status) => Ok(Some(status?)),
            Err(_) => {
                debug!("{} still running after {:?}", self.name, limit);
                Ok(None)
            }
        }
    }

    /// Exit status if the process has already finished, without blocking.
    pub fn try_status(&mut self) -> Result<Option<ExitStatus>> {
        Ok(self.child.try_wait()?)
    }

    /// Kill the process and reap it, consuming the handle.
    ///
    /// Safe to call on a process that already exited.
    pub async fn terminate(mut self) -> Result<()> {
        match self.child.start_kill() {
            Ok(()) => {}
            // InvalidInput: the child was already reaped by a wait call.
            Err(e) if e.kind() == std::io::ErrorKind::InvalidInput => {}
            Err(e) => return Err(e.into()),
        }
        self.child.wait().await?;
        debug!("terminated {}", self.name);
        Ok(())
    }
}

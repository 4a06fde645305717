use std::fmt;

use tokio_util::sync::CancellationToken;

/// Why a graceful shutdown was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// SIGINT or Ctrl+C.
    Interrupt,
    /// SIGTERM.
    Terminate,
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interrupt => f.write_str("SIGINT"),
            Self::Terminate => f.write_str("SIGTERM"),
        }
    }
}

/// Process-wide request to begin graceful shutdown.
///
/// Clones share one underlying token: the signal adapter triggers it, the lifecycle
/// controller waits on it. Triggering is idempotent.
#[derive(Clone, Default)]
pub struct ShutdownSignal {
    token: CancellationToken,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests shutdown.
    ///
    /// # Returns
    /// - `true` - This call started the shutdown
    /// - `false` - Shutdown had already been requested; nothing changes
    pub fn trigger(&self, reason: ShutdownReason) -> bool {
        if self.token.is_cancelled() {
            tracing::info!("{} signal received while already shutting down", reason);
            return false;
        }

        tracing::info!("{} signal received. Closing server...", reason);
        self.token.cancel();
        true
    }

    #[cfg(test)]
    pub fn is_triggered(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Completes once shutdown has been requested.
    pub async fn wait(&self) {
        self.token.cancelled().await;
    }

    /// Owned variant of [`wait`](Self::wait) for futures that must be `'static`.
    pub async fn wait_owned(self) {
        self.token.cancelled_owned().await;
    }
}

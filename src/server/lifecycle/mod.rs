//! Process lifecycle sequencing.
//!
//! The [`LifecycleController`] drives the server through a fixed sequence of states:
//!
//! ```text
//! Starting -> Connecting -> Listening -> Draining -> Stopped(Success)
//!                  |             |
//!                  |             +-- unhandled server error --> Stopped(Failure)
//!                  +-- connect or bind failure ---------------> Stopped(Failure)
//! ```
//!
//! The database is always connected before the listener is bound, and disconnected
//! only after the listener has drained. Shutdown is requested through a
//! [`ShutdownSignal`](shutdown::ShutdownSignal), normally fed by [`signal::install`].

pub mod shutdown;
pub mod signal;

use std::{future::IntoFuture, net::SocketAddr, process::ExitCode, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::watch, time::timeout};

use crate::server::{
    database::DatabaseLifecycle, error::startup::StartupError,
    lifecycle::shutdown::ShutdownSignal,
};

/// Final outcome of a server run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Clean shutdown after a drain; process exit code 0.
    Success,
    /// Startup failed; process exit code 1.
    Failure,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Observable state of the server process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Starting,
    Connecting,
    /// Accepting connections on the contained local address.
    Listening(SocketAddr),
    Draining,
    Stopped(ExitStatus),
}

/// Sequences database connection, HTTP serving and graceful shutdown.
///
/// `run` consumes the controller, so the database is connected and disconnected at
/// most once per controller.
pub struct LifecycleController<D: DatabaseLifecycle> {
    database: D,
    addr: SocketAddr,
    drain_timeout: Duration,
    state: watch::Sender<LifecycleState>,
}

impl<D: DatabaseLifecycle> LifecycleController<D> {
    /// Creates a controller in the `Starting` state.
    ///
    /// # Arguments
    /// - `database` - Database client the controller will own
    /// - `addr` - Address to bind the HTTP listener to
    /// - `drain_timeout` - Upper bound on waiting for in-flight requests at shutdown
    pub fn new(database: D, addr: SocketAddr, drain_timeout: Duration) -> Self {
        let (state, _) = watch::channel(LifecycleState::Starting);

        Self {
            database,
            addr,
            drain_timeout,
            state,
        }
    }

    /// Receiver for observing state transitions.
    pub fn subscribe(&self) -> watch::Receiver<LifecycleState> {
        self.state.subscribe()
    }

    /// Runs the full lifecycle until the server stops.
    ///
    /// Connects the database, builds the router with `app` from the connected
    /// handle, serves it until `shutdown` fires, drains, then disconnects.
    ///
    /// # Arguments
    /// - `app` - Builds the application router from the connected database handle
    /// - `shutdown` - Signal that starts the graceful drain
    ///
    /// # Returns
    /// - `ExitStatus::Success` - Drained and stopped after a shutdown request
    /// - `ExitStatus::Failure` - Connect failed, or an unhandled startup error occurred
    pub async fn run<F>(self, app: F, shutdown: ShutdownSignal) -> ExitStatus
    where
        F: FnOnce(D::Handle) -> Router + Send,
    {
        self.transition(LifecycleState::Connecting);
        tracing::info!("Attempting to connect to the database...");

        let handle = match self.database.connect().await {
            Ok(handle) => handle,
            Err(e) => {
                tracing::error!("Error connecting to the database: {}", e);
                return self.stop(ExitStatus::Failure);
            }
        };
        tracing::info!("Connected to the database successfully");

        let status = match self.serve(app(handle), &shutdown).await {
            Ok(()) => ExitStatus::Success,
            Err(e) => {
                tracing::error!("Error occurred: {}", e);
                ExitStatus::Failure
            }
        };

        match self.database.disconnect().await {
            Ok(()) => tracing::info!("Disconnected from the database"),
            Err(e) => tracing::error!("Error disconnecting from the database: {}", e),
        }

        self.stop(status)
    }

    /// Binds the listener and serves `router` until the drain completes.
    async fn serve(&self, router: Router, shutdown: &ShutdownSignal) -> Result<(), StartupError> {
        let bind_err = |source| StartupError::Bind {
            addr: self.addr,
            source,
        };

        let listener = TcpListener::bind(self.addr).await.map_err(bind_err)?;
        let local_addr = listener.local_addr().map_err(bind_err)?;

        self.transition(LifecycleState::Listening(local_addr));
        tracing::info!("Server running on port {}", local_addr.port());

        let server = axum::serve(listener, router)
            .with_graceful_shutdown(shutdown.clone().wait_owned())
            .into_future();
        let mut server = std::pin::pin!(server);

        tokio::select! {
            biased;

            () = shutdown.wait() => {}
            result = &mut server => return result.map_err(StartupError::Serve),
        }

        self.transition(LifecycleState::Draining);

        match timeout(self.drain_timeout, &mut server).await {
            Ok(result) => {
                result.map_err(StartupError::Serve)?;
                tracing::info!("HTTP server closed");
            }
            Err(_) => tracing::warn!(
                "HTTP server did not drain within {:?}, abandoning in-flight requests",
                self.drain_timeout
            ),
        }

        Ok(())
    }

    fn transition(&self, next: LifecycleState) {
        let previous = self.state.send_replace(next);
        tracing::debug!("Lifecycle transition {:?} -> {:?}", previous, next);
    }

    fn stop(&self, status: ExitStatus) -> ExitStatus {
        self.transition(LifecycleState::Stopped(status));
        status
    }
}

#[cfg(test)]
mod test;

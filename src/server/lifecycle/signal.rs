//! Adapter from OS termination signals to the [`ShutdownSignal`].
//!
//! SIGINT and SIGTERM share one shutdown routine. Signals arriving after the first
//! are logged and otherwise ignored; there is no forced-kill path.

use tokio::task::JoinHandle;

use crate::server::{
    error::startup::StartupError,
    lifecycle::shutdown::{ShutdownReason, ShutdownSignal},
};

/// Installs the termination signal handlers and forwards every signal to `shutdown`.
///
/// Handlers are registered before this returns, so a registration failure surfaces as
/// an error instead of a panic inside the spawned task.
///
/// # Returns
/// - `Ok(JoinHandle)` - Listener task, runs until the runtime shuts down
/// - `Err(StartupError::SignalHandler)` - The OS refused the handler registration
#[cfg(unix)]
pub fn install(shutdown: ShutdownSignal) -> Result<JoinHandle<()>, StartupError> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt()).map_err(StartupError::SignalHandler)?;
    let mut terminate = signal(SignalKind::terminate()).map_err(StartupError::SignalHandler)?;

    Ok(tokio::spawn(async move {
        loop {
            let reason = tokio::select! {
                Some(()) = interrupt.recv() => ShutdownReason::Interrupt,
                Some(()) = terminate.recv() => ShutdownReason::Terminate,
                else => break,
            };

            shutdown.trigger(reason);
        }
    }))
}

#[cfg(not(unix))]
pub fn install(shutdown: ShutdownSignal) -> Result<JoinHandle<()>, StartupError> {
    Ok(tokio::spawn(async move {
        loop {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl+C: {}", e);
                break;
            }

            shutdown.trigger(ShutdownReason::Interrupt);
        }
    }))
}

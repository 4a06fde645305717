use std::{io, net::SocketAddr};
use thiserror::Error;

/// Unhandled failures while bringing the server up or running it.
///
/// Any of these triggers a best-effort database disconnect followed by exit status 1.
#[derive(Error, Debug)]
pub enum StartupError {
    /// The TCP listener could not be bound.
    #[error("Failed to bind HTTP listener on {addr}: {source}")]
    Bind {
        /// Address the listener was asked to bind
        addr: SocketAddr,
        /// The underlying socket error
        #[source]
        source: io::Error,
    },

    /// The HTTP server stopped with an I/O error.
    #[error("HTTP server error: {0}")]
    Serve(#[source] io::Error),

    /// Termination signal handlers could not be registered.
    #[error("Failed to install termination signal handler: {0}")]
    SignalHandler(#[source] io::Error),
}

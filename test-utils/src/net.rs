//! Local network endpoints for exercising connection failures.

use std::net::{Ipv4Addr, SocketAddr, TcpListener};

use crate::error::TestError;

/// Returns a loopback address whose port was free a moment ago and is now closed.
///
/// The port is obtained by binding an ephemeral listener and dropping it, so a
/// connection attempt is refused immediately instead of timing out.
pub fn closed_local_addr() -> Result<SocketAddr, TestError> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))?;
    let addr = listener.local_addr()?;
    drop(listener);

    Ok(addr)
}

/// Returns a PostgreSQL connection string pointing at a closed local port.
pub fn unreachable_postgres_url() -> Result<String, TestError> {
    let addr = closed_local_addr()?;

    Ok(format!(
        "postgres://inventory:inventory@{}/inventory",
        addr
    ))
}

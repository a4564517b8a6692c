//! Listener setup and the serve loop.
//!
//! There is no graceful shutdown: the process runs until a signal kills it.

use std::io;
use std::net::SocketAddr;

use axum::Router;
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::{ServerError, ServerResult};
use crate::routes;

/// Bind the listening socket.
///
/// # Errors
///
/// Returns `ServerError::Bind` if the address is unavailable. No retry.
pub async fn bind(config: &Config) -> ServerResult<TcpListener> {
    let addr = config.bind_address();
    let listener = listen(addr).map_err(|source| ServerError::Bind { addr, source })?;

    // Report the bound port, which differs from the requested one for port 0
    let port = listener.local_addr().map_or(addr.port(), |a| a.port());
    tracing::info!(port, "Server running on port {port}");

    Ok(listener)
}

/// Create the listening socket. IPv6 sockets are dual-stack, so binding `::`
/// also accepts IPv4 clients.
fn listen(addr: SocketAddr) -> io::Result<TcpListener> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;
    if addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(1024)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

/// Serve `app` on `listener` until the process is terminated.
///
/// # Errors
///
/// Returns `ServerError::Serve` if the accept loop fails.
pub async fn serve(listener: TcpListener, app: Router) -> ServerResult<()> {
    axum::serve(listener, app).await?;
    Ok(())
}

/// Bind and serve the probe routes.
///
/// # Errors
///
/// Propagates bind and serve failures.
pub async fn run(config: &Config) -> ServerResult<()> {
    let listener = bind(config).await?;
    serve(listener, routes::build_router()).await
}

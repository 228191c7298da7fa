//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use trace_echo::{HttpServer, ServerConfig, Shutdown};

/// Spawn the echo server on an ephemeral port.
///
/// Returns the bound address, the shutdown coordinator, and the serve task
/// handle so tests can drive the full lifecycle.
pub async fn spawn_server() -> (SocketAddr, Shutdown, JoinHandle<Result<(), std::io::Error>>) {
    let server = HttpServer::new(ServerConfig::default());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, rx).await });

    (addr, shutdown, handle)
}

//! Startup orchestration for the echo server.
//!
//! Fail fast: any config or bind error is fatal. Subsystems initialize in
//! order (config, observability, listener), traffic starts last, and a
//! termination signal drains in-flight responses before exit.

use std::process::ExitCode;
use std::time::Duration;

use tokio::net::TcpListener;

use trace_echo::config::loader;
use trace_echo::http::HttpServer;
use trace_echo::lifecycle::{signals, Shutdown};
use trace_echo::observability::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match loader::load() {
        Ok(config) => config,
        Err(error) => {
            // The structured logger is not up yet.
            eprintln!("Invalid configuration: {error}");
            return ExitCode::FAILURE;
        }
    };

    // Instrumentation before any server setup.
    logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        service = %config.observability.service_name,
        "Configuration loaded"
    );

    let listener = match TcpListener::bind(&config.listener.bind_address).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(
                address = %config.listener.bind_address,
                error = %error,
                "Failed to bind listener"
            );
            return ExitCode::FAILURE;
        }
    };

    let addr = match listener.local_addr() {
        Ok(addr) => addr,
        Err(error) => {
            tracing::error!(error = %error, "Failed to read listener address");
            return ExitCode::FAILURE;
        }
    };

    // Human-readable notice on plain stdout, distinct from the JSON log.
    println!("trace-echo web server is running on {addr}");

    let drain_timeout = Duration::from_secs(config.shutdown.drain_timeout_secs);
    let shutdown = Shutdown::new();
    let server_rx = shutdown.subscribe();
    let server = HttpServer::new(config);

    let mut server_task = tokio::spawn(async move { server.run(listener, server_rx).await });

    tokio::select! {
        _ = signals::wait_for_termination() => {
            println!("Received termination signal");
            shutdown.trigger();
        }
        result = &mut server_task => {
            // The server stopped on its own before any signal arrived.
            return match result {
                Ok(Ok(())) => {
                    tracing::warn!("Server exited before any termination signal");
                    ExitCode::SUCCESS
                }
                Ok(Err(error)) => {
                    tracing::error!(error = %error, "Server terminated with an error");
                    ExitCode::FAILURE
                }
                Err(join_error) => {
                    tracing::error!(error = %join_error, "Server task failed");
                    ExitCode::FAILURE
                }
            };
        }
    }

    // Bounded drain: in-flight responses get drain_timeout to finish.
    match tokio::time::timeout(drain_timeout, server_task).await {
        Ok(Ok(Ok(()))) => ExitCode::SUCCESS,
        Ok(Ok(Err(error))) => {
            tracing::error!(error = %error, "Server terminated with an error");
            ExitCode::FAILURE
        }
        Ok(Err(join_error)) => {
            tracing::error!(error = %join_error, "Server task failed");
            ExitCode::FAILURE
        }
        Err(_) => {
            tracing::warn!(
                timeout_secs = drain_timeout.as_secs(),
                "Drain timeout elapsed; exiting with requests still in flight"
            );
            ExitCode::SUCCESS
        }
    }
}

//! Server startup.

use std::future::Future;

use tokio::net::TcpListener;

use super::{router::build_app, signal::shutdown_signal};

/// Bind to `host:port` and serve until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an I/O error if the address cannot be bound or the server fails.
pub async fn run(host: &str, port: u16) -> std::io::Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    serve(listener, shutdown_signal()).await
}

/// Serve the application on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, build_app())
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server on {} stopped", addr);
    Ok(())
}

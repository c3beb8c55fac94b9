//! Test fixtures for integration tests.

use tokio::{net::TcpListener, sync::oneshot};

/// In-process server bound to an ephemeral port.
///
/// The server is shut down gracefully when the fixture is dropped.
pub struct TestServer {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to get local address");
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            upcase_server::serve(listener, async move {
                let _ = rx.await;
            })
            .await
            .expect("Test server failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            shutdown: Some(tx),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn send_chat_url(&self) -> String {
        format!("{}/sendChat", self.base_url)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

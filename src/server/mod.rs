//! Reference refinement service.
//!
//! Serves `POST /generate` (template-based refinement per intent) and
//! `GET /health`, matching the contract the client expects.

mod error;
mod router;
mod templates;

pub use error::ServerError;
pub use router::build_router;
pub use templates::refine_prompt;

use std::future::IntoFuture;
use std::net::SocketAddr;

use tokio::net::TcpListener;

pub struct RefinementServer {
    addr: SocketAddr,
    listener: TcpListener,
}

impl RefinementServer {
    /// Bind the listener. Port 0 picks a free port.
    pub async fn bind(bind_addr: &str) -> std::io::Result<Self> {
        let listener = TcpListener::bind(bind_addr).await?;
        let addr = listener.local_addr()?;
        tracing::info!("Refinement service bound to {}", addr);
        Ok(Self { addr, listener })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Serve until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        tracing::info!("Starting refinement service on {}", self.addr);
        axum::serve(self.listener, build_router())
            .with_graceful_shutdown(shutdown)
            .into_future()
            .await?;
        tracing::info!("Refinement service stopped");
        Ok(())
    }
}

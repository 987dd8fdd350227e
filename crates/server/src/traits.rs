//! Server traits for lifecycle management

use async_trait::async_trait;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;

use crate::error::Result;

/// Core server trait.
///
/// A server binds, serves until its shutdown token is cancelled, drains,
/// and returns. Implementations must be cheap to clone into a task.
#[async_trait]
pub trait Server: Send + Sync + 'static {
    /// The server's name for logging and identification.
    fn name(&self) -> &str;

    /// The address the server is bound to, if running.
    fn address(&self) -> Option<SocketAddr>;

    /// True while the server is accepting connections.
    fn is_running(&self) -> bool;

    /// Run the server until the shutdown token is cancelled.
    async fn run(&self, shutdown: CancellationToken) -> Result<()>;
}

/// Extension trait providing convenience methods for servers.
pub trait ServerExt: Server + Sized {
    /// Spawn the server on a new task, returning the join handle and the
    /// token that triggers its shutdown.
    fn spawn(self) -> (tokio::task::JoinHandle<Result<()>>, CancellationToken) {
        let token = CancellationToken::new();
        let token_clone = token.clone();
        let handle = tokio::spawn(async move { self.run(token_clone).await });
        (handle, token)
    }

    /// Run the server until Ctrl+C triggers graceful shutdown.
    fn run_with_ctrl_c(self) -> impl std::future::Future<Output = Result<()>> + Send {
        async move {
            let shutdown = crate::shutdown::ShutdownController::with_ctrl_c();
            self.run(shutdown.token()).await
        }
    }
}

impl<T: Server + Sized> ServerExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockServer;

    #[async_trait]
    impl Server for MockServer {
        fn name(&self) -> &str {
            "mock"
        }

        fn address(&self) -> Option<SocketAddr> {
            None
        }

        fn is_running(&self) -> bool {
            false
        }

        async fn run(&self, shutdown: CancellationToken) -> Result<()> {
            shutdown.cancelled().await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_spawn_and_cancel() {
        let (handle, token) = MockServer.spawn();
        token.cancel();

        let result = tokio::time::timeout(std::time::Duration::from_secs(1), handle).await;
        assert!(result.is_ok());
    }
}

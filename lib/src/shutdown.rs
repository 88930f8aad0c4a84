use tokio::signal;
use tracing::{error, info};

pub struct Shutdown;

impl Shutdown {
    /// Resolves on Ctrl+C or SIGTERM. If a handler cannot be installed that
    /// branch never resolves and the other one still stops the server.
    pub async fn signal(message: &str) {
        let ctrl_c = async {
            if let Err(error) = signal::ctrl_c().await {
                error!("Failed to install Ctrl+C handler: {error}");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    sigterm.recv().await;
                },
                Err(error) => {
                    error!("Failed to install signal handler: {error}");
                    std::future::pending::<()>().await;
                },
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }

        info!("{message}");
    }
}

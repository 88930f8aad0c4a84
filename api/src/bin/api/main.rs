use appointment_notifier::environment::Environment;
use appointment_notifier::shutdown::Shutdown;
use appointment_notifier_api::routes::Routes;
use appointment_notifier_api::state::AppState;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stdout());

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("INFO")))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Starting...");

    let app_state = AppState::new()?;
    let port = Environment::u16("SERVER_PORT", 9095)?;

    info!("Starting http server...");
    let routes = Routes::routes(&app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    info!("Running http server on {addr}...");
    axum::serve(listener, routes).with_graceful_shutdown(Shutdown::signal("Stopping http server...")).await?;

    info!("Stopped!");

    Ok(())
}

pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use std::net::SocketAddr;

use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::initialize()?;
    let dist_dir = shared::config::resolve_dist_dir(config);
    tracing::info!("Serving static files from {}", dist_dir.display());

    let app = routes::configure_routes(config.to_app_config(), &dist_dir);

    let port = config.server.port;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Attempting to bind server to {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}

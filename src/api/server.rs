use crate::api::routes;
use crate::api::state::AppState;
use std::net::SocketAddr;
use tracing::info;

/// Starts and runs the HTTP server using Axum web framework
///
/// # Arguments
/// * `port` - Port number to listen on for incoming HTTP connections
/// * `state` - Store handles injected into every handler
///
/// # Returns
/// * `Result<(), Box<dyn std::error::Error>>` - Returns only if binding or serving fails
pub async fn launch_server(port: u16, state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let app = routes::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use safetynet_api::{router, AppState};
use safetynet_common::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("safetynet=info".parse()?))
        .init();

    let config = Config::from_env()?;
    let addr = format!("{}:{}", config.web_host, config.web_port);
    if config.map_tile_url.is_none() {
        info!("Map tiles disabled, locations render as plain coordinates");
    }

    let state = Arc::new(AppState::from_config(config));
    let app = router(state);

    info!("SafetyNet starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await?;

    Ok(())
}

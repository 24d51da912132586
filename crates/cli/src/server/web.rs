use axum::Router;
use ferrous_sidecar_api::{create_api_routes, AppState};
use ferrous_sidecar_domain::MetricsServerConfig;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn bind_web_listener(config: &MetricsServerConfig) -> anyhow::Result<TcpListener> {
    let listener = TcpListener::bind((config.bind_address.as_str(), config.port)).await?;
    let local_addr = listener.local_addr()?;

    info!(
        bind_address = %local_addr,
        metrics_url = format!("http://{}{}", local_addr, config.path),
        "Metrics server listening"
    );

    Ok(listener)
}

/// Serves until `shutdown` is cancelled, then drains in-flight requests.
pub async fn start_web_server(
    listener: TcpListener,
    state: AppState,
    metrics_path: &str,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let app = create_app(state, metrics_path);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    info!("Metrics server stopped");
    Ok(())
}

fn create_app(state: AppState, metrics_path: &str) -> Router {
    create_api_routes(state, metrics_path).layer(TraceLayer::new_for_http())
}

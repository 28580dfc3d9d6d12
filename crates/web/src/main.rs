use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cineteca_web::api::{MovieApi, API_BASE_URL};
use cineteca_web::config::WebConfig;
use cineteca_web::router::build_web_router;
use cineteca_web::state::WebState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cineteca_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = match WebConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid web configuration");
            std::process::exit(1);
        }
    };

    let api = match MovieApi::new(API_BASE_URL) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(error = %e, "Cannot build movie API client");
            std::process::exit(1);
        }
    };
    tracing::info!(api = API_BASE_URL, "Using movie API");

    let app = build_web_router(WebState { api });

    // --- Start server ---
    let addr = match config.host.parse() {
        Ok(ip) => SocketAddr::new(ip, config.port),
        Err(e) => {
            tracing::error!(error = %e, host = %config.host, "Invalid WEB_HOST address");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "Failed to bind to address");
            std::process::exit(1);
        }
    };
    tracing::info!(%addr, "Web UI listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
            } else {
                std::future::pending::<()>().await;
            }
        })
        .await
    {
        tracing::error!(error = %e, "Server error");
    }
}

//! LogiQuote Gateway Binary

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use logiquote_gateway::{config::GatewayConfig, routes, GATEWAY_VERSION};
use logiquote_pricing::QuoteService;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = GatewayConfig::load()?;
    init_tracing(config.log_json);

    info!("Starting LogiQuote Gateway v{}", GATEWAY_VERSION);
    info!("Loaded configuration: {:?}", config);

    let service = Arc::new(QuoteService::new(config.pricing.clone()));
    let app = routes::router(service);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on {}", addr);

    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", err);
            std::future::pending::<()>().await;
        }
        info!("Received shutdown signal");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Shutting down LogiQuote Gateway");
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

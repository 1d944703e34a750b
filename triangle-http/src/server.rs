use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{Environment, ServerConfig};
use crate::handlers::{calculate_get, calculate_post, health, page_handler, AppState};
use crate::openapi::ApiDoc;

/// Routes for one service instance. Handlers share nothing but the
/// read-only `AppState`.
pub fn build_router(state: Arc<AppState>) -> Router {
    let health_route = Router::new()
        .route("/health", get(health))
        .with_state(state);

    let api = Router::new().route("/1/triangle", get(calculate_get).post(calculate_post));

    let swagger = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(health_route)
        .merge(api)
        .merge(swagger)
        .fallback(page_handler)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive().max_age(std::time::Duration::from_secs(86400)))
}

fn init_tracing(config: &ServerConfig) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.default_log_filter().into());
    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Runs until Ctrl-C. Bind and accept-loop failures surface as
/// `TriangleError::Io`, configuration problems as `TriangleError::Config`.
pub async fn serve(config: ServerConfig) -> triangle::Result<()> {
    let startup_start = std::time::Instant::now();

    config.validate()?;
    init_tracing(&config);

    tracing::info!(
        environment = config.environment.as_str(),
        debug = config.debug,
        secret_key_source = config.secret_key.source().as_str(),
        "Configuration loaded"
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    let environment = config.environment;
    let state = Arc::new(AppState::new(config));
    let app = build_router(state);

    print_startup_banner(local_addr, environment, startup_start.elapsed().as_millis());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

fn print_startup_banner(addr: SocketAddr, environment: Environment, startup_ms: u128) {
    use colored::Colorize;

    let url = format!("http://{}", addr);
    let version = format!("v{}", env!("CARGO_PKG_VERSION"));
    let timing = format!("ready in {}ms", startup_ms);

    println!();
    println!(
        "  {} {}  {}",
        "△ Triangle".bold().bright_green(),
        version.as_str().dimmed(),
        timing.as_str().dimmed(),
    );
    println!();
    println!("  {}  Local:      {}", "➜".green(), url.as_str().cyan());
    let docs = format!("{}/swagger-ui", url);
    println!("  {}  API Docs:   {}", "➜".green(), docs.as_str().cyan());
    println!(
        "  {}  Mode:       {}",
        "➜".green(),
        environment.as_str().dimmed()
    );
    println!();
}

use std::sync::Arc;
use tokio::net::TcpListener;
use triangle_http::handlers::AppState;
use triangle_http::ServerConfig;

/// Serves the full router on an ephemeral loopback port and returns its
/// `host:port` once `/health` answers.
pub async fn spawn_server() -> String {
    spawn_server_with_config(ServerConfig::default()).await
}

pub async fn spawn_server_with_config(config: ServerConfig) -> String {
    let state = Arc::new(AppState::new(config));
    let app = triangle_http::build_router(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::new();
    for _ in 0..200 {
        if client
            .get(format!("http://{}/health", addr))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(5)).await;
    }

    addr
}

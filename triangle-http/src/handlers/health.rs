use axum::{extract::State, Json};
use std::sync::Arc;

use super::AppState;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is healthy", body = serde_json::Value)
    )
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "environment": state.config.environment.as_str(),
        "debug": state.config.debug,
        "secret_key_source": state.config.secret_key.source().as_str(),
        "build_profile": if cfg!(debug_assertions) { "debug" } else { "release" },
        "uptime_secs": state.start_time.elapsed().as_secs(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SecretKey, ServerConfig};
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    async fn health_json(state: Arc<AppState>) -> serde_json::Value {
        let app = Router::new()
            .route("/health", get(health))
            .with_state(state);

        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok_and_version() {
        let json = health_json(Arc::new(AppState::new(ServerConfig::default()))).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"].as_str().unwrap(), env!("CARGO_PKG_VERSION"));
        assert!(json["uptime_secs"].as_u64().is_some());
        assert_eq!(json["environment"], "development");
    }

    #[tokio::test]
    async fn health_reports_key_source_but_never_the_key() {
        let config = ServerConfig {
            secret_key: SecretKey::provided("do-not-leak-this-key"),
            ..ServerConfig::default()
        };
        let json = health_json(Arc::new(AppState::new(config))).await;
        assert_eq!(json["secret_key_source"], "environment");
        assert!(!json.to_string().contains("do-not-leak-this-key"));
    }
}

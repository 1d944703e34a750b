use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use rust_embed::{Embed, EmbeddedFile};

const INDEX: &str = "index.html";

/// The calculator page and its script and stylesheet, compiled into the binary.
#[derive(Embed)]
#[folder = "web/"]
struct PageAssets;

pub async fn page_handler(uri: Uri) -> Response {
    let requested = match uri.path().trim_start_matches('/') {
        "" => INDEX,
        path => path,
    };

    match PageAssets::get(requested) {
        Some(asset) => asset_response(requested, asset),
        None if requested.contains('.') => StatusCode::NOT_FOUND.into_response(),
        // Any other path renders the calculator.
        None => match PageAssets::get(INDEX) {
            Some(asset) => asset_response(INDEX, asset),
            None => StatusCode::NOT_FOUND.into_response(),
        },
    }
}

fn asset_response(path: &str, asset: EmbeddedFile) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime.to_string()),
            (header::CACHE_CONTROL, "no-cache".to_string()),
        ],
        asset.data,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::Router;
    use tower::ServiceExt;

    async fn fetch(uri: &str) -> (StatusCode, Option<String>, String) {
        let app = Router::new().fallback(page_handler);
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8_lossy(&body).to_string())
    }

    #[tokio::test]
    async fn root_serves_calculator_page() {
        let (status, content_type, body) = fetch("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(body.contains("Triangle Test Calculator"));
        assert!(body.contains("Number of participants"));
        assert!(body.contains("Number of correct participants"));
    }

    #[tokio::test]
    async fn page_keeps_attribution_and_size_limit() {
        let (_, _, body) = fetch("/").await;
        assert!(body.contains("Built by"));
        assert!(body.contains("Justin Angevaare"));
        assert!(body.contains(&format!("max=\"{}\"", triangle::MAX_SAMPLE_SIZE)));
    }

    #[tokio::test]
    async fn script_handles_non_json_errors() {
        let (_, _, body) = fetch("/app.js").await;
        assert!(body.contains("catch (err)"));
        assert!(body.contains("Unexpected response from the server"));
    }

    #[tokio::test]
    async fn script_is_served_with_js_mime() {
        let (status, content_type, body) = fetch("/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().contains("javascript"));
        assert!(body.contains("/1/triangle"));
    }

    #[tokio::test]
    async fn assets_are_not_cached() {
        let app = Router::new().fallback(page_handler);
        let resp = app
            .oneshot(Request::builder().uri("/style.css").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.headers()[header::CACHE_CONTROL], "no-cache");
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "text/css");
    }

    #[tokio::test]
    async fn missing_asset_is_404() {
        let (status, _, _) = fetch("/missing.css").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn extensionless_path_falls_back_to_page() {
        let (status, _, body) = fetch("/calculator").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Triangle Test Calculator"));
    }
}

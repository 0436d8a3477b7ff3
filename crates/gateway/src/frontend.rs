//! Embedded static frontend assets.
//!
//! The planner UI lives in `frontend/` at the workspace root and is compiled
//! into the binary with `include_str!`, so the server ships as one file.

use axum::{
    Router,
    extract::Path,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};

const INDEX_HTML: &str = include_str!("../../../frontend/index.html");

/// Static assets under `/static/`: (file name, content type, body).
const ASSETS: &[(&str, &str, &str)] = &[
    (
        "style.css",
        "text/css; charset=utf-8",
        include_str!("../../../frontend/style.css"),
    ),
    (
        "app.js",
        "application/javascript; charset=utf-8",
        include_str!("../../../frontend/app.js"),
    ),
];

/// Build a router that serves the embedded frontend.
pub fn frontend_router() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/static/{file}", get(asset_handler))
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn asset_handler(Path(file): Path<String>) -> Response {
    match ASSETS.iter().find(|(name, _, _)| *name == file) {
        Some((_, content_type, body)) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, *content_type),
                (header::CACHE_CONTROL, "no-cache"),
            ],
            *body,
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn get_path(uri: &str) -> (StatusCode, Option<String>, String) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = frontend_router().oneshot(req).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap().to_string());
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn serves_index_html() {
        let (status, content_type, text) = get_path("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().contains("text/html"));
        assert!(text.contains("<!DOCTYPE html>"), "Should be valid HTML");
        assert!(text.contains("Supperplan"), "Index HTML should contain the app name");
        assert!(text.contains("/static/app.js"), "Index should load the app script");
    }

    #[tokio::test]
    async fn serves_css() {
        let (status, content_type, _) = get_path("/static/style.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().contains("text/css"));
    }

    #[tokio::test]
    async fn serves_js() {
        let (status, content_type, text) = get_path("/static/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().contains("javascript"));
        assert!(text.contains("/api/verify"), "JS should call the access check");
        assert!(text.contains("/api/generate-menu"));
        assert!(text.contains("/api/generate-cookbook"));
    }

    #[tokio::test]
    async fn unknown_asset_is_not_found() {
        let (status, _, _) = get_path("/static/config.toml").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

use axum::extract::{ Query, State };
use axum::http::{ header, HeaderMap, HeaderValue };
use axum::response::{ Html, IntoResponse, Response };
use serde::Deserialize;

use crate::error::Result;
use crate::services::qr_service::validate_url;

use super::AppState;

const WEBSITE_QR_DISPOSITION: &str = "attachment; filename=\"website_qr_code.png\"";
const CUSTOM_QR_DISPOSITION: &str = "attachment; filename=\"custom_qr_code.png\"";

#[derive(Deserialize)]
pub struct CustomQrParams {
    pub url: String,
}

/// Landing page: shows the configured site URL, its QR code, and a form
/// for generating a QR code from an arbitrary URL.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(
        format!(
            r#"<!DOCTYPE html>
<html>
<head><title>QR Code Website Generator</title></head>
<body>
  <h1>QR Code Website Generator</h1>
  <h2>Current Website URL:</h2>
  <code>{base_url}</code>
  <h2>QR Code for this Website:</h2>
  <img src="/qr/website" alt="Scan this QR code to access the website" width="300">
  <p><a href="/qr/website/download">Download QR Code</a></p>
  <h2>Generate QR for Custom URL:</h2>
  <form action="/qr/custom" method="get">
    <input type="text" name="url" placeholder="https://example.com">
    <button type="submit">Generate</button>
  </form>
</body>
</html>"#,
            base_url = state.config.base_url
        )
    )
}

pub async fn website_qr(State(state): State<AppState>) -> Result<Response> {
    let png = state.qr_service.generate_png(&state.config.base_url)?;

    Ok(png_response(png, None))
}

pub async fn website_qr_download(State(state): State<AppState>) -> Result<Response> {
    let png = state.qr_service.generate_png(&state.config.base_url)?;

    Ok(png_response(png, Some(WEBSITE_QR_DISPOSITION)))
}

pub async fn custom_qr(
    State(state): State<AppState>,
    Query(params): Query<CustomQrParams>
) -> Result<Response> {
    validate_url(&params.url)?;
    let png = state.qr_service.generate_png(&params.url)?;

    Ok(png_response(png, None))
}

pub async fn custom_qr_download(
    State(state): State<AppState>,
    Query(params): Query<CustomQrParams>
) -> Result<Response> {
    validate_url(&params.url)?;
    let png = state.qr_service.generate_png(&params.url)?;

    Ok(png_response(png, Some(CUSTOM_QR_DISPOSITION)))
}

fn png_response(bytes: Vec<u8>, disposition: Option<&'static str>) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("image/png"));

    if let Some(disposition) = disposition {
        headers.insert(header::CONTENT_DISPOSITION, HeaderValue::from_static(disposition));
    }

    (headers, bytes).into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{ Request, StatusCode };
    use axum::routing::get;
    use axum::Router;
    use tower::util::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::services::QrService;

    fn test_app() -> Router {
        let config = Arc::new(Config {
            base_url: "http://localhost:8501".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 8501,
        });
        let state = AppState::new(Arc::new(QrService::new()), config);

        Router::new()
            .route("/", get(index))
            .route("/qr/website", get(website_qr))
            .route("/qr/website/download", get(website_qr_download))
            .route("/qr/custom", get(custom_qr))
            .route("/qr/custom/download", get(custom_qr_download))
            .with_state(state)
    }

    async fn get_response(uri: &str) -> Response {
        test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_shows_base_url() {
        let response = get_response("/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("http://localhost:8501"));
    }

    #[tokio::test]
    async fn test_website_qr_returns_png() {
        let response = get_response("/qr/website").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[tokio::test]
    async fn test_website_download_carries_filename() {
        let response = get_response("/qr/website/download").await;
        assert_eq!(response.status(), StatusCode::OK);

        let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap();
        assert!(disposition.contains("website_qr_code.png"));
    }

    #[tokio::test]
    async fn test_custom_qr_returns_png() {
        let response = get_response("/qr/custom?url=https://example.com").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    }

    #[tokio::test]
    async fn test_custom_download_carries_filename() {
        let response = get_response("/qr/custom/download?url=https://example.com").await;
        assert_eq!(response.status(), StatusCode::OK);

        let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap();
        assert!(disposition.contains("custom_qr_code.png"));
    }

    #[tokio::test]
    async fn test_custom_qr_rejects_non_url() {
        let response = get_response("/qr/custom?url=not-a-url").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["field"], "url");
    }

    #[tokio::test]
    async fn test_custom_qr_rejects_empty_url() {
        let response = get_response("/qr/custom?url=").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

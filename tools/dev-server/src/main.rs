//! Development server for the Aqua web desktop
//!
//! Serves the built web bundle with correct MIME types for wasm modules
//! and caching disabled, so rebuilt bundles are always picked up.

use axum::{
    body::Body,
    http::{header, HeaderValue, Request},
    response::Response,
    Router,
};
use std::net::SocketAddr;
use tower_http::services::ServeDir;

#[tokio::main]
async fn main() {
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    // Serve static files from the web directory
    let serve_dir = ServeDir::new("web").precompressed_gzip().precompressed_br();

    let app = Router::new()
        .fallback_service(serve_dir)
        .layer(axum::middleware::from_fn(add_headers));

    println!("Aqua Shell dev server listening on http://localhost:{}", port);
    println!("Press Ctrl+C to stop");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", addr, e));
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("server error: {}", e);
    }
}

/// Disable caching and fix MIME types for module scripts and wasm
async fn add_headers(request: Request<Body>, next: axum::middleware::Next) -> Response<Body> {
    // Get the request path for MIME type detection
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    // Always serve the freshest bundle during development
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));

    if path.ends_with(".js") || path.ends_with(".mjs") {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/javascript; charset=utf-8"),
        );
    } else if path.ends_with(".wasm") {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/wasm"),
        );
    } else if path.ends_with(".css") {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/css; charset=utf-8"),
        );
    } else if path.ends_with(".html") {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        );
    } else if path.ends_with(".json") {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
    }

    response
}

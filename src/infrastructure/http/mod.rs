use axum::{
    extract::{ConnectInfo, Request},
    http::HeaderValue,
    middleware::{self, Next},
    response::Response,
    routing::post,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::SpeechController;
use crate::infrastructure::config::Config;

/// Build the application router.
///
/// Kept separate from the serve loop so integration tests can mount the
/// same routes on an ephemeral listener with fake adapters behind the
/// controller.
pub fn build_router(controller: Arc<SpeechController>) -> Router {
    Router::new()
        .route(
            "/getSpeech",
            post(SpeechController::get_speech)
                .options(SpeechController::preflight)
                .fallback(SpeechController::method_not_allowed),
        )
        .with_state(controller)
        .fallback(SpeechController::not_found)
        .layer(middleware::from_fn(request_log_middleware))
        .layer(middleware::from_fn(cors_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    controller: Arc<SpeechController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Middleware adding the CORS headers every response carries
pub async fn cors_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert(
        "Access-Control-Allow-Origin",
        HeaderValue::from_static("*"),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("POST,OPTIONS"),
    );

    response
}

/// Middleware emitting one structured record per handled request
pub async fn request_log_middleware(
    ConnectInfo(remote_addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    tracing::info!(
        status = response.status().as_u16(),
        method = %method,
        path = %path,
        remote_addr = %remote_addr,
        "request handled"
    );

    response
}

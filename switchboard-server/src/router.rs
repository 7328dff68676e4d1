use crate::signaling::{SignalingService, token_handler, ws_handler};
use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

/// WebSocket signaling lives at `/ws`, credential issuance at `/token`.
pub fn build_router(service: SignalingService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ws", get(ws_handler))
        .route("/token", post(token_handler))
        .layer(cors)
        .with_state(service)
}

use axum::{
    http::{header, Method},
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use crate::config::Config;
use crate::storage::ObjectStore;
use crate::tts::SpeechSynthesizer;

pub struct AppState {
    pub config: Config,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
    pub store: Arc<dyn ObjectStore>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/speak", any(handlers::speak))
        .route(
            "/voices",
            get(handlers::list_voices).fallback(handlers::method_not_allowed),
        )
        .route(
            "/health",
            get(handlers::health).fallback(handlers::method_not_allowed),
        );

    // Function URLs and `$default` gateway routes forward arbitrary paths and
    // methods; anything unrouted is treated as a speak request.
    Router::new()
        .route("/", any(handlers::speak))
        .nest("/api", api_routes)
        .fallback(handlers::speak)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

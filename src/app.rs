use crate::errors::handle_panic;
use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::index))
        .route("/business-data", post(handlers::business_data))
        .route("/regenerate-headline", get(handlers::regenerate_headline))
        .route("/health", get(handlers::health))
        .with_state(state);

    with_layers(routes)
}

fn with_layers(routes: Router) -> Router {
    // The dashboard may be served from another origin during development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use handlers::{AppResponse, ImageResponse, ShareResponse};

use crate::detail::DetailClient;

pub fn create_router(client: DetailClient) -> Router {
    let api = Router::new()
        // App
        .route("/app", get(handlers::get_app))
        // Catalog
        .route("/catalog", get(handlers::get_catalog))
        .route("/months/{month}", get(handlers::get_month))
        // Objects
        .route("/objects/{id}", get(handlers::get_object))
        .route("/objects/{id}/details", get(handlers::get_object_details))
        .route("/objects/{id}/image", get(handlers::get_object_image))
        .route("/objects/{id}/share", post(handlers::share_object))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(client)
}

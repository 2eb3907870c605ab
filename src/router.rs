use crate::handlers::{
    auth::{login, logout, register},
    health::health_check,
    products::{create_product, delete_product, get_product, get_products, update_product},
    summary::get_summary,
};
use crate::schemas::{ApiDoc, AppState};
use crate::session::require_session;
use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Every inventory-touching route sits behind the session guard;
    // registration, login, logout and the health check stay open.
    let protected = Router::new()
        // Product CRUD routes
        .route("/api/v1/products", post(create_product))
        .route("/api/v1/products", get(get_products))
        .route("/api/v1/products/:product_id", get(get_product))
        .route("/api/v1/products/:product_id", put(update_product))
        .route("/api/v1/products/:product_id", delete(delete_product))
        // Summary route
        .route("/api/v1/summary", get(get_summary))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Auth routes
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/logout", post(logout))
        .merge(protected)
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

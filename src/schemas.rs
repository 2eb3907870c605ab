use common::{InventorySummary, SummaryFilter, SummaryRow};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::session::SessionStore;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Live sessions, token -> username
    pub sessions: SessionStore,
}

/// Query parameters for the summary endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct SummaryQuery {
    /// Vendor substring filter (case-insensitive, empty = no filter)
    pub vendor: Option<String>,
    /// Inclusive lower bound on arrival date (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// Inclusive upper bound on arrival date (YYYY-MM-DD)
    pub end_date: Option<String>,
}

impl SummaryQuery {
    /// Collapse absent parameters to the empty-string "no constraint" form
    /// the aggregation filter expects.
    pub fn to_filter(&self) -> SummaryFilter {
        SummaryFilter::new(
            self.vendor.as_deref().unwrap_or(""),
            self.start_date.as_deref().unwrap_or(""),
            self.end_date.as_deref().unwrap_or(""),
        )
    }
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::auth::register,
        crate::handlers::auth::login,
        crate::handlers::auth::logout,
        crate::handlers::products::create_product,
        crate::handlers::products::get_products,
        crate::handlers::products::get_product,
        crate::handlers::products::update_product,
        crate::handlers::products::delete_product,
        crate::handlers::summary::get_summary,
    ),
    components(
        schemas(
            ApiResponse<InventorySummary>,
            ErrorResponse,
            HealthResponse,
            SummaryQuery,
            InventorySummary,
            SummaryRow,
            SummaryFilter,
            crate::handlers::auth::RegisterRequest,
            crate::handlers::auth::LoginRequest,
            crate::handlers::auth::LoginResponse,
            crate::handlers::auth::UserResponse,
            crate::handlers::products::CreateProductRequest,
            crate::handlers::products::UpdateProductRequest,
            crate::handlers::products::ProductResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Registration, login and logout"),
        (name = "products", description = "Inventory CRUD endpoints"),
        (name = "summary", description = "Aggregated inventory summary"),
    ),
    info(
        title = "StockRust API",
        description = "Inventory Tracker API - product records with an aggregated, filterable summary view",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;

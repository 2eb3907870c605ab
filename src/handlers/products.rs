use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use model::entities::product;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace, warn};
use utoipa::ToSchema;

use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Request body for adding a new product record
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateProductRequest {
    /// Product ID (must be unique, immutable once created)
    pub product_id: String,
    /// Product name; records sharing a name are grouped by the summary
    pub product_name: String,
    /// Units in stock
    pub quantity: i64,
    /// Arrival date (YYYY-MM-DD)
    pub arrival_date: String,
    /// Vendor/origin name
    pub source: String,
    /// Storage box tag
    pub box_id: String,
    /// Price per unit
    pub unit_price: f64,
}

/// Request body for editing a product record.
///
/// Every mutable field is replaced; the product id itself never changes.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateProductRequest {
    pub product_name: String,
    pub quantity: i64,
    pub arrival_date: String,
    pub source: String,
    pub box_id: String,
    pub unit_price: f64,
}

/// Product response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub arrival_date: String,
    pub source: String,
    pub box_id: String,
    pub unit_price: f64,
}

impl From<product::Model> for ProductResponse {
    fn from(model: product::Model) -> Self {
        Self {
            product_id: model.product_id,
            product_name: model.product_name,
            quantity: model.quantity,
            arrival_date: model.arrival_date,
            source: model.source,
            box_id: model.box_id,
            unit_price: model.unit_price,
        }
    }
}

fn not_found(product_id: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Product '{}' not found", product_id),
            code: "NOT_FOUND".to_string(),
            success: false,
        }),
    )
}

fn database_error(context: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("Internal server error while {}", context),
            code: "DATABASE_ERROR".to_string(),
            success: false,
        }),
    )
}

/// Add a product record
#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product added successfully", body = ApiResponse<ProductResponse>),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 409, description = "Product with this ID already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProductResponse>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering create_product function");
    debug!(
        "Adding product with ID: {}, name: {}",
        request.product_id, request.product_name
    );

    let new_product = product::ActiveModel {
        product_id: Set(request.product_id.clone()),
        product_name: Set(request.product_name.clone()),
        quantity: Set(request.quantity),
        arrival_date: Set(request.arrival_date.clone()),
        source: Set(request.source.clone()),
        box_id: Set(request.box_id.clone()),
        unit_price: Set(request.unit_price),
    };

    trace!("Attempting to insert new product into database");
    match new_product.insert(&state.db).await {
        Ok(product_model) => {
            info!(
                "Product added successfully with ID: {}, name: {}",
                product_model.product_id, product_model.product_name
            );
            let response = ApiResponse {
                data: ProductResponse::from(product_model),
                message: "Product added!".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(db_error) => {
            error!(
                "Failed to add product '{}': {}",
                request.product_id, db_error
            );

            // The primary-key constraint is the only uniqueness rule on
            // this table, so a constraint violation means a duplicate id.
            let error_response = match &db_error {
                DbErr::Exec(_) | DbErr::Query(_) => {
                    let error_msg = db_error.to_string().to_lowercase();
                    if error_msg.contains("unique") || error_msg.contains("constraint") {
                        (
                            StatusCode::CONFLICT,
                            Json(ErrorResponse {
                                error: format!(
                                    "Product with ID '{}' already exists",
                                    request.product_id
                                ),
                                code: "DUPLICATE_PRODUCT_ID".to_string(),
                                success: false,
                            }),
                        )
                    } else {
                        database_error("adding product")
                    }
                }
                _ => database_error("adding product"),
            };

            Err(error_response)
        }
    }
}

/// Get all product records
#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "products",
    responses(
        (status = 200, description = "Products retrieved successfully", body = ApiResponse<Vec<ProductResponse>>),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ProductResponse>>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_products function");
    debug!("Fetching all products from database");

    match product::Entity::find().all(&state.db).await {
        Ok(products) => {
            let product_count = products.len();
            debug!("Retrieved {} products from database", product_count);

            let product_responses: Vec<ProductResponse> =
                products.into_iter().map(ProductResponse::from).collect();

            info!("Successfully retrieved {} products", product_count);
            let response = ApiResponse {
                data: product_responses,
                message: "Products retrieved successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(db_error) => {
            error!("Failed to retrieve products from database: {}", db_error);
            Err(database_error("retrieving products"))
        }
    }
}

/// Get a specific product by ID
#[utoipa::path(
    get,
    path = "/api/v1/products/{product_id}",
    tag = "products",
    params(
        ("product_id" = String, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, description = "Product retrieved successfully", body = ApiResponse<ProductResponse>),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_product(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ProductResponse>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_product function for product_id: {}", product_id);
    debug!("Fetching product with ID: {}", product_id);

    match product::Entity::find_by_id(&product_id).one(&state.db).await {
        Ok(Some(product_model)) => {
            info!(
                "Successfully retrieved product with ID: {}, name: {}",
                product_model.product_id, product_model.product_name
            );
            let response = ApiResponse {
                data: ProductResponse::from(product_model),
                message: "Product retrieved successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Ok(None) => {
            warn!("Product with ID {} not found", product_id);
            Err(not_found(&product_id))
        }
        Err(db_error) => {
            error!(
                "Failed to retrieve product with ID {}: {}",
                product_id, db_error
            );
            Err(database_error("retrieving product"))
        }
    }
}

/// Update a product record
#[utoipa::path(
    put,
    path = "/api/v1/products/{product_id}",
    tag = "products",
    params(
        ("product_id" = String, Path, description = "Product ID"),
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated successfully", body = ApiResponse<ProductResponse>),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_product(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<UpdateProductRequest>,
) -> Result<Json<ApiResponse<ProductResponse>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering update_product function for product_id: {}", product_id);
    debug!("Updating product with ID: {}", product_id);

    // First, find the existing product
    let existing_product = match product::Entity::find_by_id(&product_id).one(&state.db).await {
        Ok(Some(product_model)) => {
            debug!("Found existing product: {}", product_model.product_name);
            product_model
        }
        Ok(None) => {
            warn!("Product with ID {} not found for update", product_id);
            return Err(not_found(&product_id));
        }
        Err(db_error) => {
            error!(
                "Failed to lookup product with ID {} for update: {}",
                product_id, db_error
            );
            return Err(database_error("updating product"));
        }
    };

    // Replace every mutable field; the id stays untouched
    let mut product_active: product::ActiveModel = existing_product.into();
    product_active.product_name = Set(request.product_name.clone());
    product_active.quantity = Set(request.quantity);
    product_active.arrival_date = Set(request.arrival_date.clone());
    product_active.source = Set(request.source.clone());
    product_active.box_id = Set(request.box_id.clone());
    product_active.unit_price = Set(request.unit_price);

    trace!("Attempting to update product in database");
    match product_active.update(&state.db).await {
        Ok(updated_product) => {
            info!("Product with ID {} updated successfully", product_id);
            let response = ApiResponse {
                data: ProductResponse::from(updated_product),
                message: "Product updated!".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(db_error) => {
            error!(
                "Failed to update product with ID {}: {}",
                product_id, db_error
            );
            Err(database_error("updating product"))
        }
    }
}

/// Delete a product record
///
/// Idempotent: deleting an id that is already gone still succeeds.
#[utoipa::path(
    delete,
    path = "/api/v1/products/{product_id}",
    tag = "products",
    params(
        ("product_id" = String, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, description = "Product deleted (or was already absent)", body = ApiResponse<String>),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_product(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering delete_product function for product_id: {}", product_id);
    debug!("Attempting to delete product with ID: {}", product_id);

    match product::Entity::delete_by_id(&product_id).exec(&state.db).await {
        Ok(delete_result) => {
            debug!(
                "Delete operation completed. Rows affected: {}",
                delete_result.rows_affected
            );
            if delete_result.rows_affected > 0 {
                info!("Product with ID {} deleted successfully", product_id);
            } else {
                debug!("Product with ID {} was already absent", product_id);
            }
            let response = ApiResponse {
                data: format!("Product {} deleted", product_id),
                message: "Product deleted!".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(db_error) => {
            error!(
                "Failed to delete product with ID {}: {}",
                product_id, db_error
            );
            Err(database_error("deleting product"))
        }
    }
}

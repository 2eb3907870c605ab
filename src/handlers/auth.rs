use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
};
use model::entities::user;
use rand::rngs::OsRng;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace, warn};
use utoipa::ToSchema;

use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use crate::session::bearer_token;

/// Request body for registering a new user
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RegisterRequest {
    /// Username (must be unique)
    pub username: String,
    /// Plaintext password; only its salted hash is stored
    pub password: String,
}

/// Request body for logging in
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Session token, presented as `Authorization: Bearer <token>`
    pub token: String,
    pub username: String,
}

/// User response model (the password hash never leaves the store)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
        }
    }
}

/// Single error body for every failed login. Unknown username and wrong
/// password must be indistinguishable to the caller.
fn invalid_credentials() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            error: "Invalid credentials".to_string(),
            code: "INVALID_CREDENTIALS".to_string(),
            success: false,
        }),
    )
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = ApiResponse<UserResponse>),
        (status = 409, description = "Username already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(username = %request.username))]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering register function");
    debug!("Registering user with username: {}", request.username);

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(request.password.as_bytes(), &salt)
        .map_err(|e| {
            error!("Failed to hash password for '{}': {}", request.username, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error while registering user".to_string(),
                    code: "HASH_ERROR".to_string(),
                    success: false,
                }),
            )
        })?
        .to_string();

    let new_user = user::ActiveModel {
        username: Set(request.username.clone()),
        password_hash: Set(password_hash),
        ..Default::default()
    };

    trace!("Attempting to insert new user into database");
    match new_user.insert(&state.db).await {
        Ok(user_model) => {
            info!(
                "User registered successfully with ID: {}, username: {}",
                user_model.id, user_model.username
            );
            let response = ApiResponse {
                data: UserResponse::from(user_model),
                message: "Registration successful! Please login.".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(db_error) => {
            error!("Failed to register user '{}': {}", request.username, db_error);

            // Handle specific database errors
            let error_response = match &db_error {
                DbErr::Exec(_) | DbErr::Query(_) => {
                    // Check for unique constraint violations
                    let error_msg = db_error.to_string().to_lowercase();
                    if error_msg.contains("unique") || error_msg.contains("constraint") {
                        (
                            StatusCode::CONFLICT,
                            Json(ErrorResponse {
                                error: format!("Username '{}' already exists", request.username),
                                code: "DUPLICATE_USERNAME".to_string(),
                                success: false,
                            }),
                        )
                    } else {
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            Json(ErrorResponse {
                                error: "Failed to register user due to database constraint"
                                    .to_string(),
                                code: "DATABASE_CONSTRAINT_ERROR".to_string(),
                                success: false,
                            }),
                        )
                    }
                }
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Internal server error while registering user".to_string(),
                        code: "DATABASE_ERROR".to_string(),
                        success: false,
                    }),
                ),
            };

            Err(error_response)
        }
    }
}

/// Login and open a session
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(username = %request.username))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering login function");
    debug!("Login attempt for username: {}", request.username);

    let user_model = match user::Entity::find()
        .filter(user::Column::Username.eq(request.username.clone()))
        .one(&state.db)
        .await
    {
        Ok(Some(user_model)) => user_model,
        Ok(None) => {
            // Burn the same hashing cost as a real verification so an
            // unknown username is not distinguishable by response time.
            let salt = SaltString::generate(&mut OsRng);
            let _ = Argon2::default().hash_password(request.password.as_bytes(), &salt);
            warn!("Login failed for username: {}", request.username);
            return Err(invalid_credentials());
        }
        Err(db_error) => {
            error!(
                "Failed to look up user '{}' during login: {}",
                request.username, db_error
            );
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error while logging in".to_string(),
                    code: "DATABASE_ERROR".to_string(),
                    success: false,
                }),
            ));
        }
    };

    let parsed_hash = PasswordHash::new(&user_model.password_hash).map_err(|e| {
        error!(
            "Stored password hash for '{}' is unreadable: {}",
            user_model.username, e
        );
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Internal server error while logging in".to_string(),
                code: "HASH_ERROR".to_string(),
                success: false,
            }),
        )
    })?;

    if Argon2::default()
        .verify_password(request.password.as_bytes(), &parsed_hash)
        .is_err()
    {
        warn!("Login failed for username: {}", request.username);
        return Err(invalid_credentials());
    }

    let token = state.sessions.open(&user_model.username);
    info!("User logged in: {}", user_model.username);

    let response = ApiResponse {
        data: LoginResponse {
            token,
            username: user_model.username,
        },
        message: "Login successful".to_string(),
        success: true,
    };
    Ok(Json(response))
}

/// Logout and close the session
///
/// Always succeeds: closing a missing or already-closed session is a no-op,
/// so no session guard is applied here.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Logged out", body = ApiResponse<String>)
    )
)]
#[instrument(skip(state, headers))]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<ApiResponse<String>> {
    trace!("Entering logout function");

    if let Some(token) = bearer_token(&headers) {
        state.sessions.close(token);
        debug!("Session token closed");
    }

    Json(ApiResponse {
        data: "Logged out".to_string(),
        message: "Logged out successfully".to_string(),
        success: true,
    })
}

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use dashmap::DashMap;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::schemas::{AppState, ErrorResponse};

/// Identity of the authenticated caller, inserted into the request
/// extensions by [`require_session`].
#[derive(Clone, Debug)]
pub struct CurrentUser(pub String);

/// Process-held session store mapping bearer tokens to usernames.
///
/// Sessions exist from login until logout; there is no expiry. The store
/// is shared across request tasks, so the map is concurrent.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    inner: Arc<DashMap<String, String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token bound to `username`.
    pub fn open(&self, username: &str) -> String {
        let token = Uuid::new_v4().to_string();
        self.inner.insert(token.clone(), username.to_string());
        debug!("Opened session for user: {}", username);
        token
    }

    /// Look up the username a token belongs to.
    pub fn resolve(&self, token: &str) -> Option<String> {
        self.inner.get(token).map(|entry| entry.value().clone())
    }

    /// Drop the session. Closing an unknown token is a no-op.
    pub fn close(&self, token: &str) {
        self.inner.remove(token);
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Guard middleware layered in front of every protected route.
///
/// Resolves the bearer token to a username and hands the identity to the
/// handler as a request extension; requests without a live session are
/// rejected before any handler runs.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let resolved = bearer_token(request.headers()).and_then(|token| state.sessions.resolve(token));

    match resolved {
        Some(username) => {
            request.extensions_mut().insert(CurrentUser(username));
            next.run(request).await
        }
        None => {
            warn!(
                "Rejected unauthenticated request to {}",
                request.uri().path()
            );
            let body = ErrorResponse {
                error: "Please login to continue".to_string(),
                code: "UNAUTHENTICATED".to_string(),
                success: false,
            };
            (StatusCode::UNAUTHORIZED, Json(body)).into_response()
        }
    }
}

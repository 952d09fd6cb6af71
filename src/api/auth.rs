use axum::{extract::State, response::Json, routing::post, Router};

use crate::auth::{AuthError, AuthService, LoginRequest, LoginResponse};

/// Authentication routes
pub fn auth_routes(auth_service: AuthService) -> Router {
    Router::new()
        .route("/api/login", post(login))
        .with_state(auth_service)
}

/// Login user. A missing or unreadable body counts as missing credentials.
#[tracing::instrument(skip_all)]
async fn login(
    State(auth_service): State<AuthService>,
    payload: Option<Json<LoginRequest>>,
) -> Result<Json<LoginResponse>, AuthError> {
    let request = payload.map(|Json(request)| request).unwrap_or_default();
    let response = auth_service.login(request)?;
    Ok(Json(response))
}

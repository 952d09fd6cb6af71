use axum::{
    extract::{rejection::QueryRejection, Query, State},
    middleware,
    response::Json,
    routing::get,
    Extension, Router,
};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::auth::{jwt_auth_middleware, AuthService, UserSession};
use crate::models::{ActivityReport, LifetimeReport};
use crate::services::ActivityService;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityQuery {
    /// First instant of the window, inclusive
    pub start_week: Option<String>,
    /// Last instant of the window, inclusive
    pub end_week: Option<String>,
}

/// Statistics routes, all behind JWT authentication
pub fn activity_routes(activity_service: ActivityService, auth_service: AuthService) -> Router {
    Router::new()
        .route("/api/user-info", get(get_user_info))
        .route("/api/user-activity", get(get_user_activity))
        .route_layer(middleware::from_fn_with_state(
            auth_service,
            jwt_auth_middleware,
        ))
        .with_state(activity_service)
}

/// Profile and lifetime statistics of the authenticated user
#[tracing::instrument(skip_all, fields(user_id = session.user_id))]
async fn get_user_info(
    State(activity_service): State<ActivityService>,
    Extension(session): Extension<UserSession>,
) -> Result<Json<LifetimeReport>, ApiError> {
    let report = activity_service.lifetime_statistics(session.user_id)?;
    Ok(Json(report))
}

/// Sessions and statistics of the authenticated user between two dates
#[tracing::instrument(skip_all, fields(user_id = session.user_id))]
async fn get_user_activity(
    State(activity_service): State<ActivityService>,
    Extension(session): Extension<UserSession>,
    query: Result<Query<ActivityQuery>, QueryRejection>,
) -> Result<Json<ActivityReport>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let report = activity_service.window_statistics(
        session.user_id,
        query.start_week.as_deref(),
        query.end_week.as_deref(),
    )?;
    Ok(Json(report))
}

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::activity::activity_routes;
use super::auth::auth_routes;
use super::health::health_check;
use crate::auth::{cors_layer, security_headers_layer, AuthService, JwtService};
use crate::config::AppConfig;
use crate::services::{ActivityService, Clock};
use crate::store::UserRepository;

/// Services shared by every route
#[derive(Clone, Debug)]
pub struct AppState {
    pub auth_service: AuthService,
    pub activity_service: ActivityService,
}

impl AppState {
    pub fn new(config: &AppConfig, users: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expires_in);

        Self {
            auth_service: AuthService::new(jwt_service, users.clone()),
            activity_service: ActivityService::new(users, clock),
        }
    }
}

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(auth_routes(state.auth_service.clone()))
        .merge(activity_routes(state.activity_service, state.auth_service))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security_headers_layer())
                .layer(cors_layer()),
        )
}

use std::sync::Arc;

use crate::auth::password::verify_password;
use crate::auth::{AuthError, JwtService, LoginRequest, LoginResponse, UserSession};
use crate::store::UserRepository;

#[derive(Clone)]
pub struct AuthService {
    jwt_service: JwtService,
    users: Arc<dyn UserRepository>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("jwt_service", &self.jwt_service)
            .finish_non_exhaustive()
    }
}

impl AuthService {
    pub fn new(jwt_service: JwtService, users: Arc<dyn UserRepository>) -> Self {
        Self { jwt_service, users }
    }

    /// Exchange a username and password for a token
    pub fn login(&self, request: LoginRequest) -> Result<LoginResponse, AuthError> {
        let (username, password) = match (request.username, request.password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                (username, password)
            }
            _ => return Err(AuthError::MissingCredentials),
        };

        let user = self
            .users
            .find_by_username(&username)
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(&password, &user.password_hash)? {
            tracing::info!(user_id = user.id, "Rejected login with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.jwt_service.create_token(user.id)?;
        tracing::info!(user_id = user.id, "User logged in");

        Ok(LoginResponse {
            token,
            user_id: user.id,
        })
    }

    /// Validate a bearer token and return the session it carries
    pub fn validate_session(&self, token: &str) -> Result<UserSession, AuthError> {
        self.jwt_service.extract_user_session(token)
    }
}

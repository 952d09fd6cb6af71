// API routes and handlers

pub mod activity;
pub mod auth;
pub mod errors;
pub mod health;
pub mod routes;

pub use errors::ApiError;
pub use routes::{create_routes, AppState};

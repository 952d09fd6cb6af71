//! Running statistics backend: authenticates users and computes lifetime and
//! date-window statistics over their running sessions.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod services;
pub mod store;

use anyhow::{bail, Context, Result};
use chrono::Duration;
use std::env;
use std::path::PathBuf;

pub mod seeding;

pub use seeding::DemoSeeder;

use crate::store::InMemoryUserStore;

const DEV_JWT_SECRET: &str = "your-secret-key-change-in-production";
/// Ten years
const MAX_JWT_EXPIRES_IN_HOURS: i64 = 87_600;

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub log_level: String,
    pub jwt_secret: String,
    pub jwt_expires_in: Duration,
    pub data_path: Option<PathBuf>,
    pub seed_demo_data: bool,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("environment", &self.environment)
            .field("log_level", &self.log_level)
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expires_in", &self.jwt_expires_in)
            .field("data_path", &self.data_path)
            .field("seed_demo_data", &self.seed_demo_data)
            .finish()
    }
}

impl AppConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid port number")?;
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ if environment == "production" => bail!("JWT_SECRET must be set in production"),
            _ => DEV_JWT_SECRET.to_string(),
        };

        let jwt_expires_in_hours: i64 = env::var("JWT_EXPIRES_IN_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .context("JWT_EXPIRES_IN_HOURS must be a whole number of hours")?;
        if !(1..=MAX_JWT_EXPIRES_IN_HOURS).contains(&jwt_expires_in_hours) {
            bail!("JWT_EXPIRES_IN_HOURS must be between 1 and {MAX_JWT_EXPIRES_IN_HOURS}");
        }
        let jwt_expires_in = Duration::try_hours(jwt_expires_in_hours)
            .context("JWT_EXPIRES_IN_HOURS is out of range")?;

        let data_path = env::var("DATA_PATH").ok().filter(|p| !p.is_empty()).map(PathBuf::from);
        let seed_demo_data = match env::var("SEED_DEMO_DATA") {
            Ok(value) => value
                .parse()
                .context("SEED_DEMO_DATA must be true or false")?,
            Err(_) => environment == "development",
        };

        Ok(AppConfig {
            host,
            port,
            environment,
            log_level,
            jwt_secret,
            jwt_expires_in,
            data_path,
            seed_demo_data,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Load the user dataset, falling back to demo users when allowed
    pub fn load_user_store(&self) -> Result<InMemoryUserStore> {
        if let Some(path) = &self.data_path {
            return InMemoryUserStore::from_path(path)
                .with_context(|| format!("Failed to load users from {}", path.display()));
        }

        if self.seed_demo_data {
            let users = DemoSeeder::default().demo_users(chrono::Utc::now())?;
            return Ok(InMemoryUserStore::from_users(users)?);
        }

        bail!("No user data: set DATA_PATH or SEED_DEMO_DATA=true")
    }
}

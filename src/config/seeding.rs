use anyhow::{Context, Result};
use bcrypt::DEFAULT_COST;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use crate::auth::password::hash_password_with_cost;
use crate::models::{RunningSession, User, UserProfile};

/// Builds a small in-memory dataset for local development.
pub struct DemoSeeder {
    password: String,
    cost: u32,
}

impl Default for DemoSeeder {
    fn default() -> Self {
        Self::new("password123")
    }
}

impl DemoSeeder {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            cost: DEFAULT_COST,
        }
    }

    /// Override the bcrypt cost, mostly useful to keep tests fast.
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// Demo users whose history is laid out relative to `now`.
    pub fn demo_users(&self, now: DateTime<Utc>) -> Result<Vec<User>> {
        tracing::info!("Seeding demo users...");

        let password_hash = hash_password_with_cost(&self.password, self.cost)
            .context("Failed to hash demo password")?;

        let users = vec![
            User {
                id: 1,
                username: "sophiemartin".to_string(),
                password_hash: password_hash.clone(),
                user_infos: Some(UserProfile {
                    first_name: Some(json!("Sophie")),
                    last_name: Some(json!("Martin")),
                    created_at: now - Duration::days(56),
                    age: Some(json!(32)),
                    weight: Some(json!(60.0)),
                    height: Some(json!(165.0)),
                    profile_picture: None,
                    weekly_goal: Some(json!(3)),
                    gender: Some(json!("female")),
                }),
                running_data: Some(training_block(now, 8)),
            },
            User {
                id: 2,
                username: "emmaleroy".to_string(),
                password_hash,
                user_infos: Some(UserProfile {
                    first_name: Some(json!("Emma")),
                    last_name: Some(json!("Leroy")),
                    created_at: now - Duration::days(14),
                    age: Some(json!(27)),
                    weight: None,
                    height: None,
                    profile_picture: None,
                    weekly_goal: Some(json!(2)),
                    gender: None,
                }),
                running_data: Some(training_block(now, 2)),
            },
        ];

        tracing::info!(users = users.len(), "Demo users ready");
        Ok(users)
    }
}

/// Three runs a week over the last `weeks` weeks, plus one run scheduled in
/// the future.
fn training_block(now: DateTime<Utc>, weeks: i64) -> Vec<RunningSession> {
    let mut sessions = Vec::new();

    for week in 0..weeks {
        for (offset, distance) in [(1, 5.0), (3, 7.5), (6, 12.0)] {
            let days_ago = week * 7 + offset;
            let distance = distance + week as f64 * 0.5;
            sessions.push(RunningSession::new(
                now - Duration::days(days_ago),
                distance,
                distance * 6.0,
                distance * 65.0,
            ));
        }
    }

    sessions.push(RunningSession::new(now + Duration::days(2), 10.0, 60.0, 650.0));
    sessions
}

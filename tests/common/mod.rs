use std::sync::{Arc, Once};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use run_tracker::api::{create_routes, AppState};
use run_tracker::auth::password::hash_password_with_cost;
use run_tracker::config::AppConfig;
use run_tracker::models::{RunningSession, User, UserProfile};
use run_tracker::services::FixedClock;
use run_tracker::store::InMemoryUserStore;
use serde_json::{json, Value};
use tower::ServiceExt;

static INIT: Once = Once::new();

pub const TEST_PASSWORD: &str = "long-run-sunday";
pub const TEST_SECRET: &str = "test_secret_key_for_testing_only";

/// Initialize test logging
pub fn init_test_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .init();
    });
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

pub fn run(date: DateTime<Utc>, distance: f64, duration: f64, calories: f64) -> RunningSession {
    RunningSession::new(date, distance, duration, calories)
}

/// Fixture users
pub struct MockDataGenerator;

impl MockDataGenerator {
    /// Runner created on 2024-01-01 with two runs on 01-02, one on 01-05,
    /// a March block and a run scheduled far in the future.
    pub fn runner() -> User {
        let mut profile = UserProfile::new(at(2024, 1, 1, 0));
        profile.first_name = Some(json!("Sophie"));
        profile.last_name = Some(json!("Martin"));
        profile.age = Some(json!(32));
        profile.weekly_goal = Some(json!(3));

        User {
            id: 1,
            username: "sophiemartin".to_string(),
            password_hash: hash_password_with_cost(TEST_PASSWORD, 4).unwrap(),
            user_infos: Some(profile),
            running_data: Some(vec![
                run(at(2024, 3, 5, 7), 6.0, 36.0, 420.0),
                run(at(2024, 1, 2, 7), 5.0, 30.0, 350.0),
                run(at(2024, 3, 8, 7), 8.0, 48.0, 560.0),
                run(at(2024, 1, 2, 18), 3.0, 20.0, 200.0),
                run(at(2024, 3, 2, 7), 4.0, 25.0, 280.0),
                run(at(2024, 1, 5, 7), 10.0, 60.0, 700.0),
                run(at(2030, 6, 1, 7), 42.2, 240.0, 2900.0),
            ]),
        }
    }

    /// Registered user without any recorded data
    pub fn newcomer() -> User {
        User {
            id: 2,
            username: "newcomer".to_string(),
            password_hash: hash_password_with_cost(TEST_PASSWORD, 4).unwrap(),
            user_infos: None,
            running_data: None,
        }
    }

    pub fn store() -> InMemoryUserStore {
        InMemoryUserStore::from_users(vec![Self::runner(), Self::newcomer()]).unwrap()
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: "test".to_string(),
        log_level: "debug".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        jwt_expires_in: Duration::hours(1),
        data_path: None,
        seed_demo_data: false,
    }
}

/// Router over the fixture users with the clock pinned to `now`
pub fn create_test_app(now: DateTime<Utc>) -> Router {
    create_test_app_with(MockDataGenerator::store(), now)
}

/// Router over a custom store with the clock pinned to `now`
pub fn create_test_app_with(store: InMemoryUserStore, now: DateTime<Utc>) -> Router {
    let state = AppState::new(&test_config(), Arc::new(store), Arc::new(FixedClock(now)));
    create_routes(state)
}

pub struct ApiTestHelpers;

impl ApiTestHelpers {
    pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }

    pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(Method::GET).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        Self::send(app, builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        Self::send(app, request).await
    }

    /// Log in and return the issued token
    pub async fn login(app: &Router, username: &str) -> String {
        let (status, body) = Self::post_json(
            app,
            "/api/login",
            json!({ "username": username, "password": TEST_PASSWORD }),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }
}

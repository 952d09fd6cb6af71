use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{timestamp, RunningSession};

pub type UserId = u32;

/// A stored user record: credentials, profile and running history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
    #[serde(default)]
    pub user_infos: Option<UserProfile>,
    #[serde(default)]
    pub running_data: Option<Vec<RunningSession>>,
}

/// Profile metadata. Only `created_at` takes part in any computation, the
/// rest is kept as raw JSON and passed through to clients untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<Value>,
    #[serde(with = "timestamp::flexible")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_goal: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Value>,
}

impl UserProfile {
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            first_name: None,
            last_name: None,
            created_at,
            age: None,
            weight: None,
            height: None,
            profile_picture: None,
            weekly_goal: None,
            gender: None,
        }
    }
}

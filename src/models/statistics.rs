use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{RunningSession, UserProfile};

/// Lifetime totals over every past session of a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStatistics {
    pub total_distance: f64,
    pub total_sessions: usize,
    pub total_duration: f64,
    pub total_calories_burned: f64,
    /// Tracked calendar days without any past session.
    pub rest_days: i64,
}

/// Totals over the sessions of a date window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowStatistics {
    pub total_distance: f64,
    pub total_sessions: usize,
    pub total_duration: f64,
}

/// Inclusive range of instants used to scope an activity query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifetimeReport {
    pub profile: UserProfile,
    pub statistics: AggregateStatistics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityReport {
    pub sessions: Vec<RunningSession>,
    pub statistics: WindowStatistics,
}

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{parse_instant, ActivityReport, DateWindow, LifetimeReport, UserId};
use crate::services::session_filter::{select_past_sessions, select_window};
use crate::services::statistics_service::{compute_lifetime_stats, compute_window_stats};
use crate::services::Clock;
use crate::store::UserRepository;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ActivityError {
    #[error("startWeek and endWeek are required")]
    MissingWindowBounds,
    #[error("{field} is not a valid date: {value}")]
    InvalidDate { field: &'static str, value: String },
    #[error("User {0} not found")]
    UserNotFound(UserId),
    #[error("Can not get data for user {0}")]
    MissingUserData(UserId),
}

/// Computes statistics for authenticated users.
#[derive(Clone)]
pub struct ActivityService {
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for ActivityService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityService").finish_non_exhaustive()
    }
}

impl ActivityService {
    pub fn new(users: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { users, clock }
    }

    /// Profile plus lifetime totals over every past session.
    pub fn lifetime_statistics(&self, user_id: UserId) -> Result<LifetimeReport, ActivityError> {
        let user = self
            .users
            .find_by_id(user_id)
            .ok_or(ActivityError::UserNotFound(user_id))?;

        let sessions = user
            .running_data
            .ok_or(ActivityError::MissingUserData(user_id))?;
        let profile = user
            .user_infos
            .ok_or(ActivityError::MissingUserData(user_id))?;

        let now = self.clock.now();
        let past = select_past_sessions(&sessions, now);
        let statistics = compute_lifetime_stats(&past, &profile, now);

        tracing::debug!(
            user_id,
            sessions = statistics.total_sessions,
            rest_days = statistics.rest_days,
            "Computed lifetime statistics"
        );

        Ok(LifetimeReport { profile, statistics })
    }

    /// Sessions and totals between two inclusive bounds.
    ///
    /// Bounds are checked before the user is looked up.
    pub fn window_statistics(
        &self,
        user_id: UserId,
        start_week: Option<&str>,
        end_week: Option<&str>,
    ) -> Result<ActivityReport, ActivityError> {
        let (start_week, end_week) = match (non_blank(start_week), non_blank(end_week)) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(ActivityError::MissingWindowBounds),
        };

        let window = DateWindow::new(
            parse_bound("startWeek", start_week)?,
            parse_bound("endWeek", end_week)?,
        );

        let user = self
            .users
            .find_by_id(user_id)
            .ok_or(ActivityError::UserNotFound(user_id))?;
        let sessions = user
            .running_data
            .ok_or(ActivityError::MissingUserData(user_id))?;

        let now = self.clock.now();
        let selected = select_window(&sessions, &window, now);
        let statistics = compute_window_stats(&selected);

        tracing::debug!(
            user_id,
            start = %window.start,
            end = %window.end,
            sessions = statistics.total_sessions,
            "Computed window statistics"
        );

        Ok(ActivityReport {
            sessions: selected,
            statistics,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_bound(field: &'static str, value: &str) -> Result<DateTime<Utc>, ActivityError> {
    parse_instant(value).ok_or_else(|| ActivityError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

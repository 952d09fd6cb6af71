//! Aggregation over filtered running sessions.
//!
//! Every day-based figure uses UTC calendar dates: account creation, the
//! current instant and session dates are all reduced to their UTC date
//! before days are counted or compared.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{AggregateStatistics, RunningSession, UserProfile, WindowStatistics};

/// Lifetime totals for sessions already restricted to the past.
pub fn compute_lifetime_stats(
    past_sessions: &[RunningSession],
    profile: &UserProfile,
    now: DateTime<Utc>,
) -> AggregateStatistics {
    let tracked = tracked_days(profile.created_at, now);
    let active = active_days(past_sessions, profile.created_at, now);

    AggregateStatistics {
        total_distance: past_sessions.iter().map(|s| s.distance).sum(),
        total_sessions: past_sessions.len(),
        total_duration: past_sessions.iter().map(|s| s.duration).sum(),
        total_calories_burned: past_sessions.iter().map(|s| s.calories_burned).sum(),
        rest_days: tracked - active,
    }
}

/// Totals for a window selection. No date logic happens here.
pub fn compute_window_stats(sessions: &[RunningSession]) -> WindowStatistics {
    WindowStatistics {
        total_distance: sessions.iter().map(|s| s.distance).sum(),
        total_sessions: sessions.len(),
        total_duration: sessions.iter().map(|s| s.duration).sum(),
    }
}

/// Calendar days from account creation through today, both included.
/// Zero if `now` precedes the creation date.
pub fn tracked_days(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let elapsed = (now.date_naive() - created_at.date_naive()).num_days();
    (elapsed + 1).max(0)
}

/// Distinct calendar days with at least one session, counted only inside
/// the tracked range so that it never exceeds [`tracked_days`].
pub fn active_days(
    sessions: &[RunningSession],
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> i64 {
    let first: NaiveDate = created_at.date_naive();
    let today: NaiveDate = now.date_naive();

    let days: BTreeSet<NaiveDate> = sessions
        .iter()
        .map(RunningSession::calendar_day)
        .filter(|day| first <= *day && *day <= today)
        .collect();

    days.len() as i64
}

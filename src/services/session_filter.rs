use chrono::{DateTime, Utc};

use crate::models::{DateWindow, RunningSession};

/// Sessions dated at or before `now`, in input order.
pub fn select_past_sessions(sessions: &[RunningSession], now: DateTime<Utc>) -> Vec<RunningSession> {
    sessions
        .iter()
        .filter(|session| session.is_past(now))
        .cloned()
        .collect()
}

/// Past sessions inside `window`, oldest first.
///
/// Sessions scheduled after `now` are dropped even when the window covers
/// them. An inverted window simply matches nothing.
pub fn select_window(
    sessions: &[RunningSession],
    window: &DateWindow,
    now: DateTime<Utc>,
) -> Vec<RunningSession> {
    let mut selected: Vec<RunningSession> = sessions
        .iter()
        .filter(|session| window.contains(session.date) && session.is_past(now))
        .cloned()
        .collect();

    // stable: same-instant sessions keep their stored order
    selected.sort_by_key(|session| session.date);
    selected
}

use run_tracker::models::{DateWindow, UserProfile};
use run_tracker::services::statistics_service::{active_days, tracked_days};
use run_tracker::services::{
    compute_lifetime_stats, compute_window_stats, select_past_sessions, select_window,
};

use crate::common::{at, run, MockDataGenerator};

#[cfg(test)]
mod statistics_engine_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rest_days_scenario_from_january() {
        // created 2024-01-01, now 2024-01-10: ten tracked days, runs on two of them
        let profile = UserProfile::new(at(2024, 1, 1, 0));
        let now = at(2024, 1, 10, 0);
        let sessions = vec![
            run(at(2024, 1, 2, 7), 5.0, 30.0, 350.0),
            run(at(2024, 1, 2, 18), 3.0, 20.0, 200.0),
            run(at(2024, 1, 5, 7), 10.0, 60.0, 700.0),
        ];

        let past = select_past_sessions(&sessions, now);
        let stats = compute_lifetime_stats(&past, &profile, now);

        assert_eq!(tracked_days(profile.created_at, now), 10);
        assert_eq!(active_days(&past, profile.created_at, now), 2);
        assert_eq!(stats.rest_days, 8);
        assert_eq!(stats.total_sessions, 3);
        assert_eq!(stats.total_distance, 18.0);
    }

    #[test]
    fn test_future_sessions_never_contribute() {
        let user = MockDataGenerator::runner();
        let profile = user.user_infos.unwrap();
        let sessions = user.running_data.unwrap();
        let now = at(2024, 4, 1, 0);

        let past = select_past_sessions(&sessions, now);
        let stats = compute_lifetime_stats(&past, &profile, now);

        assert_eq!(stats.total_sessions, 6);
        assert_eq!(stats.total_distance, 36.0);
        assert_eq!(stats.total_duration, 219.0);
        assert_eq!(stats.total_calories_burned, 2510.0);
    }

    #[test]
    fn test_window_bounds_and_now_both_apply() {
        let sessions = MockDataGenerator::runner().running_data.unwrap();
        let window = DateWindow::new(at(2024, 3, 1, 0), at(2024, 3, 7, 0));

        // 03-08 falls outside the window even though it is in the past
        let later = select_window(&sessions, &window, at(2024, 4, 1, 0));
        let dates: Vec<_> = later.iter().map(|s| s.date).collect();
        assert_eq!(dates, vec![at(2024, 3, 2, 7), at(2024, 3, 5, 7)]);

        // on 03-01 nothing in the window has happened yet
        let early = select_window(&sessions, &window, at(2024, 3, 1, 0));
        assert!(early.is_empty());
        assert_eq!(compute_window_stats(&early).total_sessions, 0);
    }

    #[test]
    fn test_window_stats_over_selection() {
        let sessions = MockDataGenerator::runner().running_data.unwrap();
        let window = DateWindow::new(at(2024, 3, 1, 0), at(2024, 3, 31, 0));

        let selected = select_window(&sessions, &window, at(2024, 4, 1, 0));
        let stats = compute_window_stats(&selected);

        assert_eq!(stats.total_sessions, 3);
        assert_eq!(stats.total_distance, 18.0);
        assert_eq!(stats.total_duration, 109.0);
    }
}

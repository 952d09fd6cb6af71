// Statistics engine and request-level orchestration

pub mod activity_service;
pub mod clock;
pub mod session_filter;
pub mod statistics_service;

pub use activity_service::{ActivityError, ActivityService};
pub use clock::{Clock, FixedClock, SystemClock};
pub use session_filter::{select_past_sessions, select_window};
pub use statistics_service::{compute_lifetime_stats, compute_window_stats};

// Domain records and computed statistics

pub mod running_session;
pub mod statistics;
pub mod timestamp;
pub mod user;

pub use running_session::*;
pub use statistics::*;
pub use timestamp::{format_instant, parse_instant};
pub use user::*;

// User record lookup

pub mod memory;

pub use memory::InMemoryUserStore;

use thiserror::Error;

use crate::models::{User, UserId};

/// Read-only access to stored users. Implementations hand out owned copies
/// so callers never share mutable state across requests.
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn find_by_id(&self, id: UserId) -> Option<User>;

    fn find_by_username(&self, username: &str) -> Option<User>;
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read user data: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse user data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("User {user_id}: running session #{index} has an invalid {field}")]
    InvalidSession {
        user_id: UserId,
        index: usize,
        field: &'static str,
    },
    #[error("Duplicate user id {0}")]
    DuplicateUser(UserId),
    #[error("Duplicate username {0}")]
    DuplicateUsername(String),
}

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::models::{User, UserId};
use crate::store::{StoreError, UserRepository};

/// User records held in memory, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: HashMap<UserId, User>,
    usernames: HashMap<String, UserId>,
}

impl InMemoryUserStore {
    /// Build a store from records, validating every running session.
    pub fn from_users(users: Vec<User>) -> Result<Self, StoreError> {
        let mut store = Self::default();

        for user in users {
            validate_sessions(&user)?;

            if store.users.contains_key(&user.id) {
                return Err(StoreError::DuplicateUser(user.id));
            }
            if store.usernames.contains_key(&user.username) {
                return Err(StoreError::DuplicateUsername(user.username));
            }

            store.usernames.insert(user.username.clone(), user.id);
            store.users.insert(user.id, user);
        }

        Ok(store)
    }

    /// Load a JSON array of user records.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let users: Vec<User> = serde_json::from_str(json)?;
        Self::from_users(users)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let store = Self::from_json(&contents)?;

        tracing::info!(path = %path.display(), users = store.len(), "Loaded user data");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserRepository for InMemoryUserStore {
    fn find_by_id(&self, id: UserId) -> Option<User> {
        self.users.get(&id).cloned()
    }

    fn find_by_username(&self, username: &str) -> Option<User> {
        self.usernames
            .get(username)
            .and_then(|id| self.users.get(id))
            .cloned()
    }
}

fn validate_sessions(user: &User) -> Result<(), StoreError> {
    let sessions = user.running_data.as_deref().unwrap_or_default();

    for (index, session) in sessions.iter().enumerate() {
        session
            .validate()
            .map_err(|field| StoreError::InvalidSession {
                user_id: user.id,
                index,
                field,
            })?;
    }

    Ok(())
}

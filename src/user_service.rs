use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::domain::{User, UserCreate, UserPatch};
use crate::error::UserResult;

/// Connection descriptor used by [`UserService::create_test_service`].
pub const TEST_DATABASE_URL: &str = "sqlite:///:memory:";

/// In-memory owner of every [`User`].
///
/// Ids start at 1 and only grow, so iterating the map by key yields users in
/// creation order. The database url is kept for reference only; nothing connects
/// to it.
#[derive(Debug)]
pub struct UserService {
    database_url: String,
    users: BTreeMap<i64, User>,
    next_id: i64,
}

impl UserService {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            users: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Service backed by the in-memory descriptor, for tests and demos.
    pub fn create_test_service() -> Self {
        Self::new(TEST_DATABASE_URL)
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Creates a user under the next free id.
    ///
    /// The record is validated before anything is stored, so a rejected payload
    /// leaves the store and the id counter untouched.
    #[instrument(skip(self, email), fields(next_id = self.next_id))]
    pub fn create_user(&mut self, name: &str, email: Option<&str>) -> UserResult<User> {
        self.create(UserCreate::new(name, email.map(str::to_string)))
    }

    pub fn create(&mut self, payload: UserCreate) -> UserResult<User> {
        let id = self.next_id;
        let user = User::from_create(id, payload)?;
        self.users.insert(id, user.clone());
        self.next_id += 1;
        debug!(user_id = id, "User stored");
        Ok(user)
    }

    pub fn get_user(&self, id: i64) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn get_user_mut(&mut self, id: i64) -> Option<&mut User> {
        self.users.get_mut(&id)
    }

    /// Snapshot of all users in creation order.
    pub fn list_users(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    /// Applies `patch` to the stored user, or returns `None` if the id is unknown.
    pub fn update_user(&mut self, id: i64, patch: UserPatch) -> Option<&User> {
        let user = self.users.get_mut(&id)?;
        user.on_update(patch);
        debug!(user_id = id, "User updated");
        Some(user)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// True when the address has an `@` and a `.` after the last `@`.
    ///
    /// Nothing in the service calls this on its own.
    pub fn validate_email(email: &str) -> bool {
        match email.rsplit_once('@') {
            Some((_, domain)) => domain.contains('.'),
            None => false,
        }
    }
}

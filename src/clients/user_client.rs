use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::domain::{User, UserCreate, UserPatch};
use crate::error::UserError;
use crate::messages::UserRequest;
use crate::{ADMIN_EMAIL, ADMIN_NAME};

/// Client for the user actor.
#[derive(Clone)]
pub struct UserClient {
    sender: mpsc::Sender<UserRequest>,
}

impl UserClient {
    pub fn new(sender: mpsc::Sender<UserRequest>) -> Self {
        Self { sender }
    }

    pub async fn create_user(&self, name: &str, email: Option<&str>) -> Result<User, UserError> {
        self.create(UserCreate::new(name, email.map(str::to_string))).await
    }

    pub async fn create_admin_user(&self) -> Result<User, UserError> {
        self.create_user(ADMIN_NAME, Some(ADMIN_EMAIL)).await
    }

    /// Asks the actor to stop. Requests already queued ahead of this one are served first.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), UserError> {
        debug!("Sending shutdown");
        self.sender
            .send(UserRequest::Shutdown)
            .await
            .map_err(|_| UserError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(UserClient => fn create(payload: UserCreate) -> User as UserRequest::CreateUser, Error = UserError);
client_method!(UserClient => fn get_user(id: i64) -> Option<User> as UserRequest::GetUser, Error = UserError);
client_method!(UserClient => fn list_users() -> Vec<User> as UserRequest::ListUsers, Error = UserError);
client_method!(UserClient => fn update_user(id: i64, patch: UserPatch) -> Option<User> as UserRequest::UpdateUser, Error = UserError);
client_method!(UserClient => fn user_count() -> usize as UserRequest::UserCount, Error = UserError);

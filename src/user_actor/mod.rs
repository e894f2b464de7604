//! Task that owns a [`UserService`] and serves it over a channel.
//!
//! The service itself has no locking; confining it to one task is what makes the
//! [`UserClient`] safe to clone and share.

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::clients::UserClient;
use crate::domain::{User, UserCreate, UserPatch};
use crate::error::UserError;
use crate::messages::{ServiceResponse, UserRequest};
use crate::user_service::UserService;

pub struct UserActor {
    receiver: mpsc::Receiver<UserRequest>,
    service: UserService,
}

impl UserActor {
    pub fn new(buffer_size: usize, service: UserService) -> (Self, UserClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, service };
        (actor, UserClient::new(sender))
    }

    /// Processes one request at a time until `Shutdown` arrives or every client
    /// has been dropped. Returns the service so callers can inspect final state.
    #[instrument(name = "user_actor", skip(self))]
    pub async fn run(mut self) -> UserService {
        info!(database_url = %self.service.database_url(), "UserActor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                UserRequest::CreateUser { payload, respond_to } => {
                    self.handle_create_user(payload, respond_to);
                }
                UserRequest::GetUser { id, respond_to } => {
                    self.handle_get_user(id, respond_to);
                }
                UserRequest::ListUsers { respond_to } => {
                    self.handle_list_users(respond_to);
                }
                UserRequest::UpdateUser { id, patch, respond_to } => {
                    self.handle_update_user(id, patch, respond_to);
                }
                UserRequest::UserCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.service.user_count()));
                }
                UserRequest::Shutdown => {
                    info!("UserActor shutting down");
                    break;
                }
            }
        }

        info!(user_count = self.service.user_count(), "UserActor stopped");
        self.service
    }

    #[instrument(fields(user_name = %payload.name), skip(self, payload, respond_to))]
    fn handle_create_user(&mut self, payload: UserCreate, respond_to: ServiceResponse<User, UserError>) {
        debug!("Processing create_user request");

        let result = self.service.create(payload);
        match &result {
            Ok(user) => info!(user_id = user.id, "User created successfully"),
            Err(e) => error!(error = %e, "User creation rejected"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(user_id = id), skip(self, respond_to))]
    fn handle_get_user(&self, id: i64, respond_to: ServiceResponse<Option<User>, UserError>) {
        debug!("Processing get_user request");

        let user = self.service.get_user(id).cloned();
        match &user {
            Some(user) => debug!(user_name = %user.name, "User found"),
            None => debug!("User not found"),
        }

        let _ = respond_to.send(Ok(user));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_users(&self, respond_to: ServiceResponse<Vec<User>, UserError>) {
        debug!("Processing list_users request");

        let users = self.service.list_users();
        debug!(user_count = users.len(), "Listed users");

        let _ = respond_to.send(Ok(users));
    }

    #[instrument(fields(user_id = id), skip(self, patch, respond_to))]
    fn handle_update_user(
        &mut self,
        id: i64,
        patch: UserPatch,
        respond_to: ServiceResponse<Option<User>, UserError>,
    ) {
        debug!("Processing update_user request");

        let user = self.service.update_user(id, patch).cloned();
        match &user {
            Some(_) => info!("User updated successfully"),
            None => debug!("User not found for update"),
        }

        let _ = respond_to.send(Ok(user));
    }
}

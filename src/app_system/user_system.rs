use tracing::{error, info, instrument};

use crate::clients::UserClient;
use crate::config::ServiceConfig;
use crate::error::UserError;
use crate::user_actor::UserActor;
use crate::user_service::UserService;

/// Starts the user actor and owns its task handle.
pub struct UserSystem {
    pub user_client: UserClient,
    handle: tokio::task::JoinHandle<UserService>,
}

impl UserSystem {
    /// Must be called from within a tokio runtime.
    #[instrument(name = "user_system", skip(config), fields(database_url = %config.database_url))]
    pub fn new(config: &ServiceConfig) -> Self {
        let service = UserService::new(config.database_url.clone());
        let (actor, user_client) = UserActor::new(config.channel_buffer, service);
        let handle = tokio::spawn(actor.run());

        info!("User system started");

        Self { user_client, handle }
    }

    /// Stops the actor after it drains queued requests and returns the final service state.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<UserService, UserError> {
        info!("Shutting down user system");

        self.user_client.shutdown().await?;
        drop(self.user_client);

        match self.handle.await {
            Ok(service) => {
                info!(user_count = service.user_count(), "User system shutdown complete");
                Ok(service)
            }
            Err(e) => {
                error!(error = ?e, "User actor task failed");
                Err(UserError::ActorCommunicationError(format!("Actor task failed: {}", e)))
            }
        }
    }
}

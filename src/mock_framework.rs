//! # Mock Framework
//!
//! Utilities for testing [`UserClient`] in isolation.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its channel,
//! then use [`expect_create`], [`expect_get`] or [`expect_update`] to assert what the
//! client sent and to answer it.

use tokio::sync::{mpsc, oneshot};

use crate::clients::UserClient;
use crate::domain::{User, UserCreate, UserPatch};
use crate::error::UserError;
use crate::messages::UserRequest;

type Responder<T> = oneshot::Sender<Result<T, UserError>>;

/// Creates a client wired to a receiver the test controls instead of a running actor.
pub fn create_mock_client(buffer_size: usize) -> (UserClient, mpsc::Receiver<UserRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (UserClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create(receiver: &mut mpsc::Receiver<UserRequest>) -> Option<(UserCreate, Responder<User>)> {
    match receiver.recv().await {
        Some(UserRequest::CreateUser { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get(receiver: &mut mpsc::Receiver<UserRequest>) -> Option<(i64, Responder<Option<User>>)> {
    match receiver.recv().await {
        Some(UserRequest::GetUser { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<UserRequest>,
) -> Option<(i64, UserPatch, Responder<Option<User>>)> {
    match receiver.recv().await {
        Some(UserRequest::UpdateUser { id, patch, respond_to }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let get_task = tokio::spawn(async move { client.get_user(3).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, 3);
        responder.send(Ok(None)).unwrap();

        assert_eq!(get_task.await.unwrap(), Ok(None));
    }

    #[tokio::test]
    async fn test_unexpected_message_yields_none() {
        let (client, mut receiver) = create_mock_client(10);

        tokio::spawn(async move { client.shutdown().await });

        assert!(expect_create(&mut receiver).await.is_none());
    }
}

use tokio::sync::oneshot;

use crate::domain::{User, UserCreate, UserPatch};
use crate::error::UserError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the user actor. Each variant carries its parameters and a
/// oneshot channel for the response.
#[derive(Debug)]
pub enum UserRequest {
    CreateUser {
        payload: UserCreate,
        respond_to: ServiceResponse<User, UserError>,
    },
    GetUser {
        id: i64,
        respond_to: ServiceResponse<Option<User>, UserError>,
    },
    ListUsers {
        respond_to: ServiceResponse<Vec<User>, UserError>,
    },
    UpdateUser {
        id: i64,
        patch: UserPatch,
        respond_to: ServiceResponse<Option<User>, UserError>,
    },
    UserCount {
        respond_to: ServiceResponse<usize, UserError>,
    },
    Shutdown,
}

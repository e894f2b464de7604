use thiserror::Error;

/// Errors that can occur during user operations.
///
/// Missing users are not errors: lookups and updates report absence with `None`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User validation error: {0}")]
    ValidationError(String),
    #[error("Invalid user patch: {0}")]
    InvalidPatch(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

pub type UserResult<T> = std::result::Result<T, UserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_keeps_message() {
        let err = UserError::ValidationError("User name cannot be empty".to_string());
        assert_eq!(err.to_string(), "User validation error: User name cannot be empty");
    }
}

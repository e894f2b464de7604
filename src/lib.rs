//! # User Registry
//!
//! A validated [`User`] record and an in-memory [`UserService`] with
//! create/read/update/list operations.
//!
//! The service is plain synchronous code. For shared access from many tasks,
//! [`UserSystem`] confines one service to a [`UserActor`] and hands out cloneable
//! [`UserClient`]s.
//!
//! ```no_run
//! use user_registry::{create_admin_user, UserService};
//!
//! let mut service = UserService::create_test_service();
//! let admin = create_admin_user(&mut service)?;
//! assert_eq!(admin.id, 1);
//! # Ok::<(), user_registry::UserError>(())
//! ```

pub mod app_system;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod messages;
pub mod user_actor;
pub mod user_service;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, UserSystem};
pub use clients::UserClient;
pub use config::ServiceConfig;
pub use domain::{User, UserCreate, UserPatch};
pub use error::{UserError, UserResult};
pub use user_actor::UserActor;
pub use user_service::UserService;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:///users.db";

/// Upper bound on stored users. Declared for configuration only; nothing enforces it.
pub const MAX_USERS: usize = 1000;

const VERSION: &str = "1.0.0";

pub(crate) const ADMIN_NAME: &str = "Administrator";
pub(crate) const ADMIN_EMAIL: &str = "admin@example.com";

pub fn get_version() -> &'static str {
    VERSION
}

/// Creates the default administrator account.
pub fn create_admin_user(service: &mut UserService) -> UserResult<User> {
    service.create_user(ADMIN_NAME, Some(ADMIN_EMAIL))
}

/// Fills a service with the demo accounts: the administrator, one user with an
/// email and one without.
pub fn seed_demo_users(service: &mut UserService) -> UserResult<()> {
    create_admin_user(service)?;
    service.create_user("John Doe", Some("john@example.com"))?;
    service.create_user("Jane Smith", None)?;
    Ok(())
}

/// Renders the count line followed by one line per user, in creation order.
pub fn render_listing(service: &UserService) -> String {
    let mut out = format!("Created {} users:\n", service.user_count());
    for user in service.list_users() {
        out.push_str(&format!("  - {}\n", user));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_and_constants() {
        assert_eq!(get_version(), "1.0.0");
        assert_eq!(MAX_USERS, 1000);
        assert_eq!(DEFAULT_DATABASE_URL, "sqlite:///users.db");
    }

    #[test]
    fn test_create_admin_user() {
        let mut service = UserService::create_test_service();
        let admin = create_admin_user(&mut service).unwrap();
        assert_eq!(admin.name, "Administrator");
        assert_eq!(admin.email.as_deref(), Some("admin@example.com"));
        assert!(UserService::validate_email(admin.email.as_deref().unwrap()));
    }

    #[test]
    fn test_render_empty_listing() {
        let service = UserService::create_test_service();
        assert_eq!(render_listing(&service), "Created 0 users:\n");
    }
}

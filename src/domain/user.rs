use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{UserError, UserResult};

/// Represents a registered user in the system.
///
/// Fields are public: [`crate::UserService::update_user`] overwrites them in place
/// without running the constructor checks again.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: Option<String>,
}

/// Payload for updating an existing user.
///
/// `email: Some(None)` clears the address, `email: None` leaves it alone.
/// The id is not patchable: it is the key the service stores the user under.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present_field")]
    pub email: Option<Option<String>>,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `id` - Identifier, must not be negative
    /// * `name` - Display name, must contain something other than whitespace
    /// * `email` - Optional address, its format is not checked here
    ///
    /// # Errors
    /// The id is checked before the name, so a record that breaks both rules
    /// reports the id.
    pub fn new(id: i64, name: impl Into<String>, email: Option<String>) -> UserResult<Self> {
        // "positive" is the historical wording; zero is accepted.
        if id < 0 {
            return Err(UserError::ValidationError("User ID must be positive".to_string()));
        }
        let name = name.into();
        if is_blank(&name) {
            return Err(UserError::ValidationError("User name cannot be empty".to_string()));
        }
        Ok(Self { id, name, email })
    }

    pub(crate) fn from_create(id: i64, payload: UserCreate) -> UserResult<Self> {
        Self::new(id, payload.name, payload.email)
    }

    /// Overwrites every field the patch carries. No validation is rerun.
    pub(crate) fn on_update(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let email = self.email.as_deref().filter(|e| !e.is_empty()).unwrap_or("no email");
        write!(f, "{} ({})", self.name, email)
    }
}

impl UserCreate {
    pub fn new(name: impl Into<String>, email: Option<String>) -> Self {
        Self {
            name: name.into(),
            email,
        }
    }
}

impl UserPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn email(email: Option<String>) -> Self {
        Self {
            email: Some(email),
            ..Self::default()
        }
    }

    /// Builds a patch from an arbitrary field map.
    ///
    /// Only `name` and `email` are recognised; any other key is dropped.
    pub fn from_value(value: serde_json::Value) -> UserResult<Self> {
        if !value.is_object() {
            return Err(UserError::InvalidPatch(format!("expected an object, got {}", value)));
        }
        serde_json::from_value(value).map_err(|e| UserError::InvalidPatch(e.to_string()))
    }

    pub fn from_json(json: &str) -> UserResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| UserError::InvalidPatch(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

// Unicode whitespace plus the ASCII information separators U+001C..U+001F.
fn is_blank(name: &str) -> bool {
    name.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
        .is_empty()
}

// A key that is present (even as null) becomes `Some`, an absent key stays `None`.
fn present_field<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

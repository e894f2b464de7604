use serde::Deserialize;

use crate::error::{UserError, UserResult};
use crate::user_service::TEST_DATABASE_URL;
use crate::DEFAULT_DATABASE_URL;

const DEFAULT_CHANNEL_BUFFER: usize = 32;

/// Environment variables are read with this prefix, e.g. `USER_REGISTRY_CHANNEL_BUFFER`.
const ENV_PREFIX: &str = "USER_REGISTRY";

/// Settings for starting a [`crate::UserSystem`].
///
/// Library API: the demo binary runs on [`crate::UserService::create_test_service`]
/// and does not read it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub database_url: String,
    pub channel_buffer: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

impl ServiceConfig {
    pub fn in_memory() -> Self {
        Self {
            database_url: TEST_DATABASE_URL.to_string(),
            ..Self::default()
        }
    }

    /// Loads configuration from `USER_REGISTRY_DATABASE_URL` and
    /// `USER_REGISTRY_CHANNEL_BUFFER`, falling back to defaults.
    pub fn from_env() -> UserResult<Self> {
        Self::load(None)
    }

    fn load(vars: Option<config::Map<String, String>>) -> UserResult<Self> {
        let settings = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(vars),
            )
            .build()
            .map_err(|e| UserError::Config(e.to_string()))?;

        let config: Self = settings
            .try_deserialize()
            .map_err(|e| UserError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> UserResult<()> {
        if self.channel_buffer == 0 {
            return Err(UserError::Config(
                "channel buffer must be positive (set USER_REGISTRY_CHANNEL_BUFFER)".to_string(),
            ));
        }
        Ok(())
    }
}

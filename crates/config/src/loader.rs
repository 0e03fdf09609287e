//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and an
//!   optional JSON profile file.
//! - Provide a builder-pattern `ConfigLoader` for hierarchical merging:
//!   later calls overwrite earlier ones, so callers apply the profile
//!   first, then the environment, then explicit CLI overrides.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv
//!   loading in tests.
//!
//! Does NOT handle:
//! - Performing the login itself (see `crates/client`).
//! - Persisting configuration changes back to disk.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over profile file values.
//! - `load_dotenv()` must be called explicitly to enable `.env` loading.
//! - Endpoint overrides must parse as absolute URLs; the target-service
//!   URL is an opaque passthrough and is deliberately not validated.

use secrecy::SecretString;
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

use crate::types::{Config, Credentials, Endpoints, ProfileConfig};

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Username is required (set SSO_USERNAME or use a profile file)")]
    MissingUsername,

    #[error("Password is required (set SSO_PASSWORD or use a profile file)")]
    MissingPassword,

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Failed to read profile file at {path}")]
    ProfileFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse profile file at {path}")]
    ProfileFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}

/// Configuration loader that builds config from environment variables,
/// profile files, and explicit overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    username: Option<String>,
    password: Option<SecretString>,
    user_agent: Option<String>,
    login_page_url: Option<String>,
    login_url: Option<String>,
    service_url: Option<String>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If the `DOTENV_DISABLED` environment variable is set to "true" or
    /// "1", this is a no-op. A missing `.env` file is not an error.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        let disabled = matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        );
        if !disabled {
            match dotenvy::dotenv() {
                Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
                Err(e) if e.not_found() => {}
                Err(e) => {
                    return Err(ConfigError::InvalidValue {
                        var: ".env".to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }
        Ok(self)
    }

    /// Set the path of the JSON profile file read by `load_profile`.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Load values from the JSON profile file, if one is configured.
    ///
    /// The path comes from `with_config_path` or the `SSO_CONFIG_PATH`
    /// environment variable. With neither set this is a no-op; an
    /// explicitly named file that cannot be read or parsed is an error.
    pub fn load_profile(mut self) -> Result<Self, ConfigError> {
        let path = match self
            .config_path
            .clone()
            .or_else(|| env_var_or_none("SSO_CONFIG_PATH").map(PathBuf::from))
        {
            Some(path) => path,
            None => return Ok(self),
        };

        let content =
            std::fs::read_to_string(&path).map_err(|source| ConfigError::ProfileFileRead {
                path: path.clone(),
                source,
            })?;
        let profile: ProfileConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::ProfileFileParse {
                path: path.clone(),
                source,
            })?;

        self.apply_profile(profile)?;
        Ok(self)
    }

    /// Apply profile values to the loader.
    fn apply_profile(&mut self, profile: ProfileConfig) -> Result<(), ConfigError> {
        if let Some(username) = profile.username {
            self.username = Some(username);
        }
        if let Some(password) = profile.password {
            self.password = Some(SecretString::new(password.into()));
        }
        if let Some(user_agent) = profile.user_agent {
            self.user_agent = Some(user_agent);
        }
        if let Some(url) = profile.login_page_url {
            self.login_page_url = Some(validated_url("login_page_url", url)?);
        }
        if let Some(url) = profile.login_url {
            self.login_url = Some(validated_url("login_url", url)?);
        }
        if let Some(url) = profile.service_url {
            self.service_url = Some(url);
        }
        Ok(())
    }

    /// Read configuration from environment variables.
    ///
    /// Environment variables take precedence over profile settings when
    /// called after `load_profile`.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        if let Some(username) = env_var_or_none("SSO_USERNAME") {
            self.username = Some(username);
        }
        if let Some(password) = env_var_or_none("SSO_PASSWORD") {
            self.password = Some(SecretString::new(password.into()));
        }
        if let Some(user_agent) = env_var_or_none("SSO_USER_AGENT") {
            self.user_agent = Some(user_agent);
        }
        if let Some(url) = env_var_or_none("SSO_LOGIN_PAGE_URL") {
            self.login_page_url = Some(validated_url("SSO_LOGIN_PAGE_URL", url)?);
        }
        if let Some(url) = env_var_or_none("SSO_LOGIN_URL") {
            self.login_url = Some(validated_url("SSO_LOGIN_URL", url)?);
        }
        if let Some(url) = env_var_or_none("SSO_SERVICE_URL") {
            self.service_url = Some(url);
        }
        Ok(self)
    }

    /// Set the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set the User-Agent header value.
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    /// Set the login-page URL (where the execution token is fetched).
    pub fn with_login_page_url(mut self, url: String) -> Self {
        self.login_page_url = Some(url);
        self
    }

    /// Set the login URL (where the credential form is POSTed).
    pub fn with_login_url(mut self, url: String) -> Self {
        self.login_url = Some(url);
        self
    }

    /// Set the target-service URL recorded with the attempt.
    pub fn with_service_url(mut self, url: String) -> Self {
        self.service_url = Some(url);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let username = self.username.ok_or(ConfigError::MissingUsername)?;
        let password = self.password.ok_or(ConfigError::MissingPassword)?;

        let mut endpoints = Endpoints::default();
        if let Some(url) = self.login_page_url {
            endpoints.login_page_url = validated_url("login_page_url", url)?;
        }
        if let Some(url) = self.login_url {
            endpoints.login_url = validated_url("login_url", url)?;
        }
        if let Some(url) = self.service_url {
            endpoints.service_url = url;
        }

        Ok(Config {
            credentials: Credentials { username, password },
            endpoints,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| Config::default_user_agent().to_string()),
        })
    }
}

/// Check that an endpoint override parses as an absolute URL.
fn validated_url(var: &str, value: String) -> Result<String, ConfigError> {
    Url::parse(&value).map_err(|e| ConfigError::InvalidValue {
        var: var.to_string(),
        message: e.to_string(),
    })?;
    Ok(value)
}

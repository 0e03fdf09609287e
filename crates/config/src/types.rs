//! Configuration types for the SSO login workspace.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LOGIN_PAGE_URL, DEFAULT_LOGIN_URL, DEFAULT_SERVICE_URL, DEFAULT_USER_AGENT,
};

/// Module for serializing SecretString as plain strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// SSO account credentials.
///
/// The password is held as a `SecretString` so it is redacted from Debug
/// output and never logged by accident.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    #[serde(with = "secret_string")]
    pub password: SecretString,
}

/// SSO endpoint set used by a login attempt.
///
/// The login-page and login URLs default to the production SSO but remain
/// overridable; the hard-coded endpoint in earlier clients turned out to
/// be a workaround for an upstream redirect change, not a stable contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// URL of the page that embeds the single-use execution token.
    pub login_page_url: String,
    /// URL the credential form is POSTed to.
    pub login_url: String,
    /// Target-service URL recorded with the attempt (opaque passthrough).
    pub service_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            login_page_url: DEFAULT_LOGIN_PAGE_URL.to_string(),
            login_url: DEFAULT_LOGIN_URL.to_string(),
            service_url: DEFAULT_SERVICE_URL.to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// SSO account credentials.
    pub credentials: Credentials,
    /// Endpoint set for the login exchange.
    pub endpoints: Endpoints,
    /// User-Agent header value for the per-attempt HTTP session.
    pub user_agent: String,
}

impl Config {
    /// Default User-Agent used when no override is configured.
    pub fn default_user_agent() -> &'static str {
        DEFAULT_USER_AGENT
    }
}

/// A profile file entry. All fields are optional; unset fields fall back
/// to environment variables and then to the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub user_agent: Option<String>,
    pub login_page_url: Option<String>,
    pub login_url: Option<String>,
    pub service_url: Option<String>,
}

//! Error types for the SSO login client.

use thiserror::Error;

/// Result type alias for login operations.
pub type Result<T> = std::result::Result<T, LoginError>;

/// Errors that can occur during an SSO login attempt.
#[derive(Error, Debug)]
pub enum LoginError {
    /// The SSO rejected the credential form: anything other than a 302
    /// redirect on the form POST means wrong username or password.
    #[error("Login failed: wrong username or password (SSO answered {status})")]
    CredentialsRejected { status: u16 },

    /// Transport-level failure (connection error, timeout, malformed
    /// response) on either request of the exchange.
    #[error("Login failed: network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The login page no longer embeds an `execution` input field. The
    /// page format changed upstream; retrying cannot help.
    #[error("Execution token not found in the SSO login page")]
    MissingExecution,

    /// The SSO answered 302 without a Location header, so there is no
    /// ticket URL to hand back.
    #[error("SSO redirect is missing the Location header")]
    MissingLocation,
}

impl LoginError {
    /// Check if this error means the credentials were rejected.
    pub fn is_credential_error(&self) -> bool {
        matches!(self, Self::CredentialsRejected { .. })
    }

    /// Check if this error came from the transport rather than the SSO.
    pub fn is_network_error(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Check if this error is a contract violation with the SSO page
    /// format rather than a normal login failure.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::MissingExecution | Self::MissingLocation)
    }
}

//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes so scripts can distinguish error types.
//! - Map LoginError variants to appropriate exit codes.
//!
//! Invariants:
//! - Exit codes 1-4 are reserved for specific error categories.

use sso_client::LoginError;

/// Structured exit codes for sso-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the ticket URL was printed to stdout.
    Success = 0,

    /// General error - configuration problems or generic failure.
    GeneralError = 1,

    /// Authentication failure - the SSO rejected the credentials.
    ///
    /// Scripts should prompt for new credentials and not retry as-is.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ///
    /// Scripts may retry later.
    ConnectionError = 3,

    /// Unexpected SSO response - the login page or redirect no longer
    /// matches the expected format. Retrying cannot help.
    UnexpectedResponse = 4,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    /// Derive the exit code from a failed run.
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<LoginError>() {
            Some(LoginError::CredentialsRejected { .. }) => Self::AuthenticationFailed,
            Some(LoginError::Network(_)) => Self::ConnectionError,
            Some(LoginError::MissingExecution) | Some(LoginError::MissingLocation) => {
                Self::UnexpectedResponse
            }
            None => Self::GeneralError,
        }
    }
}

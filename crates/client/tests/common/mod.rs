//! Common test utilities for the SSO client integration tests.

// Re-export test utilities from sso-client
#[allow(unused_imports)]
pub use sso_client::testing::load_fixture;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;
use sso_client::SsoClient;

/// Build a client with test credentials pointed at a mock SSO.
pub fn test_client(server: &MockServer) -> SsoClient {
    SsoClient::builder("alice", SecretString::new("hunter2".to_string().into()))
        .login_page_url(format!("{}/login?noAutoRedirect=true", server.uri()))
        .login_url(format!("{}/login", server.uri()))
        .user_agent("sso-client-tests/1.0")
        .build()
}

/// The service URL recorded with test attempts. Opaque to the client.
pub const TEST_SERVICE_URL: &str = "https://sso.example.edu/login?TARGET=https%3A%2F%2Fportal.example.edu%2FcasLogin";

/// Matches requests that carry no Cookie header at all.
///
/// Used to pin down that a login attempt starts from a fresh session:
/// cookies set during an earlier attempt must never show up again.
pub struct NoCookieHeader;

impl wiremock::Match for NoCookieHeader {
    fn matches(&self, request: &wiremock::Request) -> bool {
        !request.headers.contains_key("cookie")
    }
}

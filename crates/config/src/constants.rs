//! Centralized constants for the SSO login workspace.
//!
//! Production endpoint defaults live here so the client and CLI share a
//! single source of truth. Every value can be overridden through
//! `ConfigLoader`.

/// Default URL of the SSO login page that embeds the execution token.
///
/// The SSO front end performs a JS redirect when fetched through the plain
/// service URL, so the page must be requested with `noAutoRedirect=true`
/// and the downstream service baked into the query string.
pub const DEFAULT_LOGIN_PAGE_URL: &str = "https://sso.buaa.edu.cn/login?noAutoRedirect=true&service=https%3A%2F%2Fbykc.buaa.edu.cn%2Fsscv%2Fcas%2Flogin";

/// Default URL the credential form is POSTed to.
pub const DEFAULT_LOGIN_URL: &str = "https://sso.buaa.edu.cn/login";

/// Default target-service URL recorded with each login attempt.
///
/// Downstream sites identify themselves to the SSO through this URL; the
/// ticket in the returned redirect is scoped to it.
pub const DEFAULT_SERVICE_URL: &str = "https://sso.buaa.edu.cn/login?TARGET=http%3A%2F%2Fbykc.buaa.edu.cn%2Fsscv%2FcasLogin";

/// Default User-Agent header sent on every request of a login attempt.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

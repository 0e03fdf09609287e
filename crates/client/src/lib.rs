//! BUAA SSO login client.
//!
//! This crate performs one CAS-style login exchange against the
//! university single-sign-on: fetch the login page, extract the embedded
//! single-use execution token, submit the credential form, and return
//! the redirect URL carrying the authentication ticket. Each attempt
//! owns a fresh HTTP session; nothing is cached or retried.

pub mod client;
pub mod error;
mod execution;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::{SsoClient, SsoClientBuilder};
pub use error::{LoginError, Result};

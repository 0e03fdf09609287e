//! Configuration management for the BUAA SSO login workspace.
//!
//! This crate provides types and loaders for supplying the login client
//! with credentials, a user-agent string, and SSO endpoint overrides from
//! environment variables, `.env` files, and an optional JSON profile file.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, Credentials, Endpoints, ProfileConfig};

//! The SSO login client.
//!
//! One public operation: perform a single login exchange and return the
//! redirect URL carrying the authentication ticket. A fresh HTTP session
//! (own cookie store, configured User-Agent, redirects disabled) is
//! built for every attempt and dropped when the attempt returns, on
//! every exit path.

use reqwest::StatusCode;
use reqwest::header::LOCATION;
use secrecy::{ExposeSecret, SecretString};
use sso_config::{Config, Credentials, Endpoints};
use tracing::{debug, info};

use crate::error::{LoginError, Result};
use crate::execution::extract_execution;

/// Fixed localized label of the login form's submit button.
const FORM_SUBMIT_LABEL: &str = "登录";
/// Fixed form type discriminator expected by the SSO.
const FORM_TYPE: &str = "username_password";
/// Fixed CAS event identifier for a form submission.
const FORM_EVENT_ID: &str = "submit";

/// Builder for creating a new SsoClient.
pub struct SsoClientBuilder {
    credentials: Credentials,
    endpoints: Endpoints,
    user_agent: String,
}

impl SsoClientBuilder {
    /// Create a builder with the given credentials and default endpoints.
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            credentials: Credentials {
                username: username.into(),
                password,
            },
            endpoints: Endpoints::default(),
            user_agent: Config::default_user_agent().to_string(),
        }
    }

    /// Set the URL of the page the execution token is fetched from.
    pub fn login_page_url(mut self, url: impl Into<String>) -> Self {
        self.endpoints.login_page_url = url.into();
        self
    }

    /// Set the URL the credential form is POSTed to.
    pub fn login_url(mut self, url: impl Into<String>) -> Self {
        self.endpoints.login_url = url.into();
        self
    }

    /// Set the User-Agent header sent on every request of an attempt.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client.
    pub fn build(self) -> SsoClient {
        SsoClient {
            credentials: self.credentials,
            endpoints: self.endpoints,
            user_agent: self.user_agent,
        }
    }
}

/// BUAA unified-authentication (CAS SSO) login client.
///
/// Credentials are supplied at construction and immutable afterwards.
/// The client holds no connection state; each call to [`SsoClient::login`]
/// owns its session exclusively, so concurrent attempts share nothing.
#[derive(Debug)]
pub struct SsoClient {
    credentials: Credentials,
    endpoints: Endpoints,
    user_agent: String,
}

impl SsoClient {
    /// Create a new client builder.
    pub fn builder(username: impl Into<String>, password: SecretString) -> SsoClientBuilder {
        SsoClientBuilder::new(username, password)
    }

    /// Create a client directly from a loaded configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            credentials: config.credentials,
            endpoints: config.endpoints,
            user_agent: config.user_agent,
        }
    }

    /// Perform one SSO login attempt and return the redirect URL carrying
    /// the authentication ticket.
    ///
    /// `service_url` is the URL the downstream site registers with the
    /// SSO. It is recorded for intent only: the token fetch goes to the
    /// configured login-page URL, which carries the service in its query
    /// string (the SSO front end JS-redirects away from the plain
    /// service URL).
    ///
    /// # Errors
    /// - [`LoginError::CredentialsRejected`] when the form POST answers
    ///   anything other than 302.
    /// - [`LoginError::Network`] on a transport failure during either
    ///   request.
    /// - [`LoginError::MissingExecution`] when the login page no longer
    ///   embeds the token; the form is never submitted in that case.
    pub async fn login(&self, service_url: &str) -> Result<String> {
        debug!(service = %service_url, username = %self.credentials.username, "starting sso login attempt");

        let session = self.build_session()?;
        let execution = self.fetch_execution(&session).await?;
        let form = self.login_form(&execution);

        let response = session
            .post(&self.endpoints.login_url)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::FOUND {
            return Err(LoginError::CredentialsRejected {
                status: status.as_u16(),
            });
        }

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(LoginError::MissingLocation)?
            .to_string();

        info!(%location, "sso login redirect");
        Ok(location)
    }

    /// Build the per-attempt HTTP session.
    ///
    /// The cookie store is required: the SSO ties the execution token to
    /// cookies set by the page GET, and the form POST must carry them.
    /// Redirect following stays disabled so the 302 with the ticket URL
    /// reaches us instead of being consumed by the client.
    fn build_session(&self) -> Result<reqwest::Client> {
        let session = reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(session)
    }

    /// GET the login page and extract the single-use execution token.
    async fn fetch_execution(&self, session: &reqwest::Client) -> Result<String> {
        let response = session.get(&self.endpoints.login_page_url).send().await?;
        let body = response.text().await?;
        let execution = extract_execution(&body).ok_or(LoginError::MissingExecution)?;
        debug!("execution token extracted from login page");
        Ok(execution)
    }

    /// Build the credential form for one attempt.
    fn login_form<'a>(&'a self, execution: &'a str) -> [(&'static str, &'a str); 6] {
        [
            ("username", self.credentials.username.as_str()),
            ("password", self.credentials.password.expose_secret()),
            ("submit", FORM_SUBMIT_LABEL),
            ("type", FORM_TYPE),
            ("execution", execution),
            ("_eventId", FORM_EVENT_ID),
        ]
    }
}

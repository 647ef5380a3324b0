//! Admin authentication for the portfolio backend

mod session;

pub use session::AuthSession;

use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;
use log::debug;

/// Response body of the admin login route
#[derive(Debug, Deserialize)]
struct LoginResponse {
    /// Token issued on success
    token: Option<String>,
}

/// Client for the admin login gate
pub struct AdminAuth {
    /// Base URL of the portfolio backend
    url: String,

    /// HTTP client used for requests
    client: Client,

    /// The current session
    session: Arc<Mutex<Option<AuthSession>>>,

    /// Client options
    options: ClientOptions,
}

impl AdminAuth {
    /// Create a new auth client
    pub(crate) fn new(url: &str, client: Client, options: ClientOptions) -> Self {
        Self {
            url: url.to_string(),
            client,
            session: Arc::new(Mutex::new(None)),
            options,
        }
    }

    fn login_url(&self) -> String {
        format!("{}/api/auths/admin-login", self.url)
    }

    /// Sign in with the owner's credentials and store the session.
    ///
    /// A rejected login surfaces the backend's message, falling back to
    /// "Login failed"; transport problems surface as
    /// "Something went wrong. Try again.".
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, Error> {
        let mut body = HashMap::new();
        body.insert("email".to_string(), email.to_string());
        body.insert("password".to_string(), password.to_string());

        debug!("signing in {}", email);
        let result = Fetch::post(&self.client, &self.login_url())
            .timeout(self.options.request_timeout)
            .json(&body)?
            .execute::<LoginResponse>()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(err @ Error::Api { .. }) => {
                let message = err.server_message().unwrap_or("Login failed");
                return Err(Error::auth(message));
            }
            Err(_) => return Err(Error::auth("Something went wrong. Try again.")),
        };

        let token = response
            .token
            .ok_or_else(|| Error::auth("Login response carried no token"))?;

        let session = AuthSession::new(&token, email);
        let mut current_session = self.session.lock().unwrap();
        *current_session = Some(session.clone());

        Ok(session)
    }

    /// Sign out, destroying the stored session.
    ///
    /// Local only; the backend has no logout route.
    pub fn sign_out(&self) {
        let mut current_session = self.session.lock().unwrap();
        *current_session = None;
    }

    /// Get the current session
    pub fn session(&self) -> Option<AuthSession> {
        let current_session = self.session.lock().unwrap();
        current_session.clone()
    }

    /// Whether an admin session is open
    pub fn is_signed_in(&self) -> bool {
        self.session().is_some()
    }
}

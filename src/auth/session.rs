//! Admin session state

use chrono::{DateTime, Utc};

/// Proof of a completed admin login.
///
/// Created by a successful sign-in, destroyed by sign-out, and read-only in
/// between. The admin surface takes it by reference, so holding one is the
/// only way in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    token: String,
    email: String,
    signed_in_at: DateTime<Utc>,
}

impl AuthSession {
    pub(crate) fn new(token: &str, email: &str) -> Self {
        Self {
            token: token.to_string(),
            email: email.to_string(),
            signed_in_at: Utc::now(),
        }
    }

    /// Opaque token issued by the backend; never decoded client-side
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Email the session was opened with
    pub fn email(&self) -> &str {
        &self.email
    }

    /// When the login completed
    pub fn signed_in_at(&self) -> DateTime<Utc> {
        self.signed_in_at
    }
}

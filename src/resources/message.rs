//! Contact messages and the public form that produces them

use super::{DraftCheck, Resource, SortKey, ValidationError};
use crate::error::Error;
use crate::fetch::Fetch;
use chrono::{DateTime, Utc};
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One message submitted through the public contact form.
///
/// Messages are read/delete-only in the admin area; the only write path is
/// [`ContactClient::send`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Backend-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Visitor's name
    pub name: String,

    /// Optional callback number; the public form does not collect one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Reply address
    pub email: String,

    /// Message body
    pub message: String,

    /// When the visitor submitted the form
    pub submitted_at: DateTime<Utc>,
}

/// Payload the public contact form submits
#[derive(Debug, Clone, Serialize)]
pub struct MessageDraft {
    /// Visitor's name
    pub name: String,

    /// Reply address
    pub email: String,

    /// Message body
    pub message: String,

    /// Optional callback number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Sortable message fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageField {
    Name,
    Email,
    SubmittedAt,
}

impl Resource for Message {
    type SortField = MessageField;
    type Draft = MessageDraft;

    const ENDPOINT: &'static str = "contacts";
    const LABEL: &'static str = "Message";
    const LABEL_PLURAL: &'static str = "messages";
    const DEFAULT_SORT: MessageField = MessageField::SubmittedAt;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.message]
    }

    fn sort_key(&self, field: MessageField) -> SortKey {
        match field {
            MessageField::Name => SortKey::text(&self.name),
            MessageField::Email => SortKey::text(&self.email),
            MessageField::SubmittedAt => SortKey::timestamp(self.submitted_at),
        }
    }

    fn validate(draft: &MessageDraft) -> Result<(), ValidationError> {
        let mut check = DraftCheck::default();
        check.require("name", &draft.name);
        check.require("email", &draft.email);
        check.require("message", &draft.message);
        check.finish()
    }
}

/// Client for the public contact form
pub struct ContactClient {
    url: String,
    http_client: Client,
    timeout: Option<Duration>,
}

impl ContactClient {
    pub(crate) fn new(url: &str, http_client: Client, timeout: Option<Duration>) -> Self {
        Self {
            url: url.to_string(),
            http_client,
            timeout,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/{}", self.url, Message::ENDPOINT)
    }

    /// Validate and submit a visitor message
    pub async fn send(&self, draft: &MessageDraft) -> Result<(), Error> {
        Message::validate(draft)?;

        debug!("submitting contact message for {}", draft.email);
        Fetch::post(&self.http_client, &self.endpoint())
            .timeout(self.timeout)
            .json(draft)?
            .execute_empty()
            .await
    }
}

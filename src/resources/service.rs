//! Service records

use super::{DraftCheck, Editable, Resource, SortKey, ValidationError};
use serde::{Deserialize, Serialize};

/// One service offering listed on the public site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Backend-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Wire name of the icon rendered with the offering
    pub icon: String,

    /// Display title
    pub title: String,

    /// What the service covers
    pub description: String,
}

/// Payload for creating or updating a service
#[derive(Debug, Clone, Serialize)]
pub struct ServiceDraft {
    /// Wire name of an icon from the registry
    pub icon: String,

    /// Display title
    pub title: String,

    /// What the service covers
    pub description: String,
}

/// Sortable service fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceField {
    Icon,
    Title,
    Description,
}

impl Resource for Service {
    type SortField = ServiceField;
    type Draft = ServiceDraft;

    const ENDPOINT: &'static str = "services";
    const LABEL: &'static str = "Service";
    const LABEL_PLURAL: &'static str = "services";
    const DEFAULT_SORT: ServiceField = ServiceField::Title;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }

    fn sort_key(&self, field: ServiceField) -> SortKey {
        match field {
            ServiceField::Icon => SortKey::text(&self.icon),
            ServiceField::Title => SortKey::text(&self.title),
            ServiceField::Description => SortKey::text(&self.description),
        }
    }

    fn validate(draft: &ServiceDraft) -> Result<(), ValidationError> {
        let mut check = DraftCheck::default();
        check.require_icon(&draft.icon);
        check.require("title", &draft.title);
        check.require("description", &draft.description);
        check.finish()
    }
}

impl Editable for Service {}

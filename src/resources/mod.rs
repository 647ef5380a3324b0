//! Typed resource schemas for the portfolio collections

mod message;
mod project;
mod service;
mod skill;

pub use message::{ContactClient, Message, MessageDraft, MessageField};
pub use project::{Project, ProjectDraft, ProjectField};
pub use service::{Service, ServiceDraft, ServiceField};
pub use skill::{Skill, SkillCategory, SkillDraft, SkillField};

use crate::icons::IconId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// One typed entity of a portfolio collection.
///
/// A resource names its REST endpoint, the display labels notifications use,
/// and how its records are searched, sorted, and validated. The admin
/// collection manager is generic over this trait.
pub trait Resource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Fields the collection can be sorted on
    type SortField: Copy + Eq + Send + Sync + 'static;

    /// Payload for create and update calls: the record minus its identifier
    type Draft: Serialize + Clone + Send + Sync + 'static;

    /// Path segment of the collection under `/api/`
    const ENDPOINT: &'static str;

    /// Singular display name used in notifications
    const LABEL: &'static str;

    /// Plural display name used in notifications
    const LABEL_PLURAL: &'static str;

    /// Sort field active before any explicit sort
    const DEFAULT_SORT: Self::SortField;

    /// Backend-assigned identifier
    fn id(&self) -> &str;

    /// Text fields matched against the search term
    fn search_text(&self) -> Vec<&str>;

    /// Ordering key for the given sort field
    fn sort_key(&self, field: Self::SortField) -> SortKey;

    /// Category tag, for resources that carry one
    fn category(&self) -> Option<&str> {
        None
    }

    /// Client-side draft checks run before any network call
    fn validate(draft: &Self::Draft) -> Result<(), ValidationError>;
}

/// Marker for resources the admin panel creates and edits.
///
/// [`Message`] records stay off this trait: they originate from the public
/// contact form and are read/delete-only in the admin area.
pub trait Editable: Resource {}

/// Ordering key extracted from a record for one sort field.
///
/// Text keys compare case-insensitively; date keys compare as calendar
/// dates rather than strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    /// Case-folded text
    Text(String),
    /// Calendar date
    Date(NaiveDate),
    /// Point in time
    Timestamp(DateTime<Utc>),
}

impl SortKey {
    /// Key for a text field
    pub fn text(value: &str) -> Self {
        SortKey::Text(value.to_lowercase())
    }

    /// Key for a date field
    pub fn date(value: NaiveDate) -> Self {
        SortKey::Date(value)
    }

    /// Key for a timestamp field
    pub fn timestamp(value: DateTime<Utc>) -> Self {
        SortKey::Timestamp(value)
    }
}

/// Client-side draft rejection listing every violated rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    problems: Vec<String>,
}

impl ValidationError {
    pub(crate) fn new(problems: Vec<String>) -> Self {
        Self { problems }
    }

    /// Every violated rule, in schema field order
    pub fn problems(&self) -> &[String] {
        &self.problems
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.problems.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Accumulates draft problems so one failing draft reports all of them
#[derive(Debug, Default)]
pub(crate) struct DraftCheck {
    problems: Vec<String>,
}

impl DraftCheck {
    /// Flag `field` when its value is empty after trimming
    pub(crate) fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.problems.push(format!("{} is required", field));
        }
    }

    /// Flag an icon that is empty or not in the registry
    pub(crate) fn require_icon(&mut self, value: &str) {
        if value.trim().is_empty() {
            self.problems.push("icon is required".to_string());
        } else if IconId::parse(value).is_none() {
            self.problems.push(format!("unknown icon \"{}\"", value));
        }
    }

    /// Record an arbitrary rule violation
    pub(crate) fn problem(&mut self, text: &str) {
        self.problems.push(text.to_string());
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.problems.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.problems))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn text_keys_compare_case_insensitively() {
        assert!(SortKey::text("apple") < SortKey::text("Banana"));
        assert_eq!(SortKey::text("MongoDB"), SortKey::text("mongodb"));
    }

    #[test]
    fn date_keys_compare_as_calendar_dates() {
        let earlier = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let later = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(SortKey::date(earlier) < SortKey::date(later));
    }

    #[test]
    fn validation_error_lists_every_problem() {
        let mut check = DraftCheck::default();
        check.require("name", "  ");
        check.problem("End date must be after start date");
        let err = check.finish().unwrap_err();

        assert_eq!(err.problems().len(), 2);
        assert_eq!(
            err.to_string(),
            "name is required; End date must be after start date"
        );
    }
}

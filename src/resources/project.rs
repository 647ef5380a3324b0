//! Project records

use super::{DraftCheck, Editable, Resource, SortKey, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Backend-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name
    pub name: String,

    /// Public URL of the cover image, produced by the media upload side-channel
    pub image: String,

    /// What the project is about
    pub description: String,

    /// First day of work
    #[serde(with = "flexible_date")]
    pub start_date: NaiveDate,

    /// Last day of work
    #[serde(with = "flexible_date")]
    pub end_date: NaiveDate,

    /// Technology tags, also matched by search
    pub skills: Vec<String>,

    /// Repository URL
    pub github_link: String,

    /// Announcement post URL
    pub linkedin_link: String,
}

/// Payload for creating or updating a project
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    /// Display name
    pub name: String,

    /// Public URL of an already-uploaded cover image
    pub image: String,

    /// What the project is about
    pub description: String,

    /// First day of work
    #[serde(with = "flexible_date")]
    pub start_date: NaiveDate,

    /// Last day of work
    #[serde(with = "flexible_date")]
    pub end_date: NaiveDate,

    /// Technology tags
    pub skills: Vec<String>,

    /// Repository URL
    pub github_link: String,

    /// Announcement post URL
    pub linkedin_link: String,
}

impl ProjectDraft {
    /// Split a comma-separated tag list the way the admin form collects it
    pub fn parse_skill_list(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Sortable project fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    Description,
    StartDate,
    EndDate,
}

impl Resource for Project {
    type SortField = ProjectField;
    type Draft = ProjectDraft;

    const ENDPOINT: &'static str = "projects";
    const LABEL: &'static str = "Project";
    const LABEL_PLURAL: &'static str = "projects";
    const DEFAULT_SORT: ProjectField = ProjectField::Name;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        fields.extend(self.skills.iter().map(String::as_str));
        fields
    }

    fn sort_key(&self, field: ProjectField) -> SortKey {
        match field {
            ProjectField::Name => SortKey::text(&self.name),
            ProjectField::Description => SortKey::text(&self.description),
            ProjectField::StartDate => SortKey::date(self.start_date),
            ProjectField::EndDate => SortKey::date(self.end_date),
        }
    }

    fn validate(draft: &ProjectDraft) -> Result<(), ValidationError> {
        let mut check = DraftCheck::default();
        check.require("name", &draft.name);
        check.require("image", &draft.image);
        check.require("description", &draft.description);
        if draft.skills.is_empty() {
            check.problem("at least one skill tag is required");
        }
        check.require("GitHub link", &draft.github_link);
        check.require("LinkedIn link", &draft.linkedin_link);
        if draft.start_date > draft.end_date {
            check.problem("End date must be after start date");
        }
        check.finish()
    }
}

impl Editable for Project {}

/// Dates arrive as `YYYY-MM-DD` or as a full ISO datetime; keep the date part.
mod flexible_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let date_part = raw.get(..10).unwrap_or(&raw);
        NaiveDate::parse_from_str(date_part, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft() -> ProjectDraft {
        ProjectDraft {
            name: "Portfolio site".to_string(),
            image: "https://cdn.example.com/cover.png".to_string(),
            description: "Personal site with an admin panel".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            skills: vec!["React".to_string(), "Node".to_string()],
            github_link: "https://github.com/example/site".to_string(),
            linkedin_link: "https://linkedin.com/in/example".to_string(),
        }
    }

    #[test]
    fn rejects_end_date_before_start_date() {
        let mut bad = draft();
        bad.end_date = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();

        let err = Project::validate(&bad).unwrap_err();
        assert_eq!(err.problems(), ["End date must be after start date"]);
    }

    #[test]
    fn accepts_equal_start_and_end_dates() {
        let mut one_day = draft();
        one_day.end_date = one_day.start_date;

        assert!(Project::validate(&one_day).is_ok());
    }

    #[test]
    fn deserializes_plain_dates_and_full_datetimes() {
        let project: Project = serde_json::from_value(json!({
            "_id": "proj-1",
            "name": "Tracker",
            "image": "https://cdn.example.com/tracker.png",
            "description": "Habit tracker",
            "startDate": "2024-01-10",
            "endDate": "2024-03-02T00:00:00.000Z",
            "skills": ["React"],
            "githubLink": "https://github.com/example/tracker",
            "linkedinLink": "https://linkedin.com/in/example"
        }))
        .unwrap();

        assert_eq!(project.start_date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(project.end_date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn drafts_serialize_with_wire_field_names() {
        let value = serde_json::to_value(draft()).unwrap();

        assert_eq!(value["startDate"], json!("2024-01-10"));
        assert_eq!(value["githubLink"], json!("https://github.com/example/site"));
        assert!(value.get("start_date").is_none());
    }

    #[test]
    fn skill_lists_split_on_commas_and_trim() {
        assert_eq!(
            ProjectDraft::parse_skill_list("React, Node ,, MongoDB "),
            vec!["React", "Node", "MongoDB"]
        );
        assert!(ProjectDraft::parse_skill_list("  ").is_empty());
    }

    #[test]
    fn search_text_includes_skill_tags() {
        let project: Project = serde_json::from_value(json!({
            "_id": "proj-2",
            "name": "Shop",
            "image": "https://cdn.example.com/shop.png",
            "description": "Storefront",
            "startDate": "2023-05-01",
            "endDate": "2023-06-01",
            "skills": ["Express", "MongoDB"],
            "githubLink": "https://github.com/example/shop",
            "linkedinLink": "https://linkedin.com/in/example"
        }))
        .unwrap();

        assert!(project.search_text().contains(&"MongoDB"));
    }
}

//! Skill records

use super::{DraftCheck, Editable, Resource, SortKey, ValidationError};
use serde::{Deserialize, Serialize};

/// One technology or competency listed on the skills page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Backend-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Wire name of the icon rendered next to the skill
    pub icon: String,

    /// Display name
    pub name: String,

    /// Short description
    pub desc: String,

    /// Grouping on the public skills page and in the admin filter
    pub category: SkillCategory,
}

/// Grouping for skills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
    Other,
}

impl SkillCategory {
    /// Every category, in display order
    pub const ALL: &'static [SkillCategory] = &[
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Tools,
        SkillCategory::Other,
    ];

    /// Wire and filter value
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Database => "database",
            SkillCategory::Tools => "tools",
            SkillCategory::Other => "other",
        }
    }
}

/// Payload for creating or updating a skill
#[derive(Debug, Clone, Serialize)]
pub struct SkillDraft {
    /// Wire name of an icon from the registry
    pub icon: String,

    /// Display name
    pub name: String,

    /// Short description
    pub desc: String,

    /// Grouping on the public skills page
    pub category: SkillCategory,
}

/// Sortable skill fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillField {
    Icon,
    Name,
    Desc,
    Category,
}

impl Resource for Skill {
    type SortField = SkillField;
    type Draft = SkillDraft;

    const ENDPOINT: &'static str = "skills";
    const LABEL: &'static str = "Skill";
    const LABEL_PLURAL: &'static str = "skills";
    const DEFAULT_SORT: SkillField = SkillField::Name;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.desc]
    }

    fn sort_key(&self, field: SkillField) -> SortKey {
        match field {
            SkillField::Icon => SortKey::text(&self.icon),
            SkillField::Name => SortKey::text(&self.name),
            SkillField::Desc => SortKey::text(&self.desc),
            SkillField::Category => SortKey::text(self.category.as_str()),
        }
    }

    fn category(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn validate(draft: &SkillDraft) -> Result<(), ValidationError> {
        let mut check = DraftCheck::default();
        check.require_icon(&draft.icon);
        check.require("name", &draft.name);
        check.require("description", &draft.desc);
        check.finish()
    }
}

impl Editable for Skill {}

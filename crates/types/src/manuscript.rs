//! Manuscript draft model, research categories, and field identifiers.
//!
//! [`FieldName::ALL`] fixes the declared field order used everywhere a
//! deterministic ordering matters (validation maps, "first invalid field",
//! rendering).

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::section::Section;

/// Research category selectable for a manuscript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    LifeSciences,
    PhysicalSciences,
    SocialSciences,
    Humanities,
    ComputerScience,
    Engineering,
    Medicine,
    EnvironmentalScience,
}

impl Category {
    /// All eight categories in catalog order.
    pub const ALL: [Category; 8] = [
        Category::LifeSciences,
        Category::PhysicalSciences,
        Category::SocialSciences,
        Category::Humanities,
        Category::ComputerScience,
        Category::Engineering,
        Category::Medicine,
        Category::EnvironmentalScience,
    ];

    /// Stable identifier used in configuration files and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LifeSciences => "life-sciences",
            Self::PhysicalSciences => "physical-sciences",
            Self::SocialSciences => "social-sciences",
            Self::Humanities => "humanities",
            Self::ComputerScience => "computer-science",
            Self::Engineering => "engineering",
            Self::Medicine => "medicine",
            Self::EnvironmentalScience => "environmental-science",
        }
    }

    /// Human-readable label shown in the category select.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LifeSciences => "Life Sciences",
            Self::PhysicalSciences => "Physical Sciences",
            Self::SocialSciences => "Social Sciences",
            Self::Humanities => "Humanities",
            Self::ComputerScience => "Computer Science",
            Self::Engineering => "Engineering",
            Self::Medicine => "Medicine",
            Self::EnvironmentalScience => "Environmental Science",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Identifies one editable field of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Title,
    Abstract,
    Keywords,
    Category,
    AuthorFirstName,
    AuthorLastName,
    AuthorEmail,
    AuthorAffiliation,
}

impl FieldName {
    /// Declared field order.
    pub const ALL: [FieldName; 8] = [
        FieldName::Title,
        FieldName::Abstract,
        FieldName::Keywords,
        FieldName::Category,
        FieldName::AuthorFirstName,
        FieldName::AuthorLastName,
        FieldName::AuthorEmail,
        FieldName::AuthorAffiliation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Abstract => "abstract",
            Self::Keywords => "keywords",
            Self::Category => "category",
            Self::AuthorFirstName => "authorFirstName",
            Self::AuthorLastName => "authorLastName",
            Self::AuthorEmail => "authorEmail",
            Self::AuthorAffiliation => "authorAffiliation",
        }
    }

    /// Form label rendered next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Article Title",
            Self::Abstract => "Abstract",
            Self::Keywords => "Keywords",
            Self::Category => "Research Category",
            Self::AuthorFirstName => "First Name",
            Self::AuthorLastName => "Last Name",
            Self::AuthorEmail => "Email",
            Self::AuthorAffiliation => "Institutional Affiliation",
        }
    }

    /// Section that hosts this field.
    pub fn section(&self) -> Section {
        match self {
            Self::Title | Self::Abstract | Self::Keywords | Self::Category => Section::Manuscript,
            _ => Section::Authors,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{0}'")]
pub struct ParseFieldNameError(pub String);

impl FromStr for FieldName {
    type Err = ParseFieldNameError;

    /// Accepts both the camelCase wire name (`authorEmail`) and snake_case (`author_email`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.chars().filter(|c| *c != '_' && *c != '-').collect();
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ParseFieldNameError(s.to_string()))
    }
}

/// The in-progress, unsaved manuscript record.
///
/// Every field exists for the lifetime of the draft; edits only overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManuscriptDraft {
    pub title: String,
    pub r#abstract: String,
    pub keywords: String,
    /// `None` until the user picks a category; there is no default.
    pub category: Option<Category>,
    pub author_first_name: String,
    pub author_last_name: String,
    pub author_email: String,
    pub author_affiliation: String,
}

impl ManuscriptDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the textual value of a field; an unset category reads as `""`.
    pub fn value(&self, field: FieldName) -> &str {
        match field {
            FieldName::Title => &self.title,
            FieldName::Abstract => &self.r#abstract,
            FieldName::Keywords => &self.keywords,
            FieldName::Category => self.category.as_ref().map(Category::as_str).unwrap_or(""),
            FieldName::AuthorFirstName => &self.author_first_name,
            FieldName::AuthorLastName => &self.author_last_name,
            FieldName::AuthorEmail => &self.author_email,
            FieldName::AuthorAffiliation => &self.author_affiliation,
        }
    }

    /// Overwrites a field with the raw value typed or selected by the user.
    ///
    /// For [`FieldName::Category`] an identifier that does not parse leaves
    /// the category unset, which the validator then reports as invalid.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldName::Title => self.title = value,
            FieldName::Abstract => self.r#abstract = value,
            FieldName::Keywords => self.keywords = value,
            FieldName::Category => self.category = value.parse().ok(),
            FieldName::AuthorFirstName => self.author_first_name = value,
            FieldName::AuthorLastName => self.author_last_name = value,
            FieldName::AuthorEmail => self.author_email = value,
            FieldName::AuthorAffiliation => self.author_affiliation = value,
        }
    }
}

/// Finished submission handed to the caller on acceptance.
///
/// Shaped as the draft fields plus the attachment's name and size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub title: String,
    pub r#abstract: String,
    pub keywords: String,
    pub category: Category,
    pub author_first_name: String,
    pub author_last_name: String,
    pub author_email: String,
    pub author_affiliation: String,
    pub file_name: String,
    pub file_size_bytes: u64,
}

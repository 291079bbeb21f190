//! Per-field validation results and the rule vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single declarative rule attached to a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", content = "value", rename_all = "snake_case")]
pub enum FieldRule {
    /// The value must contain at least this many characters.
    MinLength(usize),
    /// The value must be a syntactically valid email address.
    Email,
    /// The value must be one of the configured categories.
    OneOfCategories,
}

impl fmt::Display for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinLength(min) => write!(f, "min-length({})", min),
            Self::Email => f.write_str("email"),
            Self::OneOfCategories => f.write_str("one-of-categories"),
        }
    }
}

/// Outcome of evaluating one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// Inline message, present only when the field is invalid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

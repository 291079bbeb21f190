//! Submit outcomes and user-facing notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    manuscript::{FieldName, SubmissionPayload},
    validation::FieldRule,
};

/// Why a submit attempt was rejected.
///
/// Rejections end the attempt, never the session: the wizard stays usable
/// and nothing the user entered is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum RejectionReason {
    /// No manuscript file was attached. Checked before any field.
    #[error("missing manuscript file")]
    MissingFile,
    /// A field failed its rule; `field` is the first failure in declared order.
    #[error("field '{field}' failed rule {rule}")]
    FieldInvalid { field: FieldName, rule: FieldRule },
}

impl RejectionReason {
    /// Short machine-readable code (`missing-file`, `field-invalid`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingFile => "missing-file",
            Self::FieldInvalid { .. } => "field-invalid",
        }
    }
}

/// Result of a single submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Accepted { payload: SubmissionPayload },
    Rejected { reason: RejectionReason },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn payload(&self) -> Option<&SubmissionPayload> {
        match self {
            Self::Accepted { payload } => Some(payload),
            Self::Rejected { .. } => None,
        }
    }

    pub fn rejection(&self) -> Option<&RejectionReason> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { reason } => Some(reason),
        }
    }
}

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Destructive,
}

/// Transient, non-blocking message shown after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Destructive,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Accepted payload stamped with the time the caller received it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub received_at: DateTime<Utc>,
    pub submission: SubmissionPayload,
}

impl SubmissionReceipt {
    pub fn new(submission: SubmissionPayload) -> Self {
        Self {
            received_at: Utc::now(),
            submission,
        }
    }
}

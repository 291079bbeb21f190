//! Shared type definitions for the Beacon manuscript submission wizard.
//!
//! Everything in this crate is plain data: the draft being edited, the
//! attachment metadata, per-field validation results, and the messages and
//! effects exchanged between the wizard and its presentation layer. The
//! behaviour lives in `beacon-engine`.

pub mod attachment;
pub mod manuscript;
pub mod outcome;
pub mod section;
pub mod validation;

use serde::{Deserialize, Serialize};

pub use attachment::{AcquireSource, AttachmentEvent, FileHandle};
pub use manuscript::{Category, FieldName, ManuscriptDraft, ParseCategoryError, ParseFieldNameError, SubmissionPayload};
pub use outcome::{NoticeKind, Notification, RejectionReason, SubmissionReceipt, SubmitOutcome};
pub use section::{ParseSectionError, Section};
pub use validation::{FieldRule, ValidationResult};

/// Navigation requests issued by the section tabs and the previous/next buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "section", rename_all = "snake_case")]
pub enum NavAction {
    /// Advance one section, saturating at the last one.
    Next,
    /// Step back one section, saturating at the first one.
    Previous,
    /// Jump directly to any section.
    GoTo(Section),
}

/// Messages that can be sent to update the wizard state.
///
/// This enum mirrors the external interface of the wizard one-to-one so a
/// presentation layer (or a scripted session) can drive it through a single
/// entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardMsg {
    /// A form field was edited.
    FieldChanged { field: FieldName, value: String },
    /// A file-picker, drag or drop gesture happened.
    Attachment(AttachmentEvent),
    /// The user pressed a navigation control.
    Navigate(NavAction),
    /// The user pressed "Submit Article".
    Submit,
}

/// Side effects produced while handling a [`WizardMsg`].
///
/// The presentation layer decides how to render each effect; the wizard
/// never renders anything itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fresh validation result for the field that just changed.
    FieldValidated { field: FieldName, result: ValidationResult },
    /// The attachment slot or drag state changed.
    AttachmentChanged { current: Option<FileHandle>, drag_active: bool },
    /// The active section changed (or was re-confirmed).
    SectionChanged(Section),
    /// A submit attempt finished.
    Submitted(SubmitOutcome),
}

/// Observable lifecycle of a wizard session.
///
/// Submitting lasts exactly one synchronous submit call, so it has no variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardStatus {
    /// The user is editing the given section.
    Editing(Section),
    /// The last attempt was rejected; the user is back on `section` with state intact.
    Rejected { section: Section, reason: RejectionReason },
    /// Terminal: the submission was accepted.
    Accepted,
}

impl WizardStatus {
    /// Returns `true` once the session reached its terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

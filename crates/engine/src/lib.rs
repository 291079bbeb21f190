//! Submission wizard engine.
//!
//! The engine is split into four leaf components and one orchestrator:
//!
//! - [`FieldValidator`] evaluates the per-field rule table.
//! - [`AttachmentManager`] owns the single attachment slot and drag state.
//! - [`SectionNavigator`] tracks the active form section.
//! - [`SubmissionCoordinator`] gates a submit attempt on the attachment and the rules.
//! - [`SubmissionWizard`] wires them together behind the wizard's external interface.
//!
//! Everything is synchronous and single-session; no component performs I/O.

pub mod attachment;
pub mod coordinator;
pub mod navigator;
pub mod notify;
pub mod validator;
pub mod wizard;

pub use attachment::{AttachmentError, AttachmentManager};
pub use coordinator::SubmissionCoordinator;
pub use navigator::SectionNavigator;
pub use notify::{NotificationSink, RecordingSink, TracingSink, notification_for};
pub use validator::{FieldValidator, RULES, RuleEntry};
pub use wizard::{SubmissionWizard, WizardError};

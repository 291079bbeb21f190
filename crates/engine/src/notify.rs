//! Notification sinks for submit outcomes.
//!
//! Sinks are fire-and-forget: the wizard hands over a [`Notification`] and
//! expects nothing back.

use std::sync::{Arc, Mutex};

use beacon_types::{NoticeKind, Notification, RejectionReason, SubmitOutcome};
use tracing::{info, warn};

use crate::validator::FieldValidator;

/// Receives the transient messages shown after a submit attempt.
pub trait NotificationSink {
    fn notify(&self, notification: &Notification);
}

impl<F> NotificationSink for F
where
    F: Fn(&Notification),
{
    fn notify(&self, notification: &Notification) {
        self(notification)
    }
}

/// Sink that writes notifications to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: &Notification) {
        match notification.kind {
            NoticeKind::Success => info!(title = %notification.title, "{}", notification.description),
            NoticeKind::Destructive => warn!(title = %notification.title, "{}", notification.description),
        }
    }
}

/// Sink that keeps every notification it receives.
///
/// Clones share the same buffer, so a caller can keep one handle and give
/// the other to the wizard.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    notices: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notifications recorded so far.
    pub fn notices(&self) -> Vec<Notification> {
        self.notices.lock().expect("notification lock poisoned").clone()
    }

    /// Returns and forgets the notifications recorded so far.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.notices.lock().expect("notification lock poisoned"))
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: &Notification) {
        self.notices
            .lock()
            .expect("notification lock poisoned")
            .push(notification.clone());
    }
}

/// Builds the message shown for a submit outcome.
pub fn notification_for(outcome: &SubmitOutcome) -> Notification {
    match outcome {
        SubmitOutcome::Accepted { .. } => {
            Notification::success("Submission received!", "Your article has been submitted successfully.")
        }
        SubmitOutcome::Rejected {
            reason: RejectionReason::MissingFile,
        } => Notification::destructive(
            "Missing manuscript file",
            "Please upload your manuscript file before submitting.",
        ),
        SubmitOutcome::Rejected {
            reason: RejectionReason::FieldInvalid { field, .. },
        } => Notification::destructive("Submission incomplete", FieldValidator::rule_for(*field).message),
    }
}

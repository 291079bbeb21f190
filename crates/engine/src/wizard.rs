//! The submission wizard: one interactive session over the draft.
//!
//! The wizard owns the draft, the live per-field validation results, the
//! attachment slot and the navigator. Validation runs on every field change
//! so inline feedback is immediate; submit re-runs it through the
//! coordinator. A rejected attempt leaves everything as it was and the user
//! may retry indefinitely. An accepted attempt is terminal: the session
//! refuses further events until [`SubmissionWizard::restart`] discards the draft.

use beacon_types::{
    AttachmentEvent, Effect, FieldName, FileHandle, ManuscriptDraft, NavAction, Section, SubmitOutcome,
    ValidationResult, WizardMsg, WizardStatus,
};
use beacon_util::SubmissionConfig;
use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    attachment::{AttachmentError, AttachmentManager},
    coordinator::SubmissionCoordinator,
    navigator::SectionNavigator,
    notify::{NotificationSink, notification_for},
    validator::FieldValidator,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The submission was already accepted.
    #[error("the submission was already accepted; restart the wizard to submit another manuscript")]
    Finished,
    #[error(transparent)]
    Attachment(#[from] AttachmentError),
}

pub struct SubmissionWizard {
    draft: ManuscriptDraft,
    validations: IndexMap<FieldName, ValidationResult>,
    attachments: AttachmentManager,
    navigator: SectionNavigator,
    coordinator: SubmissionCoordinator,
    status: WizardStatus,
    sink: Box<dyn NotificationSink>,
}

impl SubmissionWizard {
    /// Starts a session in `editing(manuscript)` with an empty draft.
    pub fn new(config: &SubmissionConfig, sink: impl NotificationSink + 'static) -> Self {
        Self {
            draft: ManuscriptDraft::new(),
            validations: IndexMap::new(),
            attachments: AttachmentManager::new(config.attachment.clone()),
            navigator: SectionNavigator::new(),
            coordinator: SubmissionCoordinator::new(FieldValidator::new(config.categories.clone())),
            status: WizardStatus::Editing(Section::Manuscript),
            sink: Box::new(sink),
        }
    }

    pub fn draft(&self) -> &ManuscriptDraft {
        &self.draft
    }

    pub fn status(&self) -> &WizardStatus {
        &self.status
    }

    pub fn current_section(&self) -> Section {
        self.navigator.current()
    }

    pub fn attachment(&self) -> Option<&FileHandle> {
        self.attachments.current()
    }

    pub fn is_drag_active(&self) -> bool {
        self.attachments.is_drag_active()
    }

    pub fn validator(&self) -> &FieldValidator {
        self.coordinator.validator()
    }

    /// Latest result for a field, once the field has been edited or a submit was attempted.
    pub fn validation(&self, field: FieldName) -> Option<&ValidationResult> {
        self.validations.get(&field)
    }

    /// All live results, in the order fields were first evaluated.
    pub fn validations(&self) -> &IndexMap<FieldName, ValidationResult> {
        &self.validations
    }

    /// Updates the draft and returns the fresh result for that field.
    pub fn on_field_change(
        &mut self,
        field: FieldName,
        value: impl Into<String>,
    ) -> Result<ValidationResult, WizardError> {
        self.ensure_open()?;
        self.draft.set(field, value);
        let result = self.validator().validate_field(&self.draft, field);
        debug!(%field, valid = result.valid, "Field changed");
        self.validations.insert(field, result.clone());
        self.resume_editing();
        Ok(result)
    }

    pub fn on_attachment_event(&mut self, event: AttachmentEvent) -> Result<(), WizardError> {
        self.ensure_open()?;
        let applied = self.attachments.apply(event);
        self.resume_editing();
        applied.map_err(WizardError::from)
    }

    pub fn on_navigate(&mut self, action: NavAction) -> Result<Section, WizardError> {
        self.ensure_open()?;
        let section = self.navigator.apply(action);
        self.resume_editing();
        Ok(section)
    }

    /// Evaluates a submit attempt and notifies the sink of the outcome.
    pub fn on_submit(&mut self) -> Result<SubmitOutcome, WizardError> {
        self.ensure_open()?;
        debug!(section = %self.navigator.current(), "Submitting");
        let outcome = self.coordinator.attempt_submit(&self.draft, &self.attachments);
        if self.attachments.current().is_some() {
            // Like the form gate, a submit with a file marks every field as evaluated.
            self.validations = self.validator().validate_all(&self.draft);
        }

        self.status = match &outcome {
            SubmitOutcome::Accepted { .. } => WizardStatus::Accepted,
            SubmitOutcome::Rejected { reason } => WizardStatus::Rejected {
                section: self.navigator.current(),
                reason: reason.clone(),
            },
        };
        self.sink.notify(&notification_for(&outcome));
        Ok(outcome)
    }

    /// Single entry point used by message-driven callers.
    pub fn update(&mut self, msg: WizardMsg) -> Result<Vec<Effect>, WizardError> {
        let effect = match msg {
            WizardMsg::FieldChanged { field, value } => {
                let result = self.on_field_change(field, value)?;
                Effect::FieldValidated { field, result }
            }
            WizardMsg::Attachment(event) => {
                self.on_attachment_event(event)?;
                Effect::AttachmentChanged {
                    current: self.attachments.current().cloned(),
                    drag_active: self.attachments.is_drag_active(),
                }
            }
            WizardMsg::Navigate(action) => Effect::SectionChanged(self.on_navigate(action)?),
            WizardMsg::Submit => Effect::Submitted(self.on_submit()?),
        };
        Ok(vec![effect])
    }

    /// Discards the draft, attachment and validation state and starts over.
    pub fn restart(&mut self) {
        debug!("Wizard restarted");
        self.draft = ManuscriptDraft::new();
        self.validations.clear();
        self.attachments = AttachmentManager::new(self.attachments.policy().clone());
        self.navigator = SectionNavigator::new();
        self.status = WizardStatus::Editing(Section::Manuscript);
    }

    fn ensure_open(&self) -> Result<(), WizardError> {
        if self.status.is_terminal() {
            warn!("Event ignored: submission already accepted");
            return Err(WizardError::Finished);
        }
        Ok(())
    }

    fn resume_editing(&mut self) {
        self.status = WizardStatus::Editing(self.navigator.current());
    }
}

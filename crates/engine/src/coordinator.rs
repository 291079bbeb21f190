//! Submit-time gating.
//!
//! The attachment check runs first and short-circuits: when no file is
//! staged the attempt is rejected as `missing-file` without evaluating any
//! field. Only then are the field rules re-run.

use beacon_types::{Category, FileHandle, ManuscriptDraft, RejectionReason, SubmissionPayload, SubmitOutcome};
use tracing::info;

use crate::{attachment::AttachmentManager, validator::FieldValidator};

#[derive(Debug, Clone, Default)]
pub struct SubmissionCoordinator {
    validator: FieldValidator,
}

impl SubmissionCoordinator {
    pub fn new(validator: FieldValidator) -> Self {
        Self { validator }
    }

    pub fn validator(&self) -> &FieldValidator {
        &self.validator
    }

    pub fn attempt_submit(&self, draft: &ManuscriptDraft, attachment: &AttachmentManager) -> SubmitOutcome {
        let Some(file) = attachment.current() else {
            info!("Submission rejected: no manuscript file attached");
            return SubmitOutcome::Rejected {
                reason: RejectionReason::MissingFile,
            };
        };

        match self.validator.check(draft) {
            Ok(category) => {
                let payload = assemble_payload(draft, category, file);
                info!(title = %payload.title, file = %payload.file_name, "Submission accepted");
                SubmitOutcome::Accepted { payload }
            }
            Err((field, rule)) => {
                info!(%field, %rule, "Submission rejected: field invalid");
                SubmitOutcome::Rejected {
                    reason: RejectionReason::FieldInvalid { field, rule },
                }
            }
        }
    }
}

fn assemble_payload(draft: &ManuscriptDraft, category: Category, file: &FileHandle) -> SubmissionPayload {
    SubmissionPayload {
        title: draft.title.clone(),
        r#abstract: draft.r#abstract.clone(),
        keywords: draft.keywords.clone(),
        category,
        author_first_name: draft.author_first_name.clone(),
        author_last_name: draft.author_last_name.clone(),
        author_email: draft.author_email.clone(),
        author_affiliation: draft.author_affiliation.clone(),
        file_name: file.name.clone(),
        file_size_bytes: file.size_bytes,
    }
}

//! Single-slot attachment state for the upload section.
//!
//! The file picker and the drop target are two producers writing into the
//! same owned slot, so at most one candidate exists at any time.

use beacon_types::{AcquireSource, AttachmentEvent, FileHandle};
use beacon_util::{AttachmentPolicy, format_bytes};
use thiserror::Error;
use tracing::{debug, warn};

/// Raised only when the attachment policy is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    #[error("'{name}' is not an accepted file type (accepted: {accepted})")]
    UnsupportedExtension { name: String, accepted: String },
    #[error("'{name}' is {size} which exceeds the {limit} limit")]
    TooLarge { name: String, size: String, limit: String },
}

/// Tracks the staged manuscript file and whether a drag hovers the drop target.
#[derive(Debug, Clone, Default)]
pub struct AttachmentManager {
    candidate: Option<FileHandle>,
    drag_active: bool,
    policy: AttachmentPolicy,
}

impl AttachmentManager {
    pub fn new(policy: AttachmentPolicy) -> Self {
        Self {
            candidate: None,
            drag_active: false,
            policy,
        }
    }

    pub fn policy(&self) -> &AttachmentPolicy {
        &self.policy
    }

    /// Stages `file`, replacing any existing candidate without confirmation.
    ///
    /// A drop always ends the drag gesture, even when the policy rejects the file.
    /// With an enforced policy a rejected file leaves the previous candidate in place.
    pub fn acquire(&mut self, source: AcquireSource, file: FileHandle) -> Result<(), AttachmentError> {
        if source == AcquireSource::Drop {
            self.drag_active = false;
        }
        self.check_policy(&file)?;
        debug!(
            ?source,
            name = %file.name,
            size_bytes = file.size_bytes,
            replaced = self.candidate.as_ref().map(|previous| previous.name.as_str()),
            "Attachment acquired"
        );
        self.candidate = Some(file);
        Ok(())
    }

    /// Completes a drop gesture. A drop without a file keeps the current candidate.
    pub fn drop_file(&mut self, file: Option<FileHandle>) -> Result<(), AttachmentError> {
        match file {
            Some(file) => self.acquire(AcquireSource::Drop, file),
            None => {
                self.drag_active = false;
                debug!("Drop carried no file");
                Ok(())
            }
        }
    }

    /// Removes the candidate ("Change File").
    pub fn clear(&mut self) {
        if let Some(previous) = self.candidate.take() {
            debug!(name = %previous.name, "Attachment cleared");
        }
    }

    pub fn drag_enter(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    pub fn current(&self) -> Option<&FileHandle> {
        self.candidate.as_ref()
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    /// Dispatches a gesture reported by the upload section.
    pub fn apply(&mut self, event: AttachmentEvent) -> Result<(), AttachmentError> {
        match event {
            AttachmentEvent::Pick { file } => self.acquire(AcquireSource::Pick, file),
            AttachmentEvent::Drop { file } => self.drop_file(file),
            AttachmentEvent::DragEnter => {
                self.drag_enter();
                Ok(())
            }
            AttachmentEvent::DragLeave => {
                self.drag_leave();
                Ok(())
            }
            AttachmentEvent::Clear => {
                self.clear();
                Ok(())
            }
        }
    }

    fn check_policy(&self, file: &FileHandle) -> Result<(), AttachmentError> {
        let extension = file.extension();
        if !self.policy.is_accepted_extension(extension.as_deref()) {
            let error = AttachmentError::UnsupportedExtension {
                name: file.name.clone(),
                accepted: self.policy.accepted_extensions.join(", "),
            };
            if self.policy.enforce {
                return Err(error);
            }
            warn!(%error, "Accepting file outside the advisory policy");
        }

        if file.size_bytes > self.policy.max_size_bytes {
            let error = AttachmentError::TooLarge {
                name: file.name.clone(),
                size: format_bytes(file.size_bytes),
                limit: format_bytes(self.policy.max_size_bytes),
            };
            if self.policy.enforce {
                return Err(error);
            }
            warn!(%error, "Accepting file outside the advisory policy");
        }
        Ok(())
    }
}

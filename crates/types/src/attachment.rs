//! Attachment metadata exchanged between the file picker and the wizard.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Opaque handle to a candidate manuscript file.
///
/// Only the name and size are ever read; the wizard never touches the
/// file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    /// File name as reported by the picker (no directory components).
    pub name: String,
    /// File size in bytes.
    pub size_bytes: u64,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Lowercased extension of the file name, if it has one.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
    }

    /// Size rounded to the nearest whole kilobyte (half rounds up).
    pub fn size_kb(&self) -> u64 {
        self.size_bytes.saturating_add(512) / 1024
    }

    /// Summary shown in the upload card, e.g. `paper.pdf (245 KB)`.
    pub fn summary(&self) -> String {
        format!("{} ({} KB)", self.name, self.size_kb())
    }
}

/// How a candidate file reached the drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcquireSource {
    /// Chosen through the explicit file-picker dialog.
    Pick,
    /// Dropped onto the drop target.
    Drop,
}

/// Gestures reported by the upload section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttachmentEvent {
    /// The file picker completed with a file.
    Pick { file: FileHandle },
    /// A drop completed; the payload may carry no file at all.
    Drop {
        #[serde(default)]
        file: Option<FileHandle>,
    },
    /// A drag gesture entered the drop target.
    DragEnter,
    /// A drag gesture left the drop target.
    DragLeave,
    /// The user pressed "Change File".
    Clear,
}

//! Scripted wizard sessions.
//!
//! A script is a YAML or JSON list of steps replayed against one wizard.
//! File steps name a path on disk; only its metadata is read, to build the
//! [`FileHandle`] the wizard stages.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use beacon_types::{AttachmentEvent, FieldName, FileHandle, NavAction, Section, WizardMsg};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ScriptStep {
    Field { field: FieldName, value: String },
    Pick { path: PathBuf },
    Drop {
        #[serde(default)]
        path: Option<PathBuf>,
    },
    DragEnter,
    DragLeave,
    Clear,
    Next,
    Previous,
    GoTo { section: Section },
    Submit,
}

impl ScriptStep {
    /// Converts the step into the message sent to the wizard.
    pub fn into_msg(self) -> Result<WizardMsg> {
        let msg = match self {
            Self::Field { field, value } => WizardMsg::FieldChanged { field, value },
            Self::Pick { path } => WizardMsg::Attachment(AttachmentEvent::Pick {
                file: file_handle(&path)?,
            }),
            Self::Drop { path } => WizardMsg::Attachment(AttachmentEvent::Drop {
                file: path.as_deref().map(file_handle).transpose()?,
            }),
            Self::DragEnter => WizardMsg::Attachment(AttachmentEvent::DragEnter),
            Self::DragLeave => WizardMsg::Attachment(AttachmentEvent::DragLeave),
            Self::Clear => WizardMsg::Attachment(AttachmentEvent::Clear),
            Self::Next => WizardMsg::Navigate(NavAction::Next),
            Self::Previous => WizardMsg::Navigate(NavAction::Previous),
            Self::GoTo { section } => WizardMsg::Navigate(NavAction::GoTo(section)),
            Self::Submit => WizardMsg::Submit,
        };
        Ok(msg)
    }
}

/// Reads a script, choosing the parser from the file extension.
pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>> {
    let content = fs::read_to_string(path).with_context(|| format!("reading script {}", path.display()))?;
    let steps: Vec<ScriptStep> = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))?,
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?
        }
        _ => bail!("unsupported script format for {}; expected .yaml, .yml or .json", path.display()),
    };
    Ok(steps)
}

/// Builds a handle from file metadata without reading the contents.
pub fn file_handle(path: &Path) -> Result<FileHandle> {
    let metadata = fs::metadata(path).with_context(|| format!("reading metadata for {}", path.display()))?;
    if !metadata.is_file() {
        bail!("{} is not a file", path.display());
    }
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("{} has no file name", path.display()))?;
    Ok(FileHandle::new(name, metadata.len()))
}

//! Ordered sections of the submission form.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One labeled page of the multi-part form.
///
/// Sections are totally ordered: manuscript, then authors, then upload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Manuscript,
    Authors,
    Upload,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Manuscript, Section::Authors, Section::Upload];

    /// Position of the section in the form, starting at zero.
    pub fn index(&self) -> usize {
        match self {
            Self::Manuscript => 0,
            Self::Authors => 1,
            Self::Upload => 2,
        }
    }

    /// The following section, or `None` on the last one.
    pub fn next(&self) -> Option<Section> {
        Section::ALL.get(self.index() + 1).copied()
    }

    /// The preceding section, or `None` on the first one.
    pub fn previous(&self) -> Option<Section> {
        self.index().checked_sub(1).and_then(|idx| Section::ALL.get(idx).copied())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manuscript => "manuscript",
            Self::Authors => "authors",
            Self::Upload => "upload",
        }
    }

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Manuscript => "Manuscript Details",
            Self::Authors => "Author Information",
            Self::Upload => "File Upload",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section '{0}'; expected manuscript, authors or upload")]
pub struct ParseSectionError(pub String);

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

//! Active-section tracking for the multi-part form.
//!
//! Navigation is never gated by validation: a user may jump straight to the
//! upload section with an empty draft. Validity is only enforced on submit.

use beacon_types::{NavAction, Section};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct SectionNavigator {
    current: Section,
}

impl SectionNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Section {
        self.current
    }

    /// Jumps directly to `section`, regardless of the state of earlier sections.
    pub fn go_to(&mut self, section: Section) -> Section {
        if section != self.current {
            debug!(from = %self.current, to = %section, "Section changed");
        }
        self.current = section;
        self.current
    }

    /// Moves one section forward; a no-op on the last section.
    pub fn next(&mut self) -> Section {
        match self.current.next() {
            Some(section) => self.go_to(section),
            None => self.current,
        }
    }

    /// Moves one section back; a no-op on the first section.
    pub fn previous(&mut self) -> Section {
        match self.current.previous() {
            Some(section) => self.go_to(section),
            None => self.current,
        }
    }

    pub fn apply(&mut self, action: NavAction) -> Section {
        match action {
            NavAction::Next => self.next(),
            NavAction::Previous => self.previous(),
            NavAction::GoTo(section) => self.go_to(section),
        }
    }
}

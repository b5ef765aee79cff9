//! Stage Labels
//!
//! A stage label names where a session currently is in the narrative.
//! The set of labels is open: any string is accepted, and only the
//! terminal label carries meaning here.

use std::fmt;

use crate::{FINISHED_STATE, INITIAL_STATE};

/// Free-form name of a narrative or game stage.
///
/// Construction never fails. Comparison is exact and case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StageLabel(String);

impl StageLabel {
    /// Create a label from any string.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label a fresh session starts in.
    pub fn introduction() -> Self {
        Self::new(INITIAL_STATE)
    }

    /// The terminal label.
    pub fn finished() -> Self {
        Self::new(FINISHED_STATE)
    }

    /// Check if this is exactly the terminal label.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.0 == FINISHED_STATE
    }

    /// Borrow the label text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the label text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for StageLabel {
    fn default() -> Self {
        Self::introduction()
    }
}

impl From<&str> for StageLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for StageLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl From<StageLabel> for String {
    fn from(label: StageLabel) -> Self {
        label.0
    }
}

impl AsRef<str> for StageLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for StageLabel {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StageLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for StageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

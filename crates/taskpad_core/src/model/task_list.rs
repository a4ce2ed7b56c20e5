//! Ordered task-list model.
//!
//! # Responsibility
//! - Hold the in-memory list of task labels in insertion order.
//! - Normalize raw input and enforce label uniqueness on every add.
//!
//! # Invariants
//! - Insertion order is preserved; it drives render and scroll order.
//! - No two stored labels are identical (verbatim, case-sensitive match).
//! - Every stored label is non-empty after trimming and at most
//!   `MAX_LABEL_CHARS` characters long.

use serde::Serialize;

/// Maximum label length in characters, matching the UI input cap.
pub const MAX_LABEL_CHARS: usize = 50;

/// Result of an add attempt.
///
/// Rejections are outcomes, not errors: the UI silently ignores them by
/// design, and callers only use this for logging and envelope messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Label was appended to the end of the list.
    Added,
    /// Input was empty after trimming.
    EmptyLabel,
    /// Normalized label is already present verbatim.
    Duplicate,
}

/// Ordered collection of unique task labels.
///
/// Serializes transparently as a flat JSON array of strings, which is the
/// persisted snapshot wire format. Deserialization goes through
/// [`TaskList::from_labels`] instead so stored data cannot bypass the
/// label invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaskList {
    labels: Vec<String>,
}

impl TaskList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a list from persisted labels, re-applying normalization
    /// and uniqueness.
    ///
    /// Our own writes always satisfy the invariants already; this guards
    /// against hand-edited or otherwise foreign slot values.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for label in labels {
            let _ = list.add(label.as_ref());
        }
        list
    }

    /// Adds a task label to the end of the list.
    ///
    /// The raw input is trimmed, then capped at `MAX_LABEL_CHARS`
    /// characters. Empty and duplicate results leave the list unchanged.
    pub fn add(&mut self, raw: &str) -> AddOutcome {
        let label = match normalize_label(raw) {
            Some(label) => label,
            None => return AddOutcome::EmptyLabel,
        };

        if self.contains(&label) {
            return AddOutcome::Duplicate;
        }

        self.labels.push(label);
        AddOutcome::Added
    }

    /// Removes `label` from the list.
    ///
    /// Returns `false` when the label is not present. By the uniqueness
    /// invariant there is never more than one occurrence to remove.
    pub fn remove(&mut self, label: &str) -> bool {
        let before = self.labels.len();
        self.labels.retain(|existing| existing != label);
        self.labels.len() != before
    }

    /// Returns whether `label` is present verbatim.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|existing| existing == label)
    }

    /// Stored labels in insertion order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Normalizes raw task input: trim surrounding whitespace, then cap at
/// `MAX_LABEL_CHARS` characters.
///
/// Returns `None` when nothing remains after trimming.
pub fn normalize_label(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(MAX_LABEL_CHARS).collect())
}

//! Removal-confirmation state machine.
//!
//! # Responsibility
//! - Gate every task removal behind an explicit user confirmation step.
//!
//! # Invariants
//! - States: `Idle -> Confirming(label) -> Idle`; never nested.
//! - A pending confirmation resolves to exactly one of confirm or cancel.
//! - No removal label is observable outside a `confirm` resolution.

/// Confirmation gate for task removal.
///
/// The gate holds at most one pending label. It blocks nothing else in
/// the session (the dialog is modal in the UI, not a lock here); it only
/// guarantees that `remove` is unreachable without a confirm.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RemovalGate {
    /// No removal in flight.
    #[default]
    Idle,
    /// Waiting for the user to confirm or cancel removal of this label.
    Confirming(String),
}

impl RemovalGate {
    /// Enters `Confirming` for `label`.
    ///
    /// A new intent while one is already pending replaces it: each
    /// removal attempt re-enters the machine fresh.
    pub fn request(&mut self, label: impl Into<String>) {
        *self = Self::Confirming(label.into());
    }

    /// Resolves a pending confirmation positively.
    ///
    /// Returns the label to remove and resets to `Idle`. Returns `None`
    /// when nothing was pending, in which case no removal may happen.
    pub fn confirm(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::Confirming(label) => Some(label),
            Self::Idle => None,
        }
    }

    /// Resolves a pending confirmation negatively. Always lands in `Idle`.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Label currently awaiting confirmation, if any.
    pub fn pending(&self) -> Option<&str> {
        match self {
            Self::Confirming(label) => Some(label),
            Self::Idle => None,
        }
    }
}

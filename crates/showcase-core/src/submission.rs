//! # Submission State Machine
//!
//! Tracks lead submissions so a second submit cannot start while the first
//! is still pending.
//!
//! ```text
//! Idle ──begin──▶ Pending ──succeed──▶ Succeeded
//!                    │                     │
//!                    └──fail──▶ Failed ◀───┘ (begin again to retry)
//! ```

use crate::ShowcaseError;
use std::collections::BTreeMap;

/// State of one submitter's most recent submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed {
        message: String,
    },
}

impl SubmissionState {
    /// Short name used in errors and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Succeeded => "succeeded",
            Self::Failed { .. } => "failed",
        }
    }

    /// True when a new submission may start (the submit button is enabled).
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Start a submission.
    pub fn begin(&self) -> Result<Self, ShowcaseError> {
        if self.can_submit() {
            Ok(Self::Pending)
        } else {
            Err(ShowcaseError::InvalidTransition {
                from: self.name(),
                to: "pending",
            })
        }
    }

    /// Finish a pending submission successfully.
    pub fn succeed(&self) -> Result<Self, ShowcaseError> {
        match self {
            Self::Pending => Ok(Self::Succeeded),
            other => Err(ShowcaseError::InvalidTransition {
                from: other.name(),
                to: "succeeded",
            }),
        }
    }

    /// Finish a pending submission with a user-facing failure message.
    pub fn fail(&self, message: impl Into<String>) -> Result<Self, ShowcaseError> {
        match self {
            Self::Pending => Ok(Self::Failed {
                message: message.into(),
            }),
            other => Err(ShowcaseError::InvalidTransition {
                from: other.name(),
                to: "failed",
            }),
        }
    }
}

/// Submissions currently in flight, keyed by submitter.
///
/// Only `Pending` entries are stored: finishing or abandoning a submission
/// removes its entry, so the map never outgrows the in-flight requests.
#[derive(Debug, Clone, Default)]
pub struct SubmissionTracker {
    states: BTreeMap<String, SubmissionState>,
}

impl SubmissionTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state for a submitter; `Idle` unless a submission is pending.
    #[must_use]
    pub fn state(&self, key: &str) -> SubmissionState {
        self.states.get(key).cloned().unwrap_or_default()
    }

    /// Mark a submission as started, rejecting overlap.
    pub fn begin(&mut self, key: &str) -> Result<(), ShowcaseError> {
        let next = self
            .state(key)
            .begin()
            .map_err(|_| ShowcaseError::SubmissionInFlight(key.to_string()))?;
        self.states.insert(key.to_string(), next);
        Ok(())
    }

    /// Record a successful completion and forget the submitter.
    pub fn succeed(&mut self, key: &str) -> Result<SubmissionState, ShowcaseError> {
        let finished = self.state(key).succeed()?;
        self.states.remove(key);
        Ok(finished)
    }

    /// Record a failed completion and forget the submitter.
    pub fn fail(
        &mut self,
        key: &str,
        message: impl Into<String>,
    ) -> Result<SubmissionState, ShowcaseError> {
        let finished = self.state(key).fail(message)?;
        self.states.remove(key);
        Ok(finished)
    }

    /// Drop a pending submission that will never complete. Returns whether
    /// an entry was removed.
    pub fn abandon(&mut self, key: &str) -> bool {
        self.states.remove(key).is_some()
    }

    /// Number of submissions currently pending.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.states.len()
    }

    /// True when nothing is in flight.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================

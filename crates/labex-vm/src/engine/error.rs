//! Errors that can occur during a search.

use labex_core::Span;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Execution fuel exhausted (too many steps in one search call).
    #[error("runtime execution limit of {0} steps exceeded")]
    ExecFuelExhausted(u32),

    /// Too many open choice points.
    #[error("runtime checkpoint limit of {0} exceeded")]
    CheckpointLimitExceeded(u32),

    /// The label source broke its ordering contract, or the program
    /// reached a state the compiler never produces.
    #[error("runtime invariant violated: {0}")]
    InvariantViolation(String),

    // Internal control flow, never returned from a search.
    #[doc(hidden)]
    #[error("backtracked")]
    Backtracked,
    #[doc(hidden)]
    #[error("accepted")]
    Accept,
    #[doc(hidden)]
    #[error("no match")]
    NoMatch,
}

impl RuntimeError {
    pub(crate) fn label_before(found: Span, pos: usize) -> Self {
        Self::InvariantViolation(format!(
            "label source returned {found} for a query at or after {pos}"
        ))
    }
}

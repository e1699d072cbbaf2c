//! Engine limits.
//!
//! Neither loop carries a wall clock; a limit that is hit surfaces as
//! [`LogicError::Aborted`](crate::LogicError::Aborted).

/// Default cap on refutation rounds.
pub const DEFAULT_MAX_ROUNDS: usize = 64;

/// Configuration for the forward-chaining fixpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InferenceConfig {
    /// Maximum number of full passes over the rule list. `None` means no
    /// limit; function-free rules always reach a fixpoint.
    pub max_passes: Option<usize>,
}

/// Configuration for the resolution refutation loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionConfig {
    /// Maximum number of saturation rounds per query.
    pub max_rounds: Option<usize>,
    /// Maximum size of the working clause set per query.
    pub max_clauses: Option<usize>,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        ResolutionConfig {
            max_rounds: Some(DEFAULT_MAX_ROUNDS),
            max_clauses: None,
        }
    }
}

impl ResolutionConfig {
    /// No caps at all.
    pub fn unbounded() -> Self {
        ResolutionConfig { max_rounds: None, max_clauses: None }
    }
}

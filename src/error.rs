//! Error types.

use thiserror::Error;

/// Failures detected while configuring a search.
///
/// Search itself never fails: depth cutoffs, dead ends and exhaustion are
/// reported through [`crate::tree::SearchStatus`] rather than as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The strategy identifier is not one of `breadth`, `depth`,
    /// `uniform`, `greedy` or `a*`.
    #[error("unknown search strategy: {0:?}")]
    UnknownStrategy(String),
}

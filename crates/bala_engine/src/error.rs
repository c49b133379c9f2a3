//! Error types for the strength analysis engine.

use bala_base::BalaError;
use thiserror::Error;

/// Errors from a strength analysis.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// Chart or configuration rejected by the base evaluators.
    #[error(transparent)]
    Base(#[from] BalaError),
}

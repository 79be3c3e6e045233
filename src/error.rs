//! Error taxonomy for motion estimation.
//!
//! Only estimation-level failures surface here. Singular systems and
//! degenerate samples inside a trial are ordinary outcomes of the search and
//! are reported as `Option`/`bool` values by the components that detect them.

use thiserror::Error;

use crate::models::ModelType;

/// Errors that abort a whole estimation call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    /// Not enough correspondences for the requested model.
    #[error("need at least {needed} correspondences, got {got}")]
    InsufficientPoints { needed: usize, got: usize },
    /// The model type cannot be estimated (identity, or a disabled model).
    #[error("model type {0:?} cannot be estimated")]
    UnsupportedModel(ModelType),
    /// Too many consecutive degenerate minimal samples.
    #[error("gave up after {attempts} consecutive degenerate samples")]
    DegenerateSamples { attempts: usize },
    /// The sampler could not draw a minimal sample.
    #[error("cannot draw {needed} distinct indices from {available} correspondences")]
    SamplingFailed { needed: usize, available: usize },
    /// The caller asked for zero motion models.
    #[error("at least one motion model must be requested")]
    NoMotionsRequested,
    /// The cancellation flag was raised while trials were running.
    #[error("estimation cancelled")]
    Cancelled,
    /// Point arrays have mismatched or malformed shapes.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Settings failed validation.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

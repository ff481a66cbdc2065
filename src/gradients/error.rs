// src/gradients/error.rs
use thiserror::Error;

use crate::tape::{GradMethod, TapeError};

/// Errors raised by gradient transforms
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradientError {
    #[error(transparent)]
    Tape(#[from] TapeError),

    /// A trainable operation is still not analytically differentiable after expansion.
    #[error("operation {operation} (gradient method {grad_method:?}) does not support the parameter-shift rule")]
    UnsupportedGradMethod {
        operation: String,
        grad_method: Option<GradMethod>,
    },

    #[error("parameter-shift rule is undefined for a shift of {0} (sin(shift) is zero)")]
    InvalidShift(f64),

    /// Execution results do not match the generated tapes.
    #[error("unexpected execution results: {0}")]
    ResultShape(String),
}

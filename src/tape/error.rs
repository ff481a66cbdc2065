// src/tape/error.rs
use thiserror::Error;

/// Errors raised when editing a tape's parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TapeError {
    #[error("expected {expected} parameter values, got {got}")]
    ParameterCount { expected: usize, got: usize },

    #[error("trainable parameter index {index} is out of range for a tape with {num_params} parameters")]
    TrainableIndexOutOfRange { index: usize, num_params: usize },
}

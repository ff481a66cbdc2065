// src/gradients/mod.rs
//! Gradient transforms on quantum tapes
//!
//! Expansion of non-differentiable operations, parameter-shift tape
//! generation and the post-processing that assembles Jacobians.

pub mod error;
pub mod gradient_transform;
pub mod parameter_shift;

pub use error::GradientError;
pub use gradient_transform::{analytic_expand, gradient_expand, ExpandFn, GradientTransform, DEFAULT_EXPANSION_DEPTH};
pub use parameter_shift::{param_shift, ParamShiftConfig, ParamShiftProcessor, MIN_SHIFT_SIN};

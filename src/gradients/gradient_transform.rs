// src/gradients/gradient_transform.rs
//! Gradient transforms
//!
//! A gradient transform maps a tape to a batch of tapes plus a processing
//! step that turns their execution results into a Jacobian. Before the tapes
//! are generated, trainable operations the differentiation rule cannot handle
//! are decomposed. Tapes that need no expansion are passed through untouched.

use std::borrow::Cow;
use std::fmt;

use ndarray::Array2;
use rayon::prelude::*;

use crate::tape::{GradMethod, Operation, QuantumTape};

use super::error::GradientError;
use super::parameter_shift::{param_shift, ParamShiftConfig, ParamShiftProcessor};

/// Decomposition levels applied before giving up on an operation
pub const DEFAULT_EXPANSION_DEPTH: usize = 10;

/// Decompose trainable operations that fail `supported`
fn expand_unsupported<'a>(
    tape: &'a QuantumTape,
    depth: usize,
    supported: fn(&dyn Operation) -> bool,
) -> Cow<'a, QuantumTape> {
    let needs_expansion = |op: &dyn Operation| op.is_trainable() && !supported(op);

    if !tape.operations().iter().any(|op| needs_expansion(op.as_ref())) {
        return Cow::Borrowed(tape);
    }

    log::debug!("expanding tape with {} operations", tape.operations().len());
    Cow::Owned(tape.expand(depth, &|op| !needs_expansion(op)))
}

/// Expand trainable operations that have no gradient method at all
///
/// Returns the tape itself when every trainable operation declares a
/// gradient method, analytic or numeric.
pub fn gradient_expand(tape: &QuantumTape, depth: usize) -> Cow<'_, QuantumTape> {
    expand_unsupported(tape, depth, |op| op.grad_method().is_some())
}

/// Expand trainable operations that are not analytically differentiable
pub fn analytic_expand(tape: &QuantumTape, depth: usize) -> Cow<'_, QuantumTape> {
    expand_unsupported(tape, depth, |op| op.grad_method() == Some(GradMethod::Analytic))
}

/// Expansion step run before a transform generates its tapes
pub type ExpandFn = for<'a> fn(&'a QuantumTape, usize) -> Cow<'a, QuantumTape>;

/// Parameter-shift gradient transform with a configurable expansion step
#[derive(Clone)]
pub struct GradientTransform {
    expand_fn: Option<ExpandFn>,
    config: ParamShiftConfig,
}

impl fmt::Debug for GradientTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GradientTransform")
            .field("expands", &self.expand_fn.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl Default for GradientTransform {
    fn default() -> Self {
        GradientTransform::param_shift(ParamShiftConfig::default())
    }
}

impl GradientTransform {
    pub fn new(expand_fn: Option<ExpandFn>, config: ParamShiftConfig) -> Self {
        GradientTransform { expand_fn, config }
    }

    /// The parameter-shift transform, expanding with [`gradient_expand`]
    pub fn param_shift(config: ParamShiftConfig) -> Self {
        GradientTransform::new(Some(gradient_expand), config)
    }

    pub fn config(&self) -> &ParamShiftConfig {
        &self.config
    }

    /// Apply the expansion step alone
    pub fn expand<'a>(&self, tape: &'a QuantumTape) -> Cow<'a, QuantumTape> {
        match self.expand_fn {
            Some(expand) => expand(tape, self.config.expansion_depth),
            None => Cow::Borrowed(tape),
        }
    }

    /// Expanded tape's gradient tapes and their processor
    pub fn tapes(&self, tape: &QuantumTape) -> Result<(Vec<QuantumTape>, ParamShiftProcessor), GradientError> {
        param_shift(&self.expand(tape), &self.config)
    }

    /// Jacobian of `tape`, executing the generated tapes with `execute`
    ///
    /// `execute` returns one value per measurement of the tape it is given.
    pub fn compute<F>(&self, tape: &QuantumTape, mut execute: F) -> Result<Array2<f64>, GradientError>
    where
        F: FnMut(&QuantumTape) -> Vec<f64>,
    {
        let (tapes, processor) = self.tapes(tape)?;
        let results: Vec<Vec<f64>> = tapes.iter().map(&mut execute).collect();
        processor.process(&results)
    }

    /// Like [`GradientTransform::compute`], executing the tapes in parallel
    pub fn compute_parallel<F>(&self, tape: &QuantumTape, execute: F) -> Result<Array2<f64>, GradientError>
    where
        F: Fn(&QuantumTape) -> Vec<f64> + Sync,
    {
        let (tapes, processor) = self.tapes(tape)?;
        let results: Vec<Vec<f64>> = tapes.par_iter().map(&execute).collect();
        processor.process(&results)
    }
}

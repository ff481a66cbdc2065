// src/gradients/parameter_shift.rs
//! Parameter-shift rule
//!
//! For a gate generated by a Pauli word, the derivative of an expectation
//! value with respect to its angle `θ` is
//!
//! `∂f/∂θ = (f(θ + s) - f(θ - s)) / (2 sin s)`
//!
//! for any shift `s` with `sin s ≠ 0`. The transform emits two shifted tapes
//! per trainable parameter and a processor that combines their results.

use std::f64::consts::FRAC_PI_2;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::tape::{GradMethod, MeasurementProcess, QuantumTape};

use super::error::GradientError;
use super::gradient_transform::{analytic_expand, DEFAULT_EXPANSION_DEPTH};

/// Shifts with `|sin s|` below this leave the rule numerically undefined
pub const MIN_SHIFT_SIN: f64 = 1e-12;

/// Options of the parameter-shift transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamShiftConfig {
    /// Shift `s` applied to each parameter
    pub shift: f64,
    /// Maximum number of decomposition levels applied to unsupported operations
    pub expansion_depth: usize,
}

impl Default for ParamShiftConfig {
    fn default() -> Self {
        ParamShiftConfig {
            shift: FRAC_PI_2,
            expansion_depth: DEFAULT_EXPANSION_DEPTH,
        }
    }
}

/// Turns execution results of the shifted tapes into a Jacobian
#[derive(Debug, Clone, PartialEq)]
pub struct ParamShiftProcessor {
    num_params: usize,
    variances: Vec<bool>,
    coefficient: f64,
    // Index of the unshifted tape, generated only when a variance is measured
    unshifted: Option<usize>,
    num_tapes: usize,
}

impl ParamShiftProcessor {
    pub fn num_tapes(&self) -> usize {
        self.num_tapes
    }

    /// Jacobian of shape `(measurements, trainable parameters)`
    ///
    /// `results[k][j]` is the `j`-th measurement of the `k`-th generated tape.
    pub fn process(&self, results: &[Vec<f64>]) -> Result<Array2<f64>, GradientError> {
        if results.len() != self.num_tapes {
            return Err(GradientError::ResultShape(format!(
                "expected results for {} tapes, got {}",
                self.num_tapes,
                results.len()
            )));
        }
        let num_measurements = self.variances.len();
        if let Some((k, row)) = results.iter().enumerate().find(|(_, r)| r.len() != num_measurements) {
            return Err(GradientError::ResultShape(format!(
                "tape {} returned {} values for {} measurements",
                k,
                row.len(),
                num_measurements
            )));
        }

        let mut jacobian = Array2::zeros((num_measurements, self.num_params));
        for t in 0..self.num_params {
            let (plus, minus) = (&results[2 * t], &results[2 * t + 1]);
            for (j, &is_variance) in self.variances.iter().enumerate() {
                let derivative = self.coefficient * (plus[j] - minus[j]);
                // Pauli words square to the identity, so ∂Var = -2⟨A⟩∂⟨A⟩
                jacobian[[j, t]] = match self.unshifted {
                    Some(u) if is_variance => -2.0 * results[u][j] * derivative,
                    _ => derivative,
                };
            }
        }
        Ok(jacobian)
    }
}

/// Generate the parameter-shift tapes of `tape` and their processor
///
/// Trainable operations that are not analytically differentiable are
/// decomposed first. Variances are measured as expectation values on the
/// generated tapes.
pub fn param_shift(
    tape: &QuantumTape,
    config: &ParamShiftConfig,
) -> Result<(Vec<QuantumTape>, ParamShiftProcessor), GradientError> {
    let shift = config.shift;
    if !shift.is_finite() || shift.sin().abs() < MIN_SHIFT_SIN {
        return Err(GradientError::InvalidShift(shift));
    }

    let tape = analytic_expand(tape, config.expansion_depth);
    if let Some(op) = tape
        .trainable_operations()
        .find(|op| op.grad_method() != Some(GradMethod::Analytic))
    {
        return Err(GradientError::UnsupportedGradMethod {
            operation: op.name(),
            grad_method: op.grad_method(),
        });
    }

    let variances: Vec<bool> = tape.measurements().iter().map(|m| m.is_variance()).collect();
    let base = tape.with_measurements(
        tape.measurements()
            .iter()
            .map(MeasurementProcess::to_expval)
            .collect(),
    );

    let num_params = base.trainable_params().len();
    let mut tapes = Vec::with_capacity(2 * num_params + 1);
    for t in 0..num_params {
        tapes.push(base.shift_parameter(t, shift)?);
        tapes.push(base.shift_parameter(t, -shift)?);
    }

    let unshifted = if num_params > 0 && variances.iter().any(|&v| v) {
        tapes.push(base);
        Some(tapes.len() - 1)
    } else {
        None
    };

    log::debug!(
        "parameter-shift: {} trainable parameters, {} tapes",
        num_params,
        tapes.len()
    );

    let processor = ParamShiftProcessor {
        num_params,
        variances,
        coefficient: 1.0 / (2.0 * shift.sin()),
        unshifted,
        num_tapes: tapes.len(),
    };
    Ok((tapes, processor))
}

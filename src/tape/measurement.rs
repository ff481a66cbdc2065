// src/tape/measurement.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grouping::PauliWord;

/// Terminal measurement of a tape, on a Pauli-word observable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementProcess {
    /// Expectation value `⟨A⟩`
    Expval(PauliWord),
    /// Variance `⟨A²⟩ - ⟨A⟩²`
    Var(PauliWord),
}

impl MeasurementProcess {
    pub fn observable(&self) -> &PauliWord {
        match self {
            MeasurementProcess::Expval(obs) | MeasurementProcess::Var(obs) => obs,
        }
    }

    /// The expectation value of the same observable
    pub fn to_expval(&self) -> MeasurementProcess {
        MeasurementProcess::Expval(self.observable().clone())
    }

    pub fn is_variance(&self) -> bool {
        matches!(self, MeasurementProcess::Var(_))
    }
}

impl fmt::Display for MeasurementProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementProcess::Expval(obs) => write!(f, "expval({})", obs),
            MeasurementProcess::Var(obs) => write!(f, "var({})", obs),
        }
    }
}

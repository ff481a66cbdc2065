// src/grouping/error.rs
use thiserror::Error;

use super::wires::Wire;

/// Errors raised by the Pauli-word algebra
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PauliError {
    /// A wire referenced by a Pauli word is missing from the wire map,
    /// or the map itself is not a bijection onto `0..n`.
    #[error("invalid wire map: {0}")]
    InvalidWireMap(String),

    /// Two tensor factors act non-trivially on the same wire.
    #[error("Pauli words overlap on wire {0}")]
    OverlappingWires(Wire),

    /// Pauli groups are only defined for at least one qubit.
    #[error("number of qubits must be at least 1, got {0}")]
    InvalidQubitCount(usize),

    #[error("{n_qubits} qubits exceed the limit of {max}")]
    TooManyQubits { n_qubits: usize, max: usize },

    /// A symplectic vector of the wrong length, or one that does not fit the wire map.
    #[error("invalid binary vector: {0}")]
    InvalidBinaryVector(String),

    /// A Pauli string containing something other than `I`, `X`, `Y` or `Z`.
    #[error("invalid Pauli string '{string}': {reason}")]
    InvalidPauliString { string: String, reason: String },
}

impl PauliError {
    pub(crate) fn missing_wire(wire: &Wire) -> Self {
        PauliError::InvalidWireMap(format!("wire {} is not present in the wire map", wire))
    }
}

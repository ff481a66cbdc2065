// src/qchem/error.rs
use thiserror::Error;

/// Errors raised while building basis sets and molecules
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QchemError {
    #[error("The only supported basis set is 'sto-3g', got '{0}'")]
    UnsupportedBasis(String),

    #[error("unknown atomic symbol '{0}'")]
    UnknownElement(String),

    /// The element exists but the basis set has no data for it.
    #[error("basis set '{basis}' has no data for atom '{symbol}'")]
    MissingBasisData { basis: String, symbol: String },

    #[error("a molecule needs at least one atom")]
    NoAtoms,

    #[error("geometry must have shape ({expected_atoms}, 3), got {shape:?}")]
    GeometryShape { expected_atoms: usize, shape: Vec<usize> },

    #[error("spin multiplicity {mult} is not possible with {n_electrons} electrons")]
    InvalidMultiplicity { mult: u32, n_electrons: i64 },

    #[error("molecular charge {charge} exceeds the total nuclear charge {nuclear_charge}")]
    InvalidCharge { charge: i32, nuclear_charge: u32 },
}

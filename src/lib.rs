//! Pauli-word algebra, basis-set data and gradient transforms
//!
//! This crate provides the algebra of Pauli words with exact phase tracking,
//! STO-3G basis-set parameters and molecule objects for Hartree-Fock
//! calculations, and parameter-shift gradient transforms that act on
//! recorded quantum tapes.

pub mod grouping;
pub mod qchem;
pub mod tape;
pub mod gradients;

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::grouping::{pauli_mult, pauli_mult_with_phase, PauliError, PauliOp, PauliWord, Wire, WireMap};
    pub use crate::qchem::{atom_basis_data, mol_basis_data, BasisFunction, Molecule, MoleculeOptions, QchemError};
    pub use crate::tape::{GradMethod, MeasurementProcess, Operation, Parameter, QuantumTape, StandardOperation, TapeBuilder};
    pub use crate::gradients::{gradient_expand, param_shift, GradientError, GradientTransform, ParamShiftConfig};
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

// src/qchem/mod.rs
//! Quantum chemistry inputs for Hartree-Fock calculations
//!
//! Basis-set parameter tables, contracted Gaussian basis functions and the
//! molecule object that ties atoms, geometry and basis together.

pub mod error;
pub mod basis_data;
pub mod basis_set;
pub mod molecule;

pub use error::QchemError;
pub use basis_set::{atom_basis_data, mol_basis_data, AngularMomentum, BasisFunction, BasisParams, STO_3G};
pub use molecule::{generate_nuclear_charges, Molecule, MoleculeOptions};

// src/qchem/molecule.rs
//! Molecule objects for Hartree-Fock calculations

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::basis_data::atomic_number;
use super::basis_set::{mol_basis_data, BasisFunction, BasisParams, STO_3G};
use super::error::QchemError;

/// Optional molecular properties, with the usual closed-shell defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoleculeOptions {
    /// Net charge of the molecule
    pub charge: i32,
    /// Spin multiplicity `2S + 1`
    pub mult: u32,
    /// Basis-set name
    pub basis_name: String,
}

impl Default for MoleculeOptions {
    fn default() -> Self {
        MoleculeOptions {
            charge: 0,
            mult: 1,
            basis_name: STO_3G.to_string(),
        }
    }
}

/// Atomic numbers of a list of chemical symbols
pub fn generate_nuclear_charges<S: AsRef<str>>(symbols: &[S]) -> Result<Vec<u32>, QchemError> {
    symbols
        .iter()
        .map(|s| atomic_number(s.as_ref()).ok_or_else(|| QchemError::UnknownElement(s.as_ref().to_string())))
        .collect()
}

/// A molecule: atoms, geometry and the basis set placed on them
///
/// Coordinates are in atomic units, one row per atom.
#[derive(Debug, Clone)]
pub struct Molecule {
    symbols: Vec<String>,
    coordinates: Array2<f64>,
    charge: i32,
    mult: u32,
    basis_name: String,
    nuclear_charges: Vec<u32>,
    n_electrons: usize,
    n_basis: Vec<usize>,
    basis_data: Vec<BasisParams>,
    basis_set: Vec<BasisFunction>,
}

impl Molecule {
    /// Neutral singlet in the STO-3G basis
    pub fn new<S: AsRef<str>>(symbols: &[S], coordinates: Array2<f64>) -> Result<Self, QchemError> {
        Self::with_options(symbols, coordinates, MoleculeOptions::default())
    }

    pub fn with_options<S: AsRef<str>>(
        symbols: &[S],
        coordinates: Array2<f64>,
        options: MoleculeOptions,
    ) -> Result<Self, QchemError> {
        let MoleculeOptions { charge, mult, basis_name } = options;

        if !basis_name.eq_ignore_ascii_case(STO_3G) {
            return Err(QchemError::UnsupportedBasis(basis_name));
        }

        if symbols.is_empty() {
            return Err(QchemError::NoAtoms);
        }
        if coordinates.shape() != [symbols.len(), 3] {
            return Err(QchemError::GeometryShape {
                expected_atoms: symbols.len(),
                shape: coordinates.shape().to_vec(),
            });
        }

        let symbols: Vec<String> = symbols.iter().map(|s| s.as_ref().to_string()).collect();
        let nuclear_charges = generate_nuclear_charges(&symbols)?;

        let nuclear_charge: u32 = nuclear_charges.iter().sum();
        let n_electrons = i64::from(nuclear_charge) - i64::from(charge);
        if n_electrons < 0 {
            return Err(QchemError::InvalidCharge { charge, nuclear_charge });
        }

        // 2S unpaired electrons, the rest paired up
        let unpaired = i64::from(mult) - 1;
        if mult == 0 || unpaired > n_electrons || (n_electrons - unpaired) % 2 != 0 {
            return Err(QchemError::InvalidMultiplicity { mult, n_electrons });
        }

        let (n_basis, basis_data) = mol_basis_data(&basis_name, &symbols)?;

        let mut basis_set = Vec::with_capacity(basis_data.len());
        let mut params = basis_data.iter();
        for (atom, &count) in n_basis.iter().enumerate() {
            let row = coordinates.row(atom);
            let center = [row[0], row[1], row[2]];
            for p in params.by_ref().take(count) {
                basis_set.push(BasisFunction::from_params(p.clone(), center));
            }
        }

        log::debug!(
            "molecule {:?}: {} electrons, {} basis functions",
            symbols,
            n_electrons,
            basis_set.len()
        );

        Ok(Molecule {
            symbols,
            coordinates,
            charge,
            mult,
            basis_name,
            nuclear_charges,
            n_electrons: n_electrons as usize,
            n_basis,
            basis_data,
            basis_set,
        })
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn coordinates(&self) -> &Array2<f64> {
        &self.coordinates
    }

    pub fn charge(&self) -> i32 {
        self.charge
    }

    pub fn mult(&self) -> u32 {
        self.mult
    }

    pub fn basis_name(&self) -> &str {
        &self.basis_name
    }

    pub fn nuclear_charges(&self) -> &[u32] {
        &self.nuclear_charges
    }

    pub fn n_electrons(&self) -> usize {
        self.n_electrons
    }

    /// Number of basis functions on each atom
    pub fn n_basis(&self) -> &[usize] {
        &self.n_basis
    }

    pub fn basis_data(&self) -> &[BasisParams] {
        &self.basis_data
    }

    /// Basis functions centred on their atoms
    pub fn basis_set(&self) -> &[BasisFunction] {
        &self.basis_set
    }

    /// Number of spatial orbitals spanned by the basis
    pub fn n_orbitals(&self) -> usize {
        self.basis_set.len()
    }
}

// src/qchem/basis_set.rs
//! Contracted Gaussian basis functions and basis-set parameter tables

use serde::{Deserialize, Serialize};

use super::basis_data::{atomic_number, sto3g_shells, ShellKind};
use super::error::QchemError;

/// Name of the only tabulated basis set
pub const STO_3G: &str = "sto-3g";

/// Cartesian angular momentum exponents `(l_x, l_y, l_z)`
pub type AngularMomentum = (u32, u32, u32);

/// Default parameters of one contracted basis function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasisParams {
    pub l: AngularMomentum,
    pub alpha: Vec<f64>,
    pub coeff: Vec<f64>,
}

/// A contracted Gaussian-type orbital
///
/// `φ(r) = (x - X)^l_x (y - Y)^l_y (z - Z)^l_z Σ_k c_k exp(-α_k |r - R|²)`
/// centred at `R = r`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasisFunction {
    pub l: AngularMomentum,
    pub alpha: Vec<f64>,
    pub coeff: Vec<f64>,
    pub r: [f64; 3],
}

impl BasisFunction {
    pub fn new(l: AngularMomentum, alpha: Vec<f64>, coeff: Vec<f64>, r: [f64; 3]) -> Self {
        BasisFunction { l, alpha, coeff, r }
    }

    pub fn from_params(params: BasisParams, r: [f64; 3]) -> Self {
        BasisFunction::new(params.l, params.alpha, params.coeff, r)
    }

    /// Differentiable parameters: exponents, contraction coefficients and centre
    pub fn params(&self) -> (&[f64], &[f64], [f64; 3]) {
        (&self.alpha, &self.coeff, self.r)
    }

    /// Number of primitive Gaussians in the contraction
    pub fn n_primitives(&self) -> usize {
        self.alpha.len()
    }

    /// Total angular momentum `l_x + l_y + l_z`
    pub fn total_angular_momentum(&self) -> u32 {
        self.l.0 + self.l.1 + self.l.2
    }
}

fn check_basis_name(basis_name: &str) -> Result<(), QchemError> {
    if basis_name.eq_ignore_ascii_case(STO_3G) {
        Ok(())
    } else {
        Err(QchemError::UnsupportedBasis(basis_name.to_string()))
    }
}

/// Default basis-function parameters for one atom
///
/// `s` shells give one function with `l = (0, 0, 0)`; `sp` shells give the
/// `s` function followed by the three `p` functions `(1,0,0)`, `(0,1,0)` and
/// `(0,0,1)`.
pub fn atom_basis_data(basis_name: &str, symbol: &str) -> Result<Vec<BasisParams>, QchemError> {
    check_basis_name(basis_name)?;
    if atomic_number(symbol).is_none() {
        return Err(QchemError::UnknownElement(symbol.to_string()));
    }
    let shells = sto3g_shells(symbol).ok_or_else(|| QchemError::MissingBasisData {
        basis: basis_name.to_string(),
        symbol: symbol.to_string(),
    })?;

    let mut params = Vec::new();
    for shell in shells {
        params.push(BasisParams {
            l: (0, 0, 0),
            alpha: shell.exponents.to_vec(),
            coeff: shell.s_coefficients.to_vec(),
        });
        if let (ShellKind::SP, Some(p_coefficients)) = (shell.kind, shell.p_coefficients) {
            for l in [(1, 0, 0), (0, 1, 0), (0, 0, 1)] {
                params.push(BasisParams {
                    l,
                    alpha: shell.exponents.to_vec(),
                    coeff: p_coefficients.to_vec(),
                });
            }
        }
    }
    Ok(params)
}

/// Default basis-function parameters for a list of atoms
///
/// Returns the number of basis functions on each atom together with the
/// parameters of all functions, atom by atom.
pub fn mol_basis_data<S: AsRef<str>>(
    basis_name: &str,
    symbols: &[S],
) -> Result<(Vec<usize>, Vec<BasisParams>), QchemError> {
    let mut n_basis = Vec::with_capacity(symbols.len());
    let mut params = Vec::new();

    for symbol in symbols {
        let atom_params = atom_basis_data(basis_name, symbol.as_ref())?;
        n_basis.push(atom_params.len());
        params.extend(atom_params);
    }

    log::debug!(
        "{} basis: {} functions on {} atoms",
        basis_name,
        params.len(),
        symbols.len()
    );
    Ok((n_basis, params))
}

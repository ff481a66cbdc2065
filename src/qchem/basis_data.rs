// src/qchem/basis_data.rs
//! Tabulated basis-set data
//!
//! STO-3G parameters for the first-row atoms, as published by the Basis Set
//! Exchange. Each STO-3G shell uses three primitives, and the contraction
//! coefficients are shared by all elements.

/// Chemical symbols ordered by atomic number, starting at hydrogen
pub const ATOMIC_SYMBOLS: [&str; 36] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr",
];

/// Atomic number of a chemical symbol
pub fn atomic_number(symbol: &str) -> Option<u32> {
    ATOMIC_SYMBOLS
        .iter()
        .position(|&s| s == symbol)
        .map(|i| i as u32 + 1)
}

/// Angular character of a tabulated shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    S,
    /// Shared-exponent `s` and `p` shell
    SP,
}

/// One contracted shell of a basis set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shell {
    pub kind: ShellKind,
    pub exponents: [f64; 3],
    /// Coefficients of the `s` part
    pub s_coefficients: [f64; 3],
    /// Coefficients of the `p` part, present for `SP` shells
    pub p_coefficients: Option<[f64; 3]>,
}

const STO3G_1S: [f64; 3] = [0.1543289673e00, 0.5353281423e00, 0.4446345422e00];
const STO3G_2S: [f64; 3] = [-0.9996722919e-01, 0.3995128261e00, 0.7001154689e00];
const STO3G_2P: [f64; 3] = [0.1559162750e00, 0.6076837186e00, 0.3919573931e00];

const fn core_shell(exponents: [f64; 3]) -> Shell {
    Shell {
        kind: ShellKind::S,
        exponents,
        s_coefficients: STO3G_1S,
        p_coefficients: None,
    }
}

const fn valence_shell(exponents: [f64; 3]) -> Shell {
    Shell {
        kind: ShellKind::SP,
        exponents,
        s_coefficients: STO3G_2S,
        p_coefficients: Some(STO3G_2P),
    }
}

static STO3G: [(&str, &[Shell]); 10] = [
    ("H", &[core_shell([0.3425250914e01, 0.6239137298e00, 0.1688554040e00])]),
    ("He", &[core_shell([0.6362421394e01, 0.1158922999e01, 0.3136497915e00])]),
    (
        "Li",
        &[
            core_shell([0.1611957475e02, 0.2936200663e01, 0.7946504870e00]),
            valence_shell([0.6362897469e00, 0.1478600533e00, 0.4808867840e-01]),
        ],
    ),
    (
        "Be",
        &[
            core_shell([0.3016787069e02, 0.5495115306e01, 0.1487192653e01]),
            valence_shell([0.1314833110e01, 0.3055389383e00, 0.9937074560e-01]),
        ],
    ),
    (
        "B",
        &[
            core_shell([0.4879111318e02, 0.8887362172e01, 0.2405267040e01]),
            valence_shell([0.2236956142e01, 0.5198204999e00, 0.1690617600e00]),
        ],
    ),
    (
        "C",
        &[
            core_shell([0.7161683735e02, 0.1304509632e02, 0.3530512160e01]),
            valence_shell([0.2941249355e01, 0.6834830964e00, 0.2222899159e00]),
        ],
    ),
    (
        "N",
        &[
            core_shell([0.9910616896e02, 0.1805231239e02, 0.4885660238e01]),
            valence_shell([0.3780455879e01, 0.8784966449e00, 0.2857143744e00]),
        ],
    ),
    (
        "O",
        &[
            core_shell([0.1307093214e03, 0.2380886605e02, 0.6443608313e01]),
            valence_shell([0.5033151319e01, 0.1169596125e01, 0.3803889600e00]),
        ],
    ),
    (
        "F",
        &[
            core_shell([0.1666791340e03, 0.3036081233e02, 0.8216820672e01]),
            valence_shell([0.6464803249e01, 0.1502281245e01, 0.4885884864e00]),
        ],
    ),
    (
        "Ne",
        &[
            core_shell([0.2070156070e03, 0.3770815124e02, 0.1020529731e02]),
            valence_shell([0.8246315120e01, 0.1916266291e01, 0.6232292721e00]),
        ],
    ),
];

/// STO-3G shells of an atom, if tabulated
pub fn sto3g_shells(symbol: &str) -> Option<&'static [Shell]> {
    STO3G
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|&(_, shells)| shells)
}

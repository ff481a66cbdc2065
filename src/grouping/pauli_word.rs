// src/grouping/pauli_word.rs
//! Pauli words
//!
//! A Pauli word is a tensor product of single-qubit Pauli operators, one per
//! wire. Wires that do not appear are implicitly the identity, so the word is
//! stored as a sorted map holding only its non-identity factors.

use std::collections::BTreeMap;
use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use super::error::PauliError;
use super::wires::Wire;

/// Single-qubit Pauli operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PauliOp {
    I,
    X,
    Y,
    Z,
}

impl PauliOp {
    pub const ALL: [PauliOp; 4] = [PauliOp::I, PauliOp::X, PauliOp::Y, PauliOp::Z];

    fn table_index(self) -> usize {
        match self {
            PauliOp::I => 0,
            PauliOp::X => 1,
            PauliOp::Y => 2,
            PauliOp::Z => 3,
        }
    }

    /// Single-qubit product `self · other`, as an operator and a phase
    pub fn mul_with_phase(self, other: PauliOp) -> (PauliOp, Phase) {
        PRODUCT_TABLE[self.table_index()][other.table_index()]
    }

    /// Symplectic `(x, z)` bits of the operator
    pub fn to_xz(self) -> (bool, bool) {
        match self {
            PauliOp::I => (false, false),
            PauliOp::X => (true, false),
            PauliOp::Y => (true, true),
            PauliOp::Z => (false, true),
        }
    }

    pub fn from_xz(x: bool, z: bool) -> PauliOp {
        match (x, z) {
            (false, false) => PauliOp::I,
            (true, false) => PauliOp::X,
            (true, true) => PauliOp::Y,
            (false, true) => PauliOp::Z,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            PauliOp::I => 'I',
            PauliOp::X => 'X',
            PauliOp::Y => 'Y',
            PauliOp::Z => 'Z',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<PauliOp> {
        match symbol {
            'I' => Some(PauliOp::I),
            'X' => Some(PauliOp::X),
            'Y' => Some(PauliOp::Y),
            'Z' => Some(PauliOp::Z),
            _ => None,
        }
    }
}

impl fmt::Display for PauliOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A unit phase `i^k`, kept as the exponent `k mod 4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Phase(u8);

impl Phase {
    pub const ONE: Phase = Phase(0);
    pub const I: Phase = Phase(1);
    pub const MINUS_ONE: Phase = Phase(2);
    pub const MINUS_I: Phase = Phase(3);

    pub fn power_of_i(self) -> u8 {
        self.0
    }

    pub fn to_complex(self) -> Complex64 {
        match self.0 {
            0 => Complex64::new(1.0, 0.0),
            1 => Complex64::new(0.0, 1.0),
            2 => Complex64::new(-1.0, 0.0),
            _ => Complex64::new(0.0, -1.0),
        }
    }
}

impl std::ops::Mul for Phase {
    type Output = Phase;

    fn mul(self, rhs: Phase) -> Phase {
        Phase((self.0 + rhs.0) % 4)
    }
}

impl std::ops::MulAssign for Phase {
    fn mul_assign(&mut self, rhs: Phase) {
        *self = *self * rhs;
    }
}

impl From<Phase> for Complex64 {
    fn from(phase: Phase) -> Complex64 {
        phase.to_complex()
    }
}

use PauliOp::{I, X, Y, Z};

// Rows are the left operand, columns the right operand, both in I, X, Y, Z order.
const PRODUCT_TABLE: [[(PauliOp, Phase); 4]; 4] = [
    [(I, Phase::ONE), (X, Phase::ONE), (Y, Phase::ONE), (Z, Phase::ONE)],
    [(X, Phase::ONE), (I, Phase::ONE), (Z, Phase::I), (Y, Phase::MINUS_I)],
    [(Y, Phase::ONE), (Z, Phase::MINUS_I), (I, Phase::ONE), (X, Phase::I)],
    [(Z, Phase::ONE), (Y, Phase::I), (X, Phase::MINUS_I), (I, Phase::ONE)],
];

/// Tensor product of single-qubit Pauli operators on labelled wires
///
/// Serialized as a list of `(wire, op)` factors so integer wires keep their
/// type in formats with string-only map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<(Wire, PauliOp)>", into = "Vec<(Wire, PauliOp)>")]
pub struct PauliWord {
    ops: BTreeMap<Wire, PauliOp>,
}

impl PauliWord {
    /// The identity word, acting trivially on every wire
    pub fn identity() -> Self {
        PauliWord::default()
    }

    /// A single Pauli factor on one wire
    pub fn single(wire: impl Into<Wire>, op: PauliOp) -> Self {
        let mut ops = BTreeMap::new();
        if op != PauliOp::I {
            ops.insert(wire.into(), op);
        }
        PauliWord { ops }
    }

    pub fn x(wire: impl Into<Wire>) -> Self {
        Self::single(wire, PauliOp::X)
    }

    pub fn y(wire: impl Into<Wire>) -> Self {
        Self::single(wire, PauliOp::Y)
    }

    pub fn z(wire: impl Into<Wire>) -> Self {
        Self::single(wire, PauliOp::Z)
    }

    /// Build a word from `(wire, op)` factors, rejecting repeated wires
    pub fn from_ops<W, T>(factors: T) -> Result<Self, PauliError>
    where
        W: Into<Wire>,
        T: IntoIterator<Item = (W, PauliOp)>,
    {
        let mut word = PauliWord::identity();
        for (wire, op) in factors {
            word = word.tensor(&PauliWord::single(wire, op))?;
        }
        Ok(word)
    }

    /// Tensor (`@`) composition with a word on disjoint wires
    pub fn tensor(&self, other: &PauliWord) -> Result<PauliWord, PauliError> {
        let mut ops = self.ops.clone();
        for (wire, &op) in &other.ops {
            if ops.insert(wire.clone(), op).is_some() {
                return Err(PauliError::OverlappingWires(wire.clone()));
            }
        }
        Ok(PauliWord { ops })
    }

    /// The operator on `wire`; absent wires are the identity
    pub fn get(&self, wire: &Wire) -> PauliOp {
        self.ops.get(wire).copied().unwrap_or(PauliOp::I)
    }

    /// Wires carrying a non-identity factor, in label order
    pub fn wires(&self) -> impl Iterator<Item = &Wire> {
        self.ops.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Wire, PauliOp)> {
        self.ops.iter().map(|(w, &op)| (w, op))
    }

    /// Number of non-identity factors
    pub fn weight(&self) -> usize {
        self.ops.len()
    }

    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }
}

impl fmt::Display for PauliWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ops.is_empty() {
            return write!(f, "I");
        }
        let factors: Vec<String> = self
            .ops
            .iter()
            .map(|(wire, op)| format!("{}({})", op, wire))
            .collect();
        write!(f, "{}", factors.join(" @ "))
    }
}

impl<W: Into<Wire>> FromIterator<(W, PauliOp)> for PauliWord {
    /// Later factors on a repeated wire replace earlier ones.
    fn from_iter<T: IntoIterator<Item = (W, PauliOp)>>(iter: T) -> Self {
        let ops = iter
            .into_iter()
            .map(|(w, op)| (w.into(), op))
            .filter(|(_, op)| *op != PauliOp::I)
            .collect();
        PauliWord { ops }
    }
}

impl From<Vec<(Wire, PauliOp)>> for PauliWord {
    fn from(factors: Vec<(Wire, PauliOp)>) -> Self {
        factors.into_iter().collect()
    }
}

impl From<PauliWord> for Vec<(Wire, PauliOp)> {
    fn from(word: PauliWord) -> Self {
        word.ops.into_iter().collect()
    }
}

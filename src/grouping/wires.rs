// src/grouping/wires.rs
//! Wire labels and wire maps
//!
//! Wires are either plain qubit indices or arbitrary string labels. A wire map
//! assigns every wire a dense index in `0..n`, which fixes the processing
//! order used by the Pauli algebra and the qubit order of string and binary
//! representations.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::PauliError;

/// An addressable qubit label
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Wire {
    /// Integer qubit index
    Index(usize),
    /// Named qubit
    Label(String),
}

impl fmt::Display for Wire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wire::Index(i) => write!(f, "{}", i),
            Wire::Label(s) => write!(f, "'{}'", s),
        }
    }
}

impl From<usize> for Wire {
    fn from(index: usize) -> Self {
        Wire::Index(index)
    }
}

impl From<&str> for Wire {
    fn from(label: &str) -> Self {
        Wire::Label(label.to_string())
    }
}

impl From<String> for Wire {
    fn from(label: String) -> Self {
        Wire::Label(label)
    }
}

impl From<&Wire> for Wire {
    fn from(wire: &Wire) -> Self {
        wire.clone()
    }
}

/// Injective assignment of wires to the dense indices `0..n`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WireMap {
    indices: HashMap<Wire, usize>,
    // Inverse lookup, ordered by index
    wires: Vec<Wire>,
}

impl WireMap {
    /// Build a wire map from `(wire, index)` pairs.
    ///
    /// The indices must be exactly `0..n` with no repeats.
    pub fn new<W, I>(pairs: I) -> Result<Self, PauliError>
    where
        W: Into<Wire>,
        I: IntoIterator<Item = (W, usize)>,
    {
        let mut by_index: BTreeMap<usize, Wire> = BTreeMap::new();
        let mut indices = HashMap::new();

        for (wire, index) in pairs {
            let wire = wire.into();
            if indices.insert(wire.clone(), index).is_some() {
                return Err(PauliError::InvalidWireMap(format!(
                    "wire {} is listed more than once",
                    wire
                )));
            }
            if let Some(previous) = by_index.insert(index, wire.clone()) {
                return Err(PauliError::InvalidWireMap(format!(
                    "wires {} and {} share index {}",
                    previous, wire, index
                )));
            }
        }

        let n = by_index.len();
        if let Some((&last, _)) = by_index.iter().next_back() {
            if last >= n {
                return Err(PauliError::InvalidWireMap(format!(
                    "index {} is outside 0..{}",
                    last, n
                )));
            }
        }

        Ok(WireMap {
            indices,
            wires: by_index.into_values().collect(),
        })
    }

    /// Assign wires their position in the given sequence
    pub fn from_wires<W, I>(wires: I) -> Result<Self, PauliError>
    where
        W: Into<Wire>,
        I: IntoIterator<Item = W>,
    {
        Self::new(wires.into_iter().enumerate().map(|(i, w)| (w.into(), i)))
    }

    /// The map `Index(i) -> i` for `i` in `0..n`
    pub fn range(n: usize) -> Self {
        WireMap {
            indices: (0..n).map(|i| (Wire::Index(i), i)).collect(),
            wires: (0..n).map(Wire::Index).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.wires.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wires.is_empty()
    }

    /// The index assigned to `wire`, if any
    pub fn index_of(&self, wire: &Wire) -> Option<usize> {
        self.indices.get(wire).copied()
    }

    /// Like [`WireMap::index_of`], but a missing wire is an error
    pub fn require(&self, wire: &Wire) -> Result<usize, PauliError> {
        self.index_of(wire).ok_or_else(|| PauliError::missing_wire(wire))
    }

    /// The wire assigned to `index`, if any
    pub fn wire_at(&self, index: usize) -> Option<&Wire> {
        self.wires.get(index)
    }

    /// Wires in index order
    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }
}

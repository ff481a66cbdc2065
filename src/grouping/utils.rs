// src/grouping/utils.rs
//! Conversions between Pauli words and their binary and string forms

use super::error::PauliError;
use super::pauli_word::{PauliOp, PauliWord};
use super::wires::WireMap;

/// Symplectic vector `(x_0..x_{n-1}, z_0..z_{n-1})` of a Pauli word
///
/// Qubit `k` is the wire with index `k` in `wire_map`. `n_qubits` defaults to
/// the size of the map.
pub fn pauli_to_binary(
    pauli_word: &PauliWord,
    n_qubits: Option<usize>,
    wire_map: &WireMap,
) -> Result<Vec<bool>, PauliError> {
    let n = n_qubits.unwrap_or(wire_map.len());
    let mut vector = vec![false; 2 * n];

    for (wire, op) in pauli_word.iter() {
        let index = wire_map.require(wire)?;
        if index >= n {
            return Err(PauliError::InvalidBinaryVector(format!(
                "wire {} has index {} but the vector only covers {} qubits",
                wire, index, n
            )));
        }
        let (x, z) = op.to_xz();
        vector[index] = x;
        vector[n + index] = z;
    }

    Ok(vector)
}

/// Inverse of [`pauli_to_binary`]
pub fn binary_to_pauli(vector: &[bool], wire_map: &WireMap) -> Result<PauliWord, PauliError> {
    if vector.len() % 2 != 0 {
        return Err(PauliError::InvalidBinaryVector(format!(
            "length must be even, got {}",
            vector.len()
        )));
    }
    let n = vector.len() / 2;
    if n > wire_map.len() {
        return Err(PauliError::InvalidBinaryVector(format!(
            "vector covers {} qubits but the wire map only has {} wires",
            n,
            wire_map.len()
        )));
    }

    Ok(wire_map
        .wires()
        .iter()
        .take(n)
        .enumerate()
        .map(|(k, wire)| (wire.clone(), PauliOp::from_xz(vector[k], vector[n + k])))
        .collect())
}

/// String form of a Pauli word, one symbol per wire of `wire_map`
///
/// `X(0) @ Z(2)` over the map `{0: 0, 1: 1, 2: 2}` is `"XIZ"`.
pub fn pauli_word_to_string(pauli_word: &PauliWord, wire_map: &WireMap) -> Result<String, PauliError> {
    let mut symbols = vec!['I'; wire_map.len()];
    for (wire, op) in pauli_word.iter() {
        symbols[wire_map.require(wire)?] = op.symbol();
    }
    Ok(symbols.into_iter().collect())
}

/// Parse a Pauli string such as `"XIZ"` over the wires of `wire_map`
pub fn string_to_pauli_word(pauli_string: &str, wire_map: &WireMap) -> Result<PauliWord, PauliError> {
    let invalid = |reason: String| PauliError::InvalidPauliString {
        string: pauli_string.to_string(),
        reason,
    };

    let symbols: Vec<char> = pauli_string.chars().collect();
    if symbols.len() != wire_map.len() {
        return Err(invalid(format!(
            "expected {} symbols for the wire map, got {}",
            wire_map.len(),
            symbols.len()
        )));
    }

    symbols
        .iter()
        .zip(wire_map.wires())
        .map(|(&symbol, wire)| {
            PauliOp::from_symbol(symbol)
                .map(|op| (wire.clone(), op))
                .ok_or_else(|| invalid(format!("unknown symbol '{}'", symbol)))
        })
        .collect()
}

/// Whether two Pauli words commute
///
/// Words anticommute exactly when an odd number of shared wires carry two
/// different non-identity operators.
pub fn is_commuting(pauli_word_1: &PauliWord, pauli_word_2: &PauliWord) -> bool {
    let anticommuting = pauli_word_1
        .iter()
        .filter(|&(wire, op)| {
            let other = pauli_word_2.get(wire);
            other != PauliOp::I && other != op
        })
        .count();
    anticommuting % 2 == 0
}

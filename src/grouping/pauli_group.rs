// src/grouping/pauli_group.rs
//! Pauli group construction and multiplication
//!
//! Products of Pauli words are computed factor by factor: wires are tensor
//! factors, so each wire is combined independently with the single-qubit
//! table and the phases are multiplied together. The wire map only fixes the
//! order in which wires are visited.

use num_complex::Complex64;
use rayon::prelude::*;

use super::error::PauliError;
use super::pauli_word::{PauliOp, PauliWord, Phase};
use super::wires::{Wire, WireMap};

/// Multiply two Pauli words, keeping the phase as an exact power of `i`
pub fn pauli_mult_exact(
    pauli_word_1: &PauliWord,
    pauli_word_2: &PauliWord,
    wire_map: &WireMap,
) -> Result<(PauliWord, Phase), PauliError> {
    // Every wire touched by either operand, in wire-map order
    let mut wires: Vec<(usize, &Wire)> = Vec::with_capacity(pauli_word_1.weight() + pauli_word_2.weight());
    for wire in pauli_word_1.wires().chain(pauli_word_2.wires()) {
        let index = wire_map.require(wire)?;
        wires.push((index, wire));
    }
    wires.sort_by_key(|&(index, _)| index);
    wires.dedup_by_key(|&mut (index, _)| index);

    let mut phase = Phase::ONE;
    let mut factors = Vec::with_capacity(wires.len());
    for (_, wire) in wires {
        let (op, factor_phase) = pauli_word_1.get(wire).mul_with_phase(pauli_word_2.get(wire));
        phase *= factor_phase;
        if op != PauliOp::I {
            factors.push((wire.clone(), op));
        }
    }

    Ok((factors.into_iter().collect(), phase))
}

/// Multiply two Pauli words, discarding the phase
pub fn pauli_mult(
    pauli_word_1: &PauliWord,
    pauli_word_2: &PauliWord,
    wire_map: &WireMap,
) -> Result<PauliWord, PauliError> {
    pauli_mult_exact(pauli_word_1, pauli_word_2, wire_map).map(|(word, _)| word)
}

/// Multiply two Pauli words and return the product with its phase
///
/// The phase is always one of `1`, `-1`, `i` or `-i`.
pub fn pauli_mult_with_phase(
    pauli_word_1: &PauliWord,
    pauli_word_2: &PauliWord,
    wire_map: &WireMap,
) -> Result<(PauliWord, Complex64), PauliError> {
    pauli_mult_exact(pauli_word_1, pauli_word_2, wire_map)
        .map(|(word, phase)| (word, phase.to_complex()))
}

/// Largest qubit count the lazy generator can enumerate
pub const MAX_GENERATOR_QUBITS: usize = 63;

/// Largest qubit count [`pauli_group`] collects into memory (`4^12` words)
pub const MAX_COLLECTED_QUBITS: usize = 12;

/// Lazy enumeration of the Pauli group on `n` qubits, up to phase
///
/// Element `k` is the word whose symplectic vector `(x_0..x_{n-1}, z_0..z_{n-1})`
/// is the `2n`-bit binary expansion of `k`, most significant bit first.
#[derive(Debug, Clone)]
pub struct PauliGroupGenerator {
    // Wire of each qubit index
    wires: Vec<Wire>,
    next: u128,
    end: u128,
}

impl PauliGroupGenerator {
    fn element(&self, index: u128) -> PauliWord {
        let n = self.wires.len();
        self.wires
            .iter()
            .enumerate()
            .map(|(q, wire)| {
                let x = (index >> (2 * n - 1 - q)) & 1 == 1;
                let z = (index >> (n - 1 - q)) & 1 == 1;
                (wire.clone(), PauliOp::from_xz(x, z))
            })
            .collect()
    }
}

impl Iterator for PauliGroupGenerator {
    type Item = PauliWord;

    fn next(&mut self) -> Option<PauliWord> {
        if self.next >= self.end {
            return None;
        }
        let word = self.element(self.next);
        self.next += 1;
        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

/// Iterate over all `4^n` Pauli words on `n_qubits` qubits
///
/// Without a wire map the words act on wires `0..n_qubits`. A supplied map
/// must have exactly `n_qubits` entries.
pub fn pauli_group_generator(
    n_qubits: usize,
    wire_map: Option<&WireMap>,
) -> Result<PauliGroupGenerator, PauliError> {
    if n_qubits == 0 {
        return Err(PauliError::InvalidQubitCount(n_qubits));
    }
    // 4^n must fit in the counter
    if n_qubits > MAX_GENERATOR_QUBITS {
        return Err(PauliError::TooManyQubits {
            n_qubits,
            max: MAX_GENERATOR_QUBITS,
        });
    }
    let wires = match wire_map {
        Some(map) if map.len() != n_qubits => {
            return Err(PauliError::InvalidWireMap(format!(
                "expected {} wires, the map has {}",
                n_qubits,
                map.len()
            )))
        }
        Some(map) => map.wires().to_vec(),
        None => (0..n_qubits).map(Wire::Index).collect(),
    };

    Ok(PauliGroupGenerator {
        wires,
        next: 0,
        end: 1u128 << (2 * n_qubits),
    })
}

/// Collect the full Pauli group on `n_qubits` qubits, in generator order
///
/// At most [`MAX_COLLECTED_QUBITS`] qubits; use [`pauli_group_generator`]
/// to walk larger groups lazily.
pub fn pauli_group(n_qubits: usize, wire_map: Option<&WireMap>) -> Result<Vec<PauliWord>, PauliError> {
    if n_qubits > MAX_COLLECTED_QUBITS {
        return Err(PauliError::TooManyQubits {
            n_qubits,
            max: MAX_COLLECTED_QUBITS,
        });
    }
    let generator = pauli_group_generator(n_qubits, wire_map)?;
    log::debug!("building Pauli group on {} qubits", n_qubits);
    Ok((0..generator.end)
        .into_par_iter()
        .map(|index| generator.element(index))
        .collect())
}

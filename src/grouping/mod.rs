// src/grouping/mod.rs
//! Pauli-word algebra
//!
//! Pauli words over labelled wires, their products with phase tracking,
//! enumeration of the Pauli group and conversions to binary and string form.

pub mod error;
pub mod wires;
pub mod pauli_word;
pub mod pauli_group;
pub mod utils;

pub use error::PauliError;
pub use wires::{Wire, WireMap};
pub use pauli_word::{PauliOp, PauliWord, Phase};
pub use pauli_group::{
    pauli_group, pauli_group_generator, pauli_mult, pauli_mult_exact, pauli_mult_with_phase, PauliGroupGenerator,
    MAX_COLLECTED_QUBITS, MAX_GENERATOR_QUBITS,
};
pub use utils::{binary_to_pauli, is_commuting, pauli_to_binary, pauli_word_to_string, string_to_pauli_word};

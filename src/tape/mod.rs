// src/tape/mod.rs
//! Recorded quantum circuits
//!
//! Operations, measurements and the tapes that hold them. Tapes are never
//! executed here; executing them is left to the caller.

pub mod error;
pub mod operation;
pub mod measurement;
#[allow(clippy::module_inception)]
pub mod tape;

pub use error::TapeError;
pub use operation::{GradMethod, Operation, OperationKind, Parameter, StandardOperation};
pub use measurement::MeasurementProcess;
pub use tape::{QuantumTape, TapeBuilder};

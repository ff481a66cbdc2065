// src/tape/operation.rs
//! Circuit operations
//!
//! Operations are queried through the [`Operation`] trait: each one reports
//! how its parameters can be differentiated and, optionally, how it
//! decomposes into other operations. Gradient transforms rely only on these
//! two capabilities.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::grouping::Wire;

/// How the derivative of an operation's parameters can be computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradMethod {
    /// Exact, via the parameter-shift rule
    Analytic,
    /// Only numerically, via finite differences
    Finite,
}

/// A gate parameter and whether it is differentiated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub value: f64,
    pub requires_grad: bool,
}

impl Parameter {
    pub fn trainable(value: f64) -> Self {
        Parameter { value, requires_grad: true }
    }

    pub fn fixed(value: f64) -> Self {
        Parameter { value, requires_grad: false }
    }

    /// Same trainability, new value
    pub fn with_value(self, value: f64) -> Self {
        Parameter { value, ..self }
    }
}

impl From<f64> for Parameter {
    fn from(value: f64) -> Self {
        Parameter::trainable(value)
    }
}

/// Trait for operations recorded on a tape
pub trait Operation: Debug + Send + Sync {
    /// Display name, e.g. `"RX"`
    fn name(&self) -> String;

    fn wires(&self) -> &[Wire];

    fn parameters(&self) -> &[Parameter];

    /// `None` when the operation cannot be differentiated at all
    fn grad_method(&self) -> Option<GradMethod>;

    /// Decomposition into other operations, if one is known
    fn decomposition(&self) -> Option<Vec<Box<dyn Operation>>> {
        None
    }

    /// A copy of this operation carrying new parameters.
    ///
    /// Callers pass exactly [`Operation::num_params`] parameters.
    fn with_parameters(&self, parameters: Vec<Parameter>) -> Box<dyn Operation>;

    fn clone_box(&self) -> Box<dyn Operation>;

    fn num_params(&self) -> usize {
        self.parameters().len()
    }

    /// Whether any parameter is differentiated
    fn is_trainable(&self) -> bool {
        self.parameters().iter().any(|p| p.requires_grad)
    }
}

impl Clone for Box<dyn Operation> {
    fn clone(&self) -> Box<dyn Operation> {
        self.clone_box()
    }
}

/// The built-in gate set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    PauliX,
    PauliY,
    PauliZ,
    Hadamard,
    CNOT,
    CZ,
    RX,
    RY,
    RZ,
    PhaseShift,
    /// `RZ(ω) RY(θ) RZ(φ)`
    Rot,
}

impl OperationKind {
    pub fn num_params(self) -> usize {
        match self {
            OperationKind::PauliX
            | OperationKind::PauliY
            | OperationKind::PauliZ
            | OperationKind::Hadamard
            | OperationKind::CNOT
            | OperationKind::CZ => 0,
            OperationKind::RX | OperationKind::RY | OperationKind::RZ | OperationKind::PhaseShift => 1,
            OperationKind::Rot => 3,
        }
    }

    pub fn num_wires(self) -> usize {
        match self {
            OperationKind::CNOT | OperationKind::CZ => 2,
            _ => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OperationKind::PauliX => "PauliX",
            OperationKind::PauliY => "PauliY",
            OperationKind::PauliZ => "PauliZ",
            OperationKind::Hadamard => "Hadamard",
            OperationKind::CNOT => "CNOT",
            OperationKind::CZ => "CZ",
            OperationKind::RX => "RX",
            OperationKind::RY => "RY",
            OperationKind::RZ => "RZ",
            OperationKind::PhaseShift => "PhaseShift",
            OperationKind::Rot => "Rot",
        }
    }
}

/// A gate from the built-in set
#[derive(Debug, Clone, PartialEq)]
pub struct StandardOperation {
    kind: OperationKind,
    parameters: Vec<Parameter>,
    wires: Vec<Wire>,
}

impl StandardOperation {
    fn build(kind: OperationKind, parameters: Vec<Parameter>, wires: Vec<Wire>) -> Self {
        debug_assert_eq!(parameters.len(), kind.num_params());
        debug_assert_eq!(wires.len(), kind.num_wires());
        StandardOperation { kind, parameters, wires }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn pauli_x(wire: impl Into<Wire>) -> Self {
        Self::build(OperationKind::PauliX, vec![], vec![wire.into()])
    }

    pub fn pauli_y(wire: impl Into<Wire>) -> Self {
        Self::build(OperationKind::PauliY, vec![], vec![wire.into()])
    }

    pub fn pauli_z(wire: impl Into<Wire>) -> Self {
        Self::build(OperationKind::PauliZ, vec![], vec![wire.into()])
    }

    pub fn hadamard(wire: impl Into<Wire>) -> Self {
        Self::build(OperationKind::Hadamard, vec![], vec![wire.into()])
    }

    pub fn cnot(control: impl Into<Wire>, target: impl Into<Wire>) -> Self {
        Self::build(OperationKind::CNOT, vec![], vec![control.into(), target.into()])
    }

    pub fn cz(control: impl Into<Wire>, target: impl Into<Wire>) -> Self {
        Self::build(OperationKind::CZ, vec![], vec![control.into(), target.into()])
    }

    pub fn rx(theta: impl Into<Parameter>, wire: impl Into<Wire>) -> Self {
        Self::build(OperationKind::RX, vec![theta.into()], vec![wire.into()])
    }

    pub fn ry(theta: impl Into<Parameter>, wire: impl Into<Wire>) -> Self {
        Self::build(OperationKind::RY, vec![theta.into()], vec![wire.into()])
    }

    pub fn rz(theta: impl Into<Parameter>, wire: impl Into<Wire>) -> Self {
        Self::build(OperationKind::RZ, vec![theta.into()], vec![wire.into()])
    }

    pub fn phase_shift(phi: impl Into<Parameter>, wire: impl Into<Wire>) -> Self {
        Self::build(OperationKind::PhaseShift, vec![phi.into()], vec![wire.into()])
    }

    pub fn rot(
        phi: impl Into<Parameter>,
        theta: impl Into<Parameter>,
        omega: impl Into<Parameter>,
        wire: impl Into<Wire>,
    ) -> Self {
        Self::build(
            OperationKind::Rot,
            vec![phi.into(), theta.into(), omega.into()],
            vec![wire.into()],
        )
    }
}

impl Operation for StandardOperation {
    fn name(&self) -> String {
        self.kind.name().to_string()
    }

    fn wires(&self) -> &[Wire] {
        &self.wires
    }

    fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    fn grad_method(&self) -> Option<GradMethod> {
        if self.kind.num_params() == 0 {
            None
        } else {
            Some(GradMethod::Analytic)
        }
    }

    fn decomposition(&self) -> Option<Vec<Box<dyn Operation>>> {
        let wire = self.wires[0].clone();
        match self.kind {
            // Equal to RZ up to a global phase
            OperationKind::PhaseShift => Some(vec![Box::new(StandardOperation::rz(self.parameters[0], wire))]),
            OperationKind::Rot => Some(vec![
                Box::new(StandardOperation::rz(self.parameters[0], wire.clone())),
                Box::new(StandardOperation::ry(self.parameters[1], wire.clone())),
                Box::new(StandardOperation::rz(self.parameters[2], wire)),
            ]),
            OperationKind::CZ => {
                let target = self.wires[1].clone();
                Some(vec![
                    Box::new(StandardOperation::hadamard(target.clone())),
                    Box::new(StandardOperation::cnot(wire, target.clone())),
                    Box::new(StandardOperation::hadamard(target)),
                ])
            }
            _ => None,
        }
    }

    fn with_parameters(&self, parameters: Vec<Parameter>) -> Box<dyn Operation> {
        Box::new(StandardOperation {
            kind: self.kind,
            parameters,
            wires: self.wires.clone(),
        })
    }

    fn clone_box(&self) -> Box<dyn Operation> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_is_analytic() {
        let op = StandardOperation::rx(0.2, 0);
        assert_eq!(op.grad_method(), Some(GradMethod::Analytic));
        assert!(op.is_trainable());
        assert!(op.decomposition().is_none());
    }

    #[test]
    fn test_fixed_gates_are_not_differentiable() {
        let op = StandardOperation::cnot(0, 1);
        assert_eq!(op.grad_method(), None);
        assert!(!op.is_trainable());
        assert_eq!(op.wires(), &[Wire::Index(0), Wire::Index(1)]);
    }

    #[test]
    fn test_phase_shift_decomposes_to_rz() {
        let op = StandardOperation::phase_shift(Parameter::fixed(0.3), "q");
        let decomposition = op.decomposition().unwrap();
        assert_eq!(decomposition.len(), 1);
        assert_eq!(decomposition[0].name(), "RZ");
        assert_eq!(decomposition[0].parameters(), &[Parameter::fixed(0.3)]);
        assert_eq!(decomposition[0].wires(), &[Wire::from("q")]);
    }

    #[test]
    fn test_rot_decomposition_order() {
        let op = StandardOperation::rot(0.1, 0.2, 0.3, 0);
        let names: Vec<String> = op.decomposition().unwrap().iter().map(|o| o.name()).collect();
        assert_eq!(names, vec!["RZ", "RY", "RZ"]);
    }
}

// src/tape/tape.rs
//! Quantum tapes
//!
//! A tape records a sequence of operations followed by measurements. Its
//! parameters are numbered in recording order across all operations; the
//! trainable parameters are those whose `requires_grad` flag is set.

use crate::grouping::{PauliWord, Wire};

use super::error::TapeError;
use super::measurement::MeasurementProcess;
use super::operation::{Operation, Parameter, StandardOperation};

/// A recorded circuit
#[derive(Debug, Clone, Default)]
pub struct QuantumTape {
    operations: Vec<Box<dyn Operation>>,
    measurements: Vec<MeasurementProcess>,
}

impl QuantumTape {
    pub fn new() -> Self {
        QuantumTape::default()
    }

    pub fn from_parts(operations: Vec<Box<dyn Operation>>, measurements: Vec<MeasurementProcess>) -> Self {
        QuantumTape { operations, measurements }
    }

    pub fn add_operation<O: Operation + 'static>(&mut self, op: O) {
        self.operations.push(Box::new(op));
    }

    pub fn add_boxed_operation(&mut self, op: Box<dyn Operation>) {
        self.operations.push(op);
    }

    pub fn add_measurement(&mut self, measurement: MeasurementProcess) {
        self.measurements.push(measurement);
    }

    pub fn operations(&self) -> &[Box<dyn Operation>] {
        &self.operations
    }

    pub fn measurements(&self) -> &[MeasurementProcess] {
        &self.measurements
    }

    /// All wires touched by an operation, in first-use order
    pub fn wires(&self) -> Vec<Wire> {
        let mut wires: Vec<Wire> = Vec::new();
        for wire in self.operations.iter().flat_map(|op| op.wires()) {
            if !wires.contains(wire) {
                wires.push(wire.clone());
            }
        }
        wires
    }

    /// `(operation index, index within the operation)` for every parameter
    pub fn par_info(&self) -> Vec<(usize, usize)> {
        self.operations
            .iter()
            .enumerate()
            .flat_map(|(op_index, op)| (0..op.num_params()).map(move |p| (op_index, p)))
            .collect()
    }

    pub fn num_params(&self) -> usize {
        self.operations.iter().map(|op| op.num_params()).sum()
    }

    fn all_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.operations.iter().flat_map(|op| op.parameters())
    }

    /// Indices of the trainable parameters, in increasing order
    pub fn trainable_params(&self) -> Vec<usize> {
        self.all_parameters()
            .enumerate()
            .filter(|(_, p)| p.requires_grad)
            .map(|(i, _)| i)
            .collect()
    }

    /// Mark exactly the given parameter indices as trainable
    pub fn set_trainable_params(&mut self, indices: &[usize]) -> Result<(), TapeError> {
        let num_params = self.num_params();
        if let Some(&index) = indices.iter().find(|&&i| i >= num_params) {
            return Err(TapeError::TrainableIndexOutOfRange { index, num_params });
        }

        let mut offset = 0;
        for op in self.operations.iter_mut() {
            let count = op.num_params();
            if count > 0 {
                let parameters = op
                    .parameters()
                    .iter()
                    .enumerate()
                    .map(|(p, param)| Parameter {
                        requires_grad: indices.contains(&(offset + p)),
                        ..*param
                    })
                    .collect();
                *op = op.with_parameters(parameters);
            }
            offset += count;
        }
        Ok(())
    }

    /// Parameter values, optionally restricted to the trainable ones
    pub fn get_parameters(&self, trainable_only: bool) -> Vec<f64> {
        self.all_parameters()
            .filter(|p| !trainable_only || p.requires_grad)
            .map(|p| p.value)
            .collect()
    }

    /// Operations with at least one trainable parameter
    pub fn trainable_operations(&self) -> impl Iterator<Item = &Box<dyn Operation>> {
        self.operations.iter().filter(|op| op.is_trainable())
    }

    /// A copy of the tape with new values for the trainable parameters
    pub fn bind_parameters(&self, values: &[f64]) -> Result<QuantumTape, TapeError> {
        let trainable = self.trainable_params();
        if values.len() != trainable.len() {
            return Err(TapeError::ParameterCount {
                expected: trainable.len(),
                got: values.len(),
            });
        }

        let mut remaining = values.iter();
        let operations = self
            .operations
            .iter()
            .map(|op| {
                if !op.is_trainable() {
                    return op.clone();
                }
                let parameters = op
                    .parameters()
                    .iter()
                    .map(|p| {
                        if p.requires_grad {
                            remaining.next().map_or(*p, |&value| p.with_value(value))
                        } else {
                            *p
                        }
                    })
                    .collect();
                op.with_parameters(parameters)
            })
            .collect();

        Ok(QuantumTape {
            operations,
            measurements: self.measurements.clone(),
        })
    }

    /// A copy of the tape with one trainable parameter shifted by `shift`
    ///
    /// `trainable_index` counts trainable parameters only.
    pub fn shift_parameter(&self, trainable_index: usize, shift: f64) -> Result<QuantumTape, TapeError> {
        let mut values = self.get_parameters(true);
        let num_params = values.len();
        let value = values
            .get_mut(trainable_index)
            .ok_or(TapeError::TrainableIndexOutOfRange { index: trainable_index, num_params })?;
        *value += shift;
        self.bind_parameters(&values)
    }

    /// Same operations, different measurements
    pub fn with_measurements(&self, measurements: Vec<MeasurementProcess>) -> QuantumTape {
        QuantumTape {
            operations: self.operations.clone(),
            measurements,
        }
    }

    /// Recursively decompose operations
    ///
    /// Operations for which `stop_at` holds are kept, others are replaced by
    /// their decomposition, up to `depth` levels. Operations without a
    /// decomposition are kept as they are.
    pub fn expand(&self, depth: usize, stop_at: &dyn Fn(&dyn Operation) -> bool) -> QuantumTape {
        let mut operations = Vec::with_capacity(self.operations.len());
        expand_into(&self.operations, depth, stop_at, &mut operations);
        QuantumTape {
            operations,
            measurements: self.measurements.clone(),
        }
    }
}

fn expand_into(
    operations: &[Box<dyn Operation>],
    depth: usize,
    stop_at: &dyn Fn(&dyn Operation) -> bool,
    out: &mut Vec<Box<dyn Operation>>,
) {
    for op in operations {
        if depth == 0 || stop_at(op.as_ref()) {
            out.push(op.clone());
            continue;
        }
        match op.decomposition() {
            Some(decomposition) => expand_into(&decomposition, depth - 1, stop_at, out),
            None => {
                log::warn!("{} has no decomposition and is kept unexpanded", op.name());
                out.push(op.clone());
            }
        }
    }
}

/// Builder for quantum tapes
#[derive(Debug, Default)]
pub struct TapeBuilder {
    tape: QuantumTape,
}

impl TapeBuilder {
    pub fn new() -> Self {
        TapeBuilder::default()
    }

    pub fn build(self) -> QuantumTape {
        self.tape
    }

    pub fn operation<O: Operation + 'static>(mut self, op: O) -> Self {
        self.tape.add_operation(op);
        self
    }

    pub fn rx(self, theta: impl Into<Parameter>, wire: impl Into<Wire>) -> Self {
        self.operation(StandardOperation::rx(theta, wire))
    }

    pub fn ry(self, theta: impl Into<Parameter>, wire: impl Into<Wire>) -> Self {
        self.operation(StandardOperation::ry(theta, wire))
    }

    pub fn rz(self, theta: impl Into<Parameter>, wire: impl Into<Wire>) -> Self {
        self.operation(StandardOperation::rz(theta, wire))
    }

    pub fn hadamard(self, wire: impl Into<Wire>) -> Self {
        self.operation(StandardOperation::hadamard(wire))
    }

    pub fn cnot(self, control: impl Into<Wire>, target: impl Into<Wire>) -> Self {
        self.operation(StandardOperation::cnot(control, target))
    }

    pub fn expval(mut self, observable: PauliWord) -> Self {
        self.tape.add_measurement(MeasurementProcess::Expval(observable));
        self
    }

    pub fn var(mut self, observable: PauliWord) -> Self {
        self.tape.add_measurement(MeasurementProcess::Var(observable));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tape() -> QuantumTape {
        TapeBuilder::new()
            .rx(0.2, 0)
            .ry(Parameter::fixed(0.1), 1)
            .cnot(0, 1)
            .operation(StandardOperation::rot(0.3, 0.4, 0.5, 1))
            .expval(PauliWord::z(0))
            .build()
    }

    #[test]
    fn test_parameter_bookkeeping() {
        let tape = sample_tape();
        assert_eq!(tape.num_params(), 5);
        assert_eq!(tape.trainable_params(), vec![0, 2, 3, 4]);
        assert_eq!(tape.get_parameters(true), vec![0.2, 0.3, 0.4, 0.5]);
        assert_eq!(tape.par_info()[2], (3, 0));
        assert_eq!(tape.wires(), vec![Wire::Index(0), Wire::Index(1)]);
    }

    #[test]
    fn test_set_trainable_params() {
        let mut tape = sample_tape();
        tape.set_trainable_params(&[1]).unwrap();
        assert_eq!(tape.trainable_params(), vec![1]);
        assert_eq!(tape.trainable_operations().count(), 1);

        let err = tape.set_trainable_params(&[7]).unwrap_err();
        assert_eq!(err, TapeError::TrainableIndexOutOfRange { index: 7, num_params: 5 });
    }

    #[test]
    fn test_shift_parameter_touches_one_value() {
        let tape = sample_tape();
        let shifted = tape.shift_parameter(3, 1.0).unwrap();
        assert_eq!(shifted.get_parameters(false), vec![0.2, 0.1, 0.3, 0.4, 1.5]);
        assert_eq!(tape.get_parameters(false), vec![0.2, 0.1, 0.3, 0.4, 0.5]);
    }

    #[test]
    fn test_bind_parameters_checks_length() {
        let tape = sample_tape();
        assert_eq!(
            tape.bind_parameters(&[1.0]).unwrap_err(),
            TapeError::ParameterCount { expected: 4, got: 1 }
        );
    }

    #[test]
    fn test_expand_respects_depth_and_stop() {
        let tape = sample_tape();
        let names = |t: &QuantumTape| t.operations().iter().map(|op| op.name()).collect::<Vec<_>>();

        let unchanged = tape.expand(0, &|_| false);
        assert_eq!(names(&unchanged), vec!["RX", "RY", "CNOT", "Rot"]);

        let expanded = tape.expand(1, &|op| op.name() != "Rot");
        assert_eq!(names(&expanded), vec!["RX", "RY", "CNOT", "RZ", "RY", "RZ"]);
        assert_eq!(expanded.trainable_params(), vec![0, 2, 3, 4]);
    }
}

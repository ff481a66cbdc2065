// gradient_transform_tests.rs
use std::borrow::Cow;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use qalgebra::gradients::*;
use qalgebra::grouping::{PauliWord, Wire};
use qalgebra::tape::*;

#[cfg(test)]
mod gradient_transform_tests {
    use super::*;

    /// Phase shift that only knows how to decompose itself
    #[derive(Debug, Clone)]
    struct NonDiffPhaseShift {
        parameters: Vec<Parameter>,
        wires: Vec<Wire>,
        grad_method: Option<GradMethod>,
        decomposes_to_rx: bool,
    }

    impl NonDiffPhaseShift {
        fn new(phi: impl Into<Parameter>, wire: impl Into<Wire>) -> Self {
            NonDiffPhaseShift {
                parameters: vec![phi.into()],
                wires: vec![wire.into()],
                grad_method: None,
                decomposes_to_rx: false,
            }
        }

        /// Numerically differentiable rotation about X
        fn finite_rx(theta: impl Into<Parameter>, wire: impl Into<Wire>) -> Self {
            NonDiffPhaseShift {
                grad_method: Some(GradMethod::Finite),
                decomposes_to_rx: true,
                ..NonDiffPhaseShift::new(theta, wire)
            }
        }
    }

    impl Operation for NonDiffPhaseShift {
        fn name(&self) -> String {
            "NonDiffPhaseShift".to_string()
        }

        fn wires(&self) -> &[Wire] {
            &self.wires
        }

        fn parameters(&self) -> &[Parameter] {
            &self.parameters
        }

        fn grad_method(&self) -> Option<GradMethod> {
            self.grad_method
        }

        fn decomposition(&self) -> Option<Vec<Box<dyn Operation>>> {
            let (param, wire) = (self.parameters[0], self.wires[0].clone());
            if self.decomposes_to_rx {
                Some(vec![Box::new(StandardOperation::rx(param, wire))])
            } else {
                Some(vec![Box::new(StandardOperation::rz(param, wire))])
            }
        }

        fn with_parameters(&self, parameters: Vec<Parameter>) -> Box<dyn Operation> {
            Box::new(NonDiffPhaseShift { parameters, ..self.clone() })
        }

        fn clone_box(&self) -> Box<dyn Operation> {
            Box::new(self.clone())
        }
    }

    fn names(tape: &QuantumTape) -> Vec<String> {
        tape.operations().iter().map(|op| op.name()).collect()
    }

    /// RX(x) on wire 0, RY(y) on wire 1, CNOT, then ⟨Z0⟩ and Var(X1)
    fn two_qubit_tape(first: impl Operation + 'static, y: f64) -> QuantumTape {
        TapeBuilder::new()
            .operation(first)
            .ry(y, 1)
            .cnot(0, 1)
            .expval(PauliWord::z(0))
            .var(PauliWord::x(1))
            .build()
    }

    /// Closed-form results of the tapes above: ⟨Z0⟩ = cos x, ⟨X1⟩ = sin y
    fn execute(tape: &QuantumTape) -> Vec<f64> {
        let params = tape.get_parameters(false);
        tape.measurements()
            .iter()
            .map(|m| match m {
                MeasurementProcess::Expval(obs) if *obs == PauliWord::z(0) => params[0].cos(),
                MeasurementProcess::Expval(obs) if *obs == PauliWord::x(1) => params[1].sin(),
                other => panic!("unexpected measurement {}", other),
            })
            .collect()
    }

    fn assert_jacobian(jacobian: &ndarray::Array2<f64>, x: f64, y: f64) {
        let expected = [[-x.sin(), 0.0], [0.0, -2.0 * y.cos() * y.sin()]];
        assert_eq!(jacobian.dim(), (2, 2));
        for i in 0..2 {
            for j in 0..2 {
                assert!(
                    (jacobian[[i, j]] - expected[i][j]).abs() < 1e-10,
                    "entry ({}, {}): {} vs {}",
                    i,
                    j,
                    jacobian[[i, j]],
                    expected[i][j]
                );
            }
        }
    }

    #[test]
    fn test_no_expansion() {
        let tape = two_qubit_tape(StandardOperation::rx(0.1, 0), 0.2);
        match gradient_expand(&tape, DEFAULT_EXPANSION_DEPTH) {
            Cow::Borrowed(expanded) => assert!(std::ptr::eq(expanded, &tape)),
            Cow::Owned(_) => panic!("tape should not have been expanded"),
        }
    }

    #[test]
    fn test_trainable_nondiff_expansion() {
        let tape = two_qubit_tape(NonDiffPhaseShift::new(0.1, 0), 0.2);
        let expanded = gradient_expand(&tape, DEFAULT_EXPANSION_DEPTH);

        assert!(matches!(expanded, Cow::Owned(_)));
        assert_eq!(names(&expanded), vec!["RZ", "RY", "CNOT"]);
        assert_eq!(expanded.get_parameters(false), vec![0.1, 0.2]);
        assert_eq!(expanded.trainable_params(), vec![0, 1]);
        assert_eq!(expanded.measurements(), tape.measurements());
    }

    #[test]
    fn test_nontrainable_nondiff() {
        let tape = two_qubit_tape(NonDiffPhaseShift::new(Parameter::fixed(0.1), 0), 0.2);
        let expanded = gradient_expand(&tape, DEFAULT_EXPANSION_DEPTH);

        assert!(matches!(expanded, Cow::Borrowed(_)));
        assert_eq!(names(&expanded), vec!["NonDiffPhaseShift", "RY", "CNOT"]);
    }

    #[test]
    fn test_trainable_numeric() {
        let tape = two_qubit_tape(NonDiffPhaseShift::finite_rx(0.1, 0), 0.2);
        let expanded = gradient_expand(&tape, DEFAULT_EXPANSION_DEPTH);

        assert!(matches!(expanded, Cow::Borrowed(_)));
        assert_eq!(names(&expanded), vec!["NonDiffPhaseShift", "RY", "CNOT"]);
    }

    #[test]
    fn test_expansion_after_set_trainable_params() {
        let mut tape = two_qubit_tape(NonDiffPhaseShift::new(0.1, 0), 0.2);
        tape.set_trainable_params(&[1]).unwrap();
        assert!(matches!(gradient_expand(&tape, DEFAULT_EXPANSION_DEPTH), Cow::Borrowed(_)));

        tape.set_trainable_params(&[0]).unwrap();
        assert!(matches!(gradient_expand(&tape, DEFAULT_EXPANSION_DEPTH), Cow::Owned(_)));
    }

    #[test]
    fn test_zero_depth_keeps_operations() {
        let tape = two_qubit_tape(NonDiffPhaseShift::new(0.1, 0), 0.2);
        let expanded = gradient_expand(&tape, 0);
        assert_eq!(names(&expanded), vec!["NonDiffPhaseShift", "RY", "CNOT"]);
    }

    #[test]
    fn test_param_shift_jacobian() {
        let (x, y) = (0.543, -0.654);
        let tape = two_qubit_tape(StandardOperation::rx(x, 0), y);

        for shift in [FRAC_PI_2, FRAC_PI_4] {
            let transform = GradientTransform::param_shift(ParamShiftConfig { shift, ..Default::default() });
            let jacobian = transform.compute(&tape, execute).unwrap();
            assert_jacobian(&jacobian, x, y);
        }
    }

    #[test]
    fn test_param_shift_jacobian_parallel() {
        let (x, y) = (0.543, -0.654);
        let tape = two_qubit_tape(StandardOperation::rx(x, 0), y);

        let jacobian = GradientTransform::default().compute_parallel(&tape, execute).unwrap();
        assert_jacobian(&jacobian, x, y);
    }

    #[test]
    fn test_param_shift_expands_nondiff_operation() {
        let (x, y) = (0.3, 1.1);
        let tape = two_qubit_tape(NonDiffPhaseShift::finite_rx(x, 0), y);

        let (tapes, processor) = GradientTransform::default().tapes(&tape).unwrap();
        assert_eq!(tapes.len(), 5);
        assert_eq!(processor.num_tapes(), 5);
        for t in &tapes {
            assert_eq!(names(t), vec!["RX", "RY", "CNOT"]);
        }

        let jacobian = GradientTransform::default().compute(&tape, execute).unwrap();
        assert_jacobian(&jacobian, x, y);
    }

    #[test]
    fn test_undecomposable_numeric_operation_rejected() {
        #[derive(Debug, Clone)]
        struct Opaque(Vec<Parameter>, Vec<Wire>);

        impl Operation for Opaque {
            fn name(&self) -> String {
                "Opaque".to_string()
            }
            fn wires(&self) -> &[Wire] {
                &self.1
            }
            fn parameters(&self) -> &[Parameter] {
                &self.0
            }
            fn grad_method(&self) -> Option<GradMethod> {
                Some(GradMethod::Finite)
            }
            fn with_parameters(&self, parameters: Vec<Parameter>) -> Box<dyn Operation> {
                Box::new(Opaque(parameters, self.1.clone()))
            }
            fn clone_box(&self) -> Box<dyn Operation> {
                Box::new(self.clone())
            }
        }

        let tape = TapeBuilder::new()
            .operation(Opaque(vec![Parameter::trainable(0.1)], vec![Wire::Index(0)]))
            .expval(PauliWord::z(0))
            .build();

        let err = GradientTransform::default().tapes(&tape).unwrap_err();
        assert_eq!(
            err,
            GradientError::UnsupportedGradMethod {
                operation: "Opaque".to_string(),
                grad_method: Some(GradMethod::Finite),
            }
        );
    }

    #[test]
    fn test_half_turn_shift_rejected() {
        let tape = two_qubit_tape(StandardOperation::rx(0.543, 0), -0.654);
        let transform = GradientTransform::param_shift(ParamShiftConfig {
            shift: std::f64::consts::PI,
            ..Default::default()
        });
        assert!(matches!(transform.compute(&tape, execute), Err(GradientError::InvalidShift(_))));
    }

    #[test]
    fn test_config_from_json() {
        let config: ParamShiftConfig = serde_json::from_str(r#"{"shift": 0.5}"#).unwrap();
        assert_eq!(config.shift, 0.5);
        assert_eq!(config.expansion_depth, DEFAULT_EXPANSION_DEPTH);

        let transform = GradientTransform::param_shift(config.clone());
        assert_eq!(transform.config(), &config);
    }
}

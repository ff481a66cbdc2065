// molecule_tests.rs
use ndarray::{array, Array2};

use qalgebra::qchem::*;

#[cfg(test)]
mod molecule_tests {
    use super::*;

    fn h2_geometry() -> Array2<f64> {
        array![[0.0, 0.0, -0.694349], [0.0, 0.0, 0.694349]]
    }

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn test_build_molecule() {
        let mol = Molecule::new(&["H", "H"], h2_geometry());
        assert!(mol.is_ok());
    }

    #[test]
    fn test_molecular_prop() {
        let geometry = h2_geometry();
        let mol = Molecule::new(&["H", "H"], geometry.clone()).unwrap();

        assert_eq!(mol.symbols(), &["H".to_string(), "H".to_string()]);
        for (a, b) in mol.coordinates().iter().zip(geometry.iter()) {
            assert!(approx_eq(*a, *b, 1e-10));
        }
        assert_eq!(mol.charge(), 0);
        assert_eq!(mol.mult(), 1);
        assert_eq!(mol.basis_name(), "sto-3g");
    }

    #[test]
    fn test_molecular_error() {
        let options = MoleculeOptions {
            basis_name: "6-31g".to_string(),
            ..Default::default()
        };
        let err = Molecule::with_options(&["H", "H"], h2_geometry(), options).unwrap_err();

        assert_eq!(err, QchemError::UnsupportedBasis("6-31g".to_string()));
        assert!(err.to_string().contains("The only supported basis set is"));
    }

    #[test]
    fn test_generate_nuclear_charges() {
        let cases: Vec<(Vec<&str>, Vec<u32>)> = vec![
            (vec!["H", "H"], vec![1, 1]),
            (vec!["H", "F"], vec![1, 9]),
            (vec!["F", "C", "N"], vec![9, 6, 7]),
        ];

        for (symbols, charges) in cases {
            assert_eq!(generate_nuclear_charges(&symbols).unwrap(), charges);
        }
    }

    #[test]
    fn test_unknown_symbol() {
        let err = generate_nuclear_charges(&["H", "Q"]).unwrap_err();
        assert_eq!(err, QchemError::UnknownElement("Q".to_string()));
    }

    #[test]
    fn test_electrons_and_basis_set() {
        let geometry = array![[0.0, 0.0, 0.0], [0.0, 0.0, 1.733]];
        let mol = Molecule::new(&["H", "F"], geometry).unwrap();

        assert_eq!(mol.nuclear_charges(), &[1, 9]);
        assert_eq!(mol.n_electrons(), 10);
        assert_eq!(mol.n_basis(), &[1, 5]);
        assert_eq!(mol.n_orbitals(), 6);
        assert_eq!(mol.basis_data().len(), 6);

        // Basis functions sit on their atoms
        assert_eq!(mol.basis_set()[0].r, [0.0, 0.0, 0.0]);
        for f in &mol.basis_set()[1..] {
            assert_eq!(f.r, [0.0, 0.0, 1.733]);
        }
        assert_eq!(mol.basis_set()[3].l, (1, 0, 0));
    }

    #[test]
    fn test_empty_molecule_rejected() {
        let err = Molecule::new(&[] as &[&str], Array2::zeros((0, 3))).unwrap_err();
        assert_eq!(err, QchemError::NoAtoms);
    }

    #[test]
    fn test_excess_charge_rejected() {
        let options = MoleculeOptions { charge: 3, ..Default::default() };
        let err = Molecule::with_options(&["H", "H"], h2_geometry(), options).unwrap_err();
        assert_eq!(err, QchemError::InvalidCharge { charge: 3, nuclear_charge: 2 });
    }

    #[test]
    fn test_triplet_oxygen() {
        let options = MoleculeOptions { mult: 3, ..Default::default() };
        let geometry = array![[0.0, 0.0, 0.0], [0.0, 0.0, 2.28]];
        let mol = Molecule::with_options(&["O", "O"], geometry, options).unwrap();
        assert_eq!(mol.n_electrons(), 16);
        assert_eq!(mol.mult(), 3);
    }
}

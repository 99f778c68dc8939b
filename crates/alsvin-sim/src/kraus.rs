//! Kraus-operator realizations of noise channels.

use num_complex::Complex64;

use alsvin_ir::NoiseModel;

use crate::matrix::{self, Matrix2};

/// The Kraus operators realizing a single-qubit noise channel.
///
/// Every returned set is trace-preserving: `Σ_k K_k†K_k = I`. The
/// simulator applies all branches exactly — there is no stochastic
/// sampling of operators.
pub fn kraus_operators(model: &NoiseModel) -> Vec<Matrix2> {
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);

    match *model {
        NoiseModel::Depolarizing { p } => {
            let sqrt_id = Complex64::new((1.0 - p).sqrt(), 0.0);
            let sqrt_p3 = Complex64::new((p / 3.0).sqrt(), 0.0);
            vec![
                matrix::identity().map(|e| e * sqrt_id),
                matrix::x().map(|e| e * sqrt_p3),
                matrix::y().map(|e| e * sqrt_p3),
                matrix::z().map(|e| e * sqrt_p3),
            ]
        }

        NoiseModel::BitFlip { p } => {
            let sqrt_id = Complex64::new((1.0 - p).sqrt(), 0.0);
            let sqrt_p = Complex64::new(p.sqrt(), 0.0);
            vec![
                matrix::identity().map(|e| e * sqrt_id),
                matrix::x().map(|e| e * sqrt_p),
            ]
        }

        NoiseModel::PhaseFlip { p } => {
            let sqrt_id = Complex64::new((1.0 - p).sqrt(), 0.0);
            let sqrt_p = Complex64::new(p.sqrt(), 0.0);
            vec![
                matrix::identity().map(|e| e * sqrt_id),
                matrix::z().map(|e| e * sqrt_p),
            ]
        }

        NoiseModel::AmplitudeDamping { gamma } => {
            let keep = Complex64::new((1.0 - gamma).sqrt(), 0.0);
            let decay = Complex64::new(gamma.sqrt(), 0.0);
            vec![[one, zero, zero, keep], [zero, decay, zero, zero]]
        }

        NoiseModel::PhaseDamping { gamma } => {
            let keep = Complex64::new((1.0 - gamma).sqrt(), 0.0);
            let leak = Complex64::new(gamma.sqrt(), 0.0);
            vec![[one, zero, zero, keep], [zero, zero, zero, leak]]
        }
    }
}

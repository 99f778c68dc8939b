//! Gate matrices.
//!
//! Row-major fixed-size matrices for the supported one- and two-qubit
//! gates. Global phase is irrelevant under `ρ → UρU†`, so rotation
//! families use the plain rotation matrices.

use num_complex::Complex64;
use std::f64::consts::FRAC_PI_4;

use alsvin_ir::{EigenBase, FixedGate, Gate};

/// A 2x2 matrix in row-major order: `[[a, b], [c, d]]`.
pub type Matrix2 = [Complex64; 4];

/// A 4x4 matrix in row-major order.
pub type Matrix4 = [Complex64; 16];

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

/// Identity matrix.
pub fn identity() -> Matrix2 {
    [ONE, ZERO, ZERO, ONE]
}

/// Pauli-X matrix.
pub fn x() -> Matrix2 {
    [ZERO, ONE, ONE, ZERO]
}

/// Pauli-Y matrix.
pub fn y() -> Matrix2 {
    [ZERO, -I, I, ZERO]
}

/// Pauli-Z matrix.
pub fn z() -> Matrix2 {
    [ONE, ZERO, ZERO, -ONE]
}

/// Hadamard matrix.
pub fn h() -> Matrix2 {
    let s = Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0);
    [s, s, s, -s]
}

/// S gate (sqrt(Z)).
pub fn s() -> Matrix2 {
    [ONE, ZERO, ZERO, I]
}

/// S-dagger gate.
pub fn sdg() -> Matrix2 {
    [ONE, ZERO, ZERO, -I]
}

/// T gate (fourth root of Z).
pub fn t() -> Matrix2 {
    [ONE, ZERO, ZERO, Complex64::from_polar(1.0, FRAC_PI_4)]
}

/// T-dagger gate.
pub fn tdg() -> Matrix2 {
    [ONE, ZERO, ZERO, Complex64::from_polar(1.0, -FRAC_PI_4)]
}

/// RX rotation matrix.
pub fn rx(theta: f64) -> Matrix2 {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let s = Complex64::new(0.0, -(theta / 2.0).sin());
    [c, s, s, c]
}

/// RY rotation matrix.
pub fn ry(theta: f64) -> Matrix2 {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let s = Complex64::new((theta / 2.0).sin(), 0.0);
    [c, -s, s, c]
}

/// RZ rotation matrix.
pub fn rz(theta: f64) -> Matrix2 {
    [
        Complex64::from_polar(1.0, -theta / 2.0),
        ZERO,
        ZERO,
        Complex64::from_polar(1.0, theta / 2.0),
    ]
}

/// CX gate; first index bit is the control.
pub fn cx() -> Matrix4 {
    let mut m = [ZERO; 16];
    m[0] = ONE;
    m[5] = ONE;
    m[11] = ONE;
    m[14] = ONE;
    m
}

/// CY gate; first index bit is the control.
pub fn cy() -> Matrix4 {
    let mut m = [ZERO; 16];
    m[0] = ONE;
    m[5] = ONE;
    m[11] = -I;
    m[14] = I;
    m
}

/// CZ gate.
pub fn cz() -> Matrix4 {
    let mut m = [ZERO; 16];
    m[0] = ONE;
    m[5] = ONE;
    m[10] = ONE;
    m[15] = -ONE;
    m
}

/// SWAP gate.
pub fn swap() -> Matrix4 {
    let mut m = [ZERO; 16];
    m[0] = ONE;
    m[6] = ONE;
    m[9] = ONE;
    m[15] = ONE;
    m
}

/// XX rotation: `exp(-i·θ/2·X⊗X)`.
pub fn rxx(theta: f64) -> Matrix4 {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let s = Complex64::new(0.0, -(theta / 2.0).sin());
    let mut m = [ZERO; 16];
    m[0] = c;
    m[3] = s;
    m[5] = c;
    m[6] = s;
    m[9] = s;
    m[10] = c;
    m[12] = s;
    m[15] = c;
    m
}

/// YY rotation: `exp(-i·θ/2·Y⊗Y)`.
pub fn ryy(theta: f64) -> Matrix4 {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let s = Complex64::new(0.0, (theta / 2.0).sin());
    let neg_s = -s;
    let mut m = [ZERO; 16];
    m[0] = c;
    m[3] = s;
    m[5] = c;
    m[6] = neg_s;
    m[9] = neg_s;
    m[10] = c;
    m[12] = s;
    m[15] = c;
    m
}

/// ZZ rotation: `exp(-i·θ/2·Z⊗Z)`.
pub fn rzz(theta: f64) -> Matrix4 {
    let minus = Complex64::from_polar(1.0, -theta / 2.0);
    let plus = Complex64::from_polar(1.0, theta / 2.0);
    let mut m = [ZERO; 16];
    m[0] = minus;
    m[5] = plus;
    m[10] = plus;
    m[15] = minus;
    m
}

/// The 2x2 matrix realizing a single-qubit unitary gate, if any.
pub fn single_qubit_matrix(gate: &Gate) -> Option<Matrix2> {
    match gate {
        Gate::Fixed(f) => match f {
            FixedGate::I => Some(identity()),
            FixedGate::X => Some(x()),
            FixedGate::Y => Some(y()),
            FixedGate::Z => Some(z()),
            FixedGate::H => Some(h()),
            FixedGate::S => Some(s()),
            FixedGate::Sdg => Some(sdg()),
            FixedGate::T => Some(t()),
            FixedGate::Tdg => Some(tdg()),
            _ => None,
        },
        Gate::Eigen(e) => match e.base {
            EigenBase::X => Some(rx(e.exponent)),
            EigenBase::Y => Some(ry(e.exponent)),
            EigenBase::Z => Some(rz(e.exponent)),
            _ => None,
        },
        _ => None,
    }
}

/// The 4x4 matrix realizing a two-qubit unitary gate, if any.
///
/// The matrix index is `(bit of first operand << 1) | bit of second`.
pub fn two_qubit_matrix(gate: &Gate) -> Option<Matrix4> {
    match gate {
        Gate::Fixed(f) => match f {
            FixedGate::CX => Some(cx()),
            FixedGate::CY => Some(cy()),
            FixedGate::CZ => Some(cz()),
            FixedGate::Swap => Some(swap()),
            _ => None,
        },
        Gate::Eigen(e) => match e.base {
            EigenBase::XX => Some(rxx(e.exponent)),
            EigenBase::YY => Some(ryy(e.exponent)),
            EigenBase::ZZ => Some(rzz(e.exponent)),
            _ => None,
        },
        _ => None,
    }
}

/// Multiply two 2x2 matrices: `a * b`.
pub fn mul2(a: &Matrix2, b: &Matrix2) -> Matrix2 {
    [
        a[0] * b[0] + a[1] * b[2],
        a[0] * b[1] + a[1] * b[3],
        a[2] * b[0] + a[3] * b[2],
        a[2] * b[1] + a[3] * b[3],
    ]
}

/// Conjugate transpose of a 2x2 matrix.
pub fn dagger2(m: &Matrix2) -> Matrix2 {
    [m[0].conj(), m[2].conj(), m[1].conj(), m[3].conj()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-10;

    fn approx_eq2(a: &Matrix2, b: &Matrix2) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).norm() < EPSILON)
    }

    fn is_unitary2(m: &Matrix2) -> bool {
        approx_eq2(&mul2(m, &dagger2(m)), &identity())
    }

    #[test]
    fn test_fixed_gates_unitary() {
        for m in [x(), y(), z(), h(), s(), sdg(), t(), tdg()] {
            assert!(is_unitary2(&m));
        }
    }

    #[test]
    fn test_hadamard_squared_is_identity() {
        assert!(approx_eq2(&mul2(&h(), &h()), &identity()));
    }

    #[test]
    fn test_rotations_unitary() {
        for theta in [0.0, 0.3, PI, 5.1] {
            assert!(is_unitary2(&rx(theta)));
            assert!(is_unitary2(&ry(theta)));
            assert!(is_unitary2(&rz(theta)));
        }
    }

    #[test]
    fn test_rx_pi_is_x_up_to_phase() {
        let m = rx(PI);
        // RX(π) = -i·X
        let expected = x().map(|e| e * Complex64::new(0.0, -1.0));
        assert!(approx_eq2(&m, &expected));
    }

    #[test]
    fn test_two_qubit_unitary() {
        for m in [cx(), cy(), cz(), swap(), rxx(0.7), ryy(1.3), rzz(2.9)] {
            // U·U† = I, elementwise.
            for r in 0..4 {
                for c in 0..4 {
                    let mut acc = Complex64::new(0.0, 0.0);
                    for k in 0..4 {
                        acc += m[r * 4 + k] * m[c * 4 + k].conj();
                    }
                    let expected = if r == c { 1.0 } else { 0.0 };
                    assert!(
                        (acc - Complex64::new(expected, 0.0)).norm() < EPSILON,
                        "U·U† mismatch at ({r},{c}): {acc}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_gate_matrix_lookup() {
        assert!(single_qubit_matrix(&Gate::Fixed(FixedGate::H)).is_some());
        assert!(single_qubit_matrix(&Gate::rx(0.2)).is_some());
        assert!(single_qubit_matrix(&Gate::Fixed(FixedGate::CX)).is_none());
        assert!(single_qubit_matrix(&Gate::measure("m", 1)).is_none());

        assert!(two_qubit_matrix(&Gate::Fixed(FixedGate::CX)).is_some());
        assert!(two_qubit_matrix(&Gate::rzz(0.4)).is_some());
        assert!(two_qubit_matrix(&Gate::Fixed(FixedGate::H)).is_none());
    }
}

//! Rotation-ladder noise estimation ("poor man's tomography").
//!
//! Estimates the effective stochastic rotation-noise parameter σ of a
//! gate's physical realization from black-box expectation values alone:
//! a fractional rotation is applied `depth` times so that the noiseless
//! composition is a full `2π` turn — the identity channel — and the
//! residual depolarization observed in the expectation value is inverted
//! in closed form.

use std::f64::consts::TAU;
use tracing::debug;

use alsvin_ir::{Circuit, EigenBase, EigenGate, Gate, Moment, Operation, QubitId};

use crate::error::{ChannelError, ChannelResult};

/// Default number of fractional-rotation applications.
pub const DEFAULT_ESTIMATION_DEPTH: usize = 100;

/// Black-box expectation-value executor.
///
/// Supplied by the caller; typically wraps hardware or a noisy
/// simulation and reports a real expectation value (e.g. the survival
/// probability of `|0…0⟩`) for a circuit. Any `FnMut(&Circuit) -> f64`
/// closure is an executor.
pub trait Executor {
    /// Execute the circuit and return its expectation value.
    fn execute(&mut self, circuit: &Circuit) -> ChannelResult<f64>;
}

impl<F> Executor for F
where
    F: FnMut(&Circuit) -> f64,
{
    fn execute(&mut self, circuit: &Circuit) -> ChannelResult<f64> {
        Ok(self(circuit))
    }
}

/// Build the ladder circuit approximating the identity.
///
/// Applies the base rotation at exponent `2π/depth`, `depth` times, each
/// application in its own moment, so the noiseless composition is the
/// full `2π` rotation. Fails with [`ChannelError::GateQubitMismatch`]
/// when the number of target qubits does not match the base family's
/// arity.
pub fn rotation_ladder_circuit(
    qubits: &[QubitId],
    depth: usize,
    base: EigenBase,
) -> ChannelResult<Circuit> {
    if depth == 0 {
        return Err(ChannelError::InvalidDepth(depth));
    }
    if base.num_qubits() as usize != qubits.len() {
        return Err(ChannelError::GateQubitMismatch {
            expected: base.num_qubits(),
            got: qubits.len() as u32,
        });
    }

    let rotation_angle = TAU / depth as f64;
    let mut moments = Vec::with_capacity(depth);
    for _ in 0..depth {
        let op = Operation::new(
            Gate::Eigen(EigenGate::new(base, rotation_angle)),
            qubits.iter().copied(),
        )?;
        moments.push(Moment::from_operations([op])?);
    }
    Ok(Circuit::from_moments(moments))
}

/// Estimate the effective rotation-noise parameter σ of `gate` at the
/// default depth.
pub fn estimate_sigma<E: Executor>(
    executor: &mut E,
    gate: &Gate,
    qubit: QubitId,
) -> ChannelResult<f64> {
    estimate_sigma_with_depth(executor, gate, qubit, DEFAULT_ESTIMATION_DEPTH)
}

/// Estimate the effective rotation-noise parameter σ of `gate`.
///
/// The gate is reduced to its base rotation family, the rotation ladder
/// is executed through `executor` to obtain an expectation value `E`,
/// and the depolarizing-channel model is inverted:
///
/// ```text
/// Q = (1 − (2E−1)^(1/depth)) / 2
/// σ = −½·ln(1 − 2Q)
/// ```
///
/// The inversion has two genuine numerical edge cases, surfaced as
/// errors rather than silent invalid floats: a negative `2E−1` has no
/// real fractional power ([`ChannelError::NegativeFractionalBase`]), and
/// `Q ≥ ½` leaves the logarithm argument non-positive
/// ([`ChannelError::NoiseOutOfRange`]).
pub fn estimate_sigma_with_depth<E: Executor>(
    executor: &mut E,
    gate: &Gate,
    qubit: QubitId,
    depth: usize,
) -> ChannelResult<f64> {
    let base = gate.eigen_base().ok_or_else(|| ChannelError::NoBaseRotation {
        gate: gate.name().to_string(),
    })?;

    let circuit = rotation_ladder_circuit(&[qubit], depth, base)?;
    let expectation = executor.execute(&circuit)?;
    debug!(expectation, depth, base = base.name(), "rotation ladder executed");

    let signal = 2.0 * expectation - 1.0;
    if signal < 0.0 {
        return Err(ChannelError::NegativeFractionalBase {
            base: signal,
            depth,
        });
    }

    let per_step = signal.powf(1.0 / depth as f64);
    let q = (1.0 - per_step) / 2.0;
    if 1.0 - 2.0 * q <= 0.0 {
        return Err(ChannelError::NoiseOutOfRange { q });
    }

    Ok(-0.5 * (1.0 - 2.0 * q).ln())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvin_ir::FixedGate;

    #[test]
    fn test_ladder_shape() {
        let circuit = rotation_ladder_circuit(&[QubitId(0)], 10, EigenBase::X).unwrap();
        assert_eq!(circuit.num_moments(), 10);
        assert_eq!(circuit.num_operations(), 10);

        let angle = TAU / 10.0;
        for op in circuit.operations() {
            match op.gate() {
                Gate::Eigen(g) => {
                    assert_eq!(g.base, EigenBase::X);
                    assert!((g.exponent - angle).abs() < 1e-12);
                }
                _ => panic!("Expected an eigen gate"),
            }
        }
    }

    #[test]
    fn test_ladder_arity_mismatch() {
        let result = rotation_ladder_circuit(&[QubitId(0)], 10, EigenBase::ZZ);
        assert!(matches!(
            result,
            Err(ChannelError::GateQubitMismatch {
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn test_zero_depth_rejected() {
        let result = rotation_ladder_circuit(&[QubitId(0)], 0, EigenBase::X);
        assert!(matches!(result, Err(ChannelError::InvalidDepth(0))));
    }

    #[test]
    fn test_noiseless_executor_yields_zero_sigma() {
        let mut executor = |_: &Circuit| 1.0;
        for depth in [1, 7, 100] {
            let sigma =
                estimate_sigma_with_depth(&mut executor, &Gate::rx(0.5), QubitId(0), depth)
                    .unwrap();
            assert!(sigma.abs() < 1e-12, "depth {depth}: sigma = {sigma}");
        }
    }

    #[test]
    fn test_pauli_gate_reduces_to_base() {
        let mut executor = |_: &Circuit| 1.0;
        let sigma = estimate_sigma(&mut executor, &Gate::Fixed(FixedGate::Z), QubitId(0)).unwrap();
        assert_eq!(sigma, 0.0);
    }

    #[test]
    fn test_gate_without_base_rotation_fails() {
        let mut executor = |_: &Circuit| 1.0;
        let result = estimate_sigma(&mut executor, &Gate::Fixed(FixedGate::H), QubitId(0));
        assert!(matches!(result, Err(ChannelError::NoBaseRotation { .. })));
    }

    #[test]
    fn test_two_qubit_base_with_single_target_fails() {
        let mut executor = |_: &Circuit| 1.0;
        let result = estimate_sigma(&mut executor, &Gate::rzz(0.3), QubitId(0));
        assert!(matches!(
            result,
            Err(ChannelError::GateQubitMismatch { .. })
        ));
    }

    #[test]
    fn test_negative_base_is_rejected() {
        // E = 0.2 gives 2E−1 = −0.6: no real fractional power exists.
        let mut executor = |_: &Circuit| 0.2;
        let result = estimate_sigma_with_depth(&mut executor, &Gate::rx(0.5), QubitId(0), 100);
        assert!(matches!(
            result,
            Err(ChannelError::NegativeFractionalBase { .. })
        ));
    }

    #[test]
    fn test_half_expectation_is_out_of_range() {
        // E = 0.5 gives 2E−1 = 0: Q = ½ and the logarithm blows up.
        let mut executor = |_: &Circuit| 0.5;
        let result = estimate_sigma_with_depth(&mut executor, &Gate::rx(0.5), QubitId(0), 100);
        assert!(matches!(result, Err(ChannelError::NoiseOutOfRange { .. })));
    }

    #[test]
    fn test_sigma_round_trip() {
        // Synthesize E from a known σ via the depolarizing model and
        // check that the inversion recovers it.
        let depth = 50;
        let sigma_true = 0.02_f64;
        let q = (1.0 - (-2.0 * sigma_true).exp()) / 2.0;
        let expectation = (1.0 + (1.0 - 2.0 * q).powi(depth as i32)) / 2.0;

        let mut executor = move |_: &Circuit| expectation;
        let sigma =
            estimate_sigma_with_depth(&mut executor, &Gate::rx(0.5), QubitId(0), depth).unwrap();
        assert!((sigma - sigma_true).abs() < 1e-10);
    }

    #[test]
    fn test_executor_sees_the_ladder() {
        let mut seen_moments = 0;
        {
            let mut executor = |circuit: &Circuit| {
                seen_moments = circuit.num_moments();
                1.0
            };
            estimate_sigma_with_depth(&mut executor, &Gate::rx(0.5), QubitId(0), 25).unwrap();
        }
        assert_eq!(seen_moments, 25);
    }
}

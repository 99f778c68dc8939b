//! Exact density-matrix simulation.

use rustc_hash::FxHashMap;
use tracing::debug;

use alsvin_ir::{Circuit, Gate, QubitId};

use crate::density::DensityMatrix;
use crate::error::{SimError, SimResult};
use crate::kraus::kraus_operators;
use crate::matrix::{single_qubit_matrix, two_qubit_matrix};

/// A synchronous, deterministic circuit simulator producing the final
/// density matrix.
///
/// This is the seam through which characterization code reaches a
/// simulation backend; any exact backend can stand in for the bundled
/// [`DensityMatrixSimulator`].
pub trait Simulator {
    /// Simulate a circuit from `|0…0⟩⟨0…0|` and return the final state.
    fn simulate(&self, circuit: &Circuit) -> SimResult<DensityMatrix>;
}

/// Dense, exact density-matrix simulator.
///
/// Memory grows as `4^n`, so the default qubit budget is small.
/// Measurements dephase the measured qubits (the ensemble average over
/// outcomes); noise channels are applied by summing all Kraus branches.
pub struct DensityMatrixSimulator {
    /// Maximum number of qubits accepted.
    max_qubits: usize,
}

impl DensityMatrixSimulator {
    /// Create a simulator with the default qubit budget.
    pub fn new() -> Self {
        Self { max_qubits: 10 }
    }

    /// Create a simulator with a custom qubit budget.
    pub fn with_max_qubits(max_qubits: usize) -> Self {
        Self { max_qubits }
    }
}

impl Default for DensityMatrixSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator for DensityMatrixSimulator {
    fn simulate(&self, circuit: &Circuit) -> SimResult<DensityMatrix> {
        let num_qubits = circuit.num_qubits();
        if num_qubits > self.max_qubits {
            return Err(SimError::CircuitTooLarge {
                qubits: num_qubits,
                max: self.max_qubits,
            });
        }

        debug!(
            num_qubits,
            num_operations = circuit.num_operations(),
            "starting density-matrix simulation"
        );

        // Sorted qubits map to little-endian bit positions.
        let bit_of: FxHashMap<QubitId, usize> = circuit
            .all_qubits()
            .enumerate()
            .map(|(bit, qubit)| (qubit, bit))
            .collect();

        let mut rho = DensityMatrix::new(num_qubits);

        for op in circuit.operations() {
            let bits: Vec<usize> = op.qubits().iter().map(|q| bit_of[q]).collect();

            match op.gate() {
                Gate::Measure(_) => {
                    for &bit in &bits {
                        rho.dephase(bit);
                    }
                }
                Gate::Channel(model) => {
                    rho.apply_kraus1(bits[0], &kraus_operators(model));
                }
                gate => {
                    if bits.len() == 1 {
                        if let Some(m) = single_qubit_matrix(gate) {
                            rho.apply_unitary1(bits[0], &m);
                            continue;
                        }
                    } else if bits.len() == 2 {
                        if let Some(m) = two_qubit_matrix(gate) {
                            rho.apply_unitary2(bits[0], bits[1], &m);
                            continue;
                        }
                    }
                    return Err(SimError::UnsupportedGate {
                        name: gate.name().to_string(),
                        qubits: bits.len(),
                    });
                }
            }
        }

        debug!(trace = rho.trace(), purity = rho.purity(), "simulation finished");
        Ok(rho)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvin_ir::NoiseModel;
    use std::f64::consts::TAU;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_empty_circuit_on_domain() {
        let circuit = Circuit::with_qubits([QubitId(0), QubitId(1)]);
        let rho = DensityMatrixSimulator::new().simulate(&circuit).unwrap();
        assert_eq!(rho.dim(), 4);
        assert!((rho.probability(0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_bell_density_matrix() {
        let mut circuit = Circuit::new();
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap();

        let rho = DensityMatrixSimulator::new().simulate(&circuit).unwrap();
        assert!((rho.probability(0) - 0.5).abs() < EPSILON);
        assert!((rho.probability(3) - 0.5).abs() < EPSILON);
        assert!((rho.data()[[0, 3]].re - 0.5).abs() < EPSILON);
        assert!((rho.purity() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_sparse_qubit_labels_are_compacted() {
        // Bell preparation on qubits {4, 9} simulates as 2 qubits.
        let mut circuit = Circuit::new();
        circuit
            .h(QubitId(4))
            .unwrap()
            .cx(QubitId(4), QubitId(9))
            .unwrap();

        let rho = DensityMatrixSimulator::new().simulate(&circuit).unwrap();
        assert_eq!(rho.dim(), 4);
        assert!((rho.probability(0) - 0.5).abs() < EPSILON);
        assert!((rho.probability(3) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_full_rotation_is_identity_channel() {
        let mut circuit = Circuit::new();
        circuit.rx(TAU, QubitId(0)).unwrap();
        let rho = DensityMatrixSimulator::new().simulate(&circuit).unwrap();
        assert!((rho.probability(0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_measurement_dephases() {
        let mut circuit = Circuit::new();
        circuit.h(QubitId(0)).unwrap().measure("m", [QubitId(0)]).unwrap();

        let rho = DensityMatrixSimulator::new().simulate(&circuit).unwrap();
        assert!((rho.probability(0) - 0.5).abs() < EPSILON);
        assert!(rho.data()[[0, 1]].norm() < EPSILON);
    }

    #[test]
    fn test_noise_channel_reduces_purity() {
        let mut circuit = Circuit::new();
        circuit
            .h(QubitId(0))
            .unwrap()
            .noise(NoiseModel::Depolarizing { p: 0.2 }, QubitId(0))
            .unwrap();

        let rho = DensityMatrixSimulator::new().simulate(&circuit).unwrap();
        assert!((rho.trace() - 1.0).abs() < EPSILON);
        assert!(rho.purity() < 1.0);
    }

    #[test]
    fn test_qubit_budget_enforced() {
        let sim = DensityMatrixSimulator::with_max_qubits(2);
        let circuit = Circuit::with_qubits((0..5).map(QubitId));
        let result = sim.simulate(&circuit);
        assert!(matches!(result, Err(SimError::CircuitTooLarge { .. })));
    }
}

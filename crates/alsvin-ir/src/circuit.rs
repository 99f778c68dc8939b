//! Moment-structured circuits.
//!
//! A [`Circuit`] is an ordered sequence of [`Moment`]s; a moment is a
//! set of [`Operation`]s applied to disjoint qubits in the same
//! time-step. Circuits are value-like: every transformation
//! (`transform_qubits`, `cleared`, `with_measurement_keys_erased`)
//! builds a new circuit and leaves the original untouched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{IrError, IrResult};
use crate::gate::{FixedGate, Gate};
use crate::noise::NoiseModel;
use crate::qubit::QubitId;

/// A gate applied to an ordered tuple of qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    gate: Gate,
    qubits: Vec<QubitId>,
}

impl Operation {
    /// Create an operation, validating gate arity and operand uniqueness.
    pub fn new(gate: impl Into<Gate>, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<Self> {
        let gate = gate.into();
        let qubits: Vec<_> = qubits.into_iter().collect();

        let expected = gate.num_qubits();
        if expected as usize != qubits.len() {
            return Err(IrError::QubitCountMismatch {
                gate_name: gate.name().to_string(),
                expected,
                got: qubits.len() as u32,
            });
        }

        let mut seen = BTreeSet::new();
        for &qubit in &qubits {
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: Some(gate.name().to_string()),
                });
            }
        }

        Ok(Self { gate, qubits })
    }

    /// Get the gate of this operation.
    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    /// Get the qubit operands in application order.
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    /// Check if this operation is a measurement.
    pub fn is_measurement(&self) -> bool {
        self.gate.is_measurement()
    }

    /// Rebuild this operation with a different gate of the same arity.
    pub fn with_gate(&self, gate: Gate) -> IrResult<Self> {
        Self::new(gate, self.qubits.iter().copied())
    }

    /// Rebuild this operation with its qubits remapped through `f`.
    fn map_qubits(&self, f: impl Fn(QubitId) -> QubitId) -> IrResult<Self> {
        Self::new(self.gate.clone(), self.qubits.iter().map(|&q| f(q)))
    }
}

/// A set of operations on disjoint qubits within one time-step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Moment {
    operations: Vec<Operation>,
}

impl Moment {
    /// Create an empty moment.
    pub fn new() -> Self {
        Self { operations: vec![] }
    }

    /// Create a moment from a sequence of operations.
    pub fn from_operations(operations: impl IntoIterator<Item = Operation>) -> IrResult<Self> {
        let mut moment = Self::new();
        for op in operations {
            moment.push(op)?;
        }
        Ok(moment)
    }

    /// Add an operation; fails if it shares a qubit with an existing one.
    pub fn push(&mut self, operation: Operation) -> IrResult<()> {
        for &qubit in operation.qubits() {
            if self.touches(qubit) {
                return Err(IrError::MomentOverlap { qubit });
            }
        }
        self.operations.push(operation);
        Ok(())
    }

    /// Check if any operation in the moment acts on `qubit`.
    pub fn touches(&self, qubit: QubitId) -> bool {
        self.operations
            .iter()
            .any(|op| op.qubits().contains(&qubit))
    }

    /// Check if any operation acts on one of the given qubits.
    pub fn touches_any(&self, qubits: &[QubitId]) -> bool {
        qubits.iter().any(|&q| self.touches(q))
    }

    /// Get the operations in this moment.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Check if the moment holds no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Rebuild the moment with each operation's gate transformed.
    ///
    /// `f` must preserve gate arity; operands are carried over verbatim.
    pub(crate) fn map_gates(&self, f: impl Fn(&Gate) -> Gate) -> Moment {
        Moment {
            operations: self
                .operations
                .iter()
                .map(|op| Operation {
                    gate: f(&op.gate),
                    qubits: op.qubits.clone(),
                })
                .collect(),
        }
    }
}

/// An ordered sequence of moments over an explicit qubit domain.
///
/// The qubit domain is the union of every qubit an operation has
/// touched plus any qubits registered explicitly; it survives
/// [`Circuit::cleared`], which is what guarantees register
/// compatibility when a circuit is rebuilt around new operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    qubits: BTreeSet<QubitId>,
    moments: Vec<Moment>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty circuit over an explicit qubit domain.
    pub fn with_qubits(qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            qubits: qubits.into_iter().collect(),
            moments: vec![],
        }
    }

    /// Create a circuit from explicit moments.
    pub fn from_moments(moments: impl IntoIterator<Item = Moment>) -> Self {
        let mut circuit = Self::new();
        for moment in moments {
            circuit.append_moment(moment);
        }
        circuit
    }

    /// Register a qubit in the circuit's domain.
    pub fn add_qubit(&mut self, qubit: QubitId) {
        self.qubits.insert(qubit);
    }

    /// Append an operation at the earliest available moment.
    ///
    /// The operation lands in the latest slot such that no earlier
    /// moment it would cross acts on a shared qubit; a new moment is
    /// opened only when the last moment already touches one of its
    /// qubits.
    pub fn push(&mut self, operation: Operation) -> IrResult<()> {
        for &qubit in operation.qubits() {
            self.qubits.insert(qubit);
        }

        let mut index = self.moments.len();
        while index > 0 && !self.moments[index - 1].touches_any(operation.qubits()) {
            index -= 1;
        }

        if index == self.moments.len() {
            self.moments.push(Moment::new());
        }
        self.moments[index].push(operation)
    }

    /// Append a moment verbatim, preserving its alignment.
    pub fn append_moment(&mut self, moment: Moment) {
        for op in moment.operations() {
            for &qubit in op.qubits() {
                self.qubits.insert(qubit);
            }
        }
        self.moments.push(moment);
    }

    /// Append another circuit's moments verbatim after this circuit's.
    pub fn append_circuit(&mut self, other: &Circuit) {
        for &qubit in &other.qubits {
            self.qubits.insert(qubit);
        }
        for moment in &other.moments {
            self.moments.push(moment.clone());
        }
    }

    // =========================================================================
    // Fluent builders
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::new(FixedGate::H, [qubit])?)?;
        Ok(self)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::new(FixedGate::X, [qubit])?)?;
        Ok(self)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::new(FixedGate::Y, [qubit])?)?;
        Ok(self)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::new(FixedGate::Z, [qubit])?)?;
        Ok(self)
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::new(FixedGate::S, [qubit])?)?;
        Ok(self)
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::new(FixedGate::T, [qubit])?)?;
        Ok(self)
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::new(Gate::rx(theta), [qubit])?)?;
        Ok(self)
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::new(Gate::ry(theta), [qubit])?)?;
        Ok(self)
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::new(Gate::rz(theta), [qubit])?)?;
        Ok(self)
    }

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::new(FixedGate::CX, [control, target])?)?;
        Ok(self)
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::new(FixedGate::CZ, [control, target])?)?;
        Ok(self)
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::new(FixedGate::Swap, [q1, q2])?)?;
        Ok(self)
    }

    /// Apply ZZ rotation gate.
    pub fn rzz(&mut self, theta: f64, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::new(Gate::rzz(theta), [q1, q2])?)?;
        Ok(self)
    }

    /// Measure qubits under a result key.
    pub fn measure(
        &mut self,
        key: impl Into<String>,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        let qubits: Vec<_> = qubits.into_iter().collect();
        let gate = Gate::measure(key, qubits.len() as u32);
        self.push(Operation::new(gate, qubits)?)?;
        Ok(self)
    }

    /// Apply a noise channel to a qubit.
    pub fn noise(&mut self, model: NoiseModel, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::new(model, [qubit])?)?;
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Iterate over the circuit's qubit domain in ascending order.
    pub fn all_qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.qubits.iter().copied()
    }

    /// The circuit's qubit domain in ascending order.
    pub fn sorted_qubits(&self) -> Vec<QubitId> {
        self.qubits.iter().copied().collect()
    }

    /// Number of distinct qubits in the domain.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the moments of this circuit.
    pub fn moments(&self) -> &[Moment] {
        &self.moments
    }

    /// Number of moments.
    pub fn num_moments(&self) -> usize {
        self.moments.len()
    }

    /// Iterate over all operations in moment order.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.moments.iter().flat_map(|m| m.operations().iter())
    }

    /// Total number of operations.
    pub fn num_operations(&self) -> usize {
        self.moments.iter().map(|m| m.operations().len()).sum()
    }

    /// Check if the circuit has no operations.
    pub fn is_empty(&self) -> bool {
        self.moments.iter().all(Moment::is_empty)
    }

    // =========================================================================
    // Value transformations
    // =========================================================================

    /// A circuit with the same qubit domain and no operations.
    #[must_use]
    pub fn cleared(&self) -> Circuit {
        Circuit {
            qubits: self.qubits.clone(),
            moments: vec![],
        }
    }

    /// Rebuild the circuit with every qubit remapped through `f`.
    ///
    /// The mapping must be injective over the circuit's qubit domain;
    /// collapsing two qubits fails with [`IrError::NonInjectiveMapping`].
    pub fn transform_qubits(&self, f: impl Fn(QubitId) -> QubitId) -> IrResult<Circuit> {
        let mut targets: std::collections::BTreeMap<QubitId, QubitId> =
            std::collections::BTreeMap::new();
        for &qubit in &self.qubits {
            let target = f(qubit);
            if let Some(&prior) = targets.get(&target) {
                return Err(IrError::NonInjectiveMapping {
                    first: prior,
                    second: qubit,
                    target,
                });
            }
            targets.insert(target, qubit);
        }

        let mut moments = Vec::with_capacity(self.moments.len());
        for moment in &self.moments {
            let mut mapped = Moment::new();
            for op in moment.operations() {
                mapped.push(op.map_qubits(&f)?)?;
            }
            moments.push(mapped);
        }

        Ok(Circuit {
            qubits: targets.keys().copied().collect(),
            moments,
        })
    }

    /// Rebuild the circuit with every measurement key replaced by the
    /// empty string, preserving the position of each measurement.
    #[must_use]
    pub fn with_measurement_keys_erased(&self) -> Circuit {
        self.map_gates(|gate| gate.with_measurement_key(""))
    }

    /// Rebuild the circuit with every gate transformed through `f`,
    /// preserving moment structure. `f` must preserve gate arity.
    pub(crate) fn map_gates(&self, f: impl Fn(&Gate) -> Gate) -> Circuit {
        Circuit {
            qubits: self.qubits.clone(),
            moments: self.moments.iter().map(|m| m.map_gates(&f)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_operation_arity_mismatch() {
        let result = Operation::new(FixedGate::CX, [QubitId(0)]);
        match result {
            Err(IrError::QubitCountMismatch {
                gate_name,
                expected,
                got,
            }) => {
                assert_eq!(gate_name, "cx");
                assert_eq!(expected, 2);
                assert_eq!(got, 1);
            }
            _ => panic!("Expected QubitCountMismatch error"),
        }
    }

    #[test]
    fn test_operation_duplicate_qubit() {
        let result = Operation::new(FixedGate::CX, [QubitId(0), QubitId(0)]);
        assert!(matches!(result, Err(IrError::DuplicateQubit { .. })));
    }

    #[test]
    fn test_operation_with_gate() {
        let op = Operation::new(FixedGate::X, [QubitId(0)]).unwrap();
        let swapped = op.with_gate(Gate::Fixed(FixedGate::Y)).unwrap();
        assert_eq!(swapped.gate().name(), "y");
        assert_eq!(swapped.qubits(), op.qubits());
        // Arity must still line up.
        assert!(op.with_gate(Gate::Fixed(FixedGate::CX)).is_err());
    }

    #[test]
    fn test_moment_overlap() {
        let mut moment = Moment::new();
        moment
            .push(Operation::new(FixedGate::H, [QubitId(0)]).unwrap())
            .unwrap();
        let result = moment.push(Operation::new(FixedGate::X, [QubitId(0)]).unwrap());
        assert!(matches!(result, Err(IrError::MomentOverlap { .. })));
    }

    #[test]
    fn test_earliest_packing() {
        let mut circuit = Circuit::new();
        circuit.h(QubitId(0)).unwrap().h(QubitId(1)).unwrap();
        // Disjoint single-qubit gates share one moment.
        assert_eq!(circuit.num_moments(), 1);

        circuit.cx(QubitId(0), QubitId(1)).unwrap();
        assert_eq!(circuit.num_moments(), 2);
    }

    #[test]
    fn test_sequential_same_qubit_gates_stack() {
        let mut circuit = Circuit::new();
        circuit.x(QubitId(0)).unwrap().x(QubitId(0)).unwrap();
        assert_eq!(circuit.num_moments(), 2);
    }

    #[test]
    fn test_qubit_domain_tracks_operations() {
        let mut circuit = Circuit::new();
        circuit.cx(QubitId(3), QubitId(7)).unwrap();
        assert_eq!(circuit.sorted_qubits(), vec![QubitId(3), QubitId(7)]);
    }

    #[test]
    fn test_cleared_preserves_domain() {
        let mut circuit = Circuit::new();
        circuit.h(QubitId(2)).unwrap();
        let cleared = circuit.cleared();
        assert!(cleared.is_empty());
        assert_eq!(cleared.sorted_qubits(), vec![QubitId(2)]);
    }

    #[test]
    fn test_transform_qubits() {
        let mut circuit = Circuit::new();
        circuit.h(QubitId(0)).unwrap().cx(QubitId(0), QubitId(1)).unwrap();

        let shifted = circuit.transform_qubits(|q| QubitId(q.0 + 5)).unwrap();
        assert_eq!(shifted.sorted_qubits(), vec![QubitId(5), QubitId(6)]);
        assert_eq!(shifted.num_operations(), 2);
        // The original circuit is untouched.
        assert_eq!(circuit.sorted_qubits(), vec![QubitId(0), QubitId(1)]);
    }

    #[test]
    fn test_transform_qubits_rejects_collapse() {
        let mut circuit = Circuit::new();
        circuit.h(QubitId(0)).unwrap().h(QubitId(1)).unwrap();
        let result = circuit.transform_qubits(|_| QubitId(0));
        assert!(matches!(result, Err(IrError::NonInjectiveMapping { .. })));
    }

    #[test]
    fn test_measurement_key_erasure_preserves_position() {
        let mut circuit = Circuit::new();
        circuit
            .h(QubitId(0))
            .unwrap()
            .measure("alpha", [QubitId(0)])
            .unwrap()
            .x(QubitId(0))
            .unwrap();

        let erased = circuit.with_measurement_keys_erased();
        assert_eq!(erased.num_moments(), circuit.num_moments());
        let keys: Vec<_> = erased
            .operations()
            .filter_map(|op| op.gate().measurement_key())
            .collect();
        assert_eq!(keys, vec![""]);
    }

    #[test]
    fn test_explicit_moments_preserved() {
        let m1 = Moment::from_operations([Operation::new(Gate::rx(PI), [QubitId(0)]).unwrap()])
            .unwrap();
        let m2 = Moment::from_operations([Operation::new(Gate::rx(PI), [QubitId(0)]).unwrap()])
            .unwrap();
        let circuit = Circuit::from_moments([m1, m2]);
        assert_eq!(circuit.num_moments(), 2);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut circuit = Circuit::new();
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .measure("m", [QubitId(0), QubitId(1)])
            .unwrap();

        let json = serde_json::to_string(&circuit).unwrap();
        let deserialized: Circuit = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, circuit);
    }
}

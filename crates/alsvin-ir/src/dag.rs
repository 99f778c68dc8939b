//! Canonical DAG representation for circuit comparison.
//!
//! The DAG captures only the per-qubit dependency order of a circuit's
//! operations: nodes are operations, and an edge joins consecutive
//! operations on each qubit wire. Moment alignment is deliberately
//! discarded — two circuits whose operations depend on each other in the
//! same per-wire order compare equal no matter how their moments were
//! packed.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;

use crate::circuit::{Circuit, Operation};
use crate::qubit::QubitId;

/// Dependency DAG of a circuit, used only for structural equality.
#[derive(Debug, Clone)]
pub struct CircuitDag {
    /// Operation nodes; edges carry the qubit wire joining them.
    graph: DiGraph<Operation, QubitId>,
}

impl CircuitDag {
    /// Build the dependency DAG of a circuit.
    ///
    /// Operations are visited in moment order; a `wire_front` index maps
    /// each qubit to the last operation seen on it, giving O(1) edge
    /// insertion per operand.
    pub fn from_circuit(circuit: &Circuit) -> Self {
        let mut graph = DiGraph::new();
        let mut wire_front: FxHashMap<QubitId, NodeIndex> = FxHashMap::default();

        for op in circuit.operations() {
            let node = graph.add_node(op.clone());
            for &qubit in op.qubits() {
                if let Some(&prev) = wire_front.get(&qubit) {
                    graph.add_edge(prev, node, qubit);
                }
                wire_front.insert(qubit, node);
            }
        }

        Self { graph }
    }

    /// Number of operations in the DAG.
    pub fn num_ops(&self) -> usize {
        self.graph.node_count()
    }

    /// Longest dependency-chain length.
    pub fn depth(&self) -> usize {
        self.levels().len()
    }

    /// Canonical form: operations partitioned by longest-path level,
    /// each level sorted by (qubit tuple, gate signature).
    pub fn canonical_levels(&self) -> Vec<Vec<&Operation>> {
        let mut levels = self.levels();
        for level in &mut levels {
            level.sort_by(|a, b| {
                (a.qubits(), a.gate().signature()).cmp(&(b.qubits(), b.gate().signature()))
            });
        }
        levels
    }

    /// Partition operations by longest-path level.
    ///
    /// Nodes were inserted in moment order, so the insertion order is
    /// already topological and a single forward sweep suffices.
    fn levels(&self) -> Vec<Vec<&Operation>> {
        let mut level_of: FxHashMap<NodeIndex, usize> =
            FxHashMap::with_capacity_and_hasher(self.graph.node_count(), Default::default());
        let mut levels: Vec<Vec<&Operation>> = vec![];

        for node in self.graph.node_indices() {
            let level = self
                .graph
                .neighbors_directed(node, Direction::Incoming)
                .map(|pred| level_of[&pred] + 1)
                .max()
                .unwrap_or(0);
            level_of.insert(node, level);

            if level == levels.len() {
                levels.push(vec![]);
            }
            levels[level].push(&self.graph[node]);
        }

        levels
    }
}

impl PartialEq for CircuitDag {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_levels() == other.canonical_levels()
    }
}

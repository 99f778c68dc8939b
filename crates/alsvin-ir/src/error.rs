//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Gate requires a different number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// Duplicate qubit in an operation's operand tuple.
    #[error("Duplicate qubit {qubit:?} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Two operations in the same moment act on a shared qubit.
    #[error("Moment already contains an operation on qubit {qubit:?}")]
    MomentOverlap {
        /// The contested qubit.
        qubit: QubitId,
    },

    /// A qubit remapping sends two distinct qubits to the same target.
    #[error("Qubit mapping is not injective: {first:?} and {second:?} both map to {target:?}")]
    NonInjectiveMapping {
        /// First source qubit.
        first: QubitId,
        /// Second source qubit.
        second: QubitId,
        /// The shared target.
        target: QubitId,
    },
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;

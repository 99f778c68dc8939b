//! Alsvin Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing quantum
//! circuits in Alsvin, together with the structural helpers the
//! error-mitigation layer builds on: relabeling-tolerant circuit
//! equality and gate-exponent normalization.
//!
//! # Overview
//!
//! Circuits are moment-structured: a [`Circuit`] is an ordered sequence
//! of [`Moment`]s, and each moment applies [`Operation`]s to disjoint
//! qubits in the same time-step. For comparison, a canonical dependency
//! DAG ([`CircuitDag`]) is derived on demand; two circuits with the same
//! DAG are considered equal regardless of how their moments were packed.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] — opaque, totally ordered labels
//! - **Gates**: [`FixedGate`] for fixed unitaries, [`EigenGate`] for
//!   one-parameter rotation families, [`MeasureGate`] for keyed
//!   measurements, [`NoiseModel`] for noise channels
//! - **Circuits**: [`Operation`], [`Moment`], [`Circuit`]
//! - **Comparison**: [`CircuitDag`], [`circuits_equal`],
//!   [`circuits_equal_with`], [`EqualityOptions`]
//! - **Normalization**: [`simplify_gate_exponent`],
//!   [`simplify_circuit_exponents`]
//!
//! # Example: Relabeling-tolerant equality
//!
//! ```rust
//! use alsvin_ir::{Circuit, QubitId, circuits_equal};
//!
//! // The Bell preparation on qubits {0, 1}...
//! let mut a = Circuit::new();
//! a.h(QubitId(0)).unwrap();
//! a.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! // ...and the same preparation on qubits {5, 6}.
//! let mut b = Circuit::new();
//! b.h(QubitId(5)).unwrap();
//! b.cx(QubitId(5), QubitId(6)).unwrap();
//!
//! assert!(circuits_equal(&a, &b));
//! ```

pub mod circuit;
pub mod compare;
pub mod dag;
pub mod error;
pub mod gate;
pub mod noise;
pub mod qubit;
pub mod simplify;

pub use circuit::{Circuit, Moment, Operation};
pub use compare::{EqualityOptions, circuits_equal, circuits_equal_with};
pub use dag::CircuitDag;
pub use error::{IrError, IrResult};
pub use gate::{EigenBase, EigenGate, FixedGate, Gate, MeasureGate};
pub use noise::NoiseModel;
pub use qubit::QubitId;
pub use simplify::{simplify_circuit_exponents, simplify_gate_exponent};

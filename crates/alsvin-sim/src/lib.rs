//! `alsvin-sim` — exact density-matrix simulation.
//!
//! Simulates `alsvin_ir::Circuit` values under density-matrix semantics:
//! unitary gates evolve the state as `ρ → UρU†`, noise channels as
//! `ρ → Σ K_k ρ K_k†`, and measurements dephase the measured qubits.
//! The result is deterministic and exact — there is no shot sampling —
//! which is what the channel-characterization layer requires to read a
//! Choi matrix straight out of a simulation.
//!
//! # Quick start
//!
//! ```rust
//! use alsvin_ir::{Circuit, QubitId};
//! use alsvin_sim::{DensityMatrixSimulator, Simulator};
//!
//! let mut circuit = Circuit::new();
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! let rho = DensityMatrixSimulator::new().simulate(&circuit).unwrap();
//! assert_eq!(rho.dim(), 4);
//! assert!((rho.trace() - 1.0).abs() < 1e-10);
//! ```

pub mod density;
pub mod error;
pub mod kraus;
pub mod matrix;
pub mod simulator;

pub use density::DensityMatrix;
pub use error::{SimError, SimResult};
pub use kraus::kraus_operators;
pub use matrix::{Matrix2, Matrix4};
pub use simulator::{DensityMatrixSimulator, Simulator};

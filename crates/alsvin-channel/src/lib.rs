//! `alsvin-channel` — quantum-channel characterization.
//!
//! Calibration helpers for noise-scaling error mitigation:
//!
//! - **Choi matrices**: apply a circuit's channel to one half of a
//!   maximally entangled reference state and read the resulting density
//!   matrix out of an exact simulation. The Choi state completely
//!   characterizes the channel, noise included (channel-state duality).
//! - **Rotation-ladder noise estimation**: approximate the effective
//!   stochastic rotation-noise parameter σ of a gate from black-box
//!   expectation values — an inexpensive stand-in for full process
//!   tomography.
//! - **Numeric-map closeness**: tolerance-based comparison of
//!   calibration result maps.
//!
//! # Quick start
//!
//! ```rust
//! use alsvin_channel::{circuit_to_choi, estimate_sigma};
//! use alsvin_ir::{Circuit, Gate, QubitId};
//! use alsvin_sim::DensityMatrixSimulator;
//!
//! // The Choi state of the single-qubit identity channel is the
//! // maximally entangled reference state itself.
//! let simulator = DensityMatrixSimulator::new();
//! let identity = Circuit::with_qubits([QubitId(0)]);
//! let choi = circuit_to_choi(&simulator, &identity).unwrap();
//! assert_eq!(choi.dim(), 4);
//! assert!((choi.purity() - 1.0).abs() < 1e-10);
//!
//! // A noiseless executor reports no rotation noise.
//! let mut executor = |_: &Circuit| 1.0;
//! let sigma = estimate_sigma(&mut executor, &Gate::rx(0.5), QubitId(0)).unwrap();
//! assert_eq!(sigma, 0.0);
//! ```

pub mod choi;
pub mod closeness;
pub mod entangle;
pub mod error;
pub mod tomography;

pub use choi::{circuit_to_choi, operations_to_choi};
pub use closeness::{
    DEFAULT_ABSOLUTE_TOLERANCE, DEFAULT_RELATIVE_TOLERANCE, are_close_dicts, are_close_dicts_with,
};
pub use entangle::max_entangled_state_circuit;
pub use error::{ChannelError, ChannelResult};
pub use tomography::{
    DEFAULT_ESTIMATION_DEPTH, Executor, estimate_sigma, estimate_sigma_with_depth,
    rotation_ladder_circuit,
};

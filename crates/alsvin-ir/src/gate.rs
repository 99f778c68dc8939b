//! Quantum gate types.
//!
//! Gates come in four flavors: fixed unitaries with known semantics,
//! one-parameter rotation families ([`EigenGate`]), computational-basis
//! measurements tagged with a result key, and non-unitary noise channels.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::noise::NoiseModel;

/// Tolerance for comparing canonical gate exponents.
const EXPONENT_EPSILON: f64 = 1e-10;

/// Fixed unitary gates with known semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixedGate {
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Y gate.
    CY,
    /// Controlled-Z gate.
    CZ,
    /// SWAP gate.
    Swap,
}

impl FixedGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            FixedGate::I => "id",
            FixedGate::X => "x",
            FixedGate::Y => "y",
            FixedGate::Z => "z",
            FixedGate::H => "h",
            FixedGate::S => "s",
            FixedGate::Sdg => "sdg",
            FixedGate::T => "t",
            FixedGate::Tdg => "tdg",
            FixedGate::CX => "cx",
            FixedGate::CY => "cy",
            FixedGate::CZ => "cz",
            FixedGate::Swap => "swap",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            FixedGate::I
            | FixedGate::X
            | FixedGate::Y
            | FixedGate::Z
            | FixedGate::H
            | FixedGate::S
            | FixedGate::Sdg
            | FixedGate::T
            | FixedGate::Tdg => 1,

            FixedGate::CX | FixedGate::CY | FixedGate::CZ | FixedGate::Swap => 2,
        }
    }
}

/// Generator families for one-parameter rotation gates.
///
/// Each base `G` defines the family `exp(-i·θ/2·G)` over the rotation
/// angle θ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EigenBase {
    /// Rotation around the X axis.
    X,
    /// Rotation around the Y axis.
    Y,
    /// Rotation around the Z axis.
    Z,
    /// Two-qubit XX rotation.
    XX,
    /// Two-qubit YY rotation.
    YY,
    /// Two-qubit ZZ rotation.
    ZZ,
}

impl EigenBase {
    /// Get the rotation-gate name for this base.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            EigenBase::X => "rx",
            EigenBase::Y => "ry",
            EigenBase::Z => "rz",
            EigenBase::XX => "rxx",
            EigenBase::YY => "ryy",
            EigenBase::ZZ => "rzz",
        }
    }

    /// Get the number of qubits gates of this family operate on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            EigenBase::X | EigenBase::Y | EigenBase::Z => 1,
            EigenBase::XX | EigenBase::YY | EigenBase::ZZ => 2,
        }
    }
}

/// A rotation gate from a one-parameter eigen family.
///
/// The exponent is the rotation angle in radians: the realized unitary
/// is `exp(-i·exponent/2·G)` for the base generator `G`. As quantum
/// channels these gates are periodic in `2π` (the leftover global phase
/// cancels under `ρ → UρU†`), so equality compares the canonical
/// exponent `exponent mod 2π`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EigenGate {
    /// The generator family.
    pub base: EigenBase,
    /// The rotation angle in radians.
    pub exponent: f64,
}

impl EigenGate {
    /// Create a rotation gate from a base generator and an exponent.
    pub fn new(base: EigenBase, exponent: f64) -> Self {
        Self { base, exponent }
    }

    /// Reconstruct this gate at a different exponent.
    #[must_use]
    pub fn with_exponent(&self, exponent: f64) -> Self {
        Self {
            base: self.base,
            exponent,
        }
    }

    /// The exponent folded into `[0, 2π)`.
    pub fn canonical_exponent(&self) -> f64 {
        self.exponent.rem_euclid(TAU)
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        self.base.num_qubits()
    }
}

impl PartialEq for EigenGate {
    fn eq(&self, other: &Self) -> bool {
        if self.base != other.base {
            return false;
        }
        // Canonical exponents compare modulo the 2π period; values just
        // below 2π wrap around to values just above 0.
        let delta = (self.canonical_exponent() - other.canonical_exponent()).abs();
        delta < EXPONENT_EPSILON || (TAU - delta) < EXPONENT_EPSILON
    }
}

/// Measurement in the computational basis, tagged with a result key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureGate {
    /// The key under which the result is reported.
    pub key: String,
    /// The number of qubits measured together.
    pub num_qubits: u32,
}

impl MeasureGate {
    /// Create a measurement gate.
    pub fn new(key: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            key: key.into(),
            num_qubits,
        }
    }
}

/// A quantum gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// A fixed unitary with known semantics.
    Fixed(FixedGate),
    /// A rotation gate from a one-parameter eigen family.
    Eigen(EigenGate),
    /// A computational-basis measurement.
    Measure(MeasureGate),
    /// A non-unitary noise channel.
    Channel(NoiseModel),
}

impl Gate {
    /// Rotation around X by `theta` radians.
    pub fn rx(theta: f64) -> Self {
        Gate::Eigen(EigenGate::new(EigenBase::X, theta))
    }

    /// Rotation around Y by `theta` radians.
    pub fn ry(theta: f64) -> Self {
        Gate::Eigen(EigenGate::new(EigenBase::Y, theta))
    }

    /// Rotation around Z by `theta` radians.
    pub fn rz(theta: f64) -> Self {
        Gate::Eigen(EigenGate::new(EigenBase::Z, theta))
    }

    /// Two-qubit XX rotation by `theta` radians.
    pub fn rxx(theta: f64) -> Self {
        Gate::Eigen(EigenGate::new(EigenBase::XX, theta))
    }

    /// Two-qubit YY rotation by `theta` radians.
    pub fn ryy(theta: f64) -> Self {
        Gate::Eigen(EigenGate::new(EigenBase::YY, theta))
    }

    /// Two-qubit ZZ rotation by `theta` radians.
    pub fn rzz(theta: f64) -> Self {
        Gate::Eigen(EigenGate::new(EigenBase::ZZ, theta))
    }

    /// Measurement gate with a result key.
    pub fn measure(key: impl Into<String>, num_qubits: u32) -> Self {
        Gate::Measure(MeasureGate::new(key, num_qubits))
    }

    /// Get the name of this gate.
    pub fn name(&self) -> &str {
        match self {
            Gate::Fixed(g) => g.name(),
            Gate::Eigen(g) => g.base.name(),
            Gate::Measure(_) => "measure",
            Gate::Channel(model) => model.name(),
        }
    }

    /// Get the number of qubits this gate operates on.
    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::Fixed(g) => g.num_qubits(),
            Gate::Eigen(g) => g.num_qubits(),
            Gate::Measure(g) => g.num_qubits,
            Gate::Channel(_) => 1,
        }
    }

    /// Check if this is a measurement.
    pub fn is_measurement(&self) -> bool {
        matches!(self, Gate::Measure(_))
    }

    /// Get the measurement key, if this is a measurement.
    pub fn measurement_key(&self) -> Option<&str> {
        match self {
            Gate::Measure(g) => Some(&g.key),
            _ => None,
        }
    }

    /// Rebuild a measurement with a different key. Non-measurement gates
    /// are returned unchanged.
    #[must_use]
    pub fn with_measurement_key(&self, key: impl Into<String>) -> Gate {
        match self {
            Gate::Measure(g) => Gate::Measure(MeasureGate::new(key, g.num_qubits)),
            _ => self.clone(),
        }
    }

    /// Reconstruct this gate at an arbitrary exponent.
    ///
    /// Returns `None` when the gate does not belong to an eigen family;
    /// callers treat the absence of this capability as a no-op rather
    /// than an error.
    pub fn with_exponent(&self, exponent: f64) -> Option<Gate> {
        match self {
            Gate::Eigen(g) => Some(Gate::Eigen(g.with_exponent(exponent))),
            _ => None,
        }
    }

    /// Extract the underlying rotation family of this gate.
    ///
    /// Pauli gates reduce to their own axis; rotation gates report their
    /// base. Gates without a single-generator form return `None` — a
    /// hard precondition failure for noise-parameter estimation.
    pub fn eigen_base(&self) -> Option<EigenBase> {
        match self {
            Gate::Fixed(FixedGate::X) => Some(EigenBase::X),
            Gate::Fixed(FixedGate::Y) => Some(EigenBase::Y),
            Gate::Fixed(FixedGate::Z) => Some(EigenBase::Z),
            Gate::Eigen(g) => Some(g.base),
            _ => None,
        }
    }

    /// Deterministic sort key used when canonicalizing DAG levels.
    ///
    /// Eigen exponents are folded to their canonical value so that
    /// channel-equal gates sort identically.
    pub fn signature(&self) -> String {
        match self {
            Gate::Fixed(g) => g.name().to_string(),
            Gate::Eigen(g) => format!("{}({:.10})", g.base.name(), g.canonical_exponent()),
            Gate::Measure(g) => format!("measure[{}]", g.key),
            Gate::Channel(model) => format!("{model}"),
        }
    }
}

impl From<FixedGate> for Gate {
    fn from(gate: FixedGate) -> Self {
        Gate::Fixed(gate)
    }
}

impl From<EigenGate> for Gate {
    fn from(gate: EigenGate) -> Self {
        Gate::Eigen(gate)
    }
}

impl From<NoiseModel> for Gate {
    fn from(model: NoiseModel) -> Self {
        Gate::Channel(model)
    }
}

//! Density-matrix state representation.

use ndarray::Array2;
use num_complex::Complex64;

use crate::matrix::{Matrix2, Matrix4};

/// A density matrix over `n` qubits: a `2^n × 2^n` Hermitian,
/// positive-semidefinite, trace-1 matrix.
///
/// Qubits are addressed by little-endian bit position: bit `q` of a
/// basis index is the computational-basis value of qubit `q`.
pub struct DensityMatrix {
    /// The matrix elements.
    data: Array2<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl DensityMatrix {
    /// Create a density matrix initialized to `|0…0⟩⟨0…0|`.
    pub fn new(num_qubits: usize) -> Self {
        let dim = 1 << num_qubits;
        let mut data = Array2::zeros((dim, dim));
        data[[0, 0]] = Complex64::new(1.0, 0.0);
        Self { data, num_qubits }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the matrix dimension (`2^n`).
    pub fn dim(&self) -> usize {
        1 << self.num_qubits
    }

    /// Get the matrix elements.
    pub fn data(&self) -> &Array2<Complex64> {
        &self.data
    }

    /// The trace (sum of the real diagonal).
    pub fn trace(&self) -> f64 {
        (0..self.dim()).map(|i| self.data[[i, i]].re).sum()
    }

    /// The purity `tr(ρ²)`; 1 for pure states, `1/2^n` for the
    /// maximally mixed state.
    pub fn purity(&self) -> f64 {
        self.data.iter().map(|e| e.norm_sqr()).sum()
    }

    /// Probability of the computational-basis outcome `index`.
    pub fn probability(&self, index: usize) -> f64 {
        self.data[[index, index]].re
    }

    /// Apply a single-qubit unitary: `ρ → UρU†`.
    pub fn apply_unitary1(&mut self, qubit: usize, m: &Matrix2) {
        debug_assert!(qubit < self.num_qubits);
        let dim = self.dim();
        let mask = 1 << qubit;

        // Left multiply by U: mix row pairs within each column.
        for col in 0..dim {
            for i in 0..dim {
                if i & mask == 0 {
                    let j = i | mask;
                    let a = self.data[[i, col]];
                    let b = self.data[[j, col]];
                    self.data[[i, col]] = m[0] * a + m[1] * b;
                    self.data[[j, col]] = m[2] * a + m[3] * b;
                }
            }
        }

        // Right multiply by U†: mix column pairs within each row.
        for row in 0..dim {
            for i in 0..dim {
                if i & mask == 0 {
                    let j = i | mask;
                    let a = self.data[[row, i]];
                    let b = self.data[[row, j]];
                    self.data[[row, i]] = a * m[0].conj() + b * m[1].conj();
                    self.data[[row, j]] = a * m[2].conj() + b * m[3].conj();
                }
            }
        }
    }

    /// Apply a two-qubit unitary: `ρ → UρU†`.
    ///
    /// The matrix index convention is `(bit of q1 << 1) | bit of q2`.
    pub fn apply_unitary2(&mut self, q1: usize, q2: usize, m: &Matrix4) {
        debug_assert!(q1 < self.num_qubits && q2 < self.num_qubits && q1 != q2);
        let dim = self.dim();
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;

        let subspace = |base: usize| -> [usize; 4] {
            [base, base | mask2, base | mask1, base | mask1 | mask2]
        };

        // Left multiply by U.
        for col in 0..dim {
            for base in 0..dim {
                if base & (mask1 | mask2) == 0 {
                    let idx = subspace(base);
                    let v = idx.map(|i| self.data[[i, col]]);
                    for (k, &i) in idx.iter().enumerate() {
                        let mut acc = Complex64::new(0.0, 0.0);
                        for (l, &vl) in v.iter().enumerate() {
                            acc += m[k * 4 + l] * vl;
                        }
                        self.data[[i, col]] = acc;
                    }
                }
            }
        }

        // Right multiply by U†.
        for row in 0..dim {
            for base in 0..dim {
                if base & (mask1 | mask2) == 0 {
                    let idx = subspace(base);
                    let v = idx.map(|i| self.data[[row, i]]);
                    for (k, &i) in idx.iter().enumerate() {
                        let mut acc = Complex64::new(0.0, 0.0);
                        for (l, &vl) in v.iter().enumerate() {
                            acc += vl * m[k * 4 + l].conj();
                        }
                        self.data[[row, i]] = acc;
                    }
                }
            }
        }
    }

    /// Apply a single-qubit channel given by Kraus operators:
    /// `ρ → Σ_k K_k ρ K_k†`.
    pub fn apply_kraus1(&mut self, qubit: usize, kraus: &[Matrix2]) {
        debug_assert!(qubit < self.num_qubits);
        let snapshot = self.data.clone();
        let mut acc: Array2<Complex64> = Array2::zeros(self.data.raw_dim());

        for k in kraus {
            self.data.assign(&snapshot);
            self.apply_unitary1(qubit, k);
            acc += &self.data;
        }

        self.data = acc;
    }

    /// Dephase a qubit in the computational basis: coherences between
    /// its 0- and 1-branches are erased. This is the ensemble average of
    /// a projective measurement whose outcome is discarded.
    pub fn dephase(&mut self, qubit: usize) {
        debug_assert!(qubit < self.num_qubits);
        let dim = self.dim();
        let mask = 1 << qubit;
        for row in 0..dim {
            for col in 0..dim {
                if (row & mask) != (col & mask) {
                    self.data[[row, col]] = Complex64::new(0.0, 0.0);
                }
            }
        }
    }
}

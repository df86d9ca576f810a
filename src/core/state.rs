// src/core/state.rs

use super::constants::collapse_constants::PI;
use super::qubit::{Bit, Qubit};
use std::fmt;

/// Phase angle for `index` in evolution `round`: `2π·(round+index)/(depth+qubit_count)`.
///
/// Depends only on its arguments, so any qubit can be evolved in isolation and
/// the order in which a round visits its qubits is unobservable.
pub fn gate_angle(round: usize, index: usize, depth: usize, qubit_count: usize) -> f64 {
    2.0 * PI * ((round + index) as f64) / ((depth + qubit_count) as f64)
}

/// The per-sample state vector: an ordered list of independent qubits.
///
/// This is not a tensor-product state. Entry `i` never reads entry `j`, which is
/// what makes per-qubit and per-sample work trivially shardable.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct QubitRegister {
    qubits: Vec<Qubit>,
}

impl QubitRegister {
    /// Creates `qubit_count` qubits, qubit `i` seeded via [`Qubit::initialized`].
    pub fn initialized(qubit_count: usize) -> Self {
        let qubits = (0..qubit_count)
            .map(|index| Qubit::initialized(index, qubit_count))
            .collect();
        Self { qubits }
    }

    /// Read-only view of the qubits in index order.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Mutable access for callers driving the evolution themselves.
    pub fn qubits_mut(&mut self) -> &mut [Qubit] {
        &mut self.qubits
    }

    /// Number of qubits in the register.
    pub fn len(&self) -> usize {
        self.qubits.len()
    }

    /// Returns `true` if the register holds no qubits.
    pub fn is_empty(&self) -> bool {
        self.qubits.is_empty()
    }

    /// Applies evolution round `round` of a `depth`-round run to every qubit, in index order.
    pub fn apply_round(&mut self, round: usize, depth: usize) {
        let qubit_count = self.qubits.len();
        for (index, qubit) in self.qubits.iter_mut().enumerate() {
            qubit.apply_deterministic_gate(gate_angle(round, index, depth, qubit_count));
        }
    }

    /// Runs rounds `0..depth` strictly in order.
    pub fn evolve(&mut self, depth: usize) {
        for round in 0..depth {
            self.apply_round(round, depth);
        }
    }

    /// Collapses every qubit in index order.
    pub fn collapse(&self) -> Bitstring {
        Bitstring::from_bits(self.qubits.iter().map(Qubit::collapse_bit))
    }
}

impl fmt::Display for QubitRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Register[")?;
        for (i, q) in self.qubits.iter().enumerate() {
            write!(f, "{}({:.4}, {:.4})", if i > 0 { ", " } else { "" }, q.alpha(), q.beta())?;
        }
        write!(f, "]")
    }
}

/// One collapsed sample: a `'0'`/`'1'` character per qubit, in qubit index order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bitstring(String);

impl Bitstring {
    /// Concatenates bits in iteration order.
    pub fn from_bits<I>(bits: I) -> Self
    where
        I: IntoIterator<Item = Bit>,
    {
        Self(bits.into_iter().map(Bit::as_char).collect())
    }

    /// The bitstring as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of bits (one per qubit).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the bitstring of an empty register.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bit at `index`, if in range.
    pub fn bit(&self, index: usize) -> Option<Bit> {
        match self.0.as_bytes().get(index)? {
            b'0' => Some(Bit::Zero),
            _ => Some(Bit::One),
        }
    }

    /// Consumes the bitstring, returning the underlying text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Bitstring {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Bitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// src/core/qubit.rs

use super::constants::collapse_constants::{COLLAPSE_THRESHOLD, PI};
use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;

/// Classical value a qubit collapses to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bit {
    /// `|alpha|^2` reached the collapse threshold.
    Zero,
    /// `|alpha|^2` stayed below the collapse threshold.
    One,
}

impl Bit {
    /// Character used for this bit in a bitstring.
    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single two-level state described by the amplitude pair (`alpha`, `beta`).
///
/// Unlike a physical qubit this one never interacts with its neighbours and its
/// collapse is a fixed threshold on `|alpha|^2`, so every operation here is a
/// deterministic function of the current amplitudes.
///
/// Invariant: after every mutating method, `|alpha|^2 + |beta|^2 == 1` up to
/// floating-point rounding. The invariant is restored by [`Qubit::normalize`],
/// not guaranteed by construction, so [`Qubit::from_amplitudes`] accepts any pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Qubit {
    alpha: Complex<f64>,
    beta: Complex<f64>,
}

impl Qubit {
    /// Seeds the qubit at `index` of a `qubit_count` wide register.
    ///
    /// Sets `alpha = e^(iθ)` with `θ = 2π·index/qubit_count` and `beta = i`,
    /// then normalizes. Each position therefore starts with a distinct phase.
    pub fn initialized(index: usize, qubit_count: usize) -> Self {
        let angle = 2.0 * PI * (index as f64) / (qubit_count as f64);
        let mut qubit = Self {
            alpha: Complex::from_polar(1.0, angle),
            beta: Complex::i(),
        };
        qubit.normalize();
        qubit
    }

    /// Builds a qubit from raw amplitudes without normalizing them.
    pub fn from_amplitudes(alpha: Complex<f64>, beta: Complex<f64>) -> Self {
        Self { alpha, beta }
    }

    /// Amplitude of the `'0'` side.
    pub fn alpha(&self) -> Complex<f64> {
        self.alpha
    }

    /// Amplitude of the `'1'` side.
    pub fn beta(&self) -> Complex<f64> {
        self.beta
    }

    /// `|alpha|^2 + |beta|^2`.
    pub fn norm_sqr(&self) -> f64 {
        self.alpha.norm_sqr() + self.beta.norm_sqr()
    }

    /// Rescales both amplitudes to unit total norm.
    ///
    /// The norm is built from the amplitude magnitudes (`hypot`), squared and
    /// summed. Collapse sits exactly on the rounding boundary of `|alpha|^2`,
    /// so this evaluation order fixes the produced bits.
    ///
    /// A zero-norm pair has no direction to keep, so it is reset to the
    /// fallback state `alpha = 1, beta = 0`.
    pub fn normalize(&mut self) {
        let (a, b) = (self.alpha.norm(), self.beta.norm());
        let norm = (a * a + b * b).sqrt();
        if norm == 0.0 {
            self.alpha = Complex::one();
            self.beta = Complex::zero();
            return;
        }
        self.alpha = self.alpha / norm;
        self.beta = self.beta / norm;
    }

    /// Rotates `alpha` by `e^(iθ)` and `beta` by its conjugate, then normalizes.
    ///
    /// This is not a 2x2 unitary acting on the pair; each amplitude is scaled on
    /// its own. The only property callers rely on is that the result is fully
    /// determined by the current state and `theta`.
    pub fn apply_deterministic_gate(&mut self, theta: f64) {
        let phase = Complex::from_polar(1.0, theta);
        self.alpha = self.alpha * phase;
        self.beta = self.beta * phase.conj();
        self.normalize();
    }

    /// Collapses to a classical bit: `Zero` when `Re(alpha·conj(alpha)) >= 0.5`.
    ///
    /// Does not mutate the qubit; repeated calls return the same bit.
    pub fn collapse_bit(&self) -> Bit {
        let real_part = (self.alpha * self.alpha.conj()).re;
        if real_part >= COLLAPSE_THRESHOLD {
            Bit::Zero
        } else {
            Bit::One
        }
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Qubit[{:.4}, {:.4}]", self.alpha, self.beta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    const TEST_TOLERANCE: f64 = 1e-9;

    fn assert_complex_approx_equal(actual: Complex<f64>, expected: Complex<f64>, context: &str) {
        let dist_sq = (actual - expected).norm_sqr();
        assert!(
            dist_sq < TEST_TOLERANCE * TEST_TOLERANCE,
            "Actual: {}, Expected: {}, DistSq: {:.3e}, Context: {}",
            actual, expected, dist_sq, context
        );
    }

    #[test]
    fn test_initialized_is_normalized() {
        for qubit_count in 1..=64 {
            for index in 0..qubit_count {
                let qubit = Qubit::initialized(index, qubit_count);
                assert!(
                    (qubit.norm_sqr() - 1.0).abs() < TEST_TOLERANCE,
                    "qubit {} of {} has norm^2 {}", index, qubit_count, qubit.norm_sqr()
                );
            }
        }
    }

    #[test]
    fn test_initialized_phase_follows_index() {
        // index 1 of 4 -> alpha = e^(iπ/2)/√2 = i/√2, beta = i/√2
        let qubit = Qubit::initialized(1, 4);
        assert_complex_approx_equal(qubit.alpha(), Complex::new(0.0, FRAC_1_SQRT_2), "alpha");
        assert_complex_approx_equal(qubit.beta(), Complex::new(0.0, FRAC_1_SQRT_2), "beta");
    }

    #[test]
    fn test_zero_norm_falls_back_to_basis_state() {
        let mut qubit = Qubit::from_amplitudes(Complex::zero(), Complex::zero());
        qubit.normalize();
        assert_eq!(qubit.alpha(), Complex::new(1.0, 0.0));
        assert_eq!(qubit.beta(), Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_normalize_divides_by_magnitude_based_norm() {
        let (alpha, beta) = (Complex::new(0.3, -1.7), Complex::new(2.9, 0.4));
        let mut qubit = Qubit::from_amplitudes(alpha, beta);
        qubit.normalize();

        let (a, b) = (alpha.re.hypot(alpha.im), beta.re.hypot(beta.im));
        let norm = (a * a + b * b).sqrt();
        assert_eq!(qubit.alpha(), Complex::new(alpha.re / norm, alpha.im / norm));
        assert_eq!(qubit.beta(), Complex::new(beta.re / norm, beta.im / norm));
    }

    #[test]
    fn test_normalize_rescales_without_rotating() {
        let mut qubit = Qubit::from_amplitudes(Complex::new(3.0, 0.0), Complex::new(0.0, 4.0));
        qubit.normalize();
        assert_complex_approx_equal(qubit.alpha(), Complex::new(0.6, 0.0), "alpha");
        assert_complex_approx_equal(qubit.beta(), Complex::new(0.0, 0.8), "beta");
    }

    #[test]
    fn test_gate_rotates_amplitudes_in_opposite_directions() {
        let mut qubit = Qubit::from_amplitudes(Complex::new(0.6, 0.0), Complex::new(0.8, 0.0));
        qubit.apply_deterministic_gate(PI / 2.0);
        assert_complex_approx_equal(qubit.alpha(), Complex::new(0.0, 0.6), "alpha * i");
        assert_complex_approx_equal(qubit.beta(), Complex::new(0.0, -0.8), "beta * -i");
    }

    #[test]
    fn test_gate_is_deterministic() {
        let mut a = Qubit::initialized(3, 7);
        let mut b = Qubit::initialized(3, 7);
        for step in 0..25 {
            let theta = 0.37 * step as f64;
            a.apply_deterministic_gate(theta);
            b.apply_deterministic_gate(theta);
        }
        assert_eq!(a, b);
        assert_eq!(a.collapse_bit(), b.collapse_bit());
    }

    #[test]
    fn test_collapse_threshold() {
        let basis = Qubit::from_amplitudes(Complex::one(), Complex::zero());
        assert_eq!(basis.collapse_bit(), Bit::Zero);

        let empty_alpha = Qubit::from_amplitudes(Complex::zero(), Complex::one());
        assert_eq!(empty_alpha.collapse_bit(), Bit::One);

        // Exactly 0.5 is on the '0' side.
        let half = Qubit::from_amplitudes(Complex::new(0.5, 0.5), Complex::new(0.5, -0.5));
        assert_eq!(half.collapse_bit(), Bit::Zero);
    }

    #[test]
    fn test_collapse_does_not_mutate() {
        let qubit = Qubit::initialized(2, 5);
        let before = qubit;
        let first = qubit.collapse_bit();
        assert_eq!(qubit.collapse_bit(), first);
        assert_eq!(qubit, before);
    }

    #[test]
    fn test_bit_chars() {
        assert_eq!(Bit::Zero.as_char(), '0');
        assert_eq!(Bit::One.to_string(), "1");
    }
}

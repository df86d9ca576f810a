// src/validation/mod.rs

//! Unit-norm checks for qubits and registers.

use crate::core::{CollapseError, Qubit, QubitRegister};

// Default tolerance value (can be overridden by caller)
const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Checks that `|alpha|^2 + |beta|^2 ≈ 1.0`.
///
/// # Arguments
/// * `qubit` - The `Qubit` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to 1e-9.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(CollapseError::Incoherence)` otherwise.
pub fn check_normalization(qubit: &Qubit, tolerance: Option<f64>) -> Result<(), CollapseError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq = qubit.norm_sqr();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(CollapseError::Incoherence {
            message: format!("Qubit normalization failed. |alpha|^2 + |beta|^2 = {} (Deviation > {})", norm_sq, effective_tolerance)
        })
    } else {
        Ok(())
    }
}

/// Checks every qubit of a register, reporting the first one out of tolerance.
pub fn validate_register(register: &QubitRegister, tolerance: Option<f64>) -> Result<(), CollapseError> {
    for (index, qubit) in register.qubits().iter().enumerate() {
        check_normalization(qubit, tolerance).map_err(|err| match err {
            CollapseError::Incoherence { message } => CollapseError::Incoherence {
                message: format!("qubit {}: {}", index, message),
            },
            other => other,
        })?;
    }
    Ok(())
}

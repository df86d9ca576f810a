//! Error handling logic

use std::fmt;
use std::path::PathBuf;

/// Error types raised at the boundaries of the sampler.
///
/// The evolution kernel itself is total: normalizing, rotating and collapsing a
/// qubit never fail. Errors only come from rejected configuration, failed
/// validation checks, and the record sink / filesystem on the output side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollapseError {
    /// The sampler configuration cannot describe a meaningful run
    /// (e.g. a register with zero qubits).
    InvalidConfig {
        /// InvalidConfig failure message
        message: String
    },

    /// A state failed the unit-norm check.
    Incoherence {
        /// Incoherence failure message
        message: String
    },

    /// A record sink refused a record or is no longer usable.
    SinkError {
        /// SinkError failure message
        message: String
    },

    /// Filesystem failure while producing the output table.
    Io {
        /// Path being written when the failure occurred
        path: PathBuf,
        /// Io failure message
        message: String
    },
}

impl CollapseError {
    /// Wraps an `std::io::Error` raised while working on `path`.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        CollapseError::Io { path: path.into(), message: err.to_string() }
    }
}

impl fmt::Display for CollapseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollapseError::InvalidConfig { message } => write!(f, "Invalid Configuration: {}", message),
            CollapseError::Incoherence { message } => write!(f, "Incoherence Violation: {}", message),
            CollapseError::SinkError { message } => write!(f, "Record Sink Error: {}", message),
            CollapseError::Io { path, message } => write!(f, "I/O Error ({}): {}", path.display(), message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for CollapseError {}

// Sinks writing to arbitrary `io::Write` targets have no path to attach.
impl From<std::io::Error> for CollapseError {
    fn from(err: std::io::Error) -> Self {
        CollapseError::SinkError { message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path_for_io_errors() {
        let err = CollapseError::io("out/table.csv", std::io::Error::other("disk full"));
        let rendered = err.to_string();
        assert!(rendered.contains("out/table.csv"), "got: {}", rendered);
        assert!(rendered.contains("disk full"), "got: {}", rendered);
    }

    #[test]
    fn test_plain_io_error_maps_to_sink_error() {
        let err: CollapseError = std::io::Error::other("broken pipe").into();
        assert_eq!(err, CollapseError::SinkError { message: "broken pipe".to_string() });
    }
}

//! Common error infrastructure for air-core.
//!
//! Per-tick attack evaluation never fails: an aircraft that cannot fire is a
//! normal outcome reported through [`crate::AttackVerdict`]. Errors only arise
//! while building rules data (unit tuning, static maps), and every error type
//! in this crate implements [`AirError`] so loaders can classify them uniformly.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Fatal**: Rules data is unusable and loading must abort
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: height override outside the map, bounds larger than the map
    Validation,

    /// Fatal error - rules cannot be loaded.
    ///
    /// Examples: facing tolerance outside [0, 128]
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if loading must be aborted.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all air-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by whether loading can continue, not by impact
pub trait AirError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fatal_aborts() {
        assert!(ErrorSeverity::Fatal.is_fatal());
        assert!(!ErrorSeverity::Validation.is_fatal());
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}

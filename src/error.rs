use thiserror::Error;

/// Errors that can occur when working with MIoT air fryers
#[derive(Error, Debug)]
pub enum FryerError {
    /// A symbolic name has no entry in the device's MIoT mapping table
    ///
    /// This indicates a defect in the crate or its schema data, not a runtime
    /// device condition, and is never worth retrying.
    #[error("no mapping entry for `{name}`")]
    Schema {
        /// Symbolic property or action name that failed to resolve
        name: &'static str,
    },

    /// A command argument is outside its valid domain range
    #[error("{field} out of range: {value} (allowed {min}..={max})")]
    OutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// Value the caller supplied
        value: i64,
        /// Inclusive lower bound
        min: i64,
        /// Inclusive upper bound
        max: i64,
    },

    /// A recipe preset token does not match any known preset
    #[error("unknown recipe preset: {0}")]
    UnknownPreset(String),

    /// The transport failed to reach the device or the device reported failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Command timeout
    #[error("command timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// The device rejected an operation with a non-success MIoT code
    #[error("device error: code {code}")]
    DeviceError {
        /// MIoT result code returned by the device
        code: i32,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("other error: {0}")]
    Other(String),
}

/// Result type for air fryer operations
pub type Result<T> = std::result::Result<T, FryerError>;

impl FryerError {
    /// Check if this error was caused by a bad caller-supplied argument
    ///
    /// Validation errors are raised before any transport I/O takes place and
    /// are never retried automatically.
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::UnknownPreset(_))
    }

    /// Check if this error came from the transport layer
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Timeout { .. } | Self::DeviceError { .. } | Self::Io(_)
        )
    }

    /// Check if this error indicates a schema/programming defect
    #[must_use]
    pub const fn is_schema_error(&self) -> bool {
        matches!(self, Self::Schema { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let range_error = FryerError::OutOfRange {
            field: "target_time",
            value: 1441,
            min: 1,
            max: 1440,
        };
        assert!(range_error.is_validation_error());
        assert!(!range_error.is_transport_error());
        assert!(!range_error.is_schema_error());

        let preset_error = FryerError::UnknownPreset("M9".to_string());
        assert!(preset_error.is_validation_error());
        assert!(!preset_error.is_transport_error());

        let transport_error = FryerError::Transport("connection refused".to_string());
        assert!(transport_error.is_transport_error());
        assert!(!transport_error.is_validation_error());

        let schema_error = FryerError::Schema { name: "bogus" };
        assert!(schema_error.is_schema_error());
        assert!(!schema_error.is_validation_error());
        assert!(!schema_error.is_transport_error());
    }

    #[test]
    fn test_error_display() {
        let error = FryerError::OutOfRange {
            field: "target_temperature",
            value: 201,
            min: 40,
            max: 200,
        };
        let error_string = format!("{error}");
        assert!(error_string.contains("target_temperature"));
        assert!(error_string.contains("201"));
        assert!(error_string.contains("40..=200"));

        let error = FryerError::UnknownPreset("M9".to_string());
        assert!(format!("{error}").contains("M9"));
    }
}

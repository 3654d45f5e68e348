//! Error code sets for each layer
//!
//! Re-exports errchain-core and provides layer-specific constructors.

use std::io;

pub use errchain_core::{error_code, ErrorCode, ErrorRecord, ResultExt};

error_code! {
    /// Failures opening or reading a file
    pub enum ErrorLow {
        /// The file does not exist
        FileNotFound,
        /// The file exists but may not be read
        PermissionDenied,
        /// Any other I/O failure while reading
        ReadFailed,
    }
}

error_code! {
    /// Failures turning a file into a [`Config`](crate::Config)
    pub enum ErrorMid {
        /// The config file could not be obtained from the layer below
        ConfigLoadFailed,
        /// The config file was read but is not valid
        ConfigParseFailed,
    }
}

error_code! {
    /// Failures of a top-level operation
    pub enum ErrorHigh {
        /// The operation could not be carried out
        OperationFailed,
    }
}

/// Result of a low-level file operation
pub type LowResult<T> = errchain_core::Result<T, ErrorLow>;

/// Result of a config operation
pub type MidResult<T> = errchain_core::Result<T, ErrorMid>;

/// Result of a top-level operation
pub type HighResult<T> = errchain_core::Result<T, ErrorHigh>;

// =============================================================================
// Layer-specific error constructors
// =============================================================================

/// Create a low-level error from an I/O failure on `filename`
pub fn from_io(filename: &str, err: &io::Error) -> ErrorRecord<ErrorLow> {
    match err.kind() {
        io::ErrorKind::NotFound => file_not_found(filename),
        io::ErrorKind::PermissionDenied => permission_denied(filename),
        _ => read_failed(filename, err.to_string()),
    }
}

/// Create a FileNotFound error
pub fn file_not_found(filename: &str) -> ErrorRecord<ErrorLow> {
    ErrorRecord::new(ErrorLow::FileNotFound, format!("filename={}", filename))
}

/// Create a PermissionDenied error
pub fn permission_denied(filename: &str) -> ErrorRecord<ErrorLow> {
    ErrorRecord::new(ErrorLow::PermissionDenied, format!("filename={}", filename))
}

/// Create a ReadFailed error
pub fn read_failed(filename: &str, reason: impl Into<String>) -> ErrorRecord<ErrorLow> {
    ErrorRecord::new(
        ErrorLow::ReadFailed,
        format!("filename={}, {}", filename, reason.into()),
    )
}

/// Create a ConfigParseFailed error
pub fn config_parse_failed(path: &str, reason: impl Into<String>) -> ErrorRecord<ErrorMid> {
    ErrorRecord::new(
        ErrorMid::ConfigParseFailed,
        format!("path={}, {}", path, reason.into()),
    )
}

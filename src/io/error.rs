//! Error types for layout configuration, generation and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all layout operations
#[derive(Debug)]
pub enum LayoutError {
    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Strategy or axis identifier is not recognized
    UnsupportedStrategy {
        /// The rejected identifier
        identifier: String,
    },

    /// Scheme60 found no color with remaining quota
    ///
    /// Quotas always sum to at least the hex count, so this indicates
    /// an internal invariant violation rather than bad input.
    QuotaExhausted {
        /// Zone being filled when the quotas ran out
        zone: &'static str,
        /// Hex index that could not be colored
        position: usize,
    },

    /// Failed to save a rendered layout to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl LayoutError {
    /// Whether the error was raised while validating configuration
    ///
    /// Configuration errors are raised before any growth begins and are
    /// distinct from runtime failures.
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::UnsupportedStrategy { .. }
        )
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnsupportedStrategy { identifier } => {
                write!(f, "Unsupported strategy identifier '{identifier}'")
            }
            Self::QuotaExhausted { zone, position } => {
                write!(
                    f,
                    "Color quotas exhausted in {zone} zone at hex {position}"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LayoutError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for layout results
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LayoutError {
    LayoutError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an unsupported strategy error
pub fn unsupported_strategy(identifier: &str) -> LayoutError {
    LayoutError::UnsupportedStrategy {
        identifier: identifier.to_string(),
    }
}

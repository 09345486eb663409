//! Error types for layout configuration and output operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all collage layout operations
///
/// Geometric shortfalls (too many items for the region, an empty outline) are
/// not errors; selection degrades to a shorter result instead.
#[derive(Debug)]
pub enum CollageError {
    /// Configuration value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Target directory holds no usable image files
    NoImages {
        /// Directory that was scanned
        path: PathBuf,
    },

    /// Failed to save the layout preview to disk
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

    /// Settings file could not be parsed
    Settings {
        /// Path of the settings file
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// Placement plan could not be serialized
    Serialization {
        /// Path where the plan was being written
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },
}

impl fmt::Display for CollageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NoImages { path } => {
                write!(f, "No image files found in '{}'", path.display())
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
            Self::Settings { path, source } => {
                write!(f, "Invalid settings file '{}': {source}", path.display())
            }
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Failed to serialize plan for '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CollageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Settings { source, .. } | Self::Serialization { source, .. } => Some(source),
            Self::InvalidParameter { .. } | Self::NoImages { .. } => None,
        }
    }
}

/// Convenience type alias for collage results
pub type Result<T> = std::result::Result<T, CollageError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CollageError {
    CollageError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Attach a path and operation name to an I/O failure
pub trait WithPath<T> {
    /// Convert an I/O error into [`CollageError::FileSystem`] for `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T> {
        self.map_err(|source| CollageError::FileSystem {
            path: path.into(),
            operation,
            source,
        })
    }
}

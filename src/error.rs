//! Error types for surface creation.
//!
//! Construction is all-or-nothing: either a fully initialized surface is
//! returned, or one of these errors is, and nothing is left allocated.

use thiserror::Error;

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, SurfaceError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// A requested dimension was zero, negative or not representable.
    ///
    /// Raised before any memory is touched; the caller can retry with a
    /// corrected size.
    #[error("invalid surface size {width}x{height}: both dimensions must be positive and fit in 32 bits")]
    InvalidSize { width: i64, height: i64 },

    /// The backing store could not be obtained.
    ///
    /// `bytes` is `None` when the byte count itself overflowed.
    #[error("{}", allocation_message(.bytes, .reason))]
    Allocation { bytes: Option<u64>, reason: String },
}

fn allocation_message(bytes: &Option<u64>, reason: &str) -> String {
    match bytes {
        Some(bytes) => format!("failed to allocate {bytes} bytes for surface: {reason}"),
        None => format!("failed to allocate surface: {reason}"),
    }
}

impl SurfaceError {
    pub fn is_invalid_size(&self) -> bool {
        matches!(self, SurfaceError::InvalidSize { .. })
    }

    pub fn is_allocation(&self) -> bool {
        matches!(self, SurfaceError::Allocation { .. })
    }
}

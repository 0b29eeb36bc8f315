//! Error types for the symptom classifier.
//!
//! Every fallible operation in this crate returns [`Result`], whose error side
//! is the [`SymptomError`] enum. Training and inference on well-formed
//! configuration never fail: empty or garbled text is handled by smoothing.
//! Errors are reserved for bad configuration and for persisted models that
//! cannot be trusted.
//!
//! # Examples
//!
//! ```
//! use symptom_nb::error::{Result, SymptomError};
//!
//! fn check_alpha(alpha: f64) -> Result<()> {
//!     if alpha <= 0.0 {
//!         return Err(SymptomError::invalid_config("alpha must be > 0"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_alpha(0.0).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for symptom classifier operations.
#[derive(Error, Debug)]
pub enum SymptomError {
    /// Configuration rejected before any work was done
    /// (vocabulary cap, smoothing constant, category set).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A persisted model carries a format version this build cannot read.
    ///
    /// `found` is the stored version exactly as written in the model, so
    /// negative, fractional and out-of-range values are reported verbatim.
    #[error("Model version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: String },

    /// A persisted model violates a structural invariant.
    #[error("Malformed model: {0}")]
    MalformedModel(String),

    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SymptomError.
pub type Result<T> = std::result::Result<T, SymptomError>;

impl SymptomError {
    /// Create a new invalid configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SymptomError::InvalidConfiguration(msg.into())
    }

    /// Create a new malformed model error.
    pub fn malformed_model<S: Into<String>>(msg: S) -> Self {
        SymptomError::MalformedModel(msg.into())
    }

    /// Create a new version mismatch error.
    pub fn version_mismatch<S: Into<String>>(expected: u32, found: S) -> Self {
        SymptomError::VersionMismatch {
            expected,
            found: found.into(),
        }
    }
}

//! Error Types
//!
//! Failures raised while filling or encoding message values.

use thiserror::Error;

/// Errors produced by the message layer.
#[derive(Error, Debug)]
pub enum MessageError {
    // ========================================================================
    // Encoder Guards
    // ========================================================================
    /// An encoder was asked to fill an output slot that already holds data.
    ///
    /// This always indicates a walker bug, never bad input data.
    #[error("Output slot `{field}` is already populated")]
    SlotAlreadyPopulated {
        /// Name of the message field that was double-filled
        field: &'static str,
    },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// Binary encoding or decoding failed.
    #[error("Binary codec error: {0}")]
    Binary(#[from] bincode::Error),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A decoded message was written with a different schema version.
    #[error("Schema version mismatch: found {found}, expected {expected}")]
    SchemaMismatch {
        /// Version stored in the decoded message
        found: u32,
        /// Version this build understands
        expected: u32,
    },
}

/// Alias for `Result<T, MessageError>`.
pub type Result<T> = std::result::Result<T, MessageError>;

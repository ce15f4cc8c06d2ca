//! Error Types
//!
//! [`ExportError`] covers every condition that aborts an export. Per-entity
//! defects that only skip one entity are reported through
//! [`Diagnostics`](crate::Diagnostics) instead.

use mechlink_host::EntityRef;
use mechlink_message::{MessageError, Uid};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    // ========================================================================
    // Preconditions
    // ========================================================================
    /// The document has never been saved, so it has no stable identity.
    #[error("Document `{name}` must be saved before it can be exported")]
    DocumentNotSaved {
        /// Display name of the unsaved document
        name: String,
    },

    // ========================================================================
    // Host Defects
    // ========================================================================
    /// The host enumerated a key it cannot resolve.
    #[error("Host returned a dangling reference to {0}")]
    MissingEntity(EntityRef),

    /// The identity service handed the same token to two entities.
    #[error("UID {uid} assigned to both {first} and {second}")]
    UidCollision {
        uid: Uid,
        first: EntityRef,
        second: EntityRef,
    },

    /// A joint origin could not be resolved and strict mode is on.
    #[error("Joint `{name}` ({entity}) has no resolvable origin")]
    UnresolvedJointOrigin { name: String, entity: EntityRef },

    // ========================================================================
    // Message & Configuration Errors
    // ========================================================================
    /// Encoding failed; includes the double-fill guard.
    #[error(transparent)]
    Message(#[from] MessageError),

    /// Settings could not be parsed.
    #[error("Invalid export settings: {0}")]
    Settings(#[from] serde_json::Error),
}

impl ExportError {
    /// `true` when the error points at a bug in the walker rather than at the
    /// input design.
    #[must_use]
    pub fn is_programmer_error(&self) -> bool {
        matches!(
            self,
            Self::Message(MessageError::SlotAlreadyPopulated { .. })
        )
    }
}

/// Alias for `Result<T, ExportError>`.
pub type Result<T> = std::result::Result<T, ExportError>;

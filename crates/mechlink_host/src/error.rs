//! Error Types

use thiserror::Error;

use crate::entity::EntityRef;

/// Errors raised while building an in-memory [`Design`](crate::Design).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// A key passed to the builder does not address a live entity.
    #[error("Unknown entity: {0}")]
    UnknownEntity(EntityRef),
}

/// Alias for `Result<T, HostError>`.
pub type Result<T> = std::result::Result<T, HostError>;

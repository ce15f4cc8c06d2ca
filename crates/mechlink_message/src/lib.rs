//! Mechlink Message Schema
//!
//! The outbound artifact handed to the simulation consumer: one immutable
//! [`Document`] per export, made of user metadata, document metadata and a
//! design section holding flat component/joint/material/appearance lists plus
//! a single occurrence tree.
//!
//! # Compatibility
//!
//! Field names, nesting and numeric layout (in particular the row-major
//! transform flattening in [`primitives`]) are shared with the downstream
//! consumer. Any change to them must bump [`SCHEMA_VERSION`].
//!
//! The binary encoding ([`Document::to_bytes`]) is the compatibility surface.
//! The JSON rendering ([`Document::to_json_pretty`]) exists for debugging only.

pub mod codec;
pub mod error;
pub mod pending;
pub mod primitives;
pub mod schema;

pub use error::{MessageError, Result};
pub use pending::Pending;
pub use primitives::{
    TransformLayout, encode_bounding_box, encode_transform, encode_vector3, fill_bounding_box,
    fill_transform,
};
pub use schema::*;

/// Version of the message layout produced by this crate.
pub const SCHEMA_VERSION: u32 = 1;

//! Mechlink Host Interface
//!
//! The read-only view of a CAD design that the exporter walks.
//!
//! - [`DesignSource`]: scene graph accessors returning plain value snapshots
//!   ([`ComponentData`], [`OccurrenceData`], [`JointData`], ...). The exporter
//!   never holds on to host objects, only to these copies and to the
//!   slotmap keys that address them.
//! - [`IdentityService`]: hands out a persisted token per entity and
//!   namespace group, so repeated exports of an unmodified design see the
//!   same identifiers.
//! - [`Design`]: an in-memory host that implements both traits. It backs the
//!   test suite and the demo app, and doubles as the snapshot target for a
//!   live host adapter.

pub mod attributes;
pub mod design;
pub mod entity;
pub mod error;
pub mod records;
pub mod source;

pub use attributes::AttributeStore;
pub use design::Design;
pub use entity::{ComponentKey, EntityKind, EntityRef, JointKey, MeshBodyKey, OccurrenceKey};
pub use error::{HostError, Result};
pub use records::*;
pub use source::{DesignSource, IdentityService};

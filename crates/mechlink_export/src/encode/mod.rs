//! Entity Encoders
//!
//! One encoder per entity kind. Encoders that only copy fields are free
//! functions; encoders that need UIDs are methods on
//! [`ExportPass`](crate::ExportPass) so they share its resolver.

pub mod catalog;
pub mod component;
pub mod joint;
pub mod occurrence;
pub mod pending;

pub use catalog::{encode_appearance, encode_material};
pub use component::encode_physical_properties;
pub use joint::{is_joint_corrupted, resolve_joint_origin};

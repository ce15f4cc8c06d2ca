//! Reserved encoders.
//!
//! Each function here is the single place where its field will be filled
//! once the host side is wired up. Until then they return
//! [`Pending::Unimplemented`] so consumers can tell the field was skipped,
//! not empty.

use mechlink_host::{AppearanceData, JointData, MaterialData, MeshBodyData};
use mechlink_message::{
    AppearanceProperties, Color, JointMotion, MaterialProperties, Pending, TriangleMesh,
};

/// Tessellated body geometry.
// TODO: fill vertices/normals/indices from the host mesh calculator once
// tessellation quality settings are exposed in `ExportSettings`.
#[must_use]
pub fn encode_triangle_mesh(_body: &MeshBodyData) -> Pending<TriangleMesh> {
    Pending::Unimplemented
}

/// Shading properties of an appearance.
// TODO: map the host appearance property table (albedo, roughness, opacity).
#[must_use]
pub fn encode_appearance_properties(_appearance: &AppearanceData) -> Pending<AppearanceProperties> {
    Pending::Unimplemented
}

/// Base colour of an appearance, 8 bits per channel.
// TODO: read the albedo colour property once appearance properties land.
#[must_use]
pub fn encode_color(_appearance: &AppearanceData) -> Pending<Color> {
    Pending::Unimplemented
}

/// Strength properties of a material.
// TODO: the snapshot already carries density, yield and tensile strength;
// enable once the consumer schema agrees on units.
#[must_use]
pub fn encode_material_properties(_material: &MaterialData) -> Pending<MaterialProperties> {
    Pending::Unimplemented
}

/// Joint motion type and limits.
// TODO: add motion type and limit fields to `JointData` and map them here.
#[must_use]
pub fn encode_joint_motion(_joint: &JointData) -> Pending<JointMotion> {
    Pending::Unimplemented
}

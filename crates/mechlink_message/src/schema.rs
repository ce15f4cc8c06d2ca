//! Message types.
//!
//! Plain value structs with no references back into the host. Cross-links
//! between entities are carried as [`Uid`] strings (occurrences, components,
//! joints, mesh bodies) or host-native ids (materials, appearances).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pending::Pending;

/// Stable unique identifier of an exported entity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uid(String);

impl Uid {
    #[inline]
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Uid {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Uid {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

// ============================================================================
// Document
// ============================================================================

/// Root aggregate of one export.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub schema_version: u32,
    pub user_meta: UserMeta,
    pub document_meta: DocumentMeta,
    pub design: Design,
}

/// The user who ran the export.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMeta {
    pub user_name: String,
    pub id: String,
    pub display_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMeta {
    /// Host application version that wrote the document.
    pub format_version: String,
    pub name: String,
    pub version_number: i32,
    pub description: String,
    pub id: String,
}

/// Flat catalogs plus the occurrence tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub components: Vec<Component>,
    pub joints: Vec<Joint>,
    pub materials: Vec<Material>,
    pub appearances: Vec<Appearance>,
    pub hierarchy_root: Occurrence,
}

// ============================================================================
// Entities
// ============================================================================

/// Identity and descriptive fields shared by UID-addressed entities.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub uuid: Uid,
    pub name: String,
    pub description: String,
    pub revision_id: String,
}

/// One placed instance of a component. Children are kept in host
/// enumeration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub header: Header,
    pub is_grounded: bool,
    pub transform: Matrix3D,
    #[serde(rename = "componentUUID")]
    pub component_uuid: Uid,
    pub child_occurrences: Vec<Occurrence>,
}

impl Occurrence {
    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self
            .child_occurrences
            .iter()
            .map(Occurrence::subtree_len)
            .sum::<usize>()
    }

    /// Pre-order iterator over this subtree.
    pub fn iter(&self) -> impl Iterator<Item = &Occurrence> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.child_occurrences.iter().rev());
            Some(node)
        })
    }
}

/// A reusable part or assembly definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub header: Header,
    pub part_number: String,
    pub bounding_box: Option<BoundingBox3D>,
    pub material_id: String,
    pub physical_properties: Option<PhysicalProperties>,
    pub mesh_bodies: Pending<Vec<MeshBody>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshBody {
    pub header: Header,
    pub appearance_id: String,
    pub material_id: String,
    pub physical_properties: Option<PhysicalProperties>,
    pub bounding_box: Option<BoundingBox3D>,
    pub triangle_mesh: Pending<TriangleMesh>,
}

/// Reserved layout for tessellated body geometry. No encoder fills it yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriangleMesh {
    pub vertices: Vec<f64>,
    pub normals: Vec<f64>,
    pub indices: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalProperties {
    pub density: f64,
    pub mass: f64,
    pub volume: f64,
    pub area: f64,
    pub center_of_mass: Vector3D,
}

/// A kinematic constraint between two occurrences.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Joint {
    pub header: Header,
    pub origin: Vector3D,
    pub is_locked: bool,
    pub is_suppressed: bool,
    #[serde(rename = "occurrenceOneUUID")]
    pub occurrence_one_uuid: Uid,
    #[serde(rename = "occurrenceTwoUUID")]
    pub occurrence_two_uuid: Uid,
    pub motion: Pending<JointMotion>,
}

/// Reserved layout for joint motion type and limits.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JointMotion {
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub name: String,
    pub appearance_id: String,
    pub properties: Pending<MaterialProperties>,
}

/// Reserved layout for material strength properties.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialProperties {
    pub density: f64,
    pub yield_strength: f64,
    pub tensile_strength: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    pub id: String,
    pub name: String,
    pub has_texture: bool,
    pub properties: Pending<AppearanceProperties>,
}

/// Reserved layout for appearance shading properties.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceProperties {
    pub albedo: Pending<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

// ============================================================================
// Geometric primitives
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox3D {
    pub max_point: Vector3D,
    pub min_point: Vector3D,
}

/// Flattened transform. Empty means "no transform" (the synthetic root).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Matrix3D {
    pub cells: Vec<f64>,
}

impl Matrix3D {
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

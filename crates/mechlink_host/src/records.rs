//! Snapshot records.
//!
//! Plain copies of the host fields the exporter reads. Cross-references are
//! slotmap keys, never live host objects.

use glam::{DMat4, DVec3};

use crate::entity::{ComponentKey, MeshBodyKey, OccurrenceKey};

// ============================================================================
// Session / document state
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInfo {
    pub user_name: String,
    pub user_id: String,
    pub display_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    pub name: String,
    /// Version of the host application that wrote the document.
    pub version: String,
    /// Durable backing file. `None` until the document has been saved.
    pub data_file: Option<DataFileInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataFileInfo {
    pub id: String,
    pub version_number: i32,
    pub description: String,
}

// ============================================================================
// Scene graph
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    pub min_point: DVec3,
    pub max_point: DVec3,
}

impl BoundingBox {
    #[must_use]
    pub const fn new(min_point: DVec3, max_point: DVec3) -> Self {
        Self {
            min_point,
            max_point,
        }
    }
}

/// Result of a physical-property query.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhysicalPropertiesData {
    pub density: f64,
    pub mass: f64,
    pub volume: f64,
    pub area: f64,
    pub center_of_mass: DVec3,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentData {
    pub name: String,
    pub description: String,
    pub revision_id: String,
    pub part_number: String,
    pub bounding_box: BoundingBox,
    /// Host-native id of the assigned material.
    pub material_id: String,
    pub physical_properties: PhysicalPropertiesData,
    /// Occurrences placed directly inside this component, in host order.
    pub occurrences: Vec<OccurrenceKey>,
    pub mesh_bodies: Vec<MeshBodyKey>,
}

impl ComponentData {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OccurrenceData {
    pub name: String,
    pub is_grounded: bool,
    /// Local-to-parent transform.
    pub transform: DMat4,
    pub component: ComponentKey,
    /// Child occurrences in host enumeration order.
    pub children: Vec<OccurrenceKey>,
}

impl OccurrenceData {
    #[must_use]
    pub fn new(name: impl Into<String>, component: ComponentKey) -> Self {
        Self {
            name: name.into(),
            is_grounded: false,
            transform: DMat4::IDENTITY,
            component,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: DMat4) -> Self {
        self.transform = transform;
        self
    }

    #[must_use]
    pub fn grounded(mut self, is_grounded: bool) -> Self {
        self.is_grounded = is_grounded;
        self
    }
}

/// How one side of a joint stores its origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JointGeometry {
    /// Geometry that exposes its origin directly.
    Direct { origin: DVec3 },
    /// An origin defined as an offset from a base geometry.
    OffsetOrigin { base_origin: DVec3, offset: DVec3 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct JointData {
    pub name: String,
    /// Component that owns the joint. A `None` occurrence side attaches here.
    pub parent_component: ComponentKey,
    pub occurrence_one: Option<OccurrenceKey>,
    pub occurrence_two: Option<OccurrenceKey>,
    /// `None` when the side's geometry cannot be read.
    pub geometry_one: Option<JointGeometry>,
    pub geometry_two: Option<JointGeometry>,
    pub is_locked: bool,
    pub is_suppressed: bool,
}

impl JointData {
    #[must_use]
    pub fn new(name: impl Into<String>, parent_component: ComponentKey) -> Self {
        Self {
            name: name.into(),
            parent_component,
            occurrence_one: None,
            occurrence_two: None,
            geometry_one: None,
            geometry_two: None,
            is_locked: false,
            is_suppressed: false,
        }
    }

    #[must_use]
    pub fn between(
        mut self,
        occurrence_one: Option<OccurrenceKey>,
        occurrence_two: Option<OccurrenceKey>,
    ) -> Self {
        self.occurrence_one = occurrence_one;
        self.occurrence_two = occurrence_two;
        self
    }

    #[must_use]
    pub fn with_geometry(
        mut self,
        geometry_one: Option<JointGeometry>,
        geometry_two: Option<JointGeometry>,
    ) -> Self {
        self.geometry_one = geometry_one;
        self.geometry_two = geometry_two;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBodyData {
    pub name: String,
    pub appearance_id: String,
    pub material_id: String,
    pub physical_properties: PhysicalPropertiesData,
    pub bounding_box: BoundingBox,
}

// ============================================================================
// Catalogs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialData {
    pub id: String,
    pub name: String,
    pub appearance_id: String,
    pub density: f64,
    pub yield_strength: f64,
    pub tensile_strength: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppearanceData {
    pub id: String,
    pub name: String,
    pub has_texture: bool,
}

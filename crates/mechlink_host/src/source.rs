use crate::entity::{ComponentKey, EntityRef, JointKey, MeshBodyKey, OccurrenceKey};
use crate::records::{
    AppearanceData, ComponentData, DocumentInfo, JointData, MaterialData, MeshBodyData,
    OccurrenceData, UserInfo,
};

/// Read-only accessors over a host design.
///
/// Every method returns an owned snapshot, so implementations backed by a
/// live object model can copy fields out and release host objects
/// immediately. Lookups by key return `None` for keys the host no longer
/// knows about.
pub trait DesignSource {
    fn current_user(&self) -> UserInfo;

    fn document(&self) -> DocumentInfo;

    /// The top-level component of the design.
    fn root_component(&self) -> ComponentKey;

    /// Every component definition in the design, each listed once.
    fn all_components(&self) -> Vec<ComponentKey>;

    /// Every joint reachable from the root component, including joints owned
    /// by nested components.
    fn all_joints(&self) -> Vec<JointKey>;

    fn materials(&self) -> Vec<MaterialData>;

    fn appearances(&self) -> Vec<AppearanceData>;

    fn component(&self, key: ComponentKey) -> Option<ComponentData>;

    fn occurrence(&self, key: OccurrenceKey) -> Option<OccurrenceData>;

    fn joint(&self, key: JointKey) -> Option<JointData>;

    fn mesh_body(&self, key: MeshBodyKey) -> Option<MeshBodyData>;
}

/// Persistent per-entity identity tokens.
///
/// Returns the token previously attached to `entity` under `group`, or mints,
/// persists and returns a new one. Calling it repeatedly for the same pair
/// must return the same token.
pub trait IdentityService {
    fn item_id(&self, entity: EntityRef, group: &str) -> String;
}

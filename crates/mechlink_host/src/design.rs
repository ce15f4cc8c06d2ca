//! In-memory design.
//!
//! An arena-backed [`DesignSource`] + [`IdentityService`]. Entities live in
//! slotmaps and reference each other by key; insertion order is kept
//! separately because it is the host enumeration order the exporter must
//! reproduce.

use slotmap::SlotMap;
use uuid::Uuid;

use crate::attributes::AttributeStore;
use crate::entity::{ComponentKey, EntityRef, JointKey, MeshBodyKey, OccurrenceKey};
use crate::error::{HostError, Result};
use crate::records::{
    AppearanceData, ComponentData, DocumentInfo, JointData, MaterialData, MeshBodyData,
    OccurrenceData, UserInfo,
};
use crate::source::{DesignSource, IdentityService};

pub struct Design {
    user: UserInfo,
    document: DocumentInfo,

    root: ComponentKey,
    components: SlotMap<ComponentKey, ComponentData>,
    component_order: Vec<ComponentKey>,
    occurrences: SlotMap<OccurrenceKey, OccurrenceData>,
    joints: SlotMap<JointKey, JointData>,
    joint_order: Vec<JointKey>,
    mesh_bodies: SlotMap<MeshBodyKey, MeshBodyData>,

    materials: Vec<MaterialData>,
    appearances: Vec<AppearanceData>,

    attributes: AttributeStore,
}

impl Design {
    /// Creates an unsaved design whose root component is `root`.
    #[must_use]
    pub fn new(root: ComponentData) -> Self {
        let mut components = SlotMap::with_key();
        let root_key = components.insert(root);
        Self {
            user: UserInfo::default(),
            document: DocumentInfo::default(),
            root: root_key,
            components,
            component_order: vec![root_key],
            occurrences: SlotMap::with_key(),
            joints: SlotMap::with_key(),
            joint_order: Vec::new(),
            mesh_bodies: SlotMap::with_key(),
            materials: Vec::new(),
            appearances: Vec::new(),
            attributes: AttributeStore::new(),
        }
    }

    // ========================================================================
    // Session state
    // ========================================================================

    pub fn set_user(&mut self, user: UserInfo) {
        self.user = user;
    }

    pub fn set_document(&mut self, document: DocumentInfo) {
        self.document = document;
    }

    pub fn document_mut(&mut self) -> &mut DocumentInfo {
        &mut self.document
    }

    #[must_use]
    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    // ========================================================================
    // Construction
    // ========================================================================

    pub fn add_component(&mut self, component: ComponentData) -> ComponentKey {
        let key = self.components.insert(component);
        self.component_order.push(key);
        key
    }

    /// Places an occurrence of `data.component`.
    ///
    /// With `parent == None` the occurrence is a top-level occurrence of the
    /// root component; otherwise it becomes the last child of `parent`.
    pub fn add_occurrence(
        &mut self,
        parent: Option<OccurrenceKey>,
        data: OccurrenceData,
    ) -> Result<OccurrenceKey> {
        if !self.components.contains_key(data.component) {
            return Err(HostError::UnknownEntity(data.component.into()));
        }
        if let Some(parent) = parent {
            if !self.occurrences.contains_key(parent) {
                return Err(HostError::UnknownEntity(parent.into()));
            }
        }

        let key = self.occurrences.insert(data);
        match parent {
            Some(parent) => self.occurrences[parent].children.push(key),
            None => self.components[self.root].occurrences.push(key),
        }
        Ok(key)
    }

    pub fn add_joint(&mut self, joint: JointData) -> Result<JointKey> {
        if !self.components.contains_key(joint.parent_component) {
            return Err(HostError::UnknownEntity(joint.parent_component.into()));
        }
        for side in [joint.occurrence_one, joint.occurrence_two].into_iter().flatten() {
            if !self.occurrences.contains_key(side) {
                return Err(HostError::UnknownEntity(side.into()));
            }
        }
        let key = self.joints.insert(joint);
        self.joint_order.push(key);
        Ok(key)
    }

    pub fn add_mesh_body(
        &mut self,
        component: ComponentKey,
        body: MeshBodyData,
    ) -> Result<MeshBodyKey> {
        let Some(owner) = self.components.get_mut(component) else {
            return Err(HostError::UnknownEntity(component.into()));
        };
        let key = self.mesh_bodies.insert(body);
        owner.mesh_bodies.push(key);
        Ok(key)
    }

    pub fn add_material(&mut self, material: MaterialData) {
        self.materials.push(material);
    }

    pub fn add_appearance(&mut self, appearance: AppearanceData) {
        self.appearances.push(appearance);
    }

    // ========================================================================
    // Mutable access
    // ========================================================================

    /// Direct access to an occurrence. Editing `children` here bypasses the
    /// builder checks, including the ones that keep the graph acyclic.
    pub fn occurrence_mut(&mut self, key: OccurrenceKey) -> Option<&mut OccurrenceData> {
        self.occurrences.get_mut(key)
    }
}

impl DesignSource for Design {
    fn current_user(&self) -> UserInfo {
        self.user.clone()
    }

    fn document(&self) -> DocumentInfo {
        self.document.clone()
    }

    fn root_component(&self) -> ComponentKey {
        self.root
    }

    fn all_components(&self) -> Vec<ComponentKey> {
        self.component_order.clone()
    }

    fn all_joints(&self) -> Vec<JointKey> {
        self.joint_order.clone()
    }

    fn materials(&self) -> Vec<MaterialData> {
        self.materials.clone()
    }

    fn appearances(&self) -> Vec<AppearanceData> {
        self.appearances.clone()
    }

    fn component(&self, key: ComponentKey) -> Option<ComponentData> {
        self.components.get(key).cloned()
    }

    fn occurrence(&self, key: OccurrenceKey) -> Option<OccurrenceData> {
        self.occurrences.get(key).cloned()
    }

    fn joint(&self, key: JointKey) -> Option<JointData> {
        self.joints.get(key).cloned()
    }

    fn mesh_body(&self, key: MeshBodyKey) -> Option<MeshBodyData> {
        self.mesh_bodies.get(key).cloned()
    }
}

impl IdentityService for Design {
    /// Tokens are UUID v5 values of the entity's stable token inside a
    /// namespace derived from `group`, persisted in the attribute store.
    fn item_id(&self, entity: EntityRef, group: &str) -> String {
        self.attributes.get_or_insert_with(entity, group, || {
            let namespace = Uuid::new_v5(&Uuid::NAMESPACE_OID, group.as_bytes());
            let minted = Uuid::new_v5(&namespace, entity.token().as_bytes()).to_string();
            log::debug!("Minted id {minted} for {entity} in group `{group}`");
            minted
        })
    }
}

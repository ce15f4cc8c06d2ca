//! Hierarchy Walker
//!
//! Three independent depth-first walks fill the design section:
//!
//! 1. **Occurrence tree** from a synthetic root built out of the root
//!    component. Children follow host enumeration order; an occurrence that
//!    shows up twice (cycle or shared child) is skipped with a diagnostic.
//! 2. **Components**: the host's full component catalog, once each.
//! 3. **Joints**: every joint reachable from the root, minus corrupted ones.
//!
//! The walks only read the host and write disjoint parts of the output. They
//! run sequentially here because they share the pass's identity resolver.

use mechlink_host::{
    ComponentData, ComponentKey, DesignSource, EntityRef, IdentityService, JointData, JointKey,
    MeshBodyData, MeshBodyKey, OccurrenceData, OccurrenceKey,
};
use mechlink_message::{Appearance, Component, Design, Joint, Material, Occurrence};
use rustc_hash::FxHashSet;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::encode::{encode_appearance, encode_material, is_joint_corrupted};
use crate::error::{ExportError, Result};
use crate::identity::{IdentityResolver, Namespace};
use crate::settings::ExportSettings;

/// State of one export pass over one design.
pub struct ExportPass<'a, S: DesignSource + ?Sized, I: IdentityService + ?Sized> {
    pub(crate) source: &'a S,
    pub(crate) resolver: IdentityResolver<'a, I>,
    pub(crate) settings: &'a ExportSettings,
    pub(crate) diagnostics: Diagnostics,
    visited: FxHashSet<OccurrenceKey>,
}

impl<'a, S, I> ExportPass<'a, S, I>
where
    S: DesignSource + ?Sized,
    I: IdentityService + ?Sized,
{
    pub fn new(source: &'a S, identity: &'a I, settings: &'a ExportSettings) -> Self {
        Self {
            source,
            resolver: IdentityResolver::new(identity, Namespace::new(settings.namespace.clone())),
            settings,
            diagnostics: Diagnostics::new(),
            visited: FxHashSet::default(),
        }
    }

    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    #[must_use]
    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    /// Number of distinct entities that received a UID so far.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.resolver.len()
    }

    /// Runs every walk and returns the filled design section.
    pub fn fill_design(&mut self) -> Result<Design> {
        let components = self.walk_components()?;
        let joints = self.walk_joints()?;
        let materials = self.walk_materials();
        let appearances = self.walk_appearances();
        let hierarchy_root = self.walk_occurrences()?;

        Ok(Design {
            components,
            joints,
            materials,
            appearances,
            hierarchy_root,
        })
    }

    // ========================================================================
    // Occurrence tree
    // ========================================================================

    /// Builds the occurrence tree under the synthetic root. Each call walks
    /// the whole tree again.
    pub fn walk_occurrences(&mut self) -> Result<Occurrence> {
        self.visited.clear();
        let root_key = self.source.root_component();
        let root = self.fetch_component(root_key)?;
        let mut node = self.encode_root_occurrence(root_key, &root)?;

        for child in root.occurrences {
            if let Some(encoded) = self.walk_occurrence(child)? {
                node.child_occurrences.push(encoded);
            }
        }
        log::debug!(
            "Occurrence walk produced {} nodes under `{}`",
            node.subtree_len(),
            node.header.name
        );
        Ok(node)
    }

    fn walk_occurrence(&mut self, key: OccurrenceKey) -> Result<Option<Occurrence>> {
        let data = self.fetch_occurrence(key)?;
        if !self.visited.insert(key) {
            self.diagnostics
                .report(DiagnosticKind::RevisitedOccurrence, key.into(), &data.name);
            return Ok(None);
        }

        let mut node = self.encode_occurrence(key, &data)?;
        for child in &data.children {
            if let Some(encoded) = self.walk_occurrence(*child)? {
                node.child_occurrences.push(encoded);
            }
        }
        Ok(Some(node))
    }

    // ========================================================================
    // Flat catalogs
    // ========================================================================

    pub fn walk_components(&mut self) -> Result<Vec<Component>> {
        self.source
            .all_components()
            .into_iter()
            .map(|key| self.encode_component(key))
            .collect()
    }

    pub fn walk_joints(&mut self) -> Result<Vec<Joint>> {
        let mut joints = Vec::new();
        for key in self.source.all_joints() {
            let data = self.fetch_joint(key)?;
            if is_joint_corrupted(&data) {
                self.diagnostics
                    .report(DiagnosticKind::CorruptedJoint, key.into(), &data.name);
                continue;
            }
            if let Some(joint) = self.encode_joint(key, &data)? {
                joints.push(joint);
            }
        }
        Ok(joints)
    }

    #[must_use]
    pub fn walk_materials(&self) -> Vec<Material> {
        self.source.materials().iter().map(encode_material).collect()
    }

    #[must_use]
    pub fn walk_appearances(&self) -> Vec<Appearance> {
        self.source
            .appearances()
            .iter()
            .map(encode_appearance)
            .collect()
    }

    // ========================================================================
    // Host lookups
    // ========================================================================

    pub(crate) fn fetch_component(&self, key: ComponentKey) -> Result<ComponentData> {
        self.source
            .component(key)
            .ok_or(ExportError::MissingEntity(EntityRef::Component(key)))
    }

    pub(crate) fn fetch_occurrence(&self, key: OccurrenceKey) -> Result<OccurrenceData> {
        self.source
            .occurrence(key)
            .ok_or(ExportError::MissingEntity(EntityRef::Occurrence(key)))
    }

    pub(crate) fn fetch_joint(&self, key: JointKey) -> Result<JointData> {
        self.source
            .joint(key)
            .ok_or(ExportError::MissingEntity(EntityRef::Joint(key)))
    }

    pub(crate) fn fetch_mesh_body(&self, key: MeshBodyKey) -> Result<MeshBodyData> {
        self.source
            .mesh_body(key)
            .ok_or(ExportError::MissingEntity(EntityRef::MeshBody(key)))
    }
}

use mechlink_host::{ComponentData, ComponentKey, DesignSource, IdentityService, OccurrenceData, OccurrenceKey};
use mechlink_message::{Header, Matrix3D, Occurrence, Uid, fill_transform};

use crate::error::Result;
use crate::walker::ExportPass;

impl<S, I> ExportPass<'_, S, I>
where
    S: DesignSource + ?Sized,
    I: IdentityService + ?Sized,
{
    /// Synthesizes the tree root for a component that has no host occurrence.
    ///
    /// The node shares the component's UID, is grounded and carries no
    /// transform. Children are left for the walker.
    pub fn encode_root_occurrence(
        &mut self,
        key: ComponentKey,
        component: &ComponentData,
    ) -> Result<Occurrence> {
        let uid = self.root_occurrence_uid(key)?;
        Ok(Occurrence {
            header: Header {
                uuid: uid.clone(),
                name: component.name.clone(),
                ..Default::default()
            },
            is_grounded: true,
            transform: Matrix3D::default(),
            component_uuid: uid,
            child_occurrences: Vec::new(),
        })
    }

    /// Encodes one occurrence node without its children.
    pub fn encode_occurrence(
        &mut self,
        key: OccurrenceKey,
        data: &OccurrenceData,
    ) -> Result<Occurrence> {
        let mut node = Occurrence {
            header: Header {
                uuid: self.resolver.resolve(key)?,
                name: data.name.clone(),
                ..Default::default()
            },
            is_grounded: data.is_grounded,
            transform: Matrix3D::default(),
            component_uuid: self.resolver.resolve(data.component)?,
            child_occurrences: Vec::new(),
        };
        fill_transform(
            &data.transform,
            self.settings.transform_layout,
            &mut node.transform,
            "occurrence.transform",
        )?;
        Ok(node)
    }

    /// UID of the synthetic root occurrence that stands for `component`.
    pub fn root_occurrence_uid(&mut self, component: ComponentKey) -> Result<Uid> {
        self.resolver.resolve(component)
    }
}

#[cfg(test)]
mod tests {
    use glam::{DMat4, DVec3};
    use mechlink_host::Design;
    use mechlink_message::TransformLayout;

    use super::*;
    use crate::settings::ExportSettings;

    #[test]
    fn root_shares_component_uid() {
        let design = Design::new(ComponentData::named("Assembly"));
        let settings = ExportSettings::default();
        let mut pass = ExportPass::new(&design, &design, &settings);
        let root_key = design.root_component();
        let root_data = design.component(root_key).unwrap();

        let root = pass.encode_root_occurrence(root_key, &root_data).unwrap();
        let component_uid = pass.resolver.resolve(root_key).unwrap();

        assert_eq!(root.header.uuid, component_uid);
        assert_eq!(root.component_uuid, component_uid);
        assert_eq!(root.header.name, "Assembly");
        assert!(root.is_grounded);
        assert!(root.transform.is_empty());
    }

    #[test]
    fn occurrence_transform_uses_configured_layout() {
        let mut design = Design::new(ComponentData::named("Root"));
        let part = design.add_component(ComponentData::named("Part"));
        let data = OccurrenceData::new("p", part)
            .with_transform(DMat4::from_translation(DVec3::new(1.0, 2.0, 3.0)))
            .grounded(true);
        let key = design.add_occurrence(None, data.clone()).unwrap();
        let settings = ExportSettings {
            transform_layout: TransformLayout::Rows3x4,
            ..Default::default()
        };
        let mut pass = ExportPass::new(&design, &design, &settings);

        let node = pass.encode_occurrence(key, &data).unwrap();

        assert_eq!(node.transform.cells.len(), 12);
        assert_eq!(node.transform.cells[3], 1.0);
        assert_eq!(node.transform.cells[11], 3.0);
        assert!(node.is_grounded);
        assert_eq!(node.component_uuid, pass.resolver.resolve(part).unwrap());
        assert_ne!(node.header.uuid, node.component_uuid);
    }
}

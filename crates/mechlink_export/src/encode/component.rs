use mechlink_host::{ComponentKey, DesignSource, IdentityService, MeshBodyKey, PhysicalPropertiesData};
use mechlink_message::{
    Component, Header, MeshBody, Pending, PhysicalProperties, encode_vector3, fill_bounding_box,
};

use super::pending::encode_triangle_mesh;
use crate::error::Result;
use crate::walker::ExportPass;

#[must_use]
pub fn encode_physical_properties(physical: &PhysicalPropertiesData) -> PhysicalProperties {
    PhysicalProperties {
        density: physical.density,
        mass: physical.mass,
        volume: physical.volume,
        area: physical.area,
        center_of_mass: encode_vector3(physical.center_of_mass),
    }
}

impl<S, I> ExportPass<'_, S, I>
where
    S: DesignSource + ?Sized,
    I: IdentityService + ?Sized,
{
    pub fn encode_component(&mut self, key: ComponentKey) -> Result<Component> {
        let data = self.fetch_component(key)?;

        let mut component = Component {
            header: Header {
                uuid: self.resolver.resolve(key)?,
                name: data.name,
                description: data.description,
                revision_id: data.revision_id,
            },
            part_number: data.part_number,
            bounding_box: None,
            material_id: data.material_id,
            physical_properties: Some(encode_physical_properties(&data.physical_properties)),
            mesh_bodies: Pending::Unimplemented,
        };
        fill_bounding_box(
            data.bounding_box.min_point,
            data.bounding_box.max_point,
            &mut component.bounding_box,
            "component.boundingBox",
        )?;

        if self.settings.include_mesh_bodies {
            let bodies = data
                .mesh_bodies
                .into_iter()
                .map(|body| self.encode_mesh_body(body))
                .collect::<Result<Vec<_>>>()?;
            component.mesh_bodies = Pending::Ready(bodies);
        }
        Ok(component)
    }

    pub fn encode_mesh_body(&mut self, key: MeshBodyKey) -> Result<MeshBody> {
        let data = self.fetch_mesh_body(key)?;

        let mut body = MeshBody {
            header: Header {
                uuid: self.resolver.resolve(key)?,
                name: data.name.clone(),
                ..Default::default()
            },
            appearance_id: data.appearance_id.clone(),
            material_id: data.material_id.clone(),
            physical_properties: Some(encode_physical_properties(&data.physical_properties)),
            bounding_box: None,
            triangle_mesh: encode_triangle_mesh(&data),
        };
        fill_bounding_box(
            data.bounding_box.min_point,
            data.bounding_box.max_point,
            &mut body.bounding_box,
            "meshBody.boundingBox",
        )?;
        Ok(body)
    }
}

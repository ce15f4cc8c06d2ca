use mechlink_host::{AppearanceData, MaterialData};
use mechlink_message::{Appearance, Material};

use super::pending::{encode_appearance_properties, encode_material_properties};

/// Materials keep their host-native id.
#[must_use]
pub fn encode_material(material: &MaterialData) -> Material {
    Material {
        id: material.id.clone(),
        name: material.name.clone(),
        appearance_id: material.appearance_id.clone(),
        properties: encode_material_properties(material),
    }
}

/// Appearances keep their host-native id.
#[must_use]
pub fn encode_appearance(appearance: &AppearanceData) -> Appearance {
    Appearance {
        id: appearance.id.clone(),
        name: appearance.name.clone(),
        has_texture: appearance.has_texture,
        properties: encode_appearance_properties(appearance),
    }
}

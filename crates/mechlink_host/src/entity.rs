use std::fmt;

use slotmap::{Key, new_key_type};

new_key_type! {
    pub struct ComponentKey;
    pub struct OccurrenceKey;
    pub struct JointKey;
    pub struct MeshBodyKey;
}

/// Kind tag of a UID-addressed entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Component,
    Occurrence,
    Joint,
    MeshBody,
}

impl EntityKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Occurrence => "occurrence",
            Self::Joint => "joint",
            Self::MeshBody => "mesh_body",
        }
    }
}

/// Opaque handle to one host entity that can receive a UID.
///
/// Materials and appearances are not listed here: they carry host-native
/// ids that are reused verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Component(ComponentKey),
    Occurrence(OccurrenceKey),
    Joint(JointKey),
    MeshBody(MeshBodyKey),
}

impl EntityRef {
    #[must_use]
    pub const fn kind(self) -> EntityKind {
        match self {
            Self::Component(_) => EntityKind::Component,
            Self::Occurrence(_) => EntityKind::Occurrence,
            Self::Joint(_) => EntityKind::Joint,
            Self::MeshBody(_) => EntityKind::MeshBody,
        }
    }

    /// Stable textual token for this handle, unique across kinds.
    #[must_use]
    pub fn token(self) -> String {
        let raw = match self {
            Self::Component(k) => k.data().as_ffi(),
            Self::Occurrence(k) => k.data().as_ffi(),
            Self::Joint(k) => k.data().as_ffi(),
            Self::MeshBody(k) => k.data().as_ffi(),
        };
        format!("{}/{raw:016x}", self.kind().as_str())
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

impl From<ComponentKey> for EntityRef {
    fn from(key: ComponentKey) -> Self {
        Self::Component(key)
    }
}

impl From<OccurrenceKey> for EntityRef {
    fn from(key: OccurrenceKey) -> Self {
        Self::Occurrence(key)
    }
}

impl From<JointKey> for EntityRef {
    fn from(key: JointKey) -> Self {
        Self::Joint(key)
    }
}

impl From<MeshBodyKey> for EntityRef {
    fn from(key: MeshBodyKey) -> Self {
        Self::MeshBody(key)
    }
}

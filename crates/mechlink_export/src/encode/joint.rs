use glam::DVec3;
use mechlink_host::{
    ComponentKey, DesignSource, EntityRef, IdentityService, JointData, JointGeometry, JointKey,
    OccurrenceKey,
};
use mechlink_message::{Header, Joint, Uid, encode_vector3};

use super::pending::encode_joint_motion;
use crate::diagnostics::DiagnosticKind;
use crate::error::{ExportError, Result};
use crate::walker::ExportPass;

/// A joint with no occurrence on either side cannot be attached to
/// anything. One absent side is fine: it means the parent component.
#[must_use]
pub fn is_joint_corrupted(joint: &JointData) -> bool {
    joint.occurrence_one.is_none() && joint.occurrence_two.is_none()
}

/// World origin of a joint from its two geometry sides.
///
/// Precedence: direct geometry on side one, direct geometry on side two,
/// offset origin on side two, offset origin on side one. An offset origin
/// resolves to `base_origin + offset`. Returns `None` when neither side is
/// readable.
///
/// The offset formula has not been checked against the host's own joint
/// placement; callers go through this function so it can be corrected in
/// one place.
#[must_use]
pub fn resolve_joint_origin(
    one: Option<&JointGeometry>,
    two: Option<&JointGeometry>,
) -> Option<DVec3> {
    match (one, two) {
        (Some(JointGeometry::Direct { origin }), _) | (_, Some(JointGeometry::Direct { origin })) => {
            Some(*origin)
        }
        (_, Some(JointGeometry::OffsetOrigin { base_origin, offset }))
        | (Some(JointGeometry::OffsetOrigin { base_origin, offset }), None) => {
            Some(*base_origin + *offset)
        }
        (None, None) => None,
    }
}

impl<S, I> ExportPass<'_, S, I>
where
    S: DesignSource + ?Sized,
    I: IdentityService + ?Sized,
{
    /// Encodes a joint that already passed the corruption filter.
    ///
    /// Returns `Ok(None)` when the origin cannot be resolved and strict mode
    /// is off; the joint is then reported and left out.
    pub fn encode_joint(&mut self, key: JointKey, data: &JointData) -> Result<Option<Joint>> {
        let Some(origin) = resolve_joint_origin(data.geometry_one.as_ref(), data.geometry_two.as_ref())
        else {
            if self.settings.strict_joint_origins {
                return Err(ExportError::UnresolvedJointOrigin {
                    name: data.name.clone(),
                    entity: EntityRef::Joint(key),
                });
            }
            self.diagnostics
                .report(DiagnosticKind::UnresolvedJointOrigin, key.into(), &data.name);
            return Ok(None);
        };

        Ok(Some(Joint {
            header: Header {
                uuid: self.resolver.resolve(key)?,
                name: data.name.clone(),
                ..Default::default()
            },
            origin: encode_vector3(origin),
            is_locked: data.is_locked,
            is_suppressed: data.is_suppressed,
            occurrence_one_uuid: self.joint_side_uid(data.occurrence_one, data.parent_component)?,
            occurrence_two_uuid: self.joint_side_uid(data.occurrence_two, data.parent_component)?,
            motion: encode_joint_motion(data),
        }))
    }

    /// UID a joint side points at. An absent side attaches to the parent
    /// component's synthetic root occurrence.
    fn joint_side_uid(&mut self, side: Option<OccurrenceKey>, parent: ComponentKey) -> Result<Uid> {
        match side {
            Some(occurrence) => self.resolver.resolve(occurrence),
            None => self.root_occurrence_uid(parent),
        }
    }
}

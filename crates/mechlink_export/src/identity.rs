//! Identity Resolver
//!
//! Maps entity handles to [`Uid`]s for one export pass.
//!
//! - The host [`IdentityService`] is asked at most once per entity; later
//!   lookups hit the pass-local memo table.
//! - A reverse table checks that no two entities share a UID. A collision
//!   aborts the export because every cross-reference in the message would
//!   become ambiguous.
//!
//! The memo tables are owned by the resolver, and a resolver is owned by one
//! [`ExportPass`](crate::ExportPass), so concurrent exports of different
//! documents never see each other's assignments.

use std::fmt;

use mechlink_host::{EntityRef, IdentityService};
use mechlink_message::Uid;
use rustc_hash::FxHashMap;

use crate::error::{ExportError, Result};

/// Namespace tag under which identities are requested.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub struct IdentityResolver<'a, I: IdentityService + ?Sized> {
    service: &'a I,
    namespace: Namespace,
    assigned: FxHashMap<EntityRef, Uid>,
    owners: FxHashMap<Uid, EntityRef>,
}

impl<'a, I: IdentityService + ?Sized> IdentityResolver<'a, I> {
    pub fn new(service: &'a I, namespace: Namespace) -> Self {
        Self {
            service,
            namespace,
            assigned: FxHashMap::default(),
            owners: FxHashMap::default(),
        }
    }

    /// UID of `entity` within this pass.
    pub fn resolve(&mut self, entity: impl Into<EntityRef>) -> Result<Uid> {
        let entity = entity.into();
        if let Some(uid) = self.assigned.get(&entity) {
            return Ok(uid.clone());
        }

        let uid = Uid::from(self.service.item_id(entity, self.namespace.as_str()));
        if let Some(&first) = self.owners.get(&uid) {
            log::error!("Identity service returned {uid} for both {first} and {entity}");
            return Err(ExportError::UidCollision {
                uid,
                first,
                second: entity,
            });
        }

        self.owners.insert(uid.clone(), entity);
        self.assigned.insert(entity, uid.clone());
        Ok(uid)
    }

    /// Number of distinct entities resolved so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

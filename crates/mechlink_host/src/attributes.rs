use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::entity::EntityRef;

#[derive(Default)]
struct AttributeInner {
    /// (entity, group) -> attached value
    values: FxHashMap<(EntityRef, String), String>,
}

/// Named attributes attached to design entities.
///
/// Models the host's per-entity attribute groups: the identity service keeps
/// its tokens here so they survive between export passes over the same
/// design. Interior mutability lets read-only walkers mint tokens through a
/// shared reference.
#[derive(Default)]
pub struct AttributeStore {
    inner: RwLock<AttributeInner>,
}

impl AttributeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// [Read] Value attached to `entity` under `group`.
    pub fn get(&self, entity: EntityRef, group: &str) -> Option<String> {
        let guard = self.inner.read();
        guard.values.get(&(entity, group.to_owned())).cloned()
    }

    /// [Write] Returns the attached value, creating it with `make` if absent.
    pub fn get_or_insert_with(
        &self,
        entity: EntityRef,
        group: &str,
        make: impl FnOnce() -> String,
    ) -> String {
        let key = (entity, group.to_owned());
        if let Some(value) = self.inner.read().values.get(&key) {
            return value.clone();
        }
        let mut guard = self.inner.write();
        // Another writer may have won the race between the two locks.
        guard.values.entry(key).or_insert_with(make).clone()
    }

    /// [Write] Drops every value in `group`. Returns how many were removed.
    pub fn remove_group(&self, group: &str) -> usize {
        let mut guard = self.inner.write();
        let before = guard.values.len();
        guard.values.retain(|(_, g), _| g != group);
        before - guard.values.len()
    }

    pub fn len(&self) -> usize {
        self.inner.read().values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

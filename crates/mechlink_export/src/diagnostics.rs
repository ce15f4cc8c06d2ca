//! Per-entity defects collected during an export.
//!
//! Each report is also logged at `warn` level as it happens.

use std::fmt;

use mechlink_host::EntityRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Both occurrence sides of a joint are absent.
    CorruptedJoint,
    /// Neither joint side carries a usable origin.
    UnresolvedJointOrigin,
    /// An occurrence showed up a second time while walking the tree, either
    /// through a cycle or through two parents.
    RevisitedOccurrence,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CorruptedJoint => "ignoring corrupted joint (no occurrence on either side)",
            Self::UnresolvedJointOrigin => "ignoring joint with unresolvable origin",
            Self::RevisitedOccurrence => "ignoring occurrence already present in the tree",
        })
    }
}

/// One skipped entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub entity: EntityRef,
    /// Host display name of the entity.
    pub name: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: `{}` ({})", self.kind, self.name, self.entity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, kind: DiagnosticKind, entity: EntityRef, name: impl Into<String>) {
        let diagnostic = Diagnostic {
            kind,
            entity,
            name: name.into(),
        };
        log::warn!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    #[must_use]
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

use serde::{Deserialize, Serialize};

/// A message field whose encoder is a reserved extension point.
///
/// Consumers must be able to tell "absent because not implemented yet" apart
/// from "present but empty". A field typed `Pending<Vec<T>>` therefore has
/// three observable states: `Unimplemented`, `Ready(vec![])` and
/// `Ready(vec![..])`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Pending<T> {
    #[default]
    Unimplemented,
    Ready(T),
}

impl<T> Pending<T> {
    #[inline]
    #[must_use]
    pub fn is_unimplemented(&self) -> bool {
        matches!(self, Self::Unimplemented)
    }

    #[inline]
    #[must_use]
    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Self::Unimplemented => None,
            Self::Ready(value) => Some(value),
        }
    }
}

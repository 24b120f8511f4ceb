use crate::model::RowId;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// GroupMarker
///
/// Structural identity of a group family: the row kind tag plus the id of
/// the anchor whose group the row belongs to. Compared field-wise; two
/// markers are the same family only when both components match, so tag
/// collisions across anchors cannot occur.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GroupMarker {
    tag: String,
    anchor: RowId,
}

impl GroupMarker {
    #[must_use]
    pub fn new(tag: impl Into<String>, anchor: RowId) -> Self {
        Self {
            tag: tag.into(),
            anchor,
        }
    }

    /// Return the family's kind tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Return the id of the anchor that defines this family.
    #[must_use]
    pub const fn anchor(&self) -> RowId {
        self.anchor
    }
}

impl fmt::Display for GroupMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.tag, self.anchor)
    }
}

///
/// TESTS
///

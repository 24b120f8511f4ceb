use crate::model::{GroupMarker, OrderKey, RowId, Scope};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

///
/// RowKind
///
/// Classification of a row as seen by the grouping passes. Anything the
/// scanner does not need to understand stays opaque behind `Plain`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RowKind {
    /// Belongs to the group family identified by the marker. Both anchors
    /// and members carry their family's marker.
    Grouped(GroupMarker),

    /// Indirection row standing in for the listed target rows.
    Shortcut(Vec<RowId>),

    /// Content of any other kind, opaque to grouping.
    Plain(String),
}

///
/// Row
///
/// One record of the ordered content collection. Read-only from the point
/// of view of this crate; rows are produced by a [`RowStore`] over a
/// point-in-time view of the collection.
///
/// `item_limit` bounds the total size of the row's group (anchor
/// included). Grouped rows of one family all carry the family's limit,
/// which is what lets the backward scan apply it from a non-anchor row.
///
/// [`RowStore`]: crate::store::RowStore
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Row {
    pub id: RowId,
    pub scope: Scope,
    pub order_key: OrderKey,
    pub kind: RowKind,

    /// This row starts a new group, even inside a run of same-family rows.
    pub group_start: bool,

    /// Maximum total rows in this row's group; `None` means unlimited.
    pub item_limit: Option<NonZeroU32>,
}

impl Row {
    /// Return the group-family marker, if this row is a grouped row.
    #[must_use]
    pub const fn marker(&self) -> Option<&GroupMarker> {
        match &self.kind {
            RowKind::Grouped(marker) => Some(marker),
            RowKind::Shortcut(_) | RowKind::Plain(_) => None,
        }
    }

    /// Return the shortcut target ids, if this row is an indirection.
    #[must_use]
    pub fn shortcut_targets(&self) -> Option<&[RowId]> {
        match &self.kind {
            RowKind::Shortcut(targets) => Some(targets),
            RowKind::Grouped(_) | RowKind::Plain(_) => None,
        }
    }

    #[must_use]
    pub const fn is_shortcut(&self) -> bool {
        matches!(self.kind, RowKind::Shortcut(_))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContainerId, Zone};

    fn scope() -> Scope {
        Scope::new(ContainerId::new(1), Zone::new(0))
    }

    #[test]
    fn marker_accessor_is_none_for_non_grouped_rows() {
        let row = Row {
            id: RowId::new(1),
            scope: scope(),
            order_key: OrderKey::new(10),
            kind: RowKind::Plain("text".to_string()),
            group_start: false,
            item_limit: None,
        };
        assert!(row.marker().is_none());
        assert!(!row.is_shortcut());
    }

    #[test]
    fn shortcut_targets_preserve_declaration_order() {
        let row = Row {
            id: RowId::new(2),
            scope: scope(),
            order_key: OrderKey::new(20),
            kind: RowKind::Shortcut(vec![RowId::new(9), RowId::new(3)]),
            group_start: false,
            item_limit: None,
        };
        assert_eq!(
            row.shortcut_targets(),
            Some(&[RowId::new(9), RowId::new(3)][..])
        );
    }
}

//! Test-only fixtures: an in-memory `RowStore` over a sorted row list and
//! a stub `Renderer` with scriptable failures.

use crate::{
    error::InternalError,
    model::{Row, RowId},
    render::{RenderError, Renderer},
    store::{KeyBound, OrderDirection, RowStore, ScanPlan},
};
use std::{cell::Cell, collections::HashSet};

///
/// MemoryStore
///
/// Point-in-time view over a fixed row list, kept in natural order
/// (scope, then order key). Counts reads so tests can assert on store
/// traffic.
///

#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    rows: Vec<Row>,
    scan_calls: Cell<usize>,
    fetch_calls: Cell<usize>,
}

impl MemoryStore {
    pub(crate) fn with_rows(mut rows: Vec<Row>) -> Self {
        rows.sort_by_key(|row| (row.scope.container, row.scope.zone, row.order_key));
        Self {
            rows,
            scan_calls: Cell::new(0),
            fetch_calls: Cell::new(0),
        }
    }

    /// Clone the stored row with this id; panics when absent.
    pub(crate) fn row(&self, id: u64) -> Row {
        self.rows
            .iter()
            .find(|row| row.id == RowId::new(id))
            .cloned()
            .unwrap_or_else(|| panic!("fixture row {id} not in store"))
    }

    pub(crate) fn scan_calls(&self) -> usize {
        self.scan_calls.get()
    }

    pub(crate) fn fetch_calls(&self) -> usize {
        self.fetch_calls.get()
    }
}

impl RowStore for MemoryStore {
    fn scan(&self, plan: &ScanPlan) -> Result<Vec<Row>, InternalError> {
        self.scan_calls.set(self.scan_calls.get() + 1);

        let mut hits: Vec<Row> = self
            .rows
            .iter()
            .filter(|row| row.scope == plan.scope)
            .filter(|row| match plan.bound {
                KeyBound::Above(key) => row.order_key > key,
                KeyBound::Below(key) => row.order_key < key,
            })
            .filter(|row| plan.exclude != Some(row.id))
            .cloned()
            .collect();

        if plan.direction() == OrderDirection::Desc {
            hits.reverse();
        }
        if let Some(limit) = plan.limit {
            hits.truncate(limit as usize);
        }

        Ok(hits)
    }

    fn fetch_by_ids(&self, ids: &[RowId]) -> Result<Vec<Row>, InternalError> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);

        let wanted: HashSet<RowId> = ids.iter().copied().collect();
        Ok(self
            .rows
            .iter()
            .filter(|row| wanted.contains(&row.id))
            .cloned()
            .collect())
    }
}

///
/// StubRenderer
///
/// Renders every row to a label unless the row id is scripted to fail.
///

#[derive(Debug, Default)]
pub(crate) struct StubRenderer {
    failing: HashSet<RowId>,
}

impl StubRenderer {
    pub(crate) fn failing_for(ids: &[u64]) -> Self {
        Self {
            failing: ids.iter().map(|id| RowId::new(*id)).collect(),
        }
    }
}

impl Renderer for StubRenderer {
    type Unit = String;

    fn render(&self, row: &Row, anchor: &Row) -> Result<Self::Unit, RenderError> {
        if self.failing.contains(&row.id) {
            return Err(RenderError::new(row.id, "stub failure"));
        }
        Ok(format!("{}@{}", row.id, anchor.id))
    }
}

///
/// rows
/// Fixture rows in the default test scope.
///

pub(crate) mod rows {
    use crate::model::{ContainerId, GroupMarker, OrderKey, Row, RowId, RowKind, Scope, Zone};

    pub(crate) const TAG: &str = "grouped";

    pub(crate) fn scope() -> Scope {
        Scope::new(ContainerId::new(1), Zone::new(0))
    }

    fn base(id: u64, key: i64, kind: RowKind) -> Row {
        Row {
            id: RowId::new(id),
            scope: scope(),
            order_key: OrderKey::new(key),
            kind,
            group_start: false,
            item_limit: None,
        }
    }

    /// A group-start row carrying its own family marker.
    pub(crate) fn anchor(id: u64, key: i64) -> Row {
        let mut row = base(
            id,
            key,
            RowKind::Grouped(GroupMarker::new(TAG, RowId::new(id))),
        );
        row.group_start = true;
        row
    }

    /// A member of `anchor_id`'s family, without a start flag.
    pub(crate) fn member(id: u64, key: i64, anchor_id: u64) -> Row {
        base(
            id,
            key,
            RowKind::Grouped(GroupMarker::new(TAG, RowId::new(anchor_id))),
        )
    }

    /// A family member with an explicit tag, without a start flag.
    pub(crate) fn family_member(id: u64, key: i64, tag: &str, anchor_id: u64) -> Row {
        base(
            id,
            key,
            RowKind::Grouped(GroupMarker::new(tag, RowId::new(anchor_id))),
        )
    }

    pub(crate) fn plain(id: u64, key: i64) -> Row {
        base(id, key, RowKind::Plain("text".to_string()))
    }

    pub(crate) fn shortcut(id: u64, key: i64, targets: &[u64]) -> Row {
        base(
            id,
            key,
            RowKind::Shortcut(targets.iter().map(|id| RowId::new(*id)).collect()),
        )
    }
}

use crate::{
    error::InternalError,
    model::{OrderKey, Row, RowId, Scope},
};

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

///
/// KeyBound
///
/// Exclusive order-key bound for a scan. `Above` walks away from the bound
/// ascending, `Below` descending; the direction is implied, so invalid
/// bound/direction combinations cannot be expressed.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyBound {
    Above(OrderKey),
    Below(OrderKey),
}

///
/// ScanPlan
///
/// Declarative shape of one ordered store read: scope, exclusive key
/// bound, optional excluded row, optional row cap. The store owns
/// enabled-row filtering; rows excluded by host configuration must never
/// appear in a scan result.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScanPlan {
    pub scope: Scope,
    pub bound: KeyBound,
    pub exclude: Option<RowId>,
    pub limit: Option<u32>,
}

impl ScanPlan {
    /// Plan the forward candidate fetch for a group anchor: same scope,
    /// keys strictly after the anchor, the anchor itself excluded, capped
    /// at `item_limit - 1` rows when a limit is set.
    #[must_use]
    pub fn after(anchor: &Row) -> Self {
        Self {
            scope: anchor.scope,
            bound: KeyBound::Above(anchor.order_key),
            exclude: Some(anchor.id),
            limit: anchor.item_limit.map(|limit| limit.get() - 1),
        }
    }

    /// Plan the backward fetch for anchor discovery: same scope, keys
    /// strictly before the row, no cap. Truncation at the first
    /// group-start row happens in the scanner, not the store.
    #[must_use]
    pub const fn before(row: &Row) -> Self {
        Self {
            scope: row.scope,
            bound: KeyBound::Below(row.order_key),
            exclude: None,
            limit: None,
        }
    }

    /// Return the scan direction implied by the key bound.
    #[must_use]
    pub const fn direction(&self) -> OrderDirection {
        match self.bound {
            KeyBound::Above(_) => OrderDirection::Asc,
            KeyBound::Below(_) => OrderDirection::Desc,
        }
    }
}

///
/// RowStore
///
/// Read-only access to the ordered content collection. Implementations
/// are host-provided; this crate never mutates the collection.
///

pub trait RowStore {
    /// Execute one ordered scan. Results are ordered by `order_key` in the
    /// plan's direction, restricted to the plan's scope and bound, with
    /// `exclude` omitted and at most `limit` rows returned (`Some(0)`
    /// yields an empty result).
    fn scan(&self, plan: &ScanPlan) -> Result<Vec<Row>, InternalError>;

    /// Fetch rows by id, in the store's natural order (not the order of
    /// `ids`). Unknown ids are silently omitted.
    fn fetch_by_ids(&self, ids: &[RowId]) -> Result<Vec<Row>, InternalError>;
}

///
/// TESTS
///

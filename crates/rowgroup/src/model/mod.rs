//! Data model: boundary id newtypes, scopes, and the row record the
//! grouping passes operate on.

pub mod marker;
pub mod row;

pub use marker::GroupMarker;
pub use row::{Row, RowKind};

use derive_more::{Deref, Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// RowId
///
/// Typed identifier for one row of the content collection.
///
/// A boundary type: prevents accidental mixing with container ids or
/// order keys at call sites. Serializes identically to `u64`.
///

#[repr(transparent)]
#[derive(
    Clone,
    Copy,
    Debug,
    Deref,
    Deserialize,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct RowId(u64);

impl RowId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Return the underlying primitive id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

///
/// ContainerId
///
/// Identifier of the parent container a row lives in (a page, region, or
/// similar host-defined collection).
///

#[repr(transparent)]
#[derive(
    Clone,
    Copy,
    Debug,
    Deref,
    Deserialize,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct ContainerId(u64);

impl ContainerId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

///
/// Zone
///
/// Column group within a container (e.g. a layout column). Ordering and
/// grouping are only meaningful inside one zone of one container.
///

#[repr(transparent)]
#[derive(
    Clone,
    Copy,
    Debug,
    Deref,
    Deserialize,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Zone(i32);

impl Zone {
    #[must_use]
    pub const fn new(zone: i32) -> Self {
        Self(zone)
    }
}

///
/// OrderKey
///
/// Orderable position of a row within its scope. Keys are only compared
/// between rows of the same scope; absolute values carry no meaning.
///

#[repr(transparent)]
#[derive(
    Clone,
    Copy,
    Debug,
    Deref,
    Deserialize,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct OrderKey(i64);

impl OrderKey {
    #[must_use]
    pub const fn new(key: i64) -> Self {
        Self(key)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

///
/// Scope
///
/// The `(container, zone)` pair grouping is evaluated within. Rows from
/// different scopes never belong to the same group.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Scope {
    pub container: ContainerId,
    pub zone: Zone,
}

impl Scope {
    #[must_use]
    pub const fn new(container: ContainerId, zone: Zone) -> Self {
        Self { container, zone }
    }
}

///
/// TESTS
///

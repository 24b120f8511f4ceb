//! rowgroup: resolves which rows of an ordered content collection belong
//! to the logical group anchored at a given row.
//!
//! The grouping rules are a linear scan with indirection: explicit
//! group-start flags and family markers bound the group, shortcut rows
//! are expanded in place one level deep, optional item limits cap the
//! fetch, and a caller-owned registry tracks which rows the surrounding
//! render pipeline has already consumed.
//!
//! Storage ([`store::RowStore`]) and member materialization
//! ([`render::Renderer`]) stay host-provided; this crate assumes a
//! read-only, point-in-time ordered view of the collection and runs
//! single-threaded with no suspension points.

pub mod error;
pub mod group;
pub mod model;
pub mod obs;
pub mod registry;
pub mod render;
pub mod store;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Domain vocabulary plus the operative surface. No sinks, counters, or
/// internal helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        error::InternalError,
        group::{
            BuildConfig, Group, GroupBuilder, GroupMember, GroupScanner, RenderFailurePolicy,
            ShortcutResolver,
        },
        model::{ContainerId, GroupMarker, OrderKey, Row, RowId, RowKind, Scope, Zone},
        registry::RenderedRegistry,
        render::{RenderError, Renderer},
        store::{KeyBound, OrderDirection, RowStore, ScanPlan},
    };
}

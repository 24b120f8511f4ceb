use crate::model::RowId;
use std::collections::HashSet;

///
/// RenderedRegistry
///
/// Set of row ids already consumed by a group build. The host pipeline
/// consults it before rendering a row standalone, so grouped members are
/// not emitted twice.
///
/// Explicit, caller-owned state: one registry per render request. Hosts
/// that share a registry across threads must wrap it in a mutex; the
/// grouping passes themselves are single-threaded and synchronous.
/// `clear` exists for the case where the same row must legitimately
/// render again through a different path (e.g. via an alias).
///

#[derive(Debug, Default)]
pub struct RenderedRegistry {
    ids: HashSet<RowId>,
}

impl RenderedRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id` as rendered. Returns `false` if it was already present.
    pub fn register(&mut self, id: RowId) -> bool {
        self.ids.insert(id)
    }

    /// Whether `id` has been consumed by a group build since the last
    /// `clear`.
    #[must_use]
    pub fn contains(&self, id: RowId) -> bool {
        self.ids.contains(&id)
    }

    /// Forget every registered id.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

///
/// TESTS
///

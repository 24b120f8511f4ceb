use crate::{
    error::InternalError,
    model::{Row, RowKind},
    obs::sink::{self, MetricsEvent},
    store::RowStore,
};

///
/// ShortcutResolver
///
/// Expands indirection rows in place: every shortcut row in a sequence is
/// replaced by its target rows, fetched from the store in the store's
/// natural order (not the order the shortcut lists them). All other rows
/// pass through untouched.
///
/// Resolution is exactly one level deep: a fetched target that is itself
/// a shortcut is emitted as-is. Unknown target ids are dropped by the
/// store contract; the drop is counted, not surfaced.
///

pub struct ShortcutResolver<'a, S: RowStore> {
    store: &'a S,
}

impl<'a, S: RowStore> ShortcutResolver<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Resolve every shortcut row in `rows`, preserving sequence order.
    /// One store fetch per shortcut row encountered.
    pub fn resolve(&self, rows: Vec<Row>) -> Result<Vec<Row>, InternalError> {
        let mut resolved = Vec::with_capacity(rows.len());

        for row in rows {
            match &row.kind {
                RowKind::Shortcut(targets) => {
                    let fetched = self.store.fetch_by_ids(targets)?;
                    sink::record(MetricsEvent::ShortcutResolved {
                        requested: targets.len() as u64,
                        found: fetched.len() as u64,
                    });
                    resolved.extend(fetched);
                }
                RowKind::Grouped(_) | RowKind::Plain(_) => resolved.push(row),
            }
        }

        Ok(resolved)
    }
}

///
/// TESTS
///

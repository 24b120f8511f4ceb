use crate::{
    error::InternalError,
    group::resolver::ShortcutResolver,
    model::Row,
    obs::sink::{self, MetricsEvent},
    store::{RowStore, ScanPlan},
};
use std::ops::ControlFlow;

///
/// GroupScanner
///
/// Walks an ordered row sequence relative to an anchor. Two passes exist:
/// the forward scan collects the anchor's group, the backward scan finds
/// the anchor of the group an arbitrary row belongs to.
///

pub struct GroupScanner<'a, S: RowStore> {
    store: &'a S,
}

impl<'a, S: RowStore> GroupScanner<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Collect the anchor's group from pre-fetched forward candidates.
    ///
    /// `candidates` must be ordered ascending by key, scoped to the
    /// anchor's scope, strictly after the anchor, and already capped at
    /// `item_limit - 1` rows (see [`ScanPlan::after`]). The anchor is
    /// prepended, shortcuts are resolved over the whole sequence, and the
    /// scan stops at the first row that leaves the anchor's family or
    /// starts a new group. Returns the group rows with the anchor at
    /// index 0; with no candidates the group is just the anchor.
    pub fn scan_forward(
        &self,
        anchor: &Row,
        candidates: Vec<Row>,
    ) -> Result<Vec<Row>, InternalError> {
        let Some(marker) = anchor.marker() else {
            return Err(InternalError::scanner_invariant(format!(
                "forward scan anchor {} is not a grouped row",
                anchor.id
            )));
        };

        let mut sequence = Vec::with_capacity(candidates.len() + 1);
        sequence.push(anchor.clone());
        sequence.extend(candidates);

        let resolved = ShortcutResolver::new(self.store).resolve(sequence)?;
        sink::record(MetricsEvent::RowsScanned {
            rows: resolved.len() as u64,
        });

        let mut group = Vec::new();
        for row in resolved {
            let leaves_family = row.marker() != Some(marker);
            let starts_new_group = row.id != anchor.id && row.group_start;
            if leaves_family || starts_new_group {
                break;
            }
            group.push(row);
        }

        Ok(group)
    }

    /// Find the anchor of the group containing `row`.
    ///
    /// Group-start rows and rows outside any group family are their own
    /// anchor. Otherwise the scope is fetched descending from `row`,
    /// truncated at (and including) the first group-start row, shortcut-
    /// resolved, and folded: the accumulator is the farthest row still
    /// inside the group, and the fold breaks at the family boundary or at
    /// the item-limit position.
    pub fn find_anchor(&self, row: &Row) -> Result<Row, InternalError> {
        sink::record(MetricsEvent::AnchorLookup);

        if row.group_start {
            return Ok(row.clone());
        }
        let Some(marker) = row.marker() else {
            return Ok(row.clone());
        };

        let fetched = self.store.scan(&ScanPlan::before(row))?;
        let truncated = truncate_at_group_start(fetched);
        let resolved = ShortcutResolver::new(self.store).resolve(truncated)?;
        sink::record(MetricsEvent::RowsScanned {
            rows: resolved.len() as u64,
        });

        // NOTE: the limit position is counted over the resolved sequence,
        // so a shortcut expanding near the cap can move the boundary
        // relative to the forward scan. Callers sitting exactly on the
        // limit boundary should not assume the two passes agree.
        let limit = row.item_limit;

        // Stateful left-fold: walk outward from `row`, carrying the last
        // candidate that still belongs to the group.
        let outcome = resolved.into_iter().enumerate().try_fold(
            row.clone(),
            |last_match, (index, candidate)| {
                let at_limit =
                    limit.is_some_and(|limit| (limit.get() as usize) - 1 == index);
                if at_limit || candidate.marker() != Some(marker) {
                    ControlFlow::Break(last_match)
                } else {
                    ControlFlow::Continue(candidate)
                }
            },
        );

        Ok(match outcome {
            ControlFlow::Break(anchor) | ControlFlow::Continue(anchor) => anchor,
        })
    }
}

/// Keep descending rows up to and including the first group-start row;
/// everything past it belongs to an earlier, unrelated group.
fn truncate_at_group_start(rows: Vec<Row>) -> Vec<Row> {
    let mut kept = Vec::with_capacity(rows.len());
    for row in rows {
        let stop = row.group_start;
        kept.push(row);
        if stop {
            break;
        }
    }
    kept
}

///
/// TESTS
///

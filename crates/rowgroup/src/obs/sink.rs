//! Metrics sink boundary.
//!
//! Grouping logic MUST NOT touch `obs::metrics` directly. All
//! instrumentation flows through `MetricsEvent` and `MetricsSink`; this
//! module is the only bridge to the thread-local counter state.

use crate::obs::metrics;
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = const { RefCell::new(None) };
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent {
    BuildStart,
    BuildFinish { members: u64 },
    AnchorLookup,
    RowsScanned { rows: u64 },
    ShortcutResolved { requested: u64, found: u64 },
    MemberSkipped,
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default sink that writes into the thread-local counter state. Used
/// whenever no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        metrics::with_state_mut(|m| match event {
            MetricsEvent::BuildStart => {
                m.ops.build_calls = m.ops.build_calls.saturating_add(1);
            }
            MetricsEvent::BuildFinish { members } => {
                m.ops.members_rendered = m.ops.members_rendered.saturating_add(members);
            }
            MetricsEvent::AnchorLookup => {
                m.ops.anchor_lookups = m.ops.anchor_lookups.saturating_add(1);
            }
            MetricsEvent::RowsScanned { rows } => {
                m.ops.rows_scanned = m.ops.rows_scanned.saturating_add(rows);
            }
            MetricsEvent::ShortcutResolved { requested, found } => {
                m.ops.shortcuts_resolved = m.ops.shortcuts_resolved.saturating_add(1);
                m.ops.shortcut_targets_dropped = m
                    .ops
                    .shortcut_targets_dropped
                    .saturating_add(requested.saturating_sub(found));
            }
            MetricsEvent::MemberSkipped => {
                m.ops.members_skipped = m.ops.members_skipped.saturating_add(1);
            }
        });
    }
}

pub(crate) fn record(event: MetricsEvent) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());
    match sink {
        Some(sink) => sink.record(event),
        None => GlobalMetricsSink.record(event),
    }
}

/// Run a closure with a temporary metrics sink override.
/// The previous sink is restored on all exits, including unwind.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0.take();
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

///
/// Span
/// RAII guard that emits start/finish events for one build call.
/// Finish accounting happens even on unwind.
///

pub(crate) struct Span {
    members: u64,
}

impl Span {
    pub(crate) fn start() -> Self {
        record(MetricsEvent::BuildStart);
        Self { members: 0 }
    }

    pub(crate) const fn set_members(&mut self, members: u64) {
        self.members = members;
    }
}

impl Drop for Span {
    fn drop(&mut self) {
        record(MetricsEvent::BuildFinish {
            members: self.members,
        });
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingSink {
        events: RefCell<Vec<MetricsEvent>>,
    }

    impl MetricsSink for RecordingSink {
        fn record(&self, event: MetricsEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    #[test]
    fn override_sink_captures_events_and_restores_global() {
        let sink = Rc::new(RecordingSink {
            events: RefCell::new(Vec::new()),
        });

        metrics::reset_all();
        with_metrics_sink(sink.clone(), || {
            record(MetricsEvent::RowsScanned { rows: 3 });
        });

        assert_eq!(sink.events.borrow().len(), 1);
        // The override consumed the event; global counters stay untouched.
        assert_eq!(metrics::report().ops.rows_scanned, 0);

        record(MetricsEvent::RowsScanned { rows: 2 });
        assert_eq!(metrics::report().ops.rows_scanned, 2);
    }

    #[test]
    fn shortcut_resolution_tracks_dropped_targets() {
        metrics::reset_all();
        record(MetricsEvent::ShortcutResolved {
            requested: 3,
            found: 1,
        });

        let ops = metrics::report().ops;
        assert_eq!(ops.shortcuts_resolved, 1);
        assert_eq!(ops.shortcut_targets_dropped, 2);
    }

    #[test]
    fn span_emits_finish_with_member_count() {
        metrics::reset_all();
        {
            let mut span = Span::start();
            span.set_members(4);
        }

        let ops = metrics::report().ops;
        assert_eq!(ops.build_calls, 1);
        assert_eq!(ops.members_rendered, 4);
    }
}

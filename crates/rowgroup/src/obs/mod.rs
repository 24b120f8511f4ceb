//! Observability: in-memory counters for the grouping passes and the sink
//! abstraction they report through.
//!
//! Grouping logic never accesses the counter state directly; everything
//! flows through `sink::record`.

pub(crate) mod metrics;
pub(crate) mod sink;

pub use metrics::{EventOps, EventState, report, reset_all};
pub use sink::{MetricsEvent, MetricsSink, with_metrics_sink};

//! Store metrics, recorded through the `metrics` facade.
//!
//! Nothing here installs a recorder. Until the host application installs
//! one (for example a Prometheus exporter), every call is a cheap no-op.
//!
//! # Example
//!
//! ```
//! use tasklist_runtime::metrics::{describe_store_metrics, StoreMetrics};
//! use std::time::Duration;
//!
//! describe_store_metrics();
//! StoreMetrics::record_action("Add", Duration::from_micros(3));
//! ```

use metrics::{counter, describe_counter, describe_histogram, histogram};
use std::time::Duration;

/// Counter: actions run through a reducer, labelled by action name
pub const ACTIONS_TOTAL: &str = "store.actions.total";
/// Histogram: time spent inside `Reducer::reduce`
pub const REDUCER_DURATION: &str = "store.reducer.duration_seconds";
/// Counter: actions fed back into the reducer by `Effect::Send`
pub const FEEDBACK_TOTAL: &str = "store.feedback.total";
/// Counter: sends aborted because the feedback bound was hit
pub const FEEDBACK_LIMIT_TOTAL: &str = "store.feedback.limit_exceeded";
/// Counter: snapshots published to subscribers
pub const SNAPSHOTS_PUBLISHED: &str = "store.snapshots.published";

/// Register descriptions for every store metric.
///
/// Safe to call more than once.
pub fn describe_store_metrics() {
    describe_counter!(ACTIONS_TOTAL, "Total number of actions processed by reducers");
    describe_histogram!(REDUCER_DURATION, "Time taken to execute reducers");
    describe_counter!(
        FEEDBACK_TOTAL,
        "Total number of actions fed back into reducers by effects"
    );
    describe_counter!(
        FEEDBACK_LIMIT_TOTAL,
        "Total number of sends aborted by the feedback bound"
    );
    describe_counter!(
        SNAPSHOTS_PUBLISHED,
        "Total number of state snapshots published to subscribers"
    );
}

/// Store metrics recorder.
pub struct StoreMetrics;

impl StoreMetrics {
    /// Record one reducer run.
    pub fn record_action(action: &'static str, duration: Duration) {
        counter!(ACTIONS_TOTAL, "action" => action).increment(1);
        histogram!(REDUCER_DURATION, "action" => action).record(duration.as_secs_f64());
    }

    /// Record one fed-back action.
    pub fn record_feedback() {
        counter!(FEEDBACK_TOTAL).increment(1);
    }

    /// Record a send aborted by the feedback bound.
    pub fn record_feedback_limit() {
        counter!(FEEDBACK_LIMIT_TOTAL).increment(1);
    }

    /// Record a snapshot publication.
    pub fn record_publish() {
        counter!(SNAPSHOTS_PUBLISHED).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_without_recorder_is_noop() {
        describe_store_metrics();
        describe_store_metrics();
        StoreMetrics::record_action("Add", Duration::from_millis(1));
        StoreMetrics::record_feedback();
        StoreMetrics::record_feedback_limit();
        StoreMetrics::record_publish();
    }
}

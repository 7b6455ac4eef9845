//! Metric names and descriptions for the store.
//!
//! The store records through the `metrics` facade only. Nothing is exported
//! unless the application installs a recorder; call [`describe_metrics`]
//! once after installing it so the recorder knows units and help text.

use metrics::{describe_counter, describe_gauge, describe_histogram, Unit};

/// Counter: every action sent to any store
pub const DISPATCH_TOTAL: &str = "store.dispatch.total";

/// Histogram: wall time spent inside the root reducer
pub const REDUCER_DURATION_SECONDS: &str = "store.reducer.duration_seconds";

/// Gauge: subscribers that received the last notification
pub const SUBSCRIBERS: &str = "store.subscribers";

/// Counter: notifications a lagging subscriber never saw
pub const NOTIFICATIONS_SKIPPED_TOTAL: &str = "store.notifications.skipped_total";

/// Register descriptions for every store metric.
pub fn describe_metrics() {
    describe_counter!(DISPATCH_TOTAL, "Total number of actions dispatched to stores");
    describe_histogram!(
        REDUCER_DURATION_SECONDS,
        Unit::Seconds,
        "Time taken to run the root reducer for one action"
    );
    describe_gauge!(
        SUBSCRIBERS,
        "Number of subscribers notified by the most recent dispatch"
    );
    describe_counter!(
        NOTIFICATIONS_SKIPPED_TOTAL,
        "Total number of notifications dropped because a subscriber lagged"
    );
}

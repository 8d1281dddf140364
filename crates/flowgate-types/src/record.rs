use serde::{Deserialize, Serialize};

// NOTE: Schema Evolution Contract
//
// The metric log line grew over time. Lines persisted by older releases carry
// only the first eight fields (timestamp through avg_rt); the three trailing
// fields were added later and default to zero when a line predates them.
// Field order in the log line is fixed and positional, so any new field must
// be appended at the end, never inserted.

/// One resource's traffic-statistics snapshot for one sampling window.
/// Maps 1:1 to a metric log line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Name of the monitored resource.
    ///
    /// The log-line field separator `|` is reserved; any literal occurrence
    /// is replaced with `_` at encode time, so a decoded resource name may
    /// differ from a pathological input that contained the separator.
    pub resource: String,

    /// Traffic grouping tag. Zero when absent from legacy input.
    pub classification: i32,

    /// Epoch milliseconds, aligned to a sampling-window boundary by the
    /// statistics pipeline. Alignment is not validated here.
    pub timestamp: u64,

    /// Requests passed through the guard during the window.
    pub pass_qps: u64,

    /// Requests blocked during the window.
    pub block_qps: u64,

    /// Requests completed during the window.
    pub complete_qps: u64,

    /// Requests that ended in a business error during the window.
    pub error_qps: u64,

    /// Average response time over the window, in milliseconds.
    pub avg_rt: u64,

    /// Pass quota borrowed from future windows. Zero when absent from
    /// legacy input.
    pub occupied_pass_qps: u64,

    /// In-flight request count at window close. Zero when absent from
    /// legacy input.
    pub concurrency: u32,
}

// Metric layer - log-line codec and external contracts for metric records
// This layer sits between the statistics pipeline (types) and the log/exporter
// collaborators that persist or scrape the records

pub mod codec;
pub mod error;
pub mod export;
pub mod retrieve;

pub use codec::{
    decode_verbose, encode_compact, encode_verbose, METRIC_PART_SEPARATOR, MIN_VERBOSE_FIELDS,
};
pub use error::{Error, Result};
pub use export::{export_record, GaugeField, GaugeKey, GaugeRegistry};
pub use retrieve::{MetricRecordRetriever, TimePredicate};

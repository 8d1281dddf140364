use flowgate_types::MetricRecord;

/// The numeric record fields exposed to the gauge registry, one gauge each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GaugeField {
    PassQps,
    BlockQps,
    CompleteQps,
    ErrorQps,
    AvgRt,
    OccupiedPassQps,
    Concurrency,
}

impl GaugeField {
    /// Registry-facing gauge name.
    pub fn name(self) -> &'static str {
        match self {
            GaugeField::PassQps => "pass_qps",
            GaugeField::BlockQps => "block_qps",
            GaugeField::CompleteQps => "complete_qps",
            GaugeField::ErrorQps => "error_qps",
            GaugeField::AvgRt => "avg_rt",
            GaugeField::OccupiedPassQps => "occupied_pass_qps",
            GaugeField::Concurrency => "concurrency",
        }
    }
}

/// Label set for one gauge sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaugeKey<'a> {
    pub resource: &'a str,
    pub classification: i32,
    pub timestamp: u64,
}

/// External pull-based gauge registry consuming record field values.
///
/// Implemented by the scrape-serving collaborator. The registry owns gauge
/// registration, internal locking, and scrape serving; this layer only
/// pushes correctly typed values into it and never holds a lock across the
/// call.
pub trait GaugeRegistry {
    /// Record `value` for `field` under `key`, replacing any previous sample.
    fn set(&self, field: GaugeField, key: GaugeKey<'_>, value: u64);
}

/// Push every numeric field of one record into the registry.
pub fn export_record(registry: &dyn GaugeRegistry, record: &MetricRecord) {
    let key = GaugeKey {
        resource: &record.resource,
        classification: record.classification,
        timestamp: record.timestamp,
    };
    registry.set(GaugeField::PassQps, key, record.pass_qps);
    registry.set(GaugeField::BlockQps, key, record.block_qps);
    registry.set(GaugeField::CompleteQps, key, record.complete_qps);
    registry.set(GaugeField::ErrorQps, key, record.error_qps);
    registry.set(GaugeField::AvgRt, key, record.avg_rt);
    registry.set(GaugeField::OccupiedPassQps, key, record.occupied_pass_qps);
    registry.set(GaugeField::Concurrency, key, u64::from(record.concurrency));
}

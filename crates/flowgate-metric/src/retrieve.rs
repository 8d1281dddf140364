use flowgate_types::MetricRecord;

/// Boolean test over an epoch-millisecond timestamp.
pub type TimePredicate = dyn Fn(u64) -> bool;

/// Supplies stored metric records matching a time predicate.
///
/// Implemented by the statistics-holding collaborator, not by this crate.
/// Callers expect the returned records in chronological order; that ordering
/// is the implementor's responsibility.
pub trait MetricRecordRetriever {
    /// Return the records whose timestamp satisfies `predicate`.
    fn records_matching(&self, predicate: &TimePredicate) -> Vec<MetricRecord>;
}

use std::cell::RefCell;

use flowgate_metric::{export_record, GaugeField, GaugeKey, GaugeRegistry};
use flowgate_metric::{MetricRecordRetriever, TimePredicate};
use flowgate_types::MetricRecord;

fn record_at(timestamp: u64) -> MetricRecord {
    MetricRecord {
        resource: "svc-a".to_string(),
        timestamp,
        pass_qps: 10,
        block_qps: 2,
        complete_qps: 8,
        avg_rt: 15,
        occupied_pass_qps: 1,
        concurrency: 3,
        ..Default::default()
    }
}

/// In-memory stand-in for the statistics-holding collaborator.
struct VecRetriever {
    records: Vec<MetricRecord>,
}

impl MetricRecordRetriever for VecRetriever {
    fn records_matching(&self, predicate: &TimePredicate) -> Vec<MetricRecord> {
        self.records
            .iter()
            .filter(|r| predicate(r.timestamp))
            .cloned()
            .collect()
    }
}

#[test]
fn test_retriever_filters_by_time_predicate() {
    let retriever = VecRetriever {
        records: vec![record_at(1_000), record_at(2_000), record_at(3_000)],
    };

    let window = |ts: u64| (1_500..=2_500).contains(&ts);
    let matched = retriever.records_matching(&window);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].timestamp, 2_000);

    let all = retriever.records_matching(&|_| true);
    assert_eq!(all.len(), 3);
}

/// Records every push so the sample set can be asserted on.
struct RecordingRegistry {
    samples: RefCell<Vec<(GaugeField, String, i32, u64, u64)>>,
}

impl GaugeRegistry for RecordingRegistry {
    fn set(&self, field: GaugeField, key: GaugeKey<'_>, value: u64) {
        self.samples.borrow_mut().push((
            field,
            key.resource.to_string(),
            key.classification,
            key.timestamp,
            value,
        ));
    }
}

#[test]
fn test_export_record_pushes_seven_gauges() {
    let registry = RecordingRegistry {
        samples: RefCell::new(Vec::new()),
    };
    let record = MetricRecord {
        classification: 2,
        ..record_at(1_600_000_000_000)
    };

    export_record(&registry, &record);

    let samples = registry.samples.borrow();
    assert_eq!(samples.len(), 7);

    // Every sample carries the same {resource, classification, timestamp} key
    for (_, resource, classification, timestamp, _) in samples.iter() {
        assert_eq!(resource, "svc-a");
        assert_eq!(*classification, 2);
        assert_eq!(*timestamp, 1_600_000_000_000);
    }

    let value_of = |field: GaugeField| {
        samples
            .iter()
            .find(|(f, ..)| *f == field)
            .map(|(.., value)| *value)
            .unwrap()
    };
    assert_eq!(value_of(GaugeField::PassQps), 10);
    assert_eq!(value_of(GaugeField::BlockQps), 2);
    assert_eq!(value_of(GaugeField::CompleteQps), 8);
    assert_eq!(value_of(GaugeField::ErrorQps), 0);
    assert_eq!(value_of(GaugeField::AvgRt), 15);
    assert_eq!(value_of(GaugeField::OccupiedPassQps), 1);
    assert_eq!(value_of(GaugeField::Concurrency), 3);
}

#[test]
fn test_gauge_field_names() {
    assert_eq!(GaugeField::PassQps.name(), "pass_qps");
    assert_eq!(GaugeField::AvgRt.name(), "avg_rt");
    assert_eq!(GaugeField::OccupiedPassQps.name(), "occupied_pass_qps");
}

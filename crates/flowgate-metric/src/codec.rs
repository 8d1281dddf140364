use std::fmt::Write;

use flowgate_types::{format_time_millis, is_blank, MetricRecord};

use crate::error::{Error, Result};

/// Reserved field separator for metric log lines.
pub const METRIC_PART_SEPARATOR: char = '|';

/// Substituted for the separator inside resource names at encode time.
const RESOURCE_PLACEHOLDER: &str = "_";

/// Minimum field count the verbose decoder accepts (timestamp through avgRt).
pub const MIN_VERBOSE_FIELDS: usize = 8;

// Verbose line field positions. Parsing is positional, and the tail is
// optional so that lines written before a field existed still decode:
//
//   fields present | populated beyond the mandatory prefix
//   ---------------+--------------------------------------
//   8              | none (tail defaults to zero)
//   9              | occupiedPassQps
//   10             | + concurrency
//   11             | + classification
//
// Fields past index 10 are ignored.
const IDX_TIMESTAMP: usize = 0;
const IDX_RESOURCE: usize = 2;
const IDX_PASS_QPS: usize = 3;
const IDX_BLOCK_QPS: usize = 4;
const IDX_COMPLETE_QPS: usize = 5;
const IDX_ERROR_QPS: usize = 6;
const IDX_AVG_RT: usize = 7;
const IDX_OCCUPIED_PASS_QPS: usize = 8;
const IDX_CONCURRENCY: usize = 9;
const IDX_CLASSIFICATION: usize = 10;

/// Encode a record as a verbose metric log line: 11 `|`-separated fields
/// including a human-readable UTC timestamp.
///
/// The human-readable field is derived from `timestamp` and exists only for
/// log readability; the numeric timestamp stays authoritative.
pub fn encode_verbose(record: &MetricRecord) -> Result<String> {
    let mut line = String::new();
    let time_str = format_time_millis(record.timestamp);
    let resource = sanitize_resource(&record.resource);
    write!(
        line,
        "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}",
        record.timestamp,
        time_str,
        resource,
        record.pass_qps,
        record.block_qps,
        record.complete_qps,
        record.error_qps,
        record.avg_rt,
        record.occupied_pass_qps,
        record.concurrency,
        record.classification,
    )?;
    Ok(line)
}

/// Encode a record as a compact metric log line: 10 fields, no
/// human-readable timestamp. Meant for high-volume logs.
///
/// Compact lines are write-only in the current format: their field indices
/// differ from the verbose layout, so [`decode_verbose`] must not be used on
/// them and no compact decoder exists yet.
pub fn encode_compact(record: &MetricRecord) -> Result<String> {
    let mut line = String::new();
    let resource = sanitize_resource(&record.resource);
    write!(
        line,
        "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}",
        record.timestamp,
        resource,
        record.pass_qps,
        record.block_qps,
        record.complete_qps,
        record.error_qps,
        record.avg_rt,
        record.occupied_pass_qps,
        record.concurrency,
        record.classification,
    )?;
    Ok(line)
}

/// Decode a verbose metric log line back into a record.
///
/// Accepts any line with at least the 8 mandatory fields; the optional tail
/// (occupiedPassQps, concurrency, classification) defaults to zero when a
/// line predates those fields. A numeric parse failure on any field that is
/// present aborts the whole decode; no partial record is ever returned.
pub fn decode_verbose(line: &str) -> Result<MetricRecord> {
    if is_blank(line) {
        return Err(Error::EmptyInput);
    }

    let parts: Vec<&str> = line.split(METRIC_PART_SEPARATOR).collect();
    if parts.len() < MIN_VERBOSE_FIELDS {
        return Err(Error::MalformedFormat { fields: parts.len() });
    }

    // parts[1] is the human-readable timestamp; it is derived from parts[0]
    // and never re-parsed.
    Ok(MetricRecord {
        timestamp: parse_u64(parts[IDX_TIMESTAMP], "timestamp")?,
        resource: parts[IDX_RESOURCE].to_string(),
        pass_qps: parse_u64(parts[IDX_PASS_QPS], "passQps")?,
        block_qps: parse_u64(parts[IDX_BLOCK_QPS], "blockQps")?,
        complete_qps: parse_u64(parts[IDX_COMPLETE_QPS], "completeQps")?,
        error_qps: parse_u64(parts[IDX_ERROR_QPS], "errorQps")?,
        avg_rt: parse_u64(parts[IDX_AVG_RT], "avgRt")?,
        occupied_pass_qps: match parts.get(IDX_OCCUPIED_PASS_QPS) {
            Some(text) => parse_u64(text, "occupiedPassQps")?,
            None => 0,
        },
        concurrency: match parts.get(IDX_CONCURRENCY) {
            Some(text) => parse_u32(text, "concurrency")?,
            None => 0,
        },
        classification: match parts.get(IDX_CLASSIFICATION) {
            Some(text) => parse_i32(text, "classification")?,
            None => 0,
        },
    })
}

/// Replace every literal separator in a resource name.
///
/// A `|` inside the resource field would shift every later field, so the
/// encoder substitutes it outright. The substitution is lossy on purpose:
/// escaping would break decoders of already-persisted lines.
fn sanitize_resource(resource: &str) -> String {
    resource.replace(METRIC_PART_SEPARATOR, RESOURCE_PLACEHOLDER)
}

fn parse_u64(text: &str, field: &'static str) -> Result<u64> {
    text.parse()
        .map_err(|source| Error::NumericParse { field, source })
}

fn parse_u32(text: &str, field: &'static str) -> Result<u32> {
    text.parse()
        .map_err(|source| Error::NumericParse { field, source })
}

fn parse_i32(text: &str, field: &'static str) -> Result<i32> {
    text.parse()
        .map_err(|source| Error::NumericParse { field, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_resource() {
        assert_eq!(sanitize_resource("a|b"), "a_b");
        assert_eq!(sanitize_resource("|||"), "___");
        assert_eq!(sanitize_resource("plain"), "plain");
    }

    #[test]
    fn test_verbose_field_count() {
        let line = encode_verbose(&MetricRecord::default()).unwrap();
        assert_eq!(line.split('|').count(), 11);
    }

    #[test]
    fn test_compact_field_count() {
        let line = encode_compact(&MetricRecord::default()).unwrap();
        assert_eq!(line.split('|').count(), 10);
    }

    #[test]
    fn test_decode_ignores_human_timestamp() {
        // Garbage in the human-readable slot must not affect decoding
        let record = decode_verbose("1600000000000|not-a-date|svc|1|2|3|4|5").unwrap();
        assert_eq!(record.timestamp, 1_600_000_000_000);
        assert_eq!(record.resource, "svc");
    }

    #[test]
    fn test_decode_ignores_fields_past_eleven() {
        let record = decode_verbose("1600000000000|t|svc|1|2|3|4|5|6|7|8|junk|more").unwrap();
        assert_eq!(record.classification, 8);
    }

    #[test]
    fn test_concurrency_is_bounded_to_u32() {
        let line = format!("1600000000000|t|svc|1|2|3|4|5|6|{}|0", u64::from(u32::MAX) + 1);
        let err = decode_verbose(&line).unwrap_err();
        assert!(matches!(err, Error::NumericParse { field: "concurrency", .. }));
    }
}

// Record filtering - first stage of the analytics pipeline
use chrono::{DateTime, Utc};

use super::record::{parse_timestamp, TastingRecord};

/// Inclusive consumption-date window; an unset bound is unbounded on
/// that side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DateRange {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Predicates narrowing which records get aggregated. Unset or
/// empty-string fields constrain nothing, so a default filter passes
/// every record through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    pub date_range: Option<DateRange>,
    pub shop_name: Option<String>,
    pub origin: Option<String>,
    pub brew_method: Option<String>,
}

/// Select the records satisfying every set predicate, preserving input
/// order. With no filter this is an identity pass-through. Never errors:
/// malformed record data degrades per the individual checks below.
pub fn filter_records<'a>(
    records: &'a [TastingRecord],
    filter: Option<&RecordFilter>,
) -> Vec<&'a TastingRecord> {
    match filter {
        None => records.iter().collect(),
        Some(filter) => records.iter().filter(|r| matches(r, filter)).collect(),
    }
}

fn matches(record: &TastingRecord, filter: &RecordFilter) -> bool {
    if let Some(range) = &filter.date_range {
        if !within_range(record, range) {
            return false;
        }
    }
    if !contains_ci(record.shop_name.as_deref(), filter.shop_name.as_deref()) {
        return false;
    }
    if !contains_ci(record.origin.as_deref(), filter.origin.as_deref()) {
        return false;
    }
    if let Some(wanted) = non_empty(filter.brew_method.as_deref()) {
        // Exact match, no normalization.
        if record.brew_method.as_deref() != Some(wanted) {
            return false;
        }
    }
    true
}

fn within_range(record: &TastingRecord, range: &DateRange) -> bool {
    if range.start_date.is_none() && range.end_date.is_none() {
        return true;
    }
    // A record without a timestamp passes any date bound: date filters
    // only ever exclude dated records. The time series is the one view
    // that drops undated records.
    let Some(raw) = record.consumed_at_raw() else {
        return true;
    };
    // A timestamp that does not parse fails every bound comparison.
    let Some(ts) = parse_timestamp(raw) else {
        return false;
    };
    if let Some(start) = range.start_date {
        if ts < start {
            return false;
        }
    }
    if let Some(end) = range.end_date {
        if ts > end {
            return false;
        }
    }
    true
}

/// Case-insensitive substring check. An unset or empty needle matches
/// everything; a set needle matches nothing on a record lacking the
/// field.
fn contains_ci(haystack: Option<&str>, needle: Option<&str>) -> bool {
    let Some(needle) = non_empty(needle) else {
        return true;
    };
    match haystack {
        Some(value) => value.to_lowercase().contains(&needle.to_lowercase()),
        None => false,
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

// Analytics aggregation - derived views over filtered tasting records
use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::Serialize;

use super::filter::{filter_records, RecordFilter};
use super::record::TastingRecord;

/// Seven sensory dimensions averaged over a record group, each rounded
/// to one decimal place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TasteProfile {
    pub acidity: f64,
    pub flavor: f64,
    pub body: f64,
    pub balance: f64,
    pub overall: f64,
    pub aroma: f64,
    pub aftertaste: f64,
}

impl TasteProfile {
    fn from_records(records: &[&TastingRecord]) -> Self {
        Self {
            acidity: zero_fill_average(records, |r| r.acidity),
            flavor: zero_fill_average(records, |r| r.flavor),
            body: zero_fill_average(records, |r| r.body),
            balance: zero_fill_average(records, |r| r.balance),
            overall: zero_fill_average(records, |r| r.overall),
            aroma: zero_fill_average(records, |r| r.aroma),
            aftertaste: zero_fill_average(records, |r| r.aftertaste),
        }
    }
}

/// One point of the per-day chart: all records consumed on a UTC
/// calendar date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesEntry {
    pub date: String,
    pub count: usize,
    pub average_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopBreakdown {
    pub shop_name: String,
    pub count: usize,
    pub average_rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_brew_method: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginBreakdown {
    pub origin: String,
    pub count: usize,
    pub average_rating: f64,
    pub taste_profile: TasteProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrewMethodBreakdown {
    pub brew_method: String,
    pub count: usize,
    pub average_rating: f64,
    pub taste_profile: TasteProfile,
}

/// The full aggregation result. Field names serialize in camelCase for
/// the chart frontend; the three favorites serialize as JSON null when
/// no record carries the field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub total_records: usize,
    pub average_rating: f64,
    pub favorite_shop: Option<String>,
    pub most_common_origin: Option<String>,
    pub most_common_brew_method: Option<String>,
    pub taste_profile: TasteProfile,
    pub time_series_data: Vec<TimeSeriesEntry>,
    pub shop_data: Vec<ShopBreakdown>,
    pub origin_data: Vec<OriginBreakdown>,
    pub brew_method_data: Vec<BrewMethodBreakdown>,
}

/// Filter the records, then compute every derived view independently
/// from the same filtered subset. Total over all inputs: an empty
/// subset yields zero counts, zero averages, `None` favorites, and
/// empty vectors, never an error.
pub fn calculate_analytics(
    records: &[TastingRecord],
    filter: Option<&RecordFilter>,
) -> AnalyticsData {
    let filtered = filter_records(records, filter);

    AnalyticsData {
        total_records: filtered.len(),
        average_rating: zero_fill_average(&filtered, |r| r.rating),
        favorite_shop: most_common(&filtered, |r| r.shop_key()),
        most_common_origin: most_common(&filtered, |r| r.origin_key()),
        most_common_brew_method: most_common(&filtered, |r| r.brew_method_key()),
        taste_profile: TasteProfile::from_records(&filtered),
        time_series_data: time_series(&filtered),
        shop_data: shop_breakdowns(&filtered),
        origin_data: origin_breakdowns(&filtered),
        brew_method_data: brew_method_breakdowns(&filtered),
    }
}

/// Round to one decimal place, halves away from zero.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Zero-fill average: missing values count as 0 and the divisor is the
/// full group size, not the number of present values. Empty groups
/// average to 0 rather than NaN.
fn zero_fill_average(
    records: &[&TastingRecord],
    value: impl Fn(&TastingRecord) -> Option<f64>,
) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records.iter().map(|r| value(r).unwrap_or(0.0)).sum();
    round1(sum / records.len() as f64)
}

/// Most frequent key across the records. The tally is an
/// insertion-ordered list rather than a hash map, and a strictly
/// greater count is required to displace the leader, so the first
/// distinct key seen wins a tie.
fn most_common<'a>(
    records: &[&'a TastingRecord],
    key: impl Fn(&'a TastingRecord) -> Option<&'a str>,
) -> Option<String> {
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for &record in records {
        let Some(k) = key(record) else { continue };
        match tally.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, count)) => *count += 1,
            None => tally.push((k, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (k, count) in tally {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((k, count));
        }
    }
    best.map(|(k, _)| k.to_string())
}

/// Insertion-ordered grouping: groups come back in the order they were
/// first discovered, which is what the stable count sort below ties on.
fn group_by<'a>(
    records: &[&'a TastingRecord],
    key: impl Fn(&'a TastingRecord) -> Option<&'a str>,
) -> Vec<(String, Vec<&'a TastingRecord>)> {
    let mut groups: Vec<(String, Vec<&'a TastingRecord>)> = Vec::new();
    for &record in records {
        let Some(k) = key(record) else { continue };
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, members)) => members.push(record),
            None => groups.push((k.to_string(), vec![record])),
        }
    }
    groups
}

fn time_series(records: &[&TastingRecord]) -> Vec<TimeSeriesEntry> {
    // BTreeMap keys are ISO dates, so iteration order is already the
    // ascending chronological order the chart expects. Undated and
    // unparseable records are dropped from this view only.
    let mut by_date: BTreeMap<String, Vec<&TastingRecord>> = BTreeMap::new();
    for &record in records {
        let Some(date) = record.consumed_date() else { continue };
        by_date.entry(date.to_string()).or_default().push(record);
    }

    by_date
        .into_iter()
        .map(|(date, members)| TimeSeriesEntry {
            date,
            count: members.len(),
            average_rating: zero_fill_average(&members, |r| r.rating),
        })
        .collect()
}

fn shop_breakdowns(records: &[&TastingRecord]) -> Vec<ShopBreakdown> {
    let mut breakdowns: Vec<ShopBreakdown> = group_by(records, |r| r.shop_key())
        .into_iter()
        .map(|(shop_name, members)| ShopBreakdown {
            shop_name,
            count: members.len(),
            average_rating: zero_fill_average(&members, |r| r.rating),
            favorite_brew_method: most_common(&members, |r| r.brew_method_key()),
        })
        .collect();
    // Stable sort: equal counts keep discovery order.
    breakdowns.sort_by_key(|b| Reverse(b.count));
    breakdowns
}

fn origin_breakdowns(records: &[&TastingRecord]) -> Vec<OriginBreakdown> {
    let mut breakdowns: Vec<OriginBreakdown> = group_by(records, |r| r.origin_key())
        .into_iter()
        .map(|(origin, members)| OriginBreakdown {
            origin,
            count: members.len(),
            average_rating: zero_fill_average(&members, |r| r.rating),
            taste_profile: TasteProfile::from_records(&members),
        })
        .collect();
    breakdowns.sort_by_key(|b| Reverse(b.count));
    breakdowns
}

fn brew_method_breakdowns(records: &[&TastingRecord]) -> Vec<BrewMethodBreakdown> {
    let mut breakdowns: Vec<BrewMethodBreakdown> = group_by(records, |r| r.brew_method_key())
        .into_iter()
        .map(|(brew_method, members)| BrewMethodBreakdown {
            brew_method,
            count: members.len(),
            average_rating: zero_fill_average(&members, |r| r.rating),
            taste_profile: TasteProfile::from_records(&members),
        })
        .collect();
    breakdowns.sort_by_key(|b| Reverse(b.count));
    breakdowns
}

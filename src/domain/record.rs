// Tasting record domain model
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// One coffee-tasting observation as the records store returns it.
///
/// Everything except `id` is optional; the journal lets users log
/// partial entries. Sensory scores use a 0-5 scale. `consumed_at` is
/// kept as the raw stored string and parsed on demand, so a malformed
/// value degrades per the filter/grouping rules instead of failing the
/// whole fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TastingRecord {
    pub id: String,
    pub consumed_at: Option<String>,
    pub shop_name: Option<String>,
    pub origin: Option<String>,
    pub brew_method: Option<String>,
    pub rating: Option<f64>,
    pub acidity: Option<f64>,
    pub flavor: Option<f64>,
    pub body: Option<f64>,
    pub balance: Option<f64>,
    pub overall: Option<f64>,
    pub aroma: Option<f64>,
    pub aftertaste: Option<f64>,
}

impl TastingRecord {
    /// Raw `consumed_at` value; empty strings count as unset.
    pub fn consumed_at_raw(&self) -> Option<&str> {
        non_empty(self.consumed_at.as_deref())
    }

    /// Parsed consumption timestamp. `None` when the record has no
    /// timestamp or the stored value does not parse.
    pub fn consumed_timestamp(&self) -> Option<DateTime<Utc>> {
        self.consumed_at_raw().and_then(parse_timestamp)
    }

    /// UTC calendar date of consumption, for per-day grouping.
    pub fn consumed_date(&self) -> Option<NaiveDate> {
        self.consumed_timestamp().map(|ts| ts.date_naive())
    }

    /// Grouping key accessors: empty strings count as unset, matching
    /// how untouched form fields come back from the store.
    pub fn shop_key(&self) -> Option<&str> {
        non_empty(self.shop_name.as_deref())
    }

    pub fn origin_key(&self) -> Option<&str> {
        non_empty(self.origin.as_deref())
    }

    pub fn brew_method_key(&self) -> Option<&str> {
        non_empty(self.brew_method.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Parse a stored timestamp leniently: RFC 3339 first, then a naive
/// `YYYY-MM-DDTHH:MM:SS` date-time taken as UTC (the store emits these
/// for timestamp-without-timezone columns), then a bare `YYYY-MM-DD`
/// date at midnight UTC. Anything else is malformed.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    None
}

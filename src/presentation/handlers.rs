// HTTP request handlers
use crate::domain::analytics::AnalyticsData;
use crate::domain::filter::{DateRange, RecordFilter};
use crate::domain::record::{parse_timestamp, TastingRecord};
use crate::infrastructure::csv_export::summary_csv;
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub shop_name: Option<String>,
    pub origin: Option<String>,
    pub brew_method: Option<String>,
}

impl FilterQuery {
    /// Unparseable date parameters are dropped rather than rejected.
    fn into_filter(self) -> RecordFilter {
        let start_date = self.start_date.as_deref().and_then(parse_timestamp);
        let end_date = self.end_date.as_deref().and_then(parse_timestamp);
        let date_range = if start_date.is_some() || end_date.is_some() {
            Some(DateRange {
                start_date,
                end_date,
            })
        } else {
            None
        };

        RecordFilter {
            date_range,
            shop_name: self.shop_name,
            origin: self.origin,
            brew_method: self.brew_method,
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List a user's tasting records, optionally filtered
pub async fn list_records(
    Path(user_id): Path<String>,
    Query(query): Query<FilterQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TastingRecord>>, ApiError> {
    let filter = query.into_filter();
    let records = state
        .record_service
        .list_records(&user_id, Some(&filter))
        .await?;
    Ok(Json(records))
}

/// Aggregated analytics over a user's tasting records
pub async fn get_analytics(
    Path(user_id): Path<String>,
    Query(query): Query<FilterQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<AnalyticsData>, ApiError> {
    let filter = query.into_filter();
    let analytics = state
        .analytics_service
        .get_analytics(&user_id, Some(&filter))
        .await?;
    Ok(Json(analytics))
}

/// Analytics summary as a downloadable CSV attachment
pub async fn export_analytics(
    Path(user_id): Path<String>,
    Query(query): Query<FilterQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = query.into_filter();
    let analytics = state
        .analytics_service
        .get_analytics(&user_id, Some(&filter))
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"analytics.csv\"",
            ),
        ],
        summary_csv(&analytics),
    ))
}

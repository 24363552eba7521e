// PostgREST-backed repository implementation
use crate::application::record_repository::RecordRepository;
use crate::domain::record::TastingRecord;
use crate::infrastructure::config::RecordsApiSettings;
use anyhow::{Context, Result};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct PostgrestRepository {
    base_url: String,
    api_key: String,
    table: String,
}

impl PostgrestRepository {
    pub fn new(settings: RecordsApiSettings) -> Self {
        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key,
            table: settings.table,
        }
    }

    fn build_records_url(&self, user_id: &str) -> String {
        let encoded_user = urlencoding::encode(user_id);
        // nullslast keeps undated records at the end of the store order
        format!(
            "{}/{}?user_id=eq.{}&select=*&order=consumed_at.asc.nullslast",
            self.base_url, self.table, encoded_user
        )
    }
}

#[async_trait]
impl RecordRepository for PostgrestRepository {
    async fn fetch_records(&self, user_id: &str) -> Result<Vec<TastingRecord>> {
        let url = self.build_records_url(user_id);

        let client = reqwest::Client::new();
        let response = client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to the records API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Records API request failed with status {}: {}", status, body);
        }

        let records = response
            .json::<Vec<TastingRecord>>()
            .await
            .context("Failed to parse records API response")?;

        tracing::debug!("Fetched {} records for user {}", records.len(), user_id);
        Ok(records)
    }
}

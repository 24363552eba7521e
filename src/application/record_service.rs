// Record service - Use case for listing filtered tasting records
use crate::application::record_repository::RecordRepository;
use crate::domain::filter::{filter_records, RecordFilter};
use crate::domain::record::TastingRecord;
use std::sync::Arc;

#[derive(Clone)]
pub struct RecordService {
    repository: Arc<dyn RecordRepository>,
}

impl RecordService {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_records(
        &self,
        user_id: &str,
        filter: Option<&RecordFilter>,
    ) -> anyhow::Result<Vec<TastingRecord>> {
        let records = self.repository.fetch_records(user_id).await?;
        tracing::debug!(user_id, fetched = records.len(), "filtering records");
        let filtered = filter_records(&records, filter)
            .into_iter()
            .cloned()
            .collect();
        Ok(filtered)
    }
}

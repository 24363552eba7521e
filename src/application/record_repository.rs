// Repository trait for tasting record access
use crate::domain::record::TastingRecord;
use async_trait::async_trait;

#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Fetch every tasting record owned by a user, in store order
    async fn fetch_records(&self, user_id: &str) -> anyhow::Result<Vec<TastingRecord>>;
}

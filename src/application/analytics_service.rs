// Analytics service - Use case for aggregating a user's records
use crate::application::record_repository::RecordRepository;
use crate::domain::analytics::{calculate_analytics, AnalyticsData};
use crate::domain::filter::RecordFilter;
use std::sync::Arc;

#[derive(Clone)]
pub struct AnalyticsService {
    repository: Arc<dyn RecordRepository>,
}

impl AnalyticsService {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_analytics(
        &self,
        user_id: &str,
        filter: Option<&RecordFilter>,
    ) -> anyhow::Result<AnalyticsData> {
        let records = self.repository.fetch_records(user_id).await?;
        tracing::debug!(user_id, fetched = records.len(), "aggregating records");
        Ok(calculate_analytics(&records, filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::TastingRecord;
    use async_trait::async_trait;

    struct FixedRecords(Vec<TastingRecord>);

    #[async_trait]
    impl RecordRepository for FixedRecords {
        async fn fetch_records(&self, _user_id: &str) -> anyhow::Result<Vec<TastingRecord>> {
            Ok(self.0.clone())
        }
    }

    struct FailingRepository;

    #[async_trait]
    impl RecordRepository for FailingRepository {
        async fn fetch_records(&self, _user_id: &str) -> anyhow::Result<Vec<TastingRecord>> {
            anyhow::bail!("records API is down")
        }
    }

    #[tokio::test]
    async fn test_get_analytics_aggregates_fetched_records() {
        let records = vec![
            TastingRecord {
                id: "1".into(),
                shop_name: Some("Cafe A".into()),
                rating: Some(4.0),
                ..Default::default()
            },
            TastingRecord { id: "2".into(), rating: Some(2.0), ..Default::default() },
        ];
        let service = AnalyticsService::new(Arc::new(FixedRecords(records)));

        let analytics = service.get_analytics("user-1", None).await.unwrap();
        assert_eq!(analytics.total_records, 2);
        assert_eq!(analytics.average_rating, 3.0);
        assert_eq!(analytics.favorite_shop.as_deref(), Some("Cafe A"));
    }

    #[tokio::test]
    async fn test_get_analytics_applies_the_filter() {
        let records = vec![
            TastingRecord {
                id: "1".into(),
                shop_name: Some("Blue Bottle".into()),
                rating: Some(5.0),
                ..Default::default()
            },
            TastingRecord {
                id: "2".into(),
                shop_name: Some("Corner Cafe".into()),
                rating: Some(1.0),
                ..Default::default()
            },
        ];
        let service = AnalyticsService::new(Arc::new(FixedRecords(records)));
        let filter = RecordFilter { shop_name: Some("blue".into()), ..Default::default() };

        let analytics = service.get_analytics("user-1", Some(&filter)).await.unwrap();
        assert_eq!(analytics.total_records, 1);
        assert_eq!(analytics.average_rating, 5.0);
    }

    #[tokio::test]
    async fn test_repository_errors_propagate() {
        let service = AnalyticsService::new(Arc::new(FailingRepository));
        assert!(service.get_analytics("user-1", None).await.is_err());
    }
}

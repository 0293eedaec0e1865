use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use super::history_model::{NetWorthHistoryRecord, RecordType};
use super::networth_model::NetWorthSnapshot;
use crate::errors::Result;

/// Trait for live net worth computation
#[async_trait]
pub trait NetWorthServiceTrait: Send + Sync {
    async fn compute_snapshot(&self, user_id: &str) -> Result<NetWorthSnapshot>;
}

/// Trait for net worth history storage
pub trait HistoryRepositoryTrait: Send + Sync {
    fn upsert(&self, record: NetWorthHistoryRecord) -> Result<NetWorthHistoryRecord>;
    fn list(
        &self,
        user_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        limit: i64,
    ) -> Result<Vec<NetWorthHistoryRecord>>;
    fn latest(&self, user_id: &str) -> Result<Option<NetWorthHistoryRecord>>;
    fn delete(&self, user_id: &str, record_id: &str) -> Result<usize>;
}

/// Trait for the history recorder service
#[async_trait]
pub trait HistoryServiceTrait: Send + Sync {
    async fn record_snapshot(
        &self,
        user_id: &str,
        record_type: RecordType,
        date: Option<DateTime<Utc>>,
    ) -> Result<NetWorthHistoryRecord>;

    fn get_history(
        &self,
        user_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        limit: Option<i64>,
    ) -> Result<Vec<NetWorthHistoryRecord>>;

    fn get_latest_record(&self, user_id: &str) -> Result<NetWorthHistoryRecord>;

    async fn delete_record(&self, user_id: &str, record_id: &str) -> Result<()>;
}

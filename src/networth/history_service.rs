use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use std::sync::Arc;

use crate::constants::DEFAULT_HISTORY_LIMIT;
use crate::errors::{Error, Result, ValidationError};

use super::history_model::{NetWorthHistoryRecord, RecordType};
use super::networth_traits::{HistoryRepositoryTrait, HistoryServiceTrait, NetWorthServiceTrait};

/// Records and serves persisted net worth history.
///
/// Recording is idempotent per calendar day: a second snapshot for the same
/// (user, day) overwrites the first instead of duplicating it. The scheduler
/// invokes this once per user per day with `RecordType::Automatic`.
pub struct NetWorthHistoryService {
    networth: Arc<dyn NetWorthServiceTrait>,
    repository: Arc<dyn HistoryRepositoryTrait>,
}

impl NetWorthHistoryService {
    pub fn new(
        networth: Arc<dyn NetWorthServiceTrait>,
        repository: Arc<dyn HistoryRepositoryTrait>,
    ) -> Self {
        Self {
            networth,
            repository,
        }
    }

    fn require_user(user_id: &str) -> Result<()> {
        if user_id.trim().is_empty() {
            return Err(Error::Unauthorized("User context is required".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl HistoryServiceTrait for NetWorthHistoryService {
    async fn record_snapshot(
        &self,
        user_id: &str,
        record_type: RecordType,
        date: Option<DateTime<Utc>>,
    ) -> Result<NetWorthHistoryRecord> {
        Self::require_user(user_id)?;

        let snapshot = self.networth.compute_snapshot(user_id).await?;
        let snapshot_date = date.unwrap_or_else(Utc::now).date_naive();

        debug!(
            "Recording {} snapshot for user {} on {}",
            record_type.as_str(),
            user_id,
            snapshot_date
        );

        let record =
            NetWorthHistoryRecord::from_snapshot(user_id, snapshot_date, record_type, &snapshot);
        self.repository.upsert(record)
    }

    fn get_history(
        &self,
        user_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        limit: Option<i64>,
    ) -> Result<Vec<NetWorthHistoryRecord>> {
        Self::require_user(user_id)?;

        if let (Some(start), Some(end)) = (start_date, end_date) {
            if start > end {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Start date {} is after end date {}",
                    start, end
                ))));
            }
        }

        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
        self.repository.list(user_id, start_date, end_date, limit)
    }

    fn get_latest_record(&self, user_id: &str) -> Result<NetWorthHistoryRecord> {
        Self::require_user(user_id)?;

        self.repository.latest(user_id)?.ok_or_else(|| {
            Error::NotFound(format!("No net worth history recorded for user {}", user_id))
        })
    }

    async fn delete_record(&self, user_id: &str, record_id: &str) -> Result<()> {
        Self::require_user(user_id)?;

        let deleted = self.repository.delete(user_id, record_id)?;
        if deleted == 0 {
            return Err(Error::NotFound(format!(
                "History record {} not found",
                record_id
            )));
        }
        Ok(())
    }
}

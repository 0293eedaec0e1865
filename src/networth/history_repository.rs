use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::schema::networth_history;

use super::history_model::{NetWorthHistoryDB, NetWorthHistoryRecord};
use super::networth_traits::HistoryRepositoryTrait;

/// Repository for persisted net worth history, unique per (user, day)
pub struct HistoryRepository {
    pool: Arc<DbPool>,
}

impl HistoryRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl HistoryRepositoryTrait for HistoryRepository {
    fn upsert(&self, record: NetWorthHistoryRecord) -> Result<NetWorthHistoryRecord> {
        let mut conn = get_connection(&self.pool)?;

        let user_id = record.user_id.clone();
        let snapshot_date = record.snapshot_date;
        let row = NetWorthHistoryDB::from(record);
        let now = Utc::now().naive_utc();

        diesel::insert_into(networth_history::table)
            .values(&row)
            .on_conflict((
                networth_history::user_id,
                networth_history::snapshot_date,
            ))
            .do_update()
            .set((
                networth_history::total_account_balance.eq(&row.total_account_balance),
                networth_history::total_investment_value.eq(&row.total_investment_value),
                networth_history::total_investment_cost.eq(&row.total_investment_cost),
                networth_history::total_investment_gain.eq(&row.total_investment_gain),
                networth_history::total_investment_gain_percentage
                    .eq(&row.total_investment_gain_percentage),
                networth_history::total_money_lent.eq(&row.total_money_lent),
                networth_history::total_assets.eq(&row.total_assets),
                networth_history::net_worth.eq(&row.net_worth),
                networth_history::currency.eq(&row.currency),
                networth_history::record_type.eq(&row.record_type),
                networth_history::updated_at.eq(now),
            ))
            .execute(&mut conn)?;

        let stored = networth_history::table
            .filter(networth_history::user_id.eq(&user_id))
            .filter(networth_history::snapshot_date.eq(snapshot_date))
            .first::<NetWorthHistoryDB>(&mut conn)?;

        Ok(stored.into())
    }

    fn list(
        &self,
        user_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        limit: i64,
    ) -> Result<Vec<NetWorthHistoryRecord>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = networth_history::table
            .filter(networth_history::user_id.eq(user_id))
            .into_boxed();

        if let Some(start) = start_date {
            query = query.filter(networth_history::snapshot_date.ge(start));
        }
        if let Some(end) = end_date {
            query = query.filter(networth_history::snapshot_date.le(end));
        }

        let rows = query
            .order(networth_history::snapshot_date.asc())
            .limit(limit)
            .load::<NetWorthHistoryDB>(&mut conn)?;

        Ok(rows.into_iter().map(NetWorthHistoryRecord::from).collect())
    }

    fn latest(&self, user_id: &str) -> Result<Option<NetWorthHistoryRecord>> {
        let mut conn = get_connection(&self.pool)?;

        let row = networth_history::table
            .filter(networth_history::user_id.eq(user_id))
            .order(networth_history::snapshot_date.desc())
            .first::<NetWorthHistoryDB>(&mut conn)
            .optional()?;

        Ok(row.map(NetWorthHistoryRecord::from))
    }

    fn delete(&self, user_id: &str, record_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        let deleted = diesel::delete(
            networth_history::table
                .filter(networth_history::id.eq(record_id))
                .filter(networth_history::user_id.eq(user_id)),
        )
        .execute(&mut conn)?;

        Ok(deleted)
    }
}

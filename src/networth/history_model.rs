use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::constants::DECIMAL_PRECISION;

use super::networth_model::NetWorthSnapshot;

pub const RECORD_TYPE_MANUAL: &str = "MANUAL";
pub const RECORD_TYPE_AUTOMATIC: &str = "AUTOMATIC";

/// How a history record came to exist: user-triggered or scheduler-triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordType {
    Manual,
    Automatic,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Manual => RECORD_TYPE_MANUAL,
            RecordType::Automatic => RECORD_TYPE_AUTOMATIC,
        }
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            RECORD_TYPE_MANUAL => Ok(RecordType::Manual),
            RECORD_TYPE_AUTOMATIC => Ok(RecordType::Automatic),
            _ => Err(format!("Unknown record type: {}", s)),
        }
    }
}

/// Persisted net worth snapshot, one per user per calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthHistoryRecord {
    pub id: String,
    pub user_id: String,
    pub snapshot_date: NaiveDate,
    pub total_account_balance: Decimal,
    pub total_investment_value: Decimal,
    pub total_investment_cost: Decimal,
    pub total_investment_gain: Decimal,
    pub total_investment_gain_percentage: Decimal,
    pub total_money_lent: Decimal,
    pub total_assets: Decimal,
    pub net_worth: Decimal,
    pub currency: String,
    pub record_type: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NetWorthHistoryRecord {
    pub fn from_snapshot(
        user_id: &str,
        snapshot_date: NaiveDate,
        record_type: RecordType,
        snapshot: &NetWorthSnapshot,
    ) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            snapshot_date,
            total_account_balance: snapshot.total_account_balance,
            total_investment_value: snapshot.total_investment_value,
            total_investment_cost: snapshot.total_investment_cost,
            total_investment_gain: snapshot.total_investment_gain,
            total_investment_gain_percentage: snapshot.total_investment_gain_percentage,
            total_money_lent: snapshot.total_money_lent,
            total_assets: snapshot.total_assets,
            net_worth: snapshot.net_worth,
            currency: snapshot.currency.clone(),
            record_type: record_type.as_str().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn record_type(&self) -> RecordType {
        RecordType::from_str(&self.record_type).unwrap_or(RecordType::Manual)
    }
}

/// Database model for history records
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::networth_history)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NetWorthHistoryDB {
    pub id: String,
    pub user_id: String,
    pub snapshot_date: NaiveDate,
    pub total_account_balance: String,
    pub total_investment_value: String,
    pub total_investment_cost: String,
    pub total_investment_gain: String,
    pub total_investment_gain_percentage: String,
    pub total_money_lent: String,
    pub total_assets: String,
    pub net_worth: String,
    pub currency: String,
    pub record_type: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<NetWorthHistoryRecord> for NetWorthHistoryDB {
    fn from(domain: NetWorthHistoryRecord) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            snapshot_date: domain.snapshot_date,
            total_account_balance: domain
                .total_account_balance
                .round_dp(DECIMAL_PRECISION)
                .to_string(),
            total_investment_value: domain
                .total_investment_value
                .round_dp(DECIMAL_PRECISION)
                .to_string(),
            total_investment_cost: domain
                .total_investment_cost
                .round_dp(DECIMAL_PRECISION)
                .to_string(),
            total_investment_gain: domain
                .total_investment_gain
                .round_dp(DECIMAL_PRECISION)
                .to_string(),
            total_investment_gain_percentage: domain
                .total_investment_gain_percentage
                .round_dp(DECIMAL_PRECISION)
                .to_string(),
            total_money_lent: domain
                .total_money_lent
                .round_dp(DECIMAL_PRECISION)
                .to_string(),
            total_assets: domain.total_assets.round_dp(DECIMAL_PRECISION).to_string(),
            net_worth: domain.net_worth.round_dp(DECIMAL_PRECISION).to_string(),
            currency: domain.currency,
            record_type: domain.record_type,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}

impl From<NetWorthHistoryDB> for NetWorthHistoryRecord {
    fn from(db: NetWorthHistoryDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            snapshot_date: db.snapshot_date,
            total_account_balance: Decimal::from_str(&db.total_account_balance)
                .unwrap_or_default(),
            total_investment_value: Decimal::from_str(&db.total_investment_value)
                .unwrap_or_default(),
            total_investment_cost: Decimal::from_str(&db.total_investment_cost)
                .unwrap_or_default(),
            total_investment_gain: Decimal::from_str(&db.total_investment_gain)
                .unwrap_or_default(),
            total_investment_gain_percentage: Decimal::from_str(
                &db.total_investment_gain_percentage,
            )
            .unwrap_or_default(),
            total_money_lent: Decimal::from_str(&db.total_money_lent).unwrap_or_default(),
            total_assets: Decimal::from_str(&db.total_assets).unwrap_or_default(),
            net_worth: Decimal::from_str(&db.net_worth).unwrap_or_default(),
            currency: db.currency,
            record_type: db.record_type,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::DECIMAL_PRECISION;

/// Domain model for a bank account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub bank_name: String,
    pub balance: Decimal,
    pub currency: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for accounts
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub bank_name: String,
    pub balance: String,
    pub currency: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<AccountDB> for Account {
    fn from(db: AccountDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            bank_name: db.bank_name,
            balance: Decimal::from_str(&db.balance).unwrap_or_default(),
            currency: db.currency,
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<Account> for AccountDB {
    fn from(domain: Account) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            name: domain.name,
            bank_name: domain.bank_name,
            balance: domain.balance.round_dp(DECIMAL_PRECISION).to_string(),
            currency: domain.currency,
            is_active: domain.is_active,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}

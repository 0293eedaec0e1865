use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::DECIMAL_PRECISION;

use super::debts_constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebtStatus {
    Active,
    PartiallyPaid,
    FullyPaid,
    Overdue,
    Defaulted,
}

impl DebtStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebtStatus::Active => DEBT_STATUS_ACTIVE,
            DebtStatus::PartiallyPaid => DEBT_STATUS_PARTIALLY_PAID,
            DebtStatus::FullyPaid => DEBT_STATUS_FULLY_PAID,
            DebtStatus::Overdue => DEBT_STATUS_OVERDUE,
            DebtStatus::Defaulted => DEBT_STATUS_DEFAULTED,
        }
    }

    /// Only open lent money counts toward net worth
    pub fn counts_toward_net_worth(&self) -> bool {
        matches!(self, DebtStatus::Active | DebtStatus::PartiallyPaid)
    }
}

impl FromStr for DebtStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            DEBT_STATUS_ACTIVE => Ok(DebtStatus::Active),
            DEBT_STATUS_PARTIALLY_PAID => Ok(DebtStatus::PartiallyPaid),
            DEBT_STATUS_FULLY_PAID => Ok(DebtStatus::FullyPaid),
            DEBT_STATUS_OVERDUE => Ok(DebtStatus::Overdue),
            DEBT_STATUS_DEFAULTED => Ok(DebtStatus::Defaulted),
            _ => Err(format!("Unknown debt status: {}", s)),
        }
    }
}

/// A single repayment event against a lent-money record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DebtRepayment {
    pub id: String,
    pub debt_id: String,
    pub amount: Decimal,
    pub repayment_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// Domain model for money lent out, with its repayment history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    pub user_id: String,
    pub borrower_name: String,
    pub amount: Decimal,
    pub interest_rate: Decimal,
    pub lent_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub status: String,
    pub repayments: Vec<DebtRepayment>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Debt {
    pub fn status(&self) -> DebtStatus {
        DebtStatus::from_str(&self.status).unwrap_or(DebtStatus::Defaulted)
    }

    pub fn counts_toward_net_worth(&self) -> bool {
        self.status().counts_toward_net_worth()
    }
}

/// Database model for debts
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::debts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DebtDB {
    pub id: String,
    pub user_id: String,
    pub borrower_name: String,
    pub amount: String,
    pub interest_rate: String,
    pub lent_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl DebtDB {
    pub fn into_domain(self, repayments: Vec<DebtRepayment>) -> Debt {
        Debt {
            id: self.id,
            user_id: self.user_id,
            borrower_name: self.borrower_name,
            amount: Decimal::from_str(&self.amount).unwrap_or_default(),
            interest_rate: Decimal::from_str(&self.interest_rate).unwrap_or_default(),
            lent_date: self.lent_date,
            due_date: self.due_date,
            status: self.status,
            repayments,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<Debt> for DebtDB {
    fn from(domain: Debt) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            borrower_name: domain.borrower_name,
            amount: domain.amount.round_dp(DECIMAL_PRECISION).to_string(),
            interest_rate: domain.interest_rate.round_dp(DECIMAL_PRECISION).to_string(),
            lent_date: domain.lent_date,
            due_date: domain.due_date,
            status: domain.status,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}

/// Database model for debt repayments
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::debt_repayments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DebtRepaymentDB {
    pub id: String,
    pub debt_id: String,
    pub amount: String,
    pub repayment_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl From<DebtRepaymentDB> for DebtRepayment {
    fn from(db: DebtRepaymentDB) -> Self {
        Self {
            id: db.id,
            debt_id: db.debt_id,
            amount: Decimal::from_str(&db.amount).unwrap_or_default(),
            repayment_date: db.repayment_date,
            created_at: db.created_at,
        }
    }
}

impl From<DebtRepayment> for DebtRepaymentDB {
    fn from(domain: DebtRepayment) -> Self {
        Self {
            id: domain.id,
            debt_id: domain.debt_id,
            amount: domain.amount.round_dp(DECIMAL_PRECISION).to_string(),
            repayment_date: domain.repayment_date,
            created_at: domain.created_at,
        }
    }
}

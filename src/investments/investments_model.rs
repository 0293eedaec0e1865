use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::accounts::Account;
use crate::constants::DECIMAL_PRECISION;

use super::investments_constants::*;

/// Investment categories understood by the net worth engine.
///
/// Types held outside a bank (gold, bonds, mutual funds, crypto, real estate)
/// never withhold cash from a linked account; every other type is treated as
/// money parked in the bank it is linked to (fixed deposits and the like).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentType {
    Stocks,
    MutualFunds,
    Gold,
    Bonds,
    Crypto,
    RealEstate,
    FixedDeposit,
    RecurringDeposit,
    Ppf,
    Other,
}

impl InvestmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentType::Stocks => INVESTMENT_TYPE_STOCKS,
            InvestmentType::MutualFunds => INVESTMENT_TYPE_MUTUAL_FUNDS,
            InvestmentType::Gold => INVESTMENT_TYPE_GOLD,
            InvestmentType::Bonds => INVESTMENT_TYPE_BONDS,
            InvestmentType::Crypto => INVESTMENT_TYPE_CRYPTO,
            InvestmentType::RealEstate => INVESTMENT_TYPE_REAL_ESTATE,
            InvestmentType::FixedDeposit => INVESTMENT_TYPE_FIXED_DEPOSIT,
            InvestmentType::RecurringDeposit => INVESTMENT_TYPE_RECURRING_DEPOSIT,
            InvestmentType::Ppf => INVESTMENT_TYPE_PPF,
            InvestmentType::Other => INVESTMENT_TYPE_OTHER,
        }
    }

    /// Held outside any bank account, so it never withholds cash
    pub fn is_external(&self) -> bool {
        matches!(
            self,
            InvestmentType::Gold
                | InvestmentType::Bonds
                | InvestmentType::MutualFunds
                | InvestmentType::Crypto
                | InvestmentType::RealEstate
        )
    }
}

impl FromStr for InvestmentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            INVESTMENT_TYPE_STOCKS => Ok(InvestmentType::Stocks),
            INVESTMENT_TYPE_MUTUAL_FUNDS => Ok(InvestmentType::MutualFunds),
            INVESTMENT_TYPE_GOLD => Ok(InvestmentType::Gold),
            INVESTMENT_TYPE_BONDS => Ok(InvestmentType::Bonds),
            INVESTMENT_TYPE_CRYPTO => Ok(InvestmentType::Crypto),
            INVESTMENT_TYPE_REAL_ESTATE => Ok(InvestmentType::RealEstate),
            INVESTMENT_TYPE_FIXED_DEPOSIT => Ok(InvestmentType::FixedDeposit),
            INVESTMENT_TYPE_RECURRING_DEPOSIT => Ok(InvestmentType::RecurringDeposit),
            INVESTMENT_TYPE_PPF => Ok(InvestmentType::Ppf),
            INVESTMENT_TYPE_OTHER => Ok(InvestmentType::Other),
            _ => Err(format!("Unknown investment type: {}", s)),
        }
    }
}

/// Domain model for an investment, with the linked bank account when one exists
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub investment_type: String,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub current_price: Decimal,
    pub account_id: Option<String>,
    pub account: Option<Account>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Investment {
    pub fn investment_type(&self) -> InvestmentType {
        InvestmentType::from_str(&self.investment_type).unwrap_or(InvestmentType::Other)
    }

    pub fn cost_basis(&self) -> Decimal {
        self.quantity * self.purchase_price
    }

    pub fn market_value(&self) -> Decimal {
        self.quantity * self.current_price
    }

    /// Amount of the linked bank account's balance this investment earmarks.
    ///
    /// Stocks withhold their full cost basis; every other bank-held type
    /// withholds its principal only. Externally held types and investments
    /// without a linked account withhold nothing.
    pub fn bank_held_amount(&self) -> Option<Decimal> {
        if self.account_id.is_none() {
            return None;
        }
        let investment_type = self.investment_type();
        if investment_type.is_external() {
            return None;
        }
        match investment_type {
            InvestmentType::Stocks => Some(self.cost_basis()),
            _ => Some(self.purchase_price),
        }
    }
}

/// Database model for investments
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::investments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct InvestmentDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub investment_type: String,
    pub quantity: String,
    pub purchase_price: String,
    pub current_price: String,
    pub account_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl InvestmentDB {
    pub fn into_domain(self, account: Option<Account>) -> Investment {
        Investment {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            investment_type: self.investment_type,
            quantity: Decimal::from_str(&self.quantity).unwrap_or_default(),
            purchase_price: Decimal::from_str(&self.purchase_price).unwrap_or_default(),
            current_price: Decimal::from_str(&self.current_price).unwrap_or_default(),
            account_id: self.account_id,
            account,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<Investment> for InvestmentDB {
    fn from(domain: Investment) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            name: domain.name,
            investment_type: domain.investment_type,
            quantity: domain.quantity.round_dp(DECIMAL_PRECISION).to_string(),
            purchase_price: domain.purchase_price.round_dp(DECIMAL_PRECISION).to_string(),
            current_price: domain.current_price.round_dp(DECIMAL_PRECISION).to_string(),
            account_id: domain.account_id,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point-in-time net worth figures for one user.
///
/// `total_assets` is always the sum of account balances, investment value and
/// money lent; `net_worth` equals `total_assets` because debts owed by the
/// user are not modeled yet (known limitation of the accounting model).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSnapshot {
    pub total_account_balance: Decimal,
    pub total_investment_value: Decimal,
    pub total_investment_cost: Decimal,
    pub total_investment_gain: Decimal,
    pub total_investment_gain_percentage: Decimal,
    pub total_money_lent: Decimal,
    pub total_assets: Decimal,
    pub net_worth: Decimal,
    pub currency: String,
    pub as_of: DateTime<Utc>,
}

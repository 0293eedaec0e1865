use rust_decimal::Decimal;
use std::collections::HashMap;

use super::investments_model::Investment;
use crate::errors::Result;

/// Read-only access to a user's investments. Investment CRUD lives outside
/// this core.
pub trait InvestmentReadRepositoryTrait: Send + Sync {
    fn list_investments(&self, user_id: &str) -> Result<Vec<Investment>>;

    /// Total bank-held investment principal per bank name, used by the
    /// withheld balance allocator.
    fn withheld_amounts_by_bank(&self, user_id: &str) -> Result<HashMap<String, Decimal>>;
}

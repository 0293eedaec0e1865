use super::debts_model::Debt;
use crate::errors::Result;

/// Read-only access to a user's lent-money records, repayments included.
/// Debt CRUD lives outside this core.
pub trait DebtReadRepositoryTrait: Send + Sync {
    fn list_debts(&self, user_id: &str) -> Result<Vec<Debt>>;
}

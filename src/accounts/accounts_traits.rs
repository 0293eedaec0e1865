use super::accounts_model::Account;
use crate::errors::Result;

/// Read-only access to a user's accounts. Account CRUD lives outside this core.
pub trait AccountReadRepositoryTrait: Send + Sync {
    fn list_accounts(&self, user_id: &str) -> Result<Vec<Account>>;
}

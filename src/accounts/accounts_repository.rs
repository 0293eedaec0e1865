use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::schema::accounts::dsl::*;

use super::accounts_model::{Account, AccountDB};
use super::accounts_traits::AccountReadRepositoryTrait;

/// Repository reading account rows for net worth computation
pub struct AccountRepository {
    pool: Arc<DbPool>,
}

impl AccountRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl AccountReadRepositoryTrait for AccountRepository {
    fn list_accounts(&self, user_id_param: &str) -> Result<Vec<Account>> {
        let mut conn = get_connection(&self.pool)?;

        let results = accounts
            .filter(user_id.eq(user_id_param))
            .filter(is_active.eq(true))
            .order(name.asc())
            .load::<AccountDB>(&mut conn)?;

        Ok(results.into_iter().map(Account::from).collect())
    }
}

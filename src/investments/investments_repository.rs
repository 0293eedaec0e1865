use diesel::prelude::*;
use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use crate::accounts::{Account, AccountDB};
use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::schema::{accounts, investments};

use super::investments_model::{Investment, InvestmentDB};
use super::investments_traits::InvestmentReadRepositoryTrait;

/// Repository reading investment rows, joined with their linked bank account
pub struct InvestmentRepository {
    pool: Arc<DbPool>,
}

impl InvestmentRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl InvestmentReadRepositoryTrait for InvestmentRepository {
    fn list_investments(&self, user_id: &str) -> Result<Vec<Investment>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = investments::table
            .left_join(accounts::table)
            .filter(investments::user_id.eq(user_id))
            .order(investments::name.asc())
            .select((
                InvestmentDB::as_select(),
                Option::<AccountDB>::as_select(),
            ))
            .load::<(InvestmentDB, Option<AccountDB>)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(investment, account)| investment.into_domain(account.map(Account::from)))
            .collect())
    }

    fn withheld_amounts_by_bank(&self, user_id: &str) -> Result<HashMap<String, Decimal>> {
        let linked = self
            .list_investments(user_id)?
            .into_iter()
            .filter(|investment| investment.account.is_some());

        let mut withheld_by_bank: HashMap<String, Decimal> = HashMap::new();
        for investment in linked {
            let amount = match investment.bank_held_amount() {
                Some(amount) => amount,
                None => continue,
            };
            let bank_name = match investment.account.as_ref() {
                Some(account) => account.bank_name.clone(),
                None => continue,
            };
            *withheld_by_bank.entry(bank_name).or_insert(Decimal::ZERO) += amount;
        }

        debug!(
            "Computed withheld amounts for {} bank(s) of user {}",
            withheld_by_bank.len(),
            user_id
        );
        Ok(withheld_by_bank)
    }
}

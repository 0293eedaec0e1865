use diesel::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::schema::{debt_repayments, debts};

use super::debts_model::{Debt, DebtDB, DebtRepayment, DebtRepaymentDB};
use super::debts_traits::DebtReadRepositoryTrait;

/// Repository reading debt rows with their repayment history
pub struct DebtRepository {
    pool: Arc<DbPool>,
}

impl DebtRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl DebtReadRepositoryTrait for DebtRepository {
    fn list_debts(&self, user_id: &str) -> Result<Vec<Debt>> {
        let mut conn = get_connection(&self.pool)?;

        let debt_rows = debts::table
            .filter(debts::user_id.eq(user_id))
            .order(debts::lent_date.asc())
            .load::<DebtDB>(&mut conn)?;

        let debt_ids: Vec<String> = debt_rows.iter().map(|d| d.id.clone()).collect();

        let repayment_rows = debt_repayments::table
            .filter(debt_repayments::debt_id.eq_any(&debt_ids))
            .order(debt_repayments::repayment_date.asc())
            .load::<DebtRepaymentDB>(&mut conn)?;

        let mut repayments_by_debt: HashMap<String, Vec<DebtRepayment>> = HashMap::new();
        for row in repayment_rows {
            repayments_by_debt
                .entry(row.debt_id.clone())
                .or_default()
                .push(DebtRepayment::from(row));
        }

        Ok(debt_rows
            .into_iter()
            .map(|debt| {
                let repayments = repayments_by_debt.remove(&debt.id).unwrap_or_default();
                debt.into_domain(repayments)
            })
            .collect())
    }
}

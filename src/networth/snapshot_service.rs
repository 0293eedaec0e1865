use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;
use tokio::task::{self, JoinError};

use crate::accounts::AccountReadRepositoryTrait;
use crate::debts::DebtReadRepositoryTrait;
use crate::errors::{Error, Result};
use crate::inclusion::{EntityType, InclusionMap, InclusionRepositoryTrait};
use crate::investments::InvestmentReadRepositoryTrait;
use crate::settings::SettingsRepositoryTrait;

use super::accrual_calculator::remaining_owed_for_debt;
use super::networth_model::NetWorthSnapshot;
use super::networth_traits::NetWorthServiceTrait;
use super::withheld_allocator::allocate_free_balances;

/// Builds live net worth snapshots from the read-only stores.
///
/// All upstream reads fan out concurrently and the computation is
/// all-or-nothing: any failing read aborts with an error naming the
/// subsystem, never a partial snapshot.
pub struct NetWorthService {
    accounts: Arc<dyn AccountReadRepositoryTrait>,
    investments: Arc<dyn InvestmentReadRepositoryTrait>,
    debts: Arc<dyn DebtReadRepositoryTrait>,
    inclusions: Arc<dyn InclusionRepositoryTrait>,
    settings: Arc<dyn SettingsRepositoryTrait>,
}

fn join_fetch<T>(
    subsystem: &'static str,
    joined: std::result::Result<Result<T>, JoinError>,
) -> Result<T> {
    match joined {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(Error::FetchFailed {
            subsystem,
            message: e.to_string(),
        }),
        Err(e) => Err(Error::FetchFailed {
            subsystem,
            message: e.to_string(),
        }),
    }
}

impl NetWorthService {
    pub fn new(
        accounts: Arc<dyn AccountReadRepositoryTrait>,
        investments: Arc<dyn InvestmentReadRepositoryTrait>,
        debts: Arc<dyn DebtReadRepositoryTrait>,
        inclusions: Arc<dyn InclusionRepositoryTrait>,
        settings: Arc<dyn SettingsRepositoryTrait>,
    ) -> Self {
        Self {
            accounts,
            investments,
            debts,
            inclusions,
            settings,
        }
    }
}

#[async_trait]
impl NetWorthServiceTrait for NetWorthService {
    async fn compute_snapshot(&self, user_id: &str) -> Result<NetWorthSnapshot> {
        if user_id.trim().is_empty() {
            return Err(Error::Unauthorized("User context is required".to_string()));
        }

        let accounts_task = {
            let repo = self.accounts.clone();
            let user = user_id.to_string();
            task::spawn_blocking(move || repo.list_accounts(&user))
        };
        let investments_task = {
            let repo = self.investments.clone();
            let user = user_id.to_string();
            task::spawn_blocking(move || repo.list_investments(&user))
        };
        let debts_task = {
            let repo = self.debts.clone();
            let user = user_id.to_string();
            task::spawn_blocking(move || repo.list_debts(&user))
        };
        let withheld_task = {
            let repo = self.investments.clone();
            let user = user_id.to_string();
            task::spawn_blocking(move || repo.withheld_amounts_by_bank(&user))
        };
        let inclusions_task = {
            let repo = self.inclusions.clone();
            let user = user_id.to_string();
            task::spawn_blocking(move || repo.get_by_user(&user))
        };
        let currency_task = {
            let repo = self.settings.clone();
            let user = user_id.to_string();
            task::spawn_blocking(move || repo.get_currency(&user))
        };

        let (accounts_res, investments_res, debts_res, withheld_res, inclusions_res, currency_res) = tokio::join!(
            accounts_task,
            investments_task,
            debts_task,
            withheld_task,
            inclusions_task,
            currency_task
        );

        let accounts = join_fetch("accounts", accounts_res)?;
        let investments = join_fetch("investments", investments_res)?;
        let debts = join_fetch("debts", debts_res)?;
        let withheld_by_bank = join_fetch("withheld amounts", withheld_res)?;
        let inclusion_rows = join_fetch("inclusion overrides", inclusions_res)?;
        let currency = join_fetch("user currency", currency_res)?;

        let inclusion_map = InclusionMap::from(inclusion_rows);
        let free_balances = allocate_free_balances(&accounts, &withheld_by_bank);

        let total_account_balance: Decimal = accounts
            .iter()
            .filter(|account| inclusion_map.is_included(EntityType::Account, &account.id))
            .map(|account| {
                free_balances
                    .get(&account.id)
                    .copied()
                    .unwrap_or(account.balance)
            })
            .sum();

        let mut total_investment_cost = Decimal::ZERO;
        let mut total_investment_value = Decimal::ZERO;
        for investment in investments
            .iter()
            .filter(|investment| inclusion_map.is_included(EntityType::Investment, &investment.id))
        {
            total_investment_cost += investment.cost_basis();
            total_investment_value += investment.market_value();
        }
        let total_investment_gain = total_investment_value - total_investment_cost;
        let total_investment_gain_percentage = if total_investment_cost.is_zero() {
            Decimal::ZERO
        } else {
            total_investment_gain / total_investment_cost * dec!(100)
        };

        let today = Utc::now().date_naive();
        let mut total_money_lent = Decimal::ZERO;
        for debt in debts.iter().filter(|debt| {
            debt.counts_toward_net_worth() && inclusion_map.is_included(EntityType::Debt, &debt.id)
        }) {
            let owed = remaining_owed_for_debt(debt, today)?;
            total_money_lent += owed.max(Decimal::ZERO);
        }

        let total_assets = total_account_balance + total_investment_value + total_money_lent;
        // No owed-liability modeling yet, so net worth equals total assets
        let net_worth = total_assets;

        debug!(
            "Computed snapshot for user {}: {} account(s), {} investment(s), {} debt(s)",
            user_id,
            accounts.len(),
            investments.len(),
            debts.len()
        );

        Ok(NetWorthSnapshot {
            total_account_balance,
            total_investment_value,
            total_investment_cost,
            total_investment_gain,
            total_investment_gain_percentage,
            total_money_lent,
            total_assets,
            net_worth,
            currency,
            as_of: Utc::now(),
        })
    }
}

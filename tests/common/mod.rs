#![allow(dead_code)]

use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use networth_core::accounts::{Account, AccountDB, AccountRepository};
use networth_core::db::{self, DbPool};
use networth_core::debts::{Debt, DebtDB, DebtRepayment, DebtRepaymentDB, DebtRepository};
use networth_core::inclusion::{InclusionRepository, InclusionService};
use networth_core::investments::{Investment, InvestmentDB, InvestmentRepository};
use networth_core::schema;
use networth_core::settings::SettingsRepository;
use networth_core::{HistoryRepository, NetWorthHistoryService, NetWorthService};

pub struct TestDb {
    pub pool: Arc<DbPool>,
    _dir: tempfile::TempDir,
}

pub fn setup_test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = db::init(dir.path().to_str().unwrap()).expect("Failed to initialize database");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run migrations");
    TestDb { pool, _dir: dir }
}

pub fn networth_service(pool: &Arc<DbPool>) -> Arc<NetWorthService> {
    Arc::new(NetWorthService::new(
        Arc::new(AccountRepository::new(pool.clone())),
        Arc::new(InvestmentRepository::new(pool.clone())),
        Arc::new(DebtRepository::new(pool.clone())),
        Arc::new(InclusionRepository::new(pool.clone())),
        Arc::new(SettingsRepository::new(pool.clone())),
    ))
}

pub fn history_service(pool: &Arc<DbPool>) -> NetWorthHistoryService {
    NetWorthHistoryService::new(
        networth_service(pool),
        Arc::new(HistoryRepository::new(pool.clone())),
    )
}

pub fn inclusion_service(pool: &Arc<DbPool>) -> InclusionService {
    InclusionService::new(Arc::new(InclusionRepository::new(pool.clone())))
}

pub fn seed_account(
    pool: &Arc<DbPool>,
    user_id: &str,
    bank_name: &str,
    balance: Decimal,
) -> String {
    let now = Utc::now().naive_utc();
    let account = Account {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        name: format!("{} account", bank_name),
        bank_name: bank_name.to_string(),
        balance,
        currency: "USD".to_string(),
        is_active: true,
        created_at: now,
        updated_at: now,
    };
    let account_id = account.id.clone();

    let mut conn = pool.get().expect("Failed to get connection");
    diesel::insert_into(schema::accounts::table)
        .values(&AccountDB::from(account))
        .execute(&mut conn)
        .expect("Failed to seed account");

    account_id
}

pub fn seed_investment(
    pool: &Arc<DbPool>,
    user_id: &str,
    investment_type: &str,
    quantity: Decimal,
    purchase_price: Decimal,
    current_price: Decimal,
    account_id: Option<&str>,
) -> String {
    let now = Utc::now().naive_utc();
    let investment = Investment {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        name: format!("{} investment", investment_type),
        investment_type: investment_type.to_string(),
        quantity,
        purchase_price,
        current_price,
        account_id: account_id.map(|id| id.to_string()),
        account: None,
        created_at: now,
        updated_at: now,
    };
    let investment_id = investment.id.clone();

    let mut conn = pool.get().expect("Failed to get connection");
    diesel::insert_into(schema::investments::table)
        .values(&InvestmentDB::from(investment))
        .execute(&mut conn)
        .expect("Failed to seed investment");

    investment_id
}

pub fn seed_debt(
    pool: &Arc<DbPool>,
    user_id: &str,
    amount: Decimal,
    interest_rate: Decimal,
    lent_date: NaiveDate,
    status: &str,
) -> String {
    let now = Utc::now().naive_utc();
    let debt = Debt {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        borrower_name: "Borrower".to_string(),
        amount,
        interest_rate,
        lent_date,
        due_date: None,
        status: status.to_string(),
        repayments: Vec::new(),
        created_at: now,
        updated_at: now,
    };
    let debt_id = debt.id.clone();

    let mut conn = pool.get().expect("Failed to get connection");
    diesel::insert_into(schema::debts::table)
        .values(&DebtDB::from(debt))
        .execute(&mut conn)
        .expect("Failed to seed debt");

    debt_id
}

pub fn seed_repayment(
    pool: &Arc<DbPool>,
    debt_id: &str,
    amount: Decimal,
    repayment_date: NaiveDate,
) {
    let repayment = DebtRepayment {
        id: Uuid::new_v4().to_string(),
        debt_id: debt_id.to_string(),
        amount,
        repayment_date,
        created_at: Utc::now().naive_utc(),
    };

    let mut conn = pool.get().expect("Failed to get connection");
    diesel::insert_into(schema::debt_repayments::table)
        .values(&DebtRepaymentDB::from(repayment))
        .execute(&mut conn)
        .expect("Failed to seed repayment");
}

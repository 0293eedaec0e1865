mod common;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use networth_core::inclusion::{EntityType, InclusionUpdate};
use networth_core::{Error, NetWorthServiceTrait};
use networth_core::inclusion::InclusionServiceTrait;

use common::*;

#[tokio::test]
async fn single_account_snapshot() {
    let test_db = setup_test_db();
    let user = "user-snapshot-1";
    seed_account(&test_db.pool, user, "First Bank", dec!(1000));

    let service = networth_service(&test_db.pool);
    let snapshot = service.compute_snapshot(user).await.unwrap();

    assert_eq!(snapshot.total_account_balance, dec!(1000));
    assert_eq!(snapshot.total_investment_value, Decimal::ZERO);
    assert_eq!(snapshot.total_money_lent, Decimal::ZERO);
    assert_eq!(snapshot.total_assets, dec!(1000));
    assert_eq!(snapshot.net_worth, dec!(1000));
    assert_eq!(snapshot.currency, "USD");
}

#[tokio::test]
async fn excluded_account_is_left_out() {
    let test_db = setup_test_db();
    let user = "user-snapshot-2";
    let account_id = seed_account(&test_db.pool, user, "First Bank", dec!(1000));

    let inclusions = inclusion_service(&test_db.pool);
    inclusions
        .set_inclusion(
            user,
            InclusionUpdate {
                entity_type: EntityType::Account,
                entity_id: account_id,
                include_in_net_worth: false,
            },
        )
        .await
        .unwrap();

    let service = networth_service(&test_db.pool);
    let snapshot = service.compute_snapshot(user).await.unwrap();

    assert_eq!(snapshot.total_account_balance, Decimal::ZERO);
    assert_eq!(snapshot.total_assets, Decimal::ZERO);
    assert_eq!(snapshot.net_worth, Decimal::ZERO);
}

#[tokio::test]
async fn fixed_deposit_withholds_linked_bank_balance() {
    let test_db = setup_test_db();
    let user = "user-snapshot-3";
    let account_id = seed_account(&test_db.pool, user, "First Bank", dec!(5000));
    seed_investment(
        &test_db.pool,
        user,
        "FIXED_DEPOSIT",
        dec!(1),
        dec!(2000),
        dec!(2100),
        Some(&account_id),
    );

    let service = networth_service(&test_db.pool);
    let snapshot = service.compute_snapshot(user).await.unwrap();

    // 2000 of the account balance is earmarked by the deposit, so free cash
    // is 3000 while the deposit itself counts at market value.
    assert_eq!(snapshot.total_account_balance, dec!(3000));
    assert_eq!(snapshot.total_investment_value, dec!(2100));
    assert_eq!(snapshot.total_assets, dec!(5100));
}

#[tokio::test]
async fn externally_held_investment_withholds_nothing() {
    let test_db = setup_test_db();
    let user = "user-snapshot-4";
    let account_id = seed_account(&test_db.pool, user, "First Bank", dec!(5000));
    seed_investment(
        &test_db.pool,
        user,
        "GOLD",
        dec!(10),
        dec!(50),
        dec!(60),
        Some(&account_id),
    );

    let service = networth_service(&test_db.pool);
    let snapshot = service.compute_snapshot(user).await.unwrap();

    assert_eq!(snapshot.total_account_balance, dec!(5000));
    assert_eq!(snapshot.total_investment_value, dec!(600));
}

#[tokio::test]
async fn gain_percentage_is_zero_when_cost_is_zero() {
    let test_db = setup_test_db();
    let user = "user-snapshot-5";
    seed_investment(
        &test_db.pool,
        user,
        "STOCKS",
        dec!(2),
        Decimal::ZERO,
        dec!(50),
        None,
    );

    let service = networth_service(&test_db.pool);
    let snapshot = service.compute_snapshot(user).await.unwrap();

    assert_eq!(snapshot.total_investment_cost, Decimal::ZERO);
    assert_eq!(snapshot.total_investment_value, dec!(100));
    assert_eq!(snapshot.total_investment_gain_percentage, Decimal::ZERO);
}

#[tokio::test]
async fn overpaid_debt_never_reduces_money_lent() {
    let test_db = setup_test_db();
    let user = "user-snapshot-6";
    let lent_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let debt_id = seed_debt(&test_db.pool, user, dec!(100), Decimal::ZERO, lent_date, "ACTIVE");
    seed_repayment(
        &test_db.pool,
        &debt_id,
        dec!(150),
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
    );

    let service = networth_service(&test_db.pool);
    let snapshot = service.compute_snapshot(user).await.unwrap();

    assert_eq!(snapshot.total_money_lent, Decimal::ZERO);
}

#[tokio::test]
async fn settled_debts_are_excluded_from_money_lent() {
    let test_db = setup_test_db();
    let user = "user-snapshot-7";
    let lent_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    seed_debt(&test_db.pool, user, dec!(700), Decimal::ZERO, lent_date, "ACTIVE");
    seed_debt(&test_db.pool, user, dec!(300), Decimal::ZERO, lent_date, "FULLY_PAID");
    seed_debt(&test_db.pool, user, dec!(500), Decimal::ZERO, lent_date, "DEFAULTED");

    let service = networth_service(&test_db.pool);
    let snapshot = service.compute_snapshot(user).await.unwrap();

    assert_eq!(snapshot.total_money_lent, dec!(700));
}

#[tokio::test]
async fn accounting_identity_holds_for_mixed_portfolio() {
    let test_db = setup_test_db();
    let user = "user-snapshot-8";
    let account_id = seed_account(&test_db.pool, user, "First Bank", dec!(8000));
    seed_account(&test_db.pool, user, "Second Bank", dec!(1500));
    seed_investment(
        &test_db.pool,
        user,
        "FIXED_DEPOSIT",
        dec!(1),
        dec!(3000),
        dec!(3200),
        Some(&account_id),
    );
    seed_investment(&test_db.pool, user, "STOCKS", dec!(10), dec!(100), dec!(120), None);
    let lent_date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    seed_debt(&test_db.pool, user, dec!(2000), Decimal::ZERO, lent_date, "PARTIALLY_PAID");

    let service = networth_service(&test_db.pool);
    let snapshot = service.compute_snapshot(user).await.unwrap();

    assert_eq!(
        snapshot.total_assets,
        snapshot.total_account_balance + snapshot.total_investment_value
            + snapshot.total_money_lent
    );
    assert_eq!(snapshot.net_worth, snapshot.total_assets);
    assert_eq!(snapshot.total_account_balance, dec!(6500));
    assert_eq!(snapshot.total_investment_value, dec!(4400));
    assert_eq!(snapshot.total_money_lent, dec!(2000));
}

#[tokio::test]
async fn user_currency_preference_is_stamped() {
    let test_db = setup_test_db();
    let user = "user-snapshot-9";
    seed_account(&test_db.pool, user, "First Bank", dec!(100));

    {
        use networth_core::settings::{SettingsRepository, SettingsRepositoryTrait};
        let settings = SettingsRepository::new(test_db.pool.clone());
        settings.set_currency(user, "EUR").unwrap();
    }

    let service = networth_service(&test_db.pool);
    let snapshot = service.compute_snapshot(user).await.unwrap();

    assert_eq!(snapshot.currency, "EUR");
}

#[tokio::test]
async fn empty_user_is_unauthorized() {
    let test_db = setup_test_db();

    let service = networth_service(&test_db.pool);
    let result = service.compute_snapshot("").await;

    assert!(matches!(result, Err(Error::Unauthorized(_))));
}

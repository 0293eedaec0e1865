use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::ACCRUAL_DAYS_PER_YEAR;
use crate::debts::{Debt, DebtRepayment};
use crate::errors::{Error, Result, ValidationError};

/// Remaining amount owed on a lent-money record as of a date.
///
/// Simple interest accrues day by day (ACT/365) on the outstanding principal.
/// Repayments are applied in date order, settling accrued interest before
/// reducing principal. Repayments dated after `as_of` are ignored, and time
/// before `lent_date` never accrues. The result is clamped to zero.
pub fn remaining_owed(
    principal: Decimal,
    annual_rate_percent: Decimal,
    lent_date: NaiveDate,
    repayments: &[DebtRepayment],
    as_of: NaiveDate,
) -> Result<Decimal> {
    if principal < Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Debt principal cannot be negative".to_string(),
        )));
    }
    if annual_rate_percent < Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Interest rate cannot be negative".to_string(),
        )));
    }

    let daily_rate = annual_rate_percent / dec!(100) / Decimal::from(ACCRUAL_DAYS_PER_YEAR);

    let mut ordered: Vec<&DebtRepayment> = repayments
        .iter()
        .filter(|r| r.repayment_date <= as_of)
        .collect();
    ordered.sort_by_key(|r| r.repayment_date);

    let mut outstanding = principal;
    let mut accrued_interest = Decimal::ZERO;
    let mut cursor = lent_date;

    for repayment in ordered {
        if repayment.amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Repayment amount cannot be negative".to_string(),
            )));
        }

        let days = (repayment.repayment_date - cursor).num_days().max(0);
        accrued_interest += outstanding * daily_rate * Decimal::from(days);
        cursor = repayment.repayment_date.max(cursor);

        let mut payment = repayment.amount;
        let interest_paid = payment.min(accrued_interest);
        accrued_interest -= interest_paid;
        payment -= interest_paid;
        outstanding = (outstanding - payment).max(Decimal::ZERO);
    }

    let days = (as_of - cursor).num_days().max(0);
    accrued_interest += outstanding * daily_rate * Decimal::from(days);

    Ok((outstanding + accrued_interest).max(Decimal::ZERO))
}

/// Convenience wrapper taking a full debt record. Status filtering is the
/// snapshot builder's responsibility, not the calculator's.
pub fn remaining_owed_for_debt(debt: &Debt, as_of: NaiveDate) -> Result<Decimal> {
    remaining_owed(
        debt.amount,
        debt.interest_rate,
        debt.lent_date,
        &debt.repayments,
        as_of,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn repayment(amount: Decimal, on: &str) -> DebtRepayment {
        DebtRepayment {
            id: Uuid::new_v4().to_string(),
            debt_id: "debt-1".to_string(),
            amount,
            repayment_date: date(on),
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn zero_rate_returns_principal_minus_repayments() {
        let owed = remaining_owed(
            dec!(1000),
            Decimal::ZERO,
            date("2024-01-01"),
            &[repayment(dec!(400), "2024-03-01")],
            date("2024-06-01"),
        )
        .unwrap();
        assert_eq!(owed, dec!(600));
    }

    #[test]
    fn one_year_of_simple_interest() {
        let owed = remaining_owed(
            dec!(1000),
            dec!(10),
            date("2023-01-01"),
            &[],
            date("2024-01-01"),
        )
        .unwrap();
        assert_eq!(owed, dec!(1100));
    }

    #[test]
    fn repayments_settle_interest_before_principal() {
        // 100 of interest accrued by the repayment date, so a 150 payment
        // leaves 950 of principal and no carried interest.
        let owed = remaining_owed(
            dec!(1000),
            dec!(10),
            date("2023-01-01"),
            &[repayment(dec!(150), "2024-01-01")],
            date("2024-01-01"),
        )
        .unwrap();
        assert_eq!(owed, dec!(950));
    }

    #[test]
    fn overpayment_clamps_to_zero() {
        let owed = remaining_owed(
            dec!(100),
            Decimal::ZERO,
            date("2024-01-01"),
            &[repayment(dec!(150), "2024-02-01")],
            date("2024-06-01"),
        )
        .unwrap();
        assert_eq!(owed, Decimal::ZERO);
    }

    #[test]
    fn as_of_before_lent_date_accrues_nothing() {
        let owed = remaining_owed(
            dec!(500),
            dec!(12),
            date("2024-06-01"),
            &[],
            date("2024-01-01"),
        )
        .unwrap();
        assert_eq!(owed, dec!(500));
    }

    #[test]
    fn repayments_after_as_of_are_ignored() {
        let owed = remaining_owed(
            dec!(1000),
            Decimal::ZERO,
            date("2024-01-01"),
            &[repayment(dec!(400), "2024-09-01")],
            date("2024-06-01"),
        )
        .unwrap();
        assert_eq!(owed, dec!(1000));
    }

    #[test]
    fn negative_principal_is_rejected() {
        let result = remaining_owed(
            dec!(-1),
            Decimal::ZERO,
            date("2024-01-01"),
            &[],
            date("2024-06-01"),
        );
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn negative_rate_is_rejected() {
        let result = remaining_owed(
            dec!(100),
            dec!(-5),
            date("2024-01-01"),
            &[],
            date("2024-06-01"),
        );
        assert!(matches!(result, Err(Error::Validation(_))));
    }
}

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::accounts::Account;

/// Splits each bank's withheld total across that bank's accounts in
/// proportion to each account's share of the bank balance, and returns the
/// resulting free balance per account id.
///
/// Accounts at a bank with no withheld amount pass through unchanged, as do
/// accounts at a bank whose total balance is zero.
pub fn allocate_free_balances(
    accounts: &[Account],
    withheld_by_bank: &HashMap<String, Decimal>,
) -> HashMap<String, Decimal> {
    let mut bank_totals: HashMap<&str, Decimal> = HashMap::new();
    for account in accounts {
        *bank_totals
            .entry(account.bank_name.as_str())
            .or_insert(Decimal::ZERO) += account.balance;
    }

    let mut free_balances = HashMap::with_capacity(accounts.len());
    for account in accounts {
        let withheld_total = withheld_by_bank
            .get(&account.bank_name)
            .copied()
            .unwrap_or(Decimal::ZERO);
        let bank_total = bank_totals
            .get(account.bank_name.as_str())
            .copied()
            .unwrap_or(Decimal::ZERO);

        let free_balance = if withheld_total.is_zero() || bank_total.is_zero() {
            account.balance
        } else {
            let proportion = account.balance / bank_total;
            account.balance - withheld_total * proportion
        };

        free_balances.insert(account.id.clone(), free_balance);
    }

    free_balances
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn account(id: &str, bank_name: &str, balance: Decimal) -> Account {
        let now = Utc::now().naive_utc();
        Account {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            name: format!("Account {}", id),
            bank_name: bank_name.to_string(),
            balance,
            currency: "USD".to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn splits_withheld_amount_by_balance_share() {
        let accounts = vec![
            account("a1", "First Bank", dec!(3000)),
            account("a2", "First Bank", dec!(2000)),
        ];
        let withheld = HashMap::from([("First Bank".to_string(), dec!(1000))]);

        let free = allocate_free_balances(&accounts, &withheld);

        assert_eq!(free["a1"], dec!(2400));
        assert_eq!(free["a2"], dec!(1600));
    }

    #[test]
    fn conserves_bank_total_minus_withheld() {
        let accounts = vec![
            account("a1", "First Bank", dec!(1234.56)),
            account("a2", "First Bank", dec!(789.01)),
            account("a3", "First Bank", dec!(450.43)),
        ];
        let withheld = HashMap::from([("First Bank".to_string(), dec!(500))]);

        let free = allocate_free_balances(&accounts, &withheld);
        let total_free: Decimal = free.values().copied().sum();

        let difference = (total_free - (dec!(2474) - dec!(500))).abs();
        assert!(difference < dec!(0.000001), "difference was {}", difference);
    }

    #[test]
    fn zero_withheld_passes_balances_through() {
        let accounts = vec![account("a1", "First Bank", dec!(5000))];
        let withheld = HashMap::new();

        let free = allocate_free_balances(&accounts, &withheld);

        assert_eq!(free["a1"], dec!(5000));
    }

    #[test]
    fn zero_bank_total_passes_balances_through() {
        let accounts = vec![
            account("a1", "Empty Bank", Decimal::ZERO),
            account("a2", "Empty Bank", Decimal::ZERO),
        ];
        let withheld = HashMap::from([("Empty Bank".to_string(), dec!(300))]);

        let free = allocate_free_balances(&accounts, &withheld);

        assert_eq!(free["a1"], Decimal::ZERO);
        assert_eq!(free["a2"], Decimal::ZERO);
    }

    #[test]
    fn other_banks_are_untouched() {
        let accounts = vec![
            account("a1", "First Bank", dec!(1000)),
            account("a2", "Second Bank", dec!(1000)),
        ];
        let withheld = HashMap::from([("First Bank".to_string(), dec!(400))]);

        let free = allocate_free_balances(&accounts, &withheld);

        assert_eq!(free["a1"], dec!(600));
        assert_eq!(free["a2"], dec!(1000));
    }
}

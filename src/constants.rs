/// Reporting currency used when the user has no stored preference
pub const DEFAULT_CURRENCY: &str = "USD";

/// Settings key holding the user's preferred reporting currency
pub const SETTING_KEY_CURRENCY: &str = "currency";

/// Decimal precision for monetary values persisted as text
pub const DECIMAL_PRECISION: u32 = 6;

/// Day-count convention for simple-interest accrual on lent money
pub const ACCRUAL_DAYS_PER_YEAR: i64 = 365;

/// Default row cap for history range queries
pub const DEFAULT_HISTORY_LIMIT: i64 = 365;

pub const INVESTMENT_TYPE_STOCKS: &str = "STOCKS";
pub const INVESTMENT_TYPE_MUTUAL_FUNDS: &str = "MUTUAL_FUNDS";
pub const INVESTMENT_TYPE_GOLD: &str = "GOLD";
pub const INVESTMENT_TYPE_BONDS: &str = "BONDS";
pub const INVESTMENT_TYPE_CRYPTO: &str = "CRYPTO";
pub const INVESTMENT_TYPE_REAL_ESTATE: &str = "REAL_ESTATE";
pub const INVESTMENT_TYPE_FIXED_DEPOSIT: &str = "FIXED_DEPOSIT";
pub const INVESTMENT_TYPE_RECURRING_DEPOSIT: &str = "RECURRING_DEPOSIT";
pub const INVESTMENT_TYPE_PPF: &str = "PPF";
pub const INVESTMENT_TYPE_OTHER: &str = "OTHER";

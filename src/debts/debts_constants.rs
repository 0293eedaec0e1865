pub const DEBT_STATUS_ACTIVE: &str = "ACTIVE";
pub const DEBT_STATUS_PARTIALLY_PAID: &str = "PARTIALLY_PAID";
pub const DEBT_STATUS_FULLY_PAID: &str = "FULLY_PAID";
pub const DEBT_STATUS_OVERDUE: &str = "OVERDUE";
pub const DEBT_STATUS_DEFAULTED: &str = "DEFAULTED";

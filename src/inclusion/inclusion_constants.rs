pub const ENTITY_TYPE_ACCOUNT: &str = "ACCOUNT";
pub const ENTITY_TYPE_INVESTMENT: &str = "INVESTMENT";
pub const ENTITY_TYPE_DEBT: &str = "DEBT";

pub(crate) mod debts_constants;
pub(crate) mod debts_model;
pub(crate) mod debts_repository;
pub(crate) mod debts_traits;

pub use debts_constants::*;
pub use debts_model::{Debt, DebtDB, DebtRepayment, DebtRepaymentDB, DebtStatus};
pub use debts_repository::DebtRepository;
pub use debts_traits::DebtReadRepositoryTrait;

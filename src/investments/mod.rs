pub(crate) mod investments_constants;
pub(crate) mod investments_model;
pub(crate) mod investments_repository;
pub(crate) mod investments_traits;

pub use investments_constants::*;
pub use investments_model::{Investment, InvestmentDB, InvestmentType};
pub use investments_repository::InvestmentRepository;
pub use investments_traits::InvestmentReadRepositoryTrait;

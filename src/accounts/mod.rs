pub(crate) mod accounts_model;
pub(crate) mod accounts_repository;
pub(crate) mod accounts_traits;

pub use accounts_model::{Account, AccountDB};
pub use accounts_repository::AccountRepository;
pub use accounts_traits::AccountReadRepositoryTrait;

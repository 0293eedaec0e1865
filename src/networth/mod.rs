pub(crate) mod accrual_calculator;
pub(crate) mod history_model;
pub(crate) mod history_repository;
pub(crate) mod history_service;
pub(crate) mod networth_model;
pub(crate) mod networth_traits;
pub(crate) mod snapshot_service;
pub(crate) mod withheld_allocator;

pub use accrual_calculator::{remaining_owed, remaining_owed_for_debt};
pub use history_model::{NetWorthHistoryDB, NetWorthHistoryRecord, RecordType};
pub use history_repository::HistoryRepository;
pub use history_service::NetWorthHistoryService;
pub use networth_model::NetWorthSnapshot;
pub use networth_traits::{HistoryRepositoryTrait, HistoryServiceTrait, NetWorthServiceTrait};
pub use snapshot_service::NetWorthService;
pub use withheld_allocator::allocate_free_balances;

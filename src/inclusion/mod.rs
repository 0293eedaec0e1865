pub(crate) mod inclusion_constants;
pub(crate) mod inclusion_model;
pub(crate) mod inclusion_repository;
pub(crate) mod inclusion_service;
pub(crate) mod inclusion_traits;

pub use inclusion_constants::*;
pub use inclusion_model::{
    EntityType, InclusionMap, InclusionUpdate, NetWorthInclusion, NetWorthInclusionDB,
};
pub use inclusion_repository::InclusionRepository;
pub use inclusion_service::InclusionService;
pub use inclusion_traits::{InclusionRepositoryTrait, InclusionServiceTrait};

use async_trait::async_trait;

use super::inclusion_model::{EntityType, InclusionMap, InclusionUpdate, NetWorthInclusion};
use crate::errors::Result;

/// Trait for inclusion override storage
pub trait InclusionRepositoryTrait: Send + Sync {
    fn get_by_user(&self, user_id: &str) -> Result<Vec<NetWorthInclusion>>;
    fn get_override(
        &self,
        user_id: &str,
        entity_type: EntityType,
        entity_id: &str,
    ) -> Result<Option<bool>>;
    fn upsert(&self, user_id: &str, update: &InclusionUpdate) -> Result<NetWorthInclusion>;
    fn bulk_upsert(
        &self,
        user_id: &str,
        updates: &[InclusionUpdate],
    ) -> Result<Vec<NetWorthInclusion>>;
    fn delete_excluded(&self, user_id: &str) -> Result<usize>;
}

/// Trait for the inclusion registry service
#[async_trait]
pub trait InclusionServiceTrait: Send + Sync {
    fn get_inclusions(&self, user_id: &str) -> Result<Vec<NetWorthInclusion>>;
    fn is_included(
        &self,
        user_id: &str,
        entity_type: EntityType,
        entity_id: &str,
    ) -> Result<bool>;
    fn load_inclusion_map(&self, user_id: &str) -> Result<InclusionMap>;
    async fn set_inclusion(
        &self,
        user_id: &str,
        update: InclusionUpdate,
    ) -> Result<NetWorthInclusion>;
    async fn bulk_set_inclusions(
        &self,
        user_id: &str,
        updates: Vec<InclusionUpdate>,
    ) -> Result<Vec<NetWorthInclusion>>;
    async fn reset_inclusions(&self, user_id: &str) -> Result<usize>;
}

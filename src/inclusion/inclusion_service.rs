use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::errors::{Error, Result};

use super::inclusion_model::{EntityType, InclusionMap, InclusionUpdate, NetWorthInclusion};
use super::inclusion_traits::{InclusionRepositoryTrait, InclusionServiceTrait};

/// Service for per-entity net worth inclusion overrides.
///
/// An entity with no stored override is always included; the registry never
/// checks that the referenced entity exists, a dangling override simply never
/// matches anything during snapshot building.
pub struct InclusionService {
    repository: Arc<dyn InclusionRepositoryTrait>,
}

impl InclusionService {
    pub fn new(repository: Arc<dyn InclusionRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn require_user(user_id: &str) -> Result<()> {
        if user_id.trim().is_empty() {
            return Err(Error::Unauthorized("User context is required".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl InclusionServiceTrait for InclusionService {
    fn get_inclusions(&self, user_id: &str) -> Result<Vec<NetWorthInclusion>> {
        Self::require_user(user_id)?;
        self.repository.get_by_user(user_id)
    }

    fn is_included(
        &self,
        user_id: &str,
        entity_type: EntityType,
        entity_id: &str,
    ) -> Result<bool> {
        Self::require_user(user_id)?;
        let included = match self.repository.get_override(user_id, entity_type, entity_id)? {
            Some(true) => true,
            Some(false) => false,
            None => true,
        };
        Ok(included)
    }

    fn load_inclusion_map(&self, user_id: &str) -> Result<InclusionMap> {
        Self::require_user(user_id)?;
        let rows = self.repository.get_by_user(user_id)?;
        Ok(InclusionMap::from(rows))
    }

    async fn set_inclusion(
        &self,
        user_id: &str,
        update: InclusionUpdate,
    ) -> Result<NetWorthInclusion> {
        Self::require_user(user_id)?;
        update.validate()?;
        self.repository.upsert(user_id, &update)
    }

    async fn bulk_set_inclusions(
        &self,
        user_id: &str,
        updates: Vec<InclusionUpdate>,
    ) -> Result<Vec<NetWorthInclusion>> {
        Self::require_user(user_id)?;
        for update in &updates {
            update.validate()?;
        }
        debug!(
            "Applying {} inclusion update(s) for user {}",
            updates.len(),
            user_id
        );
        self.repository.bulk_upsert(user_id, &updates)
    }

    async fn reset_inclusions(&self, user_id: &str) -> Result<usize> {
        Self::require_user(user_id)?;
        let deleted = self.repository.delete_excluded(user_id)?;
        debug!("Reset {} inclusion override(s) for user {}", deleted, user_id);
        Ok(deleted)
    }
}

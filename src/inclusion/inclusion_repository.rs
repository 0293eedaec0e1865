use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{get_connection, DbConnection, DbPool, DbTransactionExecutor};
use crate::errors::Result;
use crate::schema::networth_inclusions;

use super::inclusion_model::{EntityType, InclusionUpdate, NetWorthInclusion, NetWorthInclusionDB};
use super::inclusion_traits::InclusionRepositoryTrait;

/// Repository for inclusion override rows, unique per
/// (user, entity type, entity id)
pub struct InclusionRepository {
    pool: Arc<DbPool>,
}

impl InclusionRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    fn upsert_with_conn(
        conn: &mut DbConnection,
        user_id_param: &str,
        update: &InclusionUpdate,
    ) -> Result<NetWorthInclusion> {
        let now = Utc::now().naive_utc();
        let row = NetWorthInclusionDB {
            id: Uuid::new_v4().to_string(),
            user_id: user_id_param.to_string(),
            entity_type: update.entity_type.as_str().to_string(),
            entity_id: update.entity_id.clone(),
            include_in_net_worth: update.include_in_net_worth,
            created_at: now,
            updated_at: now,
        };

        diesel::insert_into(networth_inclusions::table)
            .values(&row)
            .on_conflict((
                networth_inclusions::user_id,
                networth_inclusions::entity_type,
                networth_inclusions::entity_id,
            ))
            .do_update()
            .set((
                networth_inclusions::include_in_net_worth.eq(update.include_in_net_worth),
                networth_inclusions::updated_at.eq(now),
            ))
            .execute(conn)?;

        let stored = networth_inclusions::table
            .filter(networth_inclusions::user_id.eq(user_id_param))
            .filter(networth_inclusions::entity_type.eq(update.entity_type.as_str()))
            .filter(networth_inclusions::entity_id.eq(&update.entity_id))
            .first::<NetWorthInclusionDB>(conn)?;

        Ok(stored.into())
    }
}

impl InclusionRepositoryTrait for InclusionRepository {
    fn get_by_user(&self, user_id_param: &str) -> Result<Vec<NetWorthInclusion>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = networth_inclusions::table
            .filter(networth_inclusions::user_id.eq(user_id_param))
            .order((
                networth_inclusions::entity_type.asc(),
                networth_inclusions::entity_id.asc(),
            ))
            .load::<NetWorthInclusionDB>(&mut conn)?;

        Ok(rows.into_iter().map(NetWorthInclusion::from).collect())
    }

    fn get_override(
        &self,
        user_id_param: &str,
        entity_type_param: EntityType,
        entity_id_param: &str,
    ) -> Result<Option<bool>> {
        let mut conn = get_connection(&self.pool)?;

        let stored = networth_inclusions::table
            .filter(networth_inclusions::user_id.eq(user_id_param))
            .filter(networth_inclusions::entity_type.eq(entity_type_param.as_str()))
            .filter(networth_inclusions::entity_id.eq(entity_id_param))
            .select(networth_inclusions::include_in_net_worth)
            .first::<bool>(&mut conn)
            .optional()?;

        Ok(stored)
    }

    fn upsert(&self, user_id_param: &str, update: &InclusionUpdate) -> Result<NetWorthInclusion> {
        let mut conn = get_connection(&self.pool)?;
        Self::upsert_with_conn(&mut conn, user_id_param, update)
    }

    fn bulk_upsert(
        &self,
        user_id_param: &str,
        updates: &[InclusionUpdate],
    ) -> Result<Vec<NetWorthInclusion>> {
        // All-or-nothing: one failing row rolls back the whole batch
        self.pool.execute(|conn| {
            updates
                .iter()
                .map(|update| Self::upsert_with_conn(conn, user_id_param, update))
                .collect::<Result<Vec<_>>>()
        })
    }

    fn delete_excluded(&self, user_id_param: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        let deleted = diesel::delete(
            networth_inclusions::table
                .filter(networth_inclusions::user_id.eq(user_id_param))
                .filter(networth_inclusions::include_in_net_worth.eq(false)),
        )
        .execute(&mut conn)?;

        Ok(deleted)
    }
}

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use crate::errors::{Error, Result, ValidationError};

use super::inclusion_constants::*;

/// Kind of entity an inclusion override points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Account,
    Investment,
    Debt,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Account => ENTITY_TYPE_ACCOUNT,
            EntityType::Investment => ENTITY_TYPE_INVESTMENT,
            EntityType::Debt => ENTITY_TYPE_DEBT,
        }
    }
}

impl FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            ENTITY_TYPE_ACCOUNT => Ok(EntityType::Account),
            ENTITY_TYPE_INVESTMENT => Ok(EntityType::Investment),
            ENTITY_TYPE_DEBT => Ok(EntityType::Debt),
            _ => Err(format!("Unknown entity type: {}", s)),
        }
    }
}

/// Domain model for a persisted inclusion override
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthInclusion {
    pub id: String,
    pub user_id: String,
    pub entity_type: String,
    pub entity_id: String,
    pub include_in_net_worth: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for toggling an entity's inclusion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InclusionUpdate {
    pub entity_type: EntityType,
    pub entity_id: String,
    pub include_in_net_worth: bool,
}

impl InclusionUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.entity_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "entityId".to_string(),
            )));
        }
        Ok(())
    }
}

/// Override lookup used while building a snapshot.
///
/// The default-included behavior is an explicit three-state branch: an entity
/// with no override row is included, a stored override wins either way.
#[derive(Debug, Default, Clone)]
pub struct InclusionMap {
    overrides: HashMap<(String, String), bool>,
}

impl InclusionMap {
    pub fn is_included(&self, entity_type: EntityType, entity_id: &str) -> bool {
        let key = (entity_type.as_str().to_string(), entity_id.to_string());
        match self.overrides.get(&key) {
            Some(true) => true,
            Some(false) => false,
            None => true,
        }
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl From<Vec<NetWorthInclusion>> for InclusionMap {
    fn from(rows: Vec<NetWorthInclusion>) -> Self {
        let overrides = rows
            .into_iter()
            .map(|row| {
                (
                    (row.entity_type, row.entity_id),
                    row.include_in_net_worth,
                )
            })
            .collect();
        Self { overrides }
    }
}

/// Database model for inclusion overrides
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::networth_inclusions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NetWorthInclusionDB {
    pub id: String,
    pub user_id: String,
    pub entity_type: String,
    pub entity_id: String,
    pub include_in_net_worth: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<NetWorthInclusionDB> for NetWorthInclusion {
    fn from(db: NetWorthInclusionDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            entity_type: db.entity_type,
            entity_id: db.entity_id,
            include_in_net_worth: db.include_in_net_worth,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

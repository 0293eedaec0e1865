use diesel::prelude::*;
use std::sync::Arc;

use crate::constants::{DEFAULT_CURRENCY, SETTING_KEY_CURRENCY};
use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::schema::user_settings::dsl::*;

use super::settings_model::UserSetting;

/// Per-user settings access, currency preference included
pub trait SettingsRepositoryTrait: Send + Sync {
    fn get_currency(&self, user_id_param: &str) -> Result<String>;
    fn set_currency(&self, user_id_param: &str, currency_code: &str) -> Result<()>;
}

pub struct SettingsRepository {
    pool: Arc<DbPool>,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl SettingsRepositoryTrait for SettingsRepository {
    fn get_currency(&self, user_id_param: &str) -> Result<String> {
        let mut conn = get_connection(&self.pool)?;

        let stored = user_settings
            .filter(user_id.eq(user_id_param))
            .filter(setting_key.eq(SETTING_KEY_CURRENCY))
            .select(setting_value)
            .first::<String>(&mut conn)
            .optional()?;

        Ok(stored.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()))
    }

    fn set_currency(&self, user_id_param: &str, currency_code: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        let row = UserSetting {
            user_id: user_id_param.to_string(),
            setting_key: SETTING_KEY_CURRENCY.to_string(),
            setting_value: currency_code.to_string(),
        };

        diesel::replace_into(user_settings)
            .values(&row)
            .execute(&mut conn)?;

        Ok(())
    }
}

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Key/value setting row scoped to a user
#[derive(
    Queryable, Insertable, AsChangeset, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[serde(rename_all = "camelCase")]
#[diesel(table_name = crate::schema::user_settings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserSetting {
    pub user_id: String,
    pub setting_key: String,
    pub setting_value: String,
}

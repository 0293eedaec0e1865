pub(crate) mod settings_model;
pub(crate) mod settings_repository;

pub use settings_model::UserSetting;
pub use settings_repository::{SettingsRepository, SettingsRepositoryTrait};

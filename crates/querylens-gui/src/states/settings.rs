use querylens_core::settings::{DatabaseSettings, DatabaseType};

/// Editable copy of the database settings shown in the settings window.
#[derive(Default)]
pub struct SettingsForm {
    pub open: bool,
    pub db_path: String,
    pub db_type: DatabaseType,
    pub model: String,
}

impl SettingsForm {
    pub fn is_valid(&self) -> bool {
        !self.db_path.trim().is_empty()
    }

    pub fn to_settings(&self) -> DatabaseSettings {
        let model = self.model.trim();
        DatabaseSettings {
            db_path: self.db_path.trim().to_string(),
            db_type: self.db_type,
            model: (!model.is_empty()).then(|| model.to_string()),
        }
    }
}

mod image;
mod settings;
mod ui;

pub use image::LoadedImage;
pub use settings::SettingsForm;
pub use ui::UIState;

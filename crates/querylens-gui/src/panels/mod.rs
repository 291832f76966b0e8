pub mod helpers;
pub mod menu_bar;
pub mod preview_modal;
pub mod question_bar;
pub mod results;
pub mod settings;
pub mod status;

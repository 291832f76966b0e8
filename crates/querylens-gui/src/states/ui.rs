use querylens_core::notice::Notice;

use super::{LoadedImage, SettingsForm};

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub question: String,

    /// Action the worker is busy with (None = idle).
    pub running: Option<&'static str>,

    /// Outcome of the last action.
    pub notice: Option<Notice>,

    /// Plot of the current result, once downloaded.
    pub result_image: Option<LoadedImage>,

    pub settings: SettingsForm,
    pub show_about: bool,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.running.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    /// Show `notice` and mirror it into the log.
    pub fn set_notice(&mut self, notice: Notice) {
        let prefix = if notice.is_failure() { "ERROR: " } else { "" };
        self.add_log(format!("{prefix}{notice}"));
        self.notice = Some(notice);
    }
}

use std::fmt;

use crate::error::QueryLensError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    /// A fetch failed; shown as inline status text.
    Error,
    /// The result or request is unusable; shown prominently.
    Alert,
}

/// User-facing outcome of an action. Every failure ends up as one of these
/// instead of propagating past the action that triggered it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }

    pub fn alert(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Alert,
            text: text.into(),
        }
    }

    pub fn from_error(action: &str, err: &QueryLensError) -> Self {
        let text = format!("{action} failed: {err}");
        if err.is_malformed_artifact() {
            Self::alert(text)
        } else {
            Self::error(text)
        }
    }

    pub fn is_failure(&self) -> bool {
        self.level != NoticeLevel::Info
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

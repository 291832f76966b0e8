use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_RANDOM_QUESTION_COUNT, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SERVER_URL, DEFAULT_WHEEL_SENSITIVITY,
};
use crate::error::{QueryLensError, Result};

/// Plot format requested from `/question`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Svg,
    Png,
}

impl ImageFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// `k` in the wheel zoom factor `exp(-delta_y * k)`.
    pub wheel_sensitivity: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            wheel_sensitivity: DEFAULT_WHEEL_SENSITIVITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub server_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub image_format: ImageFormat,
    pub random_question_count: usize,
    pub viewer: ViewerConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            image_format: ImageFormat::default(),
            random_question_count: DEFAULT_RANDOM_QUESTION_COUNT,
            viewer: ViewerConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: ClientConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Server URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.server_url.trim_end_matches('/')
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.base_url();
        let has_scheme = url.starts_with("http://") || url.starts_with("https://");
        let has_host = url.split("://").nth(1).is_some_and(|rest| !rest.is_empty());
        if !(has_scheme && has_host) {
            return Err(QueryLensError::InvalidServerUrl(self.server_url.clone()));
        }

        // Zero, negative or NaN sensitivity would freeze, invert or break wheel zoom.
        let k = self.viewer.wheel_sensitivity;
        if !k.is_finite() || k <= 0.0 {
            return Err(QueryLensError::InvalidConfig(format!(
                "viewer.wheel_sensitivity must be a positive number, got {k}"
            )));
        }
        Ok(())
    }
}

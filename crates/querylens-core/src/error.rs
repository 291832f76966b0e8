use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryLensError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(
        "Server returned {status} for {path}{}",
        .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
    )]
    Status {
        status: u16,
        path: String,
        detail: Option<String>,
    },

    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed table artifact: {0}")]
    MalformedTable(String),

    #[error("Result contains neither an image nor table rows")]
    MissingImage,

    #[error("Question must not be empty")]
    EmptyQuestion,

    #[error("Invalid server URL: {0}")]
    InvalidServerUrl(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl QueryLensError {
    /// Errors caused by a result or request the user has to fix, as opposed to
    /// a failed fetch.
    pub fn is_malformed_artifact(&self) -> bool {
        matches!(
            self,
            Self::MalformedTable(_) | Self::MissingImage | Self::EmptyQuestion
        )
    }
}

pub type Result<T> = std::result::Result<T, QueryLensError>;

pub mod ask;
pub mod config;
pub mod describe;
pub mod questions;
pub mod schema;
pub mod settings;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use querylens_core::config::ClientConfig;
use tracing::debug;

/// Config from `path` (or defaults), with `server` overriding the URL.
pub fn load_config(path: Option<&Path>, server: Option<&str>) -> Result<ClientConfig> {
    let mut config = match path {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ClientConfig::default(),
    };
    if let Some(url) = server {
        config.server_url = url.to_string();
        config.validate()?;
    }
    debug!(server = config.base_url(), "Client config ready");
    Ok(config)
}

/// Spinner shown while waiting on the server.
pub fn spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg} ({elapsed})")?);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

/// Output path with its extension chosen from the content type when the user
/// gave none.
pub fn output_path_for(output: &Path, content_type: Option<&str>) -> std::path::PathBuf {
    if output.extension().is_some() {
        return output.to_path_buf();
    }
    let ext = match content_type {
        Some(ct) if ct.contains("svg") => "svg",
        Some(ct) if ct.contains("jpeg") => "jpg",
        _ => "png",
    };
    output.with_extension(ext)
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use querylens_core::api::ApiClient;
use querylens_core::config::ClientConfig;
use querylens_core::preview::classify;
use tracing::info;

#[derive(Args)]
pub struct SchemaArgs {
    /// Output file; the extension is taken from the server's content type if omitted
    #[arg(short, long, default_value = "schema")]
    pub output: PathBuf,
}

pub fn run(args: &SchemaArgs, config: &ClientConfig) -> Result<()> {
    let client = ApiClient::new(config)?;
    let pb = super::spinner("Rendering schema")?;
    let image = client.schema_image();
    pb.finish_and_clear();
    let image = image.context("Failed to fetch schema image")?;

    let path = super::output_path_for(&args.output, image.content_type.as_deref());
    std::fs::write(&path, &image.bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = image.bytes.len(), "Schema image written");

    let (source, hint) = image.into_source();
    println!(
        "Schema saved to {} ({})",
        path.display(),
        classify(&source, hint.as_deref())
    );
    Ok(())
}

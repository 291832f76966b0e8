use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use querylens_core::api::ApiClient;
use querylens_core::config::ClientConfig;
use querylens_core::settings::{DatabaseSettings, DatabaseType};

#[derive(Clone, Copy, ValueEnum)]
pub enum DatabaseTypeArg {
    Sqlite,
    Postgres,
}

impl From<DatabaseTypeArg> for DatabaseType {
    fn from(arg: DatabaseTypeArg) -> Self {
        match arg {
            DatabaseTypeArg::Sqlite => DatabaseType::Sqlite,
            DatabaseTypeArg::Postgres => DatabaseType::Postgres,
        }
    }
}

#[derive(Args)]
pub struct SettingsArgs {
    /// Database path (sqlite) or connection string (postgres)
    #[arg(long)]
    pub db_path: String,

    /// Database backend
    #[arg(long, value_enum, default_value = "sqlite")]
    pub db_type: DatabaseTypeArg,

    /// LLM model the server should use
    #[arg(long)]
    pub model: Option<String>,
}

pub fn run(args: &SettingsArgs, config: &ClientConfig) -> Result<()> {
    let settings = DatabaseSettings {
        db_path: args.db_path.clone(),
        db_type: args.db_type.into(),
        model: args.model.clone(),
    };

    ApiClient::new(config)?
        .update_settings(&settings)
        .context("Failed to update server settings")?;

    println!(
        "Server now uses {} database {}",
        settings.db_type, settings.db_path
    );
    Ok(())
}

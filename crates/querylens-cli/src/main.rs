mod commands;
mod logging;
mod summary;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "querylens", about = "Client for the database analysis server")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Also write log output to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Client config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Server base URL, overrides the config file
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the database schema diagram
    Schema(commands::schema::SchemaArgs),
    /// Print the database description table
    Describe(commands::describe::DescribeArgs),
    /// Ask a question and save the resulting plot
    Ask(commands::ask::AskArgs),
    /// Print example questions generated from the schema
    Questions(commands::questions::QuestionsArgs),
    /// Point the server at another database
    Settings(commands::settings::SettingsArgs),
    /// Print or save a default client config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    let load = || commands::load_config(cli.config.as_deref(), cli.server.as_deref());
    match &cli.command {
        Commands::Schema(args) => commands::schema::run(args, &load()?),
        Commands::Describe(args) => commands::describe::run(args, &load()?),
        Commands::Ask(args) => commands::ask::run(args, &load()?),
        Commands::Questions(args) => commands::questions::run(args, &load()?),
        Commands::Settings(args) => commands::settings::run(args, &load()?),
        Commands::Config(args) => commands::config::run(args),
    }
}

use anyhow::{Context, Result};
use clap::Args;
use querylens_core::api::ApiClient;
use querylens_core::config::ClientConfig;

use crate::summary::print_table;

#[derive(Args)]
pub struct DescribeArgs {
    /// Maximum rows to print (0 = all)
    #[arg(long, default_value = "0")]
    pub max_rows: usize,
}

pub fn run(args: &DescribeArgs, config: &ClientConfig) -> Result<()> {
    let client = ApiClient::new(config)?;
    let pb = super::spinner("Describing database")?;
    let table = client.describe();
    pb.finish_and_clear();
    let table = table.context("Failed to fetch database description")?;

    if table.is_empty() {
        println!("The database description is empty.");
        return Ok(());
    }
    print_table("Database Description", &table, args.max_rows);
    Ok(())
}

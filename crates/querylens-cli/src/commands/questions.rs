use anyhow::{Context, Result};
use clap::Args;
use querylens_core::api::ApiClient;
use querylens_core::config::ClientConfig;
use querylens_core::questions::QuestionCache;

#[derive(Args)]
pub struct QuestionsArgs {
    /// Number of questions to request (defaults to the config value)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,
}

pub fn run(args: &QuestionsArgs, config: &ClientConfig) -> Result<()> {
    let count = args.count.unwrap_or(config.random_question_count).max(1);
    let client = ApiClient::new(config)?;

    let pb = super::spinner("Generating questions")?;
    let fetched = client.random_questions(count);
    pb.finish_and_clear();
    let fetched = fetched.context("Failed to fetch random questions")?;

    let mut cache = QuestionCache::new();
    cache.refill(fetched);
    if cache.is_empty() {
        println!("The server returned no usable questions.");
        return Ok(());
    }

    let mut index = 1;
    while let Some(question) = cache.next_question() {
        println!("{index:>3}. {question}");
        index += 1;
    }
    Ok(())
}

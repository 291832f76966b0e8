use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use querylens_core::api::ApiClient;
use querylens_core::config::{ClientConfig, ImageFormat};
use querylens_core::questions::QuestionCache;
use querylens_core::result_view::{initial_mode, ResultViewMode};
use tracing::{debug, info};

use crate::summary::{print_answer_summary, print_table};

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Svg,
    Png,
}

impl From<FormatArg> for ImageFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Svg => ImageFormat::Svg,
            FormatArg::Png => ImageFormat::Png,
        }
    }
}

#[derive(Args)]
pub struct AskArgs {
    /// Question in natural language
    pub question: Option<String>,

    /// Ask one of the server's generated example questions instead
    #[arg(long, conflicts_with = "question")]
    pub random: bool,

    /// Plot format (defaults to the config value)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Output file for the plot; the extension follows the format if omitted
    #[arg(short, long, default_value = "plot")]
    pub output: PathBuf,

    /// Maximum table rows to print (0 = all)
    #[arg(long, default_value = "20")]
    pub max_rows: usize,

    /// Print the table even when the server prefers the plot
    #[arg(long)]
    pub table: bool,
}

pub fn run(args: &AskArgs, config: &ClientConfig) -> Result<()> {
    let client = ApiClient::new(config)?;
    let question = resolve_question(args, &client)?;
    let format = args.format.map(ImageFormat::from).unwrap_or(config.image_format);

    let pb = super::spinner("Asking server")?;
    let answer = client.ask(&question, format);
    pb.finish_and_clear();
    let answer = answer.with_context(|| format!("Failed to answer '{question}'"))?;

    let mode = initial_mode(&answer.artifact, answer.should_plot);
    debug!(%mode, should_plot = answer.should_plot, "Answer received");
    let saved = match answer.artifact.image_ref.as_deref() {
        Some(image_ref) => {
            let image = client
                .fetch_image(image_ref)
                .with_context(|| format!("Failed to download plot {image_ref}"))?;
            let path = super::output_path_for(&args.output, image.content_type.as_deref());
            std::fs::write(&path, &image.bytes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Plot written");
            Some(path)
        }
        None => None,
    };

    print_answer_summary(&question, mode, saved.as_deref(), &answer.artifact);

    if let Some(table) = &answer.artifact.table {
        if !table.is_empty() && (mode == ResultViewMode::Table || args.table) {
            print_table("Result", table, args.max_rows);
        }
    }
    Ok(())
}

fn resolve_question(args: &AskArgs, client: &ApiClient) -> Result<String> {
    if args.random {
        let mut cache = QuestionCache::new();
        cache.refill(
            client
                .random_questions(1)
                .context("Failed to fetch a random question")?,
        );
        let Some(question) = cache.next_question() else {
            bail!("The server did not suggest any question");
        };
        println!("Using random question: '{question}'");
        return Ok(question);
    }

    match args.question.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => Ok(q.to_string()),
        _ => bail!("Provide a question or use --random"),
    }
}

use querylens_core::api::ApiClient;
use querylens_core::error::Result;
use tracing::{debug, warn};

use crate::messages::{WorkerCommand, WorkerResult};

/// Run one command against the server and package the outcome.
pub(super) fn handle(client: &ApiClient, cmd: WorkerCommand) -> WorkerResult {
    let action = cmd.action();
    debug!(action, "Handling worker command");

    match cmd {
        WorkerCommand::FetchSchema => finish(action, client.schema_image(), |image| {
            WorkerResult::SchemaImage { image }
        }),
        WorkerCommand::Describe => finish(action, client.describe(), |table| {
            WorkerResult::Description { table }
        }),
        WorkerCommand::Ask { question, format } => {
            finish(action, client.ask(&question, format), |answer| {
                WorkerResult::Answer { question, answer }
            })
        }
        WorkerCommand::FetchResultImage { image_ref } => {
            finish(action, client.fetch_image(&image_ref), |image| {
                WorkerResult::ResultImage { image }
            })
        }
        WorkerCommand::RandomQuestions { count } => {
            finish(action, client.random_questions(count), |questions| {
                WorkerResult::Questions { questions }
            })
        }
        WorkerCommand::UpdateSettings { settings } => {
            let outcome = client.update_settings(&settings);
            finish(action, outcome, |()| WorkerResult::SettingsSaved { settings })
        }
    }
}

fn finish<T>(
    action: &'static str,
    result: Result<T>,
    on_success: impl FnOnce(T) -> WorkerResult,
) -> WorkerResult {
    match result {
        Ok(value) => on_success(value),
        Err(error) => {
            warn!(action, "Request failed: {error}");
            WorkerResult::Failed { action, error }
        }
    }
}

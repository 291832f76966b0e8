use querylens_core::api::FetchedImage;
use querylens_core::artifact::{QuestionAnswer, TableArtifact};
use querylens_core::config::ImageFormat;
use querylens_core::error::QueryLensError;
use querylens_core::settings::DatabaseSettings;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Fetch the rendered database schema for the preview modal.
    FetchSchema,

    /// Fetch the per-column database description.
    Describe,

    Ask {
        question: String,
        format: ImageFormat,
    },

    /// Download the plot referenced by the last answer.
    FetchResultImage { image_ref: String },

    /// Refill the random question cache.
    RandomQuestions { count: usize },

    UpdateSettings { settings: DatabaseSettings },
}

impl WorkerCommand {
    /// Name of the action, used in status text and failure notices.
    pub fn action(&self) -> &'static str {
        match self {
            WorkerCommand::FetchSchema => "Schema",
            WorkerCommand::Describe => "Describe",
            WorkerCommand::Ask { .. } => "Question",
            WorkerCommand::FetchResultImage { .. } => "Plot download",
            WorkerCommand::RandomQuestions { .. } => "Random questions",
            WorkerCommand::UpdateSettings { .. } => "Settings update",
        }
    }
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    SchemaImage {
        image: FetchedImage,
    },
    Description {
        table: TableArtifact,
    },
    Answer {
        question: String,
        answer: QuestionAnswer,
    },
    ResultImage {
        image: FetchedImage,
    },
    Questions {
        questions: Vec<String>,
    },
    SettingsSaved {
        settings: DatabaseSettings,
    },
    Failed {
        action: &'static str,
        error: QueryLensError,
    },
    Log {
        message: String,
    },
}

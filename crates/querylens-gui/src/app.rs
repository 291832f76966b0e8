use std::sync::mpsc;

use querylens_core::api::FetchedImage;
use querylens_core::artifact::QuestionAnswer;
use querylens_core::config::{ClientConfig, ImageFormat};
use querylens_core::context::PreviewContext;
use querylens_core::notice::Notice;
use querylens_core::questions::NextQuestion;
use querylens_core::result_view::ResultViewMode;

use crate::host::EguiHost;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{LoadedImage, UIState};
use crate::workers;

pub struct QueryLensApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub config: ClientConfig,
    /// Plot format requested with the next question.
    pub format: ImageFormat,
    pub preview: PreviewContext<EguiHost>,
    pub host: EguiHost,
}

impl QueryLensApp {
    pub fn new(ctx: &egui::Context, config: ClientConfig) -> std::io::Result<Self> {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(&config, result_tx.clone(), ctx.clone())?;

        Ok(Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state: UIState::default(),
            format: config.image_format,
            preview: PreviewContext::new(&config),
            host: EguiHost::new(ctx.clone()),
            config,
        })
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            if !matches!(result, WorkerResult::Log { .. }) {
                self.ui_state.running = None;
            }

            match result {
                WorkerResult::SchemaImage { image } => {
                    self.open_image_preview("Database Schema", image);
                }
                WorkerResult::Description { table } => {
                    self.ui_state.add_log(format!(
                        "Description: {} columns, {} rows",
                        table.columns.len(),
                        table.row_count()
                    ));
                    self.preview
                        .open_document(&mut self.host, "Database Description", table);
                }
                WorkerResult::Answer { question, answer } => {
                    self.apply_answer(&question, answer);
                }
                WorkerResult::ResultImage { image } => {
                    match LoadedImage::load(ctx, "result", image) {
                        Ok(loaded) => self.ui_state.result_image = Some(loaded),
                        Err(e) => self
                            .ui_state
                            .set_notice(Notice::alert(format!("Plot is not displayable: {e:#}"))),
                    }
                }
                WorkerResult::Questions { questions } => {
                    let waiting = self.preview.questions.is_awaiting_refill();
                    let outcome = self.preview.accept_questions(questions);
                    self.ui_state
                        .add_log(format!("{} example questions cached", outcome.added));
                    match outcome.question {
                        Some(question) => self.ask(question),
                        None if waiting => self.ui_state.set_notice(Notice::info(
                            "The server returned no usable questions",
                        )),
                        None => {}
                    }
                }
                WorkerResult::SettingsSaved { settings } => {
                    self.preview.questions.clear();
                    self.preview.results.clear();
                    self.ui_state.result_image = None;
                    self.ui_state.set_notice(Notice::info(format!(
                        "Now using {} database {}",
                        settings.db_type, settings.db_path
                    )));
                }
                WorkerResult::Failed { action, error } => {
                    self.preview.questions.cancel_refill();
                    self.ui_state.set_notice(Notice::from_error(action, &error));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn apply_answer(&mut self, question: &str, answer: QuestionAnswer) {
        let image_ref = answer.artifact.image_ref.clone();
        let mode = self
            .preview
            .apply_result(answer.artifact, answer.should_plot);
        self.ui_state.result_image = None;
        self.ui_state
            .set_notice(Notice::info(format!("Answered '{question}' ({mode} view)")));

        if let Some(image_ref) = image_ref {
            self.send_command(WorkerCommand::FetchResultImage { image_ref });
        }
    }

    fn open_image_preview(&mut self, title: &str, image: FetchedImage) {
        let (source, hint) = image.into_source();
        if let Some(kind) = self
            .preview
            .open_preview(&mut self.host, title, source, hint)
        {
            self.ui_state.add_log(format!("{title}: {kind} preview"));
        }
    }

    pub fn send_command(&mut self, cmd: WorkerCommand) {
        self.ui_state.running = Some(cmd.action());
        let _ = self.cmd_tx.send(cmd);
    }

    pub fn ask(&mut self, question: String) {
        let question = question.trim().to_string();
        if question.is_empty() {
            self.ui_state
                .set_notice(Notice::alert("Type a question first"));
            return;
        }
        self.ui_state.question = question.clone();
        self.send_command(WorkerCommand::Ask {
            question,
            format: self.format,
        });
    }

    /// Ask the next cached example question, refilling the cache first if it
    /// is empty.
    pub fn ask_random(&mut self) {
        match self.preview.next_random_question() {
            NextQuestion::Ready(question) => self.ask(question),
            NextQuestion::NeedsRefill => self.send_command(WorkerCommand::RandomQuestions {
                count: self.config.random_question_count,
            }),
        }
    }

    pub fn toggle_result_view(&mut self) {
        if !self.preview.results.toggle() {
            self.ui_state
                .set_notice(Notice::info("This result has no table to show"));
        }
    }

    /// Open whatever the result area currently shows in the preview modal.
    pub fn open_result_preview(&mut self) {
        match self.preview.results.mode() {
            ResultViewMode::Image => {
                let Some(image) = self.ui_state.result_image.as_ref() else {
                    self.ui_state.set_notice(Notice::info("No plot to preview"));
                    return;
                };
                let fetched = image.fetched.clone();
                self.open_image_preview("Result Plot", fetched);
            }
            ResultViewMode::Table => {
                let table = self
                    .preview
                    .results
                    .artifact()
                    .and_then(|a| a.table.clone());
                if let Some(table) = table {
                    self.preview
                        .open_document(&mut self.host, "Result Table", table);
                }
            }
        }
    }
}

impl eframe::App for QueryLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::question_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::results::show(ctx, self);
        panels::preview_modal::show(ctx, self);
        panels::settings::show(ctx, self);

        // About dialog
        if self.ui_state.show_about {
            egui::Window::new("About QueryLens")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("QueryLens");
                        ui.label("Natural-language database analysis");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.label(format!("Server {}", self.config.base_url()));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}

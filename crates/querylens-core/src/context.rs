use crate::artifact::ResultArtifact;
use crate::config::ClientConfig;
use crate::preview::{ContentKind, ModalHost, PreviewSession, SourceRef};
use crate::questions::{NextQuestion, QuestionCache, RefillOutcome};
use crate::result_view::{ResultView, ResultViewMode};
use crate::transform::InputEvent;
use crate::viewport::{ViewportController, ViewportHost};

/// All client-side view state of one window: the viewport session, the
/// preview modal, the result view and the question cache.
pub struct PreviewContext<H: ViewportHost> {
    pub viewport: ViewportController<H>,
    pub preview: PreviewSession,
    pub results: ResultView,
    pub questions: QuestionCache,
}

impl<H: ViewportHost> PreviewContext<H> {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            viewport: ViewportController::new(config.viewer.wheel_sensitivity),
            preview: PreviewSession::new(),
            results: ResultView::new(),
            questions: QuestionCache::new(),
        }
    }

    pub fn handle_input(&mut self, host: &mut H, event: InputEvent) -> bool {
        self.viewport.handle(host, event)
    }

    pub fn recenter(&mut self, host: &mut H) {
        self.viewport.reset(host);
    }

    pub fn next_random_question(&mut self) -> NextQuestion {
        self.questions.request_next()
    }

    pub fn accept_questions(&mut self, questions: Vec<String>) -> RefillOutcome {
        self.questions.complete_refill(questions)
    }

    pub fn apply_result(&mut self, artifact: ResultArtifact, prefer_image: bool) -> ResultViewMode {
        self.results.on_new_result(artifact, prefer_image)
    }
}

impl<H: ModalHost> PreviewContext<H> {
    pub fn open_preview(
        &mut self,
        host: &mut H,
        title: &str,
        source_ref: SourceRef,
        content_type_hint: Option<String>,
    ) -> Option<ContentKind> {
        self.preview
            .open(host, &mut self.viewport, title, source_ref, content_type_hint)
    }

    pub fn open_document(&mut self, host: &mut H, title: &str, fragment: H::Fragment) -> bool {
        self.preview
            .open_html(host, &mut self.viewport, title, fragment)
    }

    pub fn close_preview(&mut self, host: &mut H) {
        self.preview.close(host, &mut self.viewport);
    }
}

//! egui side of the preview modal: owns the mounted content, the applied
//! transform and the listener registry the panels consult each frame.

use std::collections::HashMap;

use querylens_core::artifact::TableArtifact;
use querylens_core::geometry::{Rect, Vec2};
use querylens_core::preview::{DisplayElement, ModalHost, PreviewTarget, SourceRef};
use querylens_core::transform::{InputKind, ViewTransform};
use querylens_core::viewport::{ListenerHandle, ListenerScope, ViewportHost};
use tracing::warn;

use crate::convert;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerId {
    PreviewBody,
}

/// Content built for the modal. `texture` is `None` when decoding failed.
pub struct PreviewContent {
    pub texture: Option<egui::TextureHandle>,
    pub natural: Vec2,
    pub element: DisplayElement,
    pub error: Option<String>,
}

pub struct EguiHost {
    ctx: egui::Context,
    title: String,
    open: bool,
    body_rect: Option<Rect>,
    mounted: Option<(u64, PreviewContent)>,
    transform: ViewTransform,
    scroll_body: Option<TableArtifact>,
    listeners: HashMap<ListenerHandle, (ListenerScope, InputKind)>,
    next_id: u64,
}

impl EguiHost {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            title: String::new(),
            open: false,
            body_rect: None,
            mounted: None,
            transform: ViewTransform::IDENTITY,
            scroll_body: None,
            listeners: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Record where the modal body was laid out this frame.
    pub fn set_body_rect(&mut self, rect: Rect) {
        self.body_rect = Some(rect);
    }

    pub fn content(&self) -> Option<&PreviewContent> {
        self.mounted.as_ref().map(|(_, content)| content)
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn scroll_body(&self) -> Option<&TableArtifact> {
        self.scroll_body.as_ref()
    }

    pub fn is_listening(&self, kind: InputKind) -> bool {
        self.listeners.values().any(|(_, k)| *k == kind)
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl ViewportHost for EguiHost {
    type Container = ContainerId;
    type Content = PreviewContent;
    type Wrapper = u64;

    fn container_rect(&self, container: &ContainerId) -> Option<Rect> {
        match container {
            ContainerId::PreviewBody if self.open => self.body_rect,
            ContainerId::PreviewBody => None,
        }
    }

    fn wrap(&mut self, _container: &ContainerId, content: PreviewContent) -> u64 {
        let id = self.next_id();
        self.scroll_body = None;
        self.mounted = Some((id, content));
        self.ctx.request_repaint();
        id
    }

    fn unwrap(&mut self, wrapper: u64) {
        if self.mounted.as_ref().is_some_and(|(id, _)| *id == wrapper) {
            self.mounted = None;
            self.transform = ViewTransform::IDENTITY;
        }
    }

    fn apply_transform(&mut self, wrapper: &u64, transform: &ViewTransform) {
        if self.mounted.as_ref().is_some_and(|(id, _)| id == wrapper) {
            self.transform = *transform;
            self.ctx.request_repaint();
        }
    }

    fn listen(
        &mut self,
        _container: &ContainerId,
        scope: ListenerScope,
        kind: InputKind,
    ) -> ListenerHandle {
        let handle = ListenerHandle(self.next_id());
        self.listeners.insert(handle, (scope, kind));
        handle
    }

    fn unlisten(&mut self, handle: ListenerHandle) {
        self.listeners.remove(&handle);
    }
}

impl ModalHost for EguiHost {
    type Fragment = TableArtifact;

    fn content_area(&self) -> Option<ContainerId> {
        Some(ContainerId::PreviewBody)
    }

    fn build_content(&mut self, target: &PreviewTarget, element: &DisplayElement) -> PreviewContent {
        let decoded = match target.source_ref() {
            SourceRef::Blob(blob) => convert::decode(blob.bytes(), element.kind),
            SourceRef::Url(url) => Err(anyhow::anyhow!("{url} has not been downloaded")),
        };

        match decoded {
            Ok(decoded) => PreviewContent {
                texture: Some(self.ctx.load_texture(
                    "preview",
                    decoded.image,
                    egui::TextureOptions::LINEAR,
                )),
                natural: decoded.natural,
                element: *element,
                error: None,
            },
            Err(e) => {
                warn!(title = target.title(), "Preview content not decodable: {e:#}");
                PreviewContent {
                    texture: None,
                    natural: Vec2::ZERO,
                    element: *element,
                    error: Some(format!("{e:#}")),
                }
            }
        }
    }

    fn show_scroll_body(&mut self, fragment: TableArtifact) {
        self.scroll_body = Some(fragment);
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn show_modal(&mut self) {
        self.open = true;
        self.ctx.request_repaint();
    }

    fn hide_modal(&mut self) {
        self.open = false;
        self.body_rect = None;
        self.scroll_body = None;
    }

    fn is_modal_open(&self) -> bool {
        self.open
    }
}

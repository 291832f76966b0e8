//! Preview modal: classify a fetched artifact, build its display element and
//! hand it to the viewport.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::consts::{INLINE_VECTOR_PREFIX, VECTOR_SUFFIX, VECTOR_TYPE_MARKER};
use crate::geometry::{vec2, Vec2};
use crate::transform::fit_scale;
use crate::viewport::{ViewportController, ViewportHost};

/// In-memory content, optionally remembering the URL it was fetched from.
#[derive(Clone, PartialEq)]
pub struct Blob {
    data: Arc<[u8]>,
    origin: Option<String>,
}

impl Blob {
    pub fn new(data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            data: data.into(),
            origin: None,
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blob")
            .field("len", &self.data.len())
            .field("origin", &self.origin)
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SourceRef {
    Url(String),
    Blob(Blob),
}

impl SourceRef {
    /// URL the content is (or was) addressed by.
    pub fn url(&self) -> Option<&str> {
        match self {
            SourceRef::Url(url) => Some(url),
            SourceRef::Blob(blob) => blob.origin(),
        }
    }
}

impl From<Blob> for SourceRef {
    fn from(blob: Blob) -> Self {
        SourceRef::Blob(blob)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PreviewTarget {
    title: String,
    source_ref: SourceRef,
    content_type_hint: Option<String>,
}

impl PreviewTarget {
    pub fn new(
        title: impl Into<String>,
        source_ref: SourceRef,
        content_type_hint: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            source_ref,
            content_type_hint,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn source_ref(&self) -> &SourceRef {
        &self.source_ref
    }

    pub fn content_type_hint(&self) -> Option<&str> {
        self.content_type_hint.as_deref()
    }

    pub fn kind(&self) -> ContentKind {
        classify(&self.source_ref, self.content_type_hint())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Raster,
    Vector,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Raster => write!(f, "Raster"),
            ContentKind::Vector => write!(f, "Vector"),
        }
    }
}

pub fn classify(source_ref: &SourceRef, content_type_hint: Option<&str>) -> ContentKind {
    let hinted = content_type_hint
        .is_some_and(|hint| hint.to_ascii_lowercase().contains(VECTOR_TYPE_MARKER));
    let inline = matches!(source_ref, SourceRef::Url(url)
        if url.get(..INLINE_VECTOR_PREFIX.len())
            .is_some_and(|p| p.eq_ignore_ascii_case(INLINE_VECTOR_PREFIX)));
    let suffixed = source_ref.url().is_some_and(has_vector_suffix);

    if hinted || inline || suffixed {
        ContentKind::Vector
    } else {
        ContentKind::Raster
    }
}

fn has_vector_suffix(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.to_ascii_lowercase().ends_with(VECTOR_SUFFIX)
}

/// How the built element is sized inside its container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sizing {
    /// Grow or shrink to fill the container, aspect preserved.
    Fill,
    /// Natural size, shrunk only as far as needed to stay inside the container.
    Contain,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    Block,
    Inline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayElement {
    pub kind: ContentKind,
    pub sizing: Sizing,
    pub display: Display,
}

impl DisplayElement {
    pub fn for_kind(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Vector => Self {
                kind,
                sizing: Sizing::Fill,
                display: Display::Block,
            },
            ContentKind::Raster => Self {
                kind,
                sizing: Sizing::Contain,
                display: Display::Inline,
            },
        }
    }

    pub fn is_vector_embed(&self) -> bool {
        self.kind == ContentKind::Vector
    }
}

/// Untransformed on-screen size of content with `natural` size.
pub fn fitted_size(sizing: Sizing, natural: Vec2, container: Vec2) -> Vec2 {
    let fit = fit_scale(natural, container);
    let scale = match sizing {
        Sizing::Fill => fit,
        Sizing::Contain => fit.min(1.0),
    };
    vec2(natural.x * scale, natural.y * scale)
}

/// Modal scaffold on top of a viewport host.
pub trait ModalHost: ViewportHost {
    /// Scrollable, non-zoomable body content (tabular previews).
    type Fragment;

    /// The modal's content area, or `None` when the scaffold is missing.
    fn content_area(&self) -> Option<Self::Container>;

    fn build_content(&mut self, target: &PreviewTarget, element: &DisplayElement)
        -> Self::Content;

    fn show_scroll_body(&mut self, fragment: Self::Fragment);

    fn set_title(&mut self, title: &str);

    /// Make the modal visible. Calling it while open is harmless.
    fn show_modal(&mut self);

    fn hide_modal(&mut self);

    fn is_modal_open(&self) -> bool;
}

/// What the open modal currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum PreviewBody {
    Viewport(PreviewTarget),
    Document { title: String },
}

#[derive(Debug, Default)]
pub struct PreviewSession {
    body: Option<PreviewBody>,
}

impl PreviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(&self) -> Option<&PreviewBody> {
        self.body.as_ref()
    }

    pub fn target(&self) -> Option<&PreviewTarget> {
        match &self.body {
            Some(PreviewBody::Viewport(target)) => Some(target),
            _ => None,
        }
    }

    /// Show `source_ref` zoomable in the modal. Returns the detected kind, or
    /// `None` when the host has no modal scaffold.
    pub fn open<H: ModalHost>(
        &mut self,
        host: &mut H,
        viewport: &mut ViewportController<H>,
        title: &str,
        source_ref: SourceRef,
        content_type_hint: Option<String>,
    ) -> Option<ContentKind> {
        let Some(area) = host.content_area() else {
            warn!(title, "Preview modal scaffold missing, preview skipped");
            return None;
        };

        let target = PreviewTarget::new(title, source_ref, content_type_hint);
        let element = DisplayElement::for_kind(target.kind());
        debug!(title, kind = %element.kind, "Opening preview");

        host.set_title(title);
        let content = host.build_content(&target, &element);
        viewport.mount(host, area, content);
        host.show_modal();

        self.body = Some(PreviewBody::Viewport(target));
        Some(element.kind)
    }

    /// Show a scrollable fragment in the modal without a zoom session.
    pub fn open_html<H: ModalHost>(
        &mut self,
        host: &mut H,
        viewport: &mut ViewportController<H>,
        title: &str,
        fragment: H::Fragment,
    ) -> bool {
        if host.content_area().is_none() {
            warn!(title, "Preview modal scaffold missing, preview skipped");
            return false;
        }

        viewport.teardown(host);
        host.set_title(title);
        host.show_scroll_body(fragment);
        host.show_modal();

        self.body = Some(PreviewBody::Document {
            title: title.to_string(),
        });
        true
    }

    pub fn close<H: ModalHost>(&mut self, host: &mut H, viewport: &mut ViewportController<H>) {
        viewport.teardown(host);
        if host.is_modal_open() {
            host.hide_modal();
        }
        self.body = None;
    }
}

mod common;

use approx::assert_abs_diff_eq;
use common::{MockHost, BODY};
use querylens_core::geometry::vec2;
use querylens_core::preview::{
    classify, fitted_size, Blob, ContentKind, Display, DisplayElement, PreviewBody,
    PreviewSession, Sizing, SourceRef,
};
use querylens_core::transform::{InputEvent, InputKind};
use querylens_core::viewport::ViewportController;

fn url(s: &str) -> SourceRef {
    SourceRef::Url(s.to_string())
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[test]
fn test_svg_suffix_is_vector() {
    assert_eq!(classify(&url("/static/plots/plot_1.svg"), None), ContentKind::Vector);
    assert_eq!(classify(&url("http://h/x/PLOT.SVG"), None), ContentKind::Vector);
}

#[test]
fn test_svg_suffix_before_query_is_vector() {
    assert_eq!(classify(&url("/plot.svg?v=3#top"), None), ContentKind::Vector);
}

#[test]
fn test_svg_in_query_only_is_raster() {
    assert_eq!(classify(&url("/render?name=plot.svg.png"), None), ContentKind::Raster);
    assert_eq!(classify(&url("/plot.png?as=.svg"), None), ContentKind::Raster);
}

#[test]
fn test_content_type_hint_marks_vector() {
    let blob = SourceRef::Blob(Blob::new(b"<svg/>".to_vec()));
    assert_eq!(classify(&blob, Some("image/svg+xml")), ContentKind::Vector);
    assert_eq!(classify(&blob, Some("IMAGE/SVG+XML; charset=utf-8")), ContentKind::Vector);
    assert_eq!(classify(&blob, Some("image/png")), ContentKind::Raster);
    assert_eq!(classify(&blob, None), ContentKind::Raster);
}

#[test]
fn test_inline_svg_data_url_is_vector() {
    assert_eq!(
        classify(&url("data:image/svg+xml;base64,PHN2Zy8+"), None),
        ContentKind::Vector
    );
    assert_eq!(classify(&url("data:image/png;base64,AAAA"), None), ContentKind::Raster);
}

#[test]
fn test_blob_origin_suffix_is_used() {
    let blob = Blob::new(vec![0u8; 4]).with_origin("http://h/static/plots/p.svg");
    assert_eq!(classify(&SourceRef::Blob(blob), None), ContentKind::Vector);
}

#[test]
fn test_display_element_for_kind() {
    let vector = DisplayElement::for_kind(ContentKind::Vector);
    assert!(vector.is_vector_embed());
    assert_eq!(vector.sizing, Sizing::Fill);
    assert_eq!(vector.display, Display::Block);

    let raster = DisplayElement::for_kind(ContentKind::Raster);
    assert!(!raster.is_vector_embed());
    assert_eq!(raster.sizing, Sizing::Contain);
}

#[test]
fn test_fitted_size_contain_only_shrinks() {
    let container = vec2(800.0, 600.0);
    assert_eq!(fitted_size(Sizing::Contain, vec2(200.0, 100.0), container), vec2(200.0, 100.0));
    let shrunk = fitted_size(Sizing::Contain, vec2(1600.0, 400.0), container);
    assert_abs_diff_eq!(shrunk.x, 800.0);
    assert_abs_diff_eq!(shrunk.y, 200.0);
}

#[test]
fn test_fitted_size_fill_grows_preserving_aspect() {
    let grown = fitted_size(Sizing::Fill, vec2(200.0, 100.0), vec2(800.0, 600.0));
    assert_abs_diff_eq!(grown.x, 800.0);
    assert_abs_diff_eq!(grown.y, 400.0);
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[test]
fn test_open_svg_builds_vector_embed_and_mounts() {
    let mut host = MockHost::new();
    let mut viewport = ViewportController::default();
    let mut session = PreviewSession::new();

    let kind = session.open(&mut host, &mut viewport, "Schema", url("/schema.svg"), None);

    assert_eq!(kind, Some(ContentKind::Vector));
    assert_eq!(host.built.len(), 1);
    assert!(host.built[0].is_vector_embed());
    assert!(host.modal_open);
    assert_eq!(host.title, "Schema");
    assert!(viewport.is_active());
    assert_eq!(host.wrapped.values().next().unwrap().0.parent, BODY);
    assert_eq!(session.target().unwrap().title(), "Schema");
}

#[test]
fn test_open_png_builds_raster_image() {
    let mut host = MockHost::new();
    let mut viewport = ViewportController::default();
    let mut session = PreviewSession::new();

    let blob = Blob::new(vec![0x89, b'P', b'N', b'G']);
    let kind = session.open(
        &mut host,
        &mut viewport,
        "Plot",
        SourceRef::Blob(blob),
        Some("image/png".into()),
    );

    assert_eq!(kind, Some(ContentKind::Raster));
    assert_eq!(host.built[0].sizing, Sizing::Contain);
    assert_eq!(session.target().unwrap().content_type_hint(), Some("image/png"));
}

#[test]
fn test_open_without_scaffold_aborts_silently() {
    let mut host = MockHost::without_scaffold();
    let mut viewport = ViewportController::default();
    let mut session = PreviewSession::new();

    let kind = session.open(&mut host, &mut viewport, "Schema", url("/schema.svg"), None);

    assert_eq!(kind, None);
    assert!(!host.modal_open);
    assert!(host.built.is_empty());
    assert!(!viewport.is_active());
    assert!(session.body().is_none());
}

#[test]
fn test_reopen_while_open_rerenders_with_single_session() {
    let mut host = MockHost::new();
    let mut viewport = ViewportController::default();
    let mut session = PreviewSession::new();

    session.open(&mut host, &mut viewport, "First", url("/a.png"), None);
    viewport.handle(&mut host, InputEvent::Wheel { position: vec2(300.0, 300.0), delta_y: -300.0 });
    session.open(&mut host, &mut viewport, "Second", url("/b.svg"), None);

    assert!(host.modal_open);
    assert_eq!(host.show_calls, 2);
    assert_eq!(host.title, "Second");
    assert_eq!(host.wrapped.len(), 1);
    assert_eq!(host.listeners.len(), InputKind::ALL.len());
    assert!(viewport.transform().is_identity());
    assert_eq!(host.restored.len(), 1);
    assert_eq!(host.restored[0].name, "First");
}

#[test]
fn test_open_html_has_no_zoom_session() {
    let mut host = MockHost::new();
    let mut viewport = ViewportController::default();
    let mut session = PreviewSession::new();

    session.open(&mut host, &mut viewport, "Plot", url("/a.png"), None);
    let opened = session.open_html(&mut host, &mut viewport, "Rows", "<table></table>".into());

    assert!(opened);
    assert!(!viewport.is_active());
    assert!(host.listeners.is_empty());
    assert_eq!(host.scroll_body.as_deref(), Some("<table></table>"));
    assert!(host.modal_open);
    assert!(session.target().is_none());
    assert_eq!(
        session.body(),
        Some(&PreviewBody::Document {
            title: "Rows".into()
        })
    );
}

#[test]
fn test_open_html_without_scaffold_aborts() {
    let mut host = MockHost::without_scaffold();
    let mut viewport = ViewportController::default();
    let mut session = PreviewSession::new();

    assert!(!session.open_html(&mut host, &mut viewport, "Rows", "<p/>".into()));
    assert!(host.scroll_body.is_none());
}

#[test]
fn test_close_tears_down_and_hides() {
    let mut host = MockHost::new();
    let mut viewport = ViewportController::default();
    let mut session = PreviewSession::new();

    session.open(&mut host, &mut viewport, "Plot", url("/a.png"), None);
    session.close(&mut host, &mut viewport);
    session.close(&mut host, &mut viewport);

    assert!(!host.modal_open);
    assert!(!viewport.is_active());
    assert!(host.listeners.is_empty());
    assert!(session.body().is_none());
}

use anyhow::{Context, Result};
use querylens_core::geometry::{vec2, Vec2};
use querylens_core::preview::ContentKind;
use resvg::{tiny_skia, usvg};

/// Longest side, in pixels, vector content is rasterized at. Large enough to
/// stay sharp well into the zoom range.
const VECTOR_RASTER_SIDE: f32 = 2048.0;

/// Pixels ready for upload plus the content's natural layout size.
pub struct Decoded {
    pub image: egui::ColorImage,
    pub natural: Vec2,
}

pub fn decode(bytes: &[u8], kind: ContentKind) -> Result<Decoded> {
    match kind {
        ContentKind::Raster => decode_raster(bytes),
        ContentKind::Vector => rasterize_vector(bytes),
    }
}

fn decode_raster(bytes: &[u8]) -> Result<Decoded> {
    let rgba = image::load_from_memory(bytes)
        .context("Unsupported or corrupt image")?
        .to_rgba8();
    let (w, h) = rgba.dimensions();
    let size = [w as usize, h as usize];

    Ok(Decoded {
        image: egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()),
        natural: vec2(w as f32, h as f32),
    })
}

fn rasterize_vector(bytes: &[u8]) -> Result<Decoded> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_data(bytes, &options).context("Invalid SVG document")?;

    let natural = tree.size();
    let scale = VECTOR_RASTER_SIDE / natural.width().max(natural.height());
    let w = (natural.width() * scale).ceil().max(1.0) as u32;
    let h = (natural.height() * scale).ceil().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(w, h)
        .with_context(|| format!("Cannot allocate a {w}x{h} canvas"))?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    Ok(Decoded {
        image: egui::ColorImage::from_rgba_premultiplied(
            [w as usize, h as usize],
            pixmap.data(),
        ),
        natural: vec2(natural.width(), natural.height()),
    })
}

pub fn pos(p: egui::Pos2) -> Vec2 {
    vec2(p.x, p.y)
}

pub fn rect(r: egui::Rect) -> querylens_core::geometry::Rect {
    querylens_core::geometry::Rect::from_min_size(pos(r.min), vec2(r.width(), r.height()))
}

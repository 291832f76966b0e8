use anyhow::Result;
use querylens_core::api::FetchedImage;
use querylens_core::geometry::Vec2;
use querylens_core::preview::{classify, ContentKind, SourceRef};

use crate::convert;

/// A fetched image decoded into a texture, with the bytes kept for saving and
/// for opening it in the preview modal.
pub struct LoadedImage {
    pub fetched: FetchedImage,
    pub kind: ContentKind,
    pub texture: egui::TextureHandle,
    pub natural: Vec2,
}

impl LoadedImage {
    pub fn load(ctx: &egui::Context, name: &str, fetched: FetchedImage) -> Result<Self> {
        let source = SourceRef::Url(fetched.url.clone());
        let kind = classify(&source, fetched.content_type.as_deref());
        let decoded = convert::decode(&fetched.bytes, kind)?;
        let texture = ctx.load_texture(name, decoded.image, egui::TextureOptions::LINEAR);

        Ok(Self {
            fetched,
            kind,
            texture,
            natural: decoded.natural,
        })
    }

    /// File extension matching the image's content.
    pub fn extension(&self) -> &'static str {
        match self.kind {
            ContentKind::Vector => "svg",
            ContentKind::Raster => "png",
        }
    }
}

use std::path::Path;

use glam::DVec3;
use image::RgbImage;
use log::{debug, warn};

use crate::error::TextureError;

/// Linear RGB with channels in [0,1].
pub type Color = DVec3;

/// Image sampled with normalized (u,v) coordinates, nearest pixel.
///
/// A texture without an image answers every lookup with black, so a missing
/// file degrades the render instead of aborting it.
#[derive(Debug, Clone, Default)]
pub struct TextureMap {
    image: Option<RgbImage>,
}

impl TextureMap {
    pub const DEFAULT_COLOUR: Color = Color::ZERO;

    pub fn empty() -> TextureMap {
        TextureMap { image: None }
    }

    pub fn from_image(image: RgbImage) -> TextureMap {
        if image.width() == 0 || image.height() == 0 {
            return TextureMap::empty();
        }
        TextureMap { image: Some(image) }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<TextureMap, TextureError> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|source| TextureError::Load { path: path.to_path_buf(), source })?
            .to_rgb8();

        if image.width() == 0 || image.height() == 0 {
            return Err(TextureError::Empty(path.to_path_buf()));
        }

        debug!("Loaded texture {} ({}x{})", path.display(), image.width(), image.height());

        Ok(TextureMap { image: Some(image) })
    }

    /// Like [`TextureMap::load`], but a failure is logged and yields an empty
    /// texture.
    pub fn open<P: AsRef<Path>>(path: P) -> TextureMap {
        match TextureMap::load(path) {
            Ok(texture) => texture,
            Err(e) => {
                warn!("{}", e);
                TextureMap::empty()
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.image.is_some()
    }

    /// `u` runs left to right and `v` top to bottom; both are clamped into
    /// [0,1], so (0,0) and (1,1) address the two extreme corner pixels.
    pub fn pick_colour(&self, u: f64, v: f64) -> Color {
        let image = match &self.image {
            Some(image) => image,
            None => return TextureMap::DEFAULT_COLOUR,
        };

        let u = u.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let x = (u * (image.width() - 1) as f64).floor() as u32;
        let y = (v * (image.height() - 1) as f64).floor() as u32;

        let [r, g, b] = image.get_pixel(x, y).0;

        return Color::new(r as f64, g as f64, b as f64) / 255.0;
    }
}

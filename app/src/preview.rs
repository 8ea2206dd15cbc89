//! Conversion of rendered rasters into egui preview textures.

use eframe::egui::{ColorImage, Vec2};
use label_engine::image::RgbImage;

/// Convert an RGB raster into an egui [`ColorImage`].
pub fn color_image(img: &RgbImage) -> ColorImage {
    let size = [img.width() as usize, img.height() as usize];
    ColorImage::from_rgb(size, img.as_raw())
}

/// Scale pixel dimensions to fit inside `avail`, preserving aspect ratio.
///
/// Never upscales: a raster smaller than the panel is shown at 1:1.
pub fn fit_size(width: u32, height: u32, avail: Vec2) -> Vec2 {
    let w = width as f32;
    let h = height as f32;
    let scale = (avail.x / w).min(avail.y / h).min(1.0);
    Vec2::new(w * scale, h * scale)
}

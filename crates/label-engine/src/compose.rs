//! Centered compositing of a QR symbol onto a white print canvas.

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};
use tracing::debug;

use crate::layout::{centered_offset, PhysicalSize};
use crate::qr::render_modules;
use crate::RenderError;

/// One generation request: the text to encode plus the target label size.
///
/// Built fresh for every generate action; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRequest {
    pub text: String,
    pub size: PhysicalSize,
}

impl LabelRequest {
    pub fn new(text: impl Into<String>, size: PhysicalSize) -> Self {
        Self {
            text: text.into(),
            size,
        }
    }

    /// Render the request to an RGB raster at print resolution.
    ///
    /// The QR symbol is scaled to fill the shorter canvas edge using
    /// nearest-neighbor filtering (anti-aliasing would blur module edges and
    /// break scannability) and pasted centered on a white canvas, so it is
    /// never cropped or distorted.
    pub fn render(&self) -> Result<RgbImage, RenderError> {
        let (width_px, height_px) = self.size.to_pixels();
        let side = width_px.min(height_px);

        let modules = render_modules(&self.text)?;
        let symbol = DynamicImage::ImageLuma8(modules)
            .resize_exact(side, side, FilterType::Nearest)
            .to_rgb8();

        let mut canvas = RgbImage::from_pixel(width_px, height_px, Rgb([255, 255, 255]));
        let (x, y) = centered_offset(width_px, height_px, side);
        imageops::replace(&mut canvas, &symbol, i64::from(x), i64::from(y));

        debug!(width_px, height_px, side, x, y, "Label composited");
        Ok(canvas)
    }
}

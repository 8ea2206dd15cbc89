//! QR module-matrix rendering via the `qrcode` crate.

use image::{GrayImage, Luma};
use qrcode::{EcLevel, QrCode};
use tracing::debug;

use crate::RenderError;

/// Rasterize `text` as a QR symbol at one pixel per module.
///
/// Uses low error correction and automatic version selection, so the symbol
/// is the smallest that fits the text. Dark modules are black, light modules
/// white. Encoding failures (text exceeding symbol capacity) propagate
/// unchanged.
pub fn render_modules(text: &str) -> Result<GrayImage, RenderError> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::L)?;
    let module_count = code.width() as u32;
    debug!(module_count, "QR symbol encoded");

    let mut img = GrayImage::from_pixel(module_count, module_count, Luma([255u8]));
    for (i, color) in code.to_colors().iter().enumerate() {
        if *color == qrcode::Color::Dark {
            let x = i as u32 % module_count;
            let y = i as u32 / module_count;
            img.put_pixel(x, y, Luma([0u8]));
        }
    }

    Ok(img)
}

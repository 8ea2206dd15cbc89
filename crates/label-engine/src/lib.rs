//! Rendering engine for millimeter-sized QR labels.
//!
//! Converts physical dimensions to a pixel canvas at print resolution,
//! rasterizes a QR symbol via the `qrcode` crate, and composites it centered
//! on a white background ready for PNG/BMP export.

pub mod compose;
pub mod export;
pub mod layout;
pub mod qr;

pub use compose::LabelRequest;
pub use export::{encode_image, save_image, SaveFormat};
pub use layout::{PhysicalSize, MAX_DIMENSION_MM, MIN_DIMENSION_MM, PRINT_DPI};

// Re-export so downstream crates can work with the rendered rasters
// without pinning their own copy of the image crate.
pub use image;

/// Errors surfaced by rendering or export.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! PNG/BMP persistence for rendered labels.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbImage};
use tracing::info;

use crate::RenderError;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    Png,
    Bmp,
}

impl SaveFormat {
    /// Pick a format from the path's extension (case-insensitive).
    /// Missing or unrecognized extensions fall back to PNG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("bmp") => Self::Bmp,
            _ => Self::Png,
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Bmp => ImageFormat::Bmp,
        }
    }
}

/// Encode `img` in `format`, entirely in memory.
pub fn encode_image(img: &RgbImage, format: SaveFormat) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format.image_format())?;
    Ok(buf.into_inner())
}

/// Write `img` to `path`, choosing the format from the extension.
///
/// The encoded bytes land in a temporary sibling file first and are renamed
/// into place, so a failed save never leaves a partial file at `path`.
pub fn save_image(img: &RgbImage, path: &Path) -> Result<(), RenderError> {
    let format = SaveFormat::from_path(path);
    let bytes = encode_image(img, format)?;

    let tmp = path.with_extension("tmp");
    if let Err(e) = std::fs::write(&tmp, &bytes) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    std::fs::rename(&tmp, path)?;

    info!(path = %path.display(), ?format, bytes = bytes.len(), "Label saved");
    Ok(())
}

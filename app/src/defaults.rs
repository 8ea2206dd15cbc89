//! UI defaults.

/// Initial edge length for both dimension inputs, in millimeters.
pub const DEFAULT_DIMENSION_MM: f64 = 60.0;

/// Suggested file name in the save dialog (PNG is the default format).
pub const DEFAULT_FILE_NAME: &str = "qr-code.png";

/// Initial window size in points.
pub const WINDOW_SIZE: [f32; 2] = [420.0, 560.0];

//! Physical-size arithmetic: millimeters to pixels, centered placement.

/// Assumed print resolution in dots per inch.
pub const PRINT_DPI: u32 = 300;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Smallest accepted edge length in millimeters.
pub const MIN_DIMENSION_MM: f64 = 10.0;

/// Largest accepted edge length in millimeters.
pub const MAX_DIMENSION_MM: f64 = 1000.0;

/// Target physical dimensions of one label.
///
/// Both axes are clamped into `[MIN_DIMENSION_MM, MAX_DIMENSION_MM]` on
/// construction, mirroring the bounds of the input widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalSize {
    width_mm: f64,
    height_mm: f64,
}

impl PhysicalSize {
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm: width_mm.clamp(MIN_DIMENSION_MM, MAX_DIMENSION_MM),
            height_mm: height_mm.clamp(MIN_DIMENSION_MM, MAX_DIMENSION_MM),
        }
    }

    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    pub fn height_mm(&self) -> f64 {
        self.height_mm
    }

    /// Convert to pixel dimensions at [`PRINT_DPI`], rounding each axis to
    /// the nearest pixel.
    pub fn to_pixels(&self) -> (u32, u32) {
        (mm_to_px(self.width_mm), mm_to_px(self.height_mm))
    }
}

fn mm_to_px(mm: f64) -> u32 {
    (mm / MM_PER_INCH * f64::from(PRINT_DPI)).round() as u32
}

/// Top-left offset that centers a `side`-length square on a canvas.
///
/// Floor division, so opposing margins differ by at most one pixel.
pub fn centered_offset(canvas_w: u32, canvas_h: u32, side: u32) -> (u32, u32) {
    (
        canvas_w.saturating_sub(side) / 2,
        canvas_h.saturating_sub(side) / 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mm_to_px_rounds_to_nearest() {
        // 60 / 25.4 * 300 = 708.66 -> 709
        assert_eq!(mm_to_px(60.0), 709);
        // 100 / 25.4 * 300 = 1181.1 -> 1181
        assert_eq!(mm_to_px(100.0), 1181);
        assert_eq!(mm_to_px(10.0), 118);
        assert_eq!(mm_to_px(1000.0), 11811);
    }

    #[test]
    fn physical_size_clamps_to_input_range() {
        let size = PhysicalSize::new(5.0, 2000.0);
        assert_eq!(size.width_mm(), MIN_DIMENSION_MM);
        assert_eq!(size.height_mm(), MAX_DIMENSION_MM);

        let size = PhysicalSize::new(60.0, 100.0);
        assert_eq!(size.width_mm(), 60.0);
        assert_eq!(size.height_mm(), 100.0);
    }

    #[test]
    fn to_pixels_matches_per_axis_conversion() {
        let (w, h) = PhysicalSize::new(100.0, 60.0).to_pixels();
        assert_eq!((w, h), (1181, 709));
    }

    #[test]
    fn centered_offset_splits_margins_evenly() {
        assert_eq!(centered_offset(1181, 709, 709), (236, 0));
        assert_eq!(centered_offset(709, 709, 709), (0, 0));
    }

    #[test]
    fn centered_offset_margins_differ_by_at_most_one() {
        for (w, h, side) in [
            (1181, 709, 709),
            (710, 709, 709),
            (709, 710, 709),
            (300, 301, 299),
        ] {
            let (x, y) = centered_offset(w, h, side);
            assert!(x.abs_diff(w - side - x) <= 1);
            assert!(y.abs_diff(h - side - y) <= 1);
        }
    }
}

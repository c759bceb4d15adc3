//! Whole-pixel line metrics

/// Added to fractional metrics before truncating them to whole pixels.
///
/// This rounds up everything but a small fractional overhang, which keeps
/// line boxes tight for fonts whose metrics land just above an integer.
const ROUNDING_UP_VALUE: f32 = 0.95;

/// Vertical metrics of a line of text, in whole pixels.
///
/// `height` is always `ascent + descent + leading`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LineMetrics {
    /// Distance from the top of the line box to the bottom of the next one.
    pub height: u16,
    /// Distance from the baseline to the top of the line box.
    pub ascent: u16,
    /// Distance from the baseline to the bottom of the glyph area.
    pub descent: u16,
    /// Additional spacing below the descent.
    pub leading: u16,
}

impl LineMetrics {
    /// Create metrics from whole pixel values.
    ///
    /// The caller is responsible for passing a consistent `height`.
    pub const fn new(height: u16, ascent: u16, descent: u16, leading: u16) -> Self {
        LineMetrics {
            height,
            ascent,
            descent,
            leading,
        }
    }

    /// Convert fractional metrics to whole pixels.
    ///
    /// `descent` is the positive distance below the baseline. Negative
    /// results are clamped to zero.
    pub fn from_scaled(ascent: f32, descent: f32, leading: f32) -> Self {
        let ascent = to_pixels(ascent);
        let descent_px = to_pixels(descent);
        let leading = to_pixels(descent + leading.max(0.0)).saturating_sub(descent_px);
        let height = ascent.saturating_add(descent_px).saturating_add(leading);
        LineMetrics {
            height,
            ascent,
            descent: descent_px,
            leading,
        }
    }
}

fn to_pixels(value: f32) -> u16 {
    // `as` saturates and maps NaN to zero
    (ROUNDING_UP_VALUE + value.max(0.0)) as u16
}

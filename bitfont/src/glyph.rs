//! Extracted glyph bitmaps

use std::fmt;

use crate::RECORD_HEADER_SIZE;

/// The bitmap of a single rendered code point.
///
/// A glyph covers the full line box: `width` pixels wide (the engine's
/// advance width) and `height` pixels tall, with the baseline `ascent`
/// pixels below the top row. Pixels are intensity bytes, row-major from the
/// top-left corner.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    code: u16,
    width: u16,
    height: u16,
    ascent: u16,
    pixels: Vec<u8>,
}

impl Glyph {
    /// Create a new glyph.
    ///
    /// `pixels` should hold `width * height` bytes; this is checked when the
    /// glyph is packed, not here.
    pub fn new(code: u16, width: u16, height: u16, ascent: u16, pixels: Vec<u8>) -> Self {
        Glyph {
            code,
            width,
            height,
            ascent,
            pixels,
        }
    }

    /// The code point this glyph was rendered for.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// The advance width, in pixels.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// The height of the line box, in pixels.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Distance from the top row to the baseline, in pixels.
    pub fn ascent(&self) -> u16 {
        self.ascent
    }

    /// The intensity of each pixel, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The intensity at (`x`, `y`), or `None` if out of bounds.
    pub fn pixel(&self, x: u16, y: u16) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels.get(idx).copied()
    }

    /// The number of bytes this glyph occupies in a font file.
    pub fn record_size(&self) -> usize {
        RECORD_HEADER_SIZE + self.pixels.len()
    }

    /// The number of pixel bytes implied by the glyph's dimensions.
    pub(crate) fn expected_pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Draws the glyph as text, two characters per pixel.
impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Glyph[code=U+{:04X},width={},height={},ascent={},size={}]",
            self.code,
            self.width,
            self.height,
            self.ascent,
            self.pixels.len()
        )?;
        if self.width == 0 {
            return Ok(());
        }
        for row in self.pixels.chunks(self.width as usize) {
            for pixel in row {
                f.write_str(if *pixel > 0 { "**" } else { "::" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

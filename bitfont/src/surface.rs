//! The working surface glyphs are drawn onto

/// A single channel drawing surface.
///
/// Each pixel is an intensity from 0 (background) to 255 (fully inked).
/// A [`GlyphExtractor`](crate::GlyphExtractor) owns one surface and reuses
/// it for every glyph, clearing it before each draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    /// The default surface dimensions, large enough for text sizes up to
    /// roughly 100 pixels.
    pub const DEFAULT_SIZE: (u32, u32) = (200, 200);

    /// Create a new, cleared surface.
    pub fn new(width: u32, height: u32) -> Self {
        Surface {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reset every pixel to the background intensity.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// The intensity at (`x`, `y`), or `None` if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Paint a single pixel, keeping the brighter of the old and new values.
    ///
    /// Writes outside the surface are ignored.
    pub fn paint(&mut self, x: i32, y: i32, intensity: u8) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels[idx] = self.pixels[idx].max(intensity);
    }

    /// Paint a coverage mask with its top-left corner at (`left`, `top`).
    ///
    /// `mask` is row-major with rows of `mask_width` bytes. Parts of the mask
    /// that fall outside the surface are clipped.
    pub fn fill_mask(&mut self, left: i32, top: i32, mask_width: u32, mask: &[u8]) {
        if mask_width == 0 {
            return;
        }
        for (row_ix, row) in mask.chunks(mask_width as usize).enumerate() {
            let y = top.saturating_add(row_ix as i32);
            for (col_ix, coverage) in row.iter().enumerate() {
                if *coverage != 0 {
                    self.paint(left.saturating_add(col_ix as i32), y, *coverage);
                }
            }
        }
    }

    /// `true` if the `width` × `height` window at (`x`, `y`) lies entirely
    /// within the surface.
    pub fn contains(&self, x: i32, y: i32, width: u16, height: u16) -> bool {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return false;
        };
        x.checked_add(width as u32)
            .is_some_and(|right| right <= self.width)
            && y.checked_add(height as u32)
                .is_some_and(|bottom| bottom <= self.height)
    }

    /// Copy out the `width` × `height` window at (`x`, `y`), row-major.
    ///
    /// Returns `None` if the window does not lie entirely within the surface.
    pub fn crop(&self, x: i32, y: i32, width: u16, height: u16) -> Option<Vec<u8>> {
        if !self.contains(x, y, width, height) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        let stride = self.width as usize;
        let mut out = Vec::with_capacity(width as usize * height as usize);
        for row in y..y + height as usize {
            let start = row * stride + x;
            out.extend_from_slice(&self.pixels[start..start + width as usize]);
        }
        Some(out)
    }
}

impl Default for Surface {
    fn default() -> Self {
        let (width, height) = Self::DEFAULT_SIZE;
        Surface::new(width, height)
    }
}

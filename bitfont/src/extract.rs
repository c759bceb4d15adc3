//! Cropping glyph bitmaps out of a rendered surface

use crate::{Glyph, LineMetrics, RenderError, RenderingEngine, Surface};

/// Renders code points one at a time and extracts their line boxes.
///
/// The extractor owns both the engine and the working surface. Line metrics
/// are queried once, when the extractor is created, and every glyph it
/// produces uses that same `height` and `ascent`; this is what allows the
/// file format to store a single height for the whole font.
pub struct GlyphExtractor<E> {
    engine: E,
    surface: Surface,
    metrics: LineMetrics,
}

impl<E: RenderingEngine> GlyphExtractor<E> {
    /// Create an extractor drawing onto a surface of the default size.
    pub fn new(engine: E) -> Self {
        Self::with_surface(engine, Surface::default())
    }

    /// Create an extractor drawing onto the provided surface.
    ///
    /// The surface must be large enough to hold the line box of every glyph
    /// that will be extracted.
    pub fn with_surface(engine: E, surface: Surface) -> Self {
        let metrics = engine.line_metrics();
        log::debug!(
            "extracting with {metrics:?} on a {}x{} surface",
            surface.width(),
            surface.height()
        );
        GlyphExtractor {
            engine,
            surface,
            metrics,
        }
    }

    /// The line metrics shared by every extracted glyph.
    pub fn metrics(&self) -> LineMetrics {
        self.metrics
    }

    /// The working surface, as left by the most recent draw.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Consume the extractor, returning the engine.
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Render `code` and copy out its `width` × `height` line box.
    ///
    /// The glyph is centered on the surface; the crop window starts `ascent`
    /// pixels above the drawing origin, so it always spans the full line box
    /// regardless of where the glyph's ink sits inside it.
    pub fn extract(&mut self, code: u16) -> Result<Glyph, RenderError> {
        let LineMetrics { height, ascent, .. } = self.metrics;
        let width = self.engine.char_width(code)?;
        let surface_width = self.surface.width() as i64;
        let surface_height = self.surface.height() as i64;
        // i64 keeps the arithmetic exact for any u32 surface and u16 metric
        let x = clamp_i32((surface_width - width as i64) / 2);
        let y = clamp_i32((surface_height - height as i64) / 2 + ascent as i64);
        let top = y.saturating_sub(ascent as i32);

        self.surface.clear();
        self.engine.draw(code, &mut self.surface, x, y)?;

        let pixels = self.surface.crop(x, top, width, height).ok_or_else(|| {
            RenderError::OutsideSurface {
                code,
                x,
                y: top,
                width,
                height,
                surface_width: self.surface.width(),
                surface_height: self.surface.height(),
            }
        })?;
        log::debug!("extracted U+{code:04X}: {width}x{height} at ({x}, {top})");
        Ok(Glyph::new(code, width, height, ascent, pixels))
    }

    /// Extract every code point, in order.
    ///
    /// Duplicate code points are extracted (and later written) once per
    /// occurrence. The first failure aborts the whole sequence.
    pub fn extract_all(&mut self, codes: &[u16]) -> Result<Vec<Glyph>, RenderError> {
        codes.iter().map(|code| self.extract(*code)).collect()
    }
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

use ::skrifa::{
    charmap::Charmap,
    metrics::GlyphMetrics,
    outline::{DrawSettings, OutlineGlyphCollection},
    prelude::{LocationRef, Size},
    raw::FontRef,
    GlyphId, MetadataProvider,
};
use bitfont::{LineMetrics, RenderError, RenderingEngine, Surface};
use zeno::{Command, Mask, Origin};

use crate::ZenoPen;

/// Renders unhinted, antialiased outlines at the default variation location.
pub struct SkrifaEngine<'a> {
    size: Size,
    charmap: Charmap<'a>,
    glyph_metrics: GlyphMetrics<'a>,
    outlines: OutlineGlyphCollection<'a>,
    metrics: LineMetrics,
    pen: ZenoPen,
}

impl<'a> SkrifaEngine<'a> {
    pub fn new(font: FontRef<'a>, ppem: f32) -> Self {
        let size = Size::new(ppem);
        let location = LocationRef::default();
        let scaled = font.metrics(size, location);
        // skrifa descent is negative below the baseline
        let metrics = LineMetrics::from_scaled(scaled.ascent, -scaled.descent, scaled.leading);
        log::debug!(
            "{ppem} ppem: {metrics:?} from ascent {} descent {} leading {}",
            scaled.ascent,
            scaled.descent,
            scaled.leading
        );
        Self {
            size,
            charmap: font.charmap(),
            glyph_metrics: font.glyph_metrics(size, location),
            outlines: font.outline_glyphs(),
            metrics,
            pen: ZenoPen::new(),
        }
    }

    /// The glyph for `code`, falling back to `.notdef` when unmapped.
    pub fn glyph_id(&self, code: u16) -> GlyphId {
        self.charmap.map(code).unwrap_or_else(|| {
            log::trace!("U+{code:04X} is not mapped, using .notdef");
            GlyphId::NOTDEF
        })
    }
}

impl RenderingEngine for SkrifaEngine<'_> {
    fn line_metrics(&self) -> LineMetrics {
        self.metrics
    }

    fn char_width(&mut self, code: u16) -> Result<u16, RenderError> {
        let advance = self
            .glyph_metrics
            .advance_width(self.glyph_id(code))
            .unwrap_or_default();
        Ok(advance.round().clamp(0.0, u16::MAX as f32) as u16)
    }

    fn draw(
        &mut self,
        code: u16,
        surface: &mut Surface,
        x: i32,
        y: i32,
    ) -> Result<(), RenderError> {
        let glyph_id = self.glyph_id(code);
        let Some(outline) = self.outlines.get(glyph_id) else {
            log::trace!("U+{code:04X} ({glyph_id}) has no outline");
            return Ok(());
        };
        self.pen.clear();
        outline
            .draw(
                DrawSettings::unhinted(self.size, LocationRef::default()),
                &mut self.pen,
            )
            .map_err(|e| RenderError::Draw {
                code,
                message: e.to_string(),
            })?;
        rasterize(self.pen.commands(), surface, x, y);
        Ok(())
    }
}

/// Fill `commands` onto `surface` with the path origin at (`x`, `y`).
fn rasterize(commands: &[Command], surface: &mut Surface, x: i32, y: i32) {
    if commands.is_empty() {
        return;
    }
    let (mask, placement) = Mask::new(&commands).origin(Origin::TopLeft).render();
    surface.fill_mask(x + placement.left, y + placement.top, placement.width, &mask);
}

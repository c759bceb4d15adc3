//! Extract-then-pack round trips driven by a deterministic engine.

use bitfont::{
    pack, pack_into, table::parse_code_table, BitmapFont, FontData, FontRead, Glyph,
    GlyphExtractor, LineMetrics, RenderError, RenderingEngine, Surface, HEADER_SIZE,
    LOCATION_SIZE,
};
use pretty_assertions::assert_eq;

/// Advance widths vary with the code point; ink is a diagonal hatch that
/// fills the area between the baseline and the ascent.
struct HatchEngine {
    metrics: LineMetrics,
}

impl HatchEngine {
    fn new() -> Self {
        HatchEngine {
            metrics: LineMetrics::from_scaled(9.2, 2.4, 0.5),
        }
    }
}

impl RenderingEngine for HatchEngine {
    fn line_metrics(&self) -> LineMetrics {
        self.metrics
    }

    fn char_width(&mut self, code: u16) -> Result<u16, RenderError> {
        match code {
            // combining marks take no space
            0x300..=0x36f => Ok(0),
            _ => Ok(3 + code % 5),
        }
    }

    fn draw(
        &mut self,
        code: u16,
        surface: &mut Surface,
        x: i32,
        y: i32,
    ) -> Result<(), RenderError> {
        if code == 0xfffd {
            return Err(RenderError::Draw {
                code,
                message: "no glyph".into(),
            });
        }
        let width = self.char_width(code)? as i32;
        for row in (y - self.metrics.ascent as i32)..y {
            for col in x..x + width {
                if (row + col + code as i32) % 3 == 0 {
                    surface.paint(col, row, (code % 256) as u8 | 1);
                }
            }
        }
        Ok(())
    }
}

fn extract(codes: &[u16]) -> (Vec<Glyph>, LineMetrics) {
    let mut extractor = GlyphExtractor::new(HatchEngine::new());
    let glyphs = extractor.extract_all(codes).unwrap();
    (glyphs, extractor.metrics())
}

fn base_offset(glyph_count: usize) -> u32 {
    (HEADER_SIZE + glyph_count * LOCATION_SIZE) as u32
}

#[test]
fn offsets_locate_every_record() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (glyphs, metrics) = extract(&[0x41, 0x300, 0x7a, 0x3042, 0x20]);
    let bytes = pack(&glyphs, metrics).unwrap();
    let font = BitmapFont::read(FontData::new(&bytes)).unwrap();
    let locations = font.locations().collect::<Vec<_>>();

    assert_eq!(locations[0].offset, base_offset(glyphs.len()));
    for (pair, glyph) in locations.windows(2).zip(&glyphs) {
        assert_eq!(
            pair[0].offset as usize + glyph.record_size(),
            pair[1].offset as usize
        );
    }
    let last = locations.last().unwrap();
    assert_eq!(
        last.offset as usize + glyphs.last().unwrap().record_size(),
        bytes.len()
    );
}

#[test]
fn round_trip_preserves_order_and_duplicates() {
    let codes = [0x42, 0x41, 0x42, 0x41];
    let (glyphs, metrics) = extract(&codes);
    let bytes = pack(&glyphs, metrics).unwrap();
    let font = BitmapFont::read(FontData::new(&bytes)).unwrap();

    assert_eq!(font.glyph_count(), 4);
    assert_eq!(
        font.locations().map(|loc| loc.code).collect::<Vec<_>>(),
        codes
    );
    let read_back = font
        .records()
        .map(|record| record.unwrap().to_glyph())
        .collect::<Vec<_>>();
    assert_eq!(read_back, glyphs);
}

#[test]
fn single_zero_width_glyph() {
    let (glyphs, metrics) = extract(&[0x301]);
    assert!(glyphs[0].pixels().is_empty());
    let bytes = pack(&glyphs, metrics).unwrap();
    let font = BitmapFont::read(FontData::new(&bytes)).unwrap();

    let location = font.location(0).unwrap();
    assert_eq!(location.offset, base_offset(1));
    assert_eq!(bytes.len() - location.offset as usize, 2);
    assert_eq!(font.record(0).unwrap().width(), 0);
}

#[test]
fn table_to_font() {
    let codes = parse_code_table("0041\n0042\n").unwrap();
    let (glyphs, metrics) = extract(&codes);
    let bytes = pack(&glyphs, metrics).unwrap();
    let font = BitmapFont::read(FontData::new(&bytes)).unwrap();

    assert_eq!(font.glyph_count(), 2);
    let a = font.location(0).unwrap();
    let b = font.location(1).unwrap();
    assert_eq!(a.code, 0x0041);
    assert_eq!(b.code, 0x0042);
    assert_eq!((b.offset - a.offset) as usize, glyphs[0].record_size());
    assert_eq!(font.metrics(), metrics);
}

#[test]
fn every_glyph_shares_the_font_height() {
    let (glyphs, metrics) = extract(&[0x41, 0x300, 0x3042]);
    assert!(glyphs.iter().all(|glyph| glyph.height() == metrics.height));
    assert!(glyphs.iter().all(|glyph| glyph.ascent() == metrics.ascent));
}

#[test]
fn ink_sits_above_the_baseline() {
    let (glyphs, metrics) = extract(&[0x41]);
    let glyph = &glyphs[0];
    let inked_rows = (0..glyph.height())
        .filter(|y| (0..glyph.width()).any(|x| glyph.pixel(x, *y) != Some(0)))
        .collect::<Vec<_>>();
    assert_eq!(inked_rows.first(), Some(&0));
    assert_eq!(inked_rows.last(), Some(&(metrics.ascent - 1)));
}

#[test]
fn identical_inputs_give_identical_bytes() {
    let codes = parse_code_table("0041\n3042\n0300\n0041\n").unwrap();
    let mut first = Vec::new();
    let mut second = Vec::new();
    let (glyphs, metrics) = extract(&codes);
    pack_into(&glyphs, metrics, &mut first).unwrap();
    let (glyphs, metrics) = extract(&codes);
    pack_into(&glyphs, metrics, &mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn engine_failure_stops_extraction() {
    let mut extractor = GlyphExtractor::new(HatchEngine::new());
    let err = extractor.extract_all(&[0x41, 0xfffd, 0x42]).unwrap_err();
    assert!(
        matches!(err, RenderError::Draw { code: 0xfffd, .. }),
        "{err:?}"
    );
}

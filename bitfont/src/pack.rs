//! Laying out and serializing a bitmap font file

use std::io::Write;

use crate::{
    validate::{Validate, ValidationCtx, ValidationReport},
    Error, FontWrite, FontWriter, Glyph, LineMetrics, HEADER_SIZE, LOCATION_SIZE,
};

/// The fixed size header at the start of every font file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Header {
    pub glyph_count: u32,
    pub height: u16,
    pub ascent: u16,
    pub descent: u16,
}

/// An entry in the location table.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Location {
    /// The code point of the glyph.
    pub code: u16,
    /// Absolute byte offset of the glyph's record from the start of the file.
    pub offset: u32,
}

/// The layout of a font file, ready to be written.
///
/// Locations are assigned in a single pass over the glyphs: the first record
/// starts right after the location table and each following record starts
/// where the previous one ends. Glyphs keep their input order, including any
/// repeated code points.
#[derive(Clone, Debug)]
pub struct FontFile<'a> {
    header: Header,
    locations: Vec<Location>,
    glyphs: &'a [Glyph],
}

/// The offset of the first glyph record in a file with `glyph_count` glyphs.
pub(crate) fn base_offset(glyph_count: usize) -> u64 {
    HEADER_SIZE as u64 + glyph_count as u64 * LOCATION_SIZE as u64
}

impl<'a> FontFile<'a> {
    /// Compute the layout for `glyphs`, using `metrics` for the header.
    ///
    /// Fails if the glyphs cannot be represented in the format: too many
    /// glyphs or bytes for 32-bit offsets, a glyph whose height differs from
    /// the font's, or a pixel buffer that disagrees with its glyph's
    /// dimensions.
    pub fn new(glyphs: &'a [Glyph], metrics: LineMetrics) -> Result<Self, ValidationReport> {
        let layout = Layout::new(glyphs, metrics);
        layout.validate()?;
        let locations = layout
            .placed
            .iter()
            .map(|placed| Location {
                code: placed.glyph.code(),
                // checked by validation
                offset: placed.offset as u32,
            })
            .collect::<Vec<_>>();
        for (i, location) in locations.iter().enumerate() {
            log::trace!("glyph {i}: U+{:04X} at {}", location.code, location.offset);
        }
        Ok(FontFile {
            header: Header {
                glyph_count: glyphs.len() as u32,
                height: metrics.height,
                ascent: metrics.ascent,
                descent: metrics.descent,
            },
            locations,
            glyphs,
        })
    }

    pub fn header(&self) -> Header {
        self.header
    }

    /// The location table, in input order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn glyphs(&self) -> &'a [Glyph] {
        self.glyphs
    }

    /// The offset of the first glyph record.
    pub fn base_offset(&self) -> u32 {
        // checked by validation
        base_offset(self.glyphs.len()) as u32
    }

    /// The total size of the file in bytes.
    pub fn len(&self) -> usize {
        self.base_offset() as usize + self.glyphs.iter().map(Glyph::record_size).sum::<usize>()
    }

    /// Always `false`: even a font without glyphs has a header.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Encode the file as bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = FontWriter::with_capacity(self.len());
        self.write_into(&mut writer);
        debug_assert_eq!(writer.len(), self.len());
        writer.into_data()
    }
}

impl FontWrite for Header {
    fn write_into(&self, writer: &mut FontWriter) {
        self.glyph_count.write_into(writer);
        self.height.write_into(writer);
        self.ascent.write_into(writer);
        self.descent.write_into(writer);
    }
}

impl FontWrite for Location {
    fn write_into(&self, writer: &mut FontWriter) {
        self.code.write_into(writer);
        self.offset.write_into(writer);
    }
}

/// Writes the glyph's record: its width followed by the raw pixels.
impl FontWrite for Glyph {
    fn write_into(&self, writer: &mut FontWriter) {
        self.width().write_into(writer);
        writer.write_slice(self.pixels());
    }
}

impl FontWrite for FontFile<'_> {
    fn write_into(&self, writer: &mut FontWriter) {
        self.header.write_into(writer);
        self.locations.write_into(writer);
        self.glyphs.write_into(writer);
    }
}

/// Offsets computed at full width, so that overflow can be reported instead
/// of wrapping.
struct Layout<'a> {
    metrics: LineMetrics,
    placed: Vec<PlacedGlyph<'a>>,
}

/// A glyph together with where it will be written.
struct PlacedGlyph<'a> {
    glyph: &'a Glyph,
    offset: u64,
    font_height: u16,
}

impl<'a> Layout<'a> {
    fn new(glyphs: &'a [Glyph], metrics: LineMetrics) -> Self {
        let mut offset = base_offset(glyphs.len());
        let mut placed = Vec::with_capacity(glyphs.len());
        for glyph in glyphs {
            placed.push(PlacedGlyph {
                glyph,
                offset,
                font_height: metrics.height,
            });
            offset += glyph.record_size() as u64;
        }
        Layout { metrics, placed }
    }
}

impl Validate for Layout<'_> {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        ctx.in_table("FontFile", |ctx| {
            ctx.in_field("glyph_count", |ctx| {
                if u32::try_from(self.placed.len()).is_err() {
                    ctx.report(format!("{} glyphs do not fit in 32 bits", self.placed.len()));
                }
            });
            ctx.in_field("height", |ctx| {
                let LineMetrics {
                    height,
                    ascent,
                    descent,
                    ..
                } = self.metrics;
                if ascent as u32 + descent as u32 > height as u32 {
                    ctx.report(format!(
                        "ascent {ascent} and descent {descent} exceed the height {height}"
                    ));
                }
            });
            ctx.in_field("glyphs", |ctx| self.placed.validate_impl(ctx));
        })
    }
}

impl Validate for PlacedGlyph<'_> {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        let glyph = self.glyph;
        ctx.in_field("offset", |ctx| {
            if self.offset > u32::MAX as u64 {
                ctx.report(format!(
                    "U+{:04X} starts at byte {}, beyond the 32-bit offset limit",
                    glyph.code(),
                    self.offset
                ));
            }
        });
        ctx.in_field("height", |ctx| {
            if glyph.height() != self.font_height {
                ctx.report(format!(
                    "U+{:04X} is {} pixels tall but the font height is {}",
                    glyph.code(),
                    glyph.height(),
                    self.font_height
                ));
            }
        });
        ctx.in_field("pixels", |ctx| {
            if glyph.pixels().len() != glyph.expected_pixel_count() {
                ctx.report(format!(
                    "U+{:04X} has {} pixels, expected {}x{}",
                    glyph.code(),
                    glyph.pixels().len(),
                    glyph.width(),
                    glyph.height()
                ));
            }
        });
    }
}

/// Lay out and encode `glyphs` as a font file.
pub fn pack(glyphs: &[Glyph], metrics: LineMetrics) -> Result<Vec<u8>, Error> {
    let file = FontFile::new(glyphs, metrics)?;
    let bytes = file.to_bytes();
    log::debug!("packed {} glyphs into {} bytes", glyphs.len(), bytes.len());
    Ok(bytes)
}

/// Lay out `glyphs` and write the encoded font file to `sink`.
///
/// The file is encoded completely before anything is written, then handed
/// to the sink in a single write. If writing fails, whatever reached the
/// sink is not a usable font file.
pub fn pack_into(
    glyphs: &[Glyph],
    metrics: LineMetrics,
    mut sink: impl Write,
) -> Result<(), Error> {
    let bytes = pack(glyphs, metrics)?;
    sink.write_all(&bytes)?;
    sink.flush()?;
    Ok(())
}

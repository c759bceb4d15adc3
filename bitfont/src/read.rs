//! Reading bitmap font files

use read_fonts::{FontData, FontRead, ReadError};

use crate::{
    pack::base_offset, Glyph, Header, LineMetrics, Location, HEADER_SIZE, LOCATION_SIZE,
    RECORD_HEADER_SIZE,
};

/// A bitmap font file, parsed in place.
///
/// Construction checks the header and that the location table is in
/// bounds; glyph records are only checked when they are accessed.
#[derive(Clone)]
pub struct BitmapFont<'a> {
    data: FontData<'a>,
    header: Header,
}

/// A glyph record read from a [`BitmapFont`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlyphRecord<'a> {
    code: u16,
    width: u16,
    height: u16,
    ascent: u16,
    pixels: &'a [u8],
}

impl<'a> FontRead<'a> for BitmapFont<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let header = Header {
            glyph_count: data.read_at(0)?,
            height: data.read_at(4)?,
            ascent: data.read_at(6)?,
            descent: data.read_at(8)?,
        };
        if (data.len() as u64) < base_offset(header.glyph_count as usize) {
            return Err(ReadError::OutOfBounds);
        }
        if header.ascent as u32 + header.descent as u32 > header.height as u32 {
            return Err(ReadError::MalformedData(
                "ascent and descent exceed the line height",
            ));
        }
        Ok(BitmapFont { data, header })
    }
}

impl<'a> BitmapFont<'a> {
    pub fn header(&self) -> Header {
        self.header
    }

    pub fn glyph_count(&self) -> u32 {
        self.header.glyph_count
    }

    /// The height shared by every glyph record.
    pub fn height(&self) -> u16 {
        self.header.height
    }

    pub fn ascent(&self) -> u16 {
        self.header.ascent
    }

    pub fn descent(&self) -> u16 {
        self.header.descent
    }

    /// Line metrics, with the leading recovered from the stored height.
    pub fn metrics(&self) -> LineMetrics {
        let Header {
            height,
            ascent,
            descent,
            ..
        } = self.header;
        LineMetrics::new(height, ascent, descent, height - ascent - descent)
    }

    /// The location table entry at `index`.
    pub fn location(&self, index: usize) -> Option<Location> {
        if index >= self.glyph_count() as usize {
            return None;
        }
        let pos = HEADER_SIZE + index * LOCATION_SIZE;
        Some(Location {
            code: self.data.read_at(pos).ok()?,
            offset: self.data.read_at(pos + 2).ok()?,
        })
    }

    /// The location table, in stored order.
    ///
    /// Code points are not required to be unique or sorted.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        (0..self.glyph_count() as usize).filter_map(|index| self.location(index))
    }

    /// The glyph record at `index` in the location table.
    pub fn record(&self, index: usize) -> Result<GlyphRecord<'a>, ReadError> {
        let location = self.location(index).ok_or(ReadError::OutOfBounds)?;
        let start = location.offset as usize;
        let width: u16 = self.data.read_at(start)?;
        let len = width as usize * self.height() as usize;
        let pixels_start = start + RECORD_HEADER_SIZE;
        let pixels = self
            .data
            .slice(pixels_start..pixels_start + len)
            .ok_or(ReadError::OutOfBounds)?;
        Ok(GlyphRecord {
            code: location.code,
            width,
            height: self.height(),
            ascent: self.ascent(),
            pixels: pixels.as_bytes(),
        })
    }

    /// Every glyph record, in stored order.
    pub fn records(&self) -> impl Iterator<Item = Result<GlyphRecord<'a>, ReadError>> + '_ {
        (0..self.glyph_count() as usize).map(|index| self.record(index))
    }

    /// The first glyph record for `code`, if there is one.
    ///
    /// If the code point was written more than once, later records are
    /// ignored.
    pub fn glyph(&self, code: u16) -> Option<Result<GlyphRecord<'a>, ReadError>> {
        let index = self.locations().position(|location| location.code == code)?;
        Some(self.record(index))
    }
}

impl std::fmt::Debug for BitmapFont<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitmapFont")
            .field("header", &self.header)
            .field("len", &self.data.len())
            .finish()
    }
}

impl<'a> GlyphRecord<'a> {
    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// The intensity of each pixel, row-major.
    pub fn pixels(&self) -> &'a [u8] {
        self.pixels
    }

    /// Copy this record into an owned [`Glyph`].
    pub fn to_glyph(&self) -> Glyph {
        Glyph::new(
            self.code,
            self.width,
            self.height,
            self.ascent,
            self.pixels.to_vec(),
        )
    }
}

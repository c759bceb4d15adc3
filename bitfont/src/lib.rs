//! Compact bitmap font files
//!
//! This crate converts rendered glyphs into a small, randomly accessible
//! bitmap font format, and reads that format back.
//!
//! The pipeline has two halves:
//!
//! - a [`GlyphExtractor`] asks a [`RenderingEngine`] to draw one code point
//!   onto a reusable [`Surface`], and crops the glyph's line box out of it as
//!   a [`Glyph`];
//! - the packer ([`pack`], [`pack_into`], [`FontFile`]) lays the glyphs out
//!   behind a fixed size header and a location table, and serializes
//!   everything as big-endian bytes.
//!
//! [`BitmapFont`] parses the resulting bytes without copying.
//!
//! # File format
//!
//! ```text
//! offset 0:  u32  glyph_count
//! offset 4:  u16  height
//! offset 6:  u16  ascent
//! offset 8:  u16  descent
//! offset 10: Location[glyph_count]  // { u16 code, u32 offset }
//!            GlyphRecord[glyph_count] // { u16 width, u8 pixels[width * height] }
//! ```
//!
//! Offsets are absolute, records are contiguous and there is no padding.
//! Every record shares the font-wide `height`.
//!
//! # Example
//!
//! ```
//! use bitfont::{pack, BitmapFont, FontRead, Glyph, LineMetrics};
//!
//! let metrics = LineMetrics::new(2, 1, 1, 0);
//! let glyphs = vec![
//!     Glyph::new(0x41, 1, 2, 1, vec![0xff, 0x00]),
//!     Glyph::new(0x20, 0, 2, 1, vec![]),
//! ];
//! let bytes = pack(&glyphs, metrics).unwrap();
//! let font = BitmapFont::read(bitfont::FontData::new(&bytes)).unwrap();
//! assert_eq!(font.glyph_count(), 2);
//! assert_eq!(font.glyph(0x41).unwrap().unwrap().pixels(), &[0xff, 0x00]);
//! ```

#![forbid(unsafe_code)]

mod engine;
mod error;
mod extract;
mod glyph;
mod metrics;
mod pack;
mod read;
mod surface;
pub mod table;
pub mod validate;
mod write;

pub use engine::{RenderError, RenderingEngine};
pub use error::Error;
pub use extract::GlyphExtractor;
pub use glyph::Glyph;
pub use metrics::LineMetrics;
pub use pack::{pack, pack_into, FontFile, Header, Location};
pub use read::{BitmapFont, GlyphRecord};
pub use surface::Surface;
pub use write::{FontWrite, FontWriter};

pub use read_fonts::{FontData, FontRead, ReadError};

/// Size in bytes of the fixed header.
pub const HEADER_SIZE: usize = 4 + 2 + 2 + 2;

/// Size in bytes of one entry in the location table.
pub const LOCATION_SIZE: usize = 2 + 4;

/// Size in bytes of the width field that starts every glyph record.
pub const RECORD_HEADER_SIZE: usize = 2;

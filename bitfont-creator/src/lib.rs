//! Rendering TrueType and OpenType fonts into bitmap font files.
//!
//! [`Font`] memory maps a font file and hands out a [`SkrifaEngine`] for one
//! face at one size. The engine loads outlines with skrifa and rasterizes
//! them with zeno; [`create`] then drives it through the `bitfont`
//! extractor and packer.

mod create;
mod font;
mod pen;

pub use create::{create, CreateOptions, Summary};
pub use font::{Font, SharedFontData, SkrifaEngine};
pub use pen::ZenoPen;

//! The interface to a glyph rasterizer

use std::fmt;

use read_fonts::ReadError;

use crate::{LineMetrics, Surface};

/// A font rasterizer bound to one font at one size.
///
/// This is everything the extractor needs from a rendering engine: global
/// line metrics, per code point advance widths, and the ability to paint a
/// glyph onto a [`Surface`]. How outlines are scaled, hinted or
/// antialiased is up to the implementation.
pub trait RenderingEngine {
    /// Vertical metrics shared by every glyph of the font.
    fn line_metrics(&self) -> LineMetrics;

    /// The advance width of `code`, in whole pixels.
    fn char_width(&mut self, code: u16) -> Result<u16, RenderError>;

    /// Paint `code` onto `surface` with its baseline origin at (`x`, `y`).
    ///
    /// Glyphs are drawn white on black: coverage is written as intensity,
    /// and combined with what is already on the surface by taking the
    /// maximum.
    fn draw(
        &mut self,
        code: u16,
        surface: &mut Surface,
        x: i32,
        y: i32,
    ) -> Result<(), RenderError>;
}

/// An error that occurs while rendering a glyph.
#[derive(Debug, Clone)]
pub enum RenderError {
    /// The font data could not be loaded.
    Font(ReadError),
    /// The font has no face at the requested collection index.
    MissingFace(u32),
    /// The engine failed to produce a glyph.
    Draw { code: u16, message: String },
    /// The glyph's line box does not fit on the working surface.
    OutsideSurface {
        code: u16,
        x: i32,
        y: i32,
        width: u16,
        height: u16,
        surface_width: u32,
        surface_height: u32,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Font(err) => write!(f, "failed to load font: {err}"),
            RenderError::MissingFace(index) => write!(f, "no font at collection index {index}"),
            RenderError::Draw { code, message } => {
                write!(f, "failed to draw U+{code:04X}: {message}")
            }
            RenderError::OutsideSurface {
                code,
                x,
                y,
                width,
                height,
                surface_width,
                surface_height,
            } => write!(
                f,
                "U+{code:04X} needs a {width}x{height} window at ({x}, {y}), \
                 which does not fit on the {surface_width}x{surface_height} surface"
            ),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ReadError> for RenderError {
    fn from(err: ReadError) -> Self {
        RenderError::Font(err)
    }
}

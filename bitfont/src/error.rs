//! Errors that occur while creating or reading a font file

use std::fmt;

use read_fonts::ReadError;

use crate::{validate::ValidationReport, RenderError};

/// An error from any stage of the pipeline.
#[derive(Debug)]
pub enum Error {
    /// A line of the code point table is not a 16-bit hexadecimal value.
    InputFormat {
        /// 1-based line number.
        line: usize,
        text: String,
    },
    /// The rendering engine could not produce metrics or pixels.
    Rendering(RenderError),
    /// Reading input or writing output failed.
    Io(std::io::Error),
    /// The glyphs cannot be represented in the file format.
    Validation(ValidationReport),
    /// A bitmap font file could not be parsed.
    Read(ReadError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputFormat { line, text } => {
                write!(f, "line {line}: '{text}' is not a hexadecimal code point")
            }
            Error::Rendering(err) => err.fmt(f),
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::Validation(report) => report.fmt(f),
            Error::Read(err) => write!(f, "invalid font file: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Rendering(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Read(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RenderError> for Error {
    fn from(err: RenderError) -> Self {
        Error::Rendering(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<ValidationReport> for Error {
    fn from(report: ValidationReport) -> Self {
        Error::Validation(report)
    }
}

impl From<ReadError> for Error {
    fn from(err: ReadError) -> Self {
        Error::Read(err)
    }
}

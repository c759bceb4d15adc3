//! Code point tables
//!
//! A table is a text file listing the code points to include in a font, one
//! hexadecimal value per line, in the order they should be written:
//!
//! ```text
//! 0041
//! 0042
//! 3042
//! ```

use std::path::Path;

use crate::Error;

/// Parse a code point table.
///
/// Every line must be a hexadecimal number no larger than `0xFFFF`; blank
/// lines are rejected like any other malformed line. Repeated code points are
/// kept, in order.
pub fn parse_code_table(text: &str) -> Result<Vec<u16>, Error> {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            u16::from_str_radix(line, 16).map_err(|_| Error::InputFormat {
                line: i + 1,
                text: line.to_owned(),
            })
        })
        .collect()
}

/// Read and parse the code point table at `path`.
///
/// The file is closed before parsing starts.
pub fn read_code_table(path: impl AsRef<Path>) -> Result<Vec<u16>, Error> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let codes = parse_code_table(&text)?;
    log::debug!("read {} code points from {}", codes.len(), path.display());
    Ok(codes)
}

use std::path::Path;

use bitfont::{pack, table, Error, Glyph, GlyphExtractor, LineMetrics, RenderingEngine, Surface};

/// Settings for [`create`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CreateOptions {
    pub surface_width: u32,
    pub surface_height: u32,
}

impl Default for CreateOptions {
    fn default() -> Self {
        let (surface_width, surface_height) = Surface::DEFAULT_SIZE;
        Self {
            surface_width,
            surface_height,
        }
    }
}

/// What [`create`] wrote.
#[derive(Clone, Debug)]
pub struct Summary {
    pub metrics: LineMetrics,
    /// The glyphs, in file order.
    pub glyphs: Vec<Glyph>,
    /// Size of the output file in bytes.
    pub byte_len: usize,
}

impl Summary {
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}

/// Render every code point listed in `table_path` and write the font file.
///
/// The table is parsed and every glyph is rendered and packed before
/// `output_path` is touched, so no output file is created when any step
/// fails. An existing file at `output_path` is replaced.
pub fn create<E: RenderingEngine>(
    table_path: impl AsRef<Path>,
    engine: E,
    options: &CreateOptions,
    output_path: impl AsRef<Path>,
) -> Result<Summary, Error> {
    let codes = table::read_code_table(table_path)?;
    let surface = Surface::new(options.surface_width, options.surface_height);
    let mut extractor = GlyphExtractor::with_surface(engine, surface);
    let glyphs = extractor.extract_all(&codes)?;
    let metrics = extractor.metrics();
    let bytes = pack(&glyphs, metrics)?;

    let output_path = output_path.as_ref();
    std::fs::write(output_path, &bytes)?;
    log::info!(
        "wrote {} glyphs ({} bytes) to {}",
        glyphs.len(),
        bytes.len(),
        output_path.display()
    );
    Ok(Summary {
        metrics,
        glyphs,
        byte_len: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use bitfont::{BitmapFont, FontData, FontRead, RenderError};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    /// Draws a box outline around each glyph's line box above the baseline.
    struct BoxEngine {
        metrics: LineMetrics,
    }

    impl BoxEngine {
        fn new() -> Self {
            BoxEngine {
                metrics: LineMetrics::from_scaled(7.3, 2.1, 0.0),
            }
        }
    }

    impl RenderingEngine for BoxEngine {
        fn line_metrics(&self) -> LineMetrics {
            self.metrics
        }

        fn char_width(&mut self, code: u16) -> Result<u16, RenderError> {
            Ok(match code {
                0x20 => 3,
                0x300..=0x36f => 0,
                _ => 4 + code % 3,
            })
        }

        fn draw(
            &mut self,
            code: u16,
            surface: &mut Surface,
            x: i32,
            y: i32,
        ) -> Result<(), RenderError> {
            if code == 0x20 {
                return Ok(());
            }
            let width = self.char_width(code)? as i32;
            let top = y - self.metrics.ascent as i32;
            for col in x..x + width {
                surface.paint(col, top, 0xff);
                surface.paint(col, y - 1, 0xff);
            }
            for row in top..y {
                surface.paint(x, row, 0x80);
                surface.paint(x + width - 1, row, 0x80);
            }
            Ok(())
        }
    }

    fn write_table(dir: &Path, text: &str) -> std::path::PathBuf {
        let path = dir.join("table.txt");
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn two_glyph_table() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = tempfile::tempdir().unwrap();
        let table = write_table(dir.path(), "0041\n0042\n");
        let output = dir.path().join("out.fnt");
        let summary = create(&table, BoxEngine::new(), &Default::default(), &output).unwrap();

        let bytes = std::fs::read(&output).unwrap();
        assert_eq!(summary.byte_len, bytes.len());
        assert_eq!(summary.glyph_count(), 2);
        let font = BitmapFont::read(FontData::new(&bytes)).unwrap();
        assert_eq!(font.metrics(), summary.metrics);
        let a = font.location(0).unwrap();
        let b = font.location(1).unwrap();
        assert_eq!((a.code, b.code), (0x41, 0x42));
        assert_eq!(a.offset, 22);
        assert_eq!(
            (b.offset - a.offset) as usize,
            summary.glyphs[0].record_size()
        );
        assert_eq!(font.record(1).unwrap().to_glyph(), summary.glyphs[1]);
    }

    #[rstest]
    #[case::not_hex("zz\n")]
    #[case::too_large("0041\n12345\n")]
    #[case::blank_line("0041\n\n0042\n")]
    fn malformed_table_creates_no_output(#[case] text: &str) {
        let dir = tempfile::tempdir().unwrap();
        let table = write_table(dir.path(), text);
        let output = dir.path().join("out.fnt");
        let err = create(&table, BoxEngine::new(), &Default::default(), &output).unwrap_err();
        assert!(matches!(err, Error::InputFormat { .. }), "{err:?}");
        assert!(!output.exists());
    }

    #[test]
    fn missing_table() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.fnt");
        let err = create(
            dir.path().join("missing.txt"),
            BoxEngine::new(),
            &Default::default(),
            &output,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Io(_)), "{err:?}");
        assert!(!output.exists());
    }

    #[test]
    fn surface_too_small_creates_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let table = write_table(dir.path(), "0041\n");
        let output = dir.path().join("out.fnt");
        let options = CreateOptions {
            surface_width: 3,
            surface_height: 3,
        };
        let err = create(&table, BoxEngine::new(), &options, &output).unwrap_err();
        assert!(
            matches!(err, Error::Rendering(RenderError::OutsideSurface { .. })),
            "{err:?}"
        );
        assert!(!output.exists());
    }

    #[test]
    fn inconsistent_metrics_create_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let table = write_table(dir.path(), "0041\n");
        let output = dir.path().join("out.fnt");
        let mut engine = BoxEngine::new();
        engine.metrics = LineMetrics::new(4, 4, 2, 0);
        let err = create(&table, engine, &Default::default(), &output).unwrap_err();
        assert!(matches!(err, Error::Validation(_)), "{err:?}");
        assert!(!output.exists());
    }

    #[test]
    fn identical_runs_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let table = write_table(dir.path(), "0041\n0020\n0301\n3042\n0041\n");
        let first = dir.path().join("first.fnt");
        let second = dir.path().join("second.fnt");
        create(&table, BoxEngine::new(), &Default::default(), &first).unwrap();
        create(&table, BoxEngine::new(), &Default::default(), &second).unwrap();
        assert_eq!(
            std::fs::read(&first).unwrap(),
            std::fs::read(&second).unwrap()
        );
    }

    #[test]
    fn replaces_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let table = write_table(dir.path(), "0020\n");
        let output = dir.path().join("out.fnt");
        std::fs::write(&output, vec![0xaa; 1000]).unwrap();
        let summary = create(&table, BoxEngine::new(), &Default::default(), &output).unwrap();
        let bytes = std::fs::read(&output).unwrap();
        assert_eq!(bytes.len(), summary.byte_len);
        let font = BitmapFont::read(FontData::new(&bytes)).unwrap();
        let space = font.glyph(0x20).unwrap().unwrap();
        assert_eq!(space.width(), 3);
        assert!(space.pixels().iter().all(|p| *p == 0));
    }
}

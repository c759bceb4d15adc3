use std::{io::Write, path::PathBuf};

use bitfont::{Error, Surface};
use bitfont_creator::{create, CreateOptions, Font};

/// Render a list of code points into a bitmap font file.
#[derive(clap::Parser, Debug)]
#[command(name = "font-creator")]
struct Args {
    /// Text file with one hexadecimal code point per line
    table: PathBuf,
    /// TrueType or OpenType font file, or a font collection
    font: PathBuf,
    /// Font size in pixels per em
    #[arg(value_parser = parse_size)]
    size: f32,
    /// Path of the bitmap font file to write
    output: PathBuf,
    /// Index of the face to use in a font collection
    #[arg(long, default_value_t = 0)]
    index: u32,
    /// Width of the working surface, in pixels
    #[arg(
        long,
        default_value_t = Surface::DEFAULT_SIZE.0,
        value_parser = parse_surface_dimension
    )]
    surface_width: u32,
    /// Height of the working surface, in pixels
    #[arg(
        long,
        default_value_t = Surface::DEFAULT_SIZE.1,
        value_parser = parse_surface_dimension
    )]
    surface_height: u32,
    /// Print every glyph as text art
    #[arg(long)]
    dump: bool,
}

fn parse_size(arg: &str) -> Result<f32, String> {
    let size: f32 = arg.parse().map_err(|e| format!("{e}"))?;
    if size.is_finite() && size > 0.0 {
        Ok(size)
    } else {
        Err(format!("font size must be a positive number, got {size}"))
    }
}

/// Largest accepted surface width or height, in pixels.
const MAX_SURFACE_DIMENSION: u32 = 8192;

fn parse_surface_dimension(arg: &str) -> Result<u32, String> {
    let value: u32 = arg.parse().map_err(|e| format!("{e}"))?;
    if (1..=MAX_SURFACE_DIMENSION).contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "surface dimensions must be between 1 and {MAX_SURFACE_DIMENSION}, got {value}"
        ))
    }
}

fn main() {
    env_logger::init();

    use clap::Parser as _;
    let args = Args::parse_from(wild::args());

    if let Err(e) = run(&args) {
        eprintln!("font-creator: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let font = Font::new(&args.font)?;
    let engine = font.instance(args.index, args.size)?;
    log::debug!(
        "rendering face {} of {} at {} ppem",
        args.index,
        font.path().display(),
        args.size
    );
    let options = CreateOptions {
        surface_width: args.surface_width,
        surface_height: args.surface_height,
    };
    let summary = create(&args.table, engine, &options, &args.output)?;
    if args.dump {
        let mut stdout = std::io::stdout().lock();
        for glyph in &summary.glyphs {
            write!(stdout, "{glyph}")?;
        }
    }
    Ok(())
}

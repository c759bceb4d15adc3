use std::{
    borrow::Borrow,
    path::{Path, PathBuf},
    sync::Arc,
};

use bitfont::{Error, RenderError};
use ::skrifa::raw::{FileRef, FontRef};

mod skrifa;

pub use self::skrifa::SkrifaEngine;

/// A memory mapped font file or collection.
pub struct Font {
    path: PathBuf,
    data: SharedFontData,
    count: u32,
}

impl Font {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_owned();
        let file = std::fs::File::open(&path)?;
        // SAFETY: the mapping is read only and the file is not modified while
        // the tool runs
        let data = SharedFontData(unsafe { Arc::new(memmap2::Mmap::map(&file)?) });
        let count = match FileRef::new(data.borrow()).map_err(RenderError::Font)? {
            FileRef::Font(_) => 1,
            FileRef::Collection(collection) => collection.len(),
        };
        log::debug!("loaded {} with {count} face(s)", path.display());
        Ok(Self { path, data, count })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The number of faces in the file.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Create a rendering engine for face `index` at `ppem` pixels per em.
    pub fn instance(&self, index: u32, ppem: f32) -> Result<SkrifaEngine<'_>, RenderError> {
        if index >= self.count {
            return Err(RenderError::MissingFace(index));
        }
        let font = FontRef::from_index(self.data.borrow(), index)?;
        Ok(SkrifaEngine::new(font, ppem))
    }
}

#[derive(Clone)]
pub struct SharedFontData(Arc<memmap2::Mmap>);

impl Borrow<[u8]> for SharedFontData {
    fn borrow(&self) -> &[u8] {
        self.0.as_ref()
    }
}

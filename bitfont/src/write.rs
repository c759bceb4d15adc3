//! Serializing big-endian data

/// A type that can be written out as part of a bitmap font file.
pub trait FontWrite {
    /// Write our data into this [`FontWriter`].
    fn write_into(&self, writer: &mut FontWriter);
}

/// A growable buffer of big-endian bytes.
///
/// Everything in a font file is written through this type, so the whole
/// file exists in memory before anything touches the output sink.
#[derive(Debug, Default)]
pub struct FontWriter {
    bytes: Vec<u8>,
}

impl FontWriter {
    /// Create a writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        FontWriter {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Write raw bytes.
    ///
    /// The caller is responsible for ensuring bytes are in big-endian order.
    #[inline]
    pub fn write_slice(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes)
    }

    /// The number of bytes written so far.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Finish writing, returning the encoded bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.bytes
    }
}

macro_rules! write_be_bytes {
    ($ty:ty) => {
        impl FontWrite for $ty {
            #[inline]
            fn write_into(&self, writer: &mut FontWriter) {
                writer.write_slice(&self.to_be_bytes())
            }
        }
    };
}

write_be_bytes!(u8);
write_be_bytes!(u16);
write_be_bytes!(u32);

impl<T: FontWrite> FontWrite for [T] {
    fn write_into(&self, writer: &mut FontWriter) {
        self.iter().for_each(|item| item.write_into(writer))
    }
}

impl<T: FontWrite> FontWrite for Vec<T> {
    fn write_into(&self, writer: &mut FontWriter) {
        self.as_slice().write_into(writer)
    }
}

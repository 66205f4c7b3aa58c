use std::io::{self, Write};

use super::{has_signature, MnHeaderCodec};
use crate::tiff::Endian;

/// Panasonic makernote header. The IFD that follows has no next pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanasonicMnHeader {
    buf: Vec<u8>,
    start: usize,
}

impl PanasonicMnHeader {
    pub const SIGNATURE: [u8; 12] = *b"Panasonic\x00\x00\x00";
    const CHECK_LEN: usize = 9;

    pub const fn size_of_signature() -> usize {
        Self::SIGNATURE.len()
    }
}

impl Default for PanasonicMnHeader {
    fn default() -> Self {
        Self {
            buf: Self::SIGNATURE.to_vec(),
            start: Self::size_of_signature(),
        }
    }
}

impl MnHeaderCodec for PanasonicMnHeader {
    fn read(&mut self, data: &[u8], _byte_order: Option<Endian>) -> bool {
        if !has_signature(data, &Self::SIGNATURE, Self::CHECK_LEN) {
            return false;
        }
        self.buf = data[..Self::size_of_signature()].to_vec();
        self.start = Self::size_of_signature();
        true
    }

    fn write(&self, out: &mut dyn Write, _byte_order: Endian) -> io::Result<usize> {
        out.write_all(&Self::SIGNATURE)?;
        Ok(Self::size_of_signature())
    }

    fn size(&self) -> usize {
        self.buf.len()
    }

    fn ifd_offset(&self) -> usize {
        self.start
    }
}

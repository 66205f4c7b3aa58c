use std::io::{self, Write};

use super::{has_signature, MnHeaderCodec};
use crate::tiff::Endian;

/// Casio type 2 makernote header ("QVC\0\0\0"), always big endian.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Casio2MnHeader {
    buf: Vec<u8>,
    start: usize,
}

impl Casio2MnHeader {
    pub const SIGNATURE: [u8; 6] = *b"QVC\x00\x00\x00";
    pub const BYTE_ORDER: Endian = Endian::Big;

    pub const fn size_of_signature() -> usize {
        Self::SIGNATURE.len()
    }
}

impl Default for Casio2MnHeader {
    fn default() -> Self {
        Self {
            buf: Self::SIGNATURE.to_vec(),
            start: Self::size_of_signature(),
        }
    }
}

impl MnHeaderCodec for Casio2MnHeader {
    fn read(&mut self, data: &[u8], _byte_order: Option<Endian>) -> bool {
        if !has_signature(data, &Self::SIGNATURE, Self::size_of_signature()) {
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

    fn byte_order(&self) -> Option<Endian> {
        Some(Self::BYTE_ORDER)
    }
}

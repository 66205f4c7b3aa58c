use std::io::{self, Write};

use super::{has_signature, MnHeaderCodec};
use crate::tiff::Endian;

/// Fujifilm makernote header. Always little endian; bytes 8..12 hold the IFD offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FujiMnHeader {
    header: Vec<u8>,
    start: u32,
}

impl FujiMnHeader {
    pub const SIGNATURE: [u8; 12] = *b"FUJIFILM\x0c\x00\x00\x00";
    pub const BYTE_ORDER: Endian = Endian::Little;
    const CHECK_LEN: usize = 8;

    pub const fn size_of_signature() -> usize {
        Self::SIGNATURE.len()
    }
}

impl Default for FujiMnHeader {
    fn default() -> Self {
        Self {
            header: Self::SIGNATURE.to_vec(),
            start: 12,
        }
    }
}

impl MnHeaderCodec for FujiMnHeader {
    // The declared byte order is ignored: Fuji headers are little endian regardless.
    fn read(&mut self, data: &[u8], _byte_order: Option<Endian>) -> bool {
        if !has_signature(data, &Self::SIGNATURE, Self::CHECK_LEN) {
            return false;
        }
        let Some(start) = Self::BYTE_ORDER.read_u32(data, 8) else {
            return false;
        };
        self.header = data[..Self::size_of_signature()].to_vec();
        self.start = start;
        true
    }

    fn write(&self, out: &mut dyn Write, _byte_order: Endian) -> io::Result<usize> {
        out.write_all(&Self::SIGNATURE)?;
        Ok(Self::size_of_signature())
    }

    fn size(&self) -> usize {
        self.header.len()
    }

    fn ifd_offset(&self) -> usize {
        self.start as usize
    }

    fn byte_order(&self) -> Option<Endian> {
        Some(Self::BYTE_ORDER)
    }

    fn base_offset(&self, mn_offset: usize) -> usize {
        mn_offset
    }
}

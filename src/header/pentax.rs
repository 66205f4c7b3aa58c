use std::io::{self, Write};

use super::{has_signature, MnHeaderCodec};
use crate::tiff::Endian;

/// Pentax (and Samsung-branded Pentax) makernote header: "AOC\0" plus a byte order hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PentaxMnHeader {
    header: Vec<u8>,
}

impl PentaxMnHeader {
    pub const SIGNATURE: [u8; 6] = *b"AOC\x00MM";
    const CHECK_LEN: usize = 3;

    pub const fn size_of_signature() -> usize {
        Self::SIGNATURE.len()
    }
}

impl Default for PentaxMnHeader {
    fn default() -> Self {
        Self {
            header: Self::SIGNATURE.to_vec(),
        }
    }
}

impl MnHeaderCodec for PentaxMnHeader {
    fn read(&mut self, data: &[u8], _byte_order: Option<Endian>) -> bool {
        if !has_signature(data, &Self::SIGNATURE, Self::CHECK_LEN) {
            return false;
        }
        self.header = data[..Self::size_of_signature()].to_vec();
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
        Self::size_of_signature()
    }
}

/// Pentax makernote header as stored in DNG files: "PENTAX \0" plus a byte order hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PentaxDngMnHeader {
    header: Vec<u8>,
}

impl PentaxDngMnHeader {
    pub const SIGNATURE: [u8; 10] = *b"PENTAX \x00MM";
    const CHECK_LEN: usize = 7;

    pub const fn size_of_signature() -> usize {
        Self::SIGNATURE.len()
    }
}

impl Default for PentaxDngMnHeader {
    fn default() -> Self {
        Self {
            header: Self::SIGNATURE.to_vec(),
        }
    }
}

impl MnHeaderCodec for PentaxDngMnHeader {
    fn read(&mut self, data: &[u8], _byte_order: Option<Endian>) -> bool {
        if !has_signature(data, &Self::SIGNATURE, Self::CHECK_LEN) {
            return false;
        }
        self.header = data[..Self::size_of_signature()].to_vec();
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
        Self::size_of_signature()
    }

    fn base_offset(&self, mn_offset: usize) -> usize {
        mn_offset
    }
}

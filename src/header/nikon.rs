use std::io::{self, Write};

use super::{has_signature, MnHeaderCodec};
use crate::tiff::{Endian, TiffHeader, TIFF_HEADER_LEN};

/// "Nikon\0" is all that identifies either Nikon header.
const NIKON_CHECK_LEN: usize = 6;

/// Nikon makernote header without an embedded TIFF header (E-series compacts).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nikon2MnHeader {
    buf: Vec<u8>,
    start: usize,
}

impl Nikon2MnHeader {
    pub const SIGNATURE: [u8; 8] = *b"Nikon\x00\x01\x00";

    pub const fn size_of_signature() -> usize {
        Self::SIGNATURE.len()
    }
}

impl Default for Nikon2MnHeader {
    fn default() -> Self {
        Self {
            buf: Self::SIGNATURE.to_vec(),
            start: Self::size_of_signature(),
        }
    }
}

impl MnHeaderCodec for Nikon2MnHeader {
    fn read(&mut self, data: &[u8], _byte_order: Option<Endian>) -> bool {
        if !has_signature(data, &Self::SIGNATURE, NIKON_CHECK_LEN) {
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

/// Nikon makernote header with an embedded TIFF header at offset 10.
///
/// Byte order and IFD offset come from the embedded header; pointers inside the
/// makernote are relative to that TIFF header, i.e. to makernote start + 10.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nikon3MnHeader {
    buf: Vec<u8>,
    byte_order: Option<Endian>,
    start: usize,
}

impl Nikon3MnHeader {
    pub const SIGNATURE: [u8; 18] = *b"Nikon\x00\x02\x10\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00";
    /// Offset of the embedded TIFF header.
    pub const TIFF_HEADER_OFFSET: usize = 10;

    pub const fn size_of_signature() -> usize {
        Self::SIGNATURE.len()
    }
}

impl Default for Nikon3MnHeader {
    fn default() -> Self {
        Self {
            buf: Self::SIGNATURE.to_vec(),
            byte_order: None,
            start: Self::size_of_signature(),
        }
    }
}

impl MnHeaderCodec for Nikon3MnHeader {
    fn read(&mut self, data: &[u8], _byte_order: Option<Endian>) -> bool {
        if !has_signature(data, &Self::SIGNATURE, NIKON_CHECK_LEN) {
            return false;
        }
        let buf = &data[..Self::size_of_signature()];
        let Some(th) = TiffHeader::read(&buf[Self::TIFF_HEADER_OFFSET..]) else {
            return false;
        };
        self.buf = buf.to_vec();
        self.byte_order = Some(th.byte_order);
        self.start = Self::TIFF_HEADER_OFFSET + th.offset as usize;
        true
    }

    /// Writes the stored prefix followed by a fresh TIFF header in the target byte order.
    /// Any gap between the embedded header and the IFD is not preserved.
    fn write(&self, out: &mut dyn Write, byte_order: Endian) -> io::Result<usize> {
        debug_assert!(self.buf.len() >= Self::TIFF_HEADER_OFFSET);
        out.write_all(&self.buf[..Self::TIFF_HEADER_OFFSET])?;
        out.write_all(&TiffHeader::new(byte_order).write())?;
        Ok(Self::TIFF_HEADER_OFFSET + TIFF_HEADER_LEN)
    }

    fn size(&self) -> usize {
        Self::size_of_signature()
    }

    fn ifd_offset(&self) -> usize {
        self.start
    }

    fn byte_order(&self) -> Option<Endian> {
        self.byte_order
    }

    fn base_offset(&self, mn_offset: usize) -> usize {
        mn_offset + Self::TIFF_HEADER_OFFSET
    }

    fn set_byte_order(&mut self, byte_order: Endian) {
        self.byte_order = Some(byte_order);
    }
}

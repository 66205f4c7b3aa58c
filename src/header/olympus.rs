use std::io::{self, Write};

use super::{has_signature, MnHeaderCodec};
use crate::tiff::Endian;

/// Header of the old Olympus makernote: "OLYMP\0" followed by a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OlympusMnHeader {
    header: Vec<u8>,
}

impl OlympusMnHeader {
    pub const SIGNATURE: [u8; 8] = *b"OLYMP\x00\x01\x00";
    /// Only "OLYMP\0" is checked; the version bytes vary.
    const CHECK_LEN: usize = 6;

    pub const fn size_of_signature() -> usize {
        Self::SIGNATURE.len()
    }
}

impl Default for OlympusMnHeader {
    fn default() -> Self {
        Self {
            header: Self::SIGNATURE.to_vec(),
        }
    }
}

impl MnHeaderCodec for OlympusMnHeader {
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

/// Header of the newer Olympus makernote: "OLYMPUS\0II" with offsets relative to the makernote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Olympus2MnHeader {
    header: Vec<u8>,
}

impl Olympus2MnHeader {
    pub const SIGNATURE: [u8; 12] = *b"OLYMPUS\x00II\x03\x00";
    const CHECK_LEN: usize = 10;

    pub const fn size_of_signature() -> usize {
        Self::SIGNATURE.len()
    }
}

impl Default for Olympus2MnHeader {
    fn default() -> Self {
        Self {
            header: Self::SIGNATURE.to_vec(),
        }
    }
}

impl MnHeaderCodec for Olympus2MnHeader {
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

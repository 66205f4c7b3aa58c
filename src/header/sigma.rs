use std::io::{self, Write};

use super::{has_signature, MnHeaderCodec};
use crate::tiff::Endian;

/// Sigma/Foveon makernote header. Either signature is accepted; "SIGMA" is written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigmaMnHeader {
    buf: Vec<u8>,
    start: usize,
}

impl SigmaMnHeader {
    pub const SIGNATURE: [u8; 10] = *b"SIGMA\x00\x00\x00\x01\x00";
    pub const SIGNATURE_FOVEON: [u8; 10] = *b"FOVEON\x00\x00\x01\x00";
    const CHECK_LEN: usize = 8;

    pub const fn size_of_signature() -> usize {
        Self::SIGNATURE.len()
    }
}

impl Default for SigmaMnHeader {
    fn default() -> Self {
        Self {
            buf: Self::SIGNATURE.to_vec(),
            start: Self::size_of_signature(),
        }
    }
}

impl MnHeaderCodec for SigmaMnHeader {
    fn read(&mut self, data: &[u8], _byte_order: Option<Endian>) -> bool {
        if !has_signature(data, &Self::SIGNATURE, Self::CHECK_LEN)
            && !has_signature(data, &Self::SIGNATURE_FOVEON, Self::CHECK_LEN)
        {
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

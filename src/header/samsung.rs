use std::io::{self, Write};

use super::MnHeaderCodec;
use crate::tiff::Endian;

/// Genuine Samsung makernotes have no signature; only the offset base differs from a plain IFD.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SamsungMnHeader;

impl MnHeaderCodec for SamsungMnHeader {
    fn read(&mut self, _data: &[u8], _byte_order: Option<Endian>) -> bool {
        true
    }

    fn write(&self, _out: &mut dyn Write, _byte_order: Endian) -> io::Result<usize> {
        Ok(0)
    }

    fn size(&self) -> usize {
        0
    }

    fn base_offset(&self, mn_offset: usize) -> usize {
        mn_offset
    }
}

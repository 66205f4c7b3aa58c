//! Makernote header codecs: one type per vendor signature block.
//!
//! Every codec reads a fixed-size signature from the start of the makernote,
//! keeps a private copy of the bytes it consumed, and reports where the
//! makernote IFD starts and which base offset internal pointers are resolved
//! against. The set of vendors is closed, so [`MnHeader`] is an enum over the
//! per-vendor structs rather than a boxed trait object.

mod casio;
mod fuji;
mod nikon;
mod olympus;
mod panasonic;
mod pentax;
mod samsung;
mod sigma;
mod sony;

use std::io::{self, Write};

use crate::tiff::Endian;

pub use casio::Casio2MnHeader;
pub use fuji::FujiMnHeader;
pub use nikon::{Nikon2MnHeader, Nikon3MnHeader};
pub use olympus::{Olympus2MnHeader, OlympusMnHeader};
pub use panasonic::PanasonicMnHeader;
pub use pentax::{PentaxDngMnHeader, PentaxMnHeader};
pub use samsung::SamsungMnHeader;
pub use sigma::SigmaMnHeader;
pub use sony::SonyMnHeader;

/// Operations shared by all makernote header codecs.
pub trait MnHeaderCodec {
    /// Check the signature at the start of `data` and keep a copy of the header bytes.
    /// Returns false if `data` is too short or the signature does not match.
    fn read(&mut self, data: &[u8], byte_order: Option<Endian>) -> bool;

    /// Write the header; returns the number of bytes written.
    fn write(&self, out: &mut dyn Write, byte_order: Endian) -> io::Result<usize>;

    /// Size of the header in bytes.
    fn size(&self) -> usize;

    /// Offset of the makernote IFD from the start of the makernote.
    fn ifd_offset(&self) -> usize {
        0
    }

    /// Byte order fixed by the header, if any.
    fn byte_order(&self) -> Option<Endian> {
        None
    }

    /// Base offset for pointers inside the makernote, given the makernote's own offset.
    fn base_offset(&self, _mn_offset: usize) -> usize {
        0
    }

    fn set_byte_order(&mut self, _byte_order: Endian) {}
}

/// True if `data` holds at least a full `signature` and its first `check_len` bytes match.
pub(crate) fn has_signature(data: &[u8], signature: &[u8], check_len: usize) -> bool {
    data.len() >= signature.len() && data[..check_len] == signature[..check_len]
}

/// A vendor makernote header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MnHeader {
    Olympus(OlympusMnHeader),
    Olympus2(Olympus2MnHeader),
    Fuji(FujiMnHeader),
    Nikon2(Nikon2MnHeader),
    Nikon3(Nikon3MnHeader),
    Panasonic(PanasonicMnHeader),
    Pentax(PentaxMnHeader),
    PentaxDng(PentaxDngMnHeader),
    Samsung(SamsungMnHeader),
    Sigma(SigmaMnHeader),
    Sony(SonyMnHeader),
    Casio2(Casio2MnHeader),
}

impl MnHeader {
    fn codec(&self) -> &dyn MnHeaderCodec {
        match self {
            MnHeader::Olympus(h) => h,
            MnHeader::Olympus2(h) => h,
            MnHeader::Fuji(h) => h,
            MnHeader::Nikon2(h) => h,
            MnHeader::Nikon3(h) => h,
            MnHeader::Panasonic(h) => h,
            MnHeader::Pentax(h) => h,
            MnHeader::PentaxDng(h) => h,
            MnHeader::Samsung(h) => h,
            MnHeader::Sigma(h) => h,
            MnHeader::Sony(h) => h,
            MnHeader::Casio2(h) => h,
        }
    }

    fn codec_mut(&mut self) -> &mut dyn MnHeaderCodec {
        match self {
            MnHeader::Olympus(h) => h,
            MnHeader::Olympus2(h) => h,
            MnHeader::Fuji(h) => h,
            MnHeader::Nikon2(h) => h,
            MnHeader::Nikon3(h) => h,
            MnHeader::Panasonic(h) => h,
            MnHeader::Pentax(h) => h,
            MnHeader::PentaxDng(h) => h,
            MnHeader::Samsung(h) => h,
            MnHeader::Sigma(h) => h,
            MnHeader::Sony(h) => h,
            MnHeader::Casio2(h) => h,
        }
    }

    /// Vendor/variant label for logging.
    pub fn name(&self) -> &'static str {
        match self {
            MnHeader::Olympus(_) => "Olympus",
            MnHeader::Olympus2(_) => "Olympus2",
            MnHeader::Fuji(_) => "Fuji",
            MnHeader::Nikon2(_) => "Nikon2",
            MnHeader::Nikon3(_) => "Nikon3",
            MnHeader::Panasonic(_) => "Panasonic",
            MnHeader::Pentax(_) => "Pentax",
            MnHeader::PentaxDng(_) => "PentaxDng",
            MnHeader::Samsung(_) => "Samsung",
            MnHeader::Sigma(_) => "Sigma",
            MnHeader::Sony(_) => "Sony",
            MnHeader::Casio2(_) => "Casio2",
        }
    }
}

impl MnHeaderCodec for MnHeader {
    fn read(&mut self, data: &[u8], byte_order: Option<Endian>) -> bool {
        self.codec_mut().read(data, byte_order)
    }

    fn write(&self, out: &mut dyn Write, byte_order: Endian) -> io::Result<usize> {
        self.codec().write(out, byte_order)
    }

    fn size(&self) -> usize {
        self.codec().size()
    }

    fn ifd_offset(&self) -> usize {
        self.codec().ifd_offset()
    }

    fn byte_order(&self) -> Option<Endian> {
        self.codec().byte_order()
    }

    fn base_offset(&self, mn_offset: usize) -> usize {
        self.codec().base_offset(mn_offset)
    }

    fn set_byte_order(&mut self, byte_order: Endian) {
        self.codec_mut().set_byte_order(byte_order)
    }
}

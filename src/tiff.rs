//! Minimal TIFF header codec, used where a makernote embeds its own TIFF header.
//! Operates on slices; no allocation except for `TiffHeader::write`.

#[cfg(feature = "serde")]
use serde::Serialize;

/// TIFF magic number.
pub const TIFF_MAGIC: u16 = 0x002A;
/// Little-endian byte order marker.
pub const TIFF_LITTLE: u16 = 0x4949;
/// Big-endian byte order marker.
pub const TIFF_BIG: u16 = 0x4D4D;

/// Size of TIFF header in bytes.
pub const TIFF_HEADER_LEN: usize = 8;

/// Byte order of multi-byte integers. "Unknown" is expressed as `Option<Endian>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    #[inline]
    pub fn read_u16(self, data: &[u8], offset: usize) -> Option<u16> {
        let bytes: [u8; 2] = data.get(offset..offset.checked_add(2)?)?.try_into().ok()?;
        Some(match self {
            Endian::Little => u16::from_le_bytes(bytes),
            Endian::Big => u16::from_be_bytes(bytes),
        })
    }

    #[inline]
    pub fn read_u32(self, data: &[u8], offset: usize) -> Option<u32> {
        let bytes: [u8; 4] = data.get(offset..offset.checked_add(4)?)?.try_into().ok()?;
        Some(match self {
            Endian::Little => u32::from_le_bytes(bytes),
            Endian::Big => u32::from_be_bytes(bytes),
        })
    }

    #[inline]
    pub fn u16_bytes(self, v: u16) -> [u8; 2] {
        match self {
            Endian::Little => v.to_le_bytes(),
            Endian::Big => v.to_be_bytes(),
        }
    }

    #[inline]
    pub fn u32_bytes(self, v: u32) -> [u8; 4] {
        match self {
            Endian::Little => v.to_le_bytes(),
            Endian::Big => v.to_be_bytes(),
        }
    }

    /// Byte order marker as it appears in the first two bytes of a TIFF header.
    pub fn marker(self) -> u16 {
        match self {
            Endian::Little => TIFF_LITTLE,
            Endian::Big => TIFF_BIG,
        }
    }
}

/// An 8-byte TIFF header: byte order, magic tag and offset to IFD0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    pub byte_order: Endian,
    pub tag: u16,
    pub offset: u32,
}

impl TiffHeader {
    /// Header for `byte_order` with the standard magic and IFD0 right after the header.
    pub fn new(byte_order: Endian) -> Self {
        Self {
            byte_order,
            tag: TIFF_MAGIC,
            offset: TIFF_HEADER_LEN as u32,
        }
    }

    /// Parse a TIFF header. Fails if shorter than 8 bytes, the byte order mark
    /// is neither `II` nor `MM`, or the magic is not 0x002A.
    pub fn read(data: &[u8]) -> Option<Self> {
        if data.len() < TIFF_HEADER_LEN {
            return None;
        }
        let byte_order = match (data[0], data[1]) {
            (0x49, 0x49) => Endian::Little,
            (0x4D, 0x4D) => Endian::Big,
            _ => return None,
        };
        let tag = byte_order.read_u16(data, 2)?;
        if tag != TIFF_MAGIC {
            return None;
        }
        let offset = byte_order.read_u32(data, 4)?;
        Some(Self {
            byte_order,
            tag,
            offset,
        })
    }

    /// Serialize to 8 bytes in this header's byte order.
    pub fn write(&self) -> [u8; TIFF_HEADER_LEN] {
        let mut out = [0u8; TIFF_HEADER_LEN];
        out[0..2].copy_from_slice(&self.byte_order.marker().to_be_bytes());
        out[2..4].copy_from_slice(&self.byte_order.u16_bytes(self.tag));
        out[4..8].copy_from_slice(&self.byte_order.u32_bytes(self.offset));
        out
    }
}

/// Check TIFF header and return (Endian, IFD0 offset). Fails if not valid TIFF.
pub fn read_tiff_header(data: &[u8]) -> Option<(Endian, u32)> {
    TiffHeader::read(data).map(|th| (th.byte_order, th.offset))
}

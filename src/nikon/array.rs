//! Version lookup for Nikon binary arrays.
//!
//! Several Nikon makernote tags hold binary arrays whose layout depends on a
//! four character version string at the start of the data, and for some
//! versions on the exact data size. Most version 2 arrays are encrypted from a
//! fixed offset on.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Row of the Nikon binary array table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NikonArrayIdx {
    /// Tag number of the binary array.
    pub tag: u16,
    /// Version prefix the data must start with.
    pub ver: &'static str,
    /// Exact data size, or 0 for any size.
    pub size: u32,
    /// Layout index handed to the value formatter.
    pub idx: usize,
    /// Offset where encryption starts; `None` if the array is not encrypted.
    pub start: Option<usize>,
}

impl NikonArrayIdx {
    const fn new(tag: u16, ver: &'static str, size: u32, idx: usize, start: Option<usize>) -> Self {
        Self {
            tag,
            ver,
            size,
            idx,
            start,
        }
    }

    /// True if this row describes `data` of tag `tag`.
    pub fn matches(&self, tag: u16, data: &[u8]) -> bool {
        self.tag == tag
            && data.starts_with(self.ver.as_bytes())
            && (self.size == 0 || data.len() as u64 == self.size as u64)
    }
}

pub const TAG_SHOT_INFO: u16 = 0x0091;
pub const TAG_COLOR_BALANCE: u16 = 0x0097;
pub const TAG_LENS_DATA: u16 = 0x0098;
pub const TAG_FLASH_INFO: u16 = 0x00a8;
pub const TAG_AF_INFO2: u16 = 0x00b7;

/// Nikon binary array version table. Order matters: the first matching row wins,
/// so the generic "02"/"01" rows come after the specific versions.
pub const NIKON_ARRAY_IDX: &[NikonArrayIdx] = &[
    // NikonSi
    NikonArrayIdx::new(TAG_SHOT_INFO, "0208", 0, 0, Some(4)), // D80
    NikonArrayIdx::new(TAG_SHOT_INFO, "0209", 0, 1, Some(4)), // D40
    NikonArrayIdx::new(TAG_SHOT_INFO, "0210", 5291, 2, Some(4)), // D300
    NikonArrayIdx::new(TAG_SHOT_INFO, "0210", 5303, 3, Some(4)), // D300, firmware 1.10
    NikonArrayIdx::new(TAG_SHOT_INFO, "02", 0, 4, Some(4)), // other v2.*, encrypted
    NikonArrayIdx::new(TAG_SHOT_INFO, "01", 0, 5, None), // other v1.*, not encrypted
    // NikonCb
    NikonArrayIdx::new(TAG_COLOR_BALANCE, "0100", 0, 0, None),
    NikonArrayIdx::new(TAG_COLOR_BALANCE, "0102", 0, 1, None),
    NikonArrayIdx::new(TAG_COLOR_BALANCE, "0103", 0, 4, None),
    NikonArrayIdx::new(TAG_COLOR_BALANCE, "0204", 0, 3, Some(284)),
    NikonArrayIdx::new(TAG_COLOR_BALANCE, "0205", 0, 2, Some(4)),
    NikonArrayIdx::new(TAG_COLOR_BALANCE, "0206", 0, 3, Some(284)),
    NikonArrayIdx::new(TAG_COLOR_BALANCE, "0207", 0, 3, Some(284)),
    NikonArrayIdx::new(TAG_COLOR_BALANCE, "0208", 0, 3, Some(284)),
    NikonArrayIdx::new(TAG_COLOR_BALANCE, "0209", 0, 5, Some(284)),
    NikonArrayIdx::new(TAG_COLOR_BALANCE, "02", 0, 3, Some(284)),
    // NikonLd
    NikonArrayIdx::new(TAG_LENS_DATA, "0100", 0, 0, None),
    NikonArrayIdx::new(TAG_LENS_DATA, "0101", 0, 1, None),
    NikonArrayIdx::new(TAG_LENS_DATA, "0201", 0, 1, Some(4)),
    NikonArrayIdx::new(TAG_LENS_DATA, "0202", 0, 1, Some(4)),
    NikonArrayIdx::new(TAG_LENS_DATA, "0203", 0, 1, Some(4)),
    NikonArrayIdx::new(TAG_LENS_DATA, "0204", 0, 2, Some(4)),
    NikonArrayIdx::new(TAG_LENS_DATA, "0800", 0, 3, Some(4)), // Z6/Z7
    NikonArrayIdx::new(TAG_LENS_DATA, "0801", 0, 3, Some(4)), // Z6/Z7
    // NikonFl
    NikonArrayIdx::new(TAG_FLASH_INFO, "0100", 0, 0, None),
    NikonArrayIdx::new(TAG_FLASH_INFO, "0101", 0, 0, None),
    NikonArrayIdx::new(TAG_FLASH_INFO, "0102", 0, 1, None),
    NikonArrayIdx::new(TAG_FLASH_INFO, "0103", 0, 2, None),
];

/// First table row describing `data` of tag `tag`. Needs at least 4 bytes of data.
pub fn find_array_idx(tag: u16, data: &[u8]) -> Option<&'static NikonArrayIdx> {
    if data.len() < 4 {
        return None;
    }
    NIKON_ARRAY_IDX.iter().find(|row| row.matches(tag, data))
}

//! Nikon binary arrays: layout selection and decryption.

mod array;
mod crypt;

pub use array::{
    find_array_idx, NikonArrayIdx, NIKON_ARRAY_IDX, TAG_AF_INFO2, TAG_COLOR_BALANCE, TAG_FLASH_INFO,
    TAG_LENS_DATA, TAG_SHOT_INFO,
};
pub use crypt::{ncrypt, nikon_crypt, TAG_SERIAL_NUMBER, TAG_SHUTTER_COUNT};

use crate::value::TagLookup;

/// Size of the AFInfo2 array written by cameras using the second AFInfo2 layout.
const AF_INFO2_V1_SIZE: usize = 84;

/// Layout index for a versioned Nikon binary array, from [`NIKON_ARRAY_IDX`].
pub fn nikon_selector(tag: u16, data: &[u8], _root: &dyn TagLookup) -> Option<usize> {
    find_array_idx(tag, data).map(|row| row.idx)
}

/// Layout index for AFInfo2: 0 in general, 1 for the 84 byte variant.
pub fn nikon_af2_selector(tag: u16, data: &[u8], _root: &dyn TagLookup) -> Option<usize> {
    if tag != TAG_AF_INFO2 {
        return None;
    }
    Some(if data.len() == AF_INFO2_V1_SIZE { 1 } else { 0 })
}

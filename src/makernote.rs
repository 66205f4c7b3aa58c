//! The makernote sub-structure handed back to the tree builder.

use std::io::{self, Write};

use crate::group::IfdId;
use crate::header::{MnHeader, MnHeaderCodec};
use crate::tiff::Endian;

/// A makernote that is laid out as an IFD, optionally preceded by a vendor header.
///
/// `mn_group` records which vendor variant was sniffed so the same structure can be
/// rebuilt later from the group alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfdMakernote {
    tag: u16,
    group: IfdId,
    mn_group: IfdId,
    header: Option<MnHeader>,
    has_next: bool,
    image_byte_order: Option<Endian>,
}

impl IfdMakernote {
    pub fn new(tag: u16, group: IfdId, mn_group: IfdId, header: Option<MnHeader>, has_next: bool) -> Self {
        Self {
            tag,
            group,
            mn_group,
            header,
            has_next,
            image_byte_order: None,
        }
    }

    /// Tag of the makernote entry in its parent directory.
    pub fn tag(&self) -> u16 {
        self.tag
    }

    /// Group of the parent directory.
    pub fn group(&self) -> IfdId {
        self.group
    }

    /// Group the makernote's own entries decode into.
    pub fn mn_group(&self) -> IfdId {
        self.mn_group
    }

    pub fn header(&self) -> Option<&MnHeader> {
        self.header.as_ref()
    }

    /// Whether the makernote IFD ends with a next-IFD pointer.
    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// Read the vendor header from the start of the makernote data.
    /// Makernotes without a header accept any data.
    pub fn read_header(&mut self, data: &[u8], byte_order: Option<Endian>) -> bool {
        match self.header.as_mut() {
            Some(h) => h.read(data, byte_order),
            None => true,
        }
    }

    pub fn write_header(&self, out: &mut dyn Write, byte_order: Endian) -> io::Result<usize> {
        match &self.header {
            Some(h) => h.write(out, byte_order),
            None => Ok(0),
        }
    }

    pub fn size_of_header(&self) -> usize {
        self.header.as_ref().map_or(0, |h| h.size())
    }

    pub fn ifd_offset(&self) -> usize {
        self.header.as_ref().map_or(0, |h| h.ifd_offset())
    }

    pub fn base_offset(&self, mn_offset: usize) -> usize {
        self.header.as_ref().map_or(0, |h| h.base_offset(mn_offset))
    }

    pub fn set_image_byte_order(&mut self, byte_order: Endian) {
        self.image_byte_order = Some(byte_order);
    }

    /// Set the byte order used to write the makernote; only headers that carry one keep it.
    pub fn set_byte_order(&mut self, byte_order: Endian) {
        if let Some(h) = self.header.as_mut() {
            h.set_byte_order(byte_order);
        }
    }

    /// Byte order of the makernote IFD: fixed by the header if it has one,
    /// otherwise inherited from the image.
    pub fn byte_order(&self) -> Option<Endian> {
        self.header
            .as_ref()
            .and_then(|h| h.byte_order())
            .or(self.image_byte_order)
    }
}

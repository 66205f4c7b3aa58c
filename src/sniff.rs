//! Vendor sniffers: pick the makernote variant from the first bytes of the data.
//!
//! Each `new_*_mn` function inspects the raw makernote and, if the signature fits
//! and there is room for at least a one-entry IFD after the header, builds the
//! makernote through the matching `new_*_mn2` constructor. A signature mismatch
//! and a too-short makernote both give `None`.
//!
//! Minimum sizes: 2 (entry count) + 12 (one entry) = 14 bytes for an IFD without
//! a next pointer, 18 with one.

use log::{debug, trace};

use crate::group::IfdId;
use crate::header::{
    Casio2MnHeader, FujiMnHeader, MnHeader, Nikon2MnHeader, Nikon3MnHeader, Olympus2MnHeader,
    OlympusMnHeader, PanasonicMnHeader, PentaxDngMnHeader, PentaxMnHeader, SamsungMnHeader,
    SigmaMnHeader, SonyMnHeader,
};
use crate::makernote::IfdMakernote;
use crate::tiff::{Endian, TiffHeader, TIFF_MAGIC};

/// IFD with one entry, without a next pointer.
pub const MIN_IFD_NO_NEXT: usize = 14;
/// IFD with one entry and a next pointer.
pub const MIN_IFD: usize = 18;

/// Tag of DNGPrivateData, where Pentax DNG files keep their makernote.
pub const TAG_DNG_PRIVATE_DATA: u16 = 0xc634;

/// Sniffs raw makernote data: (tag, group, mn_group, data, byte_order).
pub type NewMnFn = fn(u16, IfdId, IfdId, &[u8], Option<Endian>) -> Option<IfdMakernote>;
/// Builds a makernote for an already known variant: (tag, group, mn_group).
pub type NewMn2Fn = fn(u16, IfdId, IfdId) -> IfdMakernote;

const OLYMPUS2_PREFIX: &[u8] = b"OLYMPUS\x00II";
const NIKON_PREFIX: &[u8] = b"Nikon\x00";
const PENTAX_DNG_PREFIX: &[u8] = b"PENTAX \x00";
const PENTAX_PREFIX: &[u8] = b"AOC\x00";
const SONY_PREFIX: &[u8] = b"SONY DSC \x00\x00\x00";
const CASIO2_PREFIX: &[u8] = b"QVC\x00\x00\x00";

fn too_short(vendor: &str, size: usize, min: usize) -> bool {
    if size < min {
        trace!("{vendor} makernote too short: {size} < {min} bytes");
        return true;
    }
    false
}

/// Plain IFD makernote, no header.
pub fn new_ifd_mn(
    tag: u16,
    group: IfdId,
    mn_group: IfdId,
    data: &[u8],
    _byte_order: Option<Endian>,
) -> Option<IfdMakernote> {
    if too_short("IFD", data.len(), MIN_IFD_NO_NEXT) {
        return None;
    }
    Some(new_ifd_mn2(tag, group, mn_group))
}

pub fn new_ifd_mn2(tag: u16, group: IfdId, mn_group: IfdId) -> IfdMakernote {
    IfdMakernote::new(tag, group, mn_group, None, true)
}

pub fn new_olympus_mn(
    tag: u16,
    group: IfdId,
    _mn_group: IfdId,
    data: &[u8],
    _byte_order: Option<Endian>,
) -> Option<IfdMakernote> {
    if !data.starts_with(OLYMPUS2_PREFIX) {
        if too_short("Olympus", data.len(), OlympusMnHeader::size_of_signature() + MIN_IFD) {
            return None;
        }
        debug!("Olympus makernote, old style header");
        return Some(new_olympus_mn2(tag, group, IfdId::Olympus));
    }
    if too_short("Olympus2", data.len(), Olympus2MnHeader::size_of_signature() + MIN_IFD) {
        return None;
    }
    debug!("Olympus makernote, OLYMPUS\\0II header");
    Some(new_olympus2_mn2(tag, group, IfdId::Olympus2))
}

pub fn new_olympus_mn2(tag: u16, group: IfdId, mn_group: IfdId) -> IfdMakernote {
    IfdMakernote::new(tag, group, mn_group, Some(MnHeader::Olympus(OlympusMnHeader::default())), true)
}

pub fn new_olympus2_mn2(tag: u16, group: IfdId, mn_group: IfdId) -> IfdMakernote {
    IfdMakernote::new(tag, group, mn_group, Some(MnHeader::Olympus2(Olympus2MnHeader::default())), true)
}

pub fn new_fuji_mn(
    tag: u16,
    group: IfdId,
    mn_group: IfdId,
    data: &[u8],
    _byte_order: Option<Endian>,
) -> Option<IfdMakernote> {
    if too_short("Fuji", data.len(), FujiMnHeader::size_of_signature() + MIN_IFD) {
        return None;
    }
    Some(new_fuji_mn2(tag, group, mn_group))
}

pub fn new_fuji_mn2(tag: u16, group: IfdId, mn_group: IfdId) -> IfdMakernote {
    IfdMakernote::new(tag, group, mn_group, Some(MnHeader::Fuji(FujiMnHeader::default())), true)
}

/// Nikon has three layouts: a bare IFD (Nikon1), "Nikon\0" + version (Nikon2) and
/// "Nikon\0" + version + embedded TIFF header (Nikon3).
pub fn new_nikon_mn(
    tag: u16,
    group: IfdId,
    _mn_group: IfdId,
    data: &[u8],
    _byte_order: Option<Endian>,
) -> Option<IfdMakernote> {
    let size = data.len();
    if !data.starts_with(NIKON_PREFIX) {
        if too_short("Nikon1", size, MIN_IFD) {
            return None;
        }
        debug!("Nikon makernote without signature, assuming Nikon1");
        return Some(new_ifd_mn2(tag, group, IfdId::Nikon1));
    }
    let embedded = if size < Nikon3MnHeader::size_of_signature() {
        None
    } else {
        TiffHeader::read(&data[Nikon3MnHeader::TIFF_HEADER_OFFSET..])
    };
    match embedded {
        Some(th) if th.tag == TIFF_MAGIC => {
            if too_short("Nikon3", size, Nikon3MnHeader::size_of_signature() + MIN_IFD) {
                return None;
            }
            debug!("Nikon3 makernote, embedded TIFF header {:?}", th.byte_order);
            Some(new_nikon3_mn2(tag, group, IfdId::Nikon3))
        }
        _ => {
            if too_short("Nikon2", size, Nikon2MnHeader::size_of_signature() + MIN_IFD) {
                return None;
            }
            debug!("Nikon2 makernote, no embedded TIFF header");
            Some(new_nikon2_mn2(tag, group, IfdId::Nikon2))
        }
    }
}

pub fn new_nikon2_mn2(tag: u16, group: IfdId, mn_group: IfdId) -> IfdMakernote {
    IfdMakernote::new(tag, group, mn_group, Some(MnHeader::Nikon2(Nikon2MnHeader::default())), true)
}

pub fn new_nikon3_mn2(tag: u16, group: IfdId, mn_group: IfdId) -> IfdMakernote {
    IfdMakernote::new(tag, group, mn_group, Some(MnHeader::Nikon3(Nikon3MnHeader::default())), true)
}

pub fn new_panasonic_mn(
    tag: u16,
    group: IfdId,
    mn_group: IfdId,
    data: &[u8],
    _byte_order: Option<Endian>,
) -> Option<IfdMakernote> {
    if too_short("Panasonic", data.len(), PanasonicMnHeader::size_of_signature() + MIN_IFD_NO_NEXT) {
        return None;
    }
    Some(new_panasonic_mn2(tag, group, mn_group))
}

pub fn new_panasonic_mn2(tag: u16, group: IfdId, mn_group: IfdId) -> IfdMakernote {
    IfdMakernote::new(tag, group, mn_group, Some(MnHeader::Panasonic(PanasonicMnHeader::default())), false)
}

/// Pentax bodies write "AOC\0"; Pentax DNGs write "PENTAX \0". Anything else is not Pentax.
pub fn new_pentax_mn(
    tag: u16,
    group: IfdId,
    _mn_group: IfdId,
    data: &[u8],
    _byte_order: Option<Endian>,
) -> Option<IfdMakernote> {
    let size = data.len();
    if size > PENTAX_DNG_PREFIX.len() && data.starts_with(PENTAX_DNG_PREFIX) {
        if too_short("PentaxDng", size, PentaxDngMnHeader::size_of_signature() + MIN_IFD) {
            return None;
        }
        let mn_group = if tag == TAG_DNG_PRIVATE_DATA {
            IfdId::PentaxDng
        } else {
            IfdId::Pentax
        };
        debug!("Pentax DNG makernote in tag 0x{tag:04x}, group {mn_group}");
        return Some(new_pentax_dng_mn2(tag, group, mn_group));
    }
    if size > PENTAX_PREFIX.len() && data.starts_with(PENTAX_PREFIX) {
        if too_short("Pentax", size, PentaxMnHeader::size_of_signature() + MIN_IFD) {
            return None;
        }
        debug!("Pentax makernote");
        return Some(new_pentax_mn2(tag, group, IfdId::Pentax));
    }
    trace!("no Pentax signature");
    None
}

pub fn new_pentax_mn2(tag: u16, group: IfdId, mn_group: IfdId) -> IfdMakernote {
    IfdMakernote::new(tag, group, mn_group, Some(MnHeader::Pentax(PentaxMnHeader::default())), true)
}

pub fn new_pentax_dng_mn2(tag: u16, group: IfdId, mn_group: IfdId) -> IfdMakernote {
    IfdMakernote::new(tag, group, mn_group, Some(MnHeader::PentaxDng(PentaxDngMnHeader::default())), true)
}

pub fn new_samsung_mn(
    tag: u16,
    group: IfdId,
    mn_group: IfdId,
    data: &[u8],
    _byte_order: Option<Endian>,
) -> Option<IfdMakernote> {
    let size = data.len();
    if size > PENTAX_PREFIX.len() && data.starts_with(PENTAX_PREFIX) {
        // Samsung-branded Pentax body
        if too_short("Pentax", size, PentaxMnHeader::size_of_signature() + MIN_IFD) {
            return None;
        }
        debug!("Samsung makernote with Pentax signature");
        return Some(new_pentax_mn2(tag, group, IfdId::Pentax));
    }
    if too_short("Samsung", size, MIN_IFD) {
        return None;
    }
    Some(new_samsung_mn2(tag, group, mn_group))
}

pub fn new_samsung_mn2(tag: u16, group: IfdId, mn_group: IfdId) -> IfdMakernote {
    IfdMakernote::new(tag, group, mn_group, Some(MnHeader::Samsung(SamsungMnHeader)), true)
}

pub fn new_sigma_mn(
    tag: u16,
    group: IfdId,
    mn_group: IfdId,
    data: &[u8],
    _byte_order: Option<Endian>,
) -> Option<IfdMakernote> {
    if too_short("Sigma", data.len(), SigmaMnHeader::size_of_signature() + MIN_IFD) {
        return None;
    }
    Some(new_sigma_mn2(tag, group, mn_group))
}

pub fn new_sigma_mn2(tag: u16, group: IfdId, mn_group: IfdId) -> IfdMakernote {
    IfdMakernote::new(tag, group, mn_group, Some(MnHeader::Sigma(SigmaMnHeader::default())), true)
}

/// Without the "SONY DSC " signature the makernote is a plain IFD (Sony2).
pub fn new_sony_mn(
    tag: u16,
    group: IfdId,
    _mn_group: IfdId,
    data: &[u8],
    _byte_order: Option<Endian>,
) -> Option<IfdMakernote> {
    if !data.starts_with(SONY_PREFIX) {
        if too_short("Sony2", data.len(), MIN_IFD) {
            return None;
        }
        debug!("Sony makernote without signature, assuming Sony2");
        return Some(new_sony2_mn2(tag, group, IfdId::Sony2));
    }
    if too_short("Sony1", data.len(), SonyMnHeader::size_of_signature() + MIN_IFD_NO_NEXT) {
        return None;
    }
    debug!("Sony1 makernote");
    Some(new_sony1_mn2(tag, group, IfdId::Sony1))
}

pub fn new_sony1_mn2(tag: u16, group: IfdId, mn_group: IfdId) -> IfdMakernote {
    IfdMakernote::new(tag, group, mn_group, Some(MnHeader::Sony(SonyMnHeader::default())), false)
}

pub fn new_sony2_mn2(tag: u16, group: IfdId, mn_group: IfdId) -> IfdMakernote {
    IfdMakernote::new(tag, group, mn_group, None, true)
}

/// "QVC\0\0\0" marks a type 2 Casio makernote; otherwise it is a plain IFD.
pub fn new_casio_mn(
    tag: u16,
    group: IfdId,
    _mn_group: IfdId,
    data: &[u8],
    _byte_order: Option<Endian>,
) -> Option<IfdMakernote> {
    if data.len() > CASIO2_PREFIX.len() && data.starts_with(CASIO2_PREFIX) {
        debug!("Casio2 makernote");
        return Some(new_casio2_mn2(tag, group, IfdId::Casio2));
    }
    if too_short("Casio", data.len(), MIN_IFD_NO_NEXT) {
        return None;
    }
    Some(new_ifd_mn2(tag, group, IfdId::Casio))
}

pub fn new_casio2_mn2(tag: u16, group: IfdId, mn_group: IfdId) -> IfdMakernote {
    IfdMakernote::new(tag, group, mn_group, Some(MnHeader::Casio2(Casio2MnHeader::default())), true)
}

//! Makernote registry: camera make / makernote group to constructor.
//!
//! Rows are matched in declaration order; the first hit wins. Rows without a make
//! prefix are only reachable by group.

use log::{debug, trace};

use crate::group::IfdId;
use crate::makernote::IfdMakernote;
use crate::sniff::*;
use crate::tiff::Endian;

/// One registry row.
#[derive(Debug, Clone, Copy)]
pub struct MnRegistry {
    /// Prefix of the Exif.Image.Make value; `None` for group-only rows.
    pub make: Option<&'static str>,
    pub mn_group: IfdId,
    pub new_mn: Option<NewMnFn>,
    pub new_mn2: Option<NewMn2Fn>,
}

impl MnRegistry {
    const fn by_make(make: &'static str, mn_group: IfdId, new_mn: NewMnFn, new_mn2: Option<NewMn2Fn>) -> Self {
        Self {
            make: Some(make),
            mn_group,
            new_mn: Some(new_mn),
            new_mn2,
        }
    }

    const fn by_group(mn_group: IfdId, new_mn2: NewMn2Fn) -> Self {
        Self {
            make: None,
            mn_group,
            new_mn: None,
            new_mn2: Some(new_mn2),
        }
    }

    /// Case-sensitive prefix match on the camera make.
    pub fn matches_make(&self, make: &str) -> bool {
        self.make.is_some_and(|prefix| make.starts_with(prefix))
    }

    pub fn matches_group(&self, mn_group: IfdId) -> bool {
        self.mn_group == mn_group
    }
}

/// Rows with `IfdId::NotSet` sniff the variant from the data and have no group constructor.
pub const REGISTRY: &[MnRegistry] = &[
    MnRegistry::by_make("Canon", IfdId::Canon, new_ifd_mn, Some(new_ifd_mn2)),
    MnRegistry::by_make("FOVEON", IfdId::Sigma, new_sigma_mn, Some(new_sigma_mn2)),
    MnRegistry::by_make("FUJI", IfdId::Fuji, new_fuji_mn, Some(new_fuji_mn2)),
    MnRegistry::by_make("KONICA MINOLTA", IfdId::Minolta, new_ifd_mn, Some(new_ifd_mn2)),
    MnRegistry::by_make("Minolta", IfdId::Minolta, new_ifd_mn, Some(new_ifd_mn2)),
    MnRegistry::by_make("NIKON", IfdId::NotSet, new_nikon_mn, None),
    MnRegistry::by_make("OLYMPUS", IfdId::NotSet, new_olympus_mn, None),
    MnRegistry::by_make("Panasonic", IfdId::Panasonic, new_panasonic_mn, Some(new_panasonic_mn2)),
    MnRegistry::by_make("PENTAX", IfdId::NotSet, new_pentax_mn, None),
    MnRegistry::by_make("RICOH", IfdId::NotSet, new_pentax_mn, None),
    MnRegistry::by_make("SAMSUNG", IfdId::Samsung2, new_samsung_mn, Some(new_samsung_mn2)),
    MnRegistry::by_make("SIGMA", IfdId::Sigma, new_sigma_mn, Some(new_sigma_mn2)),
    MnRegistry::by_make("SONY", IfdId::NotSet, new_sony_mn, None),
    MnRegistry::by_make("CASIO", IfdId::NotSet, new_casio_mn, None),
    MnRegistry::by_group(IfdId::Nikon1, new_ifd_mn2),
    MnRegistry::by_group(IfdId::Nikon2, new_nikon2_mn2),
    MnRegistry::by_group(IfdId::Nikon3, new_nikon3_mn2),
    MnRegistry::by_group(IfdId::Sony1, new_sony1_mn2),
    MnRegistry::by_group(IfdId::Sony2, new_sony2_mn2),
    MnRegistry::by_group(IfdId::Olympus, new_olympus_mn2),
    MnRegistry::by_group(IfdId::Olympus2, new_olympus2_mn2),
    MnRegistry::by_group(IfdId::Pentax, new_pentax_mn2),
    MnRegistry::by_group(IfdId::PentaxDng, new_pentax_dng_mn2),
    MnRegistry::by_group(IfdId::Casio, new_ifd_mn2),
    MnRegistry::by_group(IfdId::Casio2, new_casio2_mn2),
];

/// First registry row whose make prefix matches `make`.
pub fn find_by_make(make: &str) -> Option<&'static MnRegistry> {
    REGISTRY.iter().find(|r| r.matches_make(make))
}

/// First registry row for `mn_group` that can build a makernote from the group alone.
pub fn find_by_group(mn_group: IfdId) -> Option<&'static MnRegistry> {
    REGISTRY
        .iter()
        .find(|r| r.matches_group(mn_group) && r.new_mn2.is_some())
}

/// Sniff a makernote for the camera `make` from its raw `data`.
///
/// `None` means no vendor handling applies (unknown make, unrecognised signature or
/// data too short); the caller keeps the bytes uninterpreted.
pub fn create_by_make(
    tag: u16,
    group: IfdId,
    make: &str,
    data: &[u8],
    byte_order: Option<Endian>,
) -> Option<IfdMakernote> {
    let Some(row) = find_by_make(make) else {
        trace!("no makernote handler for make {make:?}");
        return None;
    };
    debug_assert!(row.new_mn.is_some(), "make row without sniffer");
    let mn = (row.new_mn?)(tag, group, row.mn_group, data, byte_order);
    match &mn {
        Some(mn) => debug!("{make:?}: makernote group {}", mn.mn_group()),
        None => debug!("{make:?}: makernote not recognised ({} bytes)", data.len()),
    }
    mn
}

/// Rebuild a makernote whose variant is already known from its group.
pub fn create_by_group(tag: u16, group: IfdId, mn_group: IfdId) -> Option<IfdMakernote> {
    let row = find_by_group(mn_group)?;
    let new_mn2 = row.new_mn2?;
    Some(new_mn2(tag, group, mn_group))
}

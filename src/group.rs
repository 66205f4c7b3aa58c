//! Group identifiers for the directories a makernote can hang off or decode into.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Closed set of directory groups known to the makernote layer.
///
/// The vendor groups double as the persisted "which variant was sniffed" marker:
/// once a makernote has been built from raw bytes, its group is enough to rebuild
/// it with [`crate::create_by_group`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum IfdId {
    /// No group assigned; registry rows for makes whose variant is sniffed from the data.
    NotSet,
    Ifd0,
    Exif,
    Canon,
    Casio,
    Casio2,
    Fuji,
    Minolta,
    Nikon1,
    Nikon2,
    Nikon3,
    Olympus,
    Olympus2,
    Panasonic,
    Pentax,
    PentaxDng,
    Samsung2,
    Sigma,
    Sony1,
    Sony2,
}

impl IfdId {
    /// Short group name as used in metadata keys (e.g. "Nikon3").
    pub fn name(self) -> &'static str {
        match self {
            IfdId::NotSet => "(not set)",
            IfdId::Ifd0 => "Image",
            IfdId::Exif => "Photo",
            IfdId::Canon => "Canon",
            IfdId::Casio => "Casio",
            IfdId::Casio2 => "Casio2",
            IfdId::Fuji => "Fujifilm",
            IfdId::Minolta => "Minolta",
            IfdId::Nikon1 => "Nikon1",
            IfdId::Nikon2 => "Nikon2",
            IfdId::Nikon3 => "Nikon3",
            IfdId::Olympus => "Olympus",
            IfdId::Olympus2 => "Olympus2",
            IfdId::Panasonic => "Panasonic",
            IfdId::Pentax => "Pentax",
            IfdId::PentaxDng => "PentaxDng",
            IfdId::Samsung2 => "Samsung2",
            IfdId::Sigma => "Sigma",
            IfdId::Sony1 => "Sony1",
            IfdId::Sony2 => "Sony2",
        }
    }
}

impl std::fmt::Display for IfdId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

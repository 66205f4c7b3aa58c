//! Makernote header codec tests.

use makernote::header::{
    Casio2MnHeader, FujiMnHeader, MnHeader, Nikon2MnHeader, Nikon3MnHeader, Olympus2MnHeader,
    OlympusMnHeader, PanasonicMnHeader, PentaxDngMnHeader, PentaxMnHeader, SamsungMnHeader,
    SigmaMnHeader, SonyMnHeader,
};
use makernote::{Endian, MnHeaderCodec};

const MN_OFFSET: usize = 0x1234;

/// (header, canonical signature, size, ifd_offset, base_offset for MN_OFFSET, fixed byte order)
fn canonical() -> Vec<(MnHeader, &'static [u8], usize, usize, usize, Option<Endian>)> {
    vec![
        (MnHeader::Olympus(OlympusMnHeader::default()), &OlympusMnHeader::SIGNATURE[..], 8, 8, 0, None),
        (MnHeader::Olympus2(Olympus2MnHeader::default()), &Olympus2MnHeader::SIGNATURE[..], 12, 12, MN_OFFSET, None),
        (MnHeader::Fuji(FujiMnHeader::default()), &FujiMnHeader::SIGNATURE[..], 12, 12, MN_OFFSET, Some(Endian::Little)),
        (MnHeader::Nikon2(Nikon2MnHeader::default()), &Nikon2MnHeader::SIGNATURE[..], 8, 8, 0, None),
        (MnHeader::Panasonic(PanasonicMnHeader::default()), &PanasonicMnHeader::SIGNATURE[..], 12, 12, 0, None),
        (MnHeader::Pentax(PentaxMnHeader::default()), &PentaxMnHeader::SIGNATURE[..], 6, 6, 0, None),
        (MnHeader::PentaxDng(PentaxDngMnHeader::default()), &PentaxDngMnHeader::SIGNATURE[..], 10, 10, MN_OFFSET, None),
        (MnHeader::Sigma(SigmaMnHeader::default()), &SigmaMnHeader::SIGNATURE[..], 10, 10, 0, None),
        (MnHeader::Sony(SonyMnHeader::default()), &SonyMnHeader::SIGNATURE[..], 12, 12, 0, None),
        (MnHeader::Casio2(Casio2MnHeader::default()), &Casio2MnHeader::SIGNATURE[..], 6, 6, 0, Some(Endian::Big)),
    ]
}

#[test]
fn canonical_signatures_read_back() {
    for (mut h, sig, size, ifd_offset, base_offset, bo) in canonical() {
        let name = h.name();
        assert!(h.read(sig, None), "{name}: canonical signature rejected");
        assert_eq!(h.size(), size, "{name}: size");
        assert_eq!(h.ifd_offset(), ifd_offset, "{name}: ifd_offset");
        assert_eq!(h.base_offset(MN_OFFSET), base_offset, "{name}: base_offset");
        assert_eq!(h.byte_order(), bo, "{name}: byte order");
    }
}

#[test]
fn default_state_matches_canonical_read() {
    for (h, sig, ..) in canonical() {
        let mut read = h.clone();
        assert!(read.read(sig, None));
        assert_eq!(read, h, "{}: default differs from self-read", h.name());
    }
}

#[test]
fn truncated_signature_rejected() {
    for (mut h, sig, ..) in canonical() {
        let name = h.name();
        assert!(!h.read(&sig[..sig.len() - 1], None), "{name}: accepted short input");
        assert!(!h.read(&[], None), "{name}: accepted empty input");
    }
}

#[test]
fn write_emits_stored_signature() {
    for (h, sig, ..) in canonical() {
        let mut out = Vec::new();
        let n = h.write(&mut out, Endian::Big).unwrap();
        assert_eq!(n, sig.len(), "{}", h.name());
        assert_eq!(out, sig, "{}", h.name());
    }
}

#[test]
fn olympus_checks_only_six_bytes() {
    let mut h = OlympusMnHeader::default();
    assert!(h.read(b"OLYMP\x00\x02\x00rest", None));
    assert!(!h.read(b"OLYMQ\x00\x01\x00rest", None));
    // The canonical signature is written back, not the bytes read.
    let mut out = Vec::new();
    h.write(&mut out, Endian::Little).unwrap();
    assert_eq!(out, OlympusMnHeader::SIGNATURE);
}

#[test]
fn olympus2_checks_ten_bytes() {
    let mut h = Olympus2MnHeader::default();
    assert!(h.read(b"OLYMPUS\x00II\x04\x00", None));
    assert!(!h.read(b"OLYMPUS\x00MM\x03\x00", None));
}

#[test]
fn pentax_tolerances() {
    let mut p = PentaxMnHeader::default();
    assert!(p.read(b"AOCxII", None));
    assert!(!p.read(b"AOD\x00MM", None));

    let mut d = PentaxDngMnHeader::default();
    assert!(d.read(b"PENTAX \x01II", None));
    assert!(!d.read(b"PENTAXX\x00MM", None));
}

#[test]
fn panasonic_checks_nine_bytes() {
    let mut h = PanasonicMnHeader::default();
    assert!(h.read(b"Panasonic\x01\x02\x03", None));
    assert!(!h.read(b"Panasoni\x00\x00\x00\x00", None));
}

#[test]
fn fuji_offset_from_header() {
    let mut h = FujiMnHeader::default();
    assert!(h.read(b"FUJIFILM\x10\x00\x00\x00", Some(Endian::Big)));
    assert_eq!(h.ifd_offset(), 16);
    assert_eq!(h.byte_order(), Some(Endian::Little));
    assert!(!h.read(b"FUJIFILX\x0c\x00\x00\x00", None));
    // Failed read leaves the previous state alone.
    assert_eq!(h.ifd_offset(), 16);
}

#[test]
fn sigma_accepts_both_signatures() {
    let mut h = SigmaMnHeader::default();
    assert!(h.read(&SigmaMnHeader::SIGNATURE_FOVEON, None));
    assert!(h.read(b"SIGMA\x00\x00\x00\x02\x00", None));
    assert!(!h.read(b"SIGMB\x00\x00\x00\x01\x00", None));
    let mut out = Vec::new();
    h.write(&mut out, Endian::Little).unwrap();
    assert_eq!(out, SigmaMnHeader::SIGNATURE);
}

#[test]
fn sony_and_casio_need_full_signature() {
    let mut s = SonyMnHeader::default();
    assert!(!s.read(b"SONY DSC \x00\x00\x01", None));
    let mut c = Casio2MnHeader::default();
    assert!(!c.read(b"QVC\x00\x00\x01", None));
}

#[test]
fn samsung_has_no_signature() {
    let mut h = SamsungMnHeader;
    assert!(h.read(&[], None));
    assert_eq!(h.size(), 0);
    assert_eq!(h.ifd_offset(), 0);
    assert_eq!(h.base_offset(MN_OFFSET), MN_OFFSET);
    let mut out = Vec::new();
    assert_eq!(h.write(&mut out, Endian::Little).unwrap(), 0);
    assert!(out.is_empty());
}

#[test]
fn nikon2_checks_nikon_prefix() {
    let mut h = Nikon2MnHeader::default();
    assert!(h.read(b"Nikon\x00\x02\x00", None));
    assert_eq!(h.ifd_offset(), 8);
    assert!(!h.read(b"Nikox\x00\x01\x00", None));
}

#[test]
fn nikon3_reads_embedded_tiff_header() {
    let mut h = Nikon3MnHeader::default();
    assert_eq!(h.byte_order(), None);
    assert_eq!(h.ifd_offset(), 18);

    let data = b"Nikon\x00\x02\x10\x00\x00II\x2a\x00\x0c\x00\x00\x00";
    assert!(h.read(data, None));
    assert_eq!(h.byte_order(), Some(Endian::Little));
    assert_eq!(h.ifd_offset(), 10 + 12);
    assert_eq!(h.size(), 18);
    assert_eq!(h.base_offset(MN_OFFSET), MN_OFFSET + 10);
}

#[test]
fn nikon3_rejects_bad_embedded_header() {
    let mut h = Nikon3MnHeader::default();
    assert!(!h.read(b"Nikon\x00\x02\x10\x00\x00XX\x2a\x00\x08\x00\x00\x00", None));
    assert!(!h.read(b"Nikon\x00\x02\x10\x00\x00II\x2b\x00\x08\x00\x00\x00", None));
    assert_eq!(h.byte_order(), None);
}

#[test]
fn nikon3_writes_target_byte_order() {
    let mut h = Nikon3MnHeader::default();
    assert!(h.read(b"Nikon\x00\x02\x11\x00\x00II\x2a\x00\x08\x00\x00\x00", None));

    let mut out = Vec::new();
    let n = h.write(&mut out, Endian::Big).unwrap();
    assert_eq!(n, 18);
    assert_eq!(&out[..10], b"Nikon\x00\x02\x11\x00\x00");
    assert_eq!(&out[10..], b"MM\x00\x2a\x00\x00\x00\x08");
}

#[test]
fn nikon3_byte_order_can_be_overridden() {
    let mut h = MnHeader::Nikon3(Nikon3MnHeader::default());
    h.set_byte_order(Endian::Big);
    assert_eq!(h.byte_order(), Some(Endian::Big));

    // Headers with a fixed byte order ignore the override.
    let mut f = MnHeader::Fuji(FujiMnHeader::default());
    f.set_byte_order(Endian::Big);
    assert_eq!(f.byte_order(), Some(Endian::Little));
}

//! Vendor sniffer tests: signature choice and minimum sizes.

use makernote::sniff::{
    new_casio_mn, new_fuji_mn, new_ifd_mn, new_nikon_mn, new_olympus_mn, new_panasonic_mn,
    new_pentax_mn, new_samsung_mn, new_sigma_mn, new_sony_mn, NewMnFn, TAG_DNG_PRIVATE_DATA,
};
use makernote::{Endian, IfdId, IfdMakernote};

const TAG_MAKER_NOTE: u16 = 0x927c;

/// `prefix` padded with zeros to `size` bytes.
fn padded(prefix: &[u8], size: usize) -> Vec<u8> {
    let mut v = prefix.to_vec();
    v.resize(size, 0);
    v
}

fn sniff(f: NewMnFn, mn_group: IfdId, data: &[u8]) -> Option<IfdMakernote> {
    f(TAG_MAKER_NOTE, IfdId::Exif, mn_group, data, Some(Endian::Little))
}

type Case = (NewMnFn, IfdId, &'static [u8], usize, IfdId);

/// (sniffer, registry group, signature, minimum size, expected makernote group)
fn case(f: NewMnFn, mn_group: IfdId, sig: &'static [u8], min: usize, expected: IfdId) -> Case {
    (f, mn_group, sig, min, expected)
}

fn cases() -> Vec<Case> {
    vec![
        case(new_olympus_mn, IfdId::NotSet, b"OLYMP\x00\x01\x00", 26, IfdId::Olympus),
        case(new_olympus_mn, IfdId::NotSet, b"OLYMPUS\x00II\x03\x00", 30, IfdId::Olympus2),
        case(new_fuji_mn, IfdId::Fuji, b"FUJIFILM\x0c\x00\x00\x00", 30, IfdId::Fuji),
        case(new_nikon_mn, IfdId::NotSet, b"", 18, IfdId::Nikon1),
        case(new_nikon_mn, IfdId::NotSet, b"Nikon\x00\x01\x00", 26, IfdId::Nikon2),
        case(new_nikon_mn, IfdId::NotSet, b"Nikon\x00\x02\x10\x00\x00MM\x00\x2a\x00\x00\x00\x08", 36, IfdId::Nikon3),
        case(new_panasonic_mn, IfdId::Panasonic, b"Panasonic\x00\x00\x00", 26, IfdId::Panasonic),
        case(new_pentax_mn, IfdId::NotSet, b"PENTAX \x00MM", 28, IfdId::Pentax),
        case(new_pentax_mn, IfdId::NotSet, b"AOC\x00MM", 24, IfdId::Pentax),
        case(new_samsung_mn, IfdId::Samsung2, b"AOC\x00II", 24, IfdId::Pentax),
        case(new_samsung_mn, IfdId::Samsung2, b"", 18, IfdId::Samsung2),
        case(new_sigma_mn, IfdId::Sigma, b"SIGMA\x00\x00\x00\x01\x00", 28, IfdId::Sigma),
        case(new_sony_mn, IfdId::NotSet, b"SONY DSC \x00\x00\x00", 26, IfdId::Sony1),
        case(new_sony_mn, IfdId::NotSet, b"", 18, IfdId::Sony2),
        case(new_casio_mn, IfdId::NotSet, b"", 14, IfdId::Casio),
        case(new_ifd_mn, IfdId::Canon, b"", 14, IfdId::Canon),
    ]
}

#[test]
fn minimum_size_boundary() {
    for (f, mn_group, sig, min, expected) in cases() {
        assert!(
            sniff(f, mn_group, &padded(sig, min - 1)).is_none(),
            "{expected}: matched with {} bytes",
            min - 1
        );
        let mn = sniff(f, mn_group, &padded(sig, min))
            .unwrap_or_else(|| panic!("{expected}: no match with {min} bytes"));
        assert_eq!(mn.mn_group(), expected);
        assert_eq!(mn.tag(), TAG_MAKER_NOTE);
        assert_eq!(mn.group(), IfdId::Exif);
    }
}

#[test]
fn sniffed_header_reads_its_own_data() {
    for (f, mn_group, sig, min, expected) in cases() {
        let data = padded(sig, min);
        let mut mn = sniff(f, mn_group, &data).unwrap();
        assert!(mn.read_header(&data, None), "{expected}: header rejected sniffed data");
        assert_eq!(mn.size_of_header(), sig.len(), "{expected}: header size");
    }
}

#[test]
fn nikon1_without_signature() {
    let mn = sniff(new_nikon_mn, IfdId::NotSet, &padded(b"\x00\x01", 18)).unwrap();
    assert_eq!(mn.mn_group(), IfdId::Nikon1);
    assert!(mn.header().is_none());
    assert!(sniff(new_nikon_mn, IfdId::NotSet, &[]).is_none());
}

#[test]
fn nikon_invalid_embedded_header_falls_back_to_nikon2() {
    // "Nikon\0" + version + garbage where the TIFF header would be
    let data = padded(b"Nikon\x00\x02\x10\x00\x00XX\x00\x2a\x00\x00\x00\x08", 36);
    let mn = sniff(new_nikon_mn, IfdId::NotSet, &data).unwrap();
    assert_eq!(mn.mn_group(), IfdId::Nikon2);

    // Valid byte order mark but wrong magic
    let data = padded(b"Nikon\x00\x02\x10\x00\x00II\x2b\x00\x08\x00\x00\x00", 36);
    let mn = sniff(new_nikon_mn, IfdId::NotSet, &data).unwrap();
    assert_eq!(mn.mn_group(), IfdId::Nikon2);
}

#[test]
fn nikon3_short_of_minimum_is_not_demoted() {
    // A valid Nikon3 header that is too short gives nothing, not Nikon2.
    let data = padded(b"Nikon\x00\x02\x10\x00\x00II\x2a\x00\x08\x00\x00\x00", 30);
    assert!(sniff(new_nikon_mn, IfdId::NotSet, &data).is_none());
}

#[test]
fn nikon3_sub_structure() {
    let data = padded(b"Nikon\x00\x02\x10\x00\x00II\x2a\x00\x08\x00\x00\x00", 40);
    let mut mn = sniff(new_nikon_mn, IfdId::NotSet, &data).unwrap();
    assert!(mn.read_header(&data, None));
    assert_eq!(mn.byte_order(), Some(Endian::Little));
    assert_eq!(mn.ifd_offset(), 18);
    assert_eq!(mn.base_offset(100), 110);
    assert!(mn.has_next());
}

#[test]
fn pentax_dng_group_depends_on_tag() {
    let data = padded(b"PENTAX \x00II", 28);
    let mn = new_pentax_mn(TAG_DNG_PRIVATE_DATA, IfdId::Ifd0, IfdId::NotSet, &data, None).unwrap();
    assert_eq!(mn.mn_group(), IfdId::PentaxDng);
    let mn = new_pentax_mn(TAG_MAKER_NOTE, IfdId::Exif, IfdId::NotSet, &data, None).unwrap();
    assert_eq!(mn.mn_group(), IfdId::Pentax);
    assert_eq!(mn.base_offset(64), 64);
}

#[test]
fn pentax_requires_a_signature() {
    assert!(sniff(new_pentax_mn, IfdId::NotSet, &padded(b"XYZ", 64)).is_none());
}

#[test]
fn panasonic_and_sony1_have_no_next_pointer() {
    let mn = sniff(new_panasonic_mn, IfdId::Panasonic, &padded(b"Panasonic", 26)).unwrap();
    assert!(!mn.has_next());
    let mn = sniff(new_sony_mn, IfdId::NotSet, &padded(b"SONY DSC \x00\x00\x00", 26)).unwrap();
    assert!(!mn.has_next());
    let mn = sniff(new_sony_mn, IfdId::NotSet, &padded(b"", 18)).unwrap();
    assert!(mn.has_next());
}

#[test]
fn casio2_needs_only_the_signature() {
    let mn = sniff(new_casio_mn, IfdId::NotSet, b"QVC\x00\x00\x00\x00").unwrap();
    assert_eq!(mn.mn_group(), IfdId::Casio2);
    assert_eq!(mn.byte_order(), Some(Endian::Big));
    // Exactly the signature and nothing after it is too short for either variant.
    assert!(sniff(new_casio_mn, IfdId::NotSet, b"QVC\x00\x00\x00").is_none());
}

#[test]
fn samsung_offsets_relative_to_makernote() {
    let mn = sniff(new_samsung_mn, IfdId::Samsung2, &padded(b"\x01\x00", 18)).unwrap();
    assert_eq!(mn.size_of_header(), 0);
    assert_eq!(mn.base_offset(500), 500);
}

#[test]
fn headerless_makernote_inherits_image_byte_order() {
    let mut mn = sniff(new_sony_mn, IfdId::NotSet, &padded(b"", 18)).unwrap();
    assert_eq!(mn.byte_order(), None);
    mn.set_image_byte_order(Endian::Big);
    assert_eq!(mn.byte_order(), Some(Endian::Big));

    // A fixed header byte order wins over the image's.
    let mut fuji = sniff(new_fuji_mn, IfdId::Fuji, &padded(b"FUJIFILM\x0c", 30)).unwrap();
    fuji.set_image_byte_order(Endian::Big);
    assert_eq!(fuji.byte_order(), Some(Endian::Little));
}

//! Decoding whole synthetic DICOM files.

use dcm_core::header::Header;
use dcm_parser::access::{get_tag, tag_as_string, trim};
use dcm_parser::{
    decode_source, open_file, ByteSource, DecodeOptions, Error, Stop, Tag, TransferSyntax, VR,
};
use std::io::Write;

/// Encode an explicit VR little endian element.
fn explicit(group: u16, element: u16, vr: &[u8; 2], value: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&group.to_le_bytes());
    out.extend_from_slice(&element.to_le_bytes());
    out.extend_from_slice(vr);
    if matches!(vr, b"OB" | b"OW" | b"SQ" | b"UN" | b"UT") {
        out.extend_from_slice(&[0, 0]);
        out.extend_from_slice(&(value.len() as u32).to_le_bytes());
    } else {
        out.extend_from_slice(&(value.len() as u16).to_le_bytes());
    }
    out.extend_from_slice(value);
    out
}

/// Encode an implicit VR little endian element header and value.
fn implicit(group: u16, element: u16, len: u32, value: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&group.to_le_bytes());
    out.extend_from_slice(&element.to_le_bytes());
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(value);
    out
}

fn preamble_and_meta(transfer_syntax: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; 128];
    out.extend_from_slice(b"DICM");
    out.extend(explicit(0x0002, 0x0000, b"UL", &[0, 0, 0, 0]));
    out.extend(explicit(0x0002, 0x0003, b"UI", b"1.2\0"));
    out.extend(explicit(0x0002, 0x0010, b"UI", transfer_syntax));
    out
}

/// The smallest file: meta group, then a Study Instance UID.
fn minimal_file() -> Vec<u8> {
    let mut out = preamble_and_meta(b"1.2.840.10008.1.2.1\0");
    out.extend(explicit(0x0020, 0x000D, b"UI", b"9.9\0"));
    out
}

/// An implicit VR file with a nested sequence and pixel data.
fn implicit_file() -> Vec<u8> {
    let mut out = preamble_and_meta(b"1.2.840.10008.1.2\0");
    out.extend(implicit(0x0008, 0x0018, 4, b"5.6\0"));
    // Referenced Image Sequence, undefined length
    out.extend(implicit(0x0008, 0x1140, 0xFFFF_FFFF, &[]));
    out.extend(implicit(0xFFFE, 0xE000, 0xFFFF_FFFF, &[]));
    out.extend(implicit(0x0008, 0x1155, 4, b"7.8\0"));
    // Source Image Sequence inside of the item, defined length
    let inner_item = implicit(0x0008, 0x1150, 4, b"1.1\0");
    let mut inner_seq = implicit(0xFFFE, 0xE000, inner_item.len() as u32, &inner_item);
    inner_seq = implicit(0x0008, 0x2112, inner_seq.len() as u32, &inner_seq);
    out.extend(inner_seq);
    out.extend(implicit(0xFFFE, 0xE00D, 0, &[]));
    out.extend(implicit(0xFFFE, 0xE0DD, 0, &[]));
    out.extend(implicit(0x0020, 0x000D, 4, b"9.9\0"));
    out.extend(implicit(0x0020, 0x000E, 6, b"9.9.1\0"));
    out.extend(implicit(0x0028, 0x0010, 2, &[2, 0]));
    out.extend(implicit(0x0028, 0x0011, 2, &[2, 0]));
    out.extend(implicit(0x7FE0, 0x0010, 4, &[10, 20, 30, 40]));
    out
}

#[test]
fn minimal_explicit_file() {
    let data = minimal_file();
    let decoded = decode_source(ByteSource::new(&data), DecodeOptions::default()).unwrap();

    assert_eq!(decoded.meta.media_storage_sop_instance_uid, "1.2");
    assert_eq!(
        decoded.meta.transfer_syntax,
        TransferSyntax::ExplicitLittleEndian
    );
    assert_eq!(decoded.meta.group_length, Some(0));

    let study = decoded
        .dataset
        .get(Tag(0x0020, 0x000D))
        .expect("Study Instance UID should be present");
    assert_eq!(study.vr(), VR::UI);
    assert_eq!(trim(&tag_as_string(study)), "9.9");
    assert_eq!(decoded.dataset.len(), 1);
    assert_eq!(
        decoded.dataset.stop(),
        &Stop::EndOfData { offset: data.len() }
    );
    decoded.dataset.ensure_complete().unwrap();
}

#[test]
fn implicit_file_with_sequences() {
    let data = implicit_file();
    let decoded = decode_source(ByteSource::new(&data), DecodeOptions::default()).unwrap();
    assert_eq!(decoded.meta.transfer_syntax, TransferSyntax::Implicit);

    let tags: Vec<(Tag, u32)> = decoded
        .dataset
        .iter()
        .map(|e| (e.tag(), e.depth()))
        .collect();
    assert_eq!(
        tags,
        vec![
            (Tag(0x0008, 0x0018), 0),
            (Tag(0x0008, 0x1155), 1),
            (Tag(0x0008, 0x1150), 2),
            (Tag(0x0020, 0x000D), 0),
            (Tag(0x0020, 0x000E), 0),
            (Tag(0x0028, 0x0010), 0),
            (Tag(0x0028, 0x0011), 0),
        ]
    );

    let tags = decoded.dataset.tags();
    assert_eq!(
        get_tag(tags, 0x0020_000E_u32).map(|e| trim(&tag_as_string(e)).to_string()),
        Some("9.9.1".to_string())
    );
    assert_eq!(
        get_tag(tags, Tag(0x0028, 0x0010)).map(|e| tag_as_string(e).into_owned()),
        Some("2".to_string())
    );

    let pixel_data = decoded
        .dataset
        .boundary_element()
        .expect("decoding should stop at pixel data");
    assert_eq!(pixel_data.tag(), Tag::PIXEL_DATA);
    assert_eq!(pixel_data.vr(), VR::OW);
    assert_eq!(pixel_data.data(), &[10, 20, 30, 40]);
}

#[test]
fn implicit_defined_length_sequence_without_delimiters() {
    let mut data = preamble_and_meta(b"1.2.840.10008.1.2\0");
    // Referenced SOP Sequence, defined length items
    let item = implicit(0x0008, 0x1155, 6, b"1.2.3\0");
    let items = implicit(0xFFFE, 0xE000, item.len() as u32, &item);
    data.extend(implicit(0x0008, 0x1199, items.len() as u32, &items));
    // Acquisition Context Sequence, empty
    data.extend(implicit(0x0040, 0x0555, 0, &[]));
    data.extend(implicit(0x0020, 0x000D, 4, b"9.9\0"));

    let decoded = decode_source(ByteSource::new(&data), DecodeOptions::default()).unwrap();
    let tags: Vec<(Tag, VR, u32)> = decoded
        .dataset
        .iter()
        .map(|e| (e.tag(), e.vr(), e.depth()))
        .collect();
    assert_eq!(
        tags,
        vec![
            (Tag(0x0008, 0x1155), VR::UI, 1),
            (Tag(0x0020, 0x000D), VR::UI, 0),
        ]
    );
    assert_eq!(
        get_tag(decoded.dataset.tags(), Tag(0x0008, 0x1155))
            .map(|e| trim(&tag_as_string(e)).to_string()),
        Some("1.2.3".to_string())
    );
    assert!(decoded.dataset.get(Tag(0x0008, 0x1155)).is_none());
}

#[test]
fn raising_the_stop_group_reads_pixel_data() {
    let data = implicit_file();
    let options = DecodeOptions::new().stop_group(0xFFFF);
    let decoded = decode_source(ByteSource::new(&data), options).unwrap();
    let last = decoded.dataset.tags().last().unwrap();
    assert_eq!(last.tag(), Tag::PIXEL_DATA);
    assert!(decoded.dataset.boundary_element().is_none());
}

#[test]
fn capacity_truncates() {
    let data = implicit_file();
    let options = DecodeOptions::new().max_tags(3);
    let decoded = decode_source(ByteSource::new(&data), options).unwrap();
    assert_eq!(decoded.dataset.len(), 3);
    assert!(decoded.dataset.is_truncated());
    assert!(matches!(
        decoded.dataset.ensure_complete(),
        Err(Error::CapacityExceeded { capacity: 3, .. })
    ));
}

#[test]
fn big_endian_is_unsupported() {
    let mut data = preamble_and_meta(b"1.2.840.10008.1.2.2\0");
    data.extend(explicit(0x0020, 0x000D, b"UI", b"9.9\0"));
    match decode_source(ByteSource::new(&data), DecodeOptions::default()) {
        Err(Error::UnsupportedTransferSyntax { uid, .. }) => {
            assert_eq!(uid, "1.2.840.10008.1.2.2")
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn not_dicom() {
    let data = b"just some text, definitely not an image".to_vec();
    assert!(matches!(
        decode_source(ByteSource::new(&data), DecodeOptions::default()),
        Err(Error::NotDicom { .. })
    ));
}

#[test]
fn headerless_implicit_data_set() {
    let mut data = implicit(0x0008, 0x0060, 2, b"CT");
    data.extend(implicit(0x0008, 0x0070, 4, b"ACME"));
    let decoded = decode_source(ByteSource::new(&data), DecodeOptions::default()).unwrap();
    assert_eq!(decoded.meta.transfer_syntax, TransferSyntax::Implicit);
    assert_eq!(decoded.dataset.len(), 2);
    assert_eq!(decoded.dataset.tags()[0].vr(), VR::CS);
    assert_eq!(decoded.dataset.tags()[1].vr(), VR::LO);
}

#[test]
fn deep_nesting_is_rejected() {
    let mut data = preamble_and_meta(b"1.2.840.10008.1.2\0");
    for _ in 0..100 {
        data.extend(implicit(0x0008, 0x1140, 0xFFFF_FFFF, &[]));
        data.extend(implicit(0xFFFE, 0xE000, 0xFFFF_FFFF, &[]));
    }
    match decode_source(ByteSource::new(&data), DecodeOptions::default()) {
        Err(Error::NestingTooDeep { depth, .. }) => assert_eq!(depth, 65),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn truncated_prefixes_never_panic() {
    for data in [minimal_file(), implicit_file()] {
        for len in 0..data.len() {
            let prefix = &data[..len];
            // any outcome is fine, as long as it does not read out of bounds
            if let Ok(decoded) = decode_source(ByteSource::new(prefix), DecodeOptions::default()) {
                for elem in decoded.dataset.iter() {
                    assert!(elem.offset() + elem.len() as usize <= len);
                    let _ = tag_as_string(elem);
                }
            }
        }
    }
}

#[test]
fn prefixes_cut_inside_a_value_are_truncated() {
    for data in [minimal_file(), implicit_file()] {
        let full = decode_source(ByteSource::new(&data), DecodeOptions::default()).unwrap();
        let mut cuts = 0;
        for elem in full.dataset.iter() {
            let value_start = elem.offset();
            let value_end = value_start + elem.len() as usize;
            for len in value_start..value_end {
                match decode_source(ByteSource::new(&data[..len]), DecodeOptions::default()) {
                    Err(Error::TruncatedHeader { .. }) => cuts += 1,
                    other => panic!(
                        "{} cut at {} of {}: unexpected result {:?}",
                        elem.tag(),
                        len,
                        data.len(),
                        other.map(|d| d.dataset.len())
                    ),
                }
            }
        }
        assert!(cuts > 0);
    }
}

#[test]
fn prefix_cut_inside_a_header_ends_the_data_set() {
    let data = minimal_file();
    // the Study Instance UID header starts 12 bytes before the end
    let header_start = data.len() - 12;
    for len in header_start..header_start + 8 {
        let decoded =
            decode_source(ByteSource::new(&data[..len]), DecodeOptions::default()).unwrap();
        assert!(decoded.dataset.is_empty());
        assert_eq!(
            decoded.dataset.stop(),
            &Stop::EndOfData {
                offset: header_start
            }
        );
    }
    // a complete header without its value
    assert!(matches!(
        decode_source(
            ByteSource::new(&data[..header_start + 8]),
            DecodeOptions::default()
        ),
        Err(Error::TruncatedHeader {
            needed: 4,
            available: 0,
            ..
        })
    ));
}

#[test]
fn overlong_value_is_truncated_header() {
    let mut data = minimal_file();
    // the Study Instance UID now claims 8 bytes while only 4 are left
    let len_at = data.len() - 6;
    data[len_at] = 8;
    assert!(matches!(
        decode_source(ByteSource::new(&data), DecodeOptions::default()),
        Err(Error::TruncatedHeader {
            needed: 8,
            available: 4,
            ..
        })
    ));
}

#[test]
fn open_and_decode_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&implicit_file()).unwrap();
    file.flush().unwrap();

    let loaded = open_file(file.path()).unwrap();
    let decoded = loaded.decode(DecodeOptions::default()).unwrap();
    assert_eq!(decoded.meta.media_storage_sop_instance_uid, "1.2");
    assert_eq!(
        decoded
            .dataset
            .get(Tag(0x0008, 0x0018))
            .map(|e| trim(&tag_as_string(e)).to_string()),
        Some("5.6".to_string())
    );
}

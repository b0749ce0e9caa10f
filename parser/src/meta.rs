//! Module containing the file meta information table and its decoder.
//!
//! The file meta group `(0002,xxxx)` follows the preamble and the `DICM`
//! magic code, and is always encoded in Explicit VR Little Endian.
//! It declares the transfer syntax of the rest of the file.

use crate::decode::{file_header_decoder, Decode};
use crate::error::{Result, UnsupportedTransferSyntaxSnafu};
use crate::source::ByteSource;
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcm_core::header::{HasLength, Header};
use dcm_core::TransferSyntax;
use snafu::ensure;
use tracing::{debug, warn};

/// The length of the file preamble.
pub const PREAMBLE_LENGTH: usize = 128;

/// The magic code following the preamble.
pub const DICM_MAGIC_CODE: [u8; 4] = *b"DICM";

/// The group number of the file meta information.
pub const META_GROUP: u16 = 0x0002;

/// Maximum length of a unique identifier, in bytes.
pub const UID_MAX_LENGTH: usize = 64;

/// Maximum length of a short string, in bytes.
pub const SHORT_STRING_MAX_LENGTH: usize = 16;

/// The file meta information of a DICOM file.
///
/// Textual attributes are cut at the first NUL character,
/// stripped of trailing padding,
/// and truncated to their maximum length
/// (64 bytes for UIDs, 16 bytes for short strings and AE titles).
/// Attributes absent from the file are left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DicomMeta {
    /// The transfer syntax of the data set.
    /// Implicit VR Little Endian unless declared otherwise.
    pub transfer_syntax: TransferSyntax,
    /// The transfer syntax UID as declared in `(0002,0010)`.
    pub transfer_syntax_uid: String,
    /// File Meta Information Group Length `(0002,0000)`
    pub group_length: Option<u32>,
    /// File Meta Information Version `(0002,0001)`
    pub information_version: Option<[u8; 2]>,
    /// Media Storage SOP Class UID `(0002,0002)`
    pub media_storage_sop_class_uid: String,
    /// Media Storage SOP Instance UID `(0002,0003)`
    pub media_storage_sop_instance_uid: String,
    /// Implementation Class UID `(0002,0012)`
    pub implementation_class_uid: String,
    /// Implementation Version Name `(0002,0013)`
    pub implementation_version_name: String,
    /// Source Application Entity Title `(0002,0016)`
    pub source_application_entity_title: String,
    /// Sending Application Entity Title `(0002,0017)`
    pub sending_application_entity_title: String,
    /// Receiving Application Entity Title `(0002,0018)`
    pub receiving_application_entity_title: String,
    /// Private Information Creator UID `(0002,0100)`
    pub private_information_creator_uid: String,
    /// Private Information `(0002,0102)`
    pub private_information: Vec<u8>,
}

impl DicomMeta {
    /// Decode the file meta information from the start of the given source.
    ///
    /// Returns the table and the offset at which the data set begins.
    pub fn from_source(source: ByteSource<'_>) -> Result<(Self, usize)> {
        decode_meta(source)
    }
}

/// Determine where the file meta group starts.
///
/// The 128 byte preamble is skipped unless the data
/// already begins with an element of group `0002` or `0008`.
/// The magic code is skipped when present;
/// its absence is tolerated.
pub fn meta_start(source: ByteSource<'_>) -> usize {
    let start = match source.peek_group(0) {
        Some(0x0002) | Some(0x0008) => {
            debug!("No preamble, data starts at offset 0");
            0
        }
        _ => PREAMBLE_LENGTH,
    };

    if source.get(start, 4) == Some(&DICM_MAGIC_CODE[..]) {
        start + DICM_MAGIC_CODE.len()
    } else {
        if start > 0 {
            warn!("Magic code DICM not found after preamble");
        }
        start
    }
}

/// Decode the preamble, magic code and file meta group of a DICOM file.
///
/// Decoding stops at the first element outside of group `0002`,
/// and the offset of that element is returned alongside the table,
/// so that data set decoding starts exactly there.
///
/// A transfer syntax of the big endian family is rejected
/// with [`UnsupportedTransferSyntax`](crate::Error::UnsupportedTransferSyntax).
/// An unrecognized transfer syntax UID, such as that of a compressed
/// transfer syntax, is assumed to be Explicit VR Little Endian.
/// This is a best-effort guess rather than a rule of the standard.
pub fn decode_meta(source: ByteSource<'_>) -> Result<(DicomMeta, usize)> {
    let decoder = file_header_decoder();
    let mut meta = DicomMeta::default();
    let mut offset = meta_start(source);

    while source.peek_group(offset) == Some(META_GROUP) {
        let (header, header_len) = decoder.decode_header(source, offset)?;
        let len = match header.length().get() {
            Some(len) => len as usize,
            None => {
                warn!(
                    "Meta element {} has undefined length, ending file meta group",
                    header.tag()
                );
                break;
            }
        };
        let value = source.slice(offset + header_len, len)?;

        match header.tag().element() {
            0x0000 => {
                meta.group_length = value.get(0..4).map(LittleEndian::read_u32);
            }
            0x0001 => {
                meta.information_version = match value {
                    &[a, b] => Some([a, b]),
                    _ => None,
                };
            }
            0x0002 => meta.media_storage_sop_class_uid = text_value(value, UID_MAX_LENGTH),
            0x0003 => {
                meta.media_storage_sop_instance_uid = text_value(value, UID_MAX_LENGTH)
            }
            0x0010 => {
                let uid = text_value(value, UID_MAX_LENGTH);
                meta.transfer_syntax = resolve_transfer_syntax(&uid)?;
                meta.transfer_syntax_uid = uid;
            }
            0x0012 => meta.implementation_class_uid = text_value(value, UID_MAX_LENGTH),
            0x0013 => {
                meta.implementation_version_name = text_value(value, SHORT_STRING_MAX_LENGTH)
            }
            0x0016 => {
                meta.source_application_entity_title = text_value(value, SHORT_STRING_MAX_LENGTH)
            }
            0x0017 => {
                meta.sending_application_entity_title = text_value(value, SHORT_STRING_MAX_LENGTH)
            }
            0x0018 => {
                meta.receiving_application_entity_title =
                    text_value(value, SHORT_STRING_MAX_LENGTH)
            }
            0x0100 => {
                meta.private_information_creator_uid = text_value(value, UID_MAX_LENGTH)
            }
            0x0102 => meta.private_information = value.to_vec(),
            _ => {
                debug!("Ignoring meta element {}", header.tag());
            }
        }

        offset += header_len + len;
    }

    debug!(
        "Transfer syntax: {}, data set starts at offset {}",
        meta.transfer_syntax, offset
    );
    Ok((meta, offset))
}

fn resolve_transfer_syntax(uid: &str) -> Result<TransferSyntax> {
    match TransferSyntax::from_uid(uid) {
        Some(ts) => {
            ensure!(
                ts.is_supported(),
                UnsupportedTransferSyntaxSnafu { uid: ts.uid() }
            );
            Ok(ts)
        }
        None => {
            warn!(
                "Unrecognized transfer syntax {:?}, assuming Explicit VR Little Endian",
                uid
            );
            Ok(TransferSyntax::ExplicitLittleEndian)
        }
    }
}

/// Interpret a meta element value as text.
fn text_value(value: &[u8], max_len: usize) -> String {
    let value = value.split(|&b| b == 0).next().unwrap_or(&[]);
    let value = &value[..value.len().min(max_len)];
    String::from_utf8_lossy(value).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::{decode_meta, meta_start, DicomMeta};
    use crate::source::ByteSource;
    use crate::Error;
    use dcm_core::TransferSyntax;

    fn element(group: u16, element: u16, vr: &[u8; 2], value: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&group.to_le_bytes());
        out.extend_from_slice(&element.to_le_bytes());
        out.extend_from_slice(vr);
        if matches!(vr, b"OB" | b"SQ" | b"UN") {
            out.extend_from_slice(&[0, 0]);
            out.extend_from_slice(&(value.len() as u32).to_le_bytes());
        } else {
            out.extend_from_slice(&(value.len() as u16).to_le_bytes());
        }
        out.extend_from_slice(value);
        out
    }

    fn file_with_meta(ts: &str) -> Vec<u8> {
        let mut ts = ts.as_bytes().to_vec();
        if ts.len() % 2 == 1 {
            ts.push(0);
        }
        let mut out = vec![0u8; 128];
        out.extend_from_slice(b"DICM");
        out.extend(element(0x0002, 0x0001, b"OB", &[0x00, 0x01]));
        out.extend(element(0x0002, 0x0003, b"UI", b"1.2\0"));
        out.extend(element(0x0002, 0x0010, b"UI", &ts));
        out.extend(element(0x0002, 0x0013, b"SH", b"DCM_0.1 "));
        out.extend(element(0x0008, 0x0060, b"CS", b"CT"));
        out
    }

    #[test]
    fn reads_meta_group_after_preamble() {
        let data = file_with_meta("1.2.840.10008.1.2.1");
        let source = ByteSource::new(&data);
        let (meta, offset) = decode_meta(source).unwrap();
        assert_eq!(meta.transfer_syntax, TransferSyntax::ExplicitLittleEndian);
        assert_eq!(meta.transfer_syntax_uid, "1.2.840.10008.1.2.1");
        assert_eq!(meta.media_storage_sop_instance_uid, "1.2");
        assert_eq!(meta.information_version, Some([0x00, 0x01]));
        assert_eq!(meta.implementation_version_name, "DCM_0.1");
        // rewound to the first data set element
        assert_eq!(offset, data.len() - 10);
        assert_eq!(&data[offset..offset + 4], &[0x08, 0x00, 0x60, 0x00]);
    }

    #[test]
    fn transfer_syntax_cases() {
        let data = file_with_meta("1.2.840.10008.1.2");
        let (meta, _) = decode_meta(ByteSource::new(&data)).unwrap();
        assert_eq!(meta.transfer_syntax, TransferSyntax::Implicit);

        let data = file_with_meta("1.2.840.10008.1.2.2");
        match decode_meta(ByteSource::new(&data)) {
            Err(Error::UnsupportedTransferSyntax { uid, .. }) => {
                assert_eq!(uid, "1.2.840.10008.1.2.2")
            }
            other => panic!("unexpected result {:?}", other),
        }

        let data = file_with_meta("1.2.840.10008.1.2.1.99");
        assert!(matches!(
            decode_meta(ByteSource::new(&data)),
            Err(Error::UnsupportedTransferSyntax { .. })
        ));

        // JPEG Baseline is assumed to be explicit VR little endian
        let data = file_with_meta("1.2.840.10008.1.2.4.50");
        let (meta, _) = decode_meta(ByteSource::new(&data)).unwrap();
        assert_eq!(meta.transfer_syntax, TransferSyntax::ExplicitLittleEndian);
        assert_eq!(meta.transfer_syntax_uid, "1.2.840.10008.1.2.4.50");
    }

    #[test]
    fn default_transfer_syntax_is_implicit() {
        let mut data = vec![0u8; 128];
        data.extend_from_slice(b"DICM");
        data.extend(element(0x0002, 0x0003, b"UI", b"1.2\0"));
        let (meta, offset) = decode_meta(ByteSource::new(&data)).unwrap();
        assert_eq!(meta.transfer_syntax, TransferSyntax::Implicit);
        assert_eq!(offset, data.len());
    }

    #[test]
    fn headerless_data() {
        let mut data = element(0x0002, 0x0010, b"UI", b"1.2.840.10008.1.2.1\0");
        data.extend(element(0x0008, 0x0060, b"CS", b"MR"));
        let source = ByteSource::new(&data);
        assert_eq!(meta_start(source), 0);
        let (meta, offset) = DicomMeta::from_source(source).unwrap();
        assert_eq!(meta.transfer_syntax, TransferSyntax::ExplicitLittleEndian);
        assert_eq!(offset, 28);

        // data set without any meta group at all
        let data = element(0x0008, 0x0060, b"CS", b"MR");
        let (meta, offset) = decode_meta(ByteSource::new(&data)).unwrap();
        assert_eq!(meta, DicomMeta::default());
        assert_eq!(offset, 0);
    }

    #[test]
    fn missing_magic_code_is_tolerated() {
        let mut data = vec![0xAAu8; 128];
        data.extend(element(0x0002, 0x0003, b"UI", b"1.2\0"));
        let source = ByteSource::new(&data);
        assert_eq!(meta_start(source), 128);
        let (meta, _) = decode_meta(source).unwrap();
        assert_eq!(meta.media_storage_sop_instance_uid, "1.2");
    }

    #[test]
    fn long_uids_are_capped() {
        let uid = "1.".repeat(40);
        let mut data = vec![0u8; 128];
        data.extend_from_slice(b"DICM");
        data.extend(element(0x0002, 0x0003, b"UI", uid.as_bytes()));
        let (meta, _) = decode_meta(ByteSource::new(&data)).unwrap();
        assert_eq!(meta.media_storage_sop_instance_uid.len(), 64);
        assert!(uid.starts_with(&meta.media_storage_sop_instance_uid));
    }

    #[test]
    fn truncated_meta_element_fails() {
        let mut data = file_with_meta("1.2.840.10008.1.2.1");
        // cut inside the transfer syntax value
        data.truncate(128 + 4 + 14 + 12 + 8 + 5);
        assert!(matches!(
            decode_meta(ByteSource::new(&data)),
            Err(Error::TruncatedHeader { .. })
        ));
    }
}

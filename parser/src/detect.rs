//! Quick detection of DICOM content.

use crate::meta::{DICM_MAGIC_CODE, PREAMBLE_LENGTH};
use crate::source::ByteSource;
use dcm_core::is_valid_vr;

/// Groups which a headerless data set usually starts with.
const LEADING_GROUPS: [u16; 2] = [0x0002, 0x0008];

/// Guess whether the data is DICOM.
///
/// This is a best-effort classifier, not a validator,
/// and may be wrong in either direction.
/// The data is accepted if:
///
/// - the magic code `DICM` follows the 128 byte preamble; or
/// - it starts with an element of group `0002` or `0008`,
///   and either a known VR code is found where explicit VR encoding
///   would place it, or the bytes after the first element
///   (taken as implicit VR) start another element of a plausible group.
///
/// The second rule exists to accept headerless
/// and otherwise non-conformant dumps.
pub fn is_dicom(source: ByteSource<'_>) -> bool {
    if source.get(PREAMBLE_LENGTH, 4) == Some(&DICM_MAGIC_CODE[..]) {
        return true;
    }

    let first_group = match source.peek_group(0) {
        Some(group) if LEADING_GROUPS.contains(&group) => group,
        _ => return false,
    };

    if source.get(4, 2).map(is_valid_vr).unwrap_or(false) {
        return true;
    }

    let next = source
        .read_u32(4)
        .ok()
        .and_then(|len| 8_usize.checked_add(len as usize));
    match next.and_then(|offset| source.peek_group(offset)) {
        Some(group) => group == first_group || LEADING_GROUPS.contains(&group),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::is_dicom;
    use crate::source::ByteSource;

    #[test]
    fn accepts_magic_code() {
        let mut data = vec![0xFFu8; 128];
        data.extend_from_slice(b"DICM");
        assert!(is_dicom(ByteSource::new(&data)));
    }

    #[test]
    fn accepts_headerless_explicit() {
        #[rustfmt::skip]
        let data = [
            0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'C', b'T',
        ];
        assert!(is_dicom(ByteSource::new(&data)));
    }

    #[test]
    fn accepts_headerless_implicit() {
        #[rustfmt::skip]
        let data = [
            0x08, 0x00, 0x60, 0x00, 0x02, 0x00, 0x00, 0x00, b'C', b'T',
            0x08, 0x00, 0x70, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];
        assert!(is_dicom(ByteSource::new(&data)));
    }

    #[test]
    fn rejects_other_content() {
        assert!(!is_dicom(ByteSource::new(b"")));
        assert!(!is_dicom(ByteSource::new(b"\x89PNG\r\n\x1a\n")));
        // plausible group, but nothing else adds up
        #[rustfmt::skip]
        let data = [
            0x08, 0x00, 0x60, 0x00, 0x02, 0x00, 0x00, 0x00, b'C', b'T',
            0x10, 0x00, 0x10, 0x00,
        ];
        assert!(!is_dicom(ByteSource::new(&data)));
        // preamble present, magic code absent
        let data = vec![0u8; 200];
        assert!(!is_dicom(ByteSource::new(&data)));
    }
}

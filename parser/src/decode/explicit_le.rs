//! Explicit VR Little Endian header decoding

use super::{Decode, LONG_HEADER_LEN, SHORT_HEADER_LEN};
use crate::error::Result;
use crate::source::ByteSource;
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcm_core::header::{DataElementHeader, Length};
use dcm_core::{Tag, VR};
use tracing::warn;

/// A data element header decoder for the Explicit VR Little Endian transfer syntax.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExplicitVRLittleEndianDecoder;

impl Decode for ExplicitVRLittleEndianDecoder {
    fn decode_header(
        &self,
        source: ByteSource<'_>,
        offset: usize,
    ) -> Result<(DataElementHeader, usize)> {
        // tag + VR, or tag + length for item delimiters
        let buf = source.slice(offset, SHORT_HEADER_LEN)?;
        let group = LittleEndian::read_u16(&buf[0..2]);
        let element = LittleEndian::read_u16(&buf[2..4]);

        if group == 0xFFFE {
            // items and delimiters do not have a VR or reserved field
            let len = LittleEndian::read_u32(&buf[4..8]);
            return Ok((
                DataElementHeader::new((group, element), VR::UN, Length(len)),
                SHORT_HEADER_LEN,
            ));
        }

        let code = [buf[4], buf[5]];
        let vr = VR::from_binary(code).unwrap_or_else(|| {
            warn!(
                "Invalid VR {:02X?} in element {} at offset {}, assuming UN",
                code,
                Tag(group, element),
                offset
            );
            VR::UN
        });

        if vr.is_long_length() {
            // PS3.5 7.1.2:
            // for all other VRs the 16 bits following the two byte VR Field
            // are reserved for use by later versions of the DICOM Standard.
            // These reserved bytes shall be set to 0000H and shall not be
            // used or decoded (Table 7.1-1). The Value Length Field is a
            // 32-bit unsigned integer.
            let len = source.read_u32(offset + SHORT_HEADER_LEN)?;
            Ok((
                DataElementHeader::new((group, element), vr, Length(len)),
                LONG_HEADER_LEN,
            ))
        } else {
            // PS3.5 7.1.2:
            // for VRs of AE, AS, AT, CS, DA, DS, DT, FL, FD, IS, LO, LT, PN,
            // SH, SL, SS, ST, TM, UI, UL and US the Value Length Field is the
            // 16-bit unsigned integer following the two byte VR Field (Table
            // 7.1-2). The value of the Value Length Field shall equal the
            // length of the Value Field.
            let len = u32::from(LittleEndian::read_u16(&buf[6..8]));
            Ok((
                DataElementHeader::new((group, element), vr, Length(len)),
                SHORT_HEADER_LEN,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ExplicitVRLittleEndianDecoder;
    use crate::decode::Decode;
    use crate::source::ByteSource;
    use crate::Error;
    use dcm_core::header::{HasLength, Header, Length};
    use dcm_core::{Tag, VR};

    // manually crafting some DICOM data elements
    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x02, 0x00, 0x02, 0x00,     // (0002,0002) (LE) Media Storage SOP Class UID
            b'U', b'I',             // VR: UI (UID)
            0x1A, 0x00,             // Length: 26 bytes (LE)
                // UID: 1.2.840.10008.5.1.4.1.1.1
                b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0', b'0', b'0', b'8', b'.',
                b'5', b'.', b'1', b'.', b'4', b'.', b'1', b'.', b'1', b'.', b'1',
                0x00,               // Padding to make length even
        0x08, 0x00, 0x40, 0x11,     // (0008,1140) (LE) Referenced Image Sequence
            b'S', b'Q',             // VR: SQ
            0x00, 0x00,             // Reserved
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
        0xFE, 0xFF, 0x00, 0xE0,     // (FFFE,E000) Item
            0x00, 0x00, 0x00, 0x00, // Length: 0
        0x09, 0x00, 0x10, 0x10,     // (0009,1010) private element
            b'Z', b'Z',             // VR: not a value representation
            0x00, 0x00,             // Reserved
            0x02, 0x00, 0x00, 0x00, // Length: 2
                0x01, 0x02,
        0x28, 0x00, 0x10, 0x00,     // (0028,0010) Rows
            b'U', b'S',             // VR: US
            0x02, 0x00,             // Length: 2
    ];

    #[test]
    fn decode_short_and_long_headers() {
        let dec = ExplicitVRLittleEndianDecoder;
        let source = ByteSource::new(RAW);

        let (elem, header_len) = dec.decode_header(source, 0).expect("should find an element");
        assert_eq!(elem.tag(), Tag(0x0002, 0x0002));
        assert_eq!(elem.vr(), VR::UI);
        assert_eq!(elem.length(), Length(26));
        assert_eq!(header_len, 8);

        let (elem, header_len) = dec.decode_header(source, 34).expect("should find an element");
        assert_eq!(elem.tag(), Tag(0x0008, 0x1140));
        assert_eq!(elem.vr(), VR::SQ);
        assert!(elem.length().is_undefined());
        assert_eq!(header_len, 12);
    }

    #[test]
    fn decode_item_without_vr() {
        let dec = ExplicitVRLittleEndianDecoder;
        let source = ByteSource::new(RAW);
        let (elem, header_len) = dec.decode_header(source, 46).expect("should find an item");
        assert!(elem.is_item());
        assert_eq!(elem.length(), Length(0));
        assert_eq!(header_len, 8);
    }

    #[test]
    fn unknown_vr_is_read_as_un() {
        let dec = ExplicitVRLittleEndianDecoder;
        let source = ByteSource::new(RAW);
        let (elem, header_len) = dec.decode_header(source, 54).expect("should find an element");
        assert_eq!(elem.tag(), Tag(0x0009, 0x1010));
        assert_eq!(elem.vr(), VR::UN);
        assert_eq!(elem.length(), Length(2));
        assert_eq!(header_len, 12);
    }

    #[test]
    fn truncated_headers_fail() {
        let dec = ExplicitVRLittleEndianDecoder;
        let source = ByteSource::new(RAW);
        // header of Rows is complete, but nothing else follows
        assert!(dec.decode_header(source, 68).is_ok());
        // long header cut after the reserved bytes
        let cut = ByteSource::new(&RAW[..44]);
        assert!(matches!(
            dec.decode_header(cut, 34),
            Err(Error::TruncatedHeader { offset: 42, needed: 4, available: 2, .. })
        ));
        // fewer than 8 bytes left
        assert!(matches!(
            dec.decode_header(source, 70),
            Err(Error::TruncatedHeader { .. })
        ));
    }
}

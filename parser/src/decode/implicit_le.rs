//! Implicit VR Little Endian header decoding

use super::{Decode, SHORT_HEADER_LEN};
use crate::error::Result;
use crate::source::ByteSource;
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcm_core::dictionary::{resolve_implicit_vr, DataDictionary};
use dcm_core::header::{DataElementHeader, Length};
use dcm_core::{Tag, VR};
use dcm_dictionary_std::StandardDataDictionary;
use std::fmt;

/// An implicit VR decoder which uses the standard data dictionary.
pub type StandardImplicitVRLittleEndianDecoder =
    ImplicitVRLittleEndianDecoder<StandardDataDictionary>;

/// A data element header decoder for the Implicit VR Little Endian transfer syntax.
/// Value representations are resolved through an attribute dictionary.
pub struct ImplicitVRLittleEndianDecoder<D> {
    dict: D,
}

impl<D> fmt::Debug for ImplicitVRLittleEndianDecoder<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ImplicitVRLittleEndianDecoder")
            .field("dict", &"«omitted»")
            .finish()
    }
}

impl ImplicitVRLittleEndianDecoder<StandardDataDictionary> {
    /// Retrieve this decoder using the standard data dictionary.
    pub fn with_std_dict() -> Self {
        ImplicitVRLittleEndianDecoder {
            dict: StandardDataDictionary,
        }
    }
}

impl Default for ImplicitVRLittleEndianDecoder<StandardDataDictionary> {
    fn default() -> Self {
        ImplicitVRLittleEndianDecoder::with_std_dict()
    }
}

impl<D> ImplicitVRLittleEndianDecoder<D>
where
    D: DataDictionary,
{
    /// Retrieve this decoder using a custom data dictionary.
    pub fn with_dict(dictionary: D) -> Self {
        ImplicitVRLittleEndianDecoder { dict: dictionary }
    }
}

impl<D> Decode for ImplicitVRLittleEndianDecoder<D>
where
    D: DataDictionary,
{
    fn decode_header(
        &self,
        source: ByteSource<'_>,
        offset: usize,
    ) -> Result<(DataElementHeader, usize)> {
        let buf = source.slice(offset, SHORT_HEADER_LEN)?;
        let tag = Tag(
            LittleEndian::read_u16(&buf[0..2]),
            LittleEndian::read_u16(&buf[2..4]),
        );
        let len = LittleEndian::read_u32(&buf[4..8]);

        // In Implicit VR Little Endian,
        // the VR of OW must be used for Pixel Data (7FE0,0010)
        // and Overlay Data (60xx,3000).
        let vr = if tag == Tag::PIXEL_DATA || (tag.0 >> 8 == 0x60 && tag.1 == 0x3000) {
            VR::OW
        } else {
            resolve_implicit_vr(&self.dict, tag.0, tag.1)
        };
        Ok((
            DataElementHeader::new(tag, vr, Length(len)),
            SHORT_HEADER_LEN,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::ImplicitVRLittleEndianDecoder;
    use crate::decode::Decode;
    use crate::source::ByteSource;
    use byteordered::byteorder::{ByteOrder, LittleEndian};
    use dcm_core::dictionary::stub::StubDataDictionary;
    use dcm_core::header::{HasLength, Header, Length};
    use dcm_core::{Tag, VR};

    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x02, 0x00, 0x02, 0x00,     // (0002,0002) (LE) Media Storage SOP Class UID
            0x1A, 0x00, 0x00, 0x00, // Length: 26 bytes (LE)
                // UID: 1.2.840.10008.5.1.4.1.1.1
                b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0', b'0', b'0', b'8', b'.',
                b'5', b'.', b'1', b'.', b'4', b'.', b'1', b'.', b'1', b'.', b'1',
                0x00,               // Padding to make length even
        0x20, 0x00, 0x00, 0x00,     // (0020,0000) Group Length
            0x04, 0x00, 0x00, 0x00, // Length: 4
                0x00, 0x00, 0x00, 0x00,
        0x02, 0x60, 0x00, 0x30,     // (6002,3000) Overlay Data
            0x02, 0x00, 0x00, 0x00, // Length: 2
                0xFF, 0x00,
        0xE0, 0x7F, 0x10, 0x00,     // (7FE0,0010) Pixel Data
            0x00, 0x00, 0x00, 0x00, // Length: 0
        0x11, 0x00, 0x01, 0x10,     // (0011,1001) private data element
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
    ];

    #[test]
    fn implicit_vr_le() {
        let dec = ImplicitVRLittleEndianDecoder::default();
        let source = ByteSource::new(RAW);

        let (elem, header_len) = dec.decode_header(source, 0).expect("should find an element");
        assert_eq!(elem.tag(), Tag(0x0002, 0x0002));
        assert_eq!(elem.vr(), VR::UI);
        assert_eq!(elem.length(), Length(26));
        assert_eq!(header_len, 8);

        let (elem, _) = dec.decode_header(source, 34).expect("should find an element");
        assert_eq!(elem.tag(), Tag(0x0020, 0x0000));
        assert_eq!(elem.vr(), VR::UL);

        let (elem, _) = dec.decode_header(source, 46).expect("should find an element");
        assert_eq!(elem.tag(), Tag(0x6002, 0x3000));
        assert_eq!(elem.vr(), VR::OW);

        let (elem, _) = dec.decode_header(source, 56).expect("should find an element");
        assert_eq!(elem.tag(), Tag(0x7FE0, 0x0010));
        assert_eq!(elem.vr(), VR::OW);
        assert_eq!(elem.length(), Length(0));

        let (elem, _) = dec.decode_header(source, 64).expect("should find an element");
        assert_eq!(elem.tag(), Tag(0x0011, 0x1001));
        assert_eq!(elem.vr(), VR::UN);
        assert!(elem.length().is_undefined());

        assert!(dec.decode_header(source, 68).is_err());
    }

    #[test]
    fn header_reencodes_to_same_bytes() {
        let dec = ImplicitVRLittleEndianDecoder::default();
        let source = ByteSource::new(RAW);

        for offset in [0, 34, 46, 56, 64] {
            let (elem, header_len) = dec.decode_header(source, offset).unwrap();
            let mut buf = [0u8; 8];
            LittleEndian::write_u16(&mut buf[0..2], elem.tag().group());
            LittleEndian::write_u16(&mut buf[2..4], elem.tag().element());
            LittleEndian::write_u32(&mut buf[4..8], elem.length().0);
            assert_eq!(&buf[..], &RAW[offset..offset + header_len]);
        }
    }

    #[test]
    fn stub_dictionary_resolves_to_un() {
        let dec = ImplicitVRLittleEndianDecoder::with_dict(StubDataDictionary);
        let source = ByteSource::new(RAW);
        let (elem, _) = dec.decode_header(source, 0).unwrap();
        assert_eq!(elem.vr(), VR::UN);
        // group length and pixel data need no dictionary
        let (elem, _) = dec.decode_header(source, 34).unwrap();
        assert_eq!(elem.vr(), VR::UL);
        let (elem, _) = dec.decode_header(source, 56).unwrap();
        assert_eq!(elem.vr(), VR::OW);
    }
}

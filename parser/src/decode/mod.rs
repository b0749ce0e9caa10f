//! This module contains the element header decoding logic
//! for the supported transfer syntaxes.
//!
//! A decoder reads one element header at a given offset of a [`ByteSource`]
//! and reports the header together with the number of bytes it occupies.
//! Sequence item headers and delimiters are shared by all encodings:
//! they are always 8 bytes long and carry no value representation.

use crate::error::{MalformedSequenceSnafu, Result};
use crate::source::ByteSource;
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcm_core::header::{DataElementHeader, Length, SequenceItemHeader};
use dcm_core::{Tag, TransferSyntax};
use snafu::OptionExt;

pub mod explicit_le;
pub mod implicit_le;

pub use self::explicit_le::ExplicitVRLittleEndianDecoder;
pub use self::implicit_le::{ImplicitVRLittleEndianDecoder, StandardImplicitVRLittleEndianDecoder};

/// The size of an implicit VR header, an explicit VR header of a short VR,
/// and of any item or delimiter header.
pub const SHORT_HEADER_LEN: usize = 8;

/// The size of an explicit VR header with reserved bytes and a 32-bit length.
pub const LONG_HEADER_LEN: usize = 12;

/// Type trait for decoding DICOM element headers from a byte source.
///
/// Implementations never read past the end of the source:
/// a header which does not fit results in
/// [`TruncatedHeader`](crate::Error::TruncatedHeader).
pub trait Decode {
    /// Decode the header of the data element starting at `offset`.
    ///
    /// Returns the header and the number of bytes the header occupies.
    /// The element's value, if any, begins right after.
    fn decode_header(
        &self,
        source: ByteSource<'_>,
        offset: usize,
    ) -> Result<(DataElementHeader, usize)>;

    /// Decode the sequence item header or delimiter starting at `offset`.
    ///
    /// The header is [`SHORT_HEADER_LEN`] bytes long.
    fn decode_item_header(
        &self,
        source: ByteSource<'_>,
        offset: usize,
    ) -> Result<SequenceItemHeader> {
        decode_item_header(source, offset)
    }

    /// Decode the attribute tag starting at `offset`.
    fn decode_tag(&self, source: ByteSource<'_>, offset: usize) -> Result<Tag> {
        source.read_tag(offset)
    }
}

impl<T: ?Sized + Decode> Decode for Box<T> {
    fn decode_header(
        &self,
        source: ByteSource<'_>,
        offset: usize,
    ) -> Result<(DataElementHeader, usize)> {
        (**self).decode_header(source, offset)
    }

    fn decode_item_header(
        &self,
        source: ByteSource<'_>,
        offset: usize,
    ) -> Result<SequenceItemHeader> {
        (**self).decode_item_header(source, offset)
    }

    fn decode_tag(&self, source: ByteSource<'_>, offset: usize) -> Result<Tag> {
        (**self).decode_tag(source, offset)
    }
}

/// A boxed header decoder, chosen at run time from the transfer syntax.
pub type DynDecoder = Box<dyn Decode + Send + Sync>;

/// Obtain the header decoder for the given transfer syntax.
///
/// Returns `None` if data sets in this transfer syntax cannot be decoded.
pub fn decoder_for(ts: TransferSyntax) -> Option<DynDecoder> {
    match ts {
        TransferSyntax::Implicit => Some(Box::new(ImplicitVRLittleEndianDecoder::with_std_dict())),
        TransferSyntax::ExplicitLittleEndian => Some(Box::new(ExplicitVRLittleEndianDecoder)),
        TransferSyntax::ExplicitBigEndian | TransferSyntax::DeflatedExplicitBigEndian => None,
    }
}

/// Obtain the decoder for the file meta group,
/// which is always encoded in Explicit VR Little Endian.
pub fn file_header_decoder() -> ExplicitVRLittleEndianDecoder {
    ExplicitVRLittleEndianDecoder
}

/// Decode an item or delimiter header at `offset`.
///
/// Any other tag, as well as an item delimiter with a non-zero length,
/// is a malformed sequence.
pub fn decode_item_header(source: ByteSource<'_>, offset: usize) -> Result<SequenceItemHeader> {
    let buf = source.slice(offset, SHORT_HEADER_LEN)?;
    let tag = Tag(
        LittleEndian::read_u16(&buf[0..2]),
        LittleEndian::read_u16(&buf[2..4]),
    );
    let len = Length(LittleEndian::read_u32(&buf[4..8]));
    SequenceItemHeader::new(tag, len)
        .ok()
        .context(MalformedSequenceSnafu { tag, offset })
}

#[cfg(test)]
mod tests {
    use super::{decode_item_header, decoder_for};
    use crate::source::ByteSource;
    use crate::Error;
    use dcm_core::header::{Length, SequenceItemHeader};
    use dcm_core::{Tag, TransferSyntax};

    #[rustfmt::skip]
    const ITEMS: &[u8] = &[
        0xFE, 0xFF, 0x00, 0xE0,     // (FFFE,E000) Item
            0x0A, 0x00, 0x00, 0x00, // Length: 10
        0xFE, 0xFF, 0x0D, 0xE0,     // (FFFE,E00D) Item Delimitation Item
            0x00, 0x00, 0x00, 0x00, // Length: 0
        0xFE, 0xFF, 0xDD, 0xE0,     // (FFFE,E0DD) Sequence Delimitation Item
            0x00, 0x00, 0x00, 0x00, // Length: 0
        0x08, 0x00, 0x18, 0x00,     // (0008,0018) not an item
            0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn decodes_item_headers() {
        let source = ByteSource::new(ITEMS);
        assert_eq!(
            decode_item_header(source, 0).unwrap(),
            SequenceItemHeader::Item { len: Length(10) }
        );
        assert_eq!(
            decode_item_header(source, 8).unwrap(),
            SequenceItemHeader::ItemDelimiter
        );
        assert_eq!(
            decode_item_header(source, 16).unwrap(),
            SequenceItemHeader::SequenceDelimiter
        );
        match decode_item_header(source, 24) {
            Err(Error::MalformedSequence { tag, offset, .. }) => {
                assert_eq!(tag, Tag(0x0008, 0x0018));
                assert_eq!(offset, 24);
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert!(matches!(
            decode_item_header(source, 28),
            Err(Error::TruncatedHeader { .. })
        ));
    }

    #[test]
    fn decoders_for_supported_syntaxes_only() {
        assert!(decoder_for(TransferSyntax::Implicit).is_some());
        assert!(decoder_for(TransferSyntax::ExplicitLittleEndian).is_some());
        assert!(decoder_for(TransferSyntax::ExplicitBigEndian).is_none());
        assert!(decoder_for(TransferSyntax::DeflatedExplicitBigEndian).is_none());
    }
}

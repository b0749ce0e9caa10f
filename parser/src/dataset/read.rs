//! The data set and sequence decoder.
//!
//! Elements are decoded one after the other with the header decoder
//! of the file's transfer syntax.
//! Sequences are decoded recursively, item by item,
//! whether their length is defined or delimited.
//! The nesting depth is bounded by [`DecodeOptions::max_depth`].

use super::{DataSet, DecodeOptions, RawElement, Stop};
use crate::decode::{decoder_for, Decode, SHORT_HEADER_LEN};
use crate::error::{
    MalformedSequenceSnafu, NestingTooDeepSnafu, Result, TruncatedHeaderSnafu,
    UnsupportedTransferSyntaxSnafu,
};
use crate::meta::DicomMeta;
use crate::source::ByteSource;
use dcm_core::header::{DataElementHeader, HasLength, Header, SequenceItemHeader};
use dcm_core::Tag;
use snafu::{ensure, OptionExt};
use tracing::{debug, trace, warn};

/// The group of items and delimiters.
const DELIMITER_GROUP: u16 = 0xFFFE;

/// Decode the data set of a file, starting at `offset`,
/// in the transfer syntax declared by the file meta group.
pub fn read_dataset<'s>(
    source: ByteSource<'s>,
    offset: usize,
    meta: &DicomMeta,
    options: DecodeOptions,
) -> Result<DataSet<'s>> {
    let decoder = decoder_for(meta.transfer_syntax).context(UnsupportedTransferSyntaxSnafu {
        uid: meta.transfer_syntax.uid(),
    })?;
    DataSetReader::new(source, decoder, options).read(offset)
}

/// What to do after decoding a run of elements.
#[derive(Debug)]
enum Flow {
    /// carry on from the given offset
    Continue(usize),
    /// stop decoding altogether
    Halt(Stop),
}

/// A data set decoder over a byte source.
#[derive(Debug)]
pub struct DataSetReader<'s, D> {
    source: ByteSource<'s>,
    decoder: D,
    options: DecodeOptions,
    elements: Vec<RawElement<'s>>,
}

impl<'s, D> DataSetReader<'s, D>
where
    D: Decode,
{
    /// Create a new data set reader with the given element header decoder.
    pub fn new(source: ByteSource<'s>, decoder: D, options: DecodeOptions) -> Self {
        DataSetReader {
            source,
            decoder,
            options,
            elements: Vec::new(),
        }
    }

    /// Decode the data set starting at `offset`.
    ///
    /// Decoding ends successfully at the end of the data,
    /// at the first top level element of the stop group or beyond,
    /// or when the element capacity is reached.
    /// See [`Stop`] for telling these apart.
    pub fn read(mut self, offset: usize) -> Result<DataSet<'s>> {
        let end = self.source.len();
        let stop = match self.read_elements(offset, end, 0)? {
            Flow::Continue(offset) => Stop::EndOfData { offset },
            Flow::Halt(stop) => stop,
        };
        if let Stop::CapacityExceeded { offset } = stop {
            warn!(
                "Data set truncated at offset {}: more than {} elements",
                offset, self.options.max_tags
            );
        }
        Ok(DataSet::new(
            self.source,
            self.elements,
            stop,
            self.options.max_tags,
        ))
    }

    /// Decode the elements from `offset` up to `end`.
    ///
    /// Inside items (`depth > 0`) this returns at the first
    /// item or delimiter header, which the sequence decoder handles.
    fn read_elements(&mut self, mut offset: usize, end: usize, depth: u32) -> Result<Flow> {
        loop {
            if end.saturating_sub(offset) < SHORT_HEADER_LEN {
                return Ok(Flow::Continue(offset));
            }

            let group = self.source.read_u16(offset)?;
            if group == DELIMITER_GROUP {
                if depth > 0 {
                    return Ok(Flow::Continue(offset));
                }
                return Ok(self.boundary(offset));
            }
            if depth == 0 && group >= self.options.stop_group {
                return Ok(self.boundary(offset));
            }

            let (header, header_len) = self.decoder.decode_header(self.source, offset)?;
            let value_offset = offset + header_len;

            if header.is_non_primitive() {
                if header.is_encapsulated_pixeldata() {
                    offset = self.skip_fragments(value_offset, end)?;
                    continue;
                }
                match self.read_sequence(&header, value_offset, end, depth)? {
                    Flow::Continue(next) => offset = next,
                    halt => return Ok(halt),
                }
                continue;
            }

            let len = header.length().0 as usize;
            let next = value_end(value_offset, len, end)?;
            if self.elements.len() >= self.options.max_tags {
                return Ok(Flow::Halt(Stop::CapacityExceeded { offset }));
            }

            trace!(
                "{} {} ({} bytes) at offset {}",
                header.tag(),
                header.vr(),
                len,
                offset
            );
            let data = self.source.slice(value_offset, len)?;
            self.elements
                .push(RawElement::new(header, value_offset, data, depth));
            offset = next;
        }
    }

    /// Decode the items of a sequence whose value starts at `value_offset`.
    ///
    /// Returns the offset right after the sequence delimiter,
    /// or right after the declared length of the sequence.
    fn read_sequence(
        &mut self,
        header: &DataElementHeader,
        value_offset: usize,
        end: usize,
        depth: u32,
    ) -> Result<Flow> {
        let depth = depth + 1;
        ensure!(
            depth <= self.options.max_depth,
            NestingTooDeepSnafu {
                depth,
                offset: value_offset
            }
        );

        let (seq_end, defined) = match header.length().get() {
            Some(len) => (value_end(value_offset, len as usize, end)?, true),
            None => (end, false),
        };
        debug!(
            "Sequence {} with {} length at offset {}, depth {}",
            header.tag(),
            if defined { "defined" } else { "undefined" },
            value_offset,
            depth
        );

        let mut offset = value_offset;
        loop {
            if defined && seq_end.saturating_sub(offset) < SHORT_HEADER_LEN {
                // nothing but padding left
                return Ok(Flow::Continue(seq_end));
            }

            match self.item_header(offset, seq_end)? {
                SequenceItemHeader::SequenceDelimiter => {
                    let next = if defined {
                        seq_end
                    } else {
                        offset + SHORT_HEADER_LEN
                    };
                    return Ok(Flow::Continue(next));
                }
                SequenceItemHeader::ItemDelimiter => {
                    return MalformedSequenceSnafu {
                        tag: Tag::ITEM_DELIMITER,
                        offset,
                    }
                    .fail();
                }
                SequenceItemHeader::Item { len } => {
                    let item_start = offset + SHORT_HEADER_LEN;
                    let item_end = match len.get() {
                        Some(len) => value_end(item_start, len as usize, seq_end)?,
                        None => seq_end,
                    };

                    let mut next = match self.read_elements(item_start, item_end, depth)? {
                        Flow::Continue(next) => next,
                        halt => return Ok(halt),
                    };
                    if item_end.saturating_sub(next) >= SHORT_HEADER_LEN
                        && self.decoder.decode_tag(self.source, next)? == Tag::ITEM_DELIMITER
                    {
                        next += SHORT_HEADER_LEN;
                    }
                    if len.is_defined() {
                        next = item_end;
                    }
                    offset = next;
                }
            }
        }
    }

    /// Skip the fragments of encapsulated pixel data,
    /// returning the offset after its sequence delimiter.
    fn skip_fragments(&self, value_offset: usize, end: usize) -> Result<usize> {
        debug!("Skipping encapsulated pixel data at offset {}", value_offset);
        let mut offset = value_offset;
        loop {
            match self.item_header(offset, end)? {
                SequenceItemHeader::Item { len } => {
                    let len = len.get().context(MalformedSequenceSnafu {
                        tag: Tag::ITEM,
                        offset,
                    })?;
                    offset = value_end(offset + SHORT_HEADER_LEN, len as usize, end)?;
                }
                SequenceItemHeader::SequenceDelimiter => return Ok(offset + SHORT_HEADER_LEN),
                SequenceItemHeader::ItemDelimiter => {
                    return MalformedSequenceSnafu {
                        tag: Tag::ITEM_DELIMITER,
                        offset,
                    }
                    .fail();
                }
            }
        }
    }

    /// Decode an item or delimiter header which must end before `end`.
    fn item_header(&self, offset: usize, end: usize) -> Result<SequenceItemHeader> {
        let available = end.saturating_sub(offset);
        ensure!(
            available >= SHORT_HEADER_LEN,
            TruncatedHeaderSnafu {
                offset,
                needed: SHORT_HEADER_LEN,
                available,
            }
        );
        self.decoder.decode_item_header(self.source, offset)
    }

    /// Stop at the top level element at `offset`.
    fn boundary(&self, offset: usize) -> Flow {
        match self.decoder.decode_header(self.source, offset) {
            Ok((header, header_len)) => {
                debug!(
                    "Stopped at element {} ({}) at offset {}",
                    header.tag(),
                    header.vr(),
                    offset
                );
                Flow::Halt(Stop::Boundary {
                    header,
                    offset,
                    value_offset: offset + header_len,
                })
            }
            Err(_) => Flow::Halt(Stop::EndOfData { offset }),
        }
    }
}

/// Compute the end of a value of `len` bytes at `offset`,
/// which must not go past `end`.
fn value_end(offset: usize, len: usize, end: usize) -> Result<usize> {
    offset
        .checked_add(len)
        .filter(|&value_end| value_end <= end)
        .context(TruncatedHeaderSnafu {
            offset,
            needed: len,
            available: end.saturating_sub(offset),
        })
}

#[cfg(test)]
mod tests {
    use super::DataSetReader;
    use crate::dataset::{DecodeOptions, Stop};
    use crate::decode::{ExplicitVRLittleEndianDecoder, ImplicitVRLittleEndianDecoder};
    use crate::source::ByteSource;
    use crate::Error;
    use dcm_core::header::{Header, Length};
    use dcm_core::{HasLength, Tag, VR};

    #[rustfmt::skip]
    const IMPLICIT_SEQUENCE: &[u8] = &[
        0x08, 0x00, 0x60, 0x00,     // (0008,0060) Modality
            0x02, 0x00, 0x00, 0x00, // Length: 2
                b'C', b'T',
        0x08, 0x00, 0x40, 0x11,     // (0008,1140) Referenced Image Sequence
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
        0xFE, 0xFF, 0x00, 0xE0,     // (FFFE,E000) Item
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
        0x08, 0x00, 0x50, 0x11,     // (0008,1150) Referenced SOP Class UID
            0x04, 0x00, 0x00, 0x00, // Length: 4
                b'1', b'.', b'2', 0x00,
        0x08, 0x00, 0x55, 0x11,     // (0008,1155) Referenced SOP Instance UID
            0x04, 0x00, 0x00, 0x00, // Length: 4
                b'3', b'.', b'4', 0x00,
        0xFE, 0xFF, 0x0D, 0xE0,     // (FFFE,E00D) Item Delimitation Item
            0x00, 0x00, 0x00, 0x00,
        0xFE, 0xFF, 0xDD, 0xE0,     // (FFFE,E0DD) Sequence Delimitation Item
            0x00, 0x00, 0x00, 0x00,
        0x20, 0x00, 0x0D, 0x00,     // (0020,000D) Study Instance UID
            0x04, 0x00, 0x00, 0x00, // Length: 4
                b'9', b'.', b'9', 0x00,
    ];

    #[test]
    fn undefined_length_sequence() {
        let source = ByteSource::new(IMPLICIT_SEQUENCE);
        let reader = DataSetReader::new(
            source,
            ImplicitVRLittleEndianDecoder::default(),
            DecodeOptions::default(),
        );
        let dataset = reader.read(0).unwrap();
        let tags: Vec<_> = dataset.iter().map(|e| (e.tag(), e.depth())).collect();
        assert_eq!(
            tags,
            vec![
                (Tag(0x0008, 0x0060), 0),
                (Tag(0x0008, 0x1150), 1),
                (Tag(0x0008, 0x1155), 1),
                (Tag(0x0020, 0x000D), 0),
            ]
        );
        assert_eq!(dataset.tags()[1].vr(), VR::UI);
        assert_eq!(dataset.tags()[2].data(), b"3.4\0");
        assert_eq!(
            dataset.stop(),
            &Stop::EndOfData {
                offset: IMPLICIT_SEQUENCE.len()
            }
        );
        assert_eq!(dataset.get(Tag(0x0020, 0x000D)).map(|e| e.offset()), Some(74));
        // nested elements are not top level
        assert_eq!(dataset.get(Tag(0x0008, 0x1155)), None);
    }

    #[rustfmt::skip]
    const EXPLICIT_DEFINED_SEQUENCE: &[u8] = &[
        0x08, 0x00, 0x40, 0x11,     // (0008,1140) Referenced Image Sequence
            b'S', b'Q', 0x00, 0x00,
            0x20, 0x00, 0x00, 0x00, // Length: 32
        0xFE, 0xFF, 0x00, 0xE0,     // (FFFE,E000) Item
            0x0C, 0x00, 0x00, 0x00, // Length: 12
        0x08, 0x00, 0x55, 0x11,     // (0008,1155) Referenced SOP Instance UID
            b'U', b'I', 0x04, 0x00, // Length: 4
                b'3', b'.', b'4', 0x00,
        0xFE, 0xFF, 0x00, 0xE0,     // (FFFE,E000) Item
            0x04, 0x00, 0x00, 0x00, // Length: 4
                0x00, 0x00, 0x00, 0x00, // trailing item content
        0x28, 0x00, 0x10, 0x00,     // (0028,0010) Rows
            b'U', b'S', 0x02, 0x00,
                0x00, 0x02,
        0xE0, 0x7F, 0x10, 0x00,     // (7FE0,0010) Pixel Data
            b'O', b'W', 0x00, 0x00,
            0x04, 0x00, 0x00, 0x00, // Length: 4
                0x01, 0x02, 0x03, 0x04,
    ];

    #[test]
    fn defined_length_sequence() {
        let source = ByteSource::new(EXPLICIT_DEFINED_SEQUENCE);
        let reader = DataSetReader::new(
            source,
            ExplicitVRLittleEndianDecoder,
            DecodeOptions::default(),
        );
        let dataset = reader.read(0).unwrap();
        let tags: Vec<_> = dataset.iter().map(|e| e.tag()).collect();
        assert_eq!(tags, vec![Tag(0x0008, 0x1155), Tag(0x0028, 0x0010)]);
        // resumed exactly after the 32 bytes of the sequence
        assert_eq!(dataset.tags()[1].offset(), 12 + 32 + 8);

        match dataset.stop() {
            Stop::Boundary { header, offset, .. } => {
                assert_eq!(header.tag(), Tag::PIXEL_DATA);
                assert_eq!(header.vr(), VR::OW);
                assert_eq!(header.length(), Length(4));
                assert_eq!(*offset, 54);
            }
            other => panic!("unexpected stop {:?}", other),
        }
        let pixel_data = dataset.boundary_element().expect("should have pixel data");
        assert_eq!(pixel_data.data(), &[0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn capacity_is_a_truncation() {
        let source = ByteSource::new(IMPLICIT_SEQUENCE);
        let reader = DataSetReader::new(
            source,
            ImplicitVRLittleEndianDecoder::default(),
            DecodeOptions::new().max_tags(2),
        );
        let dataset = reader.read(0).unwrap();
        assert_eq!(dataset.len(), 2);
        assert!(dataset.is_truncated());
        // the third element is the second one in the item
        assert_eq!(dataset.stop(), &Stop::CapacityExceeded { offset: 38 });
        assert!(matches!(
            dataset.ensure_complete(),
            Err(Error::CapacityExceeded { capacity: 2, .. })
        ));
    }

    #[test]
    fn nesting_limit() {
        let source = ByteSource::new(IMPLICIT_SEQUENCE);
        let reader = DataSetReader::new(
            source,
            ImplicitVRLittleEndianDecoder::default(),
            DecodeOptions::new().max_depth(0),
        );
        assert!(matches!(
            reader.read(0),
            Err(Error::NestingTooDeep {
                depth: 1,
                offset: 18,
                ..
            })
        ));
    }

    #[rustfmt::skip]
    const MISSING_ITEM: &[u8] = &[
        0x08, 0x00, 0x40, 0x11,     // (0008,1140) Referenced Image Sequence
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
        0x08, 0x00, 0x55, 0x11,     // (0008,1155) where an item was expected
            0x04, 0x00, 0x00, 0x00,
                b'3', b'.', b'4', 0x00,
    ];

    #[test]
    fn element_in_place_of_item() {
        let source = ByteSource::new(MISSING_ITEM);
        let reader = DataSetReader::new(
            source,
            ImplicitVRLittleEndianDecoder::default(),
            DecodeOptions::default(),
        );
        assert!(matches!(
            reader.read(0),
            Err(Error::MalformedSequence { offset: 8, .. })
        ));
    }

    #[rustfmt::skip]
    const ENCAPSULATED_IN_ITEM: &[u8] = &[
        0x88, 0x00, 0x00, 0x02,     // (0088,0200) Icon Image Sequence
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
        0xFE, 0xFF, 0x00, 0xE0,     // (FFFE,E000) Item
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
        0xE0, 0x7F, 0x10, 0x00,     // (7FE0,0010) Pixel Data
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
        0xFE, 0xFF, 0x00, 0xE0,     // (FFFE,E000) Basic offset table
            0x00, 0x00, 0x00, 0x00,
        0xFE, 0xFF, 0x00, 0xE0,     // (FFFE,E000) Fragment
            0x04, 0x00, 0x00, 0x00,
                0xFF, 0xD8, 0xFF, 0xD9,
        0xFE, 0xFF, 0xDD, 0xE0,     // (FFFE,E0DD) end of pixel data
            0x00, 0x00, 0x00, 0x00,
        0x28, 0x00, 0x10, 0x00,     // (0028,0010) Rows, in the item
            0x02, 0x00, 0x00, 0x00,
                0x40, 0x00,
        0xFE, 0xFF, 0x0D, 0xE0,     // (FFFE,E00D) Item Delimitation Item
            0x00, 0x00, 0x00, 0x00,
        0xFE, 0xFF, 0xDD, 0xE0,     // (FFFE,E0DD) Sequence Delimitation Item
            0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn skips_encapsulated_pixel_data_in_items() {
        let source = ByteSource::new(ENCAPSULATED_IN_ITEM);
        let reader = DataSetReader::new(
            source,
            ImplicitVRLittleEndianDecoder::default(),
            DecodeOptions::default(),
        );
        let dataset = reader.read(0).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.tags()[0].tag(), Tag(0x0028, 0x0010));
        assert_eq!(dataset.tags()[0].depth(), 1);
        assert_eq!(
            dataset.stop(),
            &Stop::EndOfData {
                offset: ENCAPSULATED_IN_ITEM.len()
            }
        );
    }

    #[test]
    fn value_past_the_end() {
        let mut data = IMPLICIT_SEQUENCE.to_vec();
        // Study Instance UID claims 0x104 bytes
        let len_at = data.len() - 7;
        data[len_at] = 0x01;
        let source = ByteSource::new(&data);
        let reader = DataSetReader::new(
            source,
            ImplicitVRLittleEndianDecoder::default(),
            DecodeOptions::default(),
        );
        assert!(matches!(
            reader.read(0),
            Err(Error::TruncatedHeader {
                offset: 74,
                needed: 0x104,
                available: 4,
                ..
            })
        ));
    }
}

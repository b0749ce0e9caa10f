//! This module contains the basic data types for interpreting DICOM element headers:
//! the attribute tag, the value length, the element header itself,
//! and the headers of sequence items and delimiters.

use crate::vr::VR;
use snafu::{Backtrace, Snafu};
use std::cmp::Ordering;
use std::fmt;

/// Error type for issues constructing a sequence item header.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SequenceItemHeaderError {
    /// Unexpected header tag.
    /// Only Item (0xFFFE, 0xE000),
    /// Item Delimiter (0xFFFE, 0xE00D),
    /// or Sequence Delimiter (0xFFFE, 0xE0DD)
    /// are admitted.
    #[snafu(display("Unexpected tag {}", tag))]
    UnexpectedTag { tag: Tag, backtrace: Backtrace },
    /// Unexpected delimiter value length.
    /// Must be zero for item delimiters.
    #[snafu(display("Unexpected delimiter length {}", len))]
    UnexpectedDelimiterLength { len: Length, backtrace: Backtrace },
}

type Result<T, E = SequenceItemHeaderError> = std::result::Result<T, E>;

/// Trait for any DICOM entity (element or item) which may have a length.
pub trait HasLength {
    /// Retrieve the value data's length as specified by the data element or
    /// item, in bytes.
    ///
    /// According to the standard, the concrete value size may be undefined,
    /// which can be the case for sequence elements or specific primitive
    /// values.
    fn length(&self) -> Length;

    /// Check whether the value is empty (0 length).
    fn is_empty(&self) -> bool {
        self.length() == Length(0)
    }
}

/// A trait for a data type containing a DICOM header.
pub trait Header: HasLength {
    /// Retrieve the element's tag as a `(group, element)` tuple.
    fn tag(&self) -> Tag;

    /// Check whether this is the header of an item.
    fn is_item(&self) -> bool {
        self.tag() == Tag::ITEM
    }

    /// Check whether this is the header of an item delimiter.
    fn is_item_delimiter(&self) -> bool {
        self.tag() == Tag::ITEM_DELIMITER
    }

    /// Check whether this is the header of a sequence delimiter.
    fn is_sequence_delimiter(&self) -> bool {
        self.tag() == Tag::SEQUENCE_DELIMITER
    }

    /// Check whether this is the header of an encapsulated pixel data.
    fn is_encapsulated_pixeldata(&self) -> bool {
        self.tag() == Tag::PIXEL_DATA && self.length().is_undefined()
    }
}

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// A tag is identified by its `(group, element)` pair.
/// Both `(u16, u16)` and `[u16; 2]` can be converted to this type,
/// as well as the 32-bit composite key `group << 16 | element`
/// which is commonly used to write tags as a single number.
///
/// ```
/// # use dcm_core::Tag;
/// let tag = Tag(0x0020, 0x000D);
/// assert_eq!(tag.composite(), 0x0020_000D);
/// assert_eq!(Tag::from(0x0020_000D_u32), tag);
/// ```
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Item (FFFE,E000)
    pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
    /// Item Delimitation Item (FFFE,E00D)
    pub const ITEM_DELIMITER: Tag = Tag(0xFFFE, 0xE00D);
    /// Sequence Delimitation Item (FFFE,E0DD)
    pub const SEQUENCE_DELIMITER: Tag = Tag(0xFFFE, 0xE0DD);
    /// Pixel Data (7FE0,0010)
    pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Build a tag from its 32-bit composite key (`group << 16 | element`).
    #[inline]
    pub fn from_composite(key: u32) -> Tag {
        Tag((key >> 16) as u16, (key & 0xFFFF) as u16)
    }

    /// Retrieve the 32-bit composite key of this tag (`group << 16 | element`).
    #[inline]
    pub fn composite(self) -> u32 {
        (u32::from(self.0) << 16) | u32::from(self.1)
    }

    /// Whether this tag is a group length pseudo-element (`gggg,0000`).
    #[inline]
    pub fn is_group_length(self) -> bool {
        self.1 == 0x0000
    }

    /// Whether this tag belongs to a private group (odd group number).
    #[inline]
    pub fn is_private(self) -> bool {
        self.0 & 1 == 1
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl PartialEq<[u16; 2]> for Tag {
    fn eq(&self, other: &[u16; 2]) -> bool {
        self.0 == other[0] && self.1 == other[1]
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

impl From<u32> for Tag {
    #[inline]
    fn from(value: u32) -> Tag {
        Tag::from_composite(value)
    }
}

/// A type for representing data set content length, in bytes.
/// An internal value of `0xFFFF_FFFF` represents an undefined
/// (unspecified) length, which would have to be determined
/// with a traversal based on the content's encoding.
///
/// This also means that numeric comparisons
/// do not function the same way as primitive number types:
///
/// Two length of undefined length are not equal.
///
/// ```
/// # use dcm_core::Length;
/// assert_ne!(Length::UNDEFINED, Length::UNDEFINED);
/// ```
///
/// Comparing between at least one undefined length is always `false`.
///
/// ```
/// # use dcm_core::Length;
/// assert!(Length::new(16) < Length::new(64));
/// assert!(!(Length::UNDEFINED < Length::new(64)));
/// assert!(!(Length::UNDEFINED > Length::new(64)));
/// ```
#[derive(Clone, Copy)]
pub struct Length(pub u32);

const UNDEFINED_LEN: u32 = 0xFFFF_FFFF;

impl Length {
    /// A length that is undefined.
    pub const UNDEFINED: Self = Length(UNDEFINED_LEN);

    /// Create a new length value from its internal representation.
    /// This is equivalent to `Length(len)`.
    #[inline]
    pub fn new(len: u32) -> Self {
        Length(len)
    }

    /// Check whether this length is undefined (unknown).
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == UNDEFINED_LEN
    }

    /// Check whether this length is well defined (not undefined).
    #[inline]
    pub fn is_defined(self) -> bool {
        !self.is_undefined()
    }

    /// Fetch the concrete length value, if available.
    /// Returns `None` if it represents an undefined length.
    #[inline]
    pub fn get(self) -> Option<u32> {
        match self.0 {
            UNDEFINED_LEN => None,
            v => Some(v),
        }
    }
}

impl From<u32> for Length {
    #[inline]
    fn from(o: u32) -> Self {
        Length(o)
    }
}

impl PartialEq<Length> for Length {
    fn eq(&self, rhs: &Length) -> bool {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => false,
            (l1, l2) => l1 == l2,
        }
    }
}

impl PartialOrd<Length> for Length {
    fn partial_cmp(&self, rhs: &Length) -> Option<Ordering> {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => None,
            (l1, l2) => Some(l1.cmp(&l2)),
        }
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("Length(Undefined)"),
            l => f.debug_tuple("Length").field(&l).finish(),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("U/L"),
            l => write!(f, "{}", &l),
        }
    }
}

/// A data structure for a data element header, containing
/// a tag, value representation and specified length.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DataElementHeader {
    /// DICOM tag
    pub tag: Tag,
    /// Value Representation
    pub vr: VR,
    /// Element length
    pub len: Length,
}

impl HasLength for DataElementHeader {
    #[inline]
    fn length(&self) -> Length {
        self.len
    }
}

impl Header for DataElementHeader {
    #[inline]
    fn tag(&self) -> Tag {
        self.tag
    }
}

impl DataElementHeader {
    /// Create a new data element header with the given properties.
    /// This is just a trivial constructor.
    #[inline]
    pub fn new<T: Into<Tag>>(tag: T, vr: VR, len: Length) -> DataElementHeader {
        DataElementHeader {
            tag: tag.into(),
            vr,
            len,
        }
    }

    /// Retrieve the element's value representation, which can be unknown.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// Check whether the header suggests the value to be a sequence value:
    /// if the value representation is SQ or the length is undefined.
    #[inline]
    pub fn is_non_primitive(&self) -> bool {
        self.vr == VR::SQ || self.length().is_undefined()
    }
}

impl From<SequenceItemHeader> for DataElementHeader {
    fn from(value: SequenceItemHeader) -> DataElementHeader {
        DataElementHeader {
            tag: value.tag(),
            vr: VR::UN,
            len: value.length(),
        }
    }
}

/// Data type for describing a sequence item data element.
/// If the element represents an item, it will also contain
/// the specified length.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SequenceItemHeader {
    /// The cursor contains an item.
    Item {
        /// the length of the item in bytes (can be 0xFFFFFFFF if undefined)
        len: Length,
    },
    /// The cursor read an item delimiter.
    /// The element ends here and should not be read any further.
    ItemDelimiter,
    /// The cursor read a sequence delimiter.
    /// The element ends here and should not be read any further.
    SequenceDelimiter,
}

impl SequenceItemHeader {
    /// Create a sequence item header using the element's raw properties.
    /// An error can be raised if the given properties do not relate to a
    /// sequence item, a sequence item delimiter or a sequence delimiter.
    pub fn new<T: Into<Tag>>(tag: T, len: Length) -> Result<SequenceItemHeader> {
        match tag.into() {
            Tag::ITEM => Ok(SequenceItemHeader::Item { len }),
            Tag::ITEM_DELIMITER => {
                // delimiters should not have a positive length
                if len != Length(0) {
                    UnexpectedDelimiterLengthSnafu { len }.fail()
                } else {
                    Ok(SequenceItemHeader::ItemDelimiter)
                }
            }
            Tag::SEQUENCE_DELIMITER => Ok(SequenceItemHeader::SequenceDelimiter),
            tag => UnexpectedTagSnafu { tag }.fail(),
        }
    }
}

impl HasLength for SequenceItemHeader {
    #[inline]
    fn length(&self) -> Length {
        match *self {
            SequenceItemHeader::Item { len } => len,
            SequenceItemHeader::ItemDelimiter | SequenceItemHeader::SequenceDelimiter => Length(0),
        }
    }
}

impl Header for SequenceItemHeader {
    #[inline]
    fn tag(&self) -> Tag {
        match *self {
            SequenceItemHeader::Item { .. } => Tag::ITEM,
            SequenceItemHeader::ItemDelimiter => Tag::ITEM_DELIMITER,
            SequenceItemHeader::SequenceDelimiter => Tag::SEQUENCE_DELIMITER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_composite_key() {
        let tag = Tag(0x0008, 0x0018);
        assert_eq!(tag.composite(), 0x0008_0018);
        assert_eq!(Tag::from_composite(0x7FE0_0010), Tag::PIXEL_DATA);
        assert_eq!(Tag::from(0xFFFE_E0DD_u32), Tag::SEQUENCE_DELIMITER);
        assert_eq!(Tag::from_composite(0), Tag(0, 0));
    }

    #[test]
    fn tag_display() {
        assert_eq!(Tag(0x0020, 0x000D).to_string(), "(0020,000D)");
        assert_eq!(format!("{:?}", Tag(0x0002, 0x0010)), "Tag(0x0002, 0x0010)");
    }

    #[test]
    fn undefined_length_semantics() {
        assert!(Length::UNDEFINED.is_undefined());
        assert_eq!(Length::UNDEFINED.get(), None);
        assert_eq!(Length(12).get(), Some(12));
        assert!(Length(0xFFFF_FFFF).is_undefined());
        assert!(Length(0).is_defined());
        assert_eq!(Length::UNDEFINED.to_string(), "U/L");
    }

    #[test]
    fn item_headers() {
        let item = SequenceItemHeader::new(Tag::ITEM, Length(10)).unwrap();
        assert!(item.is_item());
        assert_eq!(item.length(), Length(10));

        let delim = SequenceItemHeader::new((0xFFFE, 0xE00D), Length(0)).unwrap();
        assert_eq!(delim, SequenceItemHeader::ItemDelimiter);

        let end = SequenceItemHeader::new((0xFFFE, 0xE0DD), Length(0)).unwrap();
        assert!(end.is_sequence_delimiter());

        assert!(matches!(
            SequenceItemHeader::new((0x0008, 0x0018), Length(0)),
            Err(SequenceItemHeaderError::UnexpectedTag { .. })
        ));
        assert!(matches!(
            SequenceItemHeader::new(Tag::ITEM_DELIMITER, Length(4)),
            Err(SequenceItemHeaderError::UnexpectedDelimiterLength { .. })
        ));
    }

    #[test]
    fn non_primitive_headers() {
        let sq = DataElementHeader::new((0x0008, 0x1140), VR::SQ, Length(0));
        assert!(sq.is_non_primitive());
        let un = DataElementHeader::new((0x0009, 0x1001), VR::UN, Length::UNDEFINED);
        assert!(un.is_non_primitive());
        let ui = DataElementHeader::new((0x0008, 0x0018), VR::UI, Length(4));
        assert!(!ui.is_non_primitive());
        let px = DataElementHeader::new(Tag::PIXEL_DATA, VR::OB, Length::UNDEFINED);
        assert!(px.is_encapsulated_pixeldata());
    }
}

//! This module contains the decoded form of a DICOM data set
//! and the options which drive its decoding.
//!
//! Decoding produces a flat list of [`RawElement`]s in the order
//! in which they appear in the file.
//! Elements nested in sequence items come right after the elements
//! preceding their sequence, with a greater [depth](RawElement::depth).
//! Sequence elements themselves are not listed.
//! Element values are not copied: each element borrows its value
//! from the [`ByteSource`] it was decoded from.

use crate::error::{CapacityExceededSnafu, Result};
use crate::source::ByteSource;
use dcm_core::header::{DataElementHeader, HasLength, Header, Length};
use dcm_core::{Tag, VR};
use snafu::ensure;

pub mod read;

pub use self::read::{read_dataset, DataSetReader};

/// The set of options for decoding a data set.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct DecodeOptions {
    /// the maximum number of elements to collect
    pub max_tags: usize,
    /// the maximum depth of nested sequence items
    pub max_depth: u32,
    /// the group at which top level decoding stops, such as Pixel Data
    pub stop_group: u16,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            max_tags: 4096,
            max_depth: 64,
            stop_group: 0x7FE0,
        }
    }
}

impl DecodeOptions {
    /// Create the default set of options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the maximum number of elements to collect.
    pub fn max_tags(mut self, max_tags: usize) -> Self {
        self.max_tags = max_tags;
        self
    }

    /// Replace the maximum sequence nesting depth.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Replace the group at which top level decoding stops.
    pub fn stop_group(mut self, stop_group: u16) -> Self {
        self.stop_group = stop_group;
        self
    }
}

/// A decoded data element, with its value borrowed from the byte source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawElement<'s> {
    header: DataElementHeader,
    offset: usize,
    data: &'s [u8],
    depth: u32,
}

impl<'s> RawElement<'s> {
    pub(crate) fn new(header: DataElementHeader, offset: usize, data: &'s [u8], depth: u32) -> Self {
        RawElement {
            header,
            offset,
            data,
            depth,
        }
    }

    /// The element header.
    #[inline]
    pub fn header(&self) -> &DataElementHeader {
        &self.header
    }

    /// The value representation, either explicit
    /// or resolved through the attribute dictionary.
    #[inline]
    pub fn vr(&self) -> VR {
        self.header.vr
    }

    /// The size of the value in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.header.len.0
    }

    /// The offset of the value in the byte source.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The raw value bytes.
    #[inline]
    pub fn data(&self) -> &'s [u8] {
        self.data
    }

    /// The sequence nesting depth, 0 for top level elements.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl HasLength for RawElement<'_> {
    #[inline]
    fn length(&self) -> Length {
        self.header.len
    }
}

impl Header for RawElement<'_> {
    #[inline]
    fn tag(&self) -> Tag {
        self.header.tag
    }
}

/// The reason why data set decoding stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stop {
    /// All data was decoded.
    /// Fewer than 8 bytes remained at `offset`.
    EndOfData {
        /// where decoding ended
        offset: usize,
    },
    /// A top level element at or beyond the stop group,
    /// or a stray delimiter, was found.
    /// The element was not decoded.
    Boundary {
        /// the header of the boundary element
        header: DataElementHeader,
        /// the offset of the boundary element's header
        offset: usize,
        /// the offset of the boundary element's value
        value_offset: usize,
    },
    /// The maximum number of elements was collected
    /// before the end of the data set.
    CapacityExceeded {
        /// the offset of the first element left out
        offset: usize,
    },
}

/// A decoded DICOM data set.
#[derive(Debug, Clone)]
pub struct DataSet<'s> {
    source: ByteSource<'s>,
    elements: Vec<RawElement<'s>>,
    stop: Stop,
    capacity: usize,
}

impl<'s> DataSet<'s> {
    pub(crate) fn new(
        source: ByteSource<'s>,
        elements: Vec<RawElement<'s>>,
        stop: Stop,
        capacity: usize,
    ) -> Self {
        DataSet {
            source,
            elements,
            stop,
            capacity,
        }
    }

    /// The decoded elements, in file order.
    #[inline]
    pub fn tags(&self) -> &[RawElement<'s>] {
        &self.elements
    }

    /// Take the decoded elements.
    pub fn into_tags(self) -> Vec<RawElement<'s>> {
        self.elements
    }

    /// The number of decoded elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether no elements were decoded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the decoded elements.
    pub fn iter(&self) -> std::slice::Iter<'_, RawElement<'s>> {
        self.elements.iter()
    }

    /// Why decoding stopped.
    #[inline]
    pub fn stop(&self) -> &Stop {
        &self.stop
    }

    /// Whether decoding stopped because the element capacity was reached.
    pub fn is_truncated(&self) -> bool {
        matches!(self.stop, Stop::CapacityExceeded { .. })
    }

    /// Fail with [`CapacityExceeded`](crate::Error::CapacityExceeded)
    /// if the data set was truncated.
    pub fn ensure_complete(&self) -> Result<()> {
        ensure!(
            !self.is_truncated(),
            CapacityExceededSnafu {
                capacity: self.capacity
            }
        );
        Ok(())
    }

    /// Obtain the element at which decoding stopped, such as Pixel Data.
    ///
    /// Returns `None` if decoding did not stop at a boundary,
    /// if the element's length is undefined,
    /// or if its value extends past the end of the data.
    pub fn boundary_element(&self) -> Option<RawElement<'s>> {
        match self.stop {
            Stop::Boundary {
                header,
                value_offset,
                ..
            } => {
                let len = header.length().get()?;
                let data = self.source.get(value_offset, len as usize)?;
                Some(RawElement::new(header, value_offset, data, 0))
            }
            _ => None,
        }
    }

    /// Find a top level element by tag.
    ///
    /// Unlike [`get_tag`](crate::access::get_tag),
    /// elements nested in sequences are not considered.
    pub fn get(&self, tag: impl Into<Tag>) -> Option<&RawElement<'s>> {
        let tag = tag.into();
        self.elements
            .iter()
            .find(|e| e.depth == 0 && e.tag() == tag)
    }
}

impl<'a, 's> IntoIterator for &'a DataSet<'s> {
    type Item = &'a RawElement<'s>;
    type IntoIter = std::slice::Iter<'a, RawElement<'s>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

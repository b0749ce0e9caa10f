//! The immutable byte buffer that every decoding step reads from.

use crate::error::{Result, TruncatedHeaderSnafu};
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcm_core::Tag;
use snafu::OptionExt;

/// A read-only view over the full contents of a DICOM file.
///
/// The source is never modified by the decoder.
/// Decoding state is threaded through as plain byte offsets,
/// and every read is checked against the length of the buffer,
/// failing with [`TruncatedHeader`](crate::Error::TruncatedHeader)
/// instead of reading out of bounds.
///
/// Elements decoded from a source borrow their payload from it,
/// so the source's bytes must outlive them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteSource<'s> {
    bytes: &'s [u8],
}

impl<'s> ByteSource<'s> {
    /// Wrap a byte buffer.
    pub fn new(bytes: &'s [u8]) -> Self {
        ByteSource { bytes }
    }

    /// The total length of the buffer in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The full buffer.
    #[inline]
    pub fn as_bytes(&self) -> &'s [u8] {
        self.bytes
    }

    /// The number of bytes from `offset` to the end of the buffer.
    #[inline]
    pub fn remaining(&self, offset: usize) -> usize {
        self.bytes.len().saturating_sub(offset)
    }

    /// Obtain `len` bytes starting at `offset`, if they are all in bounds.
    pub fn get(&self, offset: usize, len: usize) -> Option<&'s [u8]> {
        let end = offset.checked_add(len)?;
        self.bytes.get(offset..end)
    }

    /// Obtain `len` bytes starting at `offset`,
    /// failing if they extend past the end of the buffer.
    pub fn slice(&self, offset: usize, len: usize) -> Result<&'s [u8]> {
        self.get(offset, len).context(TruncatedHeaderSnafu {
            offset,
            needed: len,
            available: self.remaining(offset),
        })
    }

    /// Read a little endian 16-bit unsigned integer at `offset`.
    pub fn read_u16(&self, offset: usize) -> Result<u16> {
        self.slice(offset, 2).map(LittleEndian::read_u16)
    }

    /// Read a little endian 32-bit unsigned integer at `offset`.
    pub fn read_u32(&self, offset: usize) -> Result<u32> {
        self.slice(offset, 4).map(LittleEndian::read_u32)
    }

    /// Read a little endian attribute tag at `offset`.
    pub fn read_tag(&self, offset: usize) -> Result<Tag> {
        let buf = self.slice(offset, 4)?;
        Ok(Tag(
            LittleEndian::read_u16(&buf[0..2]),
            LittleEndian::read_u16(&buf[2..4]),
        ))
    }

    /// Read the group number at `offset` without failing.
    pub(crate) fn peek_group(&self, offset: usize) -> Option<u16> {
        self.get(offset, 2).map(LittleEndian::read_u16)
    }
}

impl<'s> From<&'s [u8]> for ByteSource<'s> {
    fn from(bytes: &'s [u8]) -> Self {
        ByteSource::new(bytes)
    }
}

impl<'s> From<&'s Vec<u8>> for ByteSource<'s> {
    fn from(bytes: &'s Vec<u8>) -> Self {
        ByteSource::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::ByteSource;
    use crate::Error;
    use dcm_core::Tag;

    #[test]
    fn reads_within_bounds() {
        let data = [0x08, 0x00, 0x18, 0x00, 0x04, 0x00, 0x00, 0x00];
        let source = ByteSource::new(&data);
        assert_eq!(source.read_tag(0).unwrap(), Tag(0x0008, 0x0018));
        assert_eq!(source.read_u32(4).unwrap(), 4);
        assert_eq!(source.read_u16(6).unwrap(), 0);
        assert_eq!(source.slice(8, 0).unwrap(), &[] as &[u8]);
        assert_eq!(source.remaining(3), 5);
        assert_eq!(source.remaining(100), 0);
    }

    #[test]
    fn fails_past_the_end() {
        let data = [0x08, 0x00, 0x18];
        let source = ByteSource::new(&data);
        match source.read_u32(0) {
            Err(Error::TruncatedHeader {
                offset,
                needed,
                available,
                ..
            }) => {
                assert_eq!(offset, 0);
                assert_eq!(needed, 4);
                assert_eq!(available, 3);
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert!(source.get(usize::MAX, 2).is_none());
        assert!(source.slice(2, usize::MAX).is_err());
        assert_eq!(source.peek_group(2), None);
    }
}

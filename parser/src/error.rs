//! Crate-level error types.
use dcm_core::Tag;
use snafu::{Backtrace, Snafu};
use std::path::PathBuf;

/// An error which may occur while loading or decoding a DICOM file.
///
/// Every decoding failure is reported for the file at hand only:
/// callers processing a batch of files are expected
/// to log the error and carry on with the next file.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The content does not look like DICOM data.
    #[snafu(display("Not a DICOM file"))]
    NotDicom { backtrace: Backtrace },

    /// The file declares a transfer syntax which cannot be decoded,
    /// such as Explicit VR Big Endian.
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    UnsupportedTransferSyntax { uid: String, backtrace: Backtrace },

    /// An item was expected inside of a sequence,
    /// but a different header was found.
    #[snafu(display(
        "Malformed sequence: expected item at offset {} but found {}",
        offset,
        tag
    ))]
    MalformedSequence {
        tag: Tag,
        offset: usize,
        backtrace: Backtrace,
    },

    /// A header or value would extend past the end of the data.
    #[snafu(display(
        "Truncated data at offset {}: {} bytes needed, {} available",
        offset,
        needed,
        available
    ))]
    TruncatedHeader {
        offset: usize,
        needed: usize,
        available: usize,
        backtrace: Backtrace,
    },

    /// The data set holds more elements than the decoder was allowed to collect.
    #[snafu(display("Data set exceeds the capacity of {} elements", capacity))]
    CapacityExceeded {
        capacity: usize,
        backtrace: Backtrace,
    },

    /// Sequences are nested deeper than the decoder was allowed to follow.
    #[snafu(display("Sequence nesting of depth {} at offset {} is too deep", depth, offset))]
    NestingTooDeep {
        depth: u32,
        offset: usize,
        backtrace: Backtrace,
    },

    /// The file could not be opened.
    #[snafu(display("Could not open file '{}'", filename.display()))]
    OpenFile {
        filename: PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },

    /// The size of the file could not be determined.
    #[snafu(display("Could not read metadata of file '{}'", filename.display()))]
    ReadMetadata {
        filename: PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },

    /// The contents of the file could not be read.
    #[snafu(display("Could not read file '{}'", filename.display()))]
    ReadFile {
        filename: PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
}

/// Type alias for a result from this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

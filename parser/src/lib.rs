#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

//! This crate decodes DICOM files held in memory
//! into a flat list of data elements.
//!
//! Decoding goes through the following layers:
//!
//! - [`source`]: the immutable, bounds-checked byte buffer
//!   that every other layer reads from;
//! - [`decode`]: element header decoders
//!   for Implicit VR Little Endian and Explicit VR Little Endian;
//! - [`meta`]: the preamble, magic code and file meta group,
//!   which determine the transfer syntax;
//! - [`dataset`]: the data set decoder,
//!   which recursively follows sequences of defined or undefined length.
//!
//! [`access`] offers typed access to the decoded values,
//! [`detect`] guesses whether some data is DICOM,
//! and [`file`] loads files into memory.
//!
//! Big endian transfer syntaxes are not supported.
//!
//! # Example
//!
//! ```no_run
//! use dcm_parser::{open_file, DecodeOptions, Tag};
//! use dcm_parser::access::{tag_as_string, trim};
//!
//! let file = open_file("image.dcm")?;
//! let decoded = file.decode(DecodeOptions::default())?;
//! println!("SOP Instance UID: {}", decoded.meta.media_storage_sop_instance_uid);
//! if let Some(study) = decoded.dataset.get(Tag(0x0020, 0x000D)) {
//!     println!("Study Instance UID: {}", trim(&tag_as_string(study)));
//! }
//! # Ok::<(), dcm_parser::Error>(())
//! ```

pub mod access;
pub mod dataset;
pub mod decode;
pub mod detect;
pub mod error;
pub mod file;
pub mod meta;
pub mod source;

pub use crate::dataset::{read_dataset, DataSet, DecodeOptions, RawElement, Stop};
pub use crate::detect::is_dicom;
pub use crate::error::{Error, Result};
pub use crate::file::{open_file, FileSource};
pub use crate::meta::{decode_meta, DicomMeta};
pub use crate::source::ByteSource;
pub use dcm_core::{Tag, TransferSyntax, VR};

use snafu::ensure;

/// A decoded DICOM file.
#[derive(Debug, Clone)]
pub struct DecodedFile<'s> {
    /// The file meta information.
    pub meta: DicomMeta,
    /// The data set, borrowing from the byte source.
    pub dataset: DataSet<'s>,
}

/// Decode a whole DICOM file from its bytes.
///
/// The data is first checked with [`is_dicom`],
/// then the file meta group is decoded,
/// and finally the data set in the declared transfer syntax.
pub fn decode_source(source: ByteSource<'_>, options: DecodeOptions) -> Result<DecodedFile<'_>> {
    ensure!(is_dicom(source), error::NotDicomSnafu);
    let (meta, offset) = decode_meta(source)?;
    let dataset = read_dataset(source, offset, &meta, options)?;
    Ok(DecodedFile { meta, dataset })
}

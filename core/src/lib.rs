#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of the decoder, containing the concepts
//! and data structures shared by every layer of DICOM file decoding.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the data types of a DICOM element header:
//!   the attribute tag, the value length, and the headers of
//!   sequence items and delimiters.
//! - [`vr`] holds the value representation table.
//! - [`dictionary`] describes the behavior of DICOM data dictionaries,
//!   which translate tags to an entry containing the attribute's
//!   alias and value representation.
//! - [`transfer_syntax`] enumerates the transfer syntaxes
//!   known to the decoder.

pub mod dictionary;
pub mod header;
pub mod transfer_syntax;
pub mod vr;

pub use dictionary::{resolve_implicit_vr, DataDictionary, DataDictionaryEntry};
pub use header::{DataElementHeader, HasLength, Header, Length, SequenceItemHeader, Tag};
pub use transfer_syntax::TransferSyntax;
pub use vr::{is_character_string_vr, is_long_length_vr, is_valid_vr, VR};

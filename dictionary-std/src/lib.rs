//! This crate implements the standard DICOM attribute dictionary
//! used to resolve value representations in implicit VR data sets.
//!
//! - [`data_element`] holds the run-time dictionary,
//!   provided as a lazily indexed singleton behind the unit type
//!   [`StandardDataDictionary`].
//!   Beyond the attribute table, it recognizes repeating groups
//!   (such as overlays `60xx`), private creator elements,
//!   and generic group length elements.
//! - [`tags`] maps attribute keywords to DICOM tags at compile time.
//!
//! The records are collected from [DICOM PS3.6].
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html
pub mod data_element;
pub mod tags;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};

//! This module contains the concept of a DICOM data dictionary.
//!
//! A data dictionary maps attribute tags to an entry
//! holding the attribute's keyword and _typical_ value representation.
//! The decoder consults it only to resolve value representations
//! of elements encoded in implicit VR.

pub mod stub;

pub use self::stub::StubDataDictionary;

use crate::header::Tag;
use crate::vr::VR;
use std::fmt::Debug;

/// The range of tags covered by a dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagRange {
    /// Only one specific tag
    Single(Tag),
    /// The two rightmost digits of the _group_ portion are open:
    /// `(GGxx,EEEE)`
    Group100(Tag),
    /// The two rightmost digits of the _element_ portion are open:
    /// `(GGGG,EExx)`
    Element100(Tag),
    /// Generic group length tag,
    /// refers to any attribute of the form `(GGGG,0000)`
    GroupLength,
    /// Generic private creator tag,
    /// refers to any tag from (GGGG,0010) to (GGGG,00FF),
    /// where `GGGG` is an odd number
    PrivateCreator,
}

impl TagRange {
    /// Retrieve the inner tag representation of this range.
    ///
    /// Open components are zeroed out.
    /// Returns a zeroed out tag
    /// (equivalent to _FileMetaInformationGroupLength_)
    /// if the tag range is `GroupLength`,
    /// and `(0009,0010)` if it is `PrivateCreator`.
    pub fn inner(self) -> Tag {
        match self {
            TagRange::Single(tag) => tag,
            TagRange::Group100(tag) => tag,
            TagRange::Element100(tag) => tag,
            TagRange::GroupLength => Tag(0x0000, 0x0000),
            TagRange::PrivateCreator => Tag(0x0009, 0x0010),
        }
    }

    /// Check whether the given tag falls within this range.
    pub fn contains(self, tag: Tag) -> bool {
        match self {
            TagRange::Single(t) => t == tag,
            TagRange::Group100(t) => t == Tag(tag.0 & 0xFF00, tag.1),
            TagRange::Element100(t) => t == Tag(tag.0, tag.1 & 0xFF00),
            TagRange::GroupLength => tag.is_group_length(),
            TagRange::PrivateCreator => {
                tag.is_private() && (0x0010..=0x00FF).contains(&tag.element())
            }
        }
    }
}

/// Type trait for a dictionary of DICOM attributes.
///
/// The methods herein have no generic parameters,
/// so as to enable being used as a trait object.
pub trait DataDictionary: Debug {
    /// The type of the dictionary entry.
    type Entry: DataDictionaryEntry;

    /// Fetch an entry by its usual alias (e.g. "PatientName" or "SOPInstanceUID").
    /// Aliases are usually case sensitive and not separated by spaces.
    fn by_name(&self, name: &str) -> Option<&Self::Entry>;

    /// Fetch an entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry>;
}

/// The dictionary entry data type, representing a DICOM attribute.
pub trait DataDictionaryEntry {
    /// The full possible tag range of the atribute,
    /// which this dictionary entry can represent.
    fn tag_range(&self) -> TagRange;

    /// The alias of the attribute, with no spaces, usually in UpperCamelCase.
    fn alias(&self) -> &str;

    /// The _typical_  value representation of the attribute.
    fn vr(&self) -> VR;
}

/// A data type for a dictionary entry with a string slice for its alias.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct DataDictionaryEntryRef<'a> {
    /// The attribute tag range
    pub tag: TagRange,
    /// The alias of the attribute, with no spaces, usually InCapitalizedCamelCase
    pub alias: &'a str,
    /// The _typical_ value representation of the attribute
    pub vr: VR,
}

impl<'a> DataDictionaryEntry for DataDictionaryEntryRef<'a> {
    fn tag_range(&self) -> TagRange {
        self.tag
    }

    fn alias(&self) -> &str {
        self.alias
    }

    fn vr(&self) -> VR {
        self.vr
    }
}

impl<D: DataDictionary + ?Sized> DataDictionary for &D {
    type Entry = D::Entry;

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        (**self).by_name(name)
    }

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        (**self).by_tag(tag)
    }
}

/// Resolve the value representation of an element encoded in implicit VR.
///
/// Group length elements (`gggg,0000`) are always `UL`.
/// Otherwise the dictionary is consulted,
/// falling back to `UN` when the tag is not known.
pub fn resolve_implicit_vr<D>(dict: &D, group: u16, element: u16) -> VR
where
    D: DataDictionary + ?Sized,
{
    if element == 0x0000 {
        return VR::UL;
    }
    dict.by_tag(Tag(group, element))
        .map(|entry| entry.vr())
        .unwrap_or(VR::UN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct OneEntry(DataDictionaryEntryRef<'static>);

    impl DataDictionary for OneEntry {
        type Entry = DataDictionaryEntryRef<'static>;

        fn by_name(&self, name: &str) -> Option<&Self::Entry> {
            Some(&self.0).filter(|e| e.alias == name)
        }

        fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
            Some(&self.0).filter(|e| e.tag.contains(tag))
        }
    }

    #[test]
    fn tag_ranges() {
        assert!(TagRange::Group100(Tag(0x6000, 0x3000)).contains(Tag(0x60EE, 0x3000)));
        assert!(!TagRange::Group100(Tag(0x6000, 0x3000)).contains(Tag(0x6100, 0x3000)));
        assert!(TagRange::Element100(Tag(0x0020, 0x3100)).contains(Tag(0x0020, 0x31FF)));
        assert!(TagRange::GroupLength.contains(Tag(0x7FE0, 0x0000)));
        assert!(TagRange::PrivateCreator.contains(Tag(0x0009, 0x0010)));
        assert!(!TagRange::PrivateCreator.contains(Tag(0x0008, 0x0010)));
        assert!(!TagRange::PrivateCreator.contains(Tag(0x0009, 0x1010)));
    }

    #[test]
    fn implicit_vr_resolution() {
        let dict = OneEntry(DataDictionaryEntryRef {
            tag: TagRange::Single(Tag(0x0010, 0x0010)),
            alias: "PatientName",
            vr: VR::PN,
        });
        assert_eq!(resolve_implicit_vr(&dict, 0x0010, 0x0010), VR::PN);
        // group length is forced to UL, even when the dictionary does not know it
        assert_eq!(resolve_implicit_vr(&dict, 0x0010, 0x0000), VR::UL);
        // unknown falls back to UN
        assert_eq!(resolve_implicit_vr(&dict, 0x0011, 0x1010), VR::UN);
        assert_eq!(resolve_implicit_vr(&StubDataDictionary, 0x0010, 0x0010), VR::UN);
        assert_eq!(
            dict.by_name("PatientName").map(|e| e.tag_range()),
            Some(TagRange::Single(Tag(0x0010, 0x0010)))
        );
    }
}

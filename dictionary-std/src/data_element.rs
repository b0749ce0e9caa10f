//! The standard attribute dictionary, as consulted by the decoder.

use crate::tags::ENTRIES;
use dcm_core::dictionary::{DataDictionary, DataDictionaryEntryRef, TagRange::*};
use dcm_core::header::Tag;
use dcm_core::VR;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::fmt;

static REGISTRY: Lazy<StandardDataDictionaryRegistry> = Lazy::new(build_registry);

/// Retrieve the process-wide standard dictionary registry.
///
/// The registry is built on first access and is never modified afterwards,
/// so it can be shared freely across threads.
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &REGISTRY
}

type EntryRef = &'static DataDictionaryEntryRef<'static>;

/// The indexed form of the attribute table.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    /// keyword → entry
    by_name: HashMap<&'static str, EntryRef>,
    /// tag → entry; repeating entries are keyed with the open digits zeroed
    by_tag: HashMap<Tag, EntryRef>,
    /// repeating groups `(ggxx,eeee)`, with `xx` zeroed
    repeating_ggxx: HashSet<Tag>,
    /// repeating elements `(gggg,eexx)`, with `xx` zeroed
    repeating_eexx: HashSet<Tag>,
}

impl StandardDataDictionaryRegistry {
    fn with_capacity(capacity: usize) -> Self {
        StandardDataDictionaryRegistry {
            by_name: HashMap::with_capacity(capacity),
            by_tag: HashMap::with_capacity(capacity),
            repeating_ggxx: HashSet::new(),
            repeating_eexx: HashSet::new(),
        }
    }

    fn insert(&mut self, entry: EntryRef) {
        self.by_name.insert(entry.alias, entry);
        self.by_tag.insert(entry.tag.inner(), entry);
        match entry.tag {
            Group100(tag) => {
                self.repeating_ggxx.insert(tag);
            }
            Element100(tag) => {
                self.repeating_eexx.insert(tag);
            }
            _ => {}
        }
    }

    /// The number of attributes in the registry.
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    /// Whether the registry holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }

    fn lookup(&self, tag: Tag) -> Option<EntryRef> {
        if let Some(&entry) = self.by_tag.get(&tag) {
            return Some(entry);
        }

        let group_open = Tag(tag.group() & 0xFF00, tag.element());
        if self.repeating_ggxx.contains(&group_open) {
            return self.by_tag.get(&group_open).copied();
        }
        let element_open = Tag(tag.group(), tag.element() & 0xFF00);
        if self.repeating_eexx.contains(&element_open) {
            return self.by_tag.get(&element_open).copied();
        }

        if PRIVATE_CREATOR_ENTRY.tag.contains(tag) {
            return Some(&PRIVATE_CREATOR_ENTRY);
        }
        if tag.is_group_length() {
            return Some(&GROUP_LENGTH_ENTRY);
        }
        None
    }
}

static GROUP_LENGTH_ENTRY: DataDictionaryEntryRef<'static> = DataDictionaryEntryRef {
    tag: GroupLength,
    alias: "GenericGroupLength",
    vr: VR::UL,
};

static PRIVATE_CREATOR_ENTRY: DataDictionaryEntryRef<'static> = DataDictionaryEntryRef {
    tag: PrivateCreator,
    alias: "PrivateCreator",
    vr: VR::LO,
};

/// The standard data element dictionary.
///
/// A unit type in front of the lazily built [`registry`].
/// Besides the attributes in [`tags`](crate::tags),
/// it resolves any private creator element `(odd,0010..00FF)` to `LO`
/// and any group length element `(gggg,0000)` to `UL`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl DataDictionary for StandardDataDictionary {
    type Entry = DataDictionaryEntryRef<'static>;

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        registry().by_name.get(name).copied()
    }

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        registry().lookup(tag)
    }
}

impl fmt::Display for StandardDataDictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Standard DICOM Data Dictionary")
    }
}

fn build_registry() -> StandardDataDictionaryRegistry {
    let mut registry = StandardDataDictionaryRegistry::with_capacity(ENTRIES.len() + 1);
    for entry in ENTRIES {
        registry.insert(entry);
    }
    registry
        .by_name
        .insert(GROUP_LENGTH_ENTRY.alias, &GROUP_LENGTH_ENTRY);
    registry
}

#[cfg(test)]
mod tests {
    use super::{registry, StandardDataDictionary};
    use crate::tags;
    use dcm_core::dictionary::{DataDictionary, DataDictionaryEntryRef, TagRange::*};
    use dcm_core::{resolve_implicit_vr, Tag, VR};

    #[test]
    fn smoke_test() {
        let dict = StandardDataDictionary;

        assert_eq!(
            dict.by_name("PatientName"),
            Some(&DataDictionaryEntryRef {
                tag: Single(Tag(0x0010, 0x0010)),
                alias: "PatientName",
                vr: VR::PN,
            })
        );

        let study = dict
            .by_tag(tags::STUDY_INSTANCE_UID)
            .expect("Study Instance UID should exist");
        assert_eq!(study.alias, "StudyInstanceUID");
        assert_eq!(study.vr, VR::UI);

        let pixel_data = dict
            .by_tag(Tag(0x7FE0, 0x0010))
            .expect("Pixel Data attribute should exist");
        assert_eq!(pixel_data.tag, Single(tags::PIXEL_DATA));
        assert_eq!(pixel_data.vr, VR::OW);
    }

    #[test]
    fn repeating_groups() {
        let dict = StandardDataDictionary;

        let overlay_data = dict
            .by_tag(Tag(0x6002, 0x3000))
            .expect("Repeated Overlay Data attribute should exist");
        assert_eq!(overlay_data.tag, Group100(tags::OVERLAY_DATA));
        assert_eq!(overlay_data.alias, "OverlayData");
        assert_eq!(overlay_data.vr, VR::OW);

        assert_eq!(
            dict.by_tag(Tag(0x50FE, 0x0005)).map(|e| e.alias),
            Some("CurveDimensions")
        );
        // 61xx is not an overlay group
        assert_eq!(dict.by_tag(Tag(0x6100, 0x3000)), None);
    }

    #[test]
    fn group_length_and_private_creator() {
        let dict = StandardDataDictionary;

        // explicitly registered group length
        assert_eq!(
            dict.by_tag(tags::FILE_META_INFORMATION_GROUP_LENGTH)
                .map(|e| e.tag),
            Some(Single(Tag(0x0002, 0x0000)))
        );
        assert_eq!(
            dict.by_tag(Tag(0x0028, 0x0000)),
            Some(&DataDictionaryEntryRef {
                tag: GroupLength,
                alias: "GenericGroupLength",
                vr: VR::UL,
            })
        );
        assert_eq!(
            dict.by_name("GenericGroupLength").map(|e| e.vr),
            Some(VR::UL)
        );

        for tag in [Tag(0x0009, 0x0010), Tag(0x0029, 0x0011), Tag(0x00ED, 0x00FF)] {
            assert_eq!(dict.by_tag(tag).map(|e| (e.alias, e.vr)), Some(("PrivateCreator", VR::LO)));
        }
        // private data elements are not known
        assert_eq!(dict.by_tag(Tag(0x0029, 0x1010)), None);
    }

    #[test]
    fn resolves_implicit_vr() {
        let dict = StandardDataDictionary;
        assert_eq!(resolve_implicit_vr(&dict, 0x0020, 0x000D), VR::UI);
        assert_eq!(resolve_implicit_vr(&dict, 0x0028, 0x0010), VR::US);
        assert_eq!(resolve_implicit_vr(&dict, 0x0008, 0x1140), VR::SQ);
        assert_eq!(resolve_implicit_vr(&dict, 0x0008, 0x0000), VR::UL);
        assert_eq!(resolve_implicit_vr(&dict, 0x0009, 0x0010), VR::LO);
        assert_eq!(resolve_implicit_vr(&dict, 0x0009, 0x1001), VR::UN);
    }

    #[test]
    fn sequences_across_modules() {
        let dict = StandardDataDictionary;
        for (group, element, alias) in [
            (0x0004, 0x1220, "DirectoryRecordSequence"),
            (0x0008, 0x1115, "ReferencedSeriesSequence"),
            (0x0008, 0x1199, "ReferencedSOPSequence"),
            (0x0040, 0x0555, "AcquisitionContextSequence"),
            (0x0040, 0xA043, "ConceptNameCodeSequence"),
            (0x0062, 0x0002, "SegmentSequence"),
            (0x300A, 0x00B0, "BeamSequence"),
            (0x5400, 0x0100, "WaveformSequence"),
        ] {
            assert_eq!(resolve_implicit_vr(&dict, group, element), VR::SQ, "{}", alias);
            assert_eq!(dict.by_name(alias).map(|e| e.tag.inner()), Some(Tag(group, element)));
        }
        assert_eq!(
            dict.by_tag(tags::REFERENCED_SOP_SEQUENCE).map(|e| e.vr),
            Some(VR::SQ)
        );
    }

    #[test]
    fn registry_is_consistent() {
        let registry = registry();
        assert!(!registry.is_empty());
        for entry in crate::tags::ENTRIES {
            assert_eq!(
                StandardDataDictionary.by_name(entry.alias).map(|e| e.tag),
                Some(entry.tag),
                "{} should be indexed by name",
                entry.alias
            );
            assert!(entry.tag.contains(entry.tag.inner()));
        }
    }
}

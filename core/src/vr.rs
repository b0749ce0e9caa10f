//! Value representations and their static descriptor table.
//!
//! The table holds the 31 value representations recognized by the decoder,
//! each flagged with the width class of its length field in explicit VR
//! encoding and whether its payload is character string data.
//! Lookups by raw 2-byte code never fail loudly:
//! an unregistered code simply yields `None` (or `false`).

use std::fmt;
use std::str::{from_utf8, FromStr};

/// An enum type for a DICOM value representation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
}

/// Static attributes of a value representation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct VrDescriptor {
    /// the value representation
    pub vr: VR,
    /// the two character code, as it appears in explicit VR encoding
    pub code: [u8; 2],
    /// whether explicit VR headers of this VR carry
    /// 2 reserved bytes followed by a 32-bit length
    pub uses_long_length: bool,
    /// whether the payload is character string data
    pub is_character_string: bool,
}

const fn desc(vr: VR, code: &[u8; 2], long: bool, text: bool) -> VrDescriptor {
    VrDescriptor {
        vr,
        code: *code,
        uses_long_length: long,
        is_character_string: text,
    }
}

/// The number of registered value representations.
pub const NUMBER_OF_VR: usize = 31;

/// The value representation table, in alphabetical order of their codes.
#[rustfmt::skip]
pub static VR_TABLE: [VrDescriptor; NUMBER_OF_VR] = [
    desc(VR::AE, b"AE", false, true),
    desc(VR::AS, b"AS", false, true),
    desc(VR::AT, b"AT", false, false),
    desc(VR::CS, b"CS", false, true),
    desc(VR::DA, b"DA", false, true),
    desc(VR::DS, b"DS", false, true),
    desc(VR::DT, b"DT", false, true),
    desc(VR::FL, b"FL", false, false),
    desc(VR::FD, b"FD", false, false),
    desc(VR::IS, b"IS", false, true),
    desc(VR::LO, b"LO", false, true),
    desc(VR::LT, b"LT", false, true),
    desc(VR::OB, b"OB", true, false),
    desc(VR::OD, b"OD", true, false),
    desc(VR::OF, b"OF", true, false),
    desc(VR::OL, b"OL", true, false),
    desc(VR::OW, b"OW", true, false),
    desc(VR::PN, b"PN", false, true),
    desc(VR::SH, b"SH", false, true),
    desc(VR::SL, b"SL", false, false),
    desc(VR::SQ, b"SQ", true, false),
    desc(VR::SS, b"SS", false, false),
    desc(VR::ST, b"ST", false, true),
    desc(VR::TM, b"TM", false, true),
    desc(VR::UC, b"UC", true, true),
    desc(VR::UI, b"UI", false, true),
    desc(VR::UL, b"UL", false, false),
    desc(VR::UN, b"UN", true, false),
    desc(VR::UR, b"UR", true, true),
    desc(VR::US, b"US", false, false),
    desc(VR::UT, b"UT", true, true),
];

impl VR {
    /// Obtain the value representation corresponding to the given two bytes.
    /// Each byte should represent an alphabetic character in upper case.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        VR_TABLE.iter().find(|d| d.code == chars).map(|d| d.vr)
    }

    /// Retrieve this VR's entry in the value representation table.
    #[inline]
    pub fn descriptor(self) -> &'static VrDescriptor {
        // the table is laid out in declaration order
        &VR_TABLE[self as usize]
    }

    /// Retrieve a string representation of this VR.
    pub fn to_str(self) -> &'static str {
        match from_utf8(&self.descriptor().code) {
            Ok(s) => s,
            Err(_) => "UN",
        }
    }

    /// Retrieve a copy of this VR's byte representation.
    /// The function returns two alphabetic characters in upper case.
    #[inline]
    pub fn to_bytes(self) -> [u8; 2] {
        self.descriptor().code
    }

    /// Whether explicit VR headers of this VR use the long form:
    /// 2 reserved bytes followed by a 32-bit value length (12 byte header).
    #[inline]
    pub fn is_long_length(self) -> bool {
        self.descriptor().uses_long_length
    }

    /// Whether values of this VR are character strings.
    #[inline]
    pub fn is_character_string(self) -> bool {
        self.descriptor().is_character_string
    }
}

/// Obtain the value representation corresponding to the given string.
/// The string should hold exactly two UTF-8 encoded alphabetic characters
/// in upper case, otherwise no match is made.
impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.as_bytes() {
            &[a, b] => VR::from_binary([a, b]).ok_or("no such value representation"),
            _ => Err("no such value representation"),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

fn lookup(code: &[u8]) -> Option<&'static VrDescriptor> {
    match code {
        &[a, b, ..] => VR_TABLE.iter().find(|d| d.code == [a, b]),
        _ => None,
    }
}

/// Check whether the first two bytes of `code` form a registered VR code.
pub fn is_valid_vr(code: &[u8]) -> bool {
    lookup(code).is_some()
}

/// Check whether the first two bytes of `code` form a registered VR code
/// which uses the long length form in explicit VR encoding.
pub fn is_long_length_vr(code: &[u8]) -> bool {
    lookup(code).map(|d| d.uses_long_length).unwrap_or(false)
}

/// Check whether the first two bytes of `code` form a registered VR code
/// of character string data.
pub fn is_character_string_vr(code: &[u8]) -> bool {
    lookup(code).map(|d| d.is_character_string).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    const EXPECTED: [(&str, bool, bool); NUMBER_OF_VR] = [
        // code, long length, character string
        ("AE", false, true), ("AS", false, true), ("AT", false, false),
        ("CS", false, true), ("DA", false, true), ("DS", false, true),
        ("DT", false, true), ("FL", false, false), ("FD", false, false),
        ("IS", false, true), ("LO", false, true), ("LT", false, true),
        ("OB", true, false), ("OD", true, false), ("OF", true, false),
        ("OL", true, false), ("OW", true, false), ("PN", false, true),
        ("SH", false, true), ("SL", false, false), ("SQ", true, false),
        ("SS", false, false), ("ST", false, true), ("TM", false, true),
        ("UC", true, true), ("UI", false, true), ("UL", false, false),
        ("UN", true, false), ("UR", true, true), ("US", false, false),
        ("UT", true, true),
    ];

    #[test]
    fn table_matches_standard_attributes() {
        for (code, long, text) in EXPECTED {
            let bytes = code.as_bytes();
            assert!(is_valid_vr(bytes), "{} should be valid", code);
            assert_eq!(is_long_length_vr(bytes), long, "long length of {}", code);
            assert_eq!(is_character_string_vr(bytes), text, "text flag of {}", code);

            let vr: VR = code.parse().unwrap();
            assert_eq!(vr.to_str(), code);
            assert_eq!(vr.is_long_length(), long);
            assert_eq!(vr.is_character_string(), text);
        }
    }

    #[test]
    fn descriptors_follow_declaration_order() {
        for (i, d) in VR_TABLE.iter().enumerate() {
            assert_eq!(d.vr as usize, i);
            assert_eq!(d.vr.descriptor(), d);
        }
    }

    #[test]
    fn rejects_unknown_codes() {
        assert!(!is_valid_vr(b"XX"));
        assert!(!is_valid_vr(b"ob"));
        assert!(!is_valid_vr(b"O"));
        assert!(!is_valid_vr(b""));
        // newer VRs outside of the table
        assert!(!is_valid_vr(b"OV"));
        assert!(!is_long_length_vr(b"ZZ"));
        assert!(!is_character_string_vr(b"ZZ"));
        assert_eq!(VR::from_binary(*b"SV"), None);
        assert!("PNX".parse::<VR>().is_err());
    }

    #[test]
    fn codes_with_trailing_bytes() {
        // only the first two bytes are considered
        assert!(is_valid_vr(b"UI\x14\x00"));
        assert!(is_long_length_vr(b"OB\x00\x00"));
    }
}

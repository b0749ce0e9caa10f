//! The transfer syntaxes known to the decoder.
//!
//! Only the two little endian native encodings can be decoded.
//! The big endian family is recognized so that it can be
//! reported as unsupported rather than silently misread.

use std::fmt;

/// Transfer Syntax UID of Implicit VR Little Endian
pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
/// Transfer Syntax UID of Explicit VR Little Endian
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
/// Transfer Syntax UID of Explicit VR Big Endian
pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";
/// Transfer Syntax UID treated as the deflated big endian variant
pub const DEFLATED_EXPLICIT_BIG_ENDIAN: &str = "1.2.840.10008.1.2.1.99";

/// The file-wide encoding convention declared in the file meta group.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferSyntax {
    /// Implicit VR Little Endian,
    /// the default transfer syntax of DICOM
    #[default]
    Implicit,
    /// Explicit VR Little Endian
    ExplicitLittleEndian,
    /// Explicit VR Big Endian (unsupported)
    ExplicitBigEndian,
    /// Deflated Explicit VR (unsupported)
    DeflatedExplicitBigEndian,
}

impl TransferSyntax {
    /// Identify a transfer syntax by its UID.
    ///
    /// Trailing padding (NUL or space) is ignored.
    /// Returns `None` for any other UID,
    /// such as those of encapsulated (compressed) transfer syntaxes.
    pub fn from_uid(uid: &str) -> Option<Self> {
        match uid.trim_end_matches(|c: char| c == '\0' || c == ' ') {
            IMPLICIT_VR_LITTLE_ENDIAN => Some(TransferSyntax::Implicit),
            EXPLICIT_VR_LITTLE_ENDIAN => Some(TransferSyntax::ExplicitLittleEndian),
            EXPLICIT_VR_BIG_ENDIAN => Some(TransferSyntax::ExplicitBigEndian),
            DEFLATED_EXPLICIT_BIG_ENDIAN => Some(TransferSyntax::DeflatedExplicitBigEndian),
            _ => None,
        }
    }

    /// Retrieve the UID of this transfer syntax.
    pub fn uid(self) -> &'static str {
        match self {
            TransferSyntax::Implicit => IMPLICIT_VR_LITTLE_ENDIAN,
            TransferSyntax::ExplicitLittleEndian => EXPLICIT_VR_LITTLE_ENDIAN,
            TransferSyntax::ExplicitBigEndian => EXPLICIT_VR_BIG_ENDIAN,
            TransferSyntax::DeflatedExplicitBigEndian => DEFLATED_EXPLICIT_BIG_ENDIAN,
        }
    }

    /// Whether data sets in this transfer syntax can be decoded.
    #[inline]
    pub fn is_supported(self) -> bool {
        matches!(
            self,
            TransferSyntax::Implicit | TransferSyntax::ExplicitLittleEndian
        )
    }
}

impl fmt::Display for TransferSyntax {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TransferSyntax::Implicit => "Implicit VR Little Endian",
            TransferSyntax::ExplicitLittleEndian => "Explicit VR Little Endian",
            TransferSyntax::ExplicitBigEndian => "Explicit VR Big Endian",
            TransferSyntax::DeflatedExplicitBigEndian => "Deflated Explicit VR Big Endian",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::TransferSyntax;

    #[test]
    fn recognizes_uids() {
        assert_eq!(
            TransferSyntax::from_uid("1.2.840.10008.1.2"),
            Some(TransferSyntax::Implicit)
        );
        assert_eq!(
            TransferSyntax::from_uid("1.2.840.10008.1.2.1\0"),
            Some(TransferSyntax::ExplicitLittleEndian)
        );
        assert_eq!(
            TransferSyntax::from_uid("1.2.840.10008.1.2.2"),
            Some(TransferSyntax::ExplicitBigEndian)
        );
        assert_eq!(
            TransferSyntax::from_uid("1.2.840.10008.1.2.1.99"),
            Some(TransferSyntax::DeflatedExplicitBigEndian)
        );
        // JPEG baseline
        assert_eq!(TransferSyntax::from_uid("1.2.840.10008.1.2.4.50"), None);
    }

    #[test]
    fn default_is_implicit() {
        assert_eq!(TransferSyntax::default(), TransferSyntax::Implicit);
    }

    #[test]
    fn support_flags() {
        assert!(TransferSyntax::Implicit.is_supported());
        assert!(TransferSyntax::ExplicitLittleEndian.is_supported());
        assert!(!TransferSyntax::ExplicitBigEndian.is_supported());
        assert!(!TransferSyntax::DeflatedExplicitBigEndian.is_supported());
        for ts in [
            TransferSyntax::Implicit,
            TransferSyntax::ExplicitLittleEndian,
            TransferSyntax::ExplicitBigEndian,
            TransferSyntax::DeflatedExplicitBigEndian,
        ] {
            assert_eq!(TransferSyntax::from_uid(ts.uid()), Some(ts));
        }
    }
}

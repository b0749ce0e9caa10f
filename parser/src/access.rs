//! Typed access to the values of decoded elements.
//!
//! These helpers are meant for consumers of a decoded data set,
//! such as report writers and pixel data dumpers.

use crate::dataset::RawElement;
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcm_core::header::Header;
use dcm_core::{Tag, VR};
use std::borrow::Cow;

/// The text rendered for values which are not shown as text.
pub const BINARY_PLACEHOLDER: &str = "<binary data>";

/// Render the value of an element as text.
///
/// - `UL` and `US` values are rendered as a decimal number.
/// - `IS` values are parsed as a leading integer (0 if there is none)
///   and rendered as a decimal number.
/// - Other character string values are returned as they are,
///   padding included.
/// - Any other value is rendered as [`BINARY_PLACEHOLDER`],
///   as is a `UL` or `US` value too short to hold a number.
pub fn tag_as_string<'s>(elem: &RawElement<'s>) -> Cow<'s, str> {
    let data = elem.data();
    let text = match elem.vr() {
        VR::UL => data
            .get(0..4)
            .map(|b| Cow::Owned(LittleEndian::read_u32(b).to_string())),
        VR::US => data
            .get(0..2)
            .map(|b| Cow::Owned(LittleEndian::read_u16(b).to_string())),
        VR::IS => Some(Cow::Owned(
            parse_leading_int(&String::from_utf8_lossy(data)).to_string(),
        )),
        vr if vr.is_character_string() => Some(String::from_utf8_lossy(data)),
        _ => None,
    };
    text.unwrap_or(Cow::Borrowed(BINARY_PLACEHOLDER))
}

/// Parse the integer at the start of the text,
/// after any leading whitespace.
/// Yields 0 if there is no such integer,
/// and saturates on overflow.
fn parse_leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Find the first element with the given tag, at any nesting depth.
///
/// The tag can be given as a [`Tag`],
/// a `(group, element)` tuple,
/// or a composite `u32` key such as `0x0020_000D`.
pub fn get_tag<'a, 's>(tags: &'a [RawElement<'s>], id: impl Into<Tag>) -> Option<&'a RawElement<'s>> {
    let tag = id.into();
    tags.iter().find(|e| e.tag() == tag)
}

/// Find the first element with the given tag and copy its value.
///
/// A NUL terminator is appended to character string values.
pub fn get_tag_data(tags: &[RawElement<'_>], id: impl Into<Tag>) -> Option<Vec<u8>> {
    let elem = get_tag(tags, id)?;
    let mut data = Vec::with_capacity(elem.data().len() + 1);
    data.extend_from_slice(elem.data());
    if elem.vr().is_character_string() {
        data.push(0);
    }
    Some(data)
}

/// Strip leading and trailing whitespace and NUL padding.
pub fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcm_core::header::{DataElementHeader, Length};

    fn element(tag: Tag, vr: VR, data: &[u8]) -> RawElement<'_> {
        let header = DataElementHeader::new(tag, vr, Length(data.len() as u32));
        RawElement::new(header, 0, data, 0)
    }

    #[test]
    fn renders_values() {
        let rows = element(Tag(0x0028, 0x0010), VR::US, &[0x00, 0x02]);
        assert_eq!(tag_as_string(&rows), "512");

        let length = element(Tag(0x0002, 0x0000), VR::UL, &[0xC8, 0x00, 0x00, 0x00]);
        assert_eq!(tag_as_string(&length), "200");

        let number = element(Tag(0x0020, 0x0013), VR::IS, b" 42 ");
        assert_eq!(tag_as_string(&number), "42");
        let number = element(Tag(0x0020, 0x0013), VR::IS, b"-7\\8");
        assert_eq!(tag_as_string(&number), "-7");
        let number = element(Tag(0x0020, 0x0013), VR::IS, b"");
        assert_eq!(tag_as_string(&number), "0");

        let uid = element(Tag(0x0020, 0x000D), VR::UI, b"1.2.3\0");
        assert_eq!(tag_as_string(&uid), "1.2.3\0");

        let pixels = element(Tag::PIXEL_DATA, VR::OW, &[1, 2, 3, 4]);
        assert_eq!(tag_as_string(&pixels), BINARY_PLACEHOLDER);
        let short = element(Tag(0x0028, 0x0010), VR::US, &[0x01]);
        assert_eq!(tag_as_string(&short), BINARY_PLACEHOLDER);
    }

    #[test]
    fn lookup_by_tag() {
        let elements = [
            element(Tag(0x0008, 0x0018), VR::UI, b"1.2\0"),
            element(Tag(0x0020, 0x000D), VR::UI, b"9.9\0"),
            element(Tag(0x0028, 0x0010), VR::US, &[0x00, 0x02]),
        ];
        assert_eq!(
            get_tag(&elements, 0x0020_000D_u32).map(|e| e.data()),
            Some(&b"9.9\0"[..])
        );
        assert_eq!(
            get_tag(&elements, (0x0008_u16, 0x0018_u16)).map(|e| e.vr()),
            Some(VR::UI)
        );
        assert!(get_tag(&elements, Tag(0x0020, 0x000E)).is_none());

        assert_eq!(
            get_tag_data(&elements, Tag(0x0020, 0x000D)),
            Some(b"9.9\0\0".to_vec())
        );
        assert_eq!(
            get_tag_data(&elements, Tag(0x0028, 0x0010)),
            Some(vec![0x00, 0x02])
        );
    }

    #[test]
    fn lookup_in_empty_collection() {
        let empty: [RawElement<'static>; 0] = [];
        assert!(get_tag(&empty, 0_u32).is_none());
        assert!(get_tag(&empty, Tag(0x0008, 0x0018)).is_none());
        assert!(get_tag_data(&empty, Tag(0, 0)).is_none());
    }

    #[test]
    fn zero_tag_is_an_ordinary_element() {
        let elements = [element(Tag(0x0000, 0x0000), VR::UL, &[4, 0, 0, 0])];
        assert!(get_tag(&elements, 0_u32).is_some());
    }

    #[test]
    fn trims_padding() {
        assert_eq!(trim(" 1.2.3\0"), "1.2.3");
        assert_eq!(trim("\0\0"), "");
        assert_eq!(trim("ANON "), "ANON");
    }
}

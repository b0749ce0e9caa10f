//! Fetching the image attributes of a decoded DICOM file.

use dcm_core::header::Header;
use dcm_core::Tag;
use dcm_dictionary_std::tags;
use dcm_parser::access::{tag_as_string, trim};
use dcm_parser::{DataSet, RawElement};
use snafu::{ensure, Backtrace, OptionExt, Snafu};

#[derive(Debug, Snafu)]
pub enum GetAttributeError {
    #[snafu(display("Missing required attribute `{}`", name))]
    MissingRequiredField {
        name: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not read value `{}` of attribute `{}`", value, name))]
    ParseValue {
        name: &'static str,
        value: String,
        backtrace: Backtrace,
    },

    #[snafu(display("Semantically invalid value `{}` for attribute `{}`", value, name))]
    InvalidValue {
        name: &'static str,
        value: u32,
        backtrace: Backtrace,
    },

    #[snafu(display("Missing or encapsulated pixel data"))]
    MissingPixelData { backtrace: Backtrace },
}

pub type Result<T, E = GetAttributeError> = std::result::Result<T, E>;

/// The attributes which describe the layout of native pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageAttributes {
    pub rows: u32,
    pub columns: u32,
    pub samples_per_pixel: u16,
    /// 0 for interleaved samples, 1 for separate color planes
    pub planar_configuration: u16,
    pub bits_allocated: u16,
    pub bits_stored: u16,
    pub high_bit: u16,
}

impl ImageAttributes {
    /// Collect and validate the image attributes of a data set.
    ///
    /// Only top level attributes are read,
    /// those of icon images inside sequences are ignored.
    /// Planar Configuration defaults to 0 when absent.
    pub fn from_dataset(dataset: &DataSet<'_>) -> Result<Self> {
        let attrs = ImageAttributes {
            rows: retrieve_required(dataset, tags::ROWS, "Rows")?,
            columns: retrieve_required(dataset, tags::COLUMNS, "Columns")?,
            samples_per_pixel: retrieve_required_u16(
                dataset,
                tags::SAMPLES_PER_PIXEL,
                "SamplesPerPixel",
            )?,
            planar_configuration: match dataset.get(tags::PLANAR_CONFIGURATION) {
                Some(elem) => to_u16(parse(elem, "PlanarConfiguration")?, "PlanarConfiguration")?,
                None => 0,
            },
            bits_allocated: retrieve_required_u16(dataset, tags::BITS_ALLOCATED, "BitsAllocated")?,
            bits_stored: retrieve_required_u16(dataset, tags::BITS_STORED, "BitsStored")?,
            high_bit: retrieve_required_u16(dataset, tags::HIGH_BIT, "HighBit")?,
        };
        attrs.validate()?;
        Ok(attrs)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            matches!(self.samples_per_pixel, 1 | 3),
            InvalidValueSnafu {
                name: "SamplesPerPixel",
                value: u32::from(self.samples_per_pixel),
            }
        );
        ensure!(
            self.planar_configuration <= 1,
            InvalidValueSnafu {
                name: "PlanarConfiguration",
                value: u32::from(self.planar_configuration),
            }
        );
        ensure!(
            matches!(self.bits_allocated, 8 | 16),
            InvalidValueSnafu {
                name: "BitsAllocated",
                value: u32::from(self.bits_allocated),
            }
        );
        ensure!(
            self.bits_stored >= 1 && self.bits_stored <= self.bits_allocated,
            InvalidValueSnafu {
                name: "BitsStored",
                value: u32::from(self.bits_stored),
            }
        );
        ensure!(
            self.high_bit < self.bits_allocated && self.high_bit + 1 >= self.bits_stored,
            InvalidValueSnafu {
                name: "HighBit",
                value: u32::from(self.high_bit),
            }
        );
        Ok(())
    }

    /// The number of bytes per sample.
    pub fn bytes_per_sample(&self) -> usize {
        usize::from(self.bits_allocated / 8)
    }

    /// The number of bytes of a single frame.
    pub fn frame_size(&self) -> usize {
        self.rows as usize
            * self.columns as usize
            * usize::from(self.samples_per_pixel)
            * self.bytes_per_sample()
    }
}

/// Obtain the native pixel data at which decoding stopped.
pub fn pixel_data<'s>(dataset: &DataSet<'s>) -> Result<RawElement<'s>> {
    dataset
        .boundary_element()
        .filter(|elem| elem.tag() == tags::PIXEL_DATA)
        .context(MissingPixelDataSnafu)
}

fn retrieve_required(dataset: &DataSet<'_>, tag: Tag, name: &'static str) -> Result<u32> {
    let elem = dataset.get(tag).context(MissingRequiredFieldSnafu { name })?;
    parse(elem, name)
}

fn retrieve_required_u16(dataset: &DataSet<'_>, tag: Tag, name: &'static str) -> Result<u16> {
    to_u16(retrieve_required(dataset, tag, name)?, name)
}

fn to_u16(value: u32, name: &'static str) -> Result<u16> {
    u16::try_from(value)
        .ok()
        .context(InvalidValueSnafu { name, value })
}

fn parse(elem: &RawElement<'_>, name: &'static str) -> Result<u32> {
    let text = tag_as_string(elem);
    let text = trim(&text);
    text.parse().ok().context(ParseValueSnafu { name, value: text })
}

#[cfg(test)]
mod tests {
    use super::{GetAttributeError, ImageAttributes};
    use dcm_core::header::Header;
    use dcm_parser::{decode_source, ByteSource, DecodeOptions, Tag};

    fn us(element: u16, value: u16) -> Vec<u8> {
        let mut out = vec![0x28, 0x00];
        out.extend_from_slice(&element.to_le_bytes());
        out.extend_from_slice(b"US\x02\x00");
        out.extend_from_slice(&value.to_le_bytes());
        out
    }

    fn image(attrs: &[(u16, u16)], pixels: &[u8]) -> Vec<u8> {
        image_with(&[], attrs, pixels)
    }

    /// An image whose data set starts with the given encoded elements.
    fn image_with(head: &[u8], attrs: &[(u16, u16)], pixels: &[u8]) -> Vec<u8> {
        let mut data = vec![0u8; 128];
        data.extend_from_slice(b"DICM");
        data.extend_from_slice(b"\x02\x00\x10\x00UI\x14\x001.2.840.10008.1.2.1\0");
        data.extend_from_slice(head);
        for &(element, value) in attrs {
            data.extend(us(element, value));
        }
        data.extend_from_slice(b"\xE0\x7F\x10\x00OW\x00\x00");
        data.extend_from_slice(&(pixels.len() as u32).to_le_bytes());
        data.extend_from_slice(pixels);
        data
    }

    const GRAY_16: [(u16, u16); 6] = [
        (0x0002, 1),
        (0x0010, 2),
        (0x0011, 3),
        (0x0100, 16),
        (0x0101, 12),
        (0x0102, 11),
    ];

    #[test]
    fn reads_attributes_and_pixel_data() {
        let data = image(&GRAY_16, &[0; 12]);
        let decoded = decode_source(ByteSource::new(&data), DecodeOptions::default()).unwrap();
        let attrs = ImageAttributes::from_dataset(&decoded.dataset).unwrap();
        assert_eq!(
            attrs,
            ImageAttributes {
                rows: 2,
                columns: 3,
                samples_per_pixel: 1,
                planar_configuration: 0,
                bits_allocated: 16,
                bits_stored: 12,
                high_bit: 11,
            }
        );
        assert_eq!(attrs.frame_size(), 12);

        let pixels = super::pixel_data(&decoded.dataset).unwrap();
        assert_eq!(pixels.tag(), Tag(0x7FE0, 0x0010));
        assert_eq!(pixels.data().len(), 12);
    }

    #[test]
    fn rejects_missing_and_invalid_attributes() {
        let data = image(&GRAY_16[1..], &[]);
        let decoded = decode_source(ByteSource::new(&data), DecodeOptions::default()).unwrap();
        assert!(matches!(
            ImageAttributes::from_dataset(&decoded.dataset),
            Err(GetAttributeError::MissingRequiredField {
                name: "SamplesPerPixel",
                ..
            })
        ));

        let mut attrs = GRAY_16;
        // BitsStored larger than BitsAllocated
        attrs[4] = (0x0101, 17);
        let data = image(&attrs, &[]);
        let decoded = decode_source(ByteSource::new(&data), DecodeOptions::default()).unwrap();
        assert!(matches!(
            ImageAttributes::from_dataset(&decoded.dataset),
            Err(GetAttributeError::InvalidValue {
                name: "BitsStored",
                value: 17,
                ..
            })
        ));
    }

    #[test]
    fn ignores_icon_image_inside_sequences() {
        // an icon image with its own rows and pixel data
        let mut icon = us(0x0010, 1);
        icon.extend(us(0x0011, 1));
        icon.extend_from_slice(b"\xE0\x7F\x10\x00OB\x00\x00\x02\x00\x00\x00\xAA\xBB");
        let mut item = b"\xFE\xFF\x00\xE0".to_vec();
        item.extend_from_slice(&(icon.len() as u32).to_le_bytes());
        item.extend(icon);
        // Referenced Image Sequence
        let mut head = b"\x08\x00\x40\x11SQ\x00\x00".to_vec();
        head.extend_from_slice(&(item.len() as u32).to_le_bytes());
        head.extend(item);

        let data = image_with(&head, &GRAY_16, &[7; 12]);
        let decoded = decode_source(ByteSource::new(&data), DecodeOptions::default()).unwrap();
        let attrs = ImageAttributes::from_dataset(&decoded.dataset).unwrap();
        assert_eq!((attrs.rows, attrs.columns), (2, 3));
        let pixels = super::pixel_data(&decoded.dataset).unwrap();
        assert_eq!(pixels.data(), &[7; 12]);

        // without top level attributes, nothing is taken from the icon
        let data = image_with(&head, &[], &[7; 12]);
        let decoded = decode_source(ByteSource::new(&data), DecodeOptions::default()).unwrap();
        assert!(matches!(
            ImageAttributes::from_dataset(&decoded.dataset),
            Err(GetAttributeError::MissingRequiredField { name: "Rows", .. })
        ));
    }

    #[test]
    fn pixel_data_must_stop_decoding() {
        let data = image(&GRAY_16, &[0; 12]);
        let options = DecodeOptions::new().stop_group(0xFFFF);
        let decoded = decode_source(ByteSource::new(&data), options).unwrap();
        assert!(matches!(
            super::pixel_data(&decoded.dataset),
            Err(GetAttributeError::MissingPixelData { .. })
        ));
    }
}

//! The UID report of a decoded DICOM file.

use dcm_core::Tag;
use dcm_dictionary_std::tags;
use dcm_parser::access::{tag_as_string, trim};
use dcm_parser::{DataSet, DecodedFile};
use serde::Serialize;
use std::io::Write;

/// The maximum number of characters rendered for a UID.
const UID_MAX_LENGTH: usize = 64;

/// The identifying UIDs of a single file.
///
/// UIDs which could not be found are rendered as empty strings,
/// and their names are listed in [`missing`](UidReport::missing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UidReport {
    pub filename: String,
    #[serde(rename = "MediaStorageSOPInstanceUID")]
    pub sop_instance_uid: String,
    #[serde(rename = "StudyInstanceUID")]
    pub study_instance_uid: String,
    #[serde(rename = "SeriesInstanceUID")]
    pub series_instance_uid: String,
    /// the names of the UIDs which were not found
    #[serde(skip)]
    pub missing: Vec<&'static str>,
}

impl UidReport {
    /// Build the report of a decoded file.
    ///
    /// The SOP Instance UID is taken from the data set,
    /// falling back to the Media Storage SOP Instance UID
    /// of the file meta group.
    /// Only top level elements are considered,
    /// so UIDs of referenced instances inside sequences are never reported.
    pub fn new(filename: impl Into<String>, file: &DecodedFile<'_>) -> Self {
        let dataset = &file.dataset;
        let mut missing = Vec::new();

        let sop_instance_uid = uid_of(dataset, tags::SOP_INSTANCE_UID).or_else(|| {
            Some(file.meta.media_storage_sop_instance_uid.clone()).filter(|uid| !uid.is_empty())
        });
        let sop_instance_uid = or_missing(sop_instance_uid, "SOP Instance UID", &mut missing);
        let study_instance_uid = or_missing(
            uid_of(dataset, tags::STUDY_INSTANCE_UID),
            "Study Instance UID",
            &mut missing,
        );
        let series_instance_uid = or_missing(
            uid_of(dataset, tags::SERIES_INSTANCE_UID),
            "Series Instance UID",
            &mut missing,
        );

        UidReport {
            filename: filename.into(),
            sop_instance_uid,
            study_instance_uid,
            series_instance_uid,
            missing,
        }
    }
}

fn uid_of(dataset: &DataSet<'_>, tag: Tag) -> Option<String> {
    let elem = dataset.get(tag)?;
    let text = tag_as_string(elem);
    Some(trim(&text).chars().take(UID_MAX_LENGTH).collect())
}

fn or_missing(uid: Option<String>, name: &'static str, missing: &mut Vec<&'static str>) -> String {
    uid.unwrap_or_else(|| {
        missing.push(name);
        String::new()
    })
}

/// Write the reports as JSON, followed by a new line.
///
/// With `as_array`, the reports are written as a JSON array.
/// Otherwise only the first report is written as a JSON object,
/// and nothing is written if there are no reports.
pub fn write_reports<W: Write>(
    mut to: W,
    reports: &[UidReport],
    as_array: bool,
) -> std::io::Result<()> {
    if as_array {
        serde_json::to_writer(&mut to, reports)?;
    } else if let Some(report) = reports.first() {
        serde_json::to_writer(&mut to, report)?;
    } else {
        return Ok(());
    }
    writeln!(to)
}

#[cfg(test)]
mod tests {
    use super::{write_reports, UidReport};
    use dcm_parser::{decode_source, ByteSource, DecodeOptions};

    fn element(group: u16, element: u16, vr: &[u8; 2], value: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&group.to_le_bytes());
        out.extend_from_slice(&element.to_le_bytes());
        out.extend_from_slice(vr);
        out.extend_from_slice(&(value.len() as u16).to_le_bytes());
        out.extend_from_slice(value);
        out
    }

    /// Encode a defined length sequence holding a single item.
    fn sequence(group: u16, element: u16, item: &[Vec<u8>]) -> Vec<u8> {
        let item: Vec<u8> = item.concat();
        let mut out = Vec::new();
        out.extend_from_slice(&group.to_le_bytes());
        out.extend_from_slice(&element.to_le_bytes());
        out.extend_from_slice(b"SQ\0\0");
        out.extend_from_slice(&(item.len() as u32 + 8).to_le_bytes());
        out.extend_from_slice(b"\xFE\xFF\x00\xE0");
        out.extend_from_slice(&(item.len() as u32).to_le_bytes());
        out.extend(item);
        out
    }

    fn file(sop_in_meta: &[u8], body: &[Vec<u8>]) -> Vec<u8> {
        let mut out = vec![0u8; 128];
        out.extend_from_slice(b"DICM");
        out.extend(element(0x0002, 0x0003, b"UI", sop_in_meta));
        out.extend(element(0x0002, 0x0010, b"UI", b"1.2.840.10008.1.2.1\0"));
        for e in body {
            out.extend_from_slice(e);
        }
        out
    }

    #[test]
    fn reports_data_set_uids() {
        let data = file(
            b"1.2\0",
            &[
                element(0x0008, 0x0018, b"UI", b"5.6\0"),
                element(0x0020, 0x000D, b"UI", b"9.9\0"),
                element(0x0020, 0x000E, b"UI", b"9.9.1\0"),
            ],
        );
        let decoded = decode_source(ByteSource::new(&data), DecodeOptions::default()).unwrap();
        let report = UidReport::new("a.dcm", &decoded);
        assert_eq!(report.sop_instance_uid, "5.6");
        assert_eq!(report.study_instance_uid, "9.9");
        assert_eq!(report.series_instance_uid, "9.9.1");
        assert!(report.missing.is_empty());

        let mut out = Vec::new();
        write_reports(&mut out, &[report], false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"filename\":\"a.dcm\",\"MediaStorageSOPInstanceUID\":\"5.6\",\
             \"StudyInstanceUID\":\"9.9\",\"SeriesInstanceUID\":\"9.9.1\"}\n"
        );
    }

    #[test]
    fn falls_back_to_meta_and_lists_missing() {
        let data = file(b"1.2\0", &[element(0x0020, 0x000D, b"UI", b"9.9\0")]);
        let decoded = decode_source(ByteSource::new(&data), DecodeOptions::default()).unwrap();
        let report = UidReport::new("b.dcm", &decoded);
        assert_eq!(report.sop_instance_uid, "1.2");
        assert_eq!(report.series_instance_uid, "");
        assert_eq!(report.missing, vec!["Series Instance UID"]);

        let data = file(b"", &[element(0x0008, 0x0060, b"CS", b"CT")]);
        let decoded = decode_source(ByteSource::new(&data), DecodeOptions::default()).unwrap();
        let report = UidReport::new("c.dcm", &decoded);
        assert_eq!(
            report.missing,
            vec!["SOP Instance UID", "Study Instance UID", "Series Instance UID"]
        );
    }

    #[test]
    fn ignores_uids_of_referenced_series() {
        let data = file(
            b"1.2\0",
            &[
                element(0x0008, 0x0018, b"UI", b"5.6\0"),
                // Referenced Series Sequence
                sequence(
                    0x0008,
                    0x1115,
                    &[
                        element(0x0008, 0x1155, b"UI", b"1.1.9\0"),
                        element(0x0020, 0x000D, b"UI", b"1.1\0"),
                        element(0x0020, 0x000E, b"UI", b"1.1.REF\0"),
                    ],
                ),
                element(0x0020, 0x000D, b"UI", b"2.2\0"),
                element(0x0020, 0x000E, b"UI", b"2.2.OWN\0"),
            ],
        );
        let decoded = decode_source(ByteSource::new(&data), DecodeOptions::default()).unwrap();
        assert_eq!(decoded.dataset.len(), 6);
        let report = UidReport::new("pr.dcm", &decoded);
        assert_eq!(report.sop_instance_uid, "5.6");
        assert_eq!(report.study_instance_uid, "2.2");
        assert_eq!(report.series_instance_uid, "2.2.OWN");
        assert!(report.missing.is_empty());
    }

    #[test]
    fn nested_uids_alone_are_missing() {
        let data = file(
            b"1.2\0",
            &[sequence(
                0x0008,
                0x1115,
                &[element(0x0020, 0x000E, b"UI", b"1.1.REF\0")],
            )],
        );
        let decoded = decode_source(ByteSource::new(&data), DecodeOptions::default()).unwrap();
        let report = UidReport::new("ko.dcm", &decoded);
        assert_eq!(report.series_instance_uid, "");
        assert_eq!(
            report.missing,
            vec!["Study Instance UID", "Series Instance UID"]
        );
    }

    #[test]
    fn writes_arrays() {
        let report = UidReport {
            filename: "dir/\"quoted\".dcm".to_string(),
            sop_instance_uid: String::new(),
            study_instance_uid: String::new(),
            series_instance_uid: String::new(),
            missing: vec![],
        };
        let mut out = Vec::new();
        write_reports(&mut out, &[report.clone(), report], true).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("[{\"filename\":\"dir/\\\"quoted\\\".dcm\""));
        assert!(out.ends_with("}]\n"));

        let mut out = Vec::new();
        write_reports(&mut out, &[], true).unwrap();
        assert_eq!(out, b"[]\n");
        let mut out = Vec::new();
        write_reports(&mut out, &[], false).unwrap();
        assert!(out.is_empty());
    }
}

//! Data element tag declarations
//!
//! This module contains the attribute tags of DICOM PS3.6
//! which this crate knows about, together with the entries
//! of the standard data dictionary which are indexed at run time.
//! Sequence attributes are covered broadly across modalities,
//! so that nested data sets can be decoded from implicit VR files.

use dcm_core::dictionary::{DataDictionaryEntryRef, TagRange::*};
use dcm_core::header::Tag;
use dcm_core::VR;

/// File Meta Information Group Length 0002,0000 VR UL
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// File Meta Information Version 0002,0001 VR OB
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// Media Storage SOP Class UID 0002,0002 VR UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// Media Storage SOP Instance UID 0002,0003 VR UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// Transfer Syntax UID 0002,0010 VR UI
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// Implementation Class UID 0002,0012 VR UI
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// Implementation Version Name 0002,0013 VR SH
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// Source Application Entity Title 0002,0016 VR AE
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// Sending Application Entity Title 0002,0017 VR AE
#[rustfmt::skip]
pub const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
/// Receiving Application Entity Title 0002,0018 VR AE
#[rustfmt::skip]
pub const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);
/// Private Information Creator UID 0002,0100 VR UI
#[rustfmt::skip]
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// Private Information 0002,0102 VR OB
#[rustfmt::skip]
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);
/// File Set ID 0004,1130 VR CS
#[rustfmt::skip]
pub const FILE_SET_ID: Tag = Tag(0x0004, 0x1130);
/// Offset Of The First Directory Record Of The Root Directory Entity 0004,1200 VR UL
#[rustfmt::skip]
pub const OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1200);
/// Offset Of The Last Directory Record Of The Root Directory Entity 0004,1202 VR UL
#[rustfmt::skip]
pub const OFFSET_OF_THE_LAST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1202);
/// File Set Consistency Flag 0004,1212 VR US
#[rustfmt::skip]
pub const FILE_SET_CONSISTENCY_FLAG: Tag = Tag(0x0004, 0x1212);
/// Directory Record Sequence 0004,1220 VR SQ
#[rustfmt::skip]
pub const DIRECTORY_RECORD_SEQUENCE: Tag = Tag(0x0004, 0x1220);
/// Offset Of The Next Directory Record 0004,1400 VR UL
#[rustfmt::skip]
pub const OFFSET_OF_THE_NEXT_DIRECTORY_RECORD: Tag = Tag(0x0004, 0x1400);
/// Record In Use Flag 0004,1410 VR US
#[rustfmt::skip]
pub const RECORD_IN_USE_FLAG: Tag = Tag(0x0004, 0x1410);
/// Offset Of Referenced Lower Level Directory Entity 0004,1420 VR UL
#[rustfmt::skip]
pub const OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1420);
/// Directory Record Type 0004,1430 VR CS
#[rustfmt::skip]
pub const DIRECTORY_RECORD_TYPE: Tag = Tag(0x0004, 0x1430);
/// Referenced File ID 0004,1500 VR CS
#[rustfmt::skip]
pub const REFERENCED_FILE_ID: Tag = Tag(0x0004, 0x1500);
/// Referenced SOP Class UID In File 0004,1510 VR UI
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID_IN_FILE: Tag = Tag(0x0004, 0x1510);
/// Referenced SOP Instance UID In File 0004,1511 VR UI
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID_IN_FILE: Tag = Tag(0x0004, 0x1511);
/// Referenced Transfer Syntax UID In File 0004,1512 VR UI
#[rustfmt::skip]
pub const REFERENCED_TRANSFER_SYNTAX_UID_IN_FILE: Tag = Tag(0x0004, 0x1512);
/// Specific Character Set 0008,0005 VR CS
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// Language Code Sequence 0008,0006 VR SQ
#[rustfmt::skip]
pub const LANGUAGE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0006);
/// Image Type 0008,0008 VR CS
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// Instance Creation Date 0008,0012 VR DA
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// Instance Creation Time 0008,0013 VR TM
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// Instance Creator UID 0008,0014 VR UI
#[rustfmt::skip]
pub const INSTANCE_CREATOR_UID: Tag = Tag(0x0008, 0x0014);
/// SOP Class UID 0008,0016 VR UI
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOP Instance UID 0008,0018 VR UI
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// Study Date 0008,0020 VR DA
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// Series Date 0008,0021 VR DA
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// Acquisition Date 0008,0022 VR DA
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// Content Date 0008,0023 VR DA
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// Acquisition Date Time 0008,002A VR DT
#[rustfmt::skip]
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// Study Time 0008,0030 VR TM
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// Series Time 0008,0031 VR TM
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// Acquisition Time 0008,0032 VR TM
#[rustfmt::skip]
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// Content Time 0008,0033 VR TM
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// Accession Number 0008,0050 VR SH
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// Issuer Of Accession Number Sequence 0008,0051 VR SQ
#[rustfmt::skip]
pub const ISSUER_OF_ACCESSION_NUMBER_SEQUENCE: Tag = Tag(0x0008, 0x0051);
/// Retrieve AE Title 0008,0054 VR AE
#[rustfmt::skip]
pub const RETRIEVE_AE_TITLE: Tag = Tag(0x0008, 0x0054);
/// Instance Availability 0008,0056 VR CS
#[rustfmt::skip]
pub const INSTANCE_AVAILABILITY: Tag = Tag(0x0008, 0x0056);
/// Failed SOP Instance UID List 0008,0058 VR UI
#[rustfmt::skip]
pub const FAILED_SOP_INSTANCE_UID_LIST: Tag = Tag(0x0008, 0x0058);
/// Modality 0008,0060 VR CS
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// Conversion Type 0008,0064 VR CS
#[rustfmt::skip]
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// Manufacturer 0008,0070 VR LO
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// Institution Name 0008,0080 VR LO
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// Institution Address 0008,0081 VR ST
#[rustfmt::skip]
pub const INSTITUTION_ADDRESS: Tag = Tag(0x0008, 0x0081);
/// Institution Code Sequence 0008,0082 VR SQ
#[rustfmt::skip]
pub const INSTITUTION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0082);
/// Referring Physician Name 0008,0090 VR PN
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// Referring Physician Identification Sequence 0008,0096 VR SQ
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0096);
/// Code Value 0008,0100 VR SH
#[rustfmt::skip]
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// Coding Scheme Designator 0008,0102 VR SH
#[rustfmt::skip]
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// Code Meaning 0008,0104 VR LO
#[rustfmt::skip]
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// Mapping Resource 0008,0105 VR CS
#[rustfmt::skip]
pub const MAPPING_RESOURCE: Tag = Tag(0x0008, 0x0105);
/// Coding Scheme Identification Sequence 0008,0110 VR SQ
#[rustfmt::skip]
pub const CODING_SCHEME_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0110);
/// Equivalent Code Sequence 0008,0121 VR SQ
#[rustfmt::skip]
pub const EQUIVALENT_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0121);
/// Private Data Element Characteristics Sequence 0008,0300 VR SQ
#[rustfmt::skip]
pub const PRIVATE_DATA_ELEMENT_CHARACTERISTICS_SEQUENCE: Tag = Tag(0x0008, 0x0300);
/// Station Name 0008,1010 VR SH
#[rustfmt::skip]
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// Study Description 0008,1030 VR LO
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// Procedure Code Sequence 0008,1032 VR SQ
#[rustfmt::skip]
pub const PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1032);
/// Series Description 0008,103E VR LO
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// Institutional Department Name 0008,1040 VR LO
#[rustfmt::skip]
pub const INSTITUTIONAL_DEPARTMENT_NAME: Tag = Tag(0x0008, 0x1040);
/// Physicians Of Record 0008,1048 VR PN
#[rustfmt::skip]
pub const PHYSICIANS_OF_RECORD: Tag = Tag(0x0008, 0x1048);
/// Physicians Of Record Identification Sequence 0008,1049 VR SQ
#[rustfmt::skip]
pub const PHYSICIANS_OF_RECORD_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1049);
/// Performing Physician Name 0008,1050 VR PN
#[rustfmt::skip]
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
/// Performing Physician Identification Sequence 0008,1052 VR SQ
#[rustfmt::skip]
pub const PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1052);
/// Name Of Physicians Reading Study 0008,1060 VR PN
#[rustfmt::skip]
pub const NAME_OF_PHYSICIANS_READING_STUDY: Tag = Tag(0x0008, 0x1060);
/// Physicians Reading Study Identification Sequence 0008,1062 VR SQ
#[rustfmt::skip]
pub const PHYSICIANS_READING_STUDY_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1062);
/// Operators Name 0008,1070 VR PN
#[rustfmt::skip]
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// Operator Identification Sequence 0008,1072 VR SQ
#[rustfmt::skip]
pub const OPERATOR_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1072);
/// Admitting Diagnoses Description 0008,1080 VR LO
#[rustfmt::skip]
pub const ADMITTING_DIAGNOSES_DESCRIPTION: Tag = Tag(0x0008, 0x1080);
/// Admitting Diagnoses Code Sequence 0008,1084 VR SQ
#[rustfmt::skip]
pub const ADMITTING_DIAGNOSES_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1084);
/// Manufacturer Model Name 0008,1090 VR LO
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// Referenced Results Sequence 0008,1100 VR SQ
#[rustfmt::skip]
pub const REFERENCED_RESULTS_SEQUENCE: Tag = Tag(0x0008, 0x1100);
/// Referenced Study Sequence 0008,1110 VR SQ
#[rustfmt::skip]
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// Referenced Performed Procedure Step Sequence 0008,1111 VR SQ
#[rustfmt::skip]
pub const REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0008, 0x1111);
/// Referenced Series Sequence 0008,1115 VR SQ
#[rustfmt::skip]
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// Referenced Patient Sequence 0008,1120 VR SQ
#[rustfmt::skip]
pub const REFERENCED_PATIENT_SEQUENCE: Tag = Tag(0x0008, 0x1120);
/// Referenced Visit Sequence 0008,1125 VR SQ
#[rustfmt::skip]
pub const REFERENCED_VISIT_SEQUENCE: Tag = Tag(0x0008, 0x1125);
/// Referenced Overlay Sequence 0008,1130 VR SQ
#[rustfmt::skip]
pub const REFERENCED_OVERLAY_SEQUENCE: Tag = Tag(0x0008, 0x1130);
/// Referenced Stereometric Instance Sequence 0008,1134 VR SQ
#[rustfmt::skip]
pub const REFERENCED_STEREOMETRIC_INSTANCE_SEQUENCE: Tag = Tag(0x0008, 0x1134);
/// Referenced Waveform Sequence 0008,113A VR SQ
#[rustfmt::skip]
pub const REFERENCED_WAVEFORM_SEQUENCE: Tag = Tag(0x0008, 0x113A);
/// Referenced Image Sequence 0008,1140 VR SQ
#[rustfmt::skip]
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// Referenced Curve Sequence 0008,1145 VR SQ
#[rustfmt::skip]
pub const REFERENCED_CURVE_SEQUENCE: Tag = Tag(0x0008, 0x1145);
/// Referenced Instance Sequence 0008,114A VR SQ
#[rustfmt::skip]
pub const REFERENCED_INSTANCE_SEQUENCE: Tag = Tag(0x0008, 0x114A);
/// Referenced Real World Value Mapping Instance Sequence 0008,114B VR SQ
#[rustfmt::skip]
pub const REFERENCED_REAL_WORLD_VALUE_MAPPING_INSTANCE_SEQUENCE: Tag = Tag(0x0008, 0x114B);
/// Referenced SOP Class UID 0008,1150 VR UI
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// Referenced SOP Instance UID 0008,1155 VR UI
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// Referenced Frame Number 0008,1160 VR IS
#[rustfmt::skip]
pub const REFERENCED_FRAME_NUMBER: Tag = Tag(0x0008, 0x1160);
/// Frame Extraction Sequence 0008,1164 VR SQ
#[rustfmt::skip]
pub const FRAME_EXTRACTION_SEQUENCE: Tag = Tag(0x0008, 0x1164);
/// Transaction UID 0008,1195 VR UI
#[rustfmt::skip]
pub const TRANSACTION_UID: Tag = Tag(0x0008, 0x1195);
/// Failure Reason 0008,1197 VR US
#[rustfmt::skip]
pub const FAILURE_REASON: Tag = Tag(0x0008, 0x1197);
/// Failed SOP Sequence 0008,1198 VR SQ
#[rustfmt::skip]
pub const FAILED_SOP_SEQUENCE: Tag = Tag(0x0008, 0x1198);
/// Referenced SOP Sequence 0008,1199 VR SQ
#[rustfmt::skip]
pub const REFERENCED_SOP_SEQUENCE: Tag = Tag(0x0008, 0x1199);
/// Other Failures Sequence 0008,119A VR SQ
#[rustfmt::skip]
pub const OTHER_FAILURES_SEQUENCE: Tag = Tag(0x0008, 0x119A);
/// Studies Containing Other Referenced Instances Sequence 0008,1200 VR SQ
#[rustfmt::skip]
pub const STUDIES_CONTAINING_OTHER_REFERENCED_INSTANCES_SEQUENCE: Tag = Tag(0x0008, 0x1200);
/// Related Series Sequence 0008,1250 VR SQ
#[rustfmt::skip]
pub const RELATED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1250);
/// Derivation Description 0008,2111 VR ST
#[rustfmt::skip]
pub const DERIVATION_DESCRIPTION: Tag = Tag(0x0008, 0x2111);
/// Source Image Sequence 0008,2112 VR SQ
#[rustfmt::skip]
pub const SOURCE_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x2112);
/// Anatomic Region Sequence 0008,2218 VR SQ
#[rustfmt::skip]
pub const ANATOMIC_REGION_SEQUENCE: Tag = Tag(0x0008, 0x2218);
/// Anatomic Region Modifier Sequence 0008,2220 VR SQ
#[rustfmt::skip]
pub const ANATOMIC_REGION_MODIFIER_SEQUENCE: Tag = Tag(0x0008, 0x2220);
/// Primary Anatomic Structure Sequence 0008,2228 VR SQ
#[rustfmt::skip]
pub const PRIMARY_ANATOMIC_STRUCTURE_SEQUENCE: Tag = Tag(0x0008, 0x2228);
/// Anatomic Structure Space Or Region Sequence 0008,2229 VR SQ
#[rustfmt::skip]
pub const ANATOMIC_STRUCTURE_SPACE_OR_REGION_SEQUENCE: Tag = Tag(0x0008, 0x2229);
/// Primary Anatomic Structure Modifier Sequence 0008,2230 VR SQ
#[rustfmt::skip]
pub const PRIMARY_ANATOMIC_STRUCTURE_MODIFIER_SEQUENCE: Tag = Tag(0x0008, 0x2230);
/// Alternate Representation Sequence 0008,3001 VR SQ
#[rustfmt::skip]
pub const ALTERNATE_REPRESENTATION_SEQUENCE: Tag = Tag(0x0008, 0x3001);
/// Irradiation Event UID 0008,3010 VR UI
#[rustfmt::skip]
pub const IRRADIATION_EVENT_UID: Tag = Tag(0x0008, 0x3010);
/// Frame Type 0008,9007 VR CS
#[rustfmt::skip]
pub const FRAME_TYPE: Tag = Tag(0x0008, 0x9007);
/// Referenced Image Evidence Sequence 0008,9092 VR SQ
#[rustfmt::skip]
pub const REFERENCED_IMAGE_EVIDENCE_SEQUENCE: Tag = Tag(0x0008, 0x9092);
/// Referenced Raw Data Sequence 0008,9121 VR SQ
#[rustfmt::skip]
pub const REFERENCED_RAW_DATA_SEQUENCE: Tag = Tag(0x0008, 0x9121);
/// Derivation Image Sequence 0008,9124 VR SQ
#[rustfmt::skip]
pub const DERIVATION_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x9124);
/// Source Image Evidence Sequence 0008,9154 VR SQ
#[rustfmt::skip]
pub const SOURCE_IMAGE_EVIDENCE_SEQUENCE: Tag = Tag(0x0008, 0x9154);
/// Derivation Code Sequence 0008,9215 VR SQ
#[rustfmt::skip]
pub const DERIVATION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x9215);
/// Referenced Presentation State Sequence 0008,9237 VR SQ
#[rustfmt::skip]
pub const REFERENCED_PRESENTATION_STATE_SEQUENCE: Tag = Tag(0x0008, 0x9237);
/// Referenced Other Plane Sequence 0008,9410 VR SQ
#[rustfmt::skip]
pub const REFERENCED_OTHER_PLANE_SEQUENCE: Tag = Tag(0x0008, 0x9410);
/// Frame Display Sequence 0008,9458 VR SQ
#[rustfmt::skip]
pub const FRAME_DISPLAY_SEQUENCE: Tag = Tag(0x0008, 0x9458);
/// Patient Name 0010,0010 VR PN
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// Patient ID 0010,0020 VR LO
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// Issuer Of Patient ID 0010,0021 VR LO
#[rustfmt::skip]
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
/// Issuer Of Patient ID Qualifiers Sequence 0010,0024 VR SQ
#[rustfmt::skip]
pub const ISSUER_OF_PATIENT_ID_QUALIFIERS_SEQUENCE: Tag = Tag(0x0010, 0x0024);
/// Source Patient Group Identification Sequence 0010,0026 VR SQ
#[rustfmt::skip]
pub const SOURCE_PATIENT_GROUP_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0010, 0x0026);
/// Group Of Patients Identification Sequence 0010,0027 VR SQ
#[rustfmt::skip]
pub const GROUP_OF_PATIENTS_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0010, 0x0027);
/// Patient Birth Date 0010,0030 VR DA
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// Patient Birth Time 0010,0032 VR TM
#[rustfmt::skip]
pub const PATIENT_BIRTH_TIME: Tag = Tag(0x0010, 0x0032);
/// Patient Sex 0010,0040 VR CS
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// Patient Insurance Plan Code Sequence 0010,0050 VR SQ
#[rustfmt::skip]
pub const PATIENT_INSURANCE_PLAN_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0050);
/// Patient Primary Language Code Sequence 0010,0101 VR SQ
#[rustfmt::skip]
pub const PATIENT_PRIMARY_LANGUAGE_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0101);
/// Patient Primary Language Modifier Code Sequence 0010,0102 VR SQ
#[rustfmt::skip]
pub const PATIENT_PRIMARY_LANGUAGE_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0102);
/// Other Patient Names 0010,1001 VR PN
#[rustfmt::skip]
pub const OTHER_PATIENT_NAMES: Tag = Tag(0x0010, 0x1001);
/// Other Patient I Ds Sequence 0010,1002 VR SQ
#[rustfmt::skip]
pub const OTHER_PATIENT_I_DS_SEQUENCE: Tag = Tag(0x0010, 0x1002);
/// Patient Age 0010,1010 VR AS
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// Patient Size 0010,1020 VR DS
#[rustfmt::skip]
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// Patient Weight 0010,1030 VR DS
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// Patient Address 0010,1040 VR LO
#[rustfmt::skip]
pub const PATIENT_ADDRESS: Tag = Tag(0x0010, 0x1040);
/// Referenced Patient Photo Sequence 0010,1100 VR SQ
#[rustfmt::skip]
pub const REFERENCED_PATIENT_PHOTO_SEQUENCE: Tag = Tag(0x0010, 0x1100);
/// Medical Alerts 0010,2000 VR LO
#[rustfmt::skip]
pub const MEDICAL_ALERTS: Tag = Tag(0x0010, 0x2000);
/// Allergies 0010,2110 VR LO
#[rustfmt::skip]
pub const ALLERGIES: Tag = Tag(0x0010, 0x2110);
/// Ethnic Group 0010,2160 VR SH
#[rustfmt::skip]
pub const ETHNIC_GROUP: Tag = Tag(0x0010, 0x2160);
/// Occupation 0010,2180 VR SH
#[rustfmt::skip]
pub const OCCUPATION: Tag = Tag(0x0010, 0x2180);
/// Additional Patient History 0010,21B0 VR LT
#[rustfmt::skip]
pub const ADDITIONAL_PATIENT_HISTORY: Tag = Tag(0x0010, 0x21B0);
/// Pregnancy Status 0010,21C0 VR US
#[rustfmt::skip]
pub const PREGNANCY_STATUS: Tag = Tag(0x0010, 0x21C0);
/// Patient Species Description 0010,2201 VR LO
#[rustfmt::skip]
pub const PATIENT_SPECIES_DESCRIPTION: Tag = Tag(0x0010, 0x2201);
/// Patient Species Code Sequence 0010,2202 VR SQ
#[rustfmt::skip]
pub const PATIENT_SPECIES_CODE_SEQUENCE: Tag = Tag(0x0010, 0x2202);
/// Patient Breed Code Sequence 0010,2293 VR SQ
#[rustfmt::skip]
pub const PATIENT_BREED_CODE_SEQUENCE: Tag = Tag(0x0010, 0x2293);
/// Breed Registration Sequence 0010,2294 VR SQ
#[rustfmt::skip]
pub const BREED_REGISTRATION_SEQUENCE: Tag = Tag(0x0010, 0x2294);
/// Breed Registry Code Sequence 0010,2296 VR SQ
#[rustfmt::skip]
pub const BREED_REGISTRY_CODE_SEQUENCE: Tag = Tag(0x0010, 0x2296);
/// Patient Comments 0010,4000 VR LT
#[rustfmt::skip]
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
/// Clinical Trial Sponsor Name 0012,0010 VR LO
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SPONSOR_NAME: Tag = Tag(0x0012, 0x0010);
/// Clinical Trial Protocol ID 0012,0020 VR LO
#[rustfmt::skip]
pub const CLINICAL_TRIAL_PROTOCOL_ID: Tag = Tag(0x0012, 0x0020);
/// Patient Identity Removed 0012,0062 VR CS
#[rustfmt::skip]
pub const PATIENT_IDENTITY_REMOVED: Tag = Tag(0x0012, 0x0062);
/// Deidentification Method 0012,0063 VR LO
#[rustfmt::skip]
pub const DEIDENTIFICATION_METHOD: Tag = Tag(0x0012, 0x0063);
/// Deidentification Method Code Sequence 0012,0064 VR SQ
#[rustfmt::skip]
pub const DEIDENTIFICATION_METHOD_CODE_SEQUENCE: Tag = Tag(0x0012, 0x0064);
/// Consent For Clinical Trial Use Sequence 0012,0083 VR SQ
#[rustfmt::skip]
pub const CONSENT_FOR_CLINICAL_TRIAL_USE_SEQUENCE: Tag = Tag(0x0012, 0x0083);
/// Contrast Bolus Agent 0018,0010 VR LO
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT: Tag = Tag(0x0018, 0x0010);
/// Contrast Bolus Agent Sequence 0018,0012 VR SQ
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT_SEQUENCE: Tag = Tag(0x0018, 0x0012);
/// Contrast Bolus Administration Route Sequence 0018,0014 VR SQ
#[rustfmt::skip]
pub const CONTRAST_BOLUS_ADMINISTRATION_ROUTE_SEQUENCE: Tag = Tag(0x0018, 0x0014);
/// Body Part Examined 0018,0015 VR CS
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// Scanning Sequence 0018,0020 VR CS
#[rustfmt::skip]
pub const SCANNING_SEQUENCE: Tag = Tag(0x0018, 0x0020);
/// Sequence Variant 0018,0021 VR CS
#[rustfmt::skip]
pub const SEQUENCE_VARIANT: Tag = Tag(0x0018, 0x0021);
/// Scan Options 0018,0022 VR CS
#[rustfmt::skip]
pub const SCAN_OPTIONS: Tag = Tag(0x0018, 0x0022);
/// MR Acquisition Type 0018,0023 VR CS
#[rustfmt::skip]
pub const MR_ACQUISITION_TYPE: Tag = Tag(0x0018, 0x0023);
/// Sequence Name 0018,0024 VR SH
#[rustfmt::skip]
pub const SEQUENCE_NAME: Tag = Tag(0x0018, 0x0024);
/// Intervention Drug Information Sequence 0018,0026 VR SQ
#[rustfmt::skip]
pub const INTERVENTION_DRUG_INFORMATION_SEQUENCE: Tag = Tag(0x0018, 0x0026);
/// Intervention Drug Code Sequence 0018,0029 VR SQ
#[rustfmt::skip]
pub const INTERVENTION_DRUG_CODE_SEQUENCE: Tag = Tag(0x0018, 0x0029);
/// Additional Drug Sequence 0018,002A VR SQ
#[rustfmt::skip]
pub const ADDITIONAL_DRUG_SEQUENCE: Tag = Tag(0x0018, 0x002A);
/// Intervention Sequence 0018,0036 VR SQ
#[rustfmt::skip]
pub const INTERVENTION_SEQUENCE: Tag = Tag(0x0018, 0x0036);
/// Slice Thickness 0018,0050 VR DS
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP 0018,0060 VR DS
#[rustfmt::skip]
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// Repetition Time 0018,0080 VR DS
#[rustfmt::skip]
pub const REPETITION_TIME: Tag = Tag(0x0018, 0x0080);
/// Echo Time 0018,0081 VR DS
#[rustfmt::skip]
pub const ECHO_TIME: Tag = Tag(0x0018, 0x0081);
/// Number Of Averages 0018,0083 VR DS
#[rustfmt::skip]
pub const NUMBER_OF_AVERAGES: Tag = Tag(0x0018, 0x0083);
/// Imaging Frequency 0018,0084 VR DS
#[rustfmt::skip]
pub const IMAGING_FREQUENCY: Tag = Tag(0x0018, 0x0084);
/// Imaged Nucleus 0018,0085 VR SH
#[rustfmt::skip]
pub const IMAGED_NUCLEUS: Tag = Tag(0x0018, 0x0085);
/// Echo Numbers 0018,0086 VR IS
#[rustfmt::skip]
pub const ECHO_NUMBERS: Tag = Tag(0x0018, 0x0086);
/// Magnetic Field Strength 0018,0087 VR DS
#[rustfmt::skip]
pub const MAGNETIC_FIELD_STRENGTH: Tag = Tag(0x0018, 0x0087);
/// Spacing Between Slices 0018,0088 VR DS
#[rustfmt::skip]
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// Data Collection Diameter 0018,0090 VR DS
#[rustfmt::skip]
pub const DATA_COLLECTION_DIAMETER: Tag = Tag(0x0018, 0x0090);
/// Echo Train Length 0018,0091 VR IS
#[rustfmt::skip]
pub const ECHO_TRAIN_LENGTH: Tag = Tag(0x0018, 0x0091);
/// Pixel Bandwidth 0018,0095 VR DS
#[rustfmt::skip]
pub const PIXEL_BANDWIDTH: Tag = Tag(0x0018, 0x0095);
/// Device Serial Number 0018,1000 VR LO
#[rustfmt::skip]
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// Device UID 0018,1002 VR UI
#[rustfmt::skip]
pub const DEVICE_UID: Tag = Tag(0x0018, 0x1002);
/// UDI Sequence 0018,100A VR SQ
#[rustfmt::skip]
pub const UDI_SEQUENCE: Tag = Tag(0x0018, 0x100A);
/// Software Versions 0018,1020 VR LO
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// Protocol Name 0018,1030 VR LO
#[rustfmt::skip]
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// Contrast Bolus Route 0018,1040 VR LO
#[rustfmt::skip]
pub const CONTRAST_BOLUS_ROUTE: Tag = Tag(0x0018, 0x1040);
/// Contrast Bolus Volume 0018,1041 VR DS
#[rustfmt::skip]
pub const CONTRAST_BOLUS_VOLUME: Tag = Tag(0x0018, 0x1041);
/// Trigger Time 0018,1060 VR DS
#[rustfmt::skip]
pub const TRIGGER_TIME: Tag = Tag(0x0018, 0x1060);
/// Frame Time 0018,1063 VR DS
#[rustfmt::skip]
pub const FRAME_TIME: Tag = Tag(0x0018, 0x1063);
/// Heart Rate 0018,1088 VR IS
#[rustfmt::skip]
pub const HEART_RATE: Tag = Tag(0x0018, 0x1088);
/// Reconstruction Diameter 0018,1100 VR DS
#[rustfmt::skip]
pub const RECONSTRUCTION_DIAMETER: Tag = Tag(0x0018, 0x1100);
/// Distance Source To Detector 0018,1110 VR DS
#[rustfmt::skip]
pub const DISTANCE_SOURCE_TO_DETECTOR: Tag = Tag(0x0018, 0x1110);
/// Distance Source To Patient 0018,1111 VR DS
#[rustfmt::skip]
pub const DISTANCE_SOURCE_TO_PATIENT: Tag = Tag(0x0018, 0x1111);
/// Gantry Detector Tilt 0018,1120 VR DS
#[rustfmt::skip]
pub const GANTRY_DETECTOR_TILT: Tag = Tag(0x0018, 0x1120);
/// Table Height 0018,1130 VR DS
#[rustfmt::skip]
pub const TABLE_HEIGHT: Tag = Tag(0x0018, 0x1130);
/// Rotation Direction 0018,1140 VR CS
#[rustfmt::skip]
pub const ROTATION_DIRECTION: Tag = Tag(0x0018, 0x1140);
/// Exposure Time 0018,1150 VR IS
#[rustfmt::skip]
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
/// X Ray Tube Current 0018,1151 VR IS
#[rustfmt::skip]
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// Exposure 0018,1152 VR IS
#[rustfmt::skip]
pub const EXPOSURE: Tag = Tag(0x0018, 0x1152);
/// Filter Type 0018,1160 VR SH
#[rustfmt::skip]
pub const FILTER_TYPE: Tag = Tag(0x0018, 0x1160);
/// Imager Pixel Spacing 0018,1164 VR DS
#[rustfmt::skip]
pub const IMAGER_PIXEL_SPACING: Tag = Tag(0x0018, 0x1164);
/// Generator Power 0018,1170 VR IS
#[rustfmt::skip]
pub const GENERATOR_POWER: Tag = Tag(0x0018, 0x1170);
/// Focal Spots 0018,1190 VR DS
#[rustfmt::skip]
pub const FOCAL_SPOTS: Tag = Tag(0x0018, 0x1190);
/// Convolution Kernel 0018,1210 VR SH
#[rustfmt::skip]
pub const CONVOLUTION_KERNEL: Tag = Tag(0x0018, 0x1210);
/// Receive Coil Name 0018,1250 VR SH
#[rustfmt::skip]
pub const RECEIVE_COIL_NAME: Tag = Tag(0x0018, 0x1250);
/// Transmit Coil Name 0018,1251 VR SH
#[rustfmt::skip]
pub const TRANSMIT_COIL_NAME: Tag = Tag(0x0018, 0x1251);
/// Acquisition Matrix 0018,1310 VR US
#[rustfmt::skip]
pub const ACQUISITION_MATRIX: Tag = Tag(0x0018, 0x1310);
/// In Plane Phase Encoding Direction 0018,1312 VR CS
#[rustfmt::skip]
pub const IN_PLANE_PHASE_ENCODING_DIRECTION: Tag = Tag(0x0018, 0x1312);
/// Flip Angle 0018,1314 VR DS
#[rustfmt::skip]
pub const FLIP_ANGLE: Tag = Tag(0x0018, 0x1314);
/// SAR 0018,1316 VR DS
#[rustfmt::skip]
pub const SAR: Tag = Tag(0x0018, 0x1316);
/// Acquisition Device Processing Description 0018,1400 VR LO
#[rustfmt::skip]
pub const ACQUISITION_DEVICE_PROCESSING_DESCRIPTION: Tag = Tag(0x0018, 0x1400);
/// Patient Position 0018,5100 VR CS
#[rustfmt::skip]
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// View Position 0018,5101 VR CS
#[rustfmt::skip]
pub const VIEW_POSITION: Tag = Tag(0x0018, 0x5101);
/// Sequence Of Ultrasound Regions 0018,6011 VR SQ
#[rustfmt::skip]
pub const SEQUENCE_OF_ULTRASOUND_REGIONS: Tag = Tag(0x0018, 0x6011);
/// Content Qualification 0018,9004 VR CS
#[rustfmt::skip]
pub const CONTENT_QUALIFICATION: Tag = Tag(0x0018, 0x9004);
/// Pulse Sequence Name 0018,9005 VR SH
#[rustfmt::skip]
pub const PULSE_SEQUENCE_NAME: Tag = Tag(0x0018, 0x9005);
/// MR Imaging Modifier Sequence 0018,9006 VR SQ
#[rustfmt::skip]
pub const MR_IMAGING_MODIFIER_SEQUENCE: Tag = Tag(0x0018, 0x9006);
/// MR Receive Coil Sequence 0018,9042 VR SQ
#[rustfmt::skip]
pub const MR_RECEIVE_COIL_SEQUENCE: Tag = Tag(0x0018, 0x9042);
/// MR Transmit Coil Sequence 0018,9049 VR SQ
#[rustfmt::skip]
pub const MR_TRANSMIT_COIL_SEQUENCE: Tag = Tag(0x0018, 0x9049);
/// Acquisition Duration 0018,9073 VR FD
#[rustfmt::skip]
pub const ACQUISITION_DURATION: Tag = Tag(0x0018, 0x9073);
/// Diffusion Gradient Direction Sequence 0018,9076 VR SQ
#[rustfmt::skip]
pub const DIFFUSION_GRADIENT_DIRECTION_SEQUENCE: Tag = Tag(0x0018, 0x9076);
/// Metabolite Map Code Sequence 0018,9083 VR SQ
#[rustfmt::skip]
pub const METABOLITE_MAP_CODE_SEQUENCE: Tag = Tag(0x0018, 0x9083);
/// Chemical Shift Sequence 0018,9084 VR SQ
#[rustfmt::skip]
pub const CHEMICAL_SHIFT_SEQUENCE: Tag = Tag(0x0018, 0x9084);
/// Diffusion B Value 0018,9087 VR FD
#[rustfmt::skip]
pub const DIFFUSION_B_VALUE: Tag = Tag(0x0018, 0x9087);
/// Diffusion Gradient Orientation 0018,9089 VR FD
#[rustfmt::skip]
pub const DIFFUSION_GRADIENT_ORIENTATION: Tag = Tag(0x0018, 0x9089);
/// MR Spectroscopy FOV Geometry Sequence 0018,9103 VR SQ
#[rustfmt::skip]
pub const MR_SPECTROSCOPY_FOV_GEOMETRY_SEQUENCE: Tag = Tag(0x0018, 0x9103);
/// MR Spatial Saturation Sequence 0018,9107 VR SQ
#[rustfmt::skip]
pub const MR_SPATIAL_SATURATION_SEQUENCE: Tag = Tag(0x0018, 0x9107);
/// MR Timing And Related Parameters Sequence 0018,9112 VR SQ
#[rustfmt::skip]
pub const MR_TIMING_AND_RELATED_PARAMETERS_SEQUENCE: Tag = Tag(0x0018, 0x9112);
/// MR Echo Sequence 0018,9114 VR SQ
#[rustfmt::skip]
pub const MR_ECHO_SEQUENCE: Tag = Tag(0x0018, 0x9114);
/// MR Modifier Sequence 0018,9115 VR SQ
#[rustfmt::skip]
pub const MR_MODIFIER_SEQUENCE: Tag = Tag(0x0018, 0x9115);
/// MR Diffusion Sequence 0018,9117 VR SQ
#[rustfmt::skip]
pub const MR_DIFFUSION_SEQUENCE: Tag = Tag(0x0018, 0x9117);
/// Cardiac Synchronization Sequence 0018,9118 VR SQ
#[rustfmt::skip]
pub const CARDIAC_SYNCHRONIZATION_SEQUENCE: Tag = Tag(0x0018, 0x9118);
/// MR Averages Sequence 0018,9119 VR SQ
#[rustfmt::skip]
pub const MR_AVERAGES_SEQUENCE: Tag = Tag(0x0018, 0x9119);
/// MR FOV Geometry Sequence 0018,9125 VR SQ
#[rustfmt::skip]
pub const MR_FOV_GEOMETRY_SEQUENCE: Tag = Tag(0x0018, 0x9125);
/// Volume Localization Sequence 0018,9126 VR SQ
#[rustfmt::skip]
pub const VOLUME_LOCALIZATION_SEQUENCE: Tag = Tag(0x0018, 0x9126);
/// MR Metabolite Map Sequence 0018,9152 VR SQ
#[rustfmt::skip]
pub const MR_METABOLITE_MAP_SEQUENCE: Tag = Tag(0x0018, 0x9152);
/// Operating Mode Sequence 0018,9176 VR SQ
#[rustfmt::skip]
pub const OPERATING_MODE_SEQUENCE: Tag = Tag(0x0018, 0x9176);
/// MR Velocity Encoding Sequence 0018,9197 VR SQ
#[rustfmt::skip]
pub const MR_VELOCITY_ENCODING_SEQUENCE: Tag = Tag(0x0018, 0x9197);
/// MR Image Frame Type Sequence 0018,9226 VR SQ
#[rustfmt::skip]
pub const MR_IMAGE_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9226);
/// MR Spectroscopy Frame Type Sequence 0018,9227 VR SQ
#[rustfmt::skip]
pub const MR_SPECTROSCOPY_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9227);
/// Specific Absorption Rate Sequence 0018,9239 VR SQ
#[rustfmt::skip]
pub const SPECIFIC_ABSORPTION_RATE_SEQUENCE: Tag = Tag(0x0018, 0x9239);
/// MR Arterial Spin Labeling Sequence 0018,9251 VR SQ
#[rustfmt::skip]
pub const MR_ARTERIAL_SPIN_LABELING_SEQUENCE: Tag = Tag(0x0018, 0x9251);
/// CT Acquisition Type Sequence 0018,9301 VR SQ
#[rustfmt::skip]
pub const CT_ACQUISITION_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9301);
/// CT Acquisition Details Sequence 0018,9304 VR SQ
#[rustfmt::skip]
pub const CT_ACQUISITION_DETAILS_SEQUENCE: Tag = Tag(0x0018, 0x9304);
/// CT Table Dynamics Sequence 0018,9308 VR SQ
#[rustfmt::skip]
pub const CT_TABLE_DYNAMICS_SEQUENCE: Tag = Tag(0x0018, 0x9308);
/// CT Geometry Sequence 0018,9312 VR SQ
#[rustfmt::skip]
pub const CT_GEOMETRY_SEQUENCE: Tag = Tag(0x0018, 0x9312);
/// CT Reconstruction Sequence 0018,9314 VR SQ
#[rustfmt::skip]
pub const CT_RECONSTRUCTION_SEQUENCE: Tag = Tag(0x0018, 0x9314);
/// CT Exposure Sequence 0018,9321 VR SQ
#[rustfmt::skip]
pub const CT_EXPOSURE_SEQUENCE: Tag = Tag(0x0018, 0x9321);
/// CT X-Ray Details Sequence 0018,9325 VR SQ
#[rustfmt::skip]
pub const CT_X_RAY_DETAILS_SEQUENCE: Tag = Tag(0x0018, 0x9325);
/// CT Position Sequence 0018,9326 VR SQ
#[rustfmt::skip]
pub const CT_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9326);
/// CT Image Frame Type Sequence 0018,9329 VR SQ
#[rustfmt::skip]
pub const CT_IMAGE_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9329);
/// Contrast Bolus Ingredient Code Sequence 0018,9338 VR SQ
#[rustfmt::skip]
pub const CONTRAST_BOLUS_INGREDIENT_CODE_SEQUENCE: Tag = Tag(0x0018, 0x9338);
/// Contrast Administration Profile Sequence 0018,9340 VR SQ
#[rustfmt::skip]
pub const CONTRAST_ADMINISTRATION_PROFILE_SEQUENCE: Tag = Tag(0x0018, 0x9340);
/// Contrast Bolus Usage Sequence 0018,9341 VR SQ
#[rustfmt::skip]
pub const CONTRAST_BOLUS_USAGE_SEQUENCE: Tag = Tag(0x0018, 0x9341);
/// CTDIvol 0018,9345 VR FD
#[rustfmt::skip]
pub const CTDIVOL: Tag = Tag(0x0018, 0x9345);
/// CTDI Phantom Type Code Sequence 0018,9346 VR SQ
#[rustfmt::skip]
pub const CTDI_PHANTOM_TYPE_CODE_SEQUENCE: Tag = Tag(0x0018, 0x9346);
/// CT Additional X-Ray Source Sequence 0018,9360 VR SQ
#[rustfmt::skip]
pub const CT_ADDITIONAL_X_RAY_SOURCE_SEQUENCE: Tag = Tag(0x0018, 0x9360);
/// Projection Pixel Calibration Sequence 0018,9401 VR SQ
#[rustfmt::skip]
pub const PROJECTION_PIXEL_CALIBRATION_SEQUENCE: Tag = Tag(0x0018, 0x9401);
/// Positioner Position Sequence 0018,9405 VR SQ
#[rustfmt::skip]
pub const POSITIONER_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9405);
/// Table Position Sequence 0018,9406 VR SQ
#[rustfmt::skip]
pub const TABLE_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9406);
/// Collimator Shape Sequence 0018,9407 VR SQ
#[rustfmt::skip]
pub const COLLIMATOR_SHAPE_SEQUENCE: Tag = Tag(0x0018, 0x9407);
/// XA/XRF Frame Characteristics Sequence 0018,9412 VR SQ
#[rustfmt::skip]
pub const XA_XRF_FRAME_CHARACTERISTICS_SEQUENCE: Tag = Tag(0x0018, 0x9412);
/// Frame Acquisition Sequence 0018,9417 VR SQ
#[rustfmt::skip]
pub const FRAME_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9417);
/// Field Of View Sequence 0018,9432 VR SQ
#[rustfmt::skip]
pub const FIELD_OF_VIEW_SEQUENCE: Tag = Tag(0x0018, 0x9432);
/// Exposure Control Sensing Regions Sequence 0018,9434 VR SQ
#[rustfmt::skip]
pub const EXPOSURE_CONTROL_SENSING_REGIONS_SEQUENCE: Tag = Tag(0x0018, 0x9434);
/// Frame Detector Parameters Sequence 0018,9451 VR SQ
#[rustfmt::skip]
pub const FRAME_DETECTOR_PARAMETERS_SEQUENCE: Tag = Tag(0x0018, 0x9451);
/// Calibration Sequence 0018,9455 VR SQ
#[rustfmt::skip]
pub const CALIBRATION_SEQUENCE: Tag = Tag(0x0018, 0x9455);
/// Object Thickness Sequence 0018,9456 VR SQ
#[rustfmt::skip]
pub const OBJECT_THICKNESS_SEQUENCE: Tag = Tag(0x0018, 0x9456);
/// Frame Display Shutter Sequence 0018,9472 VR SQ
#[rustfmt::skip]
pub const FRAME_DISPLAY_SHUTTER_SEQUENCE: Tag = Tag(0x0018, 0x9472);
/// X-Ray 3D Frame Type Sequence 0018,9476 VR SQ
#[rustfmt::skip]
pub const X_RAY_3D_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9476);
/// Contributing Sources Sequence 0018,9477 VR SQ
#[rustfmt::skip]
pub const CONTRIBUTING_SOURCES_SEQUENCE: Tag = Tag(0x0018, 0x9477);
/// X-Ray 3D Acquisition Sequence 0018,9504 VR SQ
#[rustfmt::skip]
pub const X_RAY_3D_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9504);
/// X-Ray 3D Reconstruction Sequence 0018,9530 VR SQ
#[rustfmt::skip]
pub const X_RAY_3D_RECONSTRUCTION_SEQUENCE: Tag = Tag(0x0018, 0x9530);
/// PET Frame Acquisition Sequence 0018,9732 VR SQ
#[rustfmt::skip]
pub const PET_FRAME_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9732);
/// PET Detector Motion Details Sequence 0018,9733 VR SQ
#[rustfmt::skip]
pub const PET_DETECTOR_MOTION_DETAILS_SEQUENCE: Tag = Tag(0x0018, 0x9733);
/// PET Table Dynamics Sequence 0018,9734 VR SQ
#[rustfmt::skip]
pub const PET_TABLE_DYNAMICS_SEQUENCE: Tag = Tag(0x0018, 0x9734);
/// PET Position Sequence 0018,9735 VR SQ
#[rustfmt::skip]
pub const PET_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9735);
/// PET Frame Correction Factors Sequence 0018,9736 VR SQ
#[rustfmt::skip]
pub const PET_FRAME_CORRECTION_FACTORS_SEQUENCE: Tag = Tag(0x0018, 0x9736);
/// Radiopharmaceutical Usage Sequence 0018,9737 VR SQ
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_USAGE_SEQUENCE: Tag = Tag(0x0018, 0x9737);
/// PET Reconstruction Sequence 0018,9749 VR SQ
#[rustfmt::skip]
pub const PET_RECONSTRUCTION_SEQUENCE: Tag = Tag(0x0018, 0x9749);
/// PET Frame Type Sequence 0018,9751 VR SQ
#[rustfmt::skip]
pub const PET_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9751);
/// Patient Physiological State Sequence 0018,9771 VR SQ
#[rustfmt::skip]
pub const PATIENT_PHYSIOLOGICAL_STATE_SEQUENCE: Tag = Tag(0x0018, 0x9771);
/// Excluded Intervals Sequence 0018,9803 VR SQ
#[rustfmt::skip]
pub const EXCLUDED_INTERVALS_SEQUENCE: Tag = Tag(0x0018, 0x9803);
/// Contributing Equipment Sequence 0018,A001 VR SQ
#[rustfmt::skip]
pub const CONTRIBUTING_EQUIPMENT_SEQUENCE: Tag = Tag(0x0018, 0xA001);
/// Study Instance UID 0020,000D VR UI
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// Series Instance UID 0020,000E VR UI
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// Study ID 0020,0010 VR SH
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// Series Number 0020,0011 VR IS
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// Acquisition Number 0020,0012 VR IS
#[rustfmt::skip]
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// Instance Number 0020,0013 VR IS
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// Patient Orientation 0020,0020 VR CS
#[rustfmt::skip]
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// Image Position Patient 0020,0032 VR DS
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// Image Orientation Patient 0020,0037 VR DS
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// Frame Of Reference UID 0020,0052 VR UI
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// Laterality 0020,0060 VR CS
#[rustfmt::skip]
pub const LATERALITY: Tag = Tag(0x0020, 0x0060);
/// Image Laterality 0020,0062 VR CS
#[rustfmt::skip]
pub const IMAGE_LATERALITY: Tag = Tag(0x0020, 0x0062);
/// Temporal Position Identifier 0020,0100 VR IS
#[rustfmt::skip]
pub const TEMPORAL_POSITION_IDENTIFIER: Tag = Tag(0x0020, 0x0100);
/// Number Of Temporal Positions 0020,0105 VR IS
#[rustfmt::skip]
pub const NUMBER_OF_TEMPORAL_POSITIONS: Tag = Tag(0x0020, 0x0105);
/// Synchronization Frame Of Reference UID 0020,0200 VR UI
#[rustfmt::skip]
pub const SYNCHRONIZATION_FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0200);
/// Position Reference Indicator 0020,1040 VR LO
#[rustfmt::skip]
pub const POSITION_REFERENCE_INDICATOR: Tag = Tag(0x0020, 0x1040);
/// Slice Location 0020,1041 VR DS
#[rustfmt::skip]
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// Image Comments 0020,4000 VR LT
#[rustfmt::skip]
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// Stack ID 0020,9056 VR SH
#[rustfmt::skip]
pub const STACK_ID: Tag = Tag(0x0020, 0x9056);
/// In Stack Position Number 0020,9057 VR UL
#[rustfmt::skip]
pub const IN_STACK_POSITION_NUMBER: Tag = Tag(0x0020, 0x9057);
/// Frame Anatomy Sequence 0020,9071 VR SQ
#[rustfmt::skip]
pub const FRAME_ANATOMY_SEQUENCE: Tag = Tag(0x0020, 0x9071);
/// Frame Content Sequence 0020,9111 VR SQ
#[rustfmt::skip]
pub const FRAME_CONTENT_SEQUENCE: Tag = Tag(0x0020, 0x9111);
/// Plane Position Sequence 0020,9113 VR SQ
#[rustfmt::skip]
pub const PLANE_POSITION_SEQUENCE: Tag = Tag(0x0020, 0x9113);
/// Plane Orientation Sequence 0020,9116 VR SQ
#[rustfmt::skip]
pub const PLANE_ORIENTATION_SEQUENCE: Tag = Tag(0x0020, 0x9116);
/// Temporal Position Index 0020,9128 VR UL
#[rustfmt::skip]
pub const TEMPORAL_POSITION_INDEX: Tag = Tag(0x0020, 0x9128);
/// Dimension Index Values 0020,9157 VR UL
#[rustfmt::skip]
pub const DIMENSION_INDEX_VALUES: Tag = Tag(0x0020, 0x9157);
/// Concatenation UID 0020,9161 VR UI
#[rustfmt::skip]
pub const CONCATENATION_UID: Tag = Tag(0x0020, 0x9161);
/// In Concatenation Number 0020,9162 VR US
#[rustfmt::skip]
pub const IN_CONCATENATION_NUMBER: Tag = Tag(0x0020, 0x9162);
/// In Concatenation Total Number 0020,9163 VR US
#[rustfmt::skip]
pub const IN_CONCATENATION_TOTAL_NUMBER: Tag = Tag(0x0020, 0x9163);
/// Dimension Organization UID 0020,9164 VR UI
#[rustfmt::skip]
pub const DIMENSION_ORGANIZATION_UID: Tag = Tag(0x0020, 0x9164);
/// Dimension Index Pointer 0020,9165 VR AT
#[rustfmt::skip]
pub const DIMENSION_INDEX_POINTER: Tag = Tag(0x0020, 0x9165);
/// Functional Group Pointer 0020,9167 VR AT
#[rustfmt::skip]
pub const FUNCTIONAL_GROUP_POINTER: Tag = Tag(0x0020, 0x9167);
/// Dimension Organization Sequence 0020,9221 VR SQ
#[rustfmt::skip]
pub const DIMENSION_ORGANIZATION_SEQUENCE: Tag = Tag(0x0020, 0x9221);
/// Dimension Index Sequence 0020,9222 VR SQ
#[rustfmt::skip]
pub const DIMENSION_INDEX_SEQUENCE: Tag = Tag(0x0020, 0x9222);
/// Respiratory Synchronization Sequence 0020,9253 VR SQ
#[rustfmt::skip]
pub const RESPIRATORY_SYNCHRONIZATION_SEQUENCE: Tag = Tag(0x0020, 0x9253);
/// Plane Position Volume Sequence 0020,930E VR SQ
#[rustfmt::skip]
pub const PLANE_POSITION_VOLUME_SEQUENCE: Tag = Tag(0x0020, 0x930E);
/// Plane Orientation Volume Sequence 0020,930F VR SQ
#[rustfmt::skip]
pub const PLANE_ORIENTATION_VOLUME_SEQUENCE: Tag = Tag(0x0020, 0x930F);
/// Temporal Position Sequence 0020,9310 VR SQ
#[rustfmt::skip]
pub const TEMPORAL_POSITION_SEQUENCE: Tag = Tag(0x0020, 0x9310);
/// Contributing SOP Instances Reference Sequence 0020,9529 VR SQ
#[rustfmt::skip]
pub const CONTRIBUTING_SOP_INSTANCES_REFERENCE_SEQUENCE: Tag = Tag(0x0020, 0x9529);
/// Acquisition Device Type Code Sequence 0022,0015 VR SQ
#[rustfmt::skip]
pub const ACQUISITION_DEVICE_TYPE_CODE_SEQUENCE: Tag = Tag(0x0022, 0x0015);
/// Illumination Type Code Sequence 0022,0016 VR SQ
#[rustfmt::skip]
pub const ILLUMINATION_TYPE_CODE_SEQUENCE: Tag = Tag(0x0022, 0x0016);
/// Light Path Filter Type Stack Code Sequence 0022,0017 VR SQ
#[rustfmt::skip]
pub const LIGHT_PATH_FILTER_TYPE_STACK_CODE_SEQUENCE: Tag = Tag(0x0022, 0x0017);
/// Lenses Code Sequence 0022,0019 VR SQ
#[rustfmt::skip]
pub const LENSES_CODE_SEQUENCE: Tag = Tag(0x0022, 0x0019);
/// Refractive State Sequence 0022,001B VR SQ
#[rustfmt::skip]
pub const REFRACTIVE_STATE_SEQUENCE: Tag = Tag(0x0022, 0x001B);
/// Samples Per Pixel 0028,0002 VR US
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// Photometric Interpretation 0028,0004 VR CS
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// Planar Configuration 0028,0006 VR US
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// Number Of Frames 0028,0008 VR IS
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// Frame Increment Pointer 0028,0009 VR AT
#[rustfmt::skip]
pub const FRAME_INCREMENT_POINTER: Tag = Tag(0x0028, 0x0009);
/// Rows 0028,0010 VR US
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns 0028,0011 VR US
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// Pixel Spacing 0028,0030 VR DS
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// Pixel Aspect Ratio 0028,0034 VR IS
#[rustfmt::skip]
pub const PIXEL_ASPECT_RATIO: Tag = Tag(0x0028, 0x0034);
/// Corrected Image 0028,0051 VR CS
#[rustfmt::skip]
pub const CORRECTED_IMAGE: Tag = Tag(0x0028, 0x0051);
/// Bits Allocated 0028,0100 VR US
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// Bits Stored 0028,0101 VR US
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// High Bit 0028,0102 VR US
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// Pixel Representation 0028,0103 VR US
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// Smallest Image Pixel Value 0028,0106 VR US
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// Largest Image Pixel Value 0028,0107 VR US
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// Burned In Annotation 0028,0301 VR CS
#[rustfmt::skip]
pub const BURNED_IN_ANNOTATION: Tag = Tag(0x0028, 0x0301);
/// Pixel Intensity Relationship 0028,1040 VR CS
#[rustfmt::skip]
pub const PIXEL_INTENSITY_RELATIONSHIP: Tag = Tag(0x0028, 0x1040);
/// Pixel Intensity Relationship Sign 0028,1041 VR SS
#[rustfmt::skip]
pub const PIXEL_INTENSITY_RELATIONSHIP_SIGN: Tag = Tag(0x0028, 0x1041);
/// Window Center 0028,1050 VR DS
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// Window Width 0028,1051 VR DS
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// Rescale Intercept 0028,1052 VR DS
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// Rescale Slope 0028,1053 VR DS
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// Rescale Type 0028,1054 VR LO
#[rustfmt::skip]
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// Window Center Width Explanation 0028,1055 VR LO
#[rustfmt::skip]
pub const WINDOW_CENTER_WIDTH_EXPLANATION: Tag = Tag(0x0028, 0x1055);
/// VOI LUT Function 0028,1056 VR CS
#[rustfmt::skip]
pub const VOI_LUT_FUNCTION: Tag = Tag(0x0028, 0x1056);
/// Red Palette Color Lookup Table Descriptor 0028,1101 VR US
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1101);
/// Green Palette Color Lookup Table Descriptor 0028,1102 VR US
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1102);
/// Blue Palette Color Lookup Table Descriptor 0028,1103 VR US
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1103);
/// Palette Color Lookup Table UID 0028,1199 VR UI
#[rustfmt::skip]
pub const PALETTE_COLOR_LOOKUP_TABLE_UID: Tag = Tag(0x0028, 0x1199);
/// Red Palette Color Lookup Table Data 0028,1201 VR OW
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1201);
/// Green Palette Color Lookup Table Data 0028,1202 VR OW
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1202);
/// Blue Palette Color Lookup Table Data 0028,1203 VR OW
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1203);
/// Partial View 0028,1350 VR CS
#[rustfmt::skip]
pub const PARTIAL_VIEW: Tag = Tag(0x0028, 0x1350);
/// Partial View Code Sequence 0028,1352 VR SQ
#[rustfmt::skip]
pub const PARTIAL_VIEW_CODE_SEQUENCE: Tag = Tag(0x0028, 0x1352);
/// ICC Profile 0028,2000 VR OB
#[rustfmt::skip]
pub const ICC_PROFILE: Tag = Tag(0x0028, 0x2000);
/// Lossy Image Compression 0028,2110 VR CS
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// Lossy Image Compression Ratio 0028,2112 VR DS
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_RATIO: Tag = Tag(0x0028, 0x2112);
/// Lossy Image Compression Method 0028,2114 VR CS
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_METHOD: Tag = Tag(0x0028, 0x2114);
/// Modality LUT Sequence 0028,3000 VR SQ
#[rustfmt::skip]
pub const MODALITY_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3000);
/// LUT Descriptor 0028,3002 VR US
#[rustfmt::skip]
pub const LUT_DESCRIPTOR: Tag = Tag(0x0028, 0x3002);
/// LUT Explanation 0028,3003 VR LO
#[rustfmt::skip]
pub const LUT_EXPLANATION: Tag = Tag(0x0028, 0x3003);
/// Modality LUT Type 0028,3004 VR LO
#[rustfmt::skip]
pub const MODALITY_LUT_TYPE: Tag = Tag(0x0028, 0x3004);
/// LUT Data 0028,3006 VR US
#[rustfmt::skip]
pub const LUT_DATA: Tag = Tag(0x0028, 0x3006);
/// VOILUT Sequence 0028,3010 VR SQ
#[rustfmt::skip]
pub const VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x3010);
/// Softcopy VOI LUT Sequence 0028,3110 VR SQ
#[rustfmt::skip]
pub const SOFTCOPY_VOI_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3110);
/// Mask Subtraction Sequence 0028,6100 VR SQ
#[rustfmt::skip]
pub const MASK_SUBTRACTION_SEQUENCE: Tag = Tag(0x0028, 0x6100);
/// Pixel Measures Sequence 0028,9110 VR SQ
#[rustfmt::skip]
pub const PIXEL_MEASURES_SEQUENCE: Tag = Tag(0x0028, 0x9110);
/// Frame VOI LUT Sequence 0028,9132 VR SQ
#[rustfmt::skip]
pub const FRAME_VOI_LUT_SEQUENCE: Tag = Tag(0x0028, 0x9132);
/// Pixel Value Transformation Sequence 0028,9145 VR SQ
#[rustfmt::skip]
pub const PIXEL_VALUE_TRANSFORMATION_SEQUENCE: Tag = Tag(0x0028, 0x9145);
/// Frame Pixel Shift Sequence 0028,9415 VR SQ
#[rustfmt::skip]
pub const FRAME_PIXEL_SHIFT_SEQUENCE: Tag = Tag(0x0028, 0x9415);
/// Pixel Intensity Relationship LUT Sequence 0028,9422 VR SQ
#[rustfmt::skip]
pub const PIXEL_INTENSITY_RELATIONSHIP_LUT_SEQUENCE: Tag = Tag(0x0028, 0x9422);
/// Frame Pixel Data Properties Sequence 0028,9443 VR SQ
#[rustfmt::skip]
pub const FRAME_PIXEL_DATA_PROPERTIES_SEQUENCE: Tag = Tag(0x0028, 0x9443);
/// Pixel Shift Sequence 0028,9501 VR SQ
#[rustfmt::skip]
pub const PIXEL_SHIFT_SEQUENCE: Tag = Tag(0x0028, 0x9501);
/// Pixel Shift Frame Range 0028,9506 VR US
#[rustfmt::skip]
pub const PIXEL_SHIFT_FRAME_RANGE: Tag = Tag(0x0028, 0x9506);
/// Image To Equipment Mapping Matrix 0028,9520 VR DS
#[rustfmt::skip]
pub const IMAGE_TO_EQUIPMENT_MAPPING_MATRIX: Tag = Tag(0x0028, 0x9520);
/// Equipment Coordinate System Identification 0028,9537 VR CS
#[rustfmt::skip]
pub const EQUIPMENT_COORDINATE_SYSTEM_IDENTIFICATION: Tag = Tag(0x0028, 0x9537);
/// Requesting Physician Identification Sequence 0032,1031 VR SQ
#[rustfmt::skip]
pub const REQUESTING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0032, 0x1031);
/// Requesting Physician 0032,1032 VR PN
#[rustfmt::skip]
pub const REQUESTING_PHYSICIAN: Tag = Tag(0x0032, 0x1032);
/// Requesting Service 0032,1033 VR LO
#[rustfmt::skip]
pub const REQUESTING_SERVICE: Tag = Tag(0x0032, 0x1033);
/// Requesting Service Code Sequence 0032,1034 VR SQ
#[rustfmt::skip]
pub const REQUESTING_SERVICE_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1034);
/// Requested Procedure Description 0032,1060 VR LO
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
/// Requested Procedure Code Sequence 0032,1064 VR SQ
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1064);
/// Requested Contrast Agent 0032,1070 VR LO
#[rustfmt::skip]
pub const REQUESTED_CONTRAST_AGENT: Tag = Tag(0x0032, 0x1070);
/// Study Comments 0032,4000 VR LT
#[rustfmt::skip]
pub const STUDY_COMMENTS: Tag = Tag(0x0032, 0x4000);
/// Referenced Patient Alias Sequence 0038,0004 VR SQ
#[rustfmt::skip]
pub const REFERENCED_PATIENT_ALIAS_SEQUENCE: Tag = Tag(0x0038, 0x0004);
/// Admission ID 0038,0010 VR LO
#[rustfmt::skip]
pub const ADMISSION_ID: Tag = Tag(0x0038, 0x0010);
/// Issuer Of Admission ID Sequence 0038,0014 VR SQ
#[rustfmt::skip]
pub const ISSUER_OF_ADMISSION_ID_SEQUENCE: Tag = Tag(0x0038, 0x0014);
/// Issuer Of Service Episode ID Sequence 0038,0064 VR SQ
#[rustfmt::skip]
pub const ISSUER_OF_SERVICE_EPISODE_ID_SEQUENCE: Tag = Tag(0x0038, 0x0064);
/// Pertinent Documents Sequence 0038,0100 VR SQ
#[rustfmt::skip]
pub const PERTINENT_DOCUMENTS_SEQUENCE: Tag = Tag(0x0038, 0x0100);
/// Patient State 0038,0500 VR LO
#[rustfmt::skip]
pub const PATIENT_STATE: Tag = Tag(0x0038, 0x0500);
/// Number Of Waveform Channels 003A,0005 VR US
#[rustfmt::skip]
pub const NUMBER_OF_WAVEFORM_CHANNELS: Tag = Tag(0x003A, 0x0005);
/// Number Of Waveform Samples 003A,0010 VR UL
#[rustfmt::skip]
pub const NUMBER_OF_WAVEFORM_SAMPLES: Tag = Tag(0x003A, 0x0010);
/// Sampling Frequency 003A,001A VR DS
#[rustfmt::skip]
pub const SAMPLING_FREQUENCY: Tag = Tag(0x003A, 0x001A);
/// Channel Definition Sequence 003A,0200 VR SQ
#[rustfmt::skip]
pub const CHANNEL_DEFINITION_SEQUENCE: Tag = Tag(0x003A, 0x0200);
/// Channel Source Sequence 003A,0208 VR SQ
#[rustfmt::skip]
pub const CHANNEL_SOURCE_SEQUENCE: Tag = Tag(0x003A, 0x0208);
/// Channel Source Modifiers Sequence 003A,0209 VR SQ
#[rustfmt::skip]
pub const CHANNEL_SOURCE_MODIFIERS_SEQUENCE: Tag = Tag(0x003A, 0x0209);
/// Source Waveform Sequence 003A,020A VR SQ
#[rustfmt::skip]
pub const SOURCE_WAVEFORM_SEQUENCE: Tag = Tag(0x003A, 0x020A);
/// Channel Sensitivity Units Sequence 003A,0211 VR SQ
#[rustfmt::skip]
pub const CHANNEL_SENSITIVITY_UNITS_SEQUENCE: Tag = Tag(0x003A, 0x0211);
/// Multiplexed Audio Channels Description Code Sequence 003A,0300 VR SQ
#[rustfmt::skip]
pub const MULTIPLEXED_AUDIO_CHANNELS_DESCRIPTION_CODE_SEQUENCE: Tag = Tag(0x003A, 0x0300);
/// Scheduled Station AE Title 0040,0001 VR AE
#[rustfmt::skip]
pub const SCHEDULED_STATION_AE_TITLE: Tag = Tag(0x0040, 0x0001);
/// Scheduled Procedure Step Start Date 0040,0002 VR DA
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0002);
/// Scheduled Procedure Step Start Time 0040,0003 VR TM
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0003);
/// Scheduled Performing Physician Name 0040,0006 VR PN
#[rustfmt::skip]
pub const SCHEDULED_PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0040, 0x0006);
/// Scheduled Procedure Step Description 0040,0007 VR LO
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0007);
/// Scheduled Protocol Code Sequence 0040,0008 VR SQ
#[rustfmt::skip]
pub const SCHEDULED_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0008);
/// Scheduled Procedure Step ID 0040,0009 VR SH
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0009);
/// Scheduled Performing Physician Identification Sequence 0040,000B VR SQ
#[rustfmt::skip]
pub const SCHEDULED_PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0040, 0x000B);
/// Order Placer Identifier Sequence 0040,0026 VR SQ
#[rustfmt::skip]
pub const ORDER_PLACER_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0026);
/// Order Filler Identifier Sequence 0040,0027 VR SQ
#[rustfmt::skip]
pub const ORDER_FILLER_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0027);
/// Scheduled Procedure Step Sequence 0040,0100 VR SQ
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0040, 0x0100);
/// Referenced Non Image Composite SOP Instance Sequence 0040,0220 VR SQ
#[rustfmt::skip]
pub const REFERENCED_NON_IMAGE_COMPOSITE_SOP_INSTANCE_SEQUENCE: Tag = Tag(0x0040, 0x0220);
/// Performed Station AE Title 0040,0241 VR AE
#[rustfmt::skip]
pub const PERFORMED_STATION_AE_TITLE: Tag = Tag(0x0040, 0x0241);
/// Performed Procedure Step Start Date 0040,0244 VR DA
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// Performed Procedure Step Start Time 0040,0245 VR TM
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0245);
/// Performed Procedure Step ID 0040,0253 VR SH
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0253);
/// Performed Procedure Step Description 0040,0254 VR LO
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0254);
/// Performed Protocol Code Sequence 0040,0260 VR SQ
#[rustfmt::skip]
pub const PERFORMED_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0260);
/// Scheduled Step Attributes Sequence 0040,0270 VR SQ
#[rustfmt::skip]
pub const SCHEDULED_STEP_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0270);
/// Request Attributes Sequence 0040,0275 VR SQ
#[rustfmt::skip]
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// Comments On The Performed Procedure Step 0040,0280 VR ST
#[rustfmt::skip]
pub const COMMENTS_ON_THE_PERFORMED_PROCEDURE_STEP: Tag = Tag(0x0040, 0x0280);
/// Performed Procedure Step Discontinuation Reason Code Sequence 0040,0281 VR SQ
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_DISCONTINUATION_REASON_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0281);
/// Quantity Sequence 0040,0293 VR SQ
#[rustfmt::skip]
pub const QUANTITY_SEQUENCE: Tag = Tag(0x0040, 0x0293);
/// Quantity 0040,0294 VR DS
#[rustfmt::skip]
pub const QUANTITY: Tag = Tag(0x0040, 0x0294);
/// Measuring Units Sequence 0040,0295 VR SQ
#[rustfmt::skip]
pub const MEASURING_UNITS_SEQUENCE: Tag = Tag(0x0040, 0x0295);
/// Billing Item Sequence 0040,0296 VR SQ
#[rustfmt::skip]
pub const BILLING_ITEM_SEQUENCE: Tag = Tag(0x0040, 0x0296);
/// Billing Procedure Step Sequence 0040,0320 VR SQ
#[rustfmt::skip]
pub const BILLING_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0040, 0x0320);
/// Film Consumption Sequence 0040,0321 VR SQ
#[rustfmt::skip]
pub const FILM_CONSUMPTION_SEQUENCE: Tag = Tag(0x0040, 0x0321);
/// Billing Supplies And Devices Sequence 0040,0324 VR SQ
#[rustfmt::skip]
pub const BILLING_SUPPLIES_AND_DEVICES_SEQUENCE: Tag = Tag(0x0040, 0x0324);
/// Performed Series Sequence 0040,0340 VR SQ
#[rustfmt::skip]
pub const PERFORMED_SERIES_SEQUENCE: Tag = Tag(0x0040, 0x0340);
/// Protocol Context Sequence 0040,0440 VR SQ
#[rustfmt::skip]
pub const PROTOCOL_CONTEXT_SEQUENCE: Tag = Tag(0x0040, 0x0440);
/// Content Item Modifier Sequence 0040,0441 VR SQ
#[rustfmt::skip]
pub const CONTENT_ITEM_MODIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0441);
/// Scheduled Specimen Sequence 0040,0500 VR SQ
#[rustfmt::skip]
pub const SCHEDULED_SPECIMEN_SEQUENCE: Tag = Tag(0x0040, 0x0500);
/// Container Identifier 0040,0512 VR LO
#[rustfmt::skip]
pub const CONTAINER_IDENTIFIER: Tag = Tag(0x0040, 0x0512);
/// Issuer Of The Container Identifier Sequence 0040,0513 VR SQ
#[rustfmt::skip]
pub const ISSUER_OF_THE_CONTAINER_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0513);
/// Alternate Container Identifier Sequence 0040,0515 VR SQ
#[rustfmt::skip]
pub const ALTERNATE_CONTAINER_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0515);
/// Container Type Code Sequence 0040,0518 VR SQ
#[rustfmt::skip]
pub const CONTAINER_TYPE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0518);
/// Container Component Sequence 0040,0520 VR SQ
#[rustfmt::skip]
pub const CONTAINER_COMPONENT_SEQUENCE: Tag = Tag(0x0040, 0x0520);
/// Acquisition Context Sequence 0040,0555 VR SQ
#[rustfmt::skip]
pub const ACQUISITION_CONTEXT_SEQUENCE: Tag = Tag(0x0040, 0x0555);
/// Specimen Description Sequence 0040,0560 VR SQ
#[rustfmt::skip]
pub const SPECIMEN_DESCRIPTION_SEQUENCE: Tag = Tag(0x0040, 0x0560);
/// Issuer Of The Specimen Identifier Sequence 0040,0562 VR SQ
#[rustfmt::skip]
pub const ISSUER_OF_THE_SPECIMEN_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0562);
/// Specimen Preparation Sequence 0040,0610 VR SQ
#[rustfmt::skip]
pub const SPECIMEN_PREPARATION_SEQUENCE: Tag = Tag(0x0040, 0x0610);
/// Specimen Preparation Step Content Item Sequence 0040,0612 VR SQ
#[rustfmt::skip]
pub const SPECIMEN_PREPARATION_STEP_CONTENT_ITEM_SEQUENCE: Tag = Tag(0x0040, 0x0612);
/// Specimen Localization Content Item Sequence 0040,0620 VR SQ
#[rustfmt::skip]
pub const SPECIMEN_LOCALIZATION_CONTENT_ITEM_SEQUENCE: Tag = Tag(0x0040, 0x0620);
/// Whole Slide Microscopy Image Frame Type Sequence 0040,0710 VR SQ
#[rustfmt::skip]
pub const WHOLE_SLIDE_MICROSCOPY_IMAGE_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0040, 0x0710);
/// Image Center Point Coordinates Sequence 0040,071A VR SQ
#[rustfmt::skip]
pub const IMAGE_CENTER_POINT_COORDINATES_SEQUENCE: Tag = Tag(0x0040, 0x071A);
/// Measurement Units Code Sequence 0040,08EA VR SQ
#[rustfmt::skip]
pub const MEASUREMENT_UNITS_CODE_SEQUENCE: Tag = Tag(0x0040, 0x08EA);
/// Requested Procedure ID 0040,1001 VR SH
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_ID: Tag = Tag(0x0040, 0x1001);
/// Reason For The Requested Procedure 0040,1002 VR LO
#[rustfmt::skip]
pub const REASON_FOR_THE_REQUESTED_PROCEDURE: Tag = Tag(0x0040, 0x1002);
/// Reason For Requested Procedure Code Sequence 0040,100A VR SQ
#[rustfmt::skip]
pub const REASON_FOR_REQUESTED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x100A);
/// Intended Recipients Of Results Identification Sequence 0040,1011 VR SQ
#[rustfmt::skip]
pub const INTENDED_RECIPIENTS_OF_RESULTS_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0040, 0x1011);
/// Reason For Performed Procedure Code Sequence 0040,1012 VR SQ
#[rustfmt::skip]
pub const REASON_FOR_PERFORMED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x1012);
/// Person Identification Code Sequence 0040,1101 VR SQ
#[rustfmt::skip]
pub const PERSON_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0040, 0x1101);
/// Referenced Image Real World Value Mapping Sequence 0040,9094 VR SQ
#[rustfmt::skip]
pub const REFERENCED_IMAGE_REAL_WORLD_VALUE_MAPPING_SEQUENCE: Tag = Tag(0x0040, 0x9094);
/// Real World Value Mapping Sequence 0040,9096 VR SQ
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_MAPPING_SEQUENCE: Tag = Tag(0x0040, 0x9096);
/// LUT Label 0040,9210 VR SH
#[rustfmt::skip]
pub const LUT_LABEL: Tag = Tag(0x0040, 0x9210);
/// Real World Value LUT Data 0040,9212 VR FD
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_LUT_DATA: Tag = Tag(0x0040, 0x9212);
/// Real World Value Intercept 0040,9224 VR FD
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_INTERCEPT: Tag = Tag(0x0040, 0x9224);
/// Real World Value Slope 0040,9225 VR FD
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_SLOPE: Tag = Tag(0x0040, 0x9225);
/// Relationship Type 0040,A010 VR CS
#[rustfmt::skip]
pub const RELATIONSHIP_TYPE: Tag = Tag(0x0040, 0xA010);
/// Value Type 0040,A040 VR CS
#[rustfmt::skip]
pub const VALUE_TYPE: Tag = Tag(0x0040, 0xA040);
/// Concept Name Code Sequence 0040,A043 VR SQ
#[rustfmt::skip]
pub const CONCEPT_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA043);
/// Verifying Observer Sequence 0040,A073 VR SQ
#[rustfmt::skip]
pub const VERIFYING_OBSERVER_SEQUENCE: Tag = Tag(0x0040, 0xA073);
/// Verifying Observer Name 0040,A075 VR PN
#[rustfmt::skip]
pub const VERIFYING_OBSERVER_NAME: Tag = Tag(0x0040, 0xA075);
/// Author Observer Sequence 0040,A078 VR SQ
#[rustfmt::skip]
pub const AUTHOR_OBSERVER_SEQUENCE: Tag = Tag(0x0040, 0xA078);
/// Participant Sequence 0040,A07A VR SQ
#[rustfmt::skip]
pub const PARTICIPANT_SEQUENCE: Tag = Tag(0x0040, 0xA07A);
/// Custodial Organization Sequence 0040,A07C VR SQ
#[rustfmt::skip]
pub const CUSTODIAL_ORGANIZATION_SEQUENCE: Tag = Tag(0x0040, 0xA07C);
/// Verifying Observer Identification Code Sequence 0040,A088 VR SQ
#[rustfmt::skip]
pub const VERIFYING_OBSERVER_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA088);
/// Date Time 0040,A120 VR DT
#[rustfmt::skip]
pub const DATE_TIME: Tag = Tag(0x0040, 0xA120);
/// Date 0040,A121 VR DA
#[rustfmt::skip]
pub const DATE: Tag = Tag(0x0040, 0xA121);
/// Time 0040,A122 VR TM
#[rustfmt::skip]
pub const TIME: Tag = Tag(0x0040, 0xA122);
/// Person Name 0040,A123 VR PN
#[rustfmt::skip]
pub const PERSON_NAME: Tag = Tag(0x0040, 0xA123);
/// UID 0040,A124 VR UI
#[rustfmt::skip]
pub const UID: Tag = Tag(0x0040, 0xA124);
/// Text Value 0040,A160 VR UT
#[rustfmt::skip]
pub const TEXT_VALUE: Tag = Tag(0x0040, 0xA160);
/// Concept Code Sequence 0040,A168 VR SQ
#[rustfmt::skip]
pub const CONCEPT_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA168);
/// Purpose Of Reference Code Sequence 0040,A170 VR SQ
#[rustfmt::skip]
pub const PURPOSE_OF_REFERENCE_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA170);
/// Modifier Code Sequence 0040,A195 VR SQ
#[rustfmt::skip]
pub const MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA195);
/// Measured Value Sequence 0040,A300 VR SQ
#[rustfmt::skip]
pub const MEASURED_VALUE_SEQUENCE: Tag = Tag(0x0040, 0xA300);
/// Numeric Value Qualifier Code Sequence 0040,A301 VR SQ
#[rustfmt::skip]
pub const NUMERIC_VALUE_QUALIFIER_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA301);
/// Numeric Value 0040,A30A VR DS
#[rustfmt::skip]
pub const NUMERIC_VALUE: Tag = Tag(0x0040, 0xA30A);
/// Predecessor Documents Sequence 0040,A360 VR SQ
#[rustfmt::skip]
pub const PREDECESSOR_DOCUMENTS_SEQUENCE: Tag = Tag(0x0040, 0xA360);
/// Referenced Request Sequence 0040,A370 VR SQ
#[rustfmt::skip]
pub const REFERENCED_REQUEST_SEQUENCE: Tag = Tag(0x0040, 0xA370);
/// Performed Procedure Code Sequence 0040,A372 VR SQ
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA372);
/// Current Requested Procedure Evidence Sequence 0040,A375 VR SQ
#[rustfmt::skip]
pub const CURRENT_REQUESTED_PROCEDURE_EVIDENCE_SEQUENCE: Tag = Tag(0x0040, 0xA375);
/// Pertinent Other Evidence Sequence 0040,A385 VR SQ
#[rustfmt::skip]
pub const PERTINENT_OTHER_EVIDENCE_SEQUENCE: Tag = Tag(0x0040, 0xA385);
/// HL7 Structured Document Reference Sequence 0040,A390 VR SQ
#[rustfmt::skip]
pub const HL7_STRUCTURED_DOCUMENT_REFERENCE_SEQUENCE: Tag = Tag(0x0040, 0xA390);
/// Completion Flag 0040,A491 VR CS
#[rustfmt::skip]
pub const COMPLETION_FLAG: Tag = Tag(0x0040, 0xA491);
/// Verification Flag 0040,A493 VR CS
#[rustfmt::skip]
pub const VERIFICATION_FLAG: Tag = Tag(0x0040, 0xA493);
/// Content Template Sequence 0040,A504 VR SQ
#[rustfmt::skip]
pub const CONTENT_TEMPLATE_SEQUENCE: Tag = Tag(0x0040, 0xA504);
/// Identical Documents Sequence 0040,A525 VR SQ
#[rustfmt::skip]
pub const IDENTICAL_DOCUMENTS_SEQUENCE: Tag = Tag(0x0040, 0xA525);
/// Content Sequence 0040,A730 VR SQ
#[rustfmt::skip]
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// Template Identifier 0040,DB00 VR CS
#[rustfmt::skip]
pub const TEMPLATE_IDENTIFIER: Tag = Tag(0x0040, 0xDB00);
/// Document Title 0042,0010 VR ST
#[rustfmt::skip]
pub const DOCUMENT_TITLE: Tag = Tag(0x0042, 0x0010);
/// Encapsulated Document 0042,0011 VR OB
#[rustfmt::skip]
pub const ENCAPSULATED_DOCUMENT: Tag = Tag(0x0042, 0x0011);
/// MIME Type Of Encapsulated Document 0042,0012 VR LO
#[rustfmt::skip]
pub const MIME_TYPE_OF_ENCAPSULATED_DOCUMENT: Tag = Tag(0x0042, 0x0012);
/// Source Instance Sequence 0042,0013 VR SQ
#[rustfmt::skip]
pub const SOURCE_INSTANCE_SEQUENCE: Tag = Tag(0x0042, 0x0013);
/// Imaged Volume Width 0048,0001 VR FL
#[rustfmt::skip]
pub const IMAGED_VOLUME_WIDTH: Tag = Tag(0x0048, 0x0001);
/// Imaged Volume Height 0048,0002 VR FL
#[rustfmt::skip]
pub const IMAGED_VOLUME_HEIGHT: Tag = Tag(0x0048, 0x0002);
/// Imaged Volume Depth 0048,0003 VR FL
#[rustfmt::skip]
pub const IMAGED_VOLUME_DEPTH: Tag = Tag(0x0048, 0x0003);
/// Total Pixel Matrix Columns 0048,0006 VR UL
#[rustfmt::skip]
pub const TOTAL_PIXEL_MATRIX_COLUMNS: Tag = Tag(0x0048, 0x0006);
/// Total Pixel Matrix Rows 0048,0007 VR UL
#[rustfmt::skip]
pub const TOTAL_PIXEL_MATRIX_ROWS: Tag = Tag(0x0048, 0x0007);
/// Total Pixel Matrix Origin Sequence 0048,0008 VR SQ
#[rustfmt::skip]
pub const TOTAL_PIXEL_MATRIX_ORIGIN_SEQUENCE: Tag = Tag(0x0048, 0x0008);
/// Illuminator Type Code Sequence 0048,0100 VR SQ
#[rustfmt::skip]
pub const ILLUMINATOR_TYPE_CODE_SEQUENCE: Tag = Tag(0x0048, 0x0100);
/// Image Orientation Slide 0048,0102 VR DS
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_SLIDE: Tag = Tag(0x0048, 0x0102);
/// Optical Path Sequence 0048,0105 VR SQ
#[rustfmt::skip]
pub const OPTICAL_PATH_SEQUENCE: Tag = Tag(0x0048, 0x0105);
/// Optical Path Identifier 0048,0106 VR SH
#[rustfmt::skip]
pub const OPTICAL_PATH_IDENTIFIER: Tag = Tag(0x0048, 0x0106);
/// Illumination Color Code Sequence 0048,0108 VR SQ
#[rustfmt::skip]
pub const ILLUMINATION_COLOR_CODE_SEQUENCE: Tag = Tag(0x0048, 0x0108);
/// Specimen Reference Sequence 0048,0110 VR SQ
#[rustfmt::skip]
pub const SPECIMEN_REFERENCE_SEQUENCE: Tag = Tag(0x0048, 0x0110);
/// Referenced Image Navigation Sequence 0048,0200 VR SQ
#[rustfmt::skip]
pub const REFERENCED_IMAGE_NAVIGATION_SEQUENCE: Tag = Tag(0x0048, 0x0200);
/// Plane Position Slide Sequence 0048,021A VR SQ
#[rustfmt::skip]
pub const PLANE_POSITION_SLIDE_SEQUENCE: Tag = Tag(0x0048, 0x021A);
/// Calibration Image 0050,0004 VR CS
#[rustfmt::skip]
pub const CALIBRATION_IMAGE: Tag = Tag(0x0050, 0x0004);
/// Device Sequence 0050,0010 VR SQ
#[rustfmt::skip]
pub const DEVICE_SEQUENCE: Tag = Tag(0x0050, 0x0010);
/// Number Of Energy Windows 0054,0011 VR US
#[rustfmt::skip]
pub const NUMBER_OF_ENERGY_WINDOWS: Tag = Tag(0x0054, 0x0011);
/// Energy Window Information Sequence 0054,0012 VR SQ
#[rustfmt::skip]
pub const ENERGY_WINDOW_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0012);
/// Energy Window Range Sequence 0054,0013 VR SQ
#[rustfmt::skip]
pub const ENERGY_WINDOW_RANGE_SEQUENCE: Tag = Tag(0x0054, 0x0013);
/// Radiopharmaceutical Information Sequence 0054,0016 VR SQ
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0016);
/// Energy Window Name 0054,0018 VR SH
#[rustfmt::skip]
pub const ENERGY_WINDOW_NAME: Tag = Tag(0x0054, 0x0018);
/// Detector Information Sequence 0054,0022 VR SQ
#[rustfmt::skip]
pub const DETECTOR_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0022);
/// Phase Information Sequence 0054,0032 VR SQ
#[rustfmt::skip]
pub const PHASE_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0032);
/// Rotation Information Sequence 0054,0052 VR SQ
#[rustfmt::skip]
pub const ROTATION_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0052);
/// Gated Information Sequence 0054,0062 VR SQ
#[rustfmt::skip]
pub const GATED_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0062);
/// Data Information Sequence 0054,0063 VR SQ
#[rustfmt::skip]
pub const DATA_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0063);
/// Number Of Time Slots 0054,0071 VR US
#[rustfmt::skip]
pub const NUMBER_OF_TIME_SLOTS: Tag = Tag(0x0054, 0x0071);
/// Time Slot Information Sequence 0054,0072 VR SQ
#[rustfmt::skip]
pub const TIME_SLOT_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0072);
/// Number Of Slices 0054,0081 VR US
#[rustfmt::skip]
pub const NUMBER_OF_SLICES: Tag = Tag(0x0054, 0x0081);
/// Number Of Time Slices 0054,0101 VR US
#[rustfmt::skip]
pub const NUMBER_OF_TIME_SLICES: Tag = Tag(0x0054, 0x0101);
/// View Code Sequence 0054,0220 VR SQ
#[rustfmt::skip]
pub const VIEW_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0220);
/// View Modifier Code Sequence 0054,0222 VR SQ
#[rustfmt::skip]
pub const VIEW_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0222);
/// Radionuclide Code Sequence 0054,0300 VR SQ
#[rustfmt::skip]
pub const RADIONUCLIDE_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0300);
/// Administration Route Code Sequence 0054,0302 VR SQ
#[rustfmt::skip]
pub const ADMINISTRATION_ROUTE_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0302);
/// Radiopharmaceutical Code Sequence 0054,0304 VR SQ
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0304);
/// Calibration Data Sequence 0054,0306 VR SQ
#[rustfmt::skip]
pub const CALIBRATION_DATA_SEQUENCE: Tag = Tag(0x0054, 0x0306);
/// Image ID 0054,0400 VR SH
#[rustfmt::skip]
pub const IMAGE_ID: Tag = Tag(0x0054, 0x0400);
/// Patient Orientation Code Sequence 0054,0410 VR SQ
#[rustfmt::skip]
pub const PATIENT_ORIENTATION_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0410);
/// Patient Orientation Modifier Code Sequence 0054,0412 VR SQ
#[rustfmt::skip]
pub const PATIENT_ORIENTATION_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0412);
/// Patient Gantry Relationship Code Sequence 0054,0414 VR SQ
#[rustfmt::skip]
pub const PATIENT_GANTRY_RELATIONSHIP_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0414);
/// Series Type 0054,1000 VR CS
#[rustfmt::skip]
pub const SERIES_TYPE: Tag = Tag(0x0054, 0x1000);
/// Units 0054,1001 VR CS
#[rustfmt::skip]
pub const UNITS: Tag = Tag(0x0054, 0x1001);
/// Counts Source 0054,1002 VR CS
#[rustfmt::skip]
pub const COUNTS_SOURCE: Tag = Tag(0x0054, 0x1002);
/// Decay Correction 0054,1102 VR CS
#[rustfmt::skip]
pub const DECAY_CORRECTION: Tag = Tag(0x0054, 0x1102);
/// Frame Reference Time 0054,1300 VR DS
#[rustfmt::skip]
pub const FRAME_REFERENCE_TIME: Tag = Tag(0x0054, 0x1300);
/// Image Index 0054,1330 VR US
#[rustfmt::skip]
pub const IMAGE_INDEX: Tag = Tag(0x0054, 0x1330);
/// Histogram Sequence 0060,3000 VR SQ
#[rustfmt::skip]
pub const HISTOGRAM_SEQUENCE: Tag = Tag(0x0060, 0x3000);
/// Segmentation Type 0062,0001 VR CS
#[rustfmt::skip]
pub const SEGMENTATION_TYPE: Tag = Tag(0x0062, 0x0001);
/// Segment Sequence 0062,0002 VR SQ
#[rustfmt::skip]
pub const SEGMENT_SEQUENCE: Tag = Tag(0x0062, 0x0002);
/// Segmented Property Category Code Sequence 0062,0003 VR SQ
#[rustfmt::skip]
pub const SEGMENTED_PROPERTY_CATEGORY_CODE_SEQUENCE: Tag = Tag(0x0062, 0x0003);
/// Segment Number 0062,0004 VR US
#[rustfmt::skip]
pub const SEGMENT_NUMBER: Tag = Tag(0x0062, 0x0004);
/// Segment Label 0062,0005 VR LO
#[rustfmt::skip]
pub const SEGMENT_LABEL: Tag = Tag(0x0062, 0x0005);
/// Segment Algorithm Type 0062,0008 VR CS
#[rustfmt::skip]
pub const SEGMENT_ALGORITHM_TYPE: Tag = Tag(0x0062, 0x0008);
/// Segment Identification Sequence 0062,000A VR SQ
#[rustfmt::skip]
pub const SEGMENT_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0062, 0x000A);
/// Referenced Segment Number 0062,000B VR US
#[rustfmt::skip]
pub const REFERENCED_SEGMENT_NUMBER: Tag = Tag(0x0062, 0x000B);
/// Segmented Property Type Code Sequence 0062,000F VR SQ
#[rustfmt::skip]
pub const SEGMENTED_PROPERTY_TYPE_CODE_SEQUENCE: Tag = Tag(0x0062, 0x000F);
/// Segmented Property Type Modifier Code Sequence 0062,0011 VR SQ
#[rustfmt::skip]
pub const SEGMENTED_PROPERTY_TYPE_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0062, 0x0011);
/// Deformable Registration Sequence 0064,0002 VR SQ
#[rustfmt::skip]
pub const DEFORMABLE_REGISTRATION_SEQUENCE: Tag = Tag(0x0064, 0x0002);
/// Deformable Registration Grid Sequence 0064,0005 VR SQ
#[rustfmt::skip]
pub const DEFORMABLE_REGISTRATION_GRID_SEQUENCE: Tag = Tag(0x0064, 0x0005);
/// Pre Deformation Matrix Registration Sequence 0064,000F VR SQ
#[rustfmt::skip]
pub const PRE_DEFORMATION_MATRIX_REGISTRATION_SEQUENCE: Tag = Tag(0x0064, 0x000F);
/// Post Deformation Matrix Registration Sequence 0064,0010 VR SQ
#[rustfmt::skip]
pub const POST_DEFORMATION_MATRIX_REGISTRATION_SEQUENCE: Tag = Tag(0x0064, 0x0010);
/// Surface Sequence 0066,0002 VR SQ
#[rustfmt::skip]
pub const SURFACE_SEQUENCE: Tag = Tag(0x0066, 0x0002);
/// Surface Points Sequence 0066,0011 VR SQ
#[rustfmt::skip]
pub const SURFACE_POINTS_SEQUENCE: Tag = Tag(0x0066, 0x0011);
/// Surface Points Normals Sequence 0066,0012 VR SQ
#[rustfmt::skip]
pub const SURFACE_POINTS_NORMALS_SEQUENCE: Tag = Tag(0x0066, 0x0012);
/// Surface Mesh Primitives Sequence 0066,0013 VR SQ
#[rustfmt::skip]
pub const SURFACE_MESH_PRIMITIVES_SEQUENCE: Tag = Tag(0x0066, 0x0013);
/// Graphic Annotation Sequence 0070,0001 VR SQ
#[rustfmt::skip]
pub const GRAPHIC_ANNOTATION_SEQUENCE: Tag = Tag(0x0070, 0x0001);
/// Graphic Layer 0070,0002 VR CS
#[rustfmt::skip]
pub const GRAPHIC_LAYER: Tag = Tag(0x0070, 0x0002);
/// Unformatted Text Value 0070,0006 VR ST
#[rustfmt::skip]
pub const UNFORMATTED_TEXT_VALUE: Tag = Tag(0x0070, 0x0006);
/// Text Object Sequence 0070,0008 VR SQ
#[rustfmt::skip]
pub const TEXT_OBJECT_SEQUENCE: Tag = Tag(0x0070, 0x0008);
/// Graphic Object Sequence 0070,0009 VR SQ
#[rustfmt::skip]
pub const GRAPHIC_OBJECT_SEQUENCE: Tag = Tag(0x0070, 0x0009);
/// Graphic Data 0070,0022 VR FL
#[rustfmt::skip]
pub const GRAPHIC_DATA: Tag = Tag(0x0070, 0x0022);
/// Graphic Type 0070,0023 VR CS
#[rustfmt::skip]
pub const GRAPHIC_TYPE: Tag = Tag(0x0070, 0x0023);
/// Image Horizontal Flip 0070,0041 VR CS
#[rustfmt::skip]
pub const IMAGE_HORIZONTAL_FLIP: Tag = Tag(0x0070, 0x0041);
/// Image Rotation 0070,0042 VR US
#[rustfmt::skip]
pub const IMAGE_ROTATION: Tag = Tag(0x0070, 0x0042);
/// Displayed Area Selection Sequence 0070,005A VR SQ
#[rustfmt::skip]
pub const DISPLAYED_AREA_SELECTION_SEQUENCE: Tag = Tag(0x0070, 0x005A);
/// Graphic Layer Sequence 0070,0060 VR SQ
#[rustfmt::skip]
pub const GRAPHIC_LAYER_SEQUENCE: Tag = Tag(0x0070, 0x0060);
/// Content Label 0070,0080 VR CS
#[rustfmt::skip]
pub const CONTENT_LABEL: Tag = Tag(0x0070, 0x0080);
/// Content Description 0070,0081 VR LO
#[rustfmt::skip]
pub const CONTENT_DESCRIPTION: Tag = Tag(0x0070, 0x0081);
/// Presentation Creation Date 0070,0082 VR DA
#[rustfmt::skip]
pub const PRESENTATION_CREATION_DATE: Tag = Tag(0x0070, 0x0082);
/// Presentation Creation Time 0070,0083 VR TM
#[rustfmt::skip]
pub const PRESENTATION_CREATION_TIME: Tag = Tag(0x0070, 0x0083);
/// Content Creator Name 0070,0084 VR PN
#[rustfmt::skip]
pub const CONTENT_CREATOR_NAME: Tag = Tag(0x0070, 0x0084);
/// Content Creator Identification Code Sequence 0070,0086 VR SQ
#[rustfmt::skip]
pub const CONTENT_CREATOR_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0070, 0x0086);
/// Registration Sequence 0070,0308 VR SQ
#[rustfmt::skip]
pub const REGISTRATION_SEQUENCE: Tag = Tag(0x0070, 0x0308);
/// Matrix Registration Sequence 0070,0309 VR SQ
#[rustfmt::skip]
pub const MATRIX_REGISTRATION_SEQUENCE: Tag = Tag(0x0070, 0x0309);
/// Matrix Sequence 0070,030A VR SQ
#[rustfmt::skip]
pub const MATRIX_SEQUENCE: Tag = Tag(0x0070, 0x030A);
/// Registration Type Code Sequence 0070,030D VR SQ
#[rustfmt::skip]
pub const REGISTRATION_TYPE_CODE_SEQUENCE: Tag = Tag(0x0070, 0x030D);
/// Used Fiducials Sequence 0070,0314 VR SQ
#[rustfmt::skip]
pub const USED_FIDUCIALS_SEQUENCE: Tag = Tag(0x0070, 0x0314);
/// Fiducial Set Sequence 0070,031C VR SQ
#[rustfmt::skip]
pub const FIDUCIAL_SET_SEQUENCE: Tag = Tag(0x0070, 0x031C);
/// Fiducial Sequence 0070,031E VR SQ
#[rustfmt::skip]
pub const FIDUCIAL_SEQUENCE: Tag = Tag(0x0070, 0x031E);
/// Blending Sequence 0070,0402 VR SQ
#[rustfmt::skip]
pub const BLENDING_SEQUENCE: Tag = Tag(0x0070, 0x0402);
/// Referenced Spatial Registration Sequence 0070,0404 VR SQ
#[rustfmt::skip]
pub const REFERENCED_SPATIAL_REGISTRATION_SEQUENCE: Tag = Tag(0x0070, 0x0404);
/// Hanging Protocol Definition Sequence 0072,000C VR SQ
#[rustfmt::skip]
pub const HANGING_PROTOCOL_DEFINITION_SEQUENCE: Tag = Tag(0x0072, 0x000C);
/// Image Sets Sequence 0072,0020 VR SQ
#[rustfmt::skip]
pub const IMAGE_SETS_SEQUENCE: Tag = Tag(0x0072, 0x0020);
/// Image Set Selector Sequence 0072,0022 VR SQ
#[rustfmt::skip]
pub const IMAGE_SET_SELECTOR_SEQUENCE: Tag = Tag(0x0072, 0x0022);
/// Time Based Image Sets Sequence 0072,0030 VR SQ
#[rustfmt::skip]
pub const TIME_BASED_IMAGE_SETS_SEQUENCE: Tag = Tag(0x0072, 0x0030);
/// Display Sets Sequence 0072,0200 VR SQ
#[rustfmt::skip]
pub const DISPLAY_SETS_SEQUENCE: Tag = Tag(0x0072, 0x0200);
/// Storage Media File Set UID 0088,0140 VR UI
#[rustfmt::skip]
pub const STORAGE_MEDIA_FILE_SET_UID: Tag = Tag(0x0088, 0x0140);
/// Icon Image Sequence 0088,0200 VR SQ
#[rustfmt::skip]
pub const ICON_IMAGE_SEQUENCE: Tag = Tag(0x0088, 0x0200);
/// Digital Signature UID 0400,0100 VR UI
#[rustfmt::skip]
pub const DIGITAL_SIGNATURE_UID: Tag = Tag(0x0400, 0x0100);
/// Encrypted Attributes Sequence 0400,0500 VR SQ
#[rustfmt::skip]
pub const ENCRYPTED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0500);
/// Encrypted Content Transfer Syntax UID 0400,0510 VR UI
#[rustfmt::skip]
pub const ENCRYPTED_CONTENT_TRANSFER_SYNTAX_UID: Tag = Tag(0x0400, 0x0510);
/// Encrypted Content 0400,0520 VR OB
#[rustfmt::skip]
pub const ENCRYPTED_CONTENT: Tag = Tag(0x0400, 0x0520);
/// Modified Attributes Sequence 0400,0550 VR SQ
#[rustfmt::skip]
pub const MODIFIED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0550);
/// Original Attributes Sequence 0400,0561 VR SQ
#[rustfmt::skip]
pub const ORIGINAL_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0561);
/// Basic Grayscale Image Sequence 2020,0110 VR SQ
#[rustfmt::skip]
pub const BASIC_GRAYSCALE_IMAGE_SEQUENCE: Tag = Tag(0x2020, 0x0110);
/// Basic Color Image Sequence 2020,0111 VR SQ
#[rustfmt::skip]
pub const BASIC_COLOR_IMAGE_SEQUENCE: Tag = Tag(0x2020, 0x0111);
/// Presentation LUT Sequence 2050,0010 VR SQ
#[rustfmt::skip]
pub const PRESENTATION_LUT_SEQUENCE: Tag = Tag(0x2050, 0x0010);
/// Presentation LUT Shape 2050,0020 VR CS
#[rustfmt::skip]
pub const PRESENTATION_LUT_SHAPE: Tag = Tag(0x2050, 0x0020);
/// RT Image Label 3002,0002 VR SH
#[rustfmt::skip]
pub const RT_IMAGE_LABEL: Tag = Tag(0x3002, 0x0002);
/// Exposure Sequence 3002,0030 VR SQ
#[rustfmt::skip]
pub const EXPOSURE_SEQUENCE: Tag = Tag(0x3002, 0x0030);
/// Dose Units 3004,0002 VR CS
#[rustfmt::skip]
pub const DOSE_UNITS: Tag = Tag(0x3004, 0x0002);
/// Dose Type 3004,0004 VR CS
#[rustfmt::skip]
pub const DOSE_TYPE: Tag = Tag(0x3004, 0x0004);
/// Dose Summation Type 3004,000A VR CS
#[rustfmt::skip]
pub const DOSE_SUMMATION_TYPE: Tag = Tag(0x3004, 0x000A);
/// Grid Frame Offset Vector 3004,000C VR DS
#[rustfmt::skip]
pub const GRID_FRAME_OFFSET_VECTOR: Tag = Tag(0x3004, 0x000C);
/// Dose Grid Scaling 3004,000E VR DS
#[rustfmt::skip]
pub const DOSE_GRID_SCALING: Tag = Tag(0x3004, 0x000E);
/// RT Dose ROI Sequence 3004,0010 VR SQ
#[rustfmt::skip]
pub const RT_DOSE_ROI_SEQUENCE: Tag = Tag(0x3004, 0x0010);
/// DVH Sequence 3004,0050 VR SQ
#[rustfmt::skip]
pub const DVH_SEQUENCE: Tag = Tag(0x3004, 0x0050);
/// DVH Referenced ROI Sequence 3004,0060 VR SQ
#[rustfmt::skip]
pub const DVH_REFERENCED_ROI_SEQUENCE: Tag = Tag(0x3004, 0x0060);
/// Structure Set Label 3006,0002 VR SH
#[rustfmt::skip]
pub const STRUCTURE_SET_LABEL: Tag = Tag(0x3006, 0x0002);
/// Structure Set Name 3006,0004 VR LO
#[rustfmt::skip]
pub const STRUCTURE_SET_NAME: Tag = Tag(0x3006, 0x0004);
/// Structure Set Date 3006,0008 VR DA
#[rustfmt::skip]
pub const STRUCTURE_SET_DATE: Tag = Tag(0x3006, 0x0008);
/// Structure Set Time 3006,0009 VR TM
#[rustfmt::skip]
pub const STRUCTURE_SET_TIME: Tag = Tag(0x3006, 0x0009);
/// Referenced Frame Of Reference Sequence 3006,0010 VR SQ
#[rustfmt::skip]
pub const REFERENCED_FRAME_OF_REFERENCE_SEQUENCE: Tag = Tag(0x3006, 0x0010);
/// RT Referenced Study Sequence 3006,0012 VR SQ
#[rustfmt::skip]
pub const RT_REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x3006, 0x0012);
/// RT Referenced Series Sequence 3006,0014 VR SQ
#[rustfmt::skip]
pub const RT_REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x3006, 0x0014);
/// Contour Image Sequence 3006,0016 VR SQ
#[rustfmt::skip]
pub const CONTOUR_IMAGE_SEQUENCE: Tag = Tag(0x3006, 0x0016);
/// Structure Set ROI Sequence 3006,0020 VR SQ
#[rustfmt::skip]
pub const STRUCTURE_SET_ROI_SEQUENCE: Tag = Tag(0x3006, 0x0020);
/// ROI Number 3006,0022 VR IS
#[rustfmt::skip]
pub const ROI_NUMBER: Tag = Tag(0x3006, 0x0022);
/// Referenced Frame Of Reference UID 3006,0024 VR UI
#[rustfmt::skip]
pub const REFERENCED_FRAME_OF_REFERENCE_UID: Tag = Tag(0x3006, 0x0024);
/// ROI Name 3006,0026 VR LO
#[rustfmt::skip]
pub const ROI_NAME: Tag = Tag(0x3006, 0x0026);
/// ROI Description 3006,0028 VR ST
#[rustfmt::skip]
pub const ROI_DESCRIPTION: Tag = Tag(0x3006, 0x0028);
/// ROI Display Color 3006,002A VR IS
#[rustfmt::skip]
pub const ROI_DISPLAY_COLOR: Tag = Tag(0x3006, 0x002A);
/// RT Related ROI Sequence 3006,0030 VR SQ
#[rustfmt::skip]
pub const RT_RELATED_ROI_SEQUENCE: Tag = Tag(0x3006, 0x0030);
/// ROI Generation Algorithm 3006,0036 VR CS
#[rustfmt::skip]
pub const ROI_GENERATION_ALGORITHM: Tag = Tag(0x3006, 0x0036);
/// ROI Contour Sequence 3006,0039 VR SQ
#[rustfmt::skip]
pub const ROI_CONTOUR_SEQUENCE: Tag = Tag(0x3006, 0x0039);
/// Contour Sequence 3006,0040 VR SQ
#[rustfmt::skip]
pub const CONTOUR_SEQUENCE: Tag = Tag(0x3006, 0x0040);
/// Contour Geometric Type 3006,0042 VR CS
#[rustfmt::skip]
pub const CONTOUR_GEOMETRIC_TYPE: Tag = Tag(0x3006, 0x0042);
/// Number Of Contour Points 3006,0046 VR IS
#[rustfmt::skip]
pub const NUMBER_OF_CONTOUR_POINTS: Tag = Tag(0x3006, 0x0046);
/// Contour Number 3006,0048 VR IS
#[rustfmt::skip]
pub const CONTOUR_NUMBER: Tag = Tag(0x3006, 0x0048);
/// Contour Data 3006,0050 VR DS
#[rustfmt::skip]
pub const CONTOUR_DATA: Tag = Tag(0x3006, 0x0050);
/// RT ROI Observations Sequence 3006,0080 VR SQ
#[rustfmt::skip]
pub const RT_ROI_OBSERVATIONS_SEQUENCE: Tag = Tag(0x3006, 0x0080);
/// Observation Number 3006,0082 VR IS
#[rustfmt::skip]
pub const OBSERVATION_NUMBER: Tag = Tag(0x3006, 0x0082);
/// Referenced ROI Number 3006,0084 VR IS
#[rustfmt::skip]
pub const REFERENCED_ROI_NUMBER: Tag = Tag(0x3006, 0x0084);
/// RT ROI Identification Code Sequence 3006,0086 VR SQ
#[rustfmt::skip]
pub const RT_ROI_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x3006, 0x0086);
/// Related RT ROI Observations Sequence 3006,00A0 VR SQ
#[rustfmt::skip]
pub const RELATED_RT_ROI_OBSERVATIONS_SEQUENCE: Tag = Tag(0x3006, 0x00A0);
/// RT ROI Interpreted Type 3006,00A4 VR CS
#[rustfmt::skip]
pub const RT_ROI_INTERPRETED_TYPE: Tag = Tag(0x3006, 0x00A4);
/// ROI Interpreter 3006,00A6 VR PN
#[rustfmt::skip]
pub const ROI_INTERPRETER: Tag = Tag(0x3006, 0x00A6);
/// ROI Physical Properties Sequence 3006,00B0 VR SQ
#[rustfmt::skip]
pub const ROI_PHYSICAL_PROPERTIES_SEQUENCE: Tag = Tag(0x3006, 0x00B0);
/// Measured Dose Reference Sequence 3008,0010 VR SQ
#[rustfmt::skip]
pub const MEASURED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x3008, 0x0010);
/// RT Plan Label 300A,0002 VR SH
#[rustfmt::skip]
pub const RT_PLAN_LABEL: Tag = Tag(0x300A, 0x0002);
/// RT Plan Name 300A,0003 VR LO
#[rustfmt::skip]
pub const RT_PLAN_NAME: Tag = Tag(0x300A, 0x0003);
/// RT Plan Date 300A,0006 VR DA
#[rustfmt::skip]
pub const RT_PLAN_DATE: Tag = Tag(0x300A, 0x0006);
/// RT Plan Time 300A,0007 VR TM
#[rustfmt::skip]
pub const RT_PLAN_TIME: Tag = Tag(0x300A, 0x0007);
/// RT Plan Geometry 300A,000C VR CS
#[rustfmt::skip]
pub const RT_PLAN_GEOMETRY: Tag = Tag(0x300A, 0x000C);
/// Dose Reference Sequence 300A,0010 VR SQ
#[rustfmt::skip]
pub const DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x300A, 0x0010);
/// Dose Reference Number 300A,0012 VR IS
#[rustfmt::skip]
pub const DOSE_REFERENCE_NUMBER: Tag = Tag(0x300A, 0x0012);
/// Tolerance Table Sequence 300A,0040 VR SQ
#[rustfmt::skip]
pub const TOLERANCE_TABLE_SEQUENCE: Tag = Tag(0x300A, 0x0040);
/// Fraction Group Sequence 300A,0070 VR SQ
#[rustfmt::skip]
pub const FRACTION_GROUP_SEQUENCE: Tag = Tag(0x300A, 0x0070);
/// Number Of Fractions Planned 300A,0078 VR IS
#[rustfmt::skip]
pub const NUMBER_OF_FRACTIONS_PLANNED: Tag = Tag(0x300A, 0x0078);
/// Number Of Beams 300A,0080 VR IS
#[rustfmt::skip]
pub const NUMBER_OF_BEAMS: Tag = Tag(0x300A, 0x0080);
/// Beam Sequence 300A,00B0 VR SQ
#[rustfmt::skip]
pub const BEAM_SEQUENCE: Tag = Tag(0x300A, 0x00B0);
/// Treatment Machine Name 300A,00B2 VR SH
#[rustfmt::skip]
pub const TREATMENT_MACHINE_NAME: Tag = Tag(0x300A, 0x00B2);
/// Primary Dosimeter Unit 300A,00B3 VR CS
#[rustfmt::skip]
pub const PRIMARY_DOSIMETER_UNIT: Tag = Tag(0x300A, 0x00B3);
/// Beam Limiting Device Sequence 300A,00B6 VR SQ
#[rustfmt::skip]
pub const BEAM_LIMITING_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x00B6);
/// Beam Number 300A,00C0 VR IS
#[rustfmt::skip]
pub const BEAM_NUMBER: Tag = Tag(0x300A, 0x00C0);
/// Beam Name 300A,00C2 VR LO
#[rustfmt::skip]
pub const BEAM_NAME: Tag = Tag(0x300A, 0x00C2);
/// Beam Type 300A,00C4 VR CS
#[rustfmt::skip]
pub const BEAM_TYPE: Tag = Tag(0x300A, 0x00C4);
/// Radiation Type 300A,00C6 VR CS
#[rustfmt::skip]
pub const RADIATION_TYPE: Tag = Tag(0x300A, 0x00C6);
/// Wedge Sequence 300A,00D1 VR SQ
#[rustfmt::skip]
pub const WEDGE_SEQUENCE: Tag = Tag(0x300A, 0x00D1);
/// Compensator Sequence 300A,00E3 VR SQ
#[rustfmt::skip]
pub const COMPENSATOR_SEQUENCE: Tag = Tag(0x300A, 0x00E3);
/// Block Sequence 300A,00F4 VR SQ
#[rustfmt::skip]
pub const BLOCK_SEQUENCE: Tag = Tag(0x300A, 0x00F4);
/// Control Point Sequence 300A,0111 VR SQ
#[rustfmt::skip]
pub const CONTROL_POINT_SEQUENCE: Tag = Tag(0x300A, 0x0111);
/// Beam Limiting Device Position Sequence 300A,011A VR SQ
#[rustfmt::skip]
pub const BEAM_LIMITING_DEVICE_POSITION_SEQUENCE: Tag = Tag(0x300A, 0x011A);
/// Gantry Angle 300A,011E VR DS
#[rustfmt::skip]
pub const GANTRY_ANGLE: Tag = Tag(0x300A, 0x011E);
/// Beam Limiting Device Angle 300A,0120 VR DS
#[rustfmt::skip]
pub const BEAM_LIMITING_DEVICE_ANGLE: Tag = Tag(0x300A, 0x0120);
/// Patient Support Angle 300A,0122 VR DS
#[rustfmt::skip]
pub const PATIENT_SUPPORT_ANGLE: Tag = Tag(0x300A, 0x0122);
/// Patient Setup Sequence 300A,0180 VR SQ
#[rustfmt::skip]
pub const PATIENT_SETUP_SEQUENCE: Tag = Tag(0x300A, 0x0180);
/// Fixation Device Sequence 300A,01B4 VR SQ
#[rustfmt::skip]
pub const FIXATION_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x01B4);
/// Shielding Device Sequence 300A,01D4 VR SQ
#[rustfmt::skip]
pub const SHIELDING_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x01D4);
/// Source Sequence 300A,0210 VR SQ
#[rustfmt::skip]
pub const SOURCE_SEQUENCE: Tag = Tag(0x300A, 0x0210);
/// Application Setup Sequence 300A,0230 VR SQ
#[rustfmt::skip]
pub const APPLICATION_SETUP_SEQUENCE: Tag = Tag(0x300A, 0x0230);
/// Channel Sequence 300A,0280 VR SQ
#[rustfmt::skip]
pub const CHANNEL_SEQUENCE: Tag = Tag(0x300A, 0x0280);
/// Brachy Control Point Sequence 300A,02D0 VR SQ
#[rustfmt::skip]
pub const BRACHY_CONTROL_POINT_SEQUENCE: Tag = Tag(0x300A, 0x02D0);
/// Snout Sequence 300A,0314 VR SQ
#[rustfmt::skip]
pub const SNOUT_SEQUENCE: Tag = Tag(0x300A, 0x0314);
/// Ion Beam Sequence 300A,03A2 VR SQ
#[rustfmt::skip]
pub const ION_BEAM_SEQUENCE: Tag = Tag(0x300A, 0x03A2);
/// Ion Control Point Sequence 300A,03A8 VR SQ
#[rustfmt::skip]
pub const ION_CONTROL_POINT_SEQUENCE: Tag = Tag(0x300A, 0x03A8);
/// General Accessory Sequence 300A,0420 VR SQ
#[rustfmt::skip]
pub const GENERAL_ACCESSORY_SEQUENCE: Tag = Tag(0x300A, 0x0420);
/// Referenced RT Plan Sequence 300C,0002 VR SQ
#[rustfmt::skip]
pub const REFERENCED_RT_PLAN_SEQUENCE: Tag = Tag(0x300C, 0x0002);
/// Referenced Beam Sequence 300C,0004 VR SQ
#[rustfmt::skip]
pub const REFERENCED_BEAM_SEQUENCE: Tag = Tag(0x300C, 0x0004);
/// Referenced Beam Number 300C,0006 VR IS
#[rustfmt::skip]
pub const REFERENCED_BEAM_NUMBER: Tag = Tag(0x300C, 0x0006);
/// Referenced Fraction Group Sequence 300C,0020 VR SQ
#[rustfmt::skip]
pub const REFERENCED_FRACTION_GROUP_SEQUENCE: Tag = Tag(0x300C, 0x0020);
/// Referenced Fraction Group Number 300C,0022 VR IS
#[rustfmt::skip]
pub const REFERENCED_FRACTION_GROUP_NUMBER: Tag = Tag(0x300C, 0x0022);
/// Referenced Verification Image Sequence 300C,0040 VR SQ
#[rustfmt::skip]
pub const REFERENCED_VERIFICATION_IMAGE_SEQUENCE: Tag = Tag(0x300C, 0x0040);
/// Referenced Reference Image Sequence 300C,0042 VR SQ
#[rustfmt::skip]
pub const REFERENCED_REFERENCE_IMAGE_SEQUENCE: Tag = Tag(0x300C, 0x0042);
/// Referenced Dose Reference Sequence 300C,0050 VR SQ
#[rustfmt::skip]
pub const REFERENCED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x300C, 0x0050);
/// Brachy Referenced Dose Reference Sequence 300C,0055 VR SQ
#[rustfmt::skip]
pub const BRACHY_REFERENCED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x300C, 0x0055);
/// Referenced Structure Set Sequence 300C,0060 VR SQ
#[rustfmt::skip]
pub const REFERENCED_STRUCTURE_SET_SEQUENCE: Tag = Tag(0x300C, 0x0060);
/// Referenced Patient Setup Number 300C,006A VR IS
#[rustfmt::skip]
pub const REFERENCED_PATIENT_SETUP_NUMBER: Tag = Tag(0x300C, 0x006A);
/// Referenced Dose Sequence 300C,0080 VR SQ
#[rustfmt::skip]
pub const REFERENCED_DOSE_SEQUENCE: Tag = Tag(0x300C, 0x0080);
/// Approval Status 300E,0002 VR CS
#[rustfmt::skip]
pub const APPROVAL_STATUS: Tag = Tag(0x300E, 0x0002);
/// Review Date 300E,0004 VR DA
#[rustfmt::skip]
pub const REVIEW_DATE: Tag = Tag(0x300E, 0x0004);
/// Review Time 300E,0005 VR TM
#[rustfmt::skip]
pub const REVIEW_TIME: Tag = Tag(0x300E, 0x0005);
/// Reviewer Name 300E,0008 VR PN
#[rustfmt::skip]
pub const REVIEWER_NAME: Tag = Tag(0x300E, 0x0008);
/// Shared Functional Groups Sequence 5200,9229 VR SQ
#[rustfmt::skip]
pub const SHARED_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9229);
/// Per Frame Functional Groups Sequence 5200,9230 VR SQ
#[rustfmt::skip]
pub const PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9230);
/// Waveform Sequence 5400,0100 VR SQ
#[rustfmt::skip]
pub const WAVEFORM_SEQUENCE: Tag = Tag(0x5400, 0x0100);
/// Waveform Bits Allocated 5400,1004 VR US
#[rustfmt::skip]
pub const WAVEFORM_BITS_ALLOCATED: Tag = Tag(0x5400, 0x1004);
/// Waveform Sample Interpretation 5400,1006 VR CS
#[rustfmt::skip]
pub const WAVEFORM_SAMPLE_INTERPRETATION: Tag = Tag(0x5400, 0x1006);
/// Waveform Data 5400,1010 VR OW
#[rustfmt::skip]
pub const WAVEFORM_DATA: Tag = Tag(0x5400, 0x1010);
/// Float Pixel Data 7FE0,0008 VR OF
#[rustfmt::skip]
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// Double Float Pixel Data 7FE0,0009 VR OD
#[rustfmt::skip]
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// Pixel Data 7FE0,0010 VR OW
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// Digital Signatures Sequence FFFA,FFFA VR SQ
#[rustfmt::skip]
pub const DIGITAL_SIGNATURES_SEQUENCE: Tag = Tag(0xFFFA, 0xFFFA);
/// Data Set Trailing Padding FFFC,FFFC VR OB
#[rustfmt::skip]
pub const DATA_SET_TRAILING_PADDING: Tag = Tag(0xFFFC, 0xFFFC);
/// Item FFFE,E000 VR UN
#[rustfmt::skip]
pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
/// Item Delimitation Item FFFE,E00D VR UN
#[rustfmt::skip]
pub const ITEM_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE00D);
/// Sequence Delimitation Item FFFE,E0DD VR UN
#[rustfmt::skip]
pub const SEQUENCE_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE0DD);
/// Curve Dimensions 50xx,0005 VR US
#[rustfmt::skip]
pub const CURVE_DIMENSIONS: Tag = Tag(0x5000, 0x0005);
/// Curve Data 50xx,3000 VR OW
#[rustfmt::skip]
pub const CURVE_DATA: Tag = Tag(0x5000, 0x3000);
/// Overlay Rows 60xx,0010 VR US
#[rustfmt::skip]
pub const OVERLAY_ROWS: Tag = Tag(0x6000, 0x0010);
/// Overlay Columns 60xx,0011 VR US
#[rustfmt::skip]
pub const OVERLAY_COLUMNS: Tag = Tag(0x6000, 0x0011);
/// Overlay Type 60xx,0040 VR CS
#[rustfmt::skip]
pub const OVERLAY_TYPE: Tag = Tag(0x6000, 0x0040);
/// Overlay Origin 60xx,0050 VR SS
#[rustfmt::skip]
pub const OVERLAY_ORIGIN: Tag = Tag(0x6000, 0x0050);
/// Overlay Bits Allocated 60xx,0100 VR US
#[rustfmt::skip]
pub const OVERLAY_BITS_ALLOCATED: Tag = Tag(0x6000, 0x0100);
/// Overlay Bit Position 60xx,0102 VR US
#[rustfmt::skip]
pub const OVERLAY_BIT_POSITION: Tag = Tag(0x6000, 0x0102);
/// Overlay Data 60xx,3000 VR OW
#[rustfmt::skip]
pub const OVERLAY_DATA: Tag = Tag(0x6000, 0x3000);

type E = DataDictionaryEntryRef<'static>;

#[rustfmt::skip]
pub(crate) const ENTRIES: &[E] = &[
    E { tag: Single(Tag(0x0002, 0x0000)), alias: "FileMetaInformationGroupLength", vr: VR::UL },
    E { tag: Single(Tag(0x0002, 0x0001)), alias: "FileMetaInformationVersion", vr: VR::OB },
    E { tag: Single(Tag(0x0002, 0x0002)), alias: "MediaStorageSOPClassUID", vr: VR::UI },
    E { tag: Single(Tag(0x0002, 0x0003)), alias: "MediaStorageSOPInstanceUID", vr: VR::UI },
    E { tag: Single(Tag(0x0002, 0x0010)), alias: "TransferSyntaxUID", vr: VR::UI },
    E { tag: Single(Tag(0x0002, 0x0012)), alias: "ImplementationClassUID", vr: VR::UI },
    E { tag: Single(Tag(0x0002, 0x0013)), alias: "ImplementationVersionName", vr: VR::SH },
    E { tag: Single(Tag(0x0002, 0x0016)), alias: "SourceApplicationEntityTitle", vr: VR::AE },
    E { tag: Single(Tag(0x0002, 0x0017)), alias: "SendingApplicationEntityTitle", vr: VR::AE },
    E { tag: Single(Tag(0x0002, 0x0018)), alias: "ReceivingApplicationEntityTitle", vr: VR::AE },
    E { tag: Single(Tag(0x0002, 0x0100)), alias: "PrivateInformationCreatorUID", vr: VR::UI },
    E { tag: Single(Tag(0x0002, 0x0102)), alias: "PrivateInformation", vr: VR::OB },
    E { tag: Single(Tag(0x0004, 0x1130)), alias: "FileSetID", vr: VR::CS },
    E { tag: Single(Tag(0x0004, 0x1200)), alias: "OffsetOfTheFirstDirectoryRecordOfTheRootDirectoryEntity", vr: VR::UL },
    E { tag: Single(Tag(0x0004, 0x1202)), alias: "OffsetOfTheLastDirectoryRecordOfTheRootDirectoryEntity", vr: VR::UL },
    E { tag: Single(Tag(0x0004, 0x1212)), alias: "FileSetConsistencyFlag", vr: VR::US },
    E { tag: Single(Tag(0x0004, 0x1220)), alias: "DirectoryRecordSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0004, 0x1400)), alias: "OffsetOfTheNextDirectoryRecord", vr: VR::UL },
    E { tag: Single(Tag(0x0004, 0x1410)), alias: "RecordInUseFlag", vr: VR::US },
    E { tag: Single(Tag(0x0004, 0x1420)), alias: "OffsetOfReferencedLowerLevelDirectoryEntity", vr: VR::UL },
    E { tag: Single(Tag(0x0004, 0x1430)), alias: "DirectoryRecordType", vr: VR::CS },
    E { tag: Single(Tag(0x0004, 0x1500)), alias: "ReferencedFileID", vr: VR::CS },
    E { tag: Single(Tag(0x0004, 0x1510)), alias: "ReferencedSOPClassUIDInFile", vr: VR::UI },
    E { tag: Single(Tag(0x0004, 0x1511)), alias: "ReferencedSOPInstanceUIDInFile", vr: VR::UI },
    E { tag: Single(Tag(0x0004, 0x1512)), alias: "ReferencedTransferSyntaxUIDInFile", vr: VR::UI },
    E { tag: Single(Tag(0x0008, 0x0005)), alias: "SpecificCharacterSet", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x0006)), alias: "LanguageCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x0008)), alias: "ImageType", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x0012)), alias: "InstanceCreationDate", vr: VR::DA },
    E { tag: Single(Tag(0x0008, 0x0013)), alias: "InstanceCreationTime", vr: VR::TM },
    E { tag: Single(Tag(0x0008, 0x0014)), alias: "InstanceCreatorUID", vr: VR::UI },
    E { tag: Single(Tag(0x0008, 0x0016)), alias: "SOPClassUID", vr: VR::UI },
    E { tag: Single(Tag(0x0008, 0x0018)), alias: "SOPInstanceUID", vr: VR::UI },
    E { tag: Single(Tag(0x0008, 0x0020)), alias: "StudyDate", vr: VR::DA },
    E { tag: Single(Tag(0x0008, 0x0021)), alias: "SeriesDate", vr: VR::DA },
    E { tag: Single(Tag(0x0008, 0x0022)), alias: "AcquisitionDate", vr: VR::DA },
    E { tag: Single(Tag(0x0008, 0x0023)), alias: "ContentDate", vr: VR::DA },
    E { tag: Single(Tag(0x0008, 0x002A)), alias: "AcquisitionDateTime", vr: VR::DT },
    E { tag: Single(Tag(0x0008, 0x0030)), alias: "StudyTime", vr: VR::TM },
    E { tag: Single(Tag(0x0008, 0x0031)), alias: "SeriesTime", vr: VR::TM },
    E { tag: Single(Tag(0x0008, 0x0032)), alias: "AcquisitionTime", vr: VR::TM },
    E { tag: Single(Tag(0x0008, 0x0033)), alias: "ContentTime", vr: VR::TM },
    E { tag: Single(Tag(0x0008, 0x0050)), alias: "AccessionNumber", vr: VR::SH },
    E { tag: Single(Tag(0x0008, 0x0051)), alias: "IssuerOfAccessionNumberSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x0054)), alias: "RetrieveAETitle", vr: VR::AE },
    E { tag: Single(Tag(0x0008, 0x0056)), alias: "InstanceAvailability", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x0058)), alias: "FailedSOPInstanceUIDList", vr: VR::UI },
    E { tag: Single(Tag(0x0008, 0x0060)), alias: "Modality", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x0064)), alias: "ConversionType", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x0070)), alias: "Manufacturer", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x0080)), alias: "InstitutionName", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x0081)), alias: "InstitutionAddress", vr: VR::ST },
    E { tag: Single(Tag(0x0008, 0x0082)), alias: "InstitutionCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x0090)), alias: "ReferringPhysicianName", vr: VR::PN },
    E { tag: Single(Tag(0x0008, 0x0096)), alias: "ReferringPhysicianIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x0100)), alias: "CodeValue", vr: VR::SH },
    E { tag: Single(Tag(0x0008, 0x0102)), alias: "CodingSchemeDesignator", vr: VR::SH },
    E { tag: Single(Tag(0x0008, 0x0104)), alias: "CodeMeaning", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x0105)), alias: "MappingResource", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x0110)), alias: "CodingSchemeIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x0121)), alias: "EquivalentCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x0300)), alias: "PrivateDataElementCharacteristicsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1010)), alias: "StationName", vr: VR::SH },
    E { tag: Single(Tag(0x0008, 0x1030)), alias: "StudyDescription", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x1032)), alias: "ProcedureCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x103E)), alias: "SeriesDescription", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x1040)), alias: "InstitutionalDepartmentName", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x1048)), alias: "PhysiciansOfRecord", vr: VR::PN },
    E { tag: Single(Tag(0x0008, 0x1049)), alias: "PhysiciansOfRecordIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1050)), alias: "PerformingPhysicianName", vr: VR::PN },
    E { tag: Single(Tag(0x0008, 0x1052)), alias: "PerformingPhysicianIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1060)), alias: "NameOfPhysiciansReadingStudy", vr: VR::PN },
    E { tag: Single(Tag(0x0008, 0x1062)), alias: "PhysiciansReadingStudyIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1070)), alias: "OperatorsName", vr: VR::PN },
    E { tag: Single(Tag(0x0008, 0x1072)), alias: "OperatorIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1080)), alias: "AdmittingDiagnosesDescription", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x1084)), alias: "AdmittingDiagnosesCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1090)), alias: "ManufacturerModelName", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x1100)), alias: "ReferencedResultsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1110)), alias: "ReferencedStudySequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1111)), alias: "ReferencedPerformedProcedureStepSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1115)), alias: "ReferencedSeriesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1120)), alias: "ReferencedPatientSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1125)), alias: "ReferencedVisitSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1130)), alias: "ReferencedOverlaySequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1134)), alias: "ReferencedStereometricInstanceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x113A)), alias: "ReferencedWaveformSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1140)), alias: "ReferencedImageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1145)), alias: "ReferencedCurveSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x114A)), alias: "ReferencedInstanceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x114B)), alias: "ReferencedRealWorldValueMappingInstanceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1150)), alias: "ReferencedSOPClassUID", vr: VR::UI },
    E { tag: Single(Tag(0x0008, 0x1155)), alias: "ReferencedSOPInstanceUID", vr: VR::UI },
    E { tag: Single(Tag(0x0008, 0x1160)), alias: "ReferencedFrameNumber", vr: VR::IS },
    E { tag: Single(Tag(0x0008, 0x1164)), alias: "FrameExtractionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1195)), alias: "TransactionUID", vr: VR::UI },
    E { tag: Single(Tag(0x0008, 0x1197)), alias: "FailureReason", vr: VR::US },
    E { tag: Single(Tag(0x0008, 0x1198)), alias: "FailedSOPSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1199)), alias: "ReferencedSOPSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x119A)), alias: "OtherFailuresSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1200)), alias: "StudiesContainingOtherReferencedInstancesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1250)), alias: "RelatedSeriesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x2111)), alias: "DerivationDescription", vr: VR::ST },
    E { tag: Single(Tag(0x0008, 0x2112)), alias: "SourceImageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x2218)), alias: "AnatomicRegionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x2220)), alias: "AnatomicRegionModifierSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x2228)), alias: "PrimaryAnatomicStructureSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x2229)), alias: "AnatomicStructureSpaceOrRegionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x2230)), alias: "PrimaryAnatomicStructureModifierSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x3001)), alias: "AlternateRepresentationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x3010)), alias: "IrradiationEventUID", vr: VR::UI },
    E { tag: Single(Tag(0x0008, 0x9007)), alias: "FrameType", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x9092)), alias: "ReferencedImageEvidenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x9121)), alias: "ReferencedRawDataSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x9124)), alias: "DerivationImageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x9154)), alias: "SourceImageEvidenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x9215)), alias: "DerivationCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x9237)), alias: "ReferencedPresentationStateSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x9410)), alias: "ReferencedOtherPlaneSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x9458)), alias: "FrameDisplaySequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x0010)), alias: "PatientName", vr: VR::PN },
    E { tag: Single(Tag(0x0010, 0x0020)), alias: "PatientID", vr: VR::LO },
    E { tag: Single(Tag(0x0010, 0x0021)), alias: "IssuerOfPatientID", vr: VR::LO },
    E { tag: Single(Tag(0x0010, 0x0024)), alias: "IssuerOfPatientIDQualifiersSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x0026)), alias: "SourcePatientGroupIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x0027)), alias: "GroupOfPatientsIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x0030)), alias: "PatientBirthDate", vr: VR::DA },
    E { tag: Single(Tag(0x0010, 0x0032)), alias: "PatientBirthTime", vr: VR::TM },
    E { tag: Single(Tag(0x0010, 0x0040)), alias: "PatientSex", vr: VR::CS },
    E { tag: Single(Tag(0x0010, 0x0050)), alias: "PatientInsurancePlanCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x0101)), alias: "PatientPrimaryLanguageCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x0102)), alias: "PatientPrimaryLanguageModifierCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x1001)), alias: "OtherPatientNames", vr: VR::PN },
    E { tag: Single(Tag(0x0010, 0x1002)), alias: "OtherPatientIDsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x1010)), alias: "PatientAge", vr: VR::AS },
    E { tag: Single(Tag(0x0010, 0x1020)), alias: "PatientSize", vr: VR::DS },
    E { tag: Single(Tag(0x0010, 0x1030)), alias: "PatientWeight", vr: VR::DS },
    E { tag: Single(Tag(0x0010, 0x1040)), alias: "PatientAddress", vr: VR::LO },
    E { tag: Single(Tag(0x0010, 0x1100)), alias: "ReferencedPatientPhotoSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x2000)), alias: "MedicalAlerts", vr: VR::LO },
    E { tag: Single(Tag(0x0010, 0x2110)), alias: "Allergies", vr: VR::LO },
    E { tag: Single(Tag(0x0010, 0x2160)), alias: "EthnicGroup", vr: VR::SH },
    E { tag: Single(Tag(0x0010, 0x2180)), alias: "Occupation", vr: VR::SH },
    E { tag: Single(Tag(0x0010, 0x21B0)), alias: "AdditionalPatientHistory", vr: VR::LT },
    E { tag: Single(Tag(0x0010, 0x21C0)), alias: "PregnancyStatus", vr: VR::US },
    E { tag: Single(Tag(0x0010, 0x2201)), alias: "PatientSpeciesDescription", vr: VR::LO },
    E { tag: Single(Tag(0x0010, 0x2202)), alias: "PatientSpeciesCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x2293)), alias: "PatientBreedCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x2294)), alias: "BreedRegistrationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x2296)), alias: "BreedRegistryCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x4000)), alias: "PatientComments", vr: VR::LT },
    E { tag: Single(Tag(0x0012, 0x0010)), alias: "ClinicalTrialSponsorName", vr: VR::LO },
    E { tag: Single(Tag(0x0012, 0x0020)), alias: "ClinicalTrialProtocolID", vr: VR::LO },
    E { tag: Single(Tag(0x0012, 0x0062)), alias: "PatientIdentityRemoved", vr: VR::CS },
    E { tag: Single(Tag(0x0012, 0x0063)), alias: "DeidentificationMethod", vr: VR::LO },
    E { tag: Single(Tag(0x0012, 0x0064)), alias: "DeidentificationMethodCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0012, 0x0083)), alias: "ConsentForClinicalTrialUseSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x0010)), alias: "ContrastBolusAgent", vr: VR::LO },
    E { tag: Single(Tag(0x0018, 0x0012)), alias: "ContrastBolusAgentSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x0014)), alias: "ContrastBolusAdministrationRouteSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x0015)), alias: "BodyPartExamined", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x0020)), alias: "ScanningSequence", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x0021)), alias: "SequenceVariant", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x0022)), alias: "ScanOptions", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x0023)), alias: "MRAcquisitionType", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x0024)), alias: "SequenceName", vr: VR::SH },
    E { tag: Single(Tag(0x0018, 0x0026)), alias: "InterventionDrugInformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x0029)), alias: "InterventionDrugCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x002A)), alias: "AdditionalDrugSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x0036)), alias: "InterventionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x0050)), alias: "SliceThickness", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0060)), alias: "KVP", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0080)), alias: "RepetitionTime", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0081)), alias: "EchoTime", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0083)), alias: "NumberOfAverages", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0084)), alias: "ImagingFrequency", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0085)), alias: "ImagedNucleus", vr: VR::SH },
    E { tag: Single(Tag(0x0018, 0x0086)), alias: "EchoNumbers", vr: VR::IS },
    E { tag: Single(Tag(0x0018, 0x0087)), alias: "MagneticFieldStrength", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0088)), alias: "SpacingBetweenSlices", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0090)), alias: "DataCollectionDiameter", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0091)), alias: "EchoTrainLength", vr: VR::IS },
    E { tag: Single(Tag(0x0018, 0x0095)), alias: "PixelBandwidth", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1000)), alias: "DeviceSerialNumber", vr: VR::LO },
    E { tag: Single(Tag(0x0018, 0x1002)), alias: "DeviceUID", vr: VR::UI },
    E { tag: Single(Tag(0x0018, 0x100A)), alias: "UDISequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x1020)), alias: "SoftwareVersions", vr: VR::LO },
    E { tag: Single(Tag(0x0018, 0x1030)), alias: "ProtocolName", vr: VR::LO },
    E { tag: Single(Tag(0x0018, 0x1040)), alias: "ContrastBolusRoute", vr: VR::LO },
    E { tag: Single(Tag(0x0018, 0x1041)), alias: "ContrastBolusVolume", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1060)), alias: "TriggerTime", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1063)), alias: "FrameTime", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1088)), alias: "HeartRate", vr: VR::IS },
    E { tag: Single(Tag(0x0018, 0x1100)), alias: "ReconstructionDiameter", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1110)), alias: "DistanceSourceToDetector", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1111)), alias: "DistanceSourceToPatient", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1120)), alias: "GantryDetectorTilt", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1130)), alias: "TableHeight", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1140)), alias: "RotationDirection", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x1150)), alias: "ExposureTime", vr: VR::IS },
    E { tag: Single(Tag(0x0018, 0x1151)), alias: "XRayTubeCurrent", vr: VR::IS },
    E { tag: Single(Tag(0x0018, 0x1152)), alias: "Exposure", vr: VR::IS },
    E { tag: Single(Tag(0x0018, 0x1160)), alias: "FilterType", vr: VR::SH },
    E { tag: Single(Tag(0x0018, 0x1164)), alias: "ImagerPixelSpacing", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1170)), alias: "GeneratorPower", vr: VR::IS },
    E { tag: Single(Tag(0x0018, 0x1190)), alias: "FocalSpots", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1210)), alias: "ConvolutionKernel", vr: VR::SH },
    E { tag: Single(Tag(0x0018, 0x1250)), alias: "ReceiveCoilName", vr: VR::SH },
    E { tag: Single(Tag(0x0018, 0x1251)), alias: "TransmitCoilName", vr: VR::SH },
    E { tag: Single(Tag(0x0018, 0x1310)), alias: "AcquisitionMatrix", vr: VR::US },
    E { tag: Single(Tag(0x0018, 0x1312)), alias: "InPlanePhaseEncodingDirection", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x1314)), alias: "FlipAngle", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1316)), alias: "SAR", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1400)), alias: "AcquisitionDeviceProcessingDescription", vr: VR::LO },
    E { tag: Single(Tag(0x0018, 0x5100)), alias: "PatientPosition", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x5101)), alias: "ViewPosition", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x6011)), alias: "SequenceOfUltrasoundRegions", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9004)), alias: "ContentQualification", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x9005)), alias: "PulseSequenceName", vr: VR::SH },
    E { tag: Single(Tag(0x0018, 0x9006)), alias: "MRImagingModifierSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9042)), alias: "MRReceiveCoilSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9049)), alias: "MRTransmitCoilSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9073)), alias: "AcquisitionDuration", vr: VR::FD },
    E { tag: Single(Tag(0x0018, 0x9076)), alias: "DiffusionGradientDirectionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9083)), alias: "MetaboliteMapCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9084)), alias: "ChemicalShiftSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9087)), alias: "DiffusionBValue", vr: VR::FD },
    E { tag: Single(Tag(0x0018, 0x9089)), alias: "DiffusionGradientOrientation", vr: VR::FD },
    E { tag: Single(Tag(0x0018, 0x9103)), alias: "MRSpectroscopyFOVGeometrySequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9107)), alias: "MRSpatialSaturationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9112)), alias: "MRTimingAndRelatedParametersSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9114)), alias: "MREchoSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9115)), alias: "MRModifierSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9117)), alias: "MRDiffusionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9118)), alias: "CardiacSynchronizationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9119)), alias: "MRAveragesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9125)), alias: "MRFOVGeometrySequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9126)), alias: "VolumeLocalizationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9152)), alias: "MRMetaboliteMapSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9176)), alias: "OperatingModeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9197)), alias: "MRVelocityEncodingSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9226)), alias: "MRImageFrameTypeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9227)), alias: "MRSpectroscopyFrameTypeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9239)), alias: "SpecificAbsorptionRateSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9251)), alias: "MRArterialSpinLabelingSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9301)), alias: "CTAcquisitionTypeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9304)), alias: "CTAcquisitionDetailsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9308)), alias: "CTTableDynamicsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9312)), alias: "CTGeometrySequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9314)), alias: "CTReconstructionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9321)), alias: "CTExposureSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9325)), alias: "CTXRayDetailsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9326)), alias: "CTPositionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9329)), alias: "CTImageFrameTypeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9338)), alias: "ContrastBolusIngredientCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9340)), alias: "ContrastAdministrationProfileSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9341)), alias: "ContrastBolusUsageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9345)), alias: "CTDIvol", vr: VR::FD },
    E { tag: Single(Tag(0x0018, 0x9346)), alias: "CTDIPhantomTypeCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9360)), alias: "CTAdditionalXRaySourceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9401)), alias: "ProjectionPixelCalibrationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9405)), alias: "PositionerPositionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9406)), alias: "TablePositionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9407)), alias: "CollimatorShapeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9412)), alias: "XAXRFFrameCharacteristicsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9417)), alias: "FrameAcquisitionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9432)), alias: "FieldOfViewSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9434)), alias: "ExposureControlSensingRegionsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9451)), alias: "FrameDetectorParametersSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9455)), alias: "CalibrationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9456)), alias: "ObjectThicknessSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9472)), alias: "FrameDisplayShutterSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9476)), alias: "XRay3DFrameTypeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9477)), alias: "ContributingSourcesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9504)), alias: "XRay3DAcquisitionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9530)), alias: "XRay3DReconstructionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9732)), alias: "PETFrameAcquisitionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9733)), alias: "PETDetectorMotionDetailsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9734)), alias: "PETTableDynamicsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9735)), alias: "PETPositionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9736)), alias: "PETFrameCorrectionFactorsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9737)), alias: "RadiopharmaceuticalUsageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9749)), alias: "PETReconstructionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9751)), alias: "PETFrameTypeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9771)), alias: "PatientPhysiologicalStateSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9803)), alias: "ExcludedIntervalsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0xA001)), alias: "ContributingEquipmentSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x000D)), alias: "StudyInstanceUID", vr: VR::UI },
    E { tag: Single(Tag(0x0020, 0x000E)), alias: "SeriesInstanceUID", vr: VR::UI },
    E { tag: Single(Tag(0x0020, 0x0010)), alias: "StudyID", vr: VR::SH },
    E { tag: Single(Tag(0x0020, 0x0011)), alias: "SeriesNumber", vr: VR::IS },
    E { tag: Single(Tag(0x0020, 0x0012)), alias: "AcquisitionNumber", vr: VR::IS },
    E { tag: Single(Tag(0x0020, 0x0013)), alias: "InstanceNumber", vr: VR::IS },
    E { tag: Single(Tag(0x0020, 0x0020)), alias: "PatientOrientation", vr: VR::CS },
    E { tag: Single(Tag(0x0020, 0x0032)), alias: "ImagePositionPatient", vr: VR::DS },
    E { tag: Single(Tag(0x0020, 0x0037)), alias: "ImageOrientationPatient", vr: VR::DS },
    E { tag: Single(Tag(0x0020, 0x0052)), alias: "FrameOfReferenceUID", vr: VR::UI },
    E { tag: Single(Tag(0x0020, 0x0060)), alias: "Laterality", vr: VR::CS },
    E { tag: Single(Tag(0x0020, 0x0062)), alias: "ImageLaterality", vr: VR::CS },
    E { tag: Single(Tag(0x0020, 0x0100)), alias: "TemporalPositionIdentifier", vr: VR::IS },
    E { tag: Single(Tag(0x0020, 0x0105)), alias: "NumberOfTemporalPositions", vr: VR::IS },
    E { tag: Single(Tag(0x0020, 0x0200)), alias: "SynchronizationFrameOfReferenceUID", vr: VR::UI },
    E { tag: Single(Tag(0x0020, 0x1040)), alias: "PositionReferenceIndicator", vr: VR::LO },
    E { tag: Single(Tag(0x0020, 0x1041)), alias: "SliceLocation", vr: VR::DS },
    E { tag: Single(Tag(0x0020, 0x4000)), alias: "ImageComments", vr: VR::LT },
    E { tag: Single(Tag(0x0020, 0x9056)), alias: "StackID", vr: VR::SH },
    E { tag: Single(Tag(0x0020, 0x9057)), alias: "InStackPositionNumber", vr: VR::UL },
    E { tag: Single(Tag(0x0020, 0x9071)), alias: "FrameAnatomySequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x9111)), alias: "FrameContentSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x9113)), alias: "PlanePositionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x9116)), alias: "PlaneOrientationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x9128)), alias: "TemporalPositionIndex", vr: VR::UL },
    E { tag: Single(Tag(0x0020, 0x9157)), alias: "DimensionIndexValues", vr: VR::UL },
    E { tag: Single(Tag(0x0020, 0x9161)), alias: "ConcatenationUID", vr: VR::UI },
    E { tag: Single(Tag(0x0020, 0x9162)), alias: "InConcatenationNumber", vr: VR::US },
    E { tag: Single(Tag(0x0020, 0x9163)), alias: "InConcatenationTotalNumber", vr: VR::US },
    E { tag: Single(Tag(0x0020, 0x9164)), alias: "DimensionOrganizationUID", vr: VR::UI },
    E { tag: Single(Tag(0x0020, 0x9165)), alias: "DimensionIndexPointer", vr: VR::AT },
    E { tag: Single(Tag(0x0020, 0x9167)), alias: "FunctionalGroupPointer", vr: VR::AT },
    E { tag: Single(Tag(0x0020, 0x9221)), alias: "DimensionOrganizationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x9222)), alias: "DimensionIndexSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x9253)), alias: "RespiratorySynchronizationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x930E)), alias: "PlanePositionVolumeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x930F)), alias: "PlaneOrientationVolumeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x9310)), alias: "TemporalPositionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x9529)), alias: "ContributingSOPInstancesReferenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0022, 0x0015)), alias: "AcquisitionDeviceTypeCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0022, 0x0016)), alias: "IlluminationTypeCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0022, 0x0017)), alias: "LightPathFilterTypeStackCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0022, 0x0019)), alias: "LensesCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0022, 0x001B)), alias: "RefractiveStateSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x0002)), alias: "SamplesPerPixel", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0004)), alias: "PhotometricInterpretation", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x0006)), alias: "PlanarConfiguration", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0008)), alias: "NumberOfFrames", vr: VR::IS },
    E { tag: Single(Tag(0x0028, 0x0009)), alias: "FrameIncrementPointer", vr: VR::AT },
    E { tag: Single(Tag(0x0028, 0x0010)), alias: "Rows", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0011)), alias: "Columns", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0030)), alias: "PixelSpacing", vr: VR::DS },
    E { tag: Single(Tag(0x0028, 0x0034)), alias: "PixelAspectRatio", vr: VR::IS },
    E { tag: Single(Tag(0x0028, 0x0051)), alias: "CorrectedImage", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x0100)), alias: "BitsAllocated", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0101)), alias: "BitsStored", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0102)), alias: "HighBit", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0103)), alias: "PixelRepresentation", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0106)), alias: "SmallestImagePixelValue", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0107)), alias: "LargestImagePixelValue", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0301)), alias: "BurnedInAnnotation", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x1040)), alias: "PixelIntensityRelationship", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x1041)), alias: "PixelIntensityRelationshipSign", vr: VR::SS },
    E { tag: Single(Tag(0x0028, 0x1050)), alias: "WindowCenter", vr: VR::DS },
    E { tag: Single(Tag(0x0028, 0x1051)), alias: "WindowWidth", vr: VR::DS },
    E { tag: Single(Tag(0x0028, 0x1052)), alias: "RescaleIntercept", vr: VR::DS },
    E { tag: Single(Tag(0x0028, 0x1053)), alias: "RescaleSlope", vr: VR::DS },
    E { tag: Single(Tag(0x0028, 0x1054)), alias: "RescaleType", vr: VR::LO },
    E { tag: Single(Tag(0x0028, 0x1055)), alias: "WindowCenterWidthExplanation", vr: VR::LO },
    E { tag: Single(Tag(0x0028, 0x1056)), alias: "VOILUTFunction", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x1101)), alias: "RedPaletteColorLookupTableDescriptor", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x1102)), alias: "GreenPaletteColorLookupTableDescriptor", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x1103)), alias: "BluePaletteColorLookupTableDescriptor", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x1199)), alias: "PaletteColorLookupTableUID", vr: VR::UI },
    E { tag: Single(Tag(0x0028, 0x1201)), alias: "RedPaletteColorLookupTableData", vr: VR::OW },
    E { tag: Single(Tag(0x0028, 0x1202)), alias: "GreenPaletteColorLookupTableData", vr: VR::OW },
    E { tag: Single(Tag(0x0028, 0x1203)), alias: "BluePaletteColorLookupTableData", vr: VR::OW },
    E { tag: Single(Tag(0x0028, 0x1350)), alias: "PartialView", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x1352)), alias: "PartialViewCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x2000)), alias: "ICCProfile", vr: VR::OB },
    E { tag: Single(Tag(0x0028, 0x2110)), alias: "LossyImageCompression", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x2112)), alias: "LossyImageCompressionRatio", vr: VR::DS },
    E { tag: Single(Tag(0x0028, 0x2114)), alias: "LossyImageCompressionMethod", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x3000)), alias: "ModalityLUTSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x3002)), alias: "LUTDescriptor", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x3003)), alias: "LUTExplanation", vr: VR::LO },
    E { tag: Single(Tag(0x0028, 0x3004)), alias: "ModalityLUTType", vr: VR::LO },
    E { tag: Single(Tag(0x0028, 0x3006)), alias: "LUTData", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x3010)), alias: "VOILUTSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x3110)), alias: "SoftcopyVOILUTSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x6100)), alias: "MaskSubtractionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x9110)), alias: "PixelMeasuresSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x9132)), alias: "FrameVOILUTSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x9145)), alias: "PixelValueTransformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x9415)), alias: "FramePixelShiftSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x9422)), alias: "PixelIntensityRelationshipLUTSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x9443)), alias: "FramePixelDataPropertiesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x9501)), alias: "PixelShiftSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x9506)), alias: "PixelShiftFrameRange", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x9520)), alias: "ImageToEquipmentMappingMatrix", vr: VR::DS },
    E { tag: Single(Tag(0x0028, 0x9537)), alias: "EquipmentCoordinateSystemIdentification", vr: VR::CS },
    E { tag: Single(Tag(0x0032, 0x1031)), alias: "RequestingPhysicianIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0032, 0x1032)), alias: "RequestingPhysician", vr: VR::PN },
    E { tag: Single(Tag(0x0032, 0x1033)), alias: "RequestingService", vr: VR::LO },
    E { tag: Single(Tag(0x0032, 0x1034)), alias: "RequestingServiceCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0032, 0x1060)), alias: "RequestedProcedureDescription", vr: VR::LO },
    E { tag: Single(Tag(0x0032, 0x1064)), alias: "RequestedProcedureCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0032, 0x1070)), alias: "RequestedContrastAgent", vr: VR::LO },
    E { tag: Single(Tag(0x0032, 0x4000)), alias: "StudyComments", vr: VR::LT },
    E { tag: Single(Tag(0x0038, 0x0004)), alias: "ReferencedPatientAliasSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0038, 0x0010)), alias: "AdmissionID", vr: VR::LO },
    E { tag: Single(Tag(0x0038, 0x0014)), alias: "IssuerOfAdmissionIDSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0038, 0x0064)), alias: "IssuerOfServiceEpisodeIDSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0038, 0x0100)), alias: "PertinentDocumentsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0038, 0x0500)), alias: "PatientState", vr: VR::LO },
    E { tag: Single(Tag(0x003A, 0x0005)), alias: "NumberOfWaveformChannels", vr: VR::US },
    E { tag: Single(Tag(0x003A, 0x0010)), alias: "NumberOfWaveformSamples", vr: VR::UL },
    E { tag: Single(Tag(0x003A, 0x001A)), alias: "SamplingFrequency", vr: VR::DS },
    E { tag: Single(Tag(0x003A, 0x0200)), alias: "ChannelDefinitionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x003A, 0x0208)), alias: "ChannelSourceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x003A, 0x0209)), alias: "ChannelSourceModifiersSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x003A, 0x020A)), alias: "SourceWaveformSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x003A, 0x0211)), alias: "ChannelSensitivityUnitsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x003A, 0x0300)), alias: "MultiplexedAudioChannelsDescriptionCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0001)), alias: "ScheduledStationAETitle", vr: VR::AE },
    E { tag: Single(Tag(0x0040, 0x0002)), alias: "ScheduledProcedureStepStartDate", vr: VR::DA },
    E { tag: Single(Tag(0x0040, 0x0003)), alias: "ScheduledProcedureStepStartTime", vr: VR::TM },
    E { tag: Single(Tag(0x0040, 0x0006)), alias: "ScheduledPerformingPhysicianName", vr: VR::PN },
    E { tag: Single(Tag(0x0040, 0x0007)), alias: "ScheduledProcedureStepDescription", vr: VR::LO },
    E { tag: Single(Tag(0x0040, 0x0008)), alias: "ScheduledProtocolCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0009)), alias: "ScheduledProcedureStepID", vr: VR::SH },
    E { tag: Single(Tag(0x0040, 0x000B)), alias: "ScheduledPerformingPhysicianIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0026)), alias: "OrderPlacerIdentifierSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0027)), alias: "OrderFillerIdentifierSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0100)), alias: "ScheduledProcedureStepSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0220)), alias: "ReferencedNonImageCompositeSOPInstanceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0241)), alias: "PerformedStationAETitle", vr: VR::AE },
    E { tag: Single(Tag(0x0040, 0x0244)), alias: "PerformedProcedureStepStartDate", vr: VR::DA },
    E { tag: Single(Tag(0x0040, 0x0245)), alias: "PerformedProcedureStepStartTime", vr: VR::TM },
    E { tag: Single(Tag(0x0040, 0x0253)), alias: "PerformedProcedureStepID", vr: VR::SH },
    E { tag: Single(Tag(0x0040, 0x0254)), alias: "PerformedProcedureStepDescription", vr: VR::LO },
    E { tag: Single(Tag(0x0040, 0x0260)), alias: "PerformedProtocolCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0270)), alias: "ScheduledStepAttributesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0275)), alias: "RequestAttributesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0280)), alias: "CommentsOnThePerformedProcedureStep", vr: VR::ST },
    E { tag: Single(Tag(0x0040, 0x0281)), alias: "PerformedProcedureStepDiscontinuationReasonCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0293)), alias: "QuantitySequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0294)), alias: "Quantity", vr: VR::DS },
    E { tag: Single(Tag(0x0040, 0x0295)), alias: "MeasuringUnitsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0296)), alias: "BillingItemSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0320)), alias: "BillingProcedureStepSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0321)), alias: "FilmConsumptionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0324)), alias: "BillingSuppliesAndDevicesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0340)), alias: "PerformedSeriesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0440)), alias: "ProtocolContextSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0441)), alias: "ContentItemModifierSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0500)), alias: "ScheduledSpecimenSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0512)), alias: "ContainerIdentifier", vr: VR::LO },
    E { tag: Single(Tag(0x0040, 0x0513)), alias: "IssuerOfTheContainerIdentifierSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0515)), alias: "AlternateContainerIdentifierSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0518)), alias: "ContainerTypeCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0520)), alias: "ContainerComponentSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0555)), alias: "AcquisitionContextSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0560)), alias: "SpecimenDescriptionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0562)), alias: "IssuerOfTheSpecimenIdentifierSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0610)), alias: "SpecimenPreparationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0612)), alias: "SpecimenPreparationStepContentItemSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0620)), alias: "SpecimenLocalizationContentItemSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0710)), alias: "WholeSlideMicroscopyImageFrameTypeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x071A)), alias: "ImageCenterPointCoordinatesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x08EA)), alias: "MeasurementUnitsCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x1001)), alias: "RequestedProcedureID", vr: VR::SH },
    E { tag: Single(Tag(0x0040, 0x1002)), alias: "ReasonForTheRequestedProcedure", vr: VR::LO },
    E { tag: Single(Tag(0x0040, 0x100A)), alias: "ReasonForRequestedProcedureCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x1011)), alias: "IntendedRecipientsOfResultsIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x1012)), alias: "ReasonForPerformedProcedureCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x1101)), alias: "PersonIdentificationCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x9094)), alias: "ReferencedImageRealWorldValueMappingSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x9096)), alias: "RealWorldValueMappingSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x9210)), alias: "LUTLabel", vr: VR::SH },
    E { tag: Single(Tag(0x0040, 0x9212)), alias: "RealWorldValueLUTData", vr: VR::FD },
    E { tag: Single(Tag(0x0040, 0x9224)), alias: "RealWorldValueIntercept", vr: VR::FD },
    E { tag: Single(Tag(0x0040, 0x9225)), alias: "RealWorldValueSlope", vr: VR::FD },
    E { tag: Single(Tag(0x0040, 0xA010)), alias: "RelationshipType", vr: VR::CS },
    E { tag: Single(Tag(0x0040, 0xA040)), alias: "ValueType", vr: VR::CS },
    E { tag: Single(Tag(0x0040, 0xA043)), alias: "ConceptNameCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA073)), alias: "VerifyingObserverSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA075)), alias: "VerifyingObserverName", vr: VR::PN },
    E { tag: Single(Tag(0x0040, 0xA078)), alias: "AuthorObserverSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA07A)), alias: "ParticipantSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA07C)), alias: "CustodialOrganizationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA088)), alias: "VerifyingObserverIdentificationCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA120)), alias: "DateTime", vr: VR::DT },
    E { tag: Single(Tag(0x0040, 0xA121)), alias: "Date", vr: VR::DA },
    E { tag: Single(Tag(0x0040, 0xA122)), alias: "Time", vr: VR::TM },
    E { tag: Single(Tag(0x0040, 0xA123)), alias: "PersonName", vr: VR::PN },
    E { tag: Single(Tag(0x0040, 0xA124)), alias: "UID", vr: VR::UI },
    E { tag: Single(Tag(0x0040, 0xA160)), alias: "TextValue", vr: VR::UT },
    E { tag: Single(Tag(0x0040, 0xA168)), alias: "ConceptCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA170)), alias: "PurposeOfReferenceCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA195)), alias: "ModifierCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA300)), alias: "MeasuredValueSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA301)), alias: "NumericValueQualifierCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA30A)), alias: "NumericValue", vr: VR::DS },
    E { tag: Single(Tag(0x0040, 0xA360)), alias: "PredecessorDocumentsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA370)), alias: "ReferencedRequestSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA372)), alias: "PerformedProcedureCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA375)), alias: "CurrentRequestedProcedureEvidenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA385)), alias: "PertinentOtherEvidenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA390)), alias: "HL7StructuredDocumentReferenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA491)), alias: "CompletionFlag", vr: VR::CS },
    E { tag: Single(Tag(0x0040, 0xA493)), alias: "VerificationFlag", vr: VR::CS },
    E { tag: Single(Tag(0x0040, 0xA504)), alias: "ContentTemplateSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA525)), alias: "IdenticalDocumentsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA730)), alias: "ContentSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xDB00)), alias: "TemplateIdentifier", vr: VR::CS },
    E { tag: Single(Tag(0x0042, 0x0010)), alias: "DocumentTitle", vr: VR::ST },
    E { tag: Single(Tag(0x0042, 0x0011)), alias: "EncapsulatedDocument", vr: VR::OB },
    E { tag: Single(Tag(0x0042, 0x0012)), alias: "MIMETypeOfEncapsulatedDocument", vr: VR::LO },
    E { tag: Single(Tag(0x0042, 0x0013)), alias: "SourceInstanceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0048, 0x0001)), alias: "ImagedVolumeWidth", vr: VR::FL },
    E { tag: Single(Tag(0x0048, 0x0002)), alias: "ImagedVolumeHeight", vr: VR::FL },
    E { tag: Single(Tag(0x0048, 0x0003)), alias: "ImagedVolumeDepth", vr: VR::FL },
    E { tag: Single(Tag(0x0048, 0x0006)), alias: "TotalPixelMatrixColumns", vr: VR::UL },
    E { tag: Single(Tag(0x0048, 0x0007)), alias: "TotalPixelMatrixRows", vr: VR::UL },
    E { tag: Single(Tag(0x0048, 0x0008)), alias: "TotalPixelMatrixOriginSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0048, 0x0100)), alias: "IlluminatorTypeCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0048, 0x0102)), alias: "ImageOrientationSlide", vr: VR::DS },
    E { tag: Single(Tag(0x0048, 0x0105)), alias: "OpticalPathSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0048, 0x0106)), alias: "OpticalPathIdentifier", vr: VR::SH },
    E { tag: Single(Tag(0x0048, 0x0108)), alias: "IlluminationColorCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0048, 0x0110)), alias: "SpecimenReferenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0048, 0x0200)), alias: "ReferencedImageNavigationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0048, 0x021A)), alias: "PlanePositionSlideSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0050, 0x0004)), alias: "CalibrationImage", vr: VR::CS },
    E { tag: Single(Tag(0x0050, 0x0010)), alias: "DeviceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0011)), alias: "NumberOfEnergyWindows", vr: VR::US },
    E { tag: Single(Tag(0x0054, 0x0012)), alias: "EnergyWindowInformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0013)), alias: "EnergyWindowRangeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0016)), alias: "RadiopharmaceuticalInformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0018)), alias: "EnergyWindowName", vr: VR::SH },
    E { tag: Single(Tag(0x0054, 0x0022)), alias: "DetectorInformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0032)), alias: "PhaseInformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0052)), alias: "RotationInformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0062)), alias: "GatedInformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0063)), alias: "DataInformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0071)), alias: "NumberOfTimeSlots", vr: VR::US },
    E { tag: Single(Tag(0x0054, 0x0072)), alias: "TimeSlotInformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0081)), alias: "NumberOfSlices", vr: VR::US },
    E { tag: Single(Tag(0x0054, 0x0101)), alias: "NumberOfTimeSlices", vr: VR::US },
    E { tag: Single(Tag(0x0054, 0x0220)), alias: "ViewCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0222)), alias: "ViewModifierCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0300)), alias: "RadionuclideCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0302)), alias: "AdministrationRouteCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0304)), alias: "RadiopharmaceuticalCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0306)), alias: "CalibrationDataSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0400)), alias: "ImageID", vr: VR::SH },
    E { tag: Single(Tag(0x0054, 0x0410)), alias: "PatientOrientationCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0412)), alias: "PatientOrientationModifierCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0414)), alias: "PatientGantryRelationshipCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x1000)), alias: "SeriesType", vr: VR::CS },
    E { tag: Single(Tag(0x0054, 0x1001)), alias: "Units", vr: VR::CS },
    E { tag: Single(Tag(0x0054, 0x1002)), alias: "CountsSource", vr: VR::CS },
    E { tag: Single(Tag(0x0054, 0x1102)), alias: "DecayCorrection", vr: VR::CS },
    E { tag: Single(Tag(0x0054, 0x1300)), alias: "FrameReferenceTime", vr: VR::DS },
    E { tag: Single(Tag(0x0054, 0x1330)), alias: "ImageIndex", vr: VR::US },
    E { tag: Single(Tag(0x0060, 0x3000)), alias: "HistogramSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0062, 0x0001)), alias: "SegmentationType", vr: VR::CS },
    E { tag: Single(Tag(0x0062, 0x0002)), alias: "SegmentSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0062, 0x0003)), alias: "SegmentedPropertyCategoryCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0062, 0x0004)), alias: "SegmentNumber", vr: VR::US },
    E { tag: Single(Tag(0x0062, 0x0005)), alias: "SegmentLabel", vr: VR::LO },
    E { tag: Single(Tag(0x0062, 0x0008)), alias: "SegmentAlgorithmType", vr: VR::CS },
    E { tag: Single(Tag(0x0062, 0x000A)), alias: "SegmentIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0062, 0x000B)), alias: "ReferencedSegmentNumber", vr: VR::US },
    E { tag: Single(Tag(0x0062, 0x000F)), alias: "SegmentedPropertyTypeCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0062, 0x0011)), alias: "SegmentedPropertyTypeModifierCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0064, 0x0002)), alias: "DeformableRegistrationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0064, 0x0005)), alias: "DeformableRegistrationGridSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0064, 0x000F)), alias: "PreDeformationMatrixRegistrationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0064, 0x0010)), alias: "PostDeformationMatrixRegistrationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0066, 0x0002)), alias: "SurfaceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0066, 0x0011)), alias: "SurfacePointsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0066, 0x0012)), alias: "SurfacePointsNormalsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0066, 0x0013)), alias: "SurfaceMeshPrimitivesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0001)), alias: "GraphicAnnotationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0002)), alias: "GraphicLayer", vr: VR::CS },
    E { tag: Single(Tag(0x0070, 0x0006)), alias: "UnformattedTextValue", vr: VR::ST },
    E { tag: Single(Tag(0x0070, 0x0008)), alias: "TextObjectSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0009)), alias: "GraphicObjectSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0022)), alias: "GraphicData", vr: VR::FL },
    E { tag: Single(Tag(0x0070, 0x0023)), alias: "GraphicType", vr: VR::CS },
    E { tag: Single(Tag(0x0070, 0x0041)), alias: "ImageHorizontalFlip", vr: VR::CS },
    E { tag: Single(Tag(0x0070, 0x0042)), alias: "ImageRotation", vr: VR::US },
    E { tag: Single(Tag(0x0070, 0x005A)), alias: "DisplayedAreaSelectionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0060)), alias: "GraphicLayerSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0080)), alias: "ContentLabel", vr: VR::CS },
    E { tag: Single(Tag(0x0070, 0x0081)), alias: "ContentDescription", vr: VR::LO },
    E { tag: Single(Tag(0x0070, 0x0082)), alias: "PresentationCreationDate", vr: VR::DA },
    E { tag: Single(Tag(0x0070, 0x0083)), alias: "PresentationCreationTime", vr: VR::TM },
    E { tag: Single(Tag(0x0070, 0x0084)), alias: "ContentCreatorName", vr: VR::PN },
    E { tag: Single(Tag(0x0070, 0x0086)), alias: "ContentCreatorIdentificationCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0308)), alias: "RegistrationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0309)), alias: "MatrixRegistrationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x030A)), alias: "MatrixSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x030D)), alias: "RegistrationTypeCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0314)), alias: "UsedFiducialsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x031C)), alias: "FiducialSetSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x031E)), alias: "FiducialSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0402)), alias: "BlendingSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0404)), alias: "ReferencedSpatialRegistrationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0072, 0x000C)), alias: "HangingProtocolDefinitionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0072, 0x0020)), alias: "ImageSetsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0072, 0x0022)), alias: "ImageSetSelectorSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0072, 0x0030)), alias: "TimeBasedImageSetsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0072, 0x0200)), alias: "DisplaySetsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0088, 0x0140)), alias: "StorageMediaFileSetUID", vr: VR::UI },
    E { tag: Single(Tag(0x0088, 0x0200)), alias: "IconImageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0400, 0x0100)), alias: "DigitalSignatureUID", vr: VR::UI },
    E { tag: Single(Tag(0x0400, 0x0500)), alias: "EncryptedAttributesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0400, 0x0510)), alias: "EncryptedContentTransferSyntaxUID", vr: VR::UI },
    E { tag: Single(Tag(0x0400, 0x0520)), alias: "EncryptedContent", vr: VR::OB },
    E { tag: Single(Tag(0x0400, 0x0550)), alias: "ModifiedAttributesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0400, 0x0561)), alias: "OriginalAttributesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x2020, 0x0110)), alias: "BasicGrayscaleImageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x2020, 0x0111)), alias: "BasicColorImageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x2050, 0x0010)), alias: "PresentationLUTSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x2050, 0x0020)), alias: "PresentationLUTShape", vr: VR::CS },
    E { tag: Single(Tag(0x3002, 0x0002)), alias: "RTImageLabel", vr: VR::SH },
    E { tag: Single(Tag(0x3002, 0x0030)), alias: "ExposureSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3004, 0x0002)), alias: "DoseUnits", vr: VR::CS },
    E { tag: Single(Tag(0x3004, 0x0004)), alias: "DoseType", vr: VR::CS },
    E { tag: Single(Tag(0x3004, 0x000A)), alias: "DoseSummationType", vr: VR::CS },
    E { tag: Single(Tag(0x3004, 0x000C)), alias: "GridFrameOffsetVector", vr: VR::DS },
    E { tag: Single(Tag(0x3004, 0x000E)), alias: "DoseGridScaling", vr: VR::DS },
    E { tag: Single(Tag(0x3004, 0x0010)), alias: "RTDoseROISequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3004, 0x0050)), alias: "DVHSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3004, 0x0060)), alias: "DVHReferencedROISequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x0002)), alias: "StructureSetLabel", vr: VR::SH },
    E { tag: Single(Tag(0x3006, 0x0004)), alias: "StructureSetName", vr: VR::LO },
    E { tag: Single(Tag(0x3006, 0x0008)), alias: "StructureSetDate", vr: VR::DA },
    E { tag: Single(Tag(0x3006, 0x0009)), alias: "StructureSetTime", vr: VR::TM },
    E { tag: Single(Tag(0x3006, 0x0010)), alias: "ReferencedFrameOfReferenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x0012)), alias: "RTReferencedStudySequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x0014)), alias: "RTReferencedSeriesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x0016)), alias: "ContourImageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x0020)), alias: "StructureSetROISequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x0022)), alias: "ROINumber", vr: VR::IS },
    E { tag: Single(Tag(0x3006, 0x0024)), alias: "ReferencedFrameOfReferenceUID", vr: VR::UI },
    E { tag: Single(Tag(0x3006, 0x0026)), alias: "ROIName", vr: VR::LO },
    E { tag: Single(Tag(0x3006, 0x0028)), alias: "ROIDescription", vr: VR::ST },
    E { tag: Single(Tag(0x3006, 0x002A)), alias: "ROIDisplayColor", vr: VR::IS },
    E { tag: Single(Tag(0x3006, 0x0030)), alias: "RTRelatedROISequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x0036)), alias: "ROIGenerationAlgorithm", vr: VR::CS },
    E { tag: Single(Tag(0x3006, 0x0039)), alias: "ROIContourSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x0040)), alias: "ContourSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x0042)), alias: "ContourGeometricType", vr: VR::CS },
    E { tag: Single(Tag(0x3006, 0x0046)), alias: "NumberOfContourPoints", vr: VR::IS },
    E { tag: Single(Tag(0x3006, 0x0048)), alias: "ContourNumber", vr: VR::IS },
    E { tag: Single(Tag(0x3006, 0x0050)), alias: "ContourData", vr: VR::DS },
    E { tag: Single(Tag(0x3006, 0x0080)), alias: "RTROIObservationsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x0082)), alias: "ObservationNumber", vr: VR::IS },
    E { tag: Single(Tag(0x3006, 0x0084)), alias: "ReferencedROINumber", vr: VR::IS },
    E { tag: Single(Tag(0x3006, 0x0086)), alias: "RTROIIdentificationCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x00A0)), alias: "RelatedRTROIObservationsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x00A4)), alias: "RTROIInterpretedType", vr: VR::CS },
    E { tag: Single(Tag(0x3006, 0x00A6)), alias: "ROIInterpreter", vr: VR::PN },
    E { tag: Single(Tag(0x3006, 0x00B0)), alias: "ROIPhysicalPropertiesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3008, 0x0010)), alias: "MeasuredDoseReferenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0002)), alias: "RTPlanLabel", vr: VR::SH },
    E { tag: Single(Tag(0x300A, 0x0003)), alias: "RTPlanName", vr: VR::LO },
    E { tag: Single(Tag(0x300A, 0x0006)), alias: "RTPlanDate", vr: VR::DA },
    E { tag: Single(Tag(0x300A, 0x0007)), alias: "RTPlanTime", vr: VR::TM },
    E { tag: Single(Tag(0x300A, 0x000C)), alias: "RTPlanGeometry", vr: VR::CS },
    E { tag: Single(Tag(0x300A, 0x0010)), alias: "DoseReferenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0012)), alias: "DoseReferenceNumber", vr: VR::IS },
    E { tag: Single(Tag(0x300A, 0x0040)), alias: "ToleranceTableSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0070)), alias: "FractionGroupSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0078)), alias: "NumberOfFractionsPlanned", vr: VR::IS },
    E { tag: Single(Tag(0x300A, 0x0080)), alias: "NumberOfBeams", vr: VR::IS },
    E { tag: Single(Tag(0x300A, 0x00B0)), alias: "BeamSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x00B2)), alias: "TreatmentMachineName", vr: VR::SH },
    E { tag: Single(Tag(0x300A, 0x00B3)), alias: "PrimaryDosimeterUnit", vr: VR::CS },
    E { tag: Single(Tag(0x300A, 0x00B6)), alias: "BeamLimitingDeviceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x00C0)), alias: "BeamNumber", vr: VR::IS },
    E { tag: Single(Tag(0x300A, 0x00C2)), alias: "BeamName", vr: VR::LO },
    E { tag: Single(Tag(0x300A, 0x00C4)), alias: "BeamType", vr: VR::CS },
    E { tag: Single(Tag(0x300A, 0x00C6)), alias: "RadiationType", vr: VR::CS },
    E { tag: Single(Tag(0x300A, 0x00D1)), alias: "WedgeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x00E3)), alias: "CompensatorSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x00F4)), alias: "BlockSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0111)), alias: "ControlPointSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x011A)), alias: "BeamLimitingDevicePositionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x011E)), alias: "GantryAngle", vr: VR::DS },
    E { tag: Single(Tag(0x300A, 0x0120)), alias: "BeamLimitingDeviceAngle", vr: VR::DS },
    E { tag: Single(Tag(0x300A, 0x0122)), alias: "PatientSupportAngle", vr: VR::DS },
    E { tag: Single(Tag(0x300A, 0x0180)), alias: "PatientSetupSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x01B4)), alias: "FixationDeviceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x01D4)), alias: "ShieldingDeviceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0210)), alias: "SourceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0230)), alias: "ApplicationSetupSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0280)), alias: "ChannelSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x02D0)), alias: "BrachyControlPointSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0314)), alias: "SnoutSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x03A2)), alias: "IonBeamSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x03A8)), alias: "IonControlPointSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0420)), alias: "GeneralAccessorySequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300C, 0x0002)), alias: "ReferencedRTPlanSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300C, 0x0004)), alias: "ReferencedBeamSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300C, 0x0006)), alias: "ReferencedBeamNumber", vr: VR::IS },
    E { tag: Single(Tag(0x300C, 0x0020)), alias: "ReferencedFractionGroupSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300C, 0x0022)), alias: "ReferencedFractionGroupNumber", vr: VR::IS },
    E { tag: Single(Tag(0x300C, 0x0040)), alias: "ReferencedVerificationImageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300C, 0x0042)), alias: "ReferencedReferenceImageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300C, 0x0050)), alias: "ReferencedDoseReferenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300C, 0x0055)), alias: "BrachyReferencedDoseReferenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300C, 0x0060)), alias: "ReferencedStructureSetSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300C, 0x006A)), alias: "ReferencedPatientSetupNumber", vr: VR::IS },
    E { tag: Single(Tag(0x300C, 0x0080)), alias: "ReferencedDoseSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300E, 0x0002)), alias: "ApprovalStatus", vr: VR::CS },
    E { tag: Single(Tag(0x300E, 0x0004)), alias: "ReviewDate", vr: VR::DA },
    E { tag: Single(Tag(0x300E, 0x0005)), alias: "ReviewTime", vr: VR::TM },
    E { tag: Single(Tag(0x300E, 0x0008)), alias: "ReviewerName", vr: VR::PN },
    E { tag: Single(Tag(0x5200, 0x9229)), alias: "SharedFunctionalGroupsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x5200, 0x9230)), alias: "PerFrameFunctionalGroupsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x5400, 0x0100)), alias: "WaveformSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x5400, 0x1004)), alias: "WaveformBitsAllocated", vr: VR::US },
    E { tag: Single(Tag(0x5400, 0x1006)), alias: "WaveformSampleInterpretation", vr: VR::CS },
    E { tag: Single(Tag(0x5400, 0x1010)), alias: "WaveformData", vr: VR::OW },
    E { tag: Single(Tag(0x7FE0, 0x0008)), alias: "FloatPixelData", vr: VR::OF },
    E { tag: Single(Tag(0x7FE0, 0x0009)), alias: "DoubleFloatPixelData", vr: VR::OD },
    E { tag: Single(Tag(0x7FE0, 0x0010)), alias: "PixelData", vr: VR::OW },
    E { tag: Single(Tag(0xFFFA, 0xFFFA)), alias: "DigitalSignaturesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0xFFFC, 0xFFFC)), alias: "DataSetTrailingPadding", vr: VR::OB },
    E { tag: Single(Tag(0xFFFE, 0xE000)), alias: "Item", vr: VR::UN },
    E { tag: Single(Tag(0xFFFE, 0xE00D)), alias: "ItemDelimitationItem", vr: VR::UN },
    E { tag: Single(Tag(0xFFFE, 0xE0DD)), alias: "SequenceDelimitationItem", vr: VR::UN },
    E { tag: Group100(Tag(0x5000, 0x0005)), alias: "CurveDimensions", vr: VR::US },
    E { tag: Group100(Tag(0x5000, 0x3000)), alias: "CurveData", vr: VR::OW },
    E { tag: Group100(Tag(0x6000, 0x0010)), alias: "OverlayRows", vr: VR::US },
    E { tag: Group100(Tag(0x6000, 0x0011)), alias: "OverlayColumns", vr: VR::US },
    E { tag: Group100(Tag(0x6000, 0x0040)), alias: "OverlayType", vr: VR::CS },
    E { tag: Group100(Tag(0x6000, 0x0050)), alias: "OverlayOrigin", vr: VR::SS },
    E { tag: Group100(Tag(0x6000, 0x0100)), alias: "OverlayBitsAllocated", vr: VR::US },
    E { tag: Group100(Tag(0x6000, 0x0102)), alias: "OverlayBitPosition", vr: VR::US },
    E { tag: Group100(Tag(0x6000, 0x3000)), alias: "OverlayData", vr: VR::OW },
];

//! General information.

use bstr::BString;

use crate::field::Field;

/// Patient, study, and acquisition information common to all data sets.
///
/// Strings are stored as raw byte strings: the format predates any character
/// set negotiation, and file names in particular need not be UTF-8.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct General {
    /// Format recognition code (`VIEWNIX1.0`).
    pub recognition_code: Field<BString>,
    /// Study date (`YYYY.MM.DD`).
    pub study_date: Field<BString>,
    /// Study time (`HH:MM:SS`).
    pub study_time: Field<BString>,
    /// Data set type (see [`crate::DataSetType`]).
    pub data_type: Field<i16>,
    /// Imaging modality.
    pub modality: Field<BString>,
    /// Institution name.
    pub institution: Field<BString>,
    /// Referring physician.
    pub physician: Field<BString>,
    /// Department.
    pub department: Field<BString>,
    /// Radiologist.
    pub radiologist: Field<BString>,
    /// Manufacturer's model name.
    pub model: Field<BString>,
    /// Name of this file.
    pub filename: Field<BString>,
    /// Name of the file this data set was derived from.
    pub filename1: Field<BString>,
    /// Description of this data set.
    pub description: Field<BString>,
    /// Free-text comment.
    pub comment: Field<BString>,
    /// Patient name.
    pub patient_name: Field<BString>,
    /// Patient identifier.
    pub patient_id: Field<BString>,
    /// Slice thickness in mm.
    pub slice_thickness: Field<f32>,
    /// Peak kilovoltage output of the x-ray generator, and a second value
    /// for dual-energy acquisitions.
    pub kvp: Field<[f32; 2]>,
    /// Repetition time in ms.
    pub repetition_time: Field<f32>,
    /// Echo time in ms.
    pub echo_time: Field<f32>,
    /// Nucleus imaged (magnetic resonance).
    pub imaged_nucleus: Field<BString>,
    /// Gantry tilt in degrees.
    pub gantry_tilt: Field<f32>,
    /// Study number.
    pub study: Field<BString>,
    /// Series number.
    pub series: Field<BString>,
    /// Gray lookup table descriptor: number of entries, first input value
    /// mapped, and entry width in bits.
    pub gray_descriptor: Field<[i16; 3]>,
    /// Red lookup table descriptor.
    pub red_descriptor: Field<[i16; 3]>,
    /// Green lookup table descriptor.
    pub green_descriptor: Field<[i16; 3]>,
    /// Blue lookup table descriptor.
    pub blue_descriptor: Field<[i16; 3]>,
    /// Gray lookup table data.
    pub gray_lookup_data: Field<Vec<u16>>,
    /// Red lookup table data.
    pub red_lookup_data: Field<Vec<u16>>,
    /// Green lookup table data.
    pub green_lookup_data: Field<Vec<u16>>,
    /// Blue lookup table data.
    pub blue_lookup_data: Field<Vec<u16>>,
}

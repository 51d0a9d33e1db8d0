use std::io::{Read, Seek};

use crate::{error::Error, header::General};

use super::field::FieldReader;

pub(super) const SHORT_STRING_MAX: usize = 10;
pub(super) const DATE_MAX: usize = 15;
pub(super) const STRING_MAX: usize = 80;

pub(super) fn read_general<R>(fields: &mut FieldReader<'_, R>) -> Result<General, Error>
where
    R: Read + Seek,
{
    let mut general = General::default();

    general.recognition_code = fields.string(STRING_MAX)?;
    general.study_date = fields.string(DATE_MAX)?;
    general.study_time = fields.string(DATE_MAX)?;
    general.data_type = fields.short()?;
    general.modality = fields.string(SHORT_STRING_MAX)?;
    general.institution = fields.string(STRING_MAX)?;
    general.physician = fields.string(STRING_MAX)?;
    general.department = fields.string(STRING_MAX)?;
    general.radiologist = fields.string(STRING_MAX)?;
    general.model = fields.string(STRING_MAX)?;
    general.filename = fields.string(STRING_MAX)?;
    general.filename1 = fields.string(STRING_MAX)?;
    general.description = fields.text()?;
    general.comment = fields.text()?;
    general.patient_name = fields.string(STRING_MAX)?;
    general.patient_id = fields.string(STRING_MAX)?;
    general.slice_thickness = fields.float()?;
    general.kvp = fields.floats_fixed()?;
    general.repetition_time = fields.float()?;
    general.echo_time = fields.float()?;
    general.imaged_nucleus = fields.text()?;
    general.gantry_tilt = fields.float()?;
    general.study = fields.string(SHORT_STRING_MAX)?;
    general.series = fields.string(SHORT_STRING_MAX)?;

    general.gray_descriptor = fields.shorts_fixed()?;
    general.red_descriptor = fields.shorts_fixed()?;
    general.green_descriptor = fields.shorts_fixed()?;
    general.blue_descriptor = fields.shorts_fixed()?;

    // lookup table sizes come from the descriptors' first entries, whether
    // or not the descriptors themselves were valid
    general.gray_lookup_data = fields.ushorts(i32::from(general.gray_descriptor.value()[0]))?;
    general.red_lookup_data = fields.ushorts(i32::from(general.red_descriptor.value()[0]))?;
    general.green_lookup_data = fields.ushorts(i32::from(general.green_descriptor.value()[0]))?;
    general.blue_lookup_data = fields.ushorts(i32::from(general.blue_descriptor.value()[0]))?;

    Ok(general)
}

use std::io::{Seek, Write};

use crate::{error::Error, header::General};

use super::FieldWriter;

const GENERAL_GROUP: u16 = 0x0009;
const PATIENT_GROUP: u16 = 0x0010;
const ACQUISITION_GROUP: u16 = 0x0018;
const RELATIONSHIP_GROUP: u16 = 0x0020;
const IMAGE_GROUP: u16 = 0x0028;

pub(super) fn write_general<W>(
    fields: &mut FieldWriter<'_, W>,
    general: &General,
) -> Result<(), Error>
where
    W: Write + Seek,
{
    fields.begin()?;

    fields.string(&general.recognition_code)?;

    fields.string_value(
        &normalize_datestamp(general.study_date.value(), b'.'),
        general.study_date.is_valid(),
    )?;

    fields.string_value(
        &normalize_datestamp(general.study_time.value(), b':'),
        general.study_time.is_valid(),
    )?;

    fields.short(&general.data_type)?;
    fields.string(&general.modality)?;
    fields.string(&general.institution)?;
    fields.string(&general.physician)?;
    fields.string(&general.department)?;
    fields.string(&general.radiologist)?;
    fields.string(&general.model)?;

    fields.flush_group(GENERAL_GROUP)?;

    fields.string(&general.filename)?;
    fields.string(&general.filename1)?;
    fields.string(&general.description)?;
    fields.string(&general.comment)?;

    fields.flush_group(PATIENT_GROUP)?;

    fields.string(&general.patient_name)?;
    fields.string(&general.patient_id)?;

    fields.flush_group(ACQUISITION_GROUP)?;

    fields.float(&general.slice_thickness)?;
    fields.floats_fixed(&general.kvp)?;
    fields.float(&general.repetition_time)?;
    fields.float(&general.echo_time)?;
    fields.string(&general.imaged_nucleus)?;
    fields.float(&general.gantry_tilt)?;

    fields.flush_group(RELATIONSHIP_GROUP)?;

    fields.string(&general.study)?;
    fields.string(&general.series)?;

    fields.flush_group(IMAGE_GROUP)?;

    fields.shorts_fixed(&general.gray_descriptor)?;
    fields.shorts_fixed(&general.red_descriptor)?;
    fields.shorts_fixed(&general.green_descriptor)?;
    fields.shorts_fixed(&general.blue_descriptor)?;

    fields.ushorts(&general.gray_lookup_data, lookup_count(general, 0))?;
    fields.ushorts(&general.red_lookup_data, lookup_count(general, 1))?;
    fields.ushorts(&general.green_lookup_data, lookup_count(general, 2))?;
    fields.ushorts(&general.blue_lookup_data, lookup_count(general, 3))?;

    Ok(())
}

// A lookup table's size is the first entry of its descriptor, and nothing is
// written without a valid descriptor.
fn lookup_count(general: &General, channel: usize) -> i32 {
    let descriptor = match channel {
        0 => &general.gray_descriptor,
        1 => &general.red_descriptor,
        2 => &general.green_descriptor,
        _ => &general.blue_descriptor,
    };

    if descriptor.is_valid() {
        i32::from(descriptor.value()[0])
    } else {
        0
    }
}

// Delimiter normalization for dates and times: digits pass through, blanks
// are zeroed, and anything else becomes the delimiter.
fn normalize_datestamp(value: &[u8], delimiter: u8) -> Vec<u8> {
    value
        .iter()
        .map(|&b| match b {
            b'0'..=b'9' => b,
            b' ' => b'0',
            _ => delimiter,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_datestamp() {
        assert_eq!(normalize_datestamp(b"1989-01-06", b'.'), b"1989.01.06");
        assert_eq!(normalize_datestamp(b"12: 4:30", b':'), b"12:04:30");
        assert_eq!(normalize_datestamp(b"", b'.'), b"");
    }
}

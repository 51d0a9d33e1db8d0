use std::io::{Read, Seek};

use crate::{error::Error, field::Field, header::Display};

use super::{
    field::{Count, FieldReader},
    usize_len,
};

pub(super) fn read_display<R>(fields: &mut FieldReader<'_, R>) -> Result<Display, Error>
where
    R: Read + Seek,
{
    let mut display = Display::default();

    display.dimension = fields.short()?;

    display.measurement_unit = fields.shorts_fixed()?;

    if !display.measurement_unit.is_valid() {
        // millimeters
        display.measurement_unit = Field::fallback([3, 3]);
    }

    display.num_of_elems = fields.short()?;
    let num_of_elems = i32::from(*display.num_of_elems.value());

    display.smallest_value = fields.floats(Count::Fixed(num_of_elems))?;

    if display.num_of_elems.is_valid() && !display.smallest_value.is_valid() {
        display.smallest_value = Field::fallback(vec![0.0; usize_len(num_of_elems)]);
    } else if !display.num_of_elems.is_valid() && display.smallest_value.is_valid() {
        display.smallest_value = Field::default();
    }

    display.largest_value = fields.floats(Count::Fixed(num_of_elems))?;

    if display.num_of_elems.is_valid() && !display.largest_value.is_valid() {
        display.largest_value = Field::fallback(vec![f32::from(i16::MAX); usize_len(num_of_elems)]);
    }

    display.num_of_integers = fields.short()?;
    let num_of_integers = i32::from(*display.num_of_integers.value());

    display.signed_bits = fields.shorts(Count::Fixed(num_of_integers))?;

    if display.num_of_integers.is_valid() && !display.signed_bits.is_valid() {
        display.signed_bits = Field::fallback(vec![0; usize_len(num_of_integers)]);
    } else if !display.num_of_integers.is_valid() && display.signed_bits.is_valid() {
        display.signed_bits = Field::default();
    }

    display.num_of_bits = fields.short()?;

    display.bit_fields = fields.shorts(Count::Fixed(2 * num_of_elems))?;

    if !display.num_of_elems.is_valid() && display.bit_fields.is_valid() {
        display.bit_fields = Field::default();
    }

    display.dimension_in_alignment = fields.short()?;

    if !display.dimension_in_alignment.is_valid() {
        display.dimension_in_alignment = Field::fallback(2);
    }

    display.bytes_in_alignment = fields.short()?;

    if !display.bytes_in_alignment.is_valid() {
        display.bytes_in_alignment = Field::fallback(1);
    }

    display.num_of_images = fields.short()?;
    let num_of_images = i32::from(*display.num_of_images.value());

    display.xysize = fields.shorts_fixed()?;

    display.xypixsz = fields.floats_fixed()?;

    if !display.xypixsz.is_valid() {
        display.xypixsz = Field::fallback([1.0, 1.0]);
    }

    display.specification_pv = fields.text()?;

    if !display.dimension.is_valid() {
        display.specification_pv = Field::default();
    }

    display.pv = fields.shorts(Count::Fixed(num_of_images))?;

    if !display.num_of_images.is_valid() && display.pv.is_valid() {
        display.pv = Field::default();
    }

    display.description = fields.text()?;

    Ok(display)
}

use std::io::{Seek, Write};

use crate::{error::Error, header::Display};

use super::{DISPLAY_GROUP, FieldWriter};

pub(super) fn write_display<W>(
    fields: &mut FieldWriter<'_, W>,
    display: &Display,
) -> Result<(), Error>
where
    W: Write + Seek,
{
    fields.flush_group(DISPLAY_GROUP)?;

    fields.short(&display.dimension)?;
    fields.shorts_fixed(&display.measurement_unit)?;

    fields.short(&display.num_of_elems)?;
    let num_of_elems = i32::from(*display.num_of_elems.value());

    fields.floats(&display.smallest_value, num_of_elems)?;
    fields.floats(&display.largest_value, num_of_elems)?;

    fields.short(&display.num_of_integers)?;
    fields.shorts(
        &display.signed_bits,
        i32::from(*display.num_of_integers.value()),
    )?;
    fields.short(&display.num_of_bits)?;
    fields.shorts(&display.bit_fields, 2 * num_of_elems)?;

    fields.short(&display.dimension_in_alignment)?;
    fields.short(&display.bytes_in_alignment)?;

    fields.short(&display.num_of_images)?;

    fields.shorts_fixed(&display.xysize)?;
    fields.floats_fixed(&display.xypixsz)?;

    fields.string(&display.specification_pv)?;

    fields.shorts(&display.pv, i32::from(*display.num_of_images.value()))?;

    fields.string(&display.description)?;

    Ok(())
}

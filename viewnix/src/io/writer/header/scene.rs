use std::io::{Seek, Write};

use crate::{error::Error, header::Scene};

use super::{FieldWriter, SCENE_GROUP, count_entries, join_labels, location_total, usize_len};

pub(super) fn write_scene<W>(fields: &mut FieldWriter<'_, W>, scene: &Scene) -> Result<(), Error>
where
    W: Write + Seek,
{
    fields.flush_group(SCENE_GROUP)?;

    fields.short(&scene.dimension)?;
    let dimension = i32::from(*scene.dimension.value());

    fields.floats(&scene.domain, (dimension + 1) * dimension)?;

    fields.string_value(
        &join_labels(scene.axis_label.value(), usize_len(dimension)),
        scene.axis_label.is_valid(),
    )?;

    fields.shorts(&scene.measurement_unit, dimension)?;

    fields.short(&scene.num_of_density_values)?;
    let num_of_density_values = i32::from(*scene.num_of_density_values.value());

    fields.shorts(&scene.density_measurement_unit, num_of_density_values)?;
    fields.floats(&scene.smallest_density_value, num_of_density_values)?;
    fields.floats(&scene.largest_density_value, num_of_density_values)?;

    fields.short(&scene.num_of_integers)?;
    let num_of_integers = i32::from(*scene.num_of_integers.value());

    fields.shorts(&scene.signed_bits, num_of_integers)?;
    fields.short(&scene.num_of_bits)?;
    fields.shorts(&scene.bit_fields, 2 * num_of_density_values)?;

    fields.short(&scene.dimension_in_alignment)?;
    fields.short(&scene.bytes_in_alignment)?;

    fields.shorts_fixed(&scene.xysize)?;

    let entries = count_entries(scene.num_of_subscenes.value(), dimension);
    fields.shorts(&scene.num_of_subscenes, entries as i32)?;

    fields.floats_fixed(&scene.xypixsz)?;

    let locations = location_total(scene.num_of_subscenes.value(), entries);
    fields.floats(&scene.loc_of_subscenes, locations)?;

    fields.string(&scene.description)?;

    Ok(())
}

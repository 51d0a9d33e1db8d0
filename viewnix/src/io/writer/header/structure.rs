use std::io::{Seek, Write};

use crate::{error::Error, header::Structure};

use super::{FieldWriter, STRUCTURE_GROUP, count_entries, join_labels, location_total, usize_len};

pub(super) fn write_structure<W>(
    fields: &mut FieldWriter<'_, W>,
    structure: &Structure,
) -> Result<(), Error>
where
    W: Write + Seek,
{
    fields.flush_group(STRUCTURE_GROUP)?;

    fields.short(&structure.dimension)?;
    let dimension = i32::from(*structure.dimension.value());

    fields.short(&structure.num_of_structures)?;

    // all per-structure counts fall back to one structure
    let num_of_structures = if structure.num_of_structures.is_valid() {
        i32::from(*structure.num_of_structures.value())
    } else {
        1
    };

    fields.floats(
        &structure.domain,
        num_of_structures * (dimension + 1) * dimension,
    )?;

    fields.string_value(
        &join_labels(structure.axis_label.value(), usize_len(dimension)),
        structure.axis_label.is_valid(),
    )?;

    fields.shorts(&structure.measurement_unit, dimension)?;

    fields.string_value(
        &join_labels(structure.scene_file.value(), usize_len(num_of_structures)),
        structure.scene_file.is_valid(),
    )?;

    fields.ints(&structure.num_of_tse, num_of_structures)?;
    fields.ints(&structure.num_of_ntse, num_of_structures)?;

    fields.short(&structure.num_of_components_in_tse)?;
    let num_of_components_in_tse = i32::from(*structure.num_of_components_in_tse.value());

    fields.short(&structure.num_of_components_in_ntse)?;
    let num_of_components_in_ntse = i32::from(*structure.num_of_components_in_ntse.value());

    fields.shorts(&structure.tse_measurement_unit, num_of_components_in_tse)?;
    fields.shorts(&structure.ntse_measurement_unit, num_of_components_in_ntse)?;

    fields.floats(
        &structure.smallest_value,
        num_of_components_in_tse * num_of_structures,
    )?;
    fields.floats(
        &structure.largest_value,
        num_of_components_in_tse * num_of_structures,
    )?;

    fields.short(&structure.num_of_integers_in_tse)?;
    fields.shorts(
        &structure.signed_bits_in_tse,
        i32::from(*structure.num_of_integers_in_tse.value()),
    )?;
    fields.short(&structure.num_of_bits_in_tse)?;
    fields.shorts(&structure.bit_fields_in_tse, 2 * num_of_components_in_tse)?;

    fields.short(&structure.num_of_integers_in_ntse)?;
    fields.shorts(
        &structure.signed_bits_in_ntse,
        i32::from(*structure.num_of_integers_in_ntse.value()),
    )?;
    fields.short(&structure.num_of_bits_in_ntse)?;
    fields.shorts(&structure.bit_fields_in_ntse, 2 * num_of_components_in_ntse)?;

    let entries = count_entries(structure.num_of_samples.value(), dimension);
    fields.shorts(&structure.num_of_samples, entries as i32)?;

    fields.floats_fixed(&structure.xysize)?;

    let locations = location_total(structure.num_of_samples.value(), entries);
    fields.floats(&structure.loc_of_samples, locations)?;

    fields.short(&structure.num_of_elements)?;
    let num_of_elements = i32::from(*structure.num_of_elements.value());

    fields.shorts(&structure.description_of_element, num_of_elements)?;
    fields.floats(
        &structure.parameter_vectors,
        num_of_elements * num_of_structures,
    )?;

    fields.floats(
        &structure.min_max_coordinates,
        2 * dimension * num_of_structures,
    )?;

    fields.floats(&structure.volume, num_of_structures)?;
    fields.floats(&structure.surface_area, num_of_structures)?;
    fields.floats(&structure.rate_of_change_volume, num_of_structures)?;

    fields.string(&structure.description)?;

    Ok(())
}

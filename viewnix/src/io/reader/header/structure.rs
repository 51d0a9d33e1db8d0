use std::io::{Read, Seek};

use crate::{error::Error, field::Field, header::Structure};

use super::{
    field::{Count, FieldReader},
    identity_domain, location_count, usize_len,
};

pub(super) fn read_structure<R>(fields: &mut FieldReader<'_, R>) -> Result<Structure, Error>
where
    R: Read + Seek,
{
    let mut structure = Structure::default();

    structure.dimension = fields.short()?;
    let dimension = i32::from(*structure.dimension.value());

    structure.num_of_structures = fields.short()?;

    if !structure.num_of_structures.is_valid() {
        structure.num_of_structures = Field::fallback(1);
    }

    let num_of_structures = i32::from(*structure.num_of_structures.value());

    structure.domain = fields.floats(Count::Fixed(
        num_of_structures * (dimension + 1) * dimension,
    ))?;

    if structure.dimension.is_valid() && !structure.domain.is_valid() {
        structure.domain = Field::fallback(identity_domain(dimension, num_of_structures));
    } else if !structure.dimension.is_valid() && structure.domain.is_valid() {
        structure.domain = Field::default();
    }

    structure.axis_label = fields.labels(*structure.dimension.value())?;

    structure.measurement_unit = fields.shorts(Count::Fixed(dimension))?;

    if structure.dimension.is_valid() && !structure.measurement_unit.is_valid() {
        structure.measurement_unit = Field::fallback(vec![3; usize_len(dimension)]);
    } else if !structure.dimension.is_valid() && structure.measurement_unit.is_valid() {
        structure.measurement_unit = Field::default();
    }

    structure.scene_file = fields.labels(*structure.num_of_structures.value())?;

    structure.num_of_tse = fields.ints(Count::Fixed(num_of_structures))?;

    if structure.num_of_structures.is_valid() && !structure.num_of_tse.is_valid() {
        structure.num_of_tse = Field::fallback(vec![1; usize_len(num_of_structures)]);
    } else if !structure.num_of_structures.is_valid() && structure.num_of_tse.is_valid() {
        structure.num_of_tse = Field::default();
    }

    structure.num_of_ntse = fields.ints(Count::Fixed(num_of_structures))?;

    if structure.num_of_structures.is_valid() && !structure.num_of_ntse.is_valid() {
        structure.num_of_ntse = Field::fallback(vec![1; usize_len(num_of_structures)]);
    } else if !structure.num_of_structures.is_valid() && structure.num_of_ntse.is_valid() {
        structure.num_of_ntse = Field::default();
    }

    structure.num_of_components_in_tse = fields.short()?;
    let num_of_components_in_tse = i32::from(*structure.num_of_components_in_tse.value());

    structure.num_of_components_in_ntse = fields.short()?;
    let num_of_components_in_ntse = i32::from(*structure.num_of_components_in_ntse.value());

    structure.tse_measurement_unit = fields.shorts(Count::Fixed(num_of_components_in_tse))?;
    structure.ntse_measurement_unit = fields.shorts(Count::Fixed(num_of_components_in_ntse))?;

    structure.smallest_value =
        fields.floats(Count::Fixed(num_of_components_in_tse * num_of_structures))?;

    if (structure.num_of_components_in_tse.is_valid() || structure.num_of_structures.is_valid())
        && !structure.smallest_value.is_valid()
    {
        structure.smallest_value = Field::fallback(vec![0.0; usize_len(num_of_components_in_tse)]);
    } else if (!structure.num_of_components_in_tse.is_valid()
        || !structure.num_of_structures.is_valid())
        && structure.smallest_value.is_valid()
    {
        structure.smallest_value = Field::default();
    }

    structure.largest_value =
        fields.floats(Count::Fixed(num_of_components_in_tse * num_of_structures))?;

    if (structure.num_of_components_in_tse.is_valid() || structure.num_of_structures.is_valid())
        && !structure.largest_value.is_valid()
    {
        structure.largest_value = Field::fallback(vec![
            f32::from(i16::MAX);
            usize_len(num_of_components_in_tse)
        ]);
    } else if (!structure.num_of_components_in_tse.is_valid()
        || !structure.num_of_structures.is_valid())
        && structure.largest_value.is_valid()
    {
        structure.largest_value = Field::default();
    }

    structure.num_of_integers_in_tse = fields.short()?;
    let num_of_integers_in_tse = i32::from(*structure.num_of_integers_in_tse.value());

    structure.signed_bits_in_tse = fields.shorts(Count::Fixed(num_of_integers_in_tse))?;

    if structure.num_of_integers_in_tse.is_valid() && !structure.signed_bits_in_tse.is_valid() {
        structure.signed_bits_in_tse = Field::fallback(vec![0; usize_len(num_of_integers_in_tse)]);
    } else if !structure.num_of_integers_in_tse.is_valid()
        && structure.signed_bits_in_tse.is_valid()
    {
        structure.signed_bits_in_tse = Field::default();
    }

    structure.num_of_bits_in_tse = fields.short()?;

    structure.bit_fields_in_tse = fields.shorts(Count::Fixed(2 * num_of_components_in_tse))?;

    if !structure.num_of_components_in_tse.is_valid() && structure.bit_fields_in_tse.is_valid() {
        structure.bit_fields_in_tse = Field::default();
    }

    structure.num_of_integers_in_ntse = fields.short()?;
    let num_of_integers_in_ntse = i32::from(*structure.num_of_integers_in_ntse.value());

    structure.signed_bits_in_ntse = fields.shorts(Count::Fixed(num_of_integers_in_ntse))?;

    if structure.num_of_integers_in_ntse.is_valid() && !structure.signed_bits_in_ntse.is_valid() {
        structure.signed_bits_in_ntse =
            Field::fallback(vec![0; usize_len(num_of_integers_in_ntse)]);
    } else if !structure.num_of_integers_in_ntse.is_valid()
        && structure.signed_bits_in_ntse.is_valid()
    {
        structure.signed_bits_in_ntse = Field::default();
    }

    structure.num_of_bits_in_ntse = fields.short()?;

    structure.bit_fields_in_ntse = fields.shorts(Count::Fixed(2 * num_of_components_in_ntse))?;

    if !structure.num_of_components_in_ntse.is_valid() && structure.bit_fields_in_ntse.is_valid() {
        structure.bit_fields_in_ntse = Field::default();
    }

    let count = if dimension == 4 {
        Count::SelfDescribing
    } else {
        Count::Fixed(1)
    };

    structure.num_of_samples = fields.shorts(count)?;

    structure.xysize = fields.floats_fixed()?;

    let locations = location_count(structure.num_of_samples.value(), dimension);
    structure.loc_of_samples = fields.floats(Count::Fixed(locations))?;

    structure.num_of_elements = fields.short()?;

    if !structure.num_of_elements.is_valid() {
        structure.num_of_elements = Field::fallback(1);
    }

    let num_of_elements = i32::from(*structure.num_of_elements.value());

    structure.description_of_element = fields.shorts(Count::Fixed(num_of_elements))?;

    if !structure.description_of_element.is_valid() {
        structure.description_of_element = Field::fallback(vec![1; usize_len(num_of_elements)]);
    }

    structure.parameter_vectors =
        fields.floats(Count::Fixed(num_of_elements * num_of_structures))?;

    // a placeholder ramp stands in when the vectors and the structure count
    // disagree on validity
    if structure.num_of_structures.is_valid() != structure.parameter_vectors.is_valid() {
        structure.parameter_vectors = Field::fallback(parameter_ramp(
            num_of_elements,
            num_of_structures,
        ));
    }

    structure.min_max_coordinates =
        fields.floats(Count::Fixed(2 * dimension * num_of_structures))?;

    if (!structure.dimension.is_valid() || !structure.num_of_structures.is_valid())
        && structure.min_max_coordinates.is_valid()
    {
        structure.min_max_coordinates = Field::default();
    }

    structure.volume = fields.floats(Count::Fixed(num_of_structures))?;

    if structure.num_of_structures.is_valid() && !structure.volume.is_valid() {
        structure.volume = Field::fallback(vec![0.0; usize_len(num_of_structures)]);
    } else if !structure.num_of_structures.is_valid() && structure.volume.is_valid() {
        structure.volume = Field::default();
    }

    structure.surface_area = fields.floats(Count::Fixed(num_of_structures))?;

    if structure.num_of_structures.is_valid() && !structure.surface_area.is_valid() {
        structure.surface_area = Field::fallback(vec![0.0; usize_len(num_of_structures)]);
    } else if !structure.num_of_structures.is_valid() && structure.surface_area.is_valid() {
        structure.surface_area = Field::default();
    }

    structure.rate_of_change_volume = fields.floats(Count::Fixed(num_of_structures))?;

    if structure.num_of_structures.is_valid() && !structure.rate_of_change_volume.is_valid() {
        structure.rate_of_change_volume = Field::fallback(vec![0.0; usize_len(num_of_structures)]);
    } else if !structure.num_of_structures.is_valid()
        && structure.rate_of_change_volume.is_valid()
    {
        structure.rate_of_change_volume = Field::default();
    }

    structure.description = fields.text()?;

    Ok(structure)
}

// Placeholder parameter vectors: element values start at 1 and step up once
// past the first structure's vector.
fn parameter_ramp(num_of_elements: i32, num_of_structures: i32) -> Vec<f32> {
    let ne = usize_len(num_of_elements);
    let total = usize_len(num_of_structures * num_of_elements);

    let mut val = 1;
    let mut vectors = Vec::with_capacity(total);

    for i in 0..total {
        if i == ne {
            val += 1;
        }

        vectors.push(val as f32);
    }

    vectors
}

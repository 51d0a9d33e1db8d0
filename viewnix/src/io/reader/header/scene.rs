use std::io::{Read, Seek};

use crate::{error::Error, field::Field, header::Scene};

use super::{
    field::{Count, FieldReader},
    identity_domain, location_count, usize_len,
};

pub(super) fn read_scene<R>(fields: &mut FieldReader<'_, R>) -> Result<Scene, Error>
where
    R: Read + Seek,
{
    let mut scene = Scene::default();

    scene.dimension = fields.short()?;
    let dimension = i32::from(*scene.dimension.value());

    scene.domain = fields.floats(Count::Fixed((dimension + 1) * dimension))?;

    if scene.dimension.is_valid() && !scene.domain.is_valid() {
        scene.domain = Field::fallback(identity_domain(dimension, 1));
    } else if !scene.dimension.is_valid() && scene.domain.is_valid() {
        scene.domain = Field::default();
    }

    scene.axis_label = fields.labels(*scene.dimension.value())?;

    scene.measurement_unit = fields.shorts(Count::Fixed(dimension))?;

    if scene.dimension.is_valid() && !scene.measurement_unit.is_valid() {
        // millimeters
        scene.measurement_unit = Field::fallback(vec![3; usize_len(dimension)]);
    } else if !scene.dimension.is_valid() && scene.measurement_unit.is_valid() {
        scene.measurement_unit = Field::default();
    }

    scene.num_of_density_values = fields.short()?;
    let num_of_density_values = i32::from(*scene.num_of_density_values.value());

    scene.density_measurement_unit = fields.shorts(Count::Fixed(num_of_density_values))?;

    scene.smallest_density_value = fields.floats(Count::Fixed(num_of_density_values))?;

    if scene.num_of_density_values.is_valid() && !scene.smallest_density_value.is_valid() {
        scene.smallest_density_value = Field::fallback(vec![0.0; usize_len(num_of_density_values)]);
    } else if !scene.num_of_density_values.is_valid() && scene.smallest_density_value.is_valid() {
        scene.smallest_density_value = Field::default();
    }

    scene.largest_density_value = fields.floats(Count::Fixed(num_of_density_values))?;

    if scene.num_of_density_values.is_valid() && !scene.largest_density_value.is_valid() {
        scene.largest_density_value =
            Field::fallback(vec![f32::from(i16::MAX); usize_len(num_of_density_values)]);
    } else if !scene.num_of_density_values.is_valid() && scene.largest_density_value.is_valid() {
        scene.largest_density_value = Field::default();
    }

    scene.num_of_integers = fields.short()?;
    let num_of_integers = i32::from(*scene.num_of_integers.value());

    scene.signed_bits = fields.shorts(Count::Fixed(num_of_integers))?;

    if scene.num_of_integers.is_valid() && !scene.signed_bits.is_valid() {
        scene.signed_bits = Field::fallback(vec![0; usize_len(num_of_integers)]);
    } else if !scene.num_of_integers.is_valid() && scene.signed_bits.is_valid() {
        scene.signed_bits = Field::default();
    }

    scene.num_of_bits = fields.short()?;

    scene.bit_fields = fields.shorts(Count::Fixed(2 * num_of_density_values))?;

    if !scene.num_of_density_values.is_valid() && scene.bit_fields.is_valid() {
        scene.bit_fields = Field::default();
    }

    scene.dimension_in_alignment = fields.short()?;

    if !scene.dimension_in_alignment.is_valid() {
        scene.dimension_in_alignment = Field::fallback(2);
    }

    scene.bytes_in_alignment = fields.short()?;

    if !scene.bytes_in_alignment.is_valid() {
        scene.bytes_in_alignment = Field::fallback(1);
    }

    scene.xysize = fields.shorts_fixed()?;

    let count = if dimension == 4 {
        Count::SelfDescribing
    } else {
        Count::Fixed(1)
    };

    scene.num_of_subscenes = fields.shorts(count)?;

    scene.xypixsz = fields.floats_fixed()?;

    let locations = location_count(scene.num_of_subscenes.value(), dimension);
    scene.loc_of_subscenes = fields.floats(Count::Fixed(locations))?;

    scene.description = fields.text()?;

    Ok(scene)
}

//! Scene (scan data) information.

use bstr::BString;

use crate::field::Field;

/// Scan data: a multidimensional grid of density values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Number of dimensions of the scene.
    pub dimension: Field<i16>,
    /// Domain of the scene: the origin of the grid in absolute millimeter
    /// coordinates followed by one unit vector per axis, `(dimension + 1) *
    /// dimension` values in all.
    pub domain: Field<Vec<f32>>,
    /// Label of each axis, e.g. `x`, `y`, `z`, `t`.
    pub axis_label: Field<Vec<BString>>,
    /// Measurement unit of each axis: 0 for km, 1 for m, 2 for cm, 3 for mm,
    /// 4 for micron, 5 for sec, 6 for msec, 7 for microsec.
    pub measurement_unit: Field<Vec<i16>>,
    /// Number of density values per cell.
    pub num_of_density_values: Field<i16>,
    /// Measurement unit of each density value.
    pub density_measurement_unit: Field<Vec<i16>>,
    /// Smallest density value per cell component.
    pub smallest_density_value: Field<Vec<f32>>,
    /// Largest density value per cell component.
    pub largest_density_value: Field<Vec<f32>>,
    /// Number of integers in each cell.
    pub num_of_integers: Field<i16>,
    /// Whether each integer component is signed.
    pub signed_bits: Field<Vec<i16>>,
    /// Number of bits per cell.
    pub num_of_bits: Field<i16>,
    /// First and last bit of each cell component, most significant bit
    /// first.
    pub bit_fields: Field<Vec<i16>>,
    /// Number of dimensions along which cells are byte-aligned.
    pub dimension_in_alignment: Field<i16>,
    /// Alignment boundary in bytes.
    pub bytes_in_alignment: Field<i16>,
    /// Slice width and height in cells.
    pub xysize: Field<[i16; 2]>,
    /// Number of subscenes at each level above the slices: a single grand
    /// total for three-dimensional scenes, or a volume count followed by the
    /// slice count of each volume for four-dimensional scenes.
    pub num_of_subscenes: Field<Vec<i16>>,
    /// Cell spacing along x and y in measurement units.
    pub xypixsz: Field<[f32; 2]>,
    /// Location of each subscene along its axis.
    pub loc_of_subscenes: Field<Vec<f32>>,
    /// Description of this scene.
    pub description: Field<BString>,
}

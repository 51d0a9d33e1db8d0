//! Structure system information.

use bstr::BString;

use crate::field::Field;

/// Structure system data.
///
/// A structure system holds one or more structures (surfaces, shells, or
/// curves) extracted from scenes. Each structure is a list of terminal
/// structure elements (TSEs) organized by non-terminal structure elements
/// (NTSEs) such as trees of slices and rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Structure {
    /// Number of dimensions of the structure system.
    pub dimension: Field<i16>,
    /// Number of structures in the system.
    pub num_of_structures: Field<i16>,
    /// Domain of each structure: origin plus one unit vector per axis,
    /// `(dimension + 1) * dimension` values per structure.
    pub domain: Field<Vec<f32>>,
    /// Label of each axis.
    pub axis_label: Field<Vec<BString>>,
    /// Measurement unit of each axis.
    pub measurement_unit: Field<Vec<i16>>,
    /// Name of the scene file each structure came from.
    pub scene_file: Field<Vec<BString>>,
    /// Number of TSEs in each structure.
    pub num_of_tse: Field<Vec<i32>>,
    /// Number of NTSEs in each structure.
    pub num_of_ntse: Field<Vec<i32>>,
    /// Number of components in a TSE.
    pub num_of_components_in_tse: Field<i16>,
    /// Number of components in an NTSE.
    pub num_of_components_in_ntse: Field<i16>,
    /// Measurement unit of each TSE component.
    pub tse_measurement_unit: Field<Vec<i16>>,
    /// Measurement unit of each NTSE component.
    pub ntse_measurement_unit: Field<Vec<i16>>,
    /// Smallest value of each TSE component, per structure.
    pub smallest_value: Field<Vec<f32>>,
    /// Largest value of each TSE component, per structure.
    pub largest_value: Field<Vec<f32>>,
    /// Number of integers in a TSE.
    pub num_of_integers_in_tse: Field<i16>,
    /// Whether each TSE integer component is signed.
    pub signed_bits_in_tse: Field<Vec<i16>>,
    /// Number of bits per TSE.
    pub num_of_bits_in_tse: Field<i16>,
    /// First and last bit of each TSE component.
    pub bit_fields_in_tse: Field<Vec<i16>>,
    /// Number of integers in an NTSE.
    pub num_of_integers_in_ntse: Field<i16>,
    /// Whether each NTSE integer component is signed.
    pub signed_bits_in_ntse: Field<Vec<i16>>,
    /// Number of bits per NTSE.
    pub num_of_bits_in_ntse: Field<i16>,
    /// First and last bit of each NTSE component.
    pub bit_fields_in_ntse: Field<Vec<i16>>,
    /// Number of samples at each level above the slices, as for scene
    /// subscenes.
    pub num_of_samples: Field<Vec<i16>>,
    /// Sample width and height in cells.
    pub xysize: Field<[f32; 2]>,
    /// Location of each sample along its axis.
    pub loc_of_samples: Field<Vec<f32>>,
    /// Number of elements in the parameter vector of each structure.
    pub num_of_elements: Field<i16>,
    /// Description code of each parameter vector element.
    pub description_of_element: Field<Vec<i16>>,
    /// Parameter vector of each structure.
    pub parameter_vectors: Field<Vec<f32>>,
    /// Smallest and largest coordinate of each structure along each axis.
    pub min_max_coordinates: Field<Vec<f32>>,
    /// Volume of each structure.
    pub volume: Field<Vec<f32>>,
    /// Surface area of each structure.
    pub surface_area: Field<Vec<f32>>,
    /// Rate of change of volume of each structure.
    pub rate_of_change_volume: Field<Vec<f32>>,
    /// Description of this structure system.
    pub description: Field<BString>,
}

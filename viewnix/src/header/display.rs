//! Display (movie) information.

use bstr::BString;

use crate::field::Field;

/// Display data: a sequence of rendered images.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Display {
    /// Number of dimensions of the display data.
    pub dimension: Field<i16>,
    /// Measurement unit along x and y.
    pub measurement_unit: Field<[i16; 2]>,
    /// Number of elements (components) per pixel.
    pub num_of_elems: Field<i16>,
    /// Smallest value of each pixel component.
    pub smallest_value: Field<Vec<f32>>,
    /// Largest value of each pixel component.
    pub largest_value: Field<Vec<f32>>,
    /// Number of integers per pixel.
    pub num_of_integers: Field<i16>,
    /// Whether each integer component is signed.
    pub signed_bits: Field<Vec<i16>>,
    /// Number of bits per pixel.
    pub num_of_bits: Field<i16>,
    /// First and last bit of each pixel component.
    pub bit_fields: Field<Vec<i16>>,
    /// Number of dimensions along which pixels are byte-aligned.
    pub dimension_in_alignment: Field<i16>,
    /// Alignment boundary in bytes.
    pub bytes_in_alignment: Field<i16>,
    /// Number of images in the sequence.
    pub num_of_images: Field<i16>,
    /// Image width and height in pixels.
    pub xysize: Field<[i16; 2]>,
    /// Pixel spacing along x and y.
    pub xypixsz: Field<[f32; 2]>,
    /// Description of how the sequence was produced.
    pub specification_pv: Field<BString>,
    /// Parameter value of each image.
    pub pv: Field<Vec<i16>>,
    /// Description of this display data.
    pub description: Field<BString>,
}

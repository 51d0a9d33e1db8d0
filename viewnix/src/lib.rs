//! **viewnix** handles the reading and writing of the 3DVIEWNIX data header
//! format.
//!
//! A 3DVIEWNIX file stores a multidimensional medical imaging data set as a
//! tagged binary header followed by a data part. The header is a sequence of
//! big-endian `(group, element, length, body)` fields in nondecreasing tag
//! order, organized into length-prefixed groups in the manner of ACR-NEMA.
//! Three record kinds share a common general information section: scenes
//! (scan data), structure systems, and display data.

pub mod data_set_type;
pub mod error;
pub mod field;
pub mod header;
pub mod io;
pub mod spec;

pub use self::{
    data_set_type::{DataSetType, RecordKind},
    error::{Error, FieldError, FieldErrorKind},
    field::Field,
    header::Header,
};

/// The recognition code every header opens with.
pub const RECOGNITION_CODE: &[u8] = b"VIEWNIX1.0";

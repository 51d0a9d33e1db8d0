//! Header reading.

mod display;
mod field;
mod general;
mod scene;
mod structure;

use std::io::{Read, Seek, SeekFrom};

use bstr::BString;

use crate::{
    data_set_type::RecordKind,
    error::{Error, FieldError},
    header::{Body, Header},
    spec::Directory,
};

use self::field::FieldReader;
use super::num::{read_i16_be, read_u16_be, read_u32_be};

const IDENTIFICATION_GROUP: u16 = 0x0008;
const RECOGNITION_CODE_ELEMENT: u16 = 0x0010;
const DATA_SET_TYPE_ELEMENT: u16 = 0x0040;

pub(super) fn read_recognition_code<R>(reader: &mut R) -> Result<BString, Error>
where
    R: Read + Seek,
{
    let len = find_identification_element(reader, RECOGNITION_CODE_ELEMENT)?;

    let mut buf = vec![0; len as usize];
    reader.read_exact(&mut buf).map_err(Error::Read)?;

    if let Some(pos) = buf.iter().position(|&b| b == 0) {
        buf.truncate(pos);
    }

    Ok(buf.into())
}

pub(super) fn read_data_set_type<R>(reader: &mut R) -> Result<i16, Error>
where
    R: Read + Seek,
{
    let _len = find_identification_element(reader, DATA_SET_TYPE_ELEMENT)?;
    read_i16_be(reader).map_err(Error::Read)
}

// Scans forward from the current position to the given element of the
// identification group, skipping earlier groups via their group lengths, and
// returns the element's body length. Overshooting the element means the file
// does not carry it where the format requires it.
fn find_identification_element<R>(reader: &mut R, element: u16) -> Result<u32, Error>
where
    R: Read + Seek,
{
    let mut group = read_u16_be(reader).map_err(Error::Read)?;
    let mut elem = read_u16_be(reader).map_err(Error::Read)?;

    while group < IDENTIFICATION_GROUP {
        let _len = read_u32_be(reader).map_err(Error::Read)?;
        let group_length = read_u32_be(reader).map_err(Error::Read)?;

        reader
            .seek(SeekFrom::Current(i64::from(group_length)))
            .map_err(Error::Seek)?;

        group = read_u16_be(reader).map_err(Error::Read)?;
        elem = read_u16_be(reader).map_err(Error::Read)?;
    }

    if group > IDENTIFICATION_GROUP {
        return Err(Error::InvalidFormat);
    }

    while elem < element {
        let len = read_u32_be(reader).map_err(Error::Read)?;

        reader
            .seek(SeekFrom::Current(i64::from(len)))
            .map_err(Error::Seek)?;

        group = read_u16_be(reader).map_err(Error::Read)?;
        elem = read_u16_be(reader).map_err(Error::Read)?;

        if group > IDENTIFICATION_GROUP {
            return Err(Error::InvalidFormat);
        }
    }

    if elem > element {
        return Err(Error::InvalidFormat);
    }

    read_u32_be(reader).map_err(Error::Read)
}

pub(super) fn read_header<R>(
    reader: &mut R,
    directory: &Directory,
    kind: RecordKind,
) -> Result<(Header, Option<FieldError>), Error>
where
    R: Read + Seek,
{
    let mut fields = FieldReader::new(reader, directory);

    let general = general::read_general(&mut fields)?;

    let body = match kind {
        RecordKind::Scene => Body::Scene(scene::read_scene(&mut fields)?),
        RecordKind::Structure => Body::Structure(structure::read_structure(&mut fields)?),
        RecordKind::Display => Body::Display(display::read_display(&mut fields)?),
    };

    Ok((Header { general, body }, fields.finish()))
}

// Zeros with a unit vector per axis: the identity orientation, repeated per
// structure.
fn identity_domain(dimension: i32, copies: i32) -> Vec<f32> {
    let dimension = usize_len(dimension);
    let copies = usize_len(copies);
    let stride = dimension * (dimension + 1);

    let mut domain = vec![0.0; copies * stride];

    for copy in domain.chunks_exact_mut(stride) {
        let mut i = dimension;

        while i < stride {
            copy[i] = 1.0;
            i += dimension + 1;
        }
    }

    domain
}

// Total number of sample locations: the grand total plus, for
// four-dimensional data, the per-volume slice counts it indexes.
fn location_count(samples: &[i16], dimension: i32) -> i32 {
    let first = i32::from(samples.first().copied().unwrap_or_default());
    let mut total = first;

    if dimension == 4 {
        total += samples
            .iter()
            .skip(1)
            .take(usize_len(first))
            .map(|&n| i32::from(n))
            .sum::<i32>();
    }

    total
}

fn usize_len(n: i32) -> usize {
    usize::try_from(n).unwrap_or_default()
}
